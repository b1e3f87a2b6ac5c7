//! Path: native/soul_sim/src/config.rs
//! Summary: セッション設定（JSON で上書き可能、既定値は soul_core::constants）

use crate::error::ConfigError;
use serde::Deserialize;
use soul_core::constants::{
    CHEST_COOLDOWN_MS, DEFAULT_RNG_SEED, FIRST_WAVE_DELAY_MS, MAP_HEIGHT, MAP_WIDTH,
    SPAWN_MAX_DIST, TOTAL_WAVES, TRAP_COUNT, WAVE_COOLDOWN_MS, WAVE_QUOTAS,
};
use soul_core::util::MapBounds;

/// 実績を保存するキー
pub const ACHIEVEMENT_STORAGE_KEY: &str = "soulHunterAchievements";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub total_waves:         u32,
    pub wave_quotas:         Vec<u32>,
    pub wave_cooldown_ms:    f64,
    pub first_wave_delay_ms: f64,
    pub chest_cooldown_ms:   f64,
    pub starting_souls:      u32,
    pub trap_count:          usize,
    pub auto_fire:           bool,
    /// 残高が足りたら自動で武器を昇格する
    pub auto_upgrade:        bool,
    /// 内蔵の円判定で衝突エントリポイントを呼ぶ（外部物理層を使うなら false）
    pub builtin_collisions:  bool,
    pub rng_seed:            u64,
    pub storage_key:         String,
    pub map_width:           f32,
    pub map_height:          f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_waves:         TOTAL_WAVES,
            wave_quotas:         WAVE_QUOTAS.to_vec(),
            wave_cooldown_ms:    WAVE_COOLDOWN_MS,
            first_wave_delay_ms: FIRST_WAVE_DELAY_MS,
            chest_cooldown_ms:   CHEST_COOLDOWN_MS,
            starting_souls:      0,
            trap_count:          TRAP_COUNT,
            auto_fire:           true,
            auto_upgrade:        true,
            builtin_collisions:  true,
            rng_seed:            DEFAULT_RNG_SEED,
            storage_key:         ACHIEVEMENT_STORAGE_KEY.to_string(),
            map_width:           MAP_WIDTH,
            map_height:          MAP_HEIGHT,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn map_bounds(&self) -> MapBounds {
        MapBounds::new(self.map_width, self.map_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_waves == 0 {
            return Err(ConfigError::NonPositive("total_waves"));
        }
        if self.wave_quotas.len() != self.total_waves as usize {
            return Err(ConfigError::QuotaLength {
                expected: self.total_waves,
                actual:   self.wave_quotas.len(),
            });
        }
        if self.wave_quotas[0] == 0 {
            return Err(ConfigError::NonPositive("wave_quotas"));
        }
        if let Some(i) = self.wave_quotas.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ConfigError::QuotaNotIncreasing { wave: i + 2 });
        }
        if self.wave_cooldown_ms < 0.0 {
            return Err(ConfigError::NonPositive("wave_cooldown_ms"));
        }
        if self.map_width.is_nan() || self.map_width <= 0.0 {
            return Err(ConfigError::NonPositive("map_width"));
        }
        if self.map_height.is_nan() || self.map_height <= 0.0 {
            return Err(ConfigError::NonPositive("map_height"));
        }
        // スポーンリングの直径が収まること
        let min = SPAWN_MAX_DIST * 2.0;
        if self.map_width < min || self.map_height < min {
            return Err(ConfigError::MapTooSmall {
                width:  self.map_width,
                height: self.map_height,
                min,
            });
        }
        Ok(())
    }
}

//! Path: native/soul_sim/src/session/load.rs
//! Summary: セッション生成（設定検証・実績ストア接続）とフレーム更新・イベント drain

use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::game_logic::physics_step_inner;
use crate::progression::{KeyValueStore, MemoryStore};
use crate::world::{FrameEvent, GameWorld, GameWorldInner};

impl GameWorld {
    /// 実績をメモリ上にだけ保持するセッション
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    /// 設定を検証し、`store` から実績の解除状態を読み込んでセッションを始める
    pub fn with_store(config: SessionConfig, store: Box<dyn KeyValueStore>) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "session start: {} waves, seed {}, builtin collisions {}",
            config.total_waves,
            config.rng_seed,
            config.builtin_collisions
        );
        Ok(Self(GameWorldInner::new(config, store)))
    }

    pub fn from_config_json(json: &str, store: Box<dyn KeyValueStore>) -> Result<Self, ConfigError> {
        let config = SessionConfig::from_json(json)?;
        Self::with_store(config, store)
    }

    /// 1 フレーム進める。`now_ms` は単調増加する時刻、`delta_ms` は前フレームからの経過。
    pub fn update(&mut self, now_ms: f64, delta_ms: f64) {
        physics_step_inner(&mut self.0, now_ms, delta_ms);
    }

    /// このフレームまでに溜まったイベントを取り出す
    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        self.0.frame_events.drain(..).collect()
    }
}

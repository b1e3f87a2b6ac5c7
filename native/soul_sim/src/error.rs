//! Path: native/soul_sim/src/error.rs
//! Summary: 永続化・設定・スキル購入のエラー型

use soul_core::skill::SkillId;
use thiserror::Error;

/// 実績ストアの読み書きエラー。ゲームループでは致命的にしない。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failed for key `{key}`")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode stored value")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config json")]
    Parse(#[source] serde_json::Error),
    #[error("wave quota table has {actual} entries but total_waves is {expected}")]
    QuotaLength { expected: u32, actual: usize },
    #[error("wave quotas must be strictly increasing (wave {wave})")]
    QuotaNotIncreasing { wave: usize },
    #[error("`{0}` must be positive")]
    NonPositive(&'static str),
    #[error("map {width}x{height} is too small for the spawn ring (need at least {min} per side)")]
    MapTooSmall { width: f32, height: f32, min: f32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillError {
    #[error("unknown skill `{0}`")]
    UnknownSkill(String),
    #[error("skill {0:?} is already unlocked")]
    AlreadyUnlocked(SkillId),
    #[error("skill costs {cost} souls but only {balance} available")]
    InsufficientSouls { cost: u32, balance: u32 },
}

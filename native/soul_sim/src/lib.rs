//! Path: native/soul_sim/src/lib.rs
//! Summary: モジュール宣言と pub use のみ（公開 API は GameWorld に集約）

mod config;
mod error;
mod game_logic;
mod progression;
mod session;
mod snapshot;
mod world;

pub use config::{SessionConfig, ACHIEVEMENT_STORAGE_KEY};
pub use error::{ConfigError, SkillError, StoreError};
pub use game_logic::systems::combat::DamageOutcome;
pub use game_logic::{
    chase_velocity, enemies_within_into, find_nearest_enemy_within, integrate_enemy_motion,
    nearest_enemies_within,
};
pub use progression::{FileStore, KeyValueStore, MemoryStore, UnlockRecord};
pub use snapshot::{EnemyView, HudSnapshot, WeaponHud};
pub use world::{EnemyWorld, FrameEvent, GameWorld, WavePhase};

pub use soul_core;

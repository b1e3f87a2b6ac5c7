//! Path: native/soul_sim/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BulletWorld, HazardWorld, WaveDirector, GameWorld など）

mod bullet;
mod economy;
mod effect;
mod enemy;
mod frame_event;
mod game_world;
mod hazard;
mod player;
mod scheduler;
mod wave;
mod weapon_state;

pub use bullet::{
    render_kind_for, BulletWorld, BULLET_KIND_ENEMY, BULLET_KIND_PISTOL, BULLET_KIND_RIFLE,
    BULLET_KIND_SHOTGUN, BULLET_KIND_SNIPER,
};
pub use economy::Economy;
pub use effect::{DotEffect, ElementState, ElementalEffects, FreezeEffect};
pub use enemy::EnemyWorld;
pub use frame_event::FrameEvent;
pub use game_world::{GameWorld, GameWorldInner};
pub use hazard::{Chest, HazardWorld, Trap};
pub use player::PlayerState;
pub use scheduler::{ScheduledAction, Scheduler};
pub use wave::{SpawnBudget, WaveDirector, WavePhase, WaveTransition};
pub use weapon_state::{TemporaryOverride, WeaponState};

#[cfg(test)]
pub(crate) use game_world::test_world;

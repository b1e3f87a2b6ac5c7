//! Path: native/soul_sim/src/game_logic/mod.rs
//! Summary: 物理ステップ・敵クエリ・ゲームシステム

mod chase_ai;
mod physics_step;
pub(crate) mod systems;

pub use chase_ai::{
    chase_velocity, enemies_within_into, find_nearest_enemy_within, integrate_enemy_motion,
    nearest_enemies_within,
};
pub(crate) use physics_step::physics_step_inner;

//! Path: native/soul_sim/src/game_logic/systems/mod.rs
//! Summary: フレーム内で順に呼ぶゲームシステム

pub(crate) mod collision;
pub(crate) mod combat;
pub(crate) mod elements;
pub(crate) mod enemy_ai;
pub(crate) mod items;
pub(crate) mod progression;
pub(crate) mod spawn;
pub(crate) mod wave;
pub(crate) mod weapons;

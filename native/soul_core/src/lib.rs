//! Path: native/soul_core/src/lib.rs
//! Summary: ゲームコア共通ロジック（定数・敵・武器・属性・ソウル・実績・スキル・物理プリミティブ）

pub mod achievement;
pub mod constants;
pub mod element;
pub mod enemy;
pub mod item;
pub mod physics;
pub mod skill;
pub mod util;
pub mod weapon;

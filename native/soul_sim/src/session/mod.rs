//! Path: native/soul_sim/src/session/mod.rs
//! Summary: GameWorld の公開 API（生成・フレーム更新・入力とアクション・読み取り）

mod action;
mod load;
mod read;

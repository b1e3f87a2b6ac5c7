//! Path: native/soul_sim/src/game_logic/systems/spawn.rs
//! Summary: 敵のスポーン（ウェーブ予算に沿った定期スポーン・ボス強制スポーン）

use crate::world::{FrameEvent, GameWorldInner};
use soul_core::constants::{
    BOSS_SPAWN_DISTANCE, SPAWN_INTERVAL_MAX_MS, SPAWN_INTERVAL_MIN_MS, SPAWN_MARGIN,
};
use soul_core::enemy::{select_archetype, Archetype};
use soul_core::util::spawn_position_around_player;

/// 指定位置に敵を 1 体出す。ウェーブ進行中ならスポーン予算を 1 減らす。
pub(crate) fn spawn_enemy(
    w: &mut GameWorldInner,
    x: f32,
    y: f32,
    archetype: Archetype,
    scale: f32,
) -> usize {
    let index = w.enemies.spawn(x, y, archetype, scale);
    if w.waves.is_active() {
        w.spawn.consume();
    }
    log::debug!("spawned {} #{} at ({:.0}, {:.0})", archetype.name(), index, x, y);
    w.frame_events.push(FrameEvent::EnemySpawned { index, archetype });
    index
}

/// 予算が残っていれば間隔ごとにプレイヤー周囲へ 1 体スポーンする
pub(crate) fn update_spawning(w: &mut GameWorldInner) {
    if !w.waves.is_active() || w.spawn.remaining == 0 || w.now_ms <= w.spawn.next_spawn_at {
        return;
    }
    let pos = spawn_position_around_player(&mut w.rng, w.map, w.player.x, w.player.y);
    if pos.fallback {
        log::warn!(
            "spawn placement fell back to ({:.0}, {:.0}) after rejection limit",
            pos.x,
            pos.y
        );
    }
    let archetype = select_archetype(w.waves.number, &mut w.rng);
    spawn_enemy(w, pos.x, pos.y, archetype, 1.0);
    let interval = w.rng.range_f64(SPAWN_INTERVAL_MIN_MS, SPAWN_INTERVAL_MAX_MS);
    w.spawn.next_spawn_at = w.now_ms + interval;
}

/// プレイヤーから 300 離れたランダムな方向にボスを出す
pub(crate) fn spawn_boss(w: &mut GameWorldInner) -> usize {
    let angle = w.rng.angle();
    let (x, y) = w.map.clamp(
        w.player.x + angle.cos() * BOSS_SPAWN_DISTANCE,
        w.player.y + angle.sin() * BOSS_SPAWN_DISTANCE,
        SPAWN_MARGIN,
    );
    log::info!("boss spawned at ({:.0}, {:.0})", x, y);
    spawn_enemy(w, x, y, Archetype::Boss, 1.0)
}

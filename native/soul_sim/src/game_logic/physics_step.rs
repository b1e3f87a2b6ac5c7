//! Path: native/soul_sim/src/game_logic/physics_step.rs
//! Summary: 1 フレーム分のシミュレーション（各システムを固定順で呼ぶ）

use super::chase_ai::integrate_enemy_motion;
use super::systems::collision::update_collisions;
use super::systems::elements::update_elements;
use super::systems::enemy_ai::{update_enemy_ai, update_enemy_specials};
use super::systems::items::{update_chests, update_souls};
use super::systems::progression::update_progression;
use super::systems::spawn::update_spawning;
use super::systems::wave::update_waves;
use super::systems::weapons::{update_scheduled_actions, update_weapons};
use crate::world::GameWorldInner;
use soul_core::constants::FRAME_BUDGET_MS;

/// 1 フレーム進める。ゲームオーバー後は何もしない。
///
/// 順序: 遅延アクション → プレイヤー → 武器 → 弾・衝突 → 敵 → 属性 → アイテム → 成長 → ウェーブ
pub(crate) fn physics_step_inner(w: &mut GameWorldInner, now_ms: f64, delta_ms: f64) {
    if !w.session_active {
        return;
    }
    // trace にしておき、RUST_LOG=trace のときだけ毎フレーム出力
    log::trace!("physics_step: now={}ms delta={}ms frame_id={}", now_ms, delta_ms, w.frame_id);
    let t_start = std::time::Instant::now();

    w.frame_id += 1;
    w.now_ms = now_ms;
    w.elapsed_ms += delta_ms;
    let dt = delta_ms as f32 / 1000.0;

    update_scheduled_actions(w);

    w.player.integrate(dt, w.map);

    update_weapons(w);

    w.bullets.advance(dt, delta_ms, w.map.width, w.map.height);
    w.enemy_bullets.advance(dt, delta_ms, w.map.width, w.map.height);
    if w.config.builtin_collisions {
        update_collisions(w);
    }

    if w.session_active {
        update_spawning(w);
        update_enemy_ai(w);
        update_enemy_specials(w);
        integrate_enemy_motion(&mut w.enemies, dt, w.map);

        update_elements(w, delta_ms);
    }

    if w.session_active {
        update_souls(w, dt);
        update_chests(w);
        update_progression(w);
        update_waves(w);
    }

    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
    w.last_frame_time_ms = elapsed_ms;
    if elapsed_ms > FRAME_BUDGET_MS {
        log::warn!(
            "frame budget exceeded: {:.2}ms (enemies: {})",
            elapsed_ms,
            w.enemies.count
        );
    }
}

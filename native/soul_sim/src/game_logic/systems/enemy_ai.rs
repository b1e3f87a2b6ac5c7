//! Path: native/soul_sim/src/game_logic/systems/enemy_ai.rs
//! Summary: 敵の行動（追跡・徘徊・ダッシュ・射撃・テレポート）と特殊能力（透明化・回復）

use crate::game_logic::chase_ai::{chase_velocity, enemies_within_into};
use crate::world::{FrameEvent, GameWorldInner, BULLET_KIND_ENEMY};
use soul_core::constants::{
    CHASE_DISTANCE, DASH_CHANCE, DASH_MULTIPLIER, ENEMY_BULLET_DAMAGE, ENEMY_BULLET_LIFETIME_MS,
    ENEMY_BULLET_SPEED, HEAL_AMOUNT, HEAL_INTERVAL_MS, HEAL_MAX_TARGETS, HEAL_RADIUS,
    SPAWN_MARGIN, SPAWN_MAX_ATTEMPTS, STEALTH_ALPHA, STEALTH_CYCLE_MS, STEALTH_HIDDEN_MS,
    TELEPORT_RADIUS, WANDER_MAX_MS, WANDER_MIN_MS, WANDER_SPEED,
};
use soul_core::enemy::{Archetype, AttackType};
use soul_core::util::{dist_sq, random_point_in_circle, sample_with_rejection};

const ENEMY_BULLET_COLOR: u32 = 0xff0000;

/// 全敵の速度を決める（位置の積分は `integrate_enemy_motion`）
pub(crate) fn update_enemy_ai(w: &mut GameWorldInner) {
    let px = w.player.x;
    let py = w.player.y;
    let chase_sq = CHASE_DISTANCE * CHASE_DISTANCE;

    for i in 0..w.enemies.len() {
        if !w.enemies.alive[i] {
            continue;
        }
        let ex = w.enemies.positions_x[i];
        let ey = w.enemies.positions_y[i];
        let speed = w.enemies.speeds[i] * w.enemies.speed_factor[i];

        let (vx, vy) = if dist_sq(ex, ey, px, py) < chase_sq {
            let (mut vx, mut vy) = chase_velocity(ex, ey, px, py, speed);
            if w.enemies.archetypes[i] == Archetype::Elite && w.rng.chance(DASH_CHANCE) {
                vx *= DASH_MULTIPLIER;
                vy *= DASH_MULTIPLIER;
            }
            if w.now_ms >= w.enemies.next_attack_at[i] {
                attack(w, i);
            }
            (vx, vy)
        } else {
            if w.now_ms >= w.enemies.wander_until[i] {
                w.enemies.wander_angle[i] = w.rng.angle();
                w.enemies.wander_until[i] = w.now_ms + w.rng.range_f64(WANDER_MIN_MS, WANDER_MAX_MS);
            }
            let angle = w.enemies.wander_angle[i];
            let wander = WANDER_SPEED * w.enemies.speed_factor[i];
            (angle.cos() * wander, angle.sin() * wander)
        };

        w.enemies.velocities_x[i] = vx;
        w.enemies.velocities_y[i] = vy;
        if vx.abs() > 0.001 {
            w.enemies.facing_left[i] = vx < 0.0;
        }
    }
}

/// 攻撃方式ごとの定期行動。近接・自爆は接触判定側で扱う。
fn attack(w: &mut GameWorldInner, i: usize) {
    let archetype = w.enemies.archetypes[i];
    match w.enemies.attack_types[i] {
        AttackType::Range => {
            let ex = w.enemies.positions_x[i];
            let ey = w.enemies.positions_y[i];
            let (vx, vy) = chase_velocity(ex, ey, w.player.x, w.player.y, ENEMY_BULLET_SPEED);
            w.enemy_bullets.spawn(
                ex,
                ey,
                vx,
                vy,
                ENEMY_BULLET_DAMAGE,
                ENEMY_BULLET_LIFETIME_MS,
                None,
                ENEMY_BULLET_COLOR,
                BULLET_KIND_ENEMY,
            );
            w.frame_events.push(FrameEvent::EnemyFired { index: i });
        }
        AttackType::Teleport => {
            let (px, py) = (w.player.x, w.player.y);
            let map = w.map;
            let sample = sample_with_rejection(
                &mut w.rng,
                SPAWN_MAX_ATTEMPTS,
                |rng| random_point_in_circle(rng, px, py, TELEPORT_RADIUS),
                |x, y| map.contains(x, y, SPAWN_MARGIN),
            );
            let (x, y) = map.clamp(sample.x, sample.y, SPAWN_MARGIN);
            if sample.fallback {
                log::warn!("teleport target clamped to ({:.0}, {:.0})", x, y);
            }
            w.enemies.positions_x[i] = x;
            w.enemies.positions_y[i] = y;
            w.frame_events.push(FrameEvent::EnemyTeleported { index: i, x, y });
        }
        AttackType::Melee | AttackType::Suicide => return,
    }
    w.enemies.next_attack_at[i] = w.now_ms + archetype.params().attack_interval;
}

/// 透明化の周期と回復役の回復
pub(crate) fn update_enemy_specials(w: &mut GameWorldInner) {
    let hidden = w.now_ms.rem_euclid(STEALTH_CYCLE_MS) < STEALTH_HIDDEN_MS;
    let mut targets = std::mem::take(&mut w.enemies.neighbor_buf);
    // 同じティック内で回復は重ならない
    let len = w.enemies.len();
    w.enemies.heal_marks.clear();
    w.enemies.heal_marks.resize(len, false);

    for i in 0..len {
        if !w.enemies.alive[i] {
            continue;
        }
        match w.enemies.archetypes[i] {
            Archetype::Invisible => {
                w.enemies.alpha[i] = if hidden { STEALTH_ALPHA } else { 1.0 };
            }
            Archetype::Healer if w.now_ms >= w.enemies.next_heal_at[i] => {
                w.enemies.next_heal_at[i] = w.now_ms + HEAL_INTERVAL_MS;
                let hx = w.enemies.positions_x[i];
                let hy = w.enemies.positions_y[i];
                enemies_within_into(&w.enemies, hx, hy, HEAL_RADIUS, Some(i), &mut targets);
                targets.retain(|&j| {
                    !w.enemies.heal_marks[j] && w.enemies.hp[j] < w.enemies.max_hp[j]
                });
                targets.sort_by(|&a, &b| {
                    let da = dist_sq(w.enemies.positions_x[a], w.enemies.positions_y[a], hx, hy);
                    let db = dist_sq(w.enemies.positions_x[b], w.enemies.positions_y[b], hx, hy);
                    da.total_cmp(&db)
                });
                targets.truncate(HEAL_MAX_TARGETS);
                for &j in &targets {
                    w.enemies.hp[j] = (w.enemies.hp[j] + HEAL_AMOUNT).min(w.enemies.max_hp[j]);
                    w.enemies.heal_marks[j] = true;
                    w.frame_events.push(FrameEvent::EnemyHealed { index: j });
                }
            }
            _ => {}
        }
    }
    w.enemies.neighbor_buf = targets;
}

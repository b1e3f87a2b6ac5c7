//! Path: native/soul_sim/src/game_logic/chase_ai.rs
//! Summary: 敵の最近接探索・範囲クエリと移動積分（rayon で並列化）

use crate::world::EnemyWorld;
use rayon::prelude::*;
use soul_core::util::{dist_sq, MapBounds};

/// `range` 未満の距離にいる最も近い生存敵
pub fn find_nearest_enemy_within(enemies: &EnemyWorld, px: f32, py: f32, range: f32) -> Option<usize> {
    let mut min_dist = range * range;
    let mut nearest = None;
    for i in enemies.iter_alive() {
        let d = dist_sq(enemies.positions_x[i], enemies.positions_y[i], px, py);
        if d < min_dist {
            min_dist = d;
            nearest = Some(i);
        }
    }
    nearest
}

/// (x, y) から `radius` 以内の生存敵を `buf` に書き込む（`exclude` は除外）
pub fn enemies_within_into(
    enemies: &EnemyWorld,
    x: f32,
    y: f32,
    radius: f32,
    exclude: Option<usize>,
    buf: &mut Vec<usize>,
) {
    buf.clear();
    let r_sq = radius * radius;
    buf.extend(enemies.iter_alive().filter(|&i| {
        Some(i) != exclude && dist_sq(enemies.positions_x[i], enemies.positions_y[i], x, y) <= r_sq
    }));
}

/// `radius` 以内の生存敵を近い順に最大 `max` 体（Lightning チェーン・回復対象用）
pub fn nearest_enemies_within(
    enemies: &EnemyWorld,
    x: f32,
    y: f32,
    radius: f32,
    exclude: Option<usize>,
    max: usize,
    buf: &mut Vec<usize>,
) {
    enemies_within_into(enemies, x, y, radius, exclude, buf);
    buf.sort_by(|&a, &b| {
        let da = dist_sq(enemies.positions_x[a], enemies.positions_y[a], x, y);
        let db = dist_sq(enemies.positions_x[b], enemies.positions_y[b], x, y);
        da.total_cmp(&db)
    });
    buf.truncate(max);
}

/// 速度で位置を進め、マップ内に収める（rayon で並列化）
pub fn integrate_enemy_motion(enemies: &mut EnemyWorld, dt: f32, map: MapBounds) {
    let len = enemies.len();
    let positions_x  = &mut enemies.positions_x[..len];
    let positions_y  = &mut enemies.positions_y[..len];
    let velocities_x = &enemies.velocities_x[..len];
    let velocities_y = &enemies.velocities_y[..len];
    let alive        = &enemies.alive[..len];

    (positions_x, positions_y, velocities_x, velocities_y, alive)
        .into_par_iter()
        .for_each(|(px, py, vx, vy, is_alive)| {
            if !*is_alive {
                return;
            }
            *px = (*px + *vx * dt).clamp(0.0, map.width);
            *py = (*py + *vy * dt).clamp(0.0, map.height);
        });
}

/// 追跡速度ベクトル（プレイヤー方向 × speed）
#[inline]
pub fn chase_velocity(ex: f32, ey: f32, px: f32, py: f32, speed: f32) -> (f32, f32) {
    let dx = px - ex;
    let dy = py - ey;
    let dist = (dx * dx + dy * dy).sqrt().max(0.001);
    ((dx / dist) * speed, (dy / dist) * speed)
}

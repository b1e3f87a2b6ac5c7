//! Path: native/soul_sim/src/game_logic/systems/collision.rs
//! Summary: 内蔵の円判定（Spatial Hash）。重なりを検出して戦闘・アイテムのエントリポイントを呼ぶ。

use super::combat::{
    on_bullet_hit_enemy, on_player_enemy_bullet, on_player_enemy_contact, on_player_trap,
};
use super::items::{collect_soul, open_chest};
use crate::world::GameWorldInner;
use soul_core::constants::{BULLET_RADIUS, CHEST_RADIUS, PLAYER_RADIUS, SOUL_RADIUS};
use soul_core::util::dist_sq;

/// 全ての重なりを判定する。途中でゲームオーバーになったら打ち切る。
pub(crate) fn update_collisions(w: &mut GameWorldInner) {
    w.rebuild_collision();
    let mut candidates: Vec<usize> = Vec::new();

    bullets_vs_enemies(w, &mut candidates);
    if !w.session_active {
        return;
    }
    player_vs_enemies(w, &mut candidates);
    if !w.session_active {
        return;
    }
    player_vs_enemy_bullets(w);
    if !w.session_active {
        return;
    }
    player_vs_traps(w, &mut candidates);
    if !w.session_active {
        return;
    }
    player_vs_pickups(w);
}

fn bullets_vs_enemies(w: &mut GameWorldInner, candidates: &mut Vec<usize>) {
    let query_r = BULLET_RADIUS + w.enemies.max_radius;
    for b in 0..w.bullets.len() {
        if !w.bullets.is_alive(b) {
            continue;
        }
        let bx = w.bullets.positions_x[b];
        let by = w.bullets.positions_y[b];
        w.collision.dynamic.query_nearby_into(bx, by, query_r, candidates);
        let hit = candidates.iter().copied().find(|&e| {
            let hit_r = BULLET_RADIUS + w.enemies.radius[e];
            w.enemies.is_alive(e)
                && dist_sq(bx, by, w.enemies.positions_x[e], w.enemies.positions_y[e]) < hit_r * hit_r
        });
        if let Some(e) = hit {
            on_bullet_hit_enemy(w, b, e);
        }
    }
}

fn player_vs_enemies(w: &mut GameWorldInner, candidates: &mut Vec<usize>) {
    let (px, py) = (w.player.x, w.player.y);
    let query_r = PLAYER_RADIUS + w.enemies.max_radius;
    w.collision.dynamic.query_nearby_into(px, py, query_r, candidates);
    for &e in candidates.iter() {
        if !w.enemies.is_alive(e) {
            continue;
        }
        let hit_r = PLAYER_RADIUS + w.enemies.radius[e];
        if dist_sq(px, py, w.enemies.positions_x[e], w.enemies.positions_y[e]) < hit_r * hit_r {
            on_player_enemy_contact(w, e);
            if !w.session_active {
                return;
            }
        }
    }
}

fn player_vs_enemy_bullets(w: &mut GameWorldInner) {
    let (px, py) = (w.player.x, w.player.y);
    let hit_r = PLAYER_RADIUS + BULLET_RADIUS;
    for b in 0..w.enemy_bullets.len() {
        if !w.enemy_bullets.is_alive(b) {
            continue;
        }
        let d = dist_sq(px, py, w.enemy_bullets.positions_x[b], w.enemy_bullets.positions_y[b]);
        if d < hit_r * hit_r {
            on_player_enemy_bullet(w, b);
            if !w.session_active {
                return;
            }
        }
    }
}

fn player_vs_traps(w: &mut GameWorldInner, candidates: &mut Vec<usize>) {
    let (px, py) = (w.player.x, w.player.y);
    w.collision.query_static_overlaps_into(px, py, PLAYER_RADIUS, candidates);
    for &t in candidates.iter() {
        on_player_trap(w, t);
        if !w.session_active {
            return;
        }
    }
}

fn player_vs_pickups(w: &mut GameWorldInner) {
    let (px, py) = (w.player.x, w.player.y);

    let soul_r = PLAYER_RADIUS + SOUL_RADIUS;
    for s in 0..w.souls.len() {
        if w.souls.is_alive(s)
            && dist_sq(px, py, w.souls.positions_x[s], w.souls.positions_y[s]) < soul_r * soul_r
        {
            collect_soul(w, s);
        }
    }

    let chest_r = PLAYER_RADIUS + CHEST_RADIUS;
    let touched: Vec<usize> = w
        .hazards
        .open_chests()
        .filter(|(_, c)| dist_sq(px, py, c.x, c.y) < chest_r * chest_r)
        .map(|(i, _)| i)
        .collect();
    for i in touched {
        open_chest(w, i);
    }
}

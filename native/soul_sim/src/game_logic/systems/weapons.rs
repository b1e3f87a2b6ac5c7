//! Path: native/soul_sim/src/game_logic/systems/weapons.rs
//! Summary: 武器の発射（自動照準・手動）・昇格・一時武器と遅延アクションの実行

use super::progression::check_achievement;
use crate::game_logic::chase_ai::find_nearest_enemy_within;
use crate::world::{render_kind_for, FrameEvent, GameWorldInner, ScheduledAction};
use soul_core::achievement::AchievementCategory;
use soul_core::constants::PLAYER_BULLET_LIFETIME_MS;

/// 自動昇格と自動照準射撃
pub(crate) fn update_weapons(w: &mut GameWorldInner) {
    if w.config.auto_upgrade {
        try_upgrade(w);
    }
    if !w.weapon.auto_fire || !w.weapon.can_fire(w.now_ms) {
        return;
    }
    let (px, py) = (w.player.x, w.player.y);
    let range = w.weapon.tier().range;
    let Some(target) = find_nearest_enemy_within(&w.enemies, px, py, range) else {
        return;
    };
    let tx = w.enemies.positions_x[target];
    let ty = w.enemies.positions_y[target];
    w.player.facing_left = tx < px;
    let aim = (ty - py).atan2(tx - px);
    emit_projectiles(w, aim, true);
}

/// 手動射撃。射程内に敵がいればそちらへ、いなければ向いている方向へ撃つ。
pub(crate) fn fire(w: &mut GameWorldInner) -> bool {
    if !w.session_active || !w.weapon.can_fire(w.now_ms) {
        return false;
    }
    let (px, py) = (w.player.x, w.player.y);
    let range = w.weapon.tier().range;
    let aim = match find_nearest_enemy_within(&w.enemies, px, py, range) {
        Some(target) => {
            let tx = w.enemies.positions_x[target];
            let ty = w.enemies.positions_y[target];
            w.player.facing_left = tx < px;
            (ty - py).atan2(tx - px)
        }
        None if w.player.facing_left => std::f32::consts::PI,
        None => 0.0,
    };
    emit_projectiles(w, aim, false);
    true
}

/// 現在のティアの弾を `aim` 方向へ出し、発射クールダウンを開始する
fn emit_projectiles(w: &mut GameWorldInner, aim: f32, jitter: bool) {
    let tier = w.weapon.tier();
    let bullet_type = tier.bullet_type;
    let speed = bullet_type.speed();
    let damage = w.weapon.projectile_damage();
    let element = w.elements.active;
    let color = element.map_or(tier.color, |e| e.color());
    let kind = render_kind_for(bullet_type);
    let (px, py) = (w.player.x, w.player.y);

    for &offset in bullet_type.spread_offsets() {
        let spread = if jitter { bullet_type.roll_jitter(&mut w.rng) } else { 0.0 };
        let angle = aim + offset + spread;
        w.bullets.spawn(
            px,
            py,
            angle.cos() * speed,
            angle.sin() * speed,
            damage,
            PLAYER_BULLET_LIFETIME_MS,
            element,
            color,
            kind,
        );
    }
    w.weapon.mark_fired(w.now_ms);
}

/// 残高で次のティアを買えれば昇格して引き落とす。支払ったコスト（0 は失敗）を返す。
pub(crate) fn try_upgrade(w: &mut GameWorldInner) -> u32 {
    let cost = w.weapon.upgrade(w.economy.souls);
    if cost == 0 {
        return 0;
    }
    w.economy.spend(cost);
    let tier = w.weapon.permanent_tier;
    log::info!("weapon upgraded to {} for {} souls", w.weapon.tier().name, cost);
    w.frame_events.push(FrameEvent::WeaponUpgraded { tier, cost });
    check_achievement(w, AchievementCategory::WeaponLevel, tier as u64);
    cost
}

/// 一時武器を装備し、`duration_ms` 後の解除を予約する
pub(crate) fn set_temporary_weapon(w: &mut GameWorldInner, tier: usize, duration_ms: f64) {
    let token = w.weapon.set_temporary(tier);
    let tier = w.weapon.current_tier();
    w.scheduler.schedule(w.now_ms + duration_ms, ScheduledAction::RevertTemporaryWeapon { token });
    log::debug!("temporary weapon {} for {:.0}ms", w.weapon.tier().name, duration_ms);
    w.frame_events.push(FrameEvent::TemporaryWeapon { tier, duration_ms });
}

/// 期限が来た遅延アクションを実行する。セッション終了後は何もしない。
pub(crate) fn update_scheduled_actions(w: &mut GameWorldInner) {
    if !w.session_active {
        return;
    }
    for action in w.scheduler.take_due(w.now_ms) {
        match action {
            ScheduledAction::RevertTemporaryWeapon { token } => {
                if w.weapon.revert_temporary(token) {
                    let tier = w.weapon.current_tier();
                    w.frame_events.push(FrameEvent::WeaponReverted { tier });
                }
            }
        }
    }
}

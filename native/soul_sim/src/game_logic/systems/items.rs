//! Path: native/soul_sim/src/game_logic/systems/items.rs
//! Summary: ソウルのドロップ・吸い寄せ・消滅・収集、宝箱の出現と開封

use super::elements::set_active_element;
use super::progression::check_achievement;
use super::weapons::set_temporary_weapon;
use crate::world::{FrameEvent, GameWorldInner};
use soul_core::achievement::AchievementCategory;
use soul_core::constants::{
    BOSS_REWARD_RADIUS, BOSS_REWARD_SOULS, CHEST_MIN_PLAYER_DIST, HAZARD_MARGIN,
    MAGNET_MAX_SPEED, MAGNET_MIN_SPEED, SOUL_DROP_SPREAD, SPAWN_MAX_ATTEMPTS,
};
use soul_core::element::Element;
use soul_core::enemy::DropTier;
use soul_core::item::{roll_boss_reward_rarity, ChestReward, SoulRarity};
use soul_core::skill::{SkillId, LUCKY_CHEST_STEP_FACTOR, LUCKY_PROMOTE_CHANCE};
use soul_core::util::{dist_sq, random_point_in_circle, sample_with_rejection};

/// 宝箱から出る legendary ソウルの散らばり半径
const CHEST_SOUL_RADIUS: f32 = 50.0;

fn drop_soul(w: &mut GameWorldInner, x: f32, y: f32, rarity: SoulRarity) {
    w.souls.spawn(x, y, rarity, w.now_ms);
    w.frame_events.push(FrameEvent::SoulDropped { rarity, x, y });
}

/// 撃破位置の周囲 ±30 にドロップ階級に応じたソウルを落とす
pub(crate) fn spawn_drops(w: &mut GameWorldInner, x: f32, y: f32, tier: DropTier) {
    let lucky = w.progression.skills.has_skill(SkillId::LuckyFinder);
    let count = tier.roll_soul_count(&mut w.rng);
    for _ in 0..count {
        let mut rarity = tier.roll_rarity(&mut w.rng);
        if lucky && w.rng.chance(LUCKY_PROMOTE_CHANCE) {
            rarity = rarity.promoted();
        }
        let sx = x + w.rng.range_f32(-SOUL_DROP_SPREAD, SOUL_DROP_SPREAD);
        let sy = y + w.rng.range_f32(-SOUL_DROP_SPREAD, SOUL_DROP_SPREAD);
        drop_soul(w, sx, sy, rarity);
    }
}

/// ボス撃破報酬: 半径 100 以内に epic / legendary を 20 個
pub(crate) fn spawn_boss_reward(w: &mut GameWorldInner, x: f32, y: f32) {
    for _ in 0..BOSS_REWARD_SOULS {
        let rarity = roll_boss_reward_rarity(&mut w.rng);
        let (sx, sy) = random_point_in_circle(&mut w.rng, x, y, BOSS_REWARD_RADIUS);
        drop_soul(w, sx, sy, rarity);
    }
}

/// 寿命切れのソウルを消し、収集半径内のソウルをプレイヤーへ引き寄せる
pub(crate) fn update_souls(w: &mut GameWorldInner, dt: f32) {
    let (px, py) = (w.player.x, w.player.y);
    let radius = w.economy.collect_radius();
    for i in 0..w.souls.len() {
        if !w.souls.alive[i] {
            continue;
        }
        if w.now_ms >= w.souls.expires_at[i] {
            w.souls.kill(i);
            continue;
        }
        let dx = px - w.souls.positions_x[i];
        let dy = py - w.souls.positions_y[i];
        let dist = (dx * dx + dy * dy).sqrt();
        if dist >= radius || dist < 0.001 {
            continue;
        }
        // 近いほど速い（100 → 500）
        let closeness = 1.0 - dist / radius;
        let speed = MAGNET_MIN_SPEED + (MAGNET_MAX_SPEED - MAGNET_MIN_SPEED) * closeness;
        let step = (speed * dt).min(dist);
        w.souls.positions_x[i] += dx / dist * step;
        w.souls.positions_y[i] += dy / dist * step;
    }
}

/// ソウルを拾う。残高と収集実績カウンタに価値を加える。
pub(crate) fn collect_soul(w: &mut GameWorldInner, i: usize) {
    if !w.souls.is_alive(i) {
        return;
    }
    let rarity = w.souls.rarities[i];
    let value = rarity.value();
    w.souls.kill(i);
    w.economy.add_souls(value);
    w.progression.souls_collected += value as u64;
    w.frame_events.push(FrameEvent::SoulCollected { rarity, value });
    let collected = w.progression.souls_collected;
    check_achievement(w, AchievementCategory::CollectSouls, collected);
}

/// 残高がしきい値に届き、クールダウンが明けていれば宝箱を出す
pub(crate) fn update_chests(w: &mut GameWorldInner) {
    if !w.economy.chest_ready(w.now_ms) {
        return;
    }
    let (px, py) = (w.player.x, w.player.y);
    let map = w.map;
    let min_sq = CHEST_MIN_PLAYER_DIST * CHEST_MIN_PLAYER_DIST;
    let pos = sample_with_rejection(
        &mut w.rng,
        SPAWN_MAX_ATTEMPTS,
        |rng| map.random_point(rng, HAZARD_MARGIN),
        |x, y| dist_sq(x, y, px, py) >= min_sq,
    );
    if pos.fallback {
        log::warn!("chest placement fell back to ({:.0}, {:.0})", pos.x, pos.y);
    }
    w.hazards.spawn_chest(pos.x, pos.y);
    let step_factor = if w.progression.skills.has_skill(SkillId::LuckyFinder) {
        LUCKY_CHEST_STEP_FACTOR
    } else {
        1.0
    };
    let cooldown = w.config.chest_cooldown_ms;
    w.economy.advance_chest(w.now_ms, cooldown, step_factor);
    log::debug!(
        "chest at ({:.0}, {:.0}); next threshold {}",
        pos.x,
        pos.y,
        w.economy.next_chest_threshold
    );
    w.frame_events.push(FrameEvent::ChestSpawned { x: pos.x, y: pos.y });
}

/// 宝箱を開けて報酬を 1 つ適用する
pub(crate) fn open_chest(w: &mut GameWorldInner, i: usize) {
    if !w.hazards.collect_chest(i) {
        return;
    }
    let (cx, cy) = (w.hazards.chests[i].x, w.hazards.chests[i].y);
    let reward = ChestReward::roll(&mut w.rng);
    log::debug!("chest opened: {:?}", reward);
    match reward {
        ChestReward::Souls(amount) => w.economy.add_souls(amount),
        ChestReward::Heal(amount) => {
            let healed = w.player.heal(amount);
            w.frame_events.push(FrameEvent::PlayerHealed { amount: healed });
        }
        ChestReward::LegendarySouls(count) => {
            for _ in 0..count {
                let (sx, sy) = random_point_in_circle(&mut w.rng, cx, cy, CHEST_SOUL_RADIUS);
                drop_soul(w, sx, sy, SoulRarity::Legendary);
            }
        }
        ChestReward::TemporaryWeapon { tier, duration_ms } => {
            set_temporary_weapon(w, tier, duration_ms);
        }
        ChestReward::RandomElement => {
            let element = Element::random(&mut w.rng);
            set_active_element(w, Some(element));
        }
    }
    w.frame_events.push(FrameEvent::ChestOpened { reward });
}

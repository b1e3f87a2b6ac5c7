//! Path: native/soul_sim/src/game_logic/systems/elements.rs
//! Summary: 属性エフェクト（付与・継続ダメージ tick・凍結解除）と即時反応（連鎖雷・毒飛散）

use super::combat::{apply_damage, resolve_deaths};
use super::progression::check_achievement;
use crate::game_logic::chase_ai::{enemies_within_into, nearest_enemies_within};
use crate::world::{DotEffect, FrameEvent, FreezeEffect, GameWorldInner};
use soul_core::achievement::AchievementCategory;
use soul_core::element::{
    dot_tick_damage, Element, BURN_DURATION_MS, BURN_FRACTION, BURN_INTERVAL_MS, CHAIN_FRACTION,
    CHAIN_RADIUS, CHAIN_TARGETS, FREEZE_DURATION_MS, FREEZE_FACTOR, POISON_DURATION_MS,
    POISON_FRACTION, POISON_INTERVAL_MS, POISON_SPLASH_FRACTION, POISON_SPLASH_RADIUS,
};

/// 武器の属性を切り替える。初めて使う属性なら useElements を判定する。
pub(crate) fn set_active_element(w: &mut GameWorldInner, element: Option<Element>) {
    w.elements.active = element;
    w.frame_events.push(FrameEvent::ElementChanged { element });
    if let Some(e) = element {
        log::debug!("active element: {}", e.name());
        if w.progression.used_elements.insert(e) {
            let used = w.progression.used_elements.len() as u64;
            check_achievement(w, AchievementCategory::UseElements, used);
        }
    }
}

/// 属性弾の命中後処理。`damage` は弾の基本ダメージ。
/// 撃破されていれば自身へのエフェクトは付かないが、周囲への反応は起こる。
pub(crate) fn apply_element_on_hit(
    w: &mut GameWorldInner,
    target: usize,
    element: Element,
    damage: i32,
    hit_x: f32,
    hit_y: f32,
) {
    match element {
        Element::Fire => apply_burning(w, target, damage),
        Element::Ice => apply_frozen(w, target),
        Element::Lightning => {
            let mut chained = std::mem::take(&mut w.query_buf);
            nearest_enemies_within(
                &w.enemies,
                hit_x,
                hit_y,
                CHAIN_RADIUS,
                Some(target),
                CHAIN_TARGETS,
                &mut chained,
            );
            for &i in &chained {
                w.frame_events.push(FrameEvent::ChainLightning { from: target, to: i });
                apply_damage(w, i, damage as f32 * CHAIN_FRACTION);
            }
            w.query_buf = chained;
        }
        Element::Poison => {
            let mut splashed = std::mem::take(&mut w.query_buf);
            enemies_within_into(
                &w.enemies,
                hit_x,
                hit_y,
                POISON_SPLASH_RADIUS,
                Some(target),
                &mut splashed,
            );
            for &i in &splashed {
                apply_damage(w, i, damage as f32 * POISON_SPLASH_FRACTION);
            }
            apply_poisoned(w, target, damage);
            for &i in &splashed {
                apply_poisoned(w, i, damage);
            }
            w.query_buf = splashed;
        }
    }
}

fn apply_burning(w: &mut GameWorldInner, i: usize, damage: i32) {
    if !w.enemies.is_alive(i) {
        return;
    }
    w.enemies.effects[i].burning = Some(DotEffect {
        remaining_ms:     w.elements.scaled(BURN_DURATION_MS),
        tick_interval_ms: BURN_INTERVAL_MS,
        last_tick_ms:     w.now_ms,
        magnitude:        dot_tick_damage(damage, BURN_FRACTION),
    });
    w.frame_events.push(FrameEvent::EffectApplied { index: i, element: Element::Fire });
}

fn apply_poisoned(w: &mut GameWorldInner, i: usize, damage: i32) {
    if !w.enemies.is_alive(i) {
        return;
    }
    w.enemies.effects[i].poisoned = Some(DotEffect {
        remaining_ms:     w.elements.scaled(POISON_DURATION_MS),
        tick_interval_ms: POISON_INTERVAL_MS,
        last_tick_ms:     w.now_ms,
        magnitude:        dot_tick_damage(damage, POISON_FRACTION),
    });
    w.frame_events.push(FrameEvent::EffectApplied { index: i, element: Element::Poison });
}

fn apply_frozen(w: &mut GameWorldInner, i: usize) {
    if !w.enemies.is_alive(i) {
        return;
    }
    let remaining_ms = w.elements.scaled(FREEZE_DURATION_MS);
    match w.enemies.effects[i].frozen.as_mut() {
        // 再付与は時間だけ延長し、保存済みの速度係数は上書きしない
        Some(frozen) => frozen.remaining_ms = remaining_ms,
        None => {
            let restore_factor = w.enemies.speed_factor[i];
            w.enemies.effects[i].frozen = Some(FreezeEffect { remaining_ms, restore_factor });
            w.enemies.speed_factor[i] = FREEZE_FACTOR;
        }
    }
    w.frame_events.push(FrameEvent::EffectApplied { index: i, element: Element::Ice });
}

/// 継続ダメージを 1 tick 進める。tick 後に残り時間が尽きていれば解除する。
fn tick_dot(effect: &mut Option<DotEffect>, now_ms: f64, delta_ms: f64) -> (i32, bool) {
    let Some(dot) = effect.as_mut() else {
        return (0, false);
    };
    dot.remaining_ms -= delta_ms;
    let mut damage = 0;
    if now_ms - dot.last_tick_ms >= dot.tick_interval_ms {
        dot.last_tick_ms = now_ms;
        damage = dot.magnitude;
    }
    let expired = dot.remaining_ms <= 0.0;
    if expired {
        *effect = None;
    }
    (damage, expired)
}

/// 全敵の属性エフェクトを進める
pub(crate) fn update_elements(w: &mut GameWorldInner, delta_ms: f64) {
    let now = w.now_ms;
    for i in 0..w.enemies.len() {
        if !w.enemies.is_alive(i) || w.enemies.effects[i].is_empty() {
            continue;
        }
        let mut fx = w.enemies.effects[i];

        let (burn, burn_expired) = tick_dot(&mut fx.burning, now, delta_ms);
        let (poison, poison_expired) = tick_dot(&mut fx.poisoned, now, delta_ms);

        let mut thawed = None;
        if let Some(frozen) = fx.frozen.as_mut() {
            frozen.remaining_ms -= delta_ms;
            if frozen.remaining_ms <= 0.0 {
                thawed = Some(frozen.restore_factor);
                fx.frozen = None;
            }
        }

        w.enemies.effects[i] = fx;
        if burn_expired {
            w.frame_events.push(FrameEvent::EffectExpired { index: i, element: Element::Fire });
        }
        if poison_expired {
            w.frame_events.push(FrameEvent::EffectExpired { index: i, element: Element::Poison });
        }
        if let Some(factor) = thawed {
            w.enemies.speed_factor[i] = factor;
            w.frame_events.push(FrameEvent::EffectExpired { index: i, element: Element::Ice });
        }

        let dot = burn + poison;
        if dot > 0 {
            apply_damage(w, i, dot as f32);
        }
    }
    resolve_deaths(w);
}

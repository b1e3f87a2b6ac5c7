//! Path: native/soul_sim/src/game_logic/systems/progression.rs
//! Summary: 実績の判定・解除・報酬適用とパッシブスキルの購入・定期効果

use crate::error::SkillError;
use crate::world::{FrameEvent, GameWorldInner};
use soul_core::achievement::{satisfied_by, AchievementCategory, AchievementId, AchievementReward};
use soul_core::skill::{SkillId, MAGNET_RADIUS_MULTIPLIER, REGEN_AMOUNT};

/// `category` の値が `value` になったときに満たされる実績をすべて解除する
pub(crate) fn check_achievement(w: &mut GameWorldInner, category: AchievementCategory, value: u64) {
    for id in satisfied_by(category, value) {
        unlock_achievement(w, id);
    }
}

/// 未解除なら解除・保存し、報酬を 1 回だけ適用する
pub(crate) fn unlock_achievement(w: &mut GameWorldInner, id: AchievementId) -> bool {
    if !w.progression.achievements.unlock(id) {
        return false;
    }
    let def = id.def();
    log::info!("achievement unlocked: {} ({})", def.name, id.key());
    apply_reward(w, def.reward);
    w.frame_events.push(FrameEvent::AchievementUnlocked { id });
    true
}

/// 報酬は各サブシステムの公開ミューテータ経由で適用する
fn apply_reward(w: &mut GameWorldInner, reward: AchievementReward) {
    match reward {
        AchievementReward::Souls(amount)            => w.economy.add_souls(amount),
        AchievementReward::MaxHealth(amount)        => w.player.increase_max_health(amount),
        AchievementReward::DamageMultiplier(factor) => w.weapon.increase_damage_multiplier(factor),
        AchievementReward::SpeedMultiplier(factor)  => w.player.increase_speed_multiplier(factor),
        AchievementReward::CooldownMultiplier(factor) => {
            w.weapon.decrease_cooldown_multiplier(factor)
        }
        AchievementReward::CollectRadius(factor)   => w.economy.increase_collect_radius(factor),
        AchievementReward::ElementDuration(factor) => w.elements.increase_effect_duration(factor),
        AchievementReward::Special(effect) => {
            w.progression.specials.insert(effect);
        }
    }
}

/// スキルを購入する。判定・引き落とし・解除は同じ呼び出し内で行う。
pub(crate) fn purchase_skill(w: &mut GameWorldInner, id: SkillId) -> Result<u32, SkillError> {
    let cost = w.progression.skills.check_purchase(id, w.economy.souls)?;
    w.economy.spend(cost);
    w.progression.skills.mark_unlocked(id, w.now_ms);
    if id == SkillId::SoulMagnet {
        w.economy.increase_collect_radius(MAGNET_RADIUS_MULTIPLIER);
    }
    log::info!("skill unlocked: {} for {} souls", id.def().name, cost);
    w.frame_events.push(FrameEvent::SkillUnlocked { id });
    let unlocked = w.progression.skills.unlocked_count() as u64;
    check_achievement(w, AchievementCategory::UnlockSkills, unlocked);
    Ok(cost)
}

/// lifeRegen の回復と生存時間の実績判定
pub(crate) fn update_progression(w: &mut GameWorldInner) {
    if w.progression.skills.regen_due(w.now_ms) {
        let amount = w.player.heal(REGEN_AMOUNT);
        w.frame_events.push(FrameEvent::PlayerHealed { amount });
    }
    let survived = w.elapsed_ms as u64;
    check_achievement(w, AchievementCategory::Survived, survived);
}

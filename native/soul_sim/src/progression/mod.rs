//! Path: native/soul_sim/src/progression/mod.rs
//! Summary: 成長システムの状態（実績・スキル・カウンタ・使用属性・特殊効果）

mod achievements;
mod skills;
mod store;

pub use achievements::{AchievementTracker, UnlockRecord};
pub use skills::SkillBook;
pub use store::{FileStore, KeyValueStore, MemoryStore};

use rustc_hash::FxHashSet;
use soul_core::achievement::SpecialEffect;
use soul_core::element::Element;

/// 実績判定に使う累積カウンタと、セッション内の解除状態
pub struct ProgressionState {
    pub achievements:   AchievementTracker,
    pub skills:         SkillBook,
    pub total_kills:    u64,
    /// 収集したソウルの価値の合計
    pub souls_collected: u64,
    pub used_elements:  FxHashSet<Element>,
    pub specials:       FxHashSet<SpecialEffect>,
}

impl ProgressionState {
    pub fn new(achievements: AchievementTracker) -> Self {
        Self {
            achievements,
            skills:          SkillBook::new(),
            total_kills:     0,
            souls_collected: 0,
            used_elements:   FxHashSet::default(),
            specials:        FxHashSet::default(),
        }
    }

    pub fn has_special(&self, effect: SpecialEffect) -> bool {
        self.specials.contains(&effect)
    }
}

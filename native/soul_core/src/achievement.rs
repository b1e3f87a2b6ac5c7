//! Path: native/soul_core/src/achievement.rs
//! Summary: 実績カタログ（ID・カテゴリ・しきい値・報酬）

/// 実績 ID。永続化キーは `key()` の camelCase 文字列。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AchievementId {
    FirstKill,
    Kill10,
    Kill50,
    Kill100,
    Collect100Souls,
    Collect500Souls,
    Survive5Min,
    MaxWeapon,
    PerfectWave,
    ReachWave5,
    CompleteAllWaves,
    UnlockSkills,
    AllElements,
}

/// 実績判定のカウンタ種別
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AchievementCategory {
    Kill,
    CollectSouls,
    /// 生存時間（ms）
    Survived,
    WeaponLevel,
    PerfectWave,
    ReachWave,
    AllWaves,
    UnlockSkills,
    UseElements,
}

/// 特殊効果（報酬として付与されるフラグ）
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SpecialEffect {
    Champion,
}

/// 実績報酬。各値は担当サブシステムの公開ミューテータ経由で適用される。
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AchievementReward {
    Souls(u32),
    MaxHealth(i32),
    DamageMultiplier(f32),
    SpeedMultiplier(f32),
    CooldownMultiplier(f32),
    CollectRadius(f32),
    ElementDuration(f32),
    Special(SpecialEffect),
}

#[derive(Clone, Copy, Debug)]
pub struct AchievementDef {
    pub id:        AchievementId,
    pub name:      &'static str,
    pub category:  AchievementCategory,
    pub threshold: u64,
    pub reward:    AchievementReward,
}

use AchievementCategory as C;
use AchievementReward as R;

pub static ACHIEVEMENTS: [AchievementDef; 13] = [
    AchievementDef { id: AchievementId::FirstKill,        name: "First Blood",        category: C::Kill,         threshold: 1,       reward: R::Souls(10) },
    AchievementDef { id: AchievementId::Kill10,           name: "Hunter",             category: C::Kill,         threshold: 10,      reward: R::Souls(20) },
    AchievementDef { id: AchievementId::Kill50,           name: "Slayer",             category: C::Kill,         threshold: 50,      reward: R::Souls(50) },
    AchievementDef { id: AchievementId::Kill100,          name: "Reaper",             category: C::Kill,         threshold: 100,     reward: R::Souls(100) },
    AchievementDef { id: AchievementId::Collect100Souls,  name: "Soul Collector",     category: C::CollectSouls, threshold: 100,     reward: R::CollectRadius(1.3) },
    AchievementDef { id: AchievementId::Collect500Souls,  name: "Soul Hoarder",       category: C::CollectSouls, threshold: 500,     reward: R::Souls(50) },
    AchievementDef { id: AchievementId::Survive5Min,      name: "Survivor",           category: C::Survived,     threshold: 300_000, reward: R::MaxHealth(20) },
    AchievementDef { id: AchievementId::MaxWeapon,        name: "Arsenal",            category: C::WeaponLevel,  threshold: 3,       reward: R::DamageMultiplier(1.1) },
    AchievementDef { id: AchievementId::PerfectWave,      name: "Untouchable",        category: C::PerfectWave,  threshold: 1,       reward: R::SpeedMultiplier(1.1) },
    AchievementDef { id: AchievementId::ReachWave5,       name: "Halfway There",      category: C::ReachWave,    threshold: 5,       reward: R::Souls(30) },
    AchievementDef { id: AchievementId::CompleteAllWaves, name: "Champion",           category: C::AllWaves,     threshold: 1,       reward: R::Special(SpecialEffect::Champion) },
    AchievementDef { id: AchievementId::UnlockSkills,     name: "Skilled",            category: C::UnlockSkills, threshold: 3,       reward: R::CooldownMultiplier(0.9) },
    AchievementDef { id: AchievementId::AllElements,      name: "Elementalist",       category: C::UseElements,  threshold: 4,       reward: R::ElementDuration(1.2) },
];

impl AchievementId {
    pub fn def(self) -> &'static AchievementDef {
        // カタログは enum 宣言順と一致している
        &ACHIEVEMENTS[self as usize]
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::FirstKill        => "firstKill",
            Self::Kill10           => "kill10",
            Self::Kill50           => "kill50",
            Self::Kill100          => "kill100",
            Self::Collect100Souls  => "collect100Souls",
            Self::Collect500Souls  => "collect500Souls",
            Self::Survive5Min      => "survive5min",
            Self::MaxWeapon        => "maxWeapon",
            Self::PerfectWave      => "perfectWave",
            Self::ReachWave5       => "reachWave5",
            Self::CompleteAllWaves => "completeAllWaves",
            Self::UnlockSkills     => "unlockSkills",
            Self::AllElements      => "allElements",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ACHIEVEMENTS.iter().map(|d| d.id).find(|id| id.key() == key)
    }
}

/// `category` の値 `value` でしきい値を満たす実績（解除済みかは問わない）
pub fn satisfied_by(category: AchievementCategory, value: u64) -> impl Iterator<Item = AchievementId> {
    ACHIEVEMENTS
        .iter()
        .filter(move |d| d.category == category && value >= d.threshold)
        .map(|d| d.id)
}

//! Path: native/soul_core/src/skill.rs
//! Summary: パッシブスキルのカタログ（コスト・効果パラメータ）

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum SkillId {
    LifeRegen     = 0,
    SoulMagnet    = 1,
    CriticalHit   = 2,
    DamageReflect = 3,
    LuckyFinder   = 4,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillDef {
    pub id:          SkillId,
    pub name:        &'static str,
    pub description: &'static str,
    pub cost:        u32,
}

pub static SKILLS: [SkillDef; 5] = [
    SkillDef { id: SkillId::LifeRegen,     name: "Life Regeneration", description: "Recover 5 HP every 30 seconds",         cost: 25 },
    SkillDef { id: SkillId::SoulMagnet,    name: "Soul Magnet",       description: "Increase soul collection radius by 50%", cost: 30 },
    SkillDef { id: SkillId::CriticalHit,   name: "Critical Strike",   description: "10% chance to deal double damage",       cost: 50 },
    SkillDef { id: SkillId::DamageReflect, name: "Thorns",            description: "Reflect 20% of damage taken",            cost: 35 },
    SkillDef { id: SkillId::LuckyFinder,   name: "Lucky Finder",      description: "Better soul rarity and more chests",     cost: 40 },
];

// lifeRegen
pub const REGEN_AMOUNT:      i32 = 5;
pub const REGEN_INTERVAL_MS: f64 = 30_000.0;
// soulMagnet
pub const MAGNET_RADIUS_MULTIPLIER: f32 = 1.5;
// criticalHit
pub const CRITICAL_CHANCE:     f32 = 0.1;
pub const CRITICAL_MULTIPLIER: i32 = 2;
// damageReflect
pub const REFLECT_FRACTION: f32 = 0.2;
pub const REFLECT_RADIUS:   f32 = 150.0;
// luckyFinder
pub const LUCKY_PROMOTE_CHANCE:     f32 = 0.15;
pub const LUCKY_CHEST_STEP_FACTOR:  f32 = 0.85;

impl SkillId {
    pub const ALL: [SkillId; 5] = [
        Self::LifeRegen,
        Self::SoulMagnet,
        Self::CriticalHit,
        Self::DamageReflect,
        Self::LuckyFinder,
    ];

    pub fn def(self) -> &'static SkillDef {
        &SKILLS[self as usize]
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::LifeRegen     => "lifeRegen",
            Self::SoulMagnet    => "soulMagnet",
            Self::CriticalHit   => "criticalHit",
            Self::DamageReflect => "damageReflect",
            Self::LuckyFinder   => "luckyFinder",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(SkillId::LifeRegen.def().cost, 25);
        assert_eq!(SkillId::SoulMagnet.def().cost, 30);
        assert_eq!(SkillId::CriticalHit.def().cost, 50);
        assert_eq!(SkillId::DamageReflect.def().cost, 35);
        assert_eq!(SkillId::LuckyFinder.def().cost, 40);
    }

    #[test]
    fn catalog_order_matches_ids() {
        for id in SkillId::ALL {
            assert_eq!(id.def().id, id);
            assert_eq!(SkillId::from_key(id.key()), Some(id));
        }
    }
}

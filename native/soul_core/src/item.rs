//! Path: native/soul_core/src/item.rs
//! Summary: ソウルのレアリティ・ドロップ表・宝箱報酬と SoulWorld（SoA）

use crate::constants::SOUL_LIFETIME_MS;
use crate::enemy::DropTier;
use crate::physics::rng::SimpleRng;

/// ソウルのレアリティ
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum SoulRarity {
    #[default]
    Common    = 0,
    Rare      = 1,
    Epic      = 2,
    Legendary = 3,
}

impl SoulRarity {
    /// 通貨としての価値
    pub fn value(self) -> u32 {
        match self {
            Self::Common    => 1,
            Self::Rare      => 2,
            Self::Epic      => 5,
            Self::Legendary => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Common    => "common",
            Self::Rare      => "rare",
            Self::Epic      => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// 1 段階上のレアリティ（Legendary はそのまま）
    pub fn promoted(self) -> Self {
        match self {
            Self::Common    => Self::Rare,
            Self::Rare      => Self::Epic,
            Self::Epic | Self::Legendary => Self::Legendary,
        }
    }
}

impl DropTier {
    /// 撃破時に落とすソウル数
    pub fn roll_soul_count(self, rng: &mut SimpleRng) -> u32 {
        match self {
            Self::Normal => rng.range_u32(1, 3),
            Self::Elite  => rng.range_u32(3, 7),
            Self::Boss   => rng.range_u32(7, 12),
        }
    }

    /// ソウル 1 個分のレアリティ
    pub fn roll_rarity(self, rng: &mut SimpleRng) -> SoulRarity {
        let r = rng.next_f32();
        match self {
            // 90% common / 10% rare
            Self::Normal => if r < 0.9 { SoulRarity::Common } else { SoulRarity::Rare },
            // 60% rare / 40% epic
            Self::Elite => if r < 0.6 { SoulRarity::Rare } else { SoulRarity::Epic },
            // 40% rare / 40% epic / 20% legendary
            Self::Boss => {
                if r < 0.4 {
                    SoulRarity::Rare
                } else if r < 0.8 {
                    SoulRarity::Epic
                } else {
                    SoulRarity::Legendary
                }
            }
        }
    }
}

/// ボス報酬のソウル（epic / legendary 半々）
pub fn roll_boss_reward_rarity(rng: &mut SimpleRng) -> SoulRarity {
    if rng.chance(0.5) { SoulRarity::Epic } else { SoulRarity::Legendary }
}

/// 宝箱の報酬
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ChestReward {
    Souls(u32),
    Heal(i32),
    LegendarySouls(u32),
    TemporaryWeapon { tier: usize, duration_ms: f64 },
    RandomElement,
}

impl ChestReward {
    /// 5 種類から一様に選ぶ
    pub fn roll(rng: &mut SimpleRng) -> ChestReward {
        match rng.next_u32() % 5 {
            0 => Self::Souls(rng.range_u32(20, 50)),
            1 => Self::Heal(rng.range_u32(30, 60) as i32),
            2 => Self::LegendarySouls(5),
            3 => Self::TemporaryWeapon {
                tier:        rng.range_u32(0, 3) as usize,
                duration_ms: crate::constants::TEMP_WEAPON_DURATION_MS,
            },
            _ => Self::RandomElement,
        }
    }
}

/// ソウル SoA（Structure of Arrays）
///
/// フリーリストにより kill されたスロットを O(1) で再利用する。
pub struct SoulWorld {
    pub positions_x: Vec<f32>,
    pub positions_y: Vec<f32>,
    pub rarities:    Vec<SoulRarity>,
    /// 消滅時刻（ms）
    pub expires_at:  Vec<f64>,
    pub alive:       Vec<bool>,
    pub count:       usize,
    free_list:       Vec<usize>,
}

impl Default for SoulWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SoulWorld {
    pub fn new() -> Self {
        Self {
            positions_x: Vec::new(),
            positions_y: Vec::new(),
            rarities:    Vec::new(),
            expires_at:  Vec::new(),
            alive:       Vec::new(),
            count:       0,
            free_list:   Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// ソウルを生成し、スロット番号を返す
    pub fn spawn(&mut self, x: f32, y: f32, rarity: SoulRarity, now_ms: f64) -> usize {
        let expires = now_ms + SOUL_LIFETIME_MS;
        let i = if let Some(i) = self.free_list.pop() {
            self.positions_x[i] = x;
            self.positions_y[i] = y;
            self.rarities[i]    = rarity;
            self.expires_at[i]  = expires;
            self.alive[i]       = true;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.rarities.push(rarity);
            self.expires_at.push(expires);
            self.alive.push(true);
            self.positions_x.len() - 1
        };
        self.count += 1;
        i
    }

    pub fn is_alive(&self, i: usize) -> bool {
        self.alive.get(i).copied().unwrap_or(false)
    }

    pub fn kill(&mut self, i: usize) {
        if self.is_alive(i) {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_values() {
        assert_eq!(SoulRarity::Common.value(), 1);
        assert_eq!(SoulRarity::Rare.value(), 2);
        assert_eq!(SoulRarity::Epic.value(), 5);
        assert_eq!(SoulRarity::Legendary.value(), 10);
        assert_eq!(SoulRarity::Legendary.promoted(), SoulRarity::Legendary);
    }

    #[test]
    fn soul_counts_by_tier() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..500 {
            assert!((1..=3).contains(&DropTier::Normal.roll_soul_count(&mut rng)));
            assert!((3..=7).contains(&DropTier::Elite.roll_soul_count(&mut rng)));
            assert!((7..=12).contains(&DropTier::Boss.roll_soul_count(&mut rng)));
        }
    }

    #[test]
    fn boss_rarity_distribution() {
        let mut rng = SimpleRng::new(77);
        let rolls = 10_000;
        let mut counts = [0u32; 4];
        for _ in 0..rolls {
            counts[DropTier::Boss.roll_rarity(&mut rng) as usize] += 1;
        }
        assert_eq!(counts[SoulRarity::Common as usize], 0);
        let frac = |r: SoulRarity| counts[r as usize] as f32 / rolls as f32;
        assert!((frac(SoulRarity::Rare) - 0.4).abs() < 0.03);
        assert!((frac(SoulRarity::Epic) - 0.4).abs() < 0.03);
        assert!((frac(SoulRarity::Legendary) - 0.2).abs() < 0.03);
    }

    #[test]
    fn elite_rarity_never_common_or_legendary() {
        let mut rng = SimpleRng::new(8);
        for _ in 0..2000 {
            let r = DropTier::Elite.roll_rarity(&mut rng);
            assert!(r == SoulRarity::Rare || r == SoulRarity::Epic);
        }
    }

    #[test]
    fn chest_rewards_stay_in_range() {
        let mut rng = SimpleRng::new(19);
        for _ in 0..1000 {
            match ChestReward::roll(&mut rng) {
                ChestReward::Souls(n) => assert!((20..=50).contains(&n)),
                ChestReward::Heal(h) => assert!((30..=60).contains(&h)),
                ChestReward::LegendarySouls(n) => assert_eq!(n, 5),
                ChestReward::TemporaryWeapon { tier, duration_ms } => {
                    assert!(tier <= 3);
                    assert!((duration_ms - 45_000.0).abs() < 0.001);
                }
                ChestReward::RandomElement => {}
            }
        }
    }

    #[test]
    fn soul_world_reuses_slots() {
        let mut souls = SoulWorld::new();
        let a = souls.spawn(0.0, 0.0, SoulRarity::Common, 0.0);
        souls.spawn(1.0, 1.0, SoulRarity::Rare, 0.0);
        souls.kill(a);
        assert_eq!(souls.count, 1);
        let c = souls.spawn(2.0, 2.0, SoulRarity::Epic, 10.0);
        assert_eq!(c, a);
        assert_eq!(souls.len(), 2);
        assert!((souls.expires_at[c] - 30_010.0).abs() < 0.001);
    }
}

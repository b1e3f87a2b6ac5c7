//! Path: native/soul_core/src/weapon.rs
//! Summary: 武器ティアのカタログ・弾種ごとの拡散とジッター

use crate::physics::rng::SimpleRng;

/// 弾の種類（拡散パターン・弾速・ジッターを決める）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum BulletType {
    Pistol  = 0,
    Shotgun = 1,
    Rifle   = 2,
    Sniper  = 3,
}

impl BulletType {
    /// 弾速（px/s）
    pub fn speed(self) -> f32 {
        match self {
            Self::Pistol  => 600.0,
            Self::Shotgun => 550.0,
            Self::Rifle   => 700.0,
            Self::Sniper  => 800.0,
        }
    }

    /// 狙いに対する各弾の角度オフセット（rad）
    pub fn spread_offsets(self) -> &'static [f32] {
        match self {
            Self::Shotgun => &[-0.3, -0.15, 0.0, 0.15, 0.3],
            _             => &[0.0],
        }
    }

    /// 自動照準時のジッター幅（± の片側, rad）
    pub fn jitter(self) -> f32 {
        match self {
            Self::Shotgun => 0.1,
            Self::Rifle   => 0.05,
            Self::Pistol  => 0.075,
            Self::Sniper  => 0.0,
        }
    }

    /// [-jitter, +jitter) のランダムな角度ずれ
    pub fn roll_jitter(self, rng: &mut SimpleRng) -> f32 {
        let j = self.jitter();
        if j == 0.0 {
            return 0.0;
        }
        (rng.next_f32() - 0.5) * 2.0 * j
    }
}

/// 武器ティア（不変のカタログエントリ）
#[derive(Clone, Copy, Debug)]
pub struct WeaponTier {
    pub name:         &'static str,
    pub range:        f32,
    pub damage:       i32,
    /// 発射間隔（ms）
    pub fire_rate_ms: f64,
    pub color:        u32,
    pub unlock_cost:  u32,
    pub bullet_type:  BulletType,
}

/// コスト昇順のティア表
pub static WEAPON_TIERS: [WeaponTier; 4] = [
    WeaponTier { name: "pistol",  range: 300.0, damage: 1, fire_rate_ms: 300.0, color: 0xffff00, unlock_cost: 0,   bullet_type: BulletType::Pistol },
    WeaponTier { name: "shotgun", range: 200.0, damage: 2, fire_rate_ms: 600.0, color: 0xff6600, unlock_cost: 120, bullet_type: BulletType::Shotgun },
    WeaponTier { name: "rifle",   range: 400.0, damage: 1, fire_rate_ms: 150.0, color: 0x00ffff, unlock_cost: 300, bullet_type: BulletType::Rifle },
    WeaponTier { name: "sniper",  range: 600.0, damage: 3, fire_rate_ms: 800.0, color: 0xff00ff, unlock_cost: 600, bullet_type: BulletType::Sniper },
];

pub const MAX_TIER: usize = WEAPON_TIERS.len() - 1;

impl WeaponTier {
    /// 範囲外のインデックスは最上位ティアに丸める
    pub fn get(index: usize) -> &'static WeaponTier {
        &WEAPON_TIERS[index.min(MAX_TIER)]
    }

    pub fn next(index: usize) -> Option<&'static WeaponTier> {
        WEAPON_TIERS.get(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_cost_ascending() {
        for pair in WEAPON_TIERS.windows(2) {
            assert!(pair[0].unlock_cost < pair[1].unlock_cost);
        }
        assert_eq!(WEAPON_TIERS[0].unlock_cost, 0);
    }

    #[test]
    fn shotgun_spread_is_symmetric_five_way() {
        let offsets = BulletType::Shotgun.spread_offsets();
        assert_eq!(offsets.len(), 5);
        assert!((offsets[0] + offsets[4]).abs() < 0.001);
        assert!((offsets[1] + 0.15).abs() < 0.001);
        assert_eq!(BulletType::Rifle.spread_offsets(), &[0.0]);
    }

    #[test]
    fn jitter_within_bounds() {
        let mut rng = SimpleRng::new(11);
        for _ in 0..1000 {
            assert!(BulletType::Shotgun.roll_jitter(&mut rng).abs() <= 0.1);
            assert!(BulletType::Rifle.roll_jitter(&mut rng).abs() <= 0.05);
            assert_eq!(BulletType::Sniper.roll_jitter(&mut rng), 0.0);
        }
    }

    #[test]
    fn next_tier_lookup() {
        assert_eq!(WeaponTier::next(0).map(|t| t.name), Some("shotgun"));
        assert!(WeaponTier::next(MAX_TIER).is_none());
        assert_eq!(WeaponTier::get(99).name, "sniper");
    }
}

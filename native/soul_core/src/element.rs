//! Path: native/soul_core/src/element.rs
//! Summary: 属性（炎・氷・雷・毒）の種類とパラメータ

use crate::physics::rng::SimpleRng;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Element {
    Fire      = 0,
    Ice       = 1,
    Lightning = 2,
    Poison    = 3,
}

impl Element {
    pub const ALL: [Element; 4] = [Self::Fire, Self::Ice, Self::Lightning, Self::Poison];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fire      => "fire",
            Self::Ice       => "ice",
            Self::Lightning => "lightning",
            Self::Poison    => "poison",
        }
    }

    /// 弾の軌跡色
    pub fn color(self) -> u32 {
        match self {
            Self::Fire      => 0xff4400,
            Self::Ice       => 0x00ccff,
            Self::Lightning => 0xffff00,
            Self::Poison    => 0x00ff00,
        }
    }

    pub fn random(rng: &mut SimpleRng) -> Element {
        Self::ALL[(rng.next_u32() % Self::ALL.len() as u32) as usize]
    }
}

// Fire: 継続ダメージ
pub const BURN_FRACTION:      f32 = 0.2;
pub const BURN_INTERVAL_MS:   f64 = 1000.0;
pub const BURN_DURATION_MS:   f64 = 3000.0;

// Ice: 減速
pub const FREEZE_FACTOR:      f32 = 0.5;
pub const FREEZE_DURATION_MS: f64 = 2000.0;

// Lightning: 連鎖
pub const CHAIN_TARGETS:      usize = 2;
pub const CHAIN_RADIUS:       f32 = 150.0;
pub const CHAIN_FRACTION:     f32 = 0.5;

// Poison: 範囲 + 継続ダメージ
pub const POISON_SPLASH_RADIUS:   f32 = 100.0;
pub const POISON_SPLASH_FRACTION: f32 = 0.3;
pub const POISON_FRACTION:        f32 = 0.1;
pub const POISON_INTERVAL_MS:     f64 = 1000.0;
pub const POISON_DURATION_MS:     f64 = 5000.0;

/// 継続ダメージ 1 tick 分: `max(1, ceil(damage * fraction))`
pub fn dot_tick_damage(damage: i32, fraction: f32) -> i32 {
    ((damage as f32 * fraction).ceil() as i32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_damage_has_floor_of_one() {
        assert_eq!(dot_tick_damage(1, BURN_FRACTION), 1);
        assert_eq!(dot_tick_damage(3, POISON_FRACTION), 1);
        assert_eq!(dot_tick_damage(20, BURN_FRACTION), 4);
        assert_eq!(dot_tick_damage(11, BURN_FRACTION), 3);
    }

    #[test]
    fn random_element_covers_all_kinds() {
        let mut rng = SimpleRng::new(5);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[Element::random(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

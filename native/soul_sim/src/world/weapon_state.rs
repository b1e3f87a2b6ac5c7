//! Path: native/soul_sim/src/world/weapon_state.rs
//! Summary: 装備中の武器ティア・発射クールダウン・倍率・一時武器

use soul_core::weapon::{WeaponTier, MAX_TIER};

/// 一時武器による上書き。`token` が一致する解除予約だけが有効。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporaryOverride {
    pub tier:  usize,
    pub token: u32,
}

#[derive(Clone, Debug)]
pub struct WeaponState {
    /// 購入済みのティア（単調増加）
    pub permanent_tier:      usize,
    pub temporary:           Option<TemporaryOverride>,
    /// 次に発射できる時刻（ms）
    pub next_fire_at:        f64,
    pub damage_multiplier:   f32,
    pub cooldown_multiplier: f32,
    pub auto_fire:           bool,
    next_token:              u32,
}

impl Default for WeaponState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WeaponState {
    pub fn new(auto_fire: bool) -> Self {
        Self {
            permanent_tier:      0,
            temporary:           None,
            next_fire_at:        0.0,
            damage_multiplier:   1.0,
            cooldown_multiplier: 1.0,
            auto_fire,
            next_token:          0,
        }
    }

    /// 現在有効なティア番号（一時武器があればそちら）
    pub fn current_tier(&self) -> usize {
        self.temporary.map_or(self.permanent_tier, |t| t.tier)
    }

    pub fn tier(&self) -> &'static WeaponTier {
        WeaponTier::get(self.current_tier())
    }

    pub fn has_next_tier(&self) -> bool {
        self.permanent_tier < MAX_TIER
    }

    pub fn next_tier_info(&self) -> Option<&'static WeaponTier> {
        WeaponTier::next(self.permanent_tier)
    }

    /// 次のティアのコストを払えれば昇格してコストを返す。払えない・最上位なら 0。
    /// 残高の引き落としは呼び出し側で同じ操作内に行う。
    pub fn upgrade(&mut self, balance: u32) -> u32 {
        match self.next_tier_info() {
            Some(next) if balance >= next.unlock_cost => {
                self.permanent_tier += 1;
                next.unlock_cost
            }
            _ => 0,
        }
    }

    pub fn can_fire(&self, now_ms: f64) -> bool {
        now_ms >= self.next_fire_at
    }

    /// 発射間隔（ms）× クールダウン倍率
    pub fn fire_interval_ms(&self) -> f64 {
        self.tier().fire_rate_ms * self.cooldown_multiplier as f64
    }

    pub fn mark_fired(&mut self, now_ms: f64) {
        self.next_fire_at = now_ms + self.fire_interval_ms();
    }

    /// 1 発あたりのダメージ（ダメージ倍率込み、四捨五入）
    pub fn projectile_damage(&self) -> i32 {
        (self.tier().damage as f32 * self.damage_multiplier).round() as i32
    }

    pub fn increase_damage_multiplier(&mut self, factor: f32) {
        self.damage_multiplier *= factor;
    }

    pub fn decrease_cooldown_multiplier(&mut self, factor: f32) {
        self.cooldown_multiplier *= factor;
    }

    pub fn toggle_auto_fire(&mut self) -> bool {
        self.auto_fire = !self.auto_fire;
        self.auto_fire
    }

    /// 一時武器を装備し、解除予約用のトークンを返す
    pub fn set_temporary(&mut self, tier: usize) -> u32 {
        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        self.temporary = Some(TemporaryOverride { tier: tier.min(MAX_TIER), token });
        token
    }

    /// トークンが現在の上書きと一致すれば解除して true
    pub fn revert_temporary(&mut self, token: u32) -> bool {
        match self.temporary {
            Some(t) if t.token == token => {
                self.temporary = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrade_with_exact_cost() {
        let mut weapon = WeaponState::default();
        assert_eq!(weapon.upgrade(120), 120);
        assert_eq!(weapon.current_tier(), 1);
        assert_eq!(weapon.tier().name, "shotgun");
    }

    #[test]
    fn upgrade_refused_when_poor_or_maxed() {
        let mut weapon = WeaponState::default();
        assert_eq!(weapon.upgrade(119), 0);
        assert_eq!(weapon.current_tier(), 0);
        weapon.permanent_tier = MAX_TIER;
        assert!(!weapon.has_next_tier());
        assert_eq!(weapon.upgrade(10_000), 0);
        assert!(weapon.next_tier_info().is_none());
    }

    #[test]
    fn multipliers_compound() {
        let mut weapon = WeaponState::default();
        weapon.permanent_tier = 3;
        weapon.increase_damage_multiplier(1.1);
        weapon.increase_damage_multiplier(1.1);
        assert_eq!(weapon.projectile_damage(), 4); // 3 × 1.21 = 3.63
        weapon.decrease_cooldown_multiplier(0.9);
        assert!((weapon.fire_interval_ms() - 720.0).abs() < 0.01);
    }

    #[test]
    fn fire_gating() {
        let mut weapon = WeaponState::default();
        assert!(weapon.can_fire(0.0));
        weapon.mark_fired(0.0);
        assert!(!weapon.can_fire(299.0));
        assert!(weapon.can_fire(300.0));
    }

    #[test]
    fn stale_revert_token_is_ignored() {
        let mut weapon = WeaponState::default();
        let first = weapon.set_temporary(2);
        let second = weapon.set_temporary(3);
        assert!(!weapon.revert_temporary(first));
        assert_eq!(weapon.current_tier(), 3);
        assert!(weapon.revert_temporary(second));
        assert_eq!(weapon.current_tier(), 0);
    }

    #[test]
    fn upgrade_during_temporary_survives_revert() {
        let mut weapon = WeaponState::default();
        let token = weapon.set_temporary(3);
        assert_eq!(weapon.upgrade(500), 120);
        weapon.revert_temporary(token);
        assert_eq!(weapon.current_tier(), 1);
    }
}

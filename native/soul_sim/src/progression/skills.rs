//! Path: native/soul_sim/src/progression/skills.rs
//! Summary: パッシブスキルの解除状態（セッション内のみ）と定期効果のタイマー

use crate::error::SkillError;
use soul_core::skill::{SkillId, REGEN_INTERVAL_MS};

#[derive(Clone, Debug, Default)]
pub struct SkillBook {
    unlocked:     [bool; 5],
    /// lifeRegen の次回発動時刻（未解除なら None）
    next_regen_at: Option<f64>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_skill(&self, id: SkillId) -> bool {
        self.unlocked[id as usize]
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.iter().filter(|&&u| u).count()
    }

    /// 購入可否を判定する（状態は変えない）。成功時はコストを返す。
    pub fn check_purchase(&self, id: SkillId, balance: u32) -> Result<u32, SkillError> {
        if self.has_skill(id) {
            return Err(SkillError::AlreadyUnlocked(id));
        }
        let cost = id.def().cost;
        if balance < cost {
            return Err(SkillError::InsufficientSouls { cost, balance });
        }
        Ok(cost)
    }

    /// 解除済みにして定期効果を登録する。引き落としは呼び出し側で同時に行う。
    pub fn mark_unlocked(&mut self, id: SkillId, now_ms: f64) {
        self.unlocked[id as usize] = true;
        if id == SkillId::LifeRegen {
            self.next_regen_at = Some(now_ms + REGEN_INTERVAL_MS);
        }
    }

    /// lifeRegen の発動タイミングなら次回を予約して true
    pub fn regen_due(&mut self, now_ms: f64) -> bool {
        match self.next_regen_at {
            Some(at) if now_ms >= at => {
                self.next_regen_at = Some(at + REGEN_INTERVAL_MS);
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillId, bool)> + '_ {
        SkillId::ALL.into_iter().map(|id| (id, self.has_skill(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_checks() {
        let mut book = SkillBook::new();
        assert_eq!(
            book.check_purchase(SkillId::CriticalHit, 49),
            Err(SkillError::InsufficientSouls { cost: 50, balance: 49 })
        );
        assert_eq!(book.check_purchase(SkillId::CriticalHit, 50), Ok(50));
        book.mark_unlocked(SkillId::CriticalHit, 0.0);
        assert_eq!(
            book.check_purchase(SkillId::CriticalHit, 500),
            Err(SkillError::AlreadyUnlocked(SkillId::CriticalHit))
        );
        assert!(book.has_skill(SkillId::CriticalHit));
        assert_eq!(book.unlocked_count(), 1);
    }

    #[test]
    fn regen_fires_every_thirty_seconds() {
        let mut book = SkillBook::new();
        assert!(!book.regen_due(100_000.0));
        book.mark_unlocked(SkillId::LifeRegen, 1_000.0);
        assert!(!book.regen_due(30_000.0));
        assert!(book.regen_due(31_000.0));
        assert!(!book.regen_due(31_016.0));
        assert!(book.regen_due(61_000.0));
    }
}

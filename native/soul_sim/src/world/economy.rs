//! Path: native/soul_sim/src/world/economy.rs
//! Summary: ソウル残高・収集半径・宝箱出現しきい値

use soul_core::constants::{CHEST_FIRST_THRESHOLD, CHEST_THRESHOLD_STEP, COLLECT_RADIUS};

#[derive(Clone, Debug)]
pub struct Economy {
    /// 通貨残高
    pub souls:                     u32,
    pub collect_radius_multiplier: f32,
    pub next_chest_threshold:      u32,
    /// この時刻（ms）を過ぎるまで宝箱は出ない
    pub next_chest_at:             f64,
}

impl Economy {
    pub fn new(starting_souls: u32) -> Self {
        Self {
            souls:                     starting_souls,
            collect_radius_multiplier: 1.0,
            next_chest_threshold:      CHEST_FIRST_THRESHOLD,
            next_chest_at:             0.0,
        }
    }

    pub fn add_souls(&mut self, amount: u32) {
        self.souls = self.souls.saturating_add(amount);
    }

    /// 残高が足りれば引き落として true
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.souls < cost {
            return false;
        }
        self.souls -= cost;
        true
    }

    pub fn collect_radius(&self) -> f32 {
        COLLECT_RADIUS * self.collect_radius_multiplier
    }

    pub fn increase_collect_radius(&mut self, factor: f32) {
        self.collect_radius_multiplier *= factor;
    }

    pub fn chest_ready(&self, now_ms: f64) -> bool {
        self.souls >= self.next_chest_threshold && now_ms > self.next_chest_at
    }

    /// 宝箱を出した後、しきい値とクールダウンを進める
    pub fn advance_chest(&mut self, now_ms: f64, cooldown_ms: f64, step_factor: f32) {
        let step = (CHEST_THRESHOLD_STEP as f32 * step_factor).round() as u32;
        self.next_chest_threshold += step;
        self.next_chest_at = now_ms + cooldown_ms;
    }
}

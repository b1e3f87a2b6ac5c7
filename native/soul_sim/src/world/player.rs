//! Path: native/soul_sim/src/world/player.rs
//! Summary: プレイヤー状態（座標・入力・HP・無敵時間・速度倍率・ノックバック）

use soul_core::constants::{
    INVULNERABLE_DURATION_MS, INVULNERABLE_FLASH_MS, KNOCKBACK_DECAY_PER_SEC, PLAYER_MAX_HEALTH,
    PLAYER_RADIUS, PLAYER_SPEED,
};
use soul_core::util::MapBounds;

/// プレイヤー状態
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub x:                  f32,
    pub y:                  f32,
    pub input_dx:           f32,
    pub input_dy:           f32,
    pub knockback_vx:       f32,
    pub knockback_vy:       f32,
    pub health:             i32,
    pub max_health:         i32,
    /// 報酬で乗算的に増える
    pub speed_multiplier:   f32,
    /// この時刻（ms）まで被ダメージ無効
    pub invulnerable_until: f64,
    /// 現ウェーブ中に被弾したか（ウェーブ開始でリセット）
    pub has_been_damaged:   bool,
    pub facing_left:        bool,
}

impl PlayerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            input_dx:           0.0,
            input_dy:           0.0,
            knockback_vx:       0.0,
            knockback_vy:       0.0,
            health:             PLAYER_MAX_HEALTH,
            max_health:         PLAYER_MAX_HEALTH,
            speed_multiplier:   1.0,
            invulnerable_until: f64::NEG_INFINITY,
            has_been_damaged:   false,
            facing_left:        false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        now_ms < self.invulnerable_until
    }

    /// 無敵中の点滅（100ms ごとに表示/非表示を切り替える）
    pub fn is_visible(&self, now_ms: f64) -> bool {
        if !self.is_invulnerable(now_ms) {
            return true;
        }
        let started = self.invulnerable_until - INVULNERABLE_DURATION_MS;
        let phase = ((now_ms - started) / INVULNERABLE_FLASH_MS).floor() as i64;
        phase % 2 == 1
    }

    /// ダメージを受ける。無敵中・死亡済みなら何もせず false。
    pub fn take_damage(&mut self, amount: i32, now_ms: f64) -> bool {
        if self.is_dead() || self.is_invulnerable(now_ms) {
            return false;
        }
        self.health = (self.health - amount.max(0)).max(0);
        self.invulnerable_until = now_ms + INVULNERABLE_DURATION_MS;
        self.has_been_damaged = true;
        true
    }

    /// 最大 HP を超えない範囲で回復し、実際の回復量を返す
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.is_dead() {
            return 0;
        }
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }

    /// 最大 HP を増やし、同量だけ回復する
    pub fn increase_max_health(&mut self, amount: i32) {
        self.max_health += amount;
        self.heal(amount);
    }

    pub fn increase_speed_multiplier(&mut self, factor: f32) {
        self.speed_multiplier *= factor;
    }

    pub fn speed(&self) -> f32 {
        PLAYER_SPEED * self.speed_multiplier
    }

    /// (from_x, from_y) から押し出す向きに速度を加える
    pub fn apply_knockback(&mut self, from_x: f32, from_y: f32, force: f32) {
        let dx = self.x - from_x;
        let dy = self.y - from_y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < 0.001 {
            return;
        }
        self.knockback_vx += dx / len * force;
        self.knockback_vy += dy / len * force;
    }

    /// 入力ベクトルとノックバックで 1 フレーム分移動する
    pub fn integrate(&mut self, dt: f32, map: MapBounds) {
        let dx = self.input_dx;
        let dy = self.input_dy;
        // 斜め移動を正規化して速度を一定に保つ
        let len = (dx * dx + dy * dy).sqrt();
        if len > 0.001 {
            let speed = self.speed();
            self.x += (dx / len) * speed * dt;
            self.y += (dy / len) * speed * dt;
            if dx.abs() > 0.001 {
                self.facing_left = dx < 0.0;
            }
        }

        self.x += self.knockback_vx * dt;
        self.y += self.knockback_vy * dt;
        let decay = (1.0 - KNOCKBACK_DECAY_PER_SEC * dt).max(0.0);
        self.knockback_vx *= decay;
        self.knockback_vy *= decay;

        (self.x, self.y) = map.clamp(self.x, self.y, PLAYER_RADIUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_damage_then_invulnerable() {
        let mut p = PlayerState::new(1000.0, 1000.0);
        assert!(p.take_damage(15, 1000.0));
        assert_eq!(p.health, 85);
        assert!(p.is_invulnerable(1000.0));
        assert!(!p.take_damage(15, 1050.0));
        assert_eq!(p.health, 85);
        assert!(p.take_damage(15, 1500.0));
        assert_eq!(p.health, 70);
        assert!(p.has_been_damaged);
    }

    #[test]
    fn heal_clamps_to_max() {
        let mut p = PlayerState::new(0.0, 0.0);
        p.take_damage(30, 0.0);
        assert_eq!(p.heal(50), 30);
        assert_eq!(p.health, 100);
        p.increase_max_health(20);
        assert_eq!(p.max_health, 120);
        assert_eq!(p.health, 120);
    }

    #[test]
    fn flash_toggles_five_times() {
        let mut p = PlayerState::new(0.0, 0.0);
        p.take_damage(1, 0.0);
        let toggles: Vec<bool> = (0..5).map(|i| p.is_visible(i as f64 * 100.0 + 50.0)).collect();
        assert_eq!(toggles, vec![false, true, false, true, false]);
        assert!(p.is_visible(550.0));
    }

    #[test]
    fn diagonal_movement_is_normalised() {
        let mut p = PlayerState::new(1000.0, 1000.0);
        p.input_dx = 1.0;
        p.input_dy = 1.0;
        p.integrate(1.0, MapBounds::default());
        let moved = ((p.x - 1000.0).powi(2) + (p.y - 1000.0).powi(2)).sqrt();
        assert!((moved - 300.0).abs() < 0.01);
    }

    #[test]
    fn knockback_pushes_away_and_decays() {
        let mut p = PlayerState::new(1000.0, 1000.0);
        p.apply_knockback(900.0, 1000.0, 300.0);
        assert!((p.knockback_vx - 300.0).abs() < 0.001);
        p.integrate(0.016, MapBounds::default());
        assert!(p.x > 1000.0);
        assert!(p.knockback_vx < 300.0);
    }

    #[test]
    fn movement_stops_at_map_edge() {
        let map = MapBounds::new(2400.0, 1800.0);
        let mut p = PlayerState::new(2300.0, 1700.0);
        p.input_dx = 1.0;
        p.input_dy = 1.0;
        p.integrate(1.0, map);
        assert_eq!((p.x, p.y), (2400.0 - PLAYER_RADIUS, 1800.0 - PLAYER_RADIUS));
    }
}

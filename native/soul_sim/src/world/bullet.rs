//! Path: native/soul_sim/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）と描画種別定数

use soul_core::element::Element;
use soul_core::weapon::BulletType;

/// 弾丸の描画種別（render 層に渡す kind 値）
pub const BULLET_KIND_PISTOL:  u8 = 0;
pub const BULLET_KIND_SHOTGUN: u8 = 1;
pub const BULLET_KIND_RIFLE:   u8 = 2;
pub const BULLET_KIND_SNIPER:  u8 = 3;
/// 敵弾（Elite の射撃）
pub const BULLET_KIND_ENEMY:   u8 = 8;

pub fn render_kind_for(bullet_type: BulletType) -> u8 {
    match bullet_type {
        BulletType::Pistol  => BULLET_KIND_PISTOL,
        BulletType::Shotgun => BULLET_KIND_SHOTGUN,
        BulletType::Rifle   => BULLET_KIND_RIFLE,
        BulletType::Sniper  => BULLET_KIND_SNIPER,
    }
}

/// 弾丸 SoA（Structure of Arrays）
pub struct BulletWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub velocities_x: Vec<f32>,
    pub velocities_y: Vec<f32>,
    pub damage:       Vec<i32>,
    /// 残り寿命（ms）
    pub lifetime_ms:  Vec<f64>,
    pub alive:        Vec<bool>,
    /// 発射時の属性（軌跡表示もこれで判断する）
    pub element:      Vec<Option<Element>>,
    pub color:        Vec<u32>,
    pub render_kind:  Vec<u8>,
    pub count:        usize,
    /// 空きスロットのインデックススタック（O(1) でスロットを取得・返却）
    free_list:        Vec<usize>,
}

impl Default for BulletWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletWorld {
    pub fn new() -> Self {
        Self {
            positions_x:  Vec::new(),
            positions_y:  Vec::new(),
            velocities_x: Vec::new(),
            velocities_y: Vec::new(),
            damage:       Vec::new(),
            lifetime_ms:  Vec::new(),
            alive:        Vec::new(),
            element:      Vec::new(),
            color:        Vec::new(),
            render_kind:  Vec::new(),
            count:        0,
            free_list:    Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        x: f32, y: f32,
        vx: f32, vy: f32,
        damage: i32,
        lifetime_ms: f64,
        element: Option<Element>,
        color: u32,
        render_kind: u8,
    ) -> usize {
        let i = if let Some(i) = self.free_list.pop() {
            self.positions_x[i]  = x;
            self.positions_y[i]  = y;
            self.velocities_x[i] = vx;
            self.velocities_y[i] = vy;
            self.damage[i]       = damage;
            self.lifetime_ms[i]  = lifetime_ms;
            self.alive[i]        = true;
            self.element[i]      = element;
            self.color[i]        = color;
            self.render_kind[i]  = render_kind;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_x.push(vx);
            self.velocities_y.push(vy);
            self.damage.push(damage);
            self.lifetime_ms.push(lifetime_ms);
            self.alive.push(true);
            self.element.push(element);
            self.color.push(color);
            self.render_kind.push(render_kind);
            self.positions_x.len() - 1
        };
        self.count += 1;
        i
    }

    pub fn kill(&mut self, i: usize) {
        if self.is_alive(i) {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
            self.free_list.push(i);
        }
    }

    pub fn is_alive(&self, i: usize) -> bool {
        self.alive.get(i).copied().unwrap_or(false)
    }

    /// 属性付きの弾は軌跡を描く
    pub fn has_trail(&self, i: usize) -> bool {
        self.element.get(i).is_some_and(|e| e.is_some())
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 移動と寿命更新。寿命切れ・マップ外の弾は消す。
    pub fn advance(&mut self, dt: f32, delta_ms: f64, width: f32, height: f32) {
        for i in 0..self.len() {
            if !self.alive[i] {
                continue;
            }
            self.positions_x[i] += self.velocities_x[i] * dt;
            self.positions_y[i] += self.velocities_y[i] * dt;
            self.lifetime_ms[i] -= delta_ms;
            let x = self.positions_x[i];
            let y = self.positions_y[i];
            if self.lifetime_ms[i] <= 0.0
                || x < -100.0 || x > width + 100.0
                || y < -100.0 || y > height + 100.0
            {
                self.kill(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_expire_after_lifetime() {
        let mut bullets = BulletWorld::new();
        bullets.spawn(100.0, 100.0, 600.0, 0.0, 1, 1500.0, None, 0xffff00, BULLET_KIND_PISTOL);
        for _ in 0..93 {
            bullets.advance(0.016, 16.0, 2000.0, 2000.0);
        }
        assert_eq!(bullets.count, 1);
        bullets.advance(0.016, 16.0, 2000.0, 2000.0);
        assert_eq!(bullets.count, 0);
    }

    #[test]
    fn element_marks_trail() {
        let mut bullets = BulletWorld::new();
        let a = bullets.spawn(0.0, 0.0, 0.0, 0.0, 1, 100.0, Some(Element::Fire), 0, BULLET_KIND_RIFLE);
        let b = bullets.spawn(0.0, 0.0, 0.0, 0.0, 1, 100.0, None, 0, BULLET_KIND_RIFLE);
        assert!(bullets.has_trail(a));
        assert!(!bullets.has_trail(b));
    }
}

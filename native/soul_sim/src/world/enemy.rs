//! Path: native/soul_sim/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）

use super::effect::ElementalEffects;
use soul_core::enemy::{Archetype, AttackType};

/// 敵 SoA（Structure of Arrays）
///
/// 撃破は 2 段階で行う: `mark_dead` で生存フラグを落とし（近傍クエリから外れる）、
/// 撃破時処理が終わってから `release` でスロットをフリーリストへ返す。
#[derive(Clone)]
pub struct EnemyWorld {
    pub positions_x:     Vec<f32>,
    pub positions_y:     Vec<f32>,
    pub velocities_x:    Vec<f32>,
    pub velocities_y:    Vec<f32>,
    pub archetypes:      Vec<Archetype>,
    pub hp:              Vec<f32>,
    pub max_hp:          Vec<f32>,
    /// アーキタイプの基本速度
    pub speeds:          Vec<f32>,
    /// 凍結などによる速度係数（通常 1.0）
    pub speed_factor:    Vec<f32>,
    /// 描画スケール（アーキタイプ × スポーン倍率）
    pub scale:           Vec<f32>,
    pub radius:          Vec<f32>,
    pub tint:            Vec<u32>,
    pub contact_damage:  Vec<i32>,
    pub attack_types:    Vec<AttackType>,
    /// 次に攻撃（射撃・テレポート）できる時刻（ms）
    pub next_attack_at:  Vec<f64>,
    /// 徘徊の向きを変える時刻（ms）
    pub wander_until:    Vec<f64>,
    pub wander_angle:    Vec<f32>,
    pub next_heal_at:    Vec<f64>,
    pub alpha:           Vec<f32>,
    pub facing_left:     Vec<bool>,
    pub effects:         Vec<ElementalEffects>,
    pub alive:           Vec<bool>,
    pub count:           usize,
    /// これまでにスポーンした敵の最大半径（衝突クエリの探索半径に使う）
    pub max_radius:      f32,
    /// 近隣クエリ結果の再利用バッファ
    pub neighbor_buf:    Vec<usize>,
    /// このティックで回復を受けたスロット（update_enemy_specials が毎回作り直す）
    pub heal_marks:      Vec<bool>,
    /// フリーリストに入っている
    released:            Vec<bool>,
    free_list:           Vec<usize>,
}

impl Default for EnemyWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self {
            positions_x:    Vec::new(),
            positions_y:    Vec::new(),
            velocities_x:   Vec::new(),
            velocities_y:   Vec::new(),
            archetypes:     Vec::new(),
            hp:             Vec::new(),
            max_hp:         Vec::new(),
            speeds:         Vec::new(),
            speed_factor:   Vec::new(),
            scale:          Vec::new(),
            radius:         Vec::new(),
            tint:           Vec::new(),
            contact_damage: Vec::new(),
            attack_types:   Vec::new(),
            next_attack_at: Vec::new(),
            wander_until:   Vec::new(),
            wander_angle:   Vec::new(),
            next_heal_at:   Vec::new(),
            alpha:          Vec::new(),
            facing_left:    Vec::new(),
            effects:        Vec::new(),
            alive:          Vec::new(),
            count:          0,
            max_radius:     0.0,
            neighbor_buf:   Vec::new(),
            heal_marks:     Vec::new(),
            released:       Vec::new(),
            free_list:      Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_alive(&self, i: usize) -> bool {
        self.alive.get(i).copied().unwrap_or(false)
    }

    /// 生存フラグだけを落とす。既に死んでいれば false。
    pub fn mark_dead(&mut self, i: usize) -> bool {
        if !self.is_alive(i) {
            return false;
        }
        self.alive[i] = false;
        self.count = self.count.saturating_sub(1);
        true
    }

    /// `mark_dead` 済みのスロットを再利用可能にする
    pub fn release(&mut self, i: usize) {
        if i < self.len() && !self.alive[i] && !self.released[i] {
            self.effects[i] = ElementalEffects::default();
            self.released[i] = true;
            self.free_list.push(i);
        }
    }

    /// 撃破処理を伴わない除去
    pub fn kill(&mut self, i: usize) {
        if self.mark_dead(i) {
            self.release(i);
        }
    }

    /// アーキタイプの基本ステータス × `scale_multiplier` でスポーンし、スロット番号を返す
    pub fn spawn(&mut self, x: f32, y: f32, archetype: Archetype, scale_multiplier: f32) -> usize {
        let p = archetype.params();
        let max_hp = p.max_hp * scale_multiplier;
        let scale = p.scale * scale_multiplier;
        let radius = archetype.radius(scale_multiplier);

        let i = if let Some(i) = self.free_list.pop() {
            // O(1): フリーリストから再利用
            self.positions_x[i]    = x;
            self.positions_y[i]    = y;
            self.velocities_x[i]   = 0.0;
            self.velocities_y[i]   = 0.0;
            self.archetypes[i]     = archetype;
            self.hp[i]             = max_hp;
            self.max_hp[i]         = max_hp;
            self.speeds[i]         = p.speed;
            self.speed_factor[i]   = 1.0;
            self.scale[i]          = scale;
            self.radius[i]         = radius;
            self.tint[i]           = p.tint;
            self.contact_damage[i] = p.contact_damage;
            self.attack_types[i]   = p.attack;
            self.next_attack_at[i] = 0.0;
            self.wander_until[i]   = 0.0;
            self.wander_angle[i]   = 0.0;
            self.next_heal_at[i]   = 0.0;
            self.alpha[i]          = 1.0;
            self.facing_left[i]    = false;
            self.effects[i]        = ElementalEffects::default();
            self.alive[i]          = true;
            self.released[i]       = false;
            i
        } else {
            self.positions_x.push(x);
            self.positions_y.push(y);
            self.velocities_x.push(0.0);
            self.velocities_y.push(0.0);
            self.archetypes.push(archetype);
            self.hp.push(max_hp);
            self.max_hp.push(max_hp);
            self.speeds.push(p.speed);
            self.speed_factor.push(1.0);
            self.scale.push(scale);
            self.radius.push(radius);
            self.tint.push(p.tint);
            self.contact_damage.push(p.contact_damage);
            self.attack_types.push(p.attack);
            self.next_attack_at.push(0.0);
            self.wander_until.push(0.0);
            self.wander_angle.push(0.0);
            self.next_heal_at.push(0.0);
            self.alpha.push(1.0);
            self.facing_left.push(false);
            self.effects.push(ElementalEffects::default());
            self.alive.push(true);
            self.released.push(false);
            self.positions_x.len() - 1
        };
        self.count += 1;
        self.max_radius = self.max_radius.max(radius);
        i
    }

    /// 生存中の敵インデックスを列挙する
    pub fn iter_alive(&self) -> impl Iterator<Item = usize> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_applies_archetype_stats() {
        let mut enemies = EnemyWorld::new();
        let i = enemies.spawn(10.0, 20.0, Archetype::Elite, 1.0);
        assert!((enemies.hp[i] - 10.0).abs() < 0.001);
        assert!((enemies.speeds[i] - 90.0).abs() < 0.001);
        assert_eq!(enemies.contact_damage[i], 25);
        assert_eq!(enemies.attack_types[i], AttackType::Range);
        assert_eq!(enemies.count, 1);
    }

    #[test]
    fn scale_multiplier_scales_health_and_size() {
        let mut enemies = EnemyWorld::new();
        let i = enemies.spawn(0.0, 0.0, Archetype::Normal, 0.7);
        assert!((enemies.max_hp[i] - 2.1).abs() < 0.001);
        assert!((enemies.scale[i] - 0.7).abs() < 0.001);
    }

    #[test]
    fn dead_slot_is_reused_only_after_release() {
        let mut enemies = EnemyWorld::new();
        let a = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        assert!(enemies.mark_dead(a));
        assert!(!enemies.mark_dead(a));
        let b = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        assert_ne!(a, b);
        enemies.release(a);
        enemies.release(a);
        let c = enemies.spawn(0.0, 0.0, Archetype::Healer, 1.0);
        assert_eq!(c, a);
        let d = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        assert_ne!(d, a);
        assert_eq!(enemies.count, 3);
    }

    #[test]
    fn repeated_release_does_not_duplicate_free_slot() {
        let mut enemies = EnemyWorld::new();
        let a = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        enemies.kill(a);
        enemies.release(a);
        enemies.release(a);
        let b = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        let c = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        assert_eq!(b, a);
        assert_ne!(c, a);
        assert_eq!(enemies.count, 2);
        // 再利用後は再び解放できる
        enemies.kill(b);
        assert_eq!(enemies.spawn(0.0, 0.0, Archetype::Elite, 1.0), a);
    }

    #[test]
    fn max_radius_follows_largest_spawn() {
        let mut enemies = EnemyWorld::new();
        let small = enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        assert_eq!(enemies.max_radius, enemies.radius[small]);
        let big = enemies.spawn(0.0, 0.0, Archetype::Boss, 4.0);
        assert_eq!(enemies.max_radius, enemies.radius[big]);
        enemies.kill(big);
        enemies.spawn(0.0, 0.0, Archetype::Normal, 1.0);
        assert_eq!(enemies.max_radius, enemies.radius[big]);
    }

    #[test]
    fn out_of_range_index_is_not_alive() {
        let enemies = EnemyWorld::new();
        assert!(!enemies.is_alive(5));
    }
}

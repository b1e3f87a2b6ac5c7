//! Path: native/soul_sim/src/session/action.rs
//! Summary: 入力とアクション（移動・射撃・昇格・スキル購入・属性・ボス）と衝突エントリポイント

use crate::error::SkillError;
use crate::game_logic::systems::combat::{self, DamageOutcome};
use crate::game_logic::systems::{elements, items, progression, spawn, weapons};
use crate::world::GameWorld;
use soul_core::achievement::{AchievementCategory, AchievementId};
use soul_core::constants::PLAYER_RADIUS;
use soul_core::element::Element;
use soul_core::enemy::Archetype;
use soul_core::skill::SkillId;

impl GameWorld {
    /// 移動入力（長さは問わない。integrate で正規化される）
    pub fn set_input(&mut self, dx: f32, dy: f32) {
        self.0.player.input_dx = dx;
        self.0.player.input_dy = dy;
    }

    /// 外部の物理層が動かしたプレイヤー座標を取り込む
    pub fn sync_player_position(&mut self, x: f32, y: f32) {
        let w = &mut self.0;
        (w.player.x, w.player.y) = w.map.clamp(x, y, PLAYER_RADIUS);
    }

    /// 手動射撃。クールダウン中なら false。
    pub fn fire(&mut self) -> bool {
        let w = &mut self.0;
        if !w.session_active {
            return false;
        }
        weapons::fire(w)
    }

    /// 支払ったコストを返す（昇格できなければ 0）
    pub fn upgrade_weapon(&mut self) -> u32 {
        if !self.0.session_active {
            return 0;
        }
        weapons::try_upgrade(&mut self.0)
    }

    pub fn toggle_auto_fire(&mut self) -> bool {
        self.0.weapon.toggle_auto_fire()
    }

    pub fn set_temporary_weapon(&mut self, tier: usize, duration_ms: f64) {
        weapons::set_temporary_weapon(&mut self.0, tier, duration_ms);
    }

    /// スキルを購入し、支払ったコストを返す
    pub fn purchase_skill(&mut self, id: SkillId) -> Result<u32, SkillError> {
        progression::purchase_skill(&mut self.0, id)
    }

    /// "lifeRegen" などのキーで購入する
    pub fn purchase_skill_by_key(&mut self, key: &str) -> Result<u32, SkillError> {
        let id = SkillId::from_key(key).ok_or_else(|| SkillError::UnknownSkill(key.to_string()))?;
        self.purchase_skill(id)
    }

    pub fn set_active_element(&mut self, element: Option<Element>) {
        elements::set_active_element(&mut self.0, element);
    }

    /// ボスを出してスロット番号を返す
    pub fn spawn_boss(&mut self) -> usize {
        spawn::spawn_boss(&mut self.0)
    }

    pub fn spawn_at(&mut self, x: f32, y: f32, archetype: Archetype, scale: f32) -> usize {
        spawn::spawn_enemy(&mut self.0, x, y, archetype, scale)
    }

    /// 敵にダメージを与え、倒れた場合は撃破時処理まで済ませる
    pub fn apply_damage(&mut self, enemy: usize, amount: f32) -> DamageOutcome {
        let outcome = combat::apply_damage(&mut self.0, enemy, amount);
        combat::resolve_deaths(&mut self.0);
        outcome
    }

    /// 解除済みなら false（報酬は 1 回だけ）
    pub fn unlock_achievement(&mut self, id: AchievementId) -> bool {
        progression::unlock_achievement(&mut self.0, id)
    }

    pub fn check_achievement(&mut self, category: AchievementCategory, value: u64) {
        progression::check_achievement(&mut self.0, category, value);
    }

    // ── 衝突エントリポイント（外部の物理層、または内蔵の円判定から呼ばれる） ──

    pub fn on_bullet_hit_enemy(&mut self, bullet: usize, enemy: usize) {
        combat::on_bullet_hit_enemy(&mut self.0, bullet, enemy);
    }

    pub fn on_player_enemy_contact(&mut self, enemy: usize) {
        combat::on_player_enemy_contact(&mut self.0, enemy);
    }

    pub fn on_player_enemy_bullet(&mut self, bullet: usize) {
        combat::on_player_enemy_bullet(&mut self.0, bullet);
    }

    pub fn on_player_trap(&mut self, trap: usize) {
        combat::on_player_trap(&mut self.0, trap);
    }

    pub fn on_player_chest(&mut self, chest: usize) {
        items::open_chest(&mut self.0, chest);
    }

    pub fn on_player_soul(&mut self, soul: usize) {
        items::collect_soul(&mut self.0, soul);
    }
}

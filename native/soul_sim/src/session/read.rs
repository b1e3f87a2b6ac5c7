//! Path: native/soul_sim/src/session/read.rs
//! Summary: 読み取り API（プレイヤー・経済・武器・ウェーブ・成長・HUD スナップショット）

use crate::progression::UnlockRecord;
use crate::snapshot::{build_enemy_views, build_hud_snapshot, EnemyView, HudSnapshot};
use crate::world::{GameWorld, WavePhase};
use soul_core::achievement::AchievementId;
use soul_core::element::Element;
use soul_core::skill::SkillId;
use soul_core::util::MapBounds;
use soul_core::weapon::WeaponTier;

impl GameWorld {
    // ── プレイヤー ──

    pub fn health(&self) -> i32 {
        self.0.player.health
    }

    pub fn max_health(&self) -> i32 {
        self.0.player.max_health
    }

    pub fn player_position(&self) -> (f32, f32) {
        (self.0.player.x, self.0.player.y)
    }

    pub fn map_bounds(&self) -> MapBounds {
        self.0.map
    }

    pub fn is_invulnerable(&self) -> bool {
        self.0.player.is_invulnerable(self.0.now_ms)
    }

    // ── 経済・武器 ──

    pub fn souls(&self) -> u32 {
        self.0.economy.souls
    }

    /// 一時武器で上書き中ならそのティア
    pub fn weapon_tier(&self) -> usize {
        self.0.weapon.current_tier()
    }

    pub fn weapon_info(&self) -> &'static WeaponTier {
        self.0.weapon.tier()
    }

    pub fn has_next_tier(&self) -> bool {
        self.0.weapon.has_next_tier()
    }

    pub fn next_tier_info(&self) -> Option<&'static WeaponTier> {
        self.0.weapon.next_tier_info()
    }

    pub fn auto_fire(&self) -> bool {
        self.0.weapon.auto_fire
    }

    // ── ウェーブ・セッション ──

    /// 1 始まり。最初のウェーブ開始前は 0。
    pub fn wave_number(&self) -> u32 {
        self.0.waves.number
    }

    pub fn total_waves(&self) -> u32 {
        self.0.waves.total_waves()
    }

    pub fn enemies_remaining(&self) -> u32 {
        self.0.waves.enemies_remaining
    }

    pub fn wave_phase(&self) -> WavePhase {
        self.0.waves.phase
    }

    pub fn is_victory(&self) -> bool {
        self.0.waves.is_victory()
    }

    pub fn is_game_over(&self) -> bool {
        !self.0.session_active
    }

    // ── 成長 ──

    pub fn active_element(&self) -> Option<Element> {
        self.0.elements.active
    }

    pub fn has_skill(&self, id: SkillId) -> bool {
        self.0.progression.skills.has_skill(id)
    }

    /// 全実績の解除状態（永続化と同じ形式）
    pub fn achievements(&self) -> Vec<UnlockRecord> {
        self.0.progression.achievements.records()
    }

    pub fn is_achievement_unlocked(&self, id: AchievementId) -> bool {
        self.0.progression.achievements.is_unlocked(id)
    }

    // ── ワールド・計測 ──

    pub fn enemy_count(&self) -> usize {
        self.0.enemies.count
    }

    pub fn enemy_views(&self) -> Vec<EnemyView> {
        build_enemy_views(&self.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.0.elapsed_ms
    }

    /// 直近フレームのシミュレーション処理時間（ms）
    pub fn frame_time_ms(&self) -> f64 {
        self.0.last_frame_time_ms
    }

    pub fn hud_snapshot(&self) -> HudSnapshot {
        build_hud_snapshot(&self.0)
    }
}

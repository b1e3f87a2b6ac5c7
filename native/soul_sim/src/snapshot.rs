//! Path: native/soul_sim/src/snapshot.rs
//! Summary: GameWorldInner から UI / 描画層向けのスナップショットを構築
//!
//! 描画側はワールドを直接触らず、毎フレームこのコピーだけを読む。

use crate::world::GameWorldInner;
use serde::Serialize;
use soul_core::achievement::ACHIEVEMENTS;
use soul_core::enemy::Archetype;
use soul_core::skill::SkillId;

/// 装備中の武器
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeaponHud {
    pub name:      &'static str,
    pub tier:      usize,
    pub damage:    i32,
    pub range:     f32,
    pub color:     u32,
    /// 一時武器で上書き中
    pub temporary: bool,
    /// 次のティアのコスト（最上位なら None）
    pub next_cost: Option<u32>,
    pub auto_fire: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub health:                 i32,
    pub max_health:             i32,
    pub invulnerable:           bool,
    /// 無敵中の点滅で非表示なら false
    pub player_visible:         bool,
    pub souls:                  u32,
    pub weapon:                 WeaponHud,
    pub wave:                   u32,
    pub total_waves:            u32,
    pub enemies_remaining:      u32,
    pub active_element:         Option<&'static str>,
    pub skills:                 Vec<(&'static str, bool)>,
    pub achievements_unlocked:  usize,
    pub achievements_total:     usize,
    pub enemy_count:            usize,
    pub elapsed_ms:             f64,
    pub victory:                bool,
    pub game_over:              bool,
}

/// 描画用の敵 1 体分
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyView {
    pub index:       usize,
    pub archetype:   Archetype,
    pub x:           f32,
    pub y:           f32,
    pub hp:          f32,
    pub max_hp:      f32,
    pub scale:       f32,
    pub tint:        u32,
    pub alpha:       f32,
    pub facing_left: bool,
}

pub fn build_hud_snapshot(w: &GameWorldInner) -> HudSnapshot {
    let tier = w.weapon.tier();
    HudSnapshot {
        health:                w.player.health,
        max_health:            w.player.max_health,
        invulnerable:          w.player.is_invulnerable(w.now_ms),
        player_visible:        w.player.is_visible(w.now_ms),
        souls:                 w.economy.souls,
        weapon: WeaponHud {
            name:      tier.name,
            tier:      w.weapon.current_tier(),
            damage:    w.weapon.projectile_damage(),
            range:     tier.range,
            color:     tier.color,
            temporary: w.weapon.temporary.is_some(),
            next_cost: w.weapon.next_tier_info().map(|t| t.unlock_cost),
            auto_fire: w.weapon.auto_fire,
        },
        wave:                  w.waves.number,
        total_waves:           w.waves.total_waves(),
        enemies_remaining:     w.waves.enemies_remaining,
        active_element:        w.elements.active.map(|e| e.name()),
        skills:                SkillId::ALL
            .iter()
            .map(|&id| (id.key(), w.progression.skills.has_skill(id)))
            .collect(),
        achievements_unlocked: w.progression.achievements.unlocked_count(),
        achievements_total:    ACHIEVEMENTS.len(),
        enemy_count:           w.enemies.count,
        elapsed_ms:            w.elapsed_ms,
        victory:               w.waves.is_victory(),
        game_over:             w.player.is_dead(),
    }
}

pub fn build_enemy_views(w: &GameWorldInner) -> Vec<EnemyView> {
    let e = &w.enemies;
    let mut views = Vec::with_capacity(e.count);
    for i in e.iter_alive() {
        views.push(EnemyView {
            index:       i,
            archetype:   e.archetypes[i],
            x:           e.positions_x[i],
            y:           e.positions_y[i],
            hp:          e.hp[i],
            max_hp:      e.max_hp[i],
            scale:       e.scale[i],
            tint:        e.tint[i],
            alpha:       e.alpha[i],
            facing_left: e.facing_left[i],
        });
    }
    views
}

//! Path: native/soul_sim/src/game_logic/systems/combat.rs
//! Summary: 戦闘解決（敵へのダメージ・会心・撃破時処理・プレイヤー被弾・接触/弾/トラップ）

use super::elements::{apply_element_on_hit, set_active_element};
use super::items::{spawn_boss_reward, spawn_drops};
use super::progression::check_achievement;
use super::spawn::spawn_enemy;
use crate::game_logic::chase_ai::enemies_within_into;
use crate::world::{FrameEvent, GameWorldInner};
use soul_core::achievement::AchievementCategory;
use soul_core::constants::{
    CONTACT_KNOCKBACK, ENEMY_BULLET_DAMAGE, EXPLOSION_DAMAGE, EXPLOSION_KNOCKBACK,
    EXPLOSION_RADIUS, SPLIT_OFFSET, SPLIT_SCALE, TRAP_DAMAGE, TRAP_KNOCKBACK,
};
use soul_core::element::Element;
use soul_core::enemy::{Archetype, AttackType};
use soul_core::skill::{
    SkillId, CRITICAL_CHANCE, CRITICAL_MULTIPLIER, REFLECT_FRACTION, REFLECT_RADIUS,
};

/// `apply_damage` の結果
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageOutcome {
    /// この呼び出しで HP が 0 以下になった
    pub died:         bool,
    /// 会心込みで実際に与えたダメージ
    pub final_damage: f32,
}

impl DamageOutcome {
    const NONE: DamageOutcome = DamageOutcome { died: false, final_damage: 0.0 };
}

/// 敵にダメージを与える。死亡・空きスロットへの呼び出しは何もしない。
/// HP が 0 以下になったら撃破キューに積む（処理は `resolve_deaths`）。
pub(crate) fn apply_damage(w: &mut GameWorldInner, idx: usize, raw: f32) -> DamageOutcome {
    if !w.enemies.is_alive(idx) || raw <= 0.0 {
        return DamageOutcome::NONE;
    }
    let mut damage = raw;
    if w.progression.skills.has_skill(SkillId::CriticalHit) && w.rng.chance(CRITICAL_CHANCE) {
        damage *= CRITICAL_MULTIPLIER as f32;
        w.frame_events.push(FrameEvent::CriticalHit { index: idx, damage });
    }
    w.enemies.hp[idx] -= damage;
    let died = w.enemies.hp[idx] <= 0.0 && w.enemies.mark_dead(idx);
    if died {
        w.death_queue.push_back(idx);
    }
    DamageOutcome { died, final_damage: damage }
}

/// 撃破キューを空になるまで処理する。撃破時処理の中で新たに倒れた敵も同じループで扱う。
pub(crate) fn resolve_deaths(w: &mut GameWorldInner) {
    while let Some(idx) = w.death_queue.pop_front() {
        let archetype = w.enemies.archetypes[idx];
        let x = w.enemies.positions_x[idx];
        let y = w.enemies.positions_y[idx];
        log::debug!("enemy {} ({}) died at ({:.0}, {:.0})", idx, archetype.name(), x, y);

        // 撃破時の属性エフェクトは解除イベントを 1 回だけ出す
        let expired: Vec<Element> = w.enemies.effects[idx].active_elements().collect();
        for element in expired {
            w.frame_events.push(FrameEvent::EffectExpired { index: idx, element });
        }

        match archetype {
            Archetype::Explosive => explode(w, x, y, idx),
            Archetype::Splitter  => split(w, idx, x, y),
            Archetype::Boss      => {
                spawn_boss_reward(w, x, y);
                let element = Element::random(&mut w.rng);
                set_active_element(w, Some(element));
            }
            _ => {}
        }

        spawn_drops(w, x, y, archetype.drop_tier());

        w.pending_kills += 1;
        w.progression.total_kills += 1;
        w.frame_events.push(FrameEvent::EnemyKilled { archetype, x, y });
        w.enemies.release(idx);

        let kills = w.progression.total_kills;
        check_achievement(w, AchievementCategory::Kill, kills);
    }
}

/// 爆発: 半径内のプレイヤーに 20、他の敵に 10 ダメージ
fn explode(w: &mut GameWorldInner, x: f32, y: f32, source: usize) {
    w.frame_events.push(FrameEvent::Explosion { x, y, radius: EXPLOSION_RADIUS });

    let dx = w.player.x - x;
    let dy = w.player.y - y;
    if dx * dx + dy * dy <= EXPLOSION_RADIUS * EXPLOSION_RADIUS {
        damage_player(w, EXPLOSION_DAMAGE, Some((x, y)), EXPLOSION_KNOCKBACK);
    }

    let mut targets = std::mem::take(&mut w.query_buf);
    enemies_within_into(&w.enemies, x, y, EXPLOSION_RADIUS, Some(source), &mut targets);
    for &i in &targets {
        apply_damage(w, i, EXPLOSION_DAMAGE as f32 / 2.0);
    }
    w.query_buf = targets;
}

/// 分裂: ±20 の位置に Normal を 2 体（スケール 0.7、HP は Normal の半分、親の色）
fn split(w: &mut GameWorldInner, parent: usize, x: f32, y: f32) {
    let tint = w.enemies.tint[parent];
    let child_hp = Archetype::Normal.params().max_hp / 2.0;
    for offset in [-SPLIT_OFFSET, SPLIT_OFFSET] {
        let child = spawn_enemy(w, x + offset, y + offset, Archetype::Normal, SPLIT_SCALE);
        w.enemies.hp[child] = child_hp;
        w.enemies.max_hp[child] = child_hp;
        w.enemies.tint[child] = tint;
    }
}

/// プレイヤーへのダメージ。無敵中は false。
/// `from` があればそこから押し出す。HP が 0 になったらセッションを終える。
pub(crate) fn damage_player(
    w: &mut GameWorldInner,
    amount: i32,
    from: Option<(f32, f32)>,
    knockback: f32,
) -> bool {
    if !w.player.take_damage(amount, w.now_ms) {
        return false;
    }
    w.frame_events.push(FrameEvent::PlayerDamaged { damage: amount });
    if let Some((fx, fy)) = from {
        w.player.apply_knockback(fx, fy, knockback);
    }

    if w.progression.skills.has_skill(SkillId::DamageReflect) {
        let reflected = (amount as f32 * REFLECT_FRACTION).ceil();
        let (px, py) = (w.player.x, w.player.y);
        let mut targets = std::mem::take(&mut w.query_buf);
        enemies_within_into(&w.enemies, px, py, REFLECT_RADIUS, None, &mut targets);
        for &i in &targets {
            apply_damage(w, i, reflected);
        }
        w.query_buf = targets;
    }

    if w.player.is_dead() && w.session_active {
        log::info!("game over at {:.1}s (wave {})", w.elapsed_ms / 1000.0, w.waves.number);
        w.session_active = false;
        w.scheduler.clear();
        w.frame_events.push(FrameEvent::GameOver);
    }
    true
}

/// 弾 → 敵。弾は命中で消え、属性があれば命中後に反応させる。
pub(crate) fn on_bullet_hit_enemy(w: &mut GameWorldInner, bullet: usize, enemy: usize) {
    if !w.bullets.is_alive(bullet) || !w.enemies.is_alive(enemy) {
        return;
    }
    let damage = w.bullets.damage[bullet];
    let element = w.bullets.element[bullet];
    let hit_x = w.enemies.positions_x[enemy];
    let hit_y = w.enemies.positions_y[enemy];
    w.bullets.kill(bullet);

    apply_damage(w, enemy, damage as f32);
    if let Some(element) = element {
        apply_element_on_hit(w, enemy, element, damage, hit_x, hit_y);
    }
    resolve_deaths(w);
}

/// プレイヤー ↔ 敵の接触
pub(crate) fn on_player_enemy_contact(w: &mut GameWorldInner, enemy: usize) {
    if !w.enemies.is_alive(enemy) {
        return;
    }
    let ex = w.enemies.positions_x[enemy];
    let ey = w.enemies.positions_y[enemy];
    let damage = w.enemies.contact_damage[enemy];
    if w.enemies.attack_types[enemy] == AttackType::Suicide {
        // 自爆型は撃破扱いにせず消える
        let landed = damage_player(w, damage * 2, Some((ex, ey)), CONTACT_KNOCKBACK);
        if landed {
            w.enemies.kill(enemy);
        }
    } else {
        damage_player(w, damage, Some((ex, ey)), CONTACT_KNOCKBACK);
    }
    resolve_deaths(w);
}

/// プレイヤー ↔ 敵弾。ダメージが通ったときだけ弾を消す。
pub(crate) fn on_player_enemy_bullet(w: &mut GameWorldInner, bullet: usize) {
    if !w.enemy_bullets.is_alive(bullet) {
        return;
    }
    if damage_player(w, ENEMY_BULLET_DAMAGE, None, 0.0) {
        w.enemy_bullets.kill(bullet);
    }
    resolve_deaths(w);
}

/// プレイヤー ↔ トラップ。1 つのトラップは 1 回だけ発動する。
pub(crate) fn on_player_trap(w: &mut GameWorldInner, trap: usize) {
    if !w.hazards.trigger_trap(trap) {
        return;
    }
    let (tx, ty) = (w.hazards.traps[trap].x, w.hazards.traps[trap].y);
    w.frame_events.push(FrameEvent::TrapTriggered { x: tx, y: ty });
    damage_player(w, TRAP_DAMAGE, Some((tx, ty)), TRAP_KNOCKBACK);
    resolve_deaths(w);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::test_world;

    fn spawn(w: &mut GameWorldInner, x: f32, y: f32, archetype: Archetype) -> usize {
        spawn_enemy(w, x, y, archetype, 1.0)
    }

    fn killed(w: &GameWorldInner) -> usize {
        w.frame_events
            .iter()
            .filter(|e| matches!(e, FrameEvent::EnemyKilled { .. }))
            .count()
    }

    #[test]
    fn boss_dies_on_third_twenty_damage_hit_and_rewards_once() {
        let mut w = test_world();
        let boss = spawn(&mut w, 500.0, 500.0, Archetype::Boss);
        let souls_before = w.souls.count;
        for hit in 1..=3 {
            let outcome = apply_damage(&mut w, boss, 20.0);
            resolve_deaths(&mut w);
            assert_eq!(outcome.died, hit == 3);
        }
        assert!(!w.enemies.is_alive(boss));
        // ボス報酬 20 個 + 通常ドロップ 7〜12 個
        let dropped = w.souls.count - souls_before;
        assert!((27..=32).contains(&dropped), "dropped {dropped}");
        assert!(w.elements.active.is_some());
        assert_eq!(killed(&w), 1);
        // 死体への追撃は何も起こさない
        let again = apply_damage(&mut w, boss, 20.0);
        resolve_deaths(&mut w);
        assert!(!again.died);
        assert_eq!(killed(&w), 1);
    }

    #[test]
    fn surviving_enemy_never_triggers_death() {
        let mut w = test_world();
        let e = spawn(&mut w, 500.0, 500.0, Archetype::Elite);
        for _ in 0..9 {
            apply_damage(&mut w, e, 1.0);
        }
        resolve_deaths(&mut w);
        assert!(w.enemies.is_alive(e));
        assert_eq!(killed(&w), 0);
    }

    #[test]
    fn splitter_spawns_two_half_health_children_with_parent_tint() {
        let mut w = test_world();
        let s = spawn(&mut w, 500.0, 500.0, Archetype::Splitter);
        apply_damage(&mut w, s, 10.0);
        resolve_deaths(&mut w);
        let children: Vec<usize> = w.enemies.iter_alive().collect();
        assert_eq!(children.len(), 2);
        for &c in &children {
            assert_eq!(w.enemies.archetypes[c], Archetype::Normal);
            assert!((w.enemies.hp[c] - 1.5).abs() < 0.001);
            assert_eq!(w.enemies.tint[c], 0x00ff00);
            assert!((w.enemies.scale[c] - 0.7).abs() < 0.001);
        }
        let xs: Vec<f32> = children.iter().map(|&c| w.enemies.positions_x[c]).collect();
        assert!(xs.contains(&480.0) && xs.contains(&520.0));
    }

    #[test]
    fn explosion_hurts_player_and_neighbours_but_not_far_enemies() {
        let mut w = test_world();
        w.now_ms = 1000.0;
        let (px, py) = (w.player.x, w.player.y);
        let bomb = spawn(&mut w, px + 100.0, py, Archetype::Explosive);
        let near = spawn(&mut w, px + 150.0, py, Archetype::Elite);
        let far = spawn(&mut w, px + 400.0, py, Archetype::Elite);
        apply_damage(&mut w, bomb, 5.0);
        resolve_deaths(&mut w);
        assert_eq!(w.player.health, 80);
        assert!((w.enemies.hp[near] - 0.0).abs() < 0.001 || !w.enemies.is_alive(near));
        assert!((w.enemies.hp[far] - 10.0).abs() < 0.001);
        assert!(w.player.knockback_vx < 0.0);
    }

    #[test]
    fn chained_explosions_resolve_each_death_once() {
        let mut w = test_world();
        w.player.x = 100.0;
        w.player.y = 100.0;
        let a = spawn(&mut w, 800.0, 800.0, Archetype::Explosive);
        spawn(&mut w, 850.0, 800.0, Archetype::Explosive);
        spawn(&mut w, 900.0, 800.0, Archetype::Explosive);
        apply_damage(&mut w, a, 5.0);
        resolve_deaths(&mut w);
        assert_eq!(killed(&w), 3);
        assert_eq!(w.progression.total_kills, 3);
        assert_eq!(w.pending_kills, 3);
        assert!(w.enemies.is_empty());
    }

    #[test]
    fn contact_damage_and_invulnerability_window() {
        let mut w = test_world();
        w.now_ms = 1000.0;
        let (px, py) = (w.player.x, w.player.y);
        let e = spawn(&mut w, px + 10.0, py, Archetype::Normal);
        on_player_enemy_contact(&mut w, e);
        assert_eq!(w.player.health, 85);
        w.now_ms = 1050.0;
        on_player_enemy_contact(&mut w, e);
        assert_eq!(w.player.health, 85);
        assert!(w.player.has_been_damaged);
    }

    #[test]
    fn suicide_attacker_deals_double_and_disappears_without_kill_credit() {
        let mut w = test_world();
        let (px, py) = (w.player.x, w.player.y);
        let e = spawn(&mut w, px + 10.0, py, Archetype::Normal);
        w.enemies.attack_types[e] = AttackType::Suicide;
        on_player_enemy_contact(&mut w, e);
        assert_eq!(w.player.health, 70);
        assert!(!w.enemies.is_alive(e));
        assert_eq!(w.progression.total_kills, 0);
    }

    #[test]
    fn trap_fires_once() {
        let mut w = test_world();
        w.hazards.traps.push(crate::world::Trap { x: 900.0, y: 1000.0, triggered: false });
        on_player_trap(&mut w, 0);
        assert_eq!(w.player.health, 75);
        w.now_ms = 10_000.0;
        on_player_trap(&mut w, 0);
        assert_eq!(w.player.health, 75);
    }

    #[test]
    fn enemy_bullet_consumed_only_when_damage_lands() {
        let mut w = test_world();
        let b1 = w.enemy_bullets.spawn(0.0, 0.0, 0.0, 0.0, 8, 2000.0, None, 0, 8);
        let b2 = w.enemy_bullets.spawn(0.0, 0.0, 0.0, 0.0, 8, 2000.0, None, 0, 8);
        on_player_enemy_bullet(&mut w, b1);
        assert_eq!(w.player.health, 92);
        assert!(!w.enemy_bullets.is_alive(b1));
        on_player_enemy_bullet(&mut w, b2);
        assert!(w.enemy_bullets.is_alive(b2));
    }

    #[test]
    fn lethal_damage_ends_session() {
        let mut w = test_world();
        w.player.health = 10;
        damage_player(&mut w, 15, None, 0.0);
        assert_eq!(w.player.health, 0);
        assert!(!w.session_active);
        assert!(w.frame_events.contains(&FrameEvent::GameOver));
    }

    #[test]
    fn reflect_skill_damages_nearby_enemies() {
        let mut w = test_world();
        w.progression.skills.mark_unlocked(SkillId::DamageReflect, 0.0);
        let (px, py) = (w.player.x, w.player.y);
        let e = spawn(&mut w, px + 100.0, py, Archetype::Elite);
        damage_player(&mut w, 20, None, 0.0);
        assert!((w.enemies.hp[e] - 6.0).abs() < 0.001);
    }

    #[test]
    fn bullet_hit_consumes_bullet_and_damages() {
        let mut w = test_world();
        let e = spawn(&mut w, 500.0, 500.0, Archetype::Elite);
        let b = w.bullets.spawn(500.0, 500.0, 0.0, 0.0, 3, 1500.0, None, 0, 0);
        on_bullet_hit_enemy(&mut w, b, e);
        assert!(!w.bullets.is_alive(b));
        assert!((w.enemies.hp[e] - 7.0).abs() < 0.001);
        // 消えた弾での再呼び出しは無視
        on_bullet_hit_enemy(&mut w, b, e);
        assert!((w.enemies.hp[e] - 7.0).abs() < 0.001);
    }
}

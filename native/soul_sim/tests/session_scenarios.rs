//! 公開 API だけを使ったセッションシナリオ

use soul_sim::soul_core::achievement::AchievementId;
use soul_sim::soul_core::element::Element;
use soul_sim::soul_core::enemy::Archetype;
use soul_sim::{ConfigError, FileStore, FrameEvent, GameWorld, MemoryStore, SessionConfig, WavePhase};

/// 衝突・自動射撃・トラップを切った決定的な設定
fn quiet_config() -> SessionConfig {
    SessionConfig {
        trap_count:         0,
        auto_fire:          false,
        auto_upgrade:       false,
        builtin_collisions: false,
        rng_seed:           7,
        ..SessionConfig::default()
    }
}

fn quiet_world() -> GameWorld {
    GameWorld::new(quiet_config()).expect("valid config")
}

fn run_until(world: &mut GameWorld, now: &mut f64, until: f64) -> Vec<FrameEvent> {
    let mut events = Vec::new();
    while *now < until {
        *now += 16.0;
        world.update(*now, 16.0);
        events.extend(world.drain_frame_events());
    }
    events
}

#[test]
fn boss_dies_on_third_hit_and_rewards_once() {
    let mut world = quiet_world();
    let boss = world.spawn_at(1200.0, 1000.0, Archetype::Boss, 1.0);
    world.drain_frame_events();

    assert!(!world.apply_damage(boss, 20.0).died);
    assert!(!world.apply_damage(boss, 20.0).died);
    let third = world.apply_damage(boss, 20.0);
    assert!(third.died);
    assert_eq!(third.final_damage, 20.0);
    // 死亡後のヒットは何もしない
    assert!(!world.apply_damage(boss, 20.0).died);

    let events = world.drain_frame_events();
    let kills = events
        .iter()
        .filter(|e| matches!(e, FrameEvent::EnemyKilled { archetype: Archetype::Boss, .. }))
        .count();
    assert_eq!(kills, 1);
    let dropped = events.iter().filter(|e| matches!(e, FrameEvent::SoulDropped { .. })).count();
    // 撃破ドロップ 7..=12 個 + ボス報酬 20 個
    assert!((27..=32).contains(&dropped), "dropped {dropped}");
    assert!(world.active_element().is_some());
    assert!(world.is_achievement_unlocked(AchievementId::FirstKill));
    assert_eq!(world.enemy_count(), 0);
}

#[test]
fn contact_damage_grants_invulnerability() {
    let mut world = quiet_world();
    let enemy = world.spawn_at(1010.0, 1000.0, Archetype::Normal, 1.0);

    world.on_player_enemy_contact(enemy);
    assert_eq!(world.health(), 85);
    assert!(world.is_invulnerable());

    world.update(50.0, 50.0);
    world.on_player_enemy_contact(enemy);
    assert_eq!(world.health(), 85);

    world.update(600.0, 550.0);
    assert!(!world.is_invulnerable());
    world.on_player_enemy_contact(enemy);
    assert_eq!(world.health(), 70);
}

#[test]
fn upgrade_spends_exact_cost() {
    let config = SessionConfig { starting_souls: 120, ..quiet_config() };
    let mut world = GameWorld::new(config).expect("valid config");
    assert_eq!(world.upgrade_weapon(), 120);
    assert_eq!(world.weapon_tier(), 1);
    assert_eq!(world.weapon_info().name, "shotgun");
    assert_eq!(world.souls(), 0);
    // 次は rifle (300) なので買えない
    assert_eq!(world.upgrade_weapon(), 0);
    assert!(world.has_next_tier());
}

#[test]
fn achievements_survive_reload_without_second_reward() {
    let dir = std::env::temp_dir().join(format!("soul_sim_reload_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut first = GameWorld::with_store(quiet_config(), Box::new(FileStore::new(&dir)))
        .expect("valid config");
    assert!(first.unlock_achievement(AchievementId::FirstKill));
    assert_eq!(first.souls(), 10);
    assert!(!first.unlock_achievement(AchievementId::FirstKill));
    assert_eq!(first.souls(), 10);
    drop(first);

    let mut second = GameWorld::with_store(quiet_config(), Box::new(FileStore::new(&dir)))
        .expect("valid config");
    assert!(second.is_achievement_unlocked(AchievementId::FirstKill));
    assert!(!second.is_achievement_unlocked(AchievementId::Kill10));
    assert!(!second.unlock_achievement(AchievementId::FirstKill));
    assert_eq!(second.souls(), 0);

    let records = second.achievements();
    assert_eq!(records.len(), 13);
    assert!(records.iter().any(|r| r.id == "firstKill" && r.unlocked));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_store_starts_fresh() {
    let store = MemoryStore::with_value("soulHunterAchievements", "{ broken");
    let world = GameWorld::with_store(quiet_config(), Box::new(store)).expect("valid config");
    assert!(world.achievements().iter().all(|r| !r.unlocked));
}

#[test]
fn two_wave_session_reaches_victory() {
    let config = SessionConfig {
        total_waves:      2,
        wave_quotas:      vec![1, 2],
        wave_cooldown_ms: 100.0,
        ..quiet_config()
    };
    let mut world = GameWorld::new(config).expect("valid config");

    world.update(16.0, 16.0);
    assert_eq!(world.wave_number(), 1);
    assert_eq!(world.enemies_remaining(), 1);
    assert_eq!(world.wave_phase(), WavePhase::Active);

    let e = world.spawn_at(1200.0, 1200.0, Archetype::Normal, 1.0);
    assert!(world.apply_damage(e, 5.0).died);
    world.update(32.0, 16.0);
    assert_eq!(world.enemies_remaining(), 0);
    assert!(matches!(world.wave_phase(), WavePhase::Completed { .. }));
    world.update(48.0, 16.0);
    assert!(matches!(world.wave_phase(), WavePhase::Pending { .. }));

    world.update(200.0, 152.0);
    assert_eq!(world.wave_number(), 2);
    assert_eq!(world.enemies_remaining(), 2);
    // 最終ウェーブはボスから始まる
    let boss = world
        .enemy_views()
        .into_iter()
        .find(|v| v.archetype == Archetype::Boss)
        .expect("final wave boss");
    world.drain_frame_events();

    assert!(world.apply_damage(boss.index, 50.0).died);
    let e = world.spawn_at(300.0, 300.0, Archetype::Normal, 1.0);
    assert!(world.apply_damage(e, 3.0).died);
    world.update(216.0, 16.0);

    assert!(world.is_victory());
    assert_eq!(world.enemies_remaining(), 0);
    let events = world.drain_frame_events();
    assert!(events.contains(&FrameEvent::WaveCompleted { number: 2 }));
    assert!(events.contains(&FrameEvent::Victory));
    assert!(world.is_achievement_unlocked(AchievementId::CompleteAllWaves));
}

#[test]
fn fire_bullet_applies_burning_that_expires() {
    let mut world = quiet_world();
    world.set_active_element(Some(Element::Fire));
    let boss = world.spawn_at(1100.0, 1000.0, Archetype::Boss, 1.0);
    assert!(world.fire());
    // クールダウン中は撃てない
    assert!(!world.fire());

    world.on_bullet_hit_enemy(0, boss);
    let events = world.drain_frame_events();
    assert!(events.contains(&FrameEvent::ElementChanged { element: Some(Element::Fire) }));
    assert!(events.contains(&FrameEvent::EffectApplied { index: boss, element: Element::Fire }));

    let mut now = 0.0;
    let events = run_until(&mut world, &mut now, 3500.0);
    let expired = events
        .iter()
        .filter(|e| matches!(e, FrameEvent::EffectExpired { index, element: Element::Fire } if *index == boss))
        .count();
    assert_eq!(expired, 1);
    let view = world
        .enemy_views()
        .into_iter()
        .find(|v| v.index == boss)
        .expect("boss alive");
    // 命中 1 + 延焼が少なくとも 1 回
    assert!(view.hp <= 48.0, "hp {}", view.hp);
}

#[test]
fn invalid_json_config_is_reported() {
    let bad = GameWorld::from_config_json("{ \"total_waves\": ", Box::new(MemoryStore::new()));
    assert!(matches!(bad, Err(ConfigError::Parse(_))));

    let short = GameWorld::from_config_json(
        r#"{ "total_waves": 4, "wave_quotas": [1, 2, 3] }"#,
        Box::new(MemoryStore::new()),
    );
    assert!(matches!(short, Err(ConfigError::QuotaLength { expected: 4, actual: 3 })));
}

#[test]
fn hud_snapshot_serializes_to_json() {
    let mut world = quiet_world();
    world.update(16.0, 16.0);
    let json = serde_json::to_value(world.hud_snapshot()).expect("serializable");
    assert_eq!(json["health"], 100);
    assert_eq!(json["wave"], 1);
    assert_eq!(json["weapon"]["name"], "pistol");
}

#[test]
fn neighbouring_healers_restore_one_hp_per_tick() {
    let mut world = quiet_world();
    world.spawn_at(1500.0, 1500.0, Archetype::Healer, 1.0);
    world.spawn_at(1520.0, 1500.0, Archetype::Healer, 1.0);
    let ally = world.spawn_at(1510.0, 1500.0, Archetype::Elite, 1.0);
    assert!(!world.apply_damage(ally, 5.0).died);

    world.update(16.0, 16.0);
    let view = world
        .enemy_views()
        .into_iter()
        .find(|v| v.index == ally)
        .expect("ally alive");
    assert_eq!(view.hp, 6.0);
}

#[test]
fn map_size_comes_from_config_json() {
    let world = GameWorld::from_config_json(
        r#"{ "map_width": 3200, "map_height": 2600, "trap_count": 0 }"#,
        Box::new(MemoryStore::new()),
    )
    .expect("valid config");
    assert_eq!(world.player_position(), (1600.0, 1300.0));
    assert_eq!(world.map_bounds().width, 3200.0);

    let small = GameWorld::from_config_json(r#"{ "map_width": 900 }"#, Box::new(MemoryStore::new()));
    assert!(matches!(small, Err(ConfigError::MapTooSmall { .. })));
}

//! Path: native/soul_core/src/constants.rs
//! Summary: マップサイズ・プレイヤー・ウェーブ・経済などの定数定義
//!
//! 時刻は ms（f64）、座標と速度は px / px/s（f32）で統一する。

// Map size
pub const MAP_WIDTH:  f32 = 2000.0;
pub const MAP_HEIGHT: f32 = 2000.0;

/// 1 フレームのシミュレーション処理にかけてよい時間（60fps）
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

/// スポーン位置をマップ端から離す余白
pub const SPAWN_MARGIN: f32 = 50.0;
/// トラップ・宝箱の配置余白
pub const HAZARD_MARGIN: f32 = 100.0;

// Player
pub const PLAYER_MAX_HEALTH:       i32 = 100;
pub const PLAYER_SPEED:            f32 = 300.0;
pub const PLAYER_RADIUS:           f32 = 24.0;
/// 被弾後の無敵時間（100ms × 5 回の点滅）
pub const INVULNERABLE_DURATION_MS: f64 = 500.0;
pub const INVULNERABLE_FLASH_MS:    f64 = 100.0;
/// ノックバック速度の減衰率（1 秒あたり）
pub const KNOCKBACK_DECAY_PER_SEC: f32 = 8.0;

// Collision radii
pub const ENEMY_BASE_RADIUS: f32 = 20.0;
pub const BULLET_RADIUS:     f32 = 6.0;
pub const SOUL_RADIUS:       f32 = 12.0;
pub const TRAP_RADIUS:       f32 = 20.0;
pub const CHEST_RADIUS:      f32 = 30.0;
pub const CELL_SIZE:         f32 = 80.0;

// Enemy AI
pub const CHASE_DISTANCE:       f32 = 500.0;
pub const WANDER_SPEED:         f32 = 50.0;
pub const WANDER_MIN_MS:        f64 = 2000.0;
pub const WANDER_MAX_MS:        f64 = 5000.0;
pub const DASH_CHANCE:          f32 = 0.01;
pub const DASH_MULTIPLIER:      f32 = 3.0;
pub const TELEPORT_RADIUS:      f32 = 300.0;
pub const ENEMY_BULLET_SPEED:   f32 = 300.0;
pub const ENEMY_BULLET_DAMAGE:  i32 = 8;
pub const ENEMY_BULLET_LIFETIME_MS: f64 = 2000.0;

// Enemy specials
pub const STEALTH_CYCLE_MS:   f64 = 5000.0;
pub const STEALTH_HIDDEN_MS:  f64 = 2000.0;
pub const STEALTH_ALPHA:      f32 = 0.2;
pub const HEAL_INTERVAL_MS:   f64 = 3000.0;
pub const HEAL_RADIUS:        f32 = 100.0;
pub const HEAL_MAX_TARGETS:   usize = 3;
pub const HEAL_AMOUNT:        f32 = 1.0;

// On-death payloads
pub const EXPLOSION_RADIUS:        f32 = 150.0;
pub const EXPLOSION_DAMAGE:        i32 = 20;
pub const EXPLOSION_KNOCKBACK:     f32 = 300.0;
pub const CONTACT_KNOCKBACK:       f32 = 300.0;
pub const TRAP_KNOCKBACK:          f32 = 400.0;
pub const SPLIT_OFFSET:            f32 = 20.0;
pub const SPLIT_SCALE:             f32 = 0.7;
pub const BOSS_REWARD_SOULS:       usize = 20;
pub const BOSS_REWARD_RADIUS:      f32 = 100.0;
pub const BOSS_SPAWN_DISTANCE:     f32 = 300.0;

// Ambient spawning
pub const SPAWN_MIN_DIST:          f32 = 600.0;
pub const SPAWN_MAX_DIST:          f32 = 900.0;
pub const SPAWN_REJECT_DIST:       f32 = 500.0;
pub const SPAWN_MAX_ATTEMPTS:      usize = 20;
pub const SPAWN_INTERVAL_MIN_MS:   f64 = 1000.0;
pub const SPAWN_INTERVAL_MAX_MS:   f64 = 3000.0;
pub const WAVE_FIRST_SPAWN_MS:     f64 = 1000.0;

// Waves
pub const TOTAL_WAVES:          u32 = 10;
pub const WAVE_QUOTAS:          [u32; 10] = [5, 8, 12, 15, 20, 25, 30, 35, 40, 50];
pub const WAVE_COOLDOWN_MS:     f64 = 10_000.0;
pub const FIRST_WAVE_DELAY_MS:  f64 = 0.0;

// Weapons
pub const PLAYER_BULLET_LIFETIME_MS: f64 = 1500.0;

// Souls / economy
pub const SOUL_LIFETIME_MS:        f64 = 30_000.0;
pub const SOUL_DROP_SPREAD:        f32 = 30.0;
pub const COLLECT_RADIUS:          f32 = 150.0;
pub const MAGNET_MIN_SPEED:        f32 = 100.0;
pub const MAGNET_MAX_SPEED:        f32 = 500.0;

// Traps / chests
pub const TRAP_COUNT:              usize = 30;
pub const TRAP_DAMAGE:             i32 = 25;
pub const CHEST_FIRST_THRESHOLD:   u32 = 50;
pub const CHEST_THRESHOLD_STEP:    u32 = 75;
pub const CHEST_COOLDOWN_MS:       f64 = 60_000.0;
pub const CHEST_MIN_PLAYER_DIST:   f32 = 300.0;
pub const TEMP_WEAPON_DURATION_MS: f64 = 45_000.0;

/// 乱数シードの既定値
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_50E1;

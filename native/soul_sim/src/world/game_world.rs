//! Path: native/soul_sim/src/world/game_world.rs
//! Summary: ゲームワールド（GameWorldInner = 全サブシステムの状態, GameWorld = 公開ハンドル）

use super::{
    BulletWorld, Economy, ElementState, EnemyWorld, FrameEvent, HazardWorld, PlayerState,
    Scheduler, SpawnBudget, Trap, WaveDirector, WeaponState,
};
use crate::config::SessionConfig;
use crate::progression::{AchievementTracker, KeyValueStore, ProgressionState};
use soul_core::constants::{CELL_SIZE, HAZARD_MARGIN, TRAP_RADIUS};
use soul_core::item::SoulWorld;
use soul_core::physics::rng::SimpleRng;
use soul_core::physics::spatial_hash::CollisionWorld;
use soul_core::util::MapBounds;
use std::collections::VecDeque;

/// ゲームワールド内部状態
pub struct GameWorldInner {
    pub config:          SessionConfig,
    pub map:             MapBounds,
    pub frame_id:        u32,
    /// 直近の update で渡された時刻（ms）
    pub now_ms:          f64,
    /// 生存時間（ms）
    pub elapsed_ms:      f64,
    /// false になったら update は何もしない（ゲームオーバー）
    pub session_active:  bool,
    pub player:          PlayerState,
    pub enemies:         EnemyWorld,
    pub bullets:         BulletWorld,
    pub enemy_bullets:   BulletWorld,
    pub souls:           SoulWorld,
    pub hazards:         HazardWorld,
    pub weapon:          WeaponState,
    pub elements:        ElementState,
    pub economy:         Economy,
    pub waves:           WaveDirector,
    pub spawn:           SpawnBudget,
    pub progression:     ProgressionState,
    pub scheduler:       Scheduler,
    pub rng:             SimpleRng,
    pub collision:       CollisionWorld,
    /// 撃破待ちの敵（撃破時処理を 1 体ずつ順に流す）
    pub death_queue:     VecDeque<usize>,
    /// 前回のウェーブ判定以降の撃破数
    pub pending_kills:   u32,
    /// 近傍クエリ用バッファ（毎フレーム再利用）
    pub query_buf:       Vec<usize>,
    /// このフレームで発生したイベント（毎フレーム drain される）
    pub frame_events:    Vec<FrameEvent>,
    /// 直近フレームのシミュレーション処理時間（ミリ秒）
    pub last_frame_time_ms: f64,
}

impl GameWorldInner {
    pub fn new(config: SessionConfig, store: Box<dyn KeyValueStore>) -> Self {
        let mut rng = SimpleRng::new(config.rng_seed);
        let map = config.map_bounds();
        let achievements = AchievementTracker::load(store, &config.storage_key);

        let mut hazards = HazardWorld::new();
        for _ in 0..config.trap_count {
            let (x, y) = map.random_point(&mut rng, HAZARD_MARGIN);
            hazards.traps.push(Trap { x, y, triggered: false });
        }
        let mut collision = CollisionWorld::new(CELL_SIZE);
        let statics: Vec<(f32, f32, f32)> = hazards
            .traps
            .iter()
            .map(|t| (t.x, t.y, TRAP_RADIUS))
            .collect();
        collision.rebuild_static(&statics);

        let (cx, cy) = map.center();
        Self {
            map,
            frame_id:        0,
            now_ms:          0.0,
            elapsed_ms:      0.0,
            session_active:  true,
            player:          PlayerState::new(cx, cy),
            enemies:         EnemyWorld::new(),
            bullets:         BulletWorld::new(),
            enemy_bullets:   BulletWorld::new(),
            souls:           SoulWorld::new(),
            hazards,
            weapon:          WeaponState::new(config.auto_fire),
            elements:        ElementState::default(),
            economy:         Economy::new(config.starting_souls),
            waves:           WaveDirector::new(
                config.wave_quotas.clone(),
                config.wave_cooldown_ms,
                config.first_wave_delay_ms,
            ),
            spawn:           SpawnBudget::default(),
            progression:     ProgressionState::new(achievements),
            scheduler:       Scheduler::new(),
            rng,
            collision,
            death_queue:     VecDeque::new(),
            pending_kills:   0,
            query_buf:       Vec::new(),
            frame_events:    Vec::new(),
            last_frame_time_ms: 0.0,
            config,
        }
    }

    /// 衝突判定用の Spatial Hash を再構築する
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.dynamic.clear();
        for i in self.enemies.iter_alive() {
            self.collision.dynamic.insert(
                i,
                self.enemies.positions_x[i],
                self.enemies.positions_y[i],
            );
        }
    }
}

/// ゲームセッションの公開ハンドル。操作は `session` モジュールで実装する。
pub struct GameWorld(pub(crate) GameWorldInner);

#[cfg(test)]
pub(crate) fn test_world() -> GameWorldInner {
    use crate::progression::MemoryStore;
    let config = SessionConfig {
        trap_count:         0,
        auto_upgrade:       false,
        builtin_collisions: false,
        rng_seed:           42,
        ..SessionConfig::default()
    };
    GameWorldInner::new(config, Box::new(MemoryStore::new()))
}

//! 敵 AI ベンチマーク: 運動積分（rayon）・最近傍探索・1 フレーム更新

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use soul_sim::soul_core::enemy::Archetype;
use soul_sim::soul_core::util::MapBounds;
use soul_sim::{find_nearest_enemy_within, integrate_enemy_motion, EnemyWorld, GameWorld, SessionConfig};

fn setup_enemies(n: usize) -> EnemyWorld {
    let mut enemies = EnemyWorld::new();
    for i in 0..n {
        let x = (i as f32 * 1.7) % 2000.0;
        let y = (i as f32 * 2.3) % 2000.0;
        let idx = enemies.spawn(x, y, Archetype::Normal, 1.0);
        enemies.velocities_x[idx] = 30.0;
        enemies.velocities_y[idx] = -20.0;
    }
    enemies
}

fn setup_world(n: usize) -> GameWorld {
    let config = SessionConfig { trap_count: 0, ..SessionConfig::default() };
    let mut world = GameWorld::new(config).expect("default config");
    for i in 0..n {
        let x = 100.0 + (i as f32 * 13.0) % 1800.0;
        let y = 100.0 + (i as f32 * 7.0) % 1800.0;
        world.spawn_at(x, y, Archetype::Normal, 1.0);
    }
    world
}

fn bench_enemy_ai(c: &mut Criterion) {
    let n = 10_000;
    let dt = 0.016;

    c.bench_function("integrate_enemy_motion_rayon", |b| {
        b.iter_batched(
            || setup_enemies(n),
            |mut enemies| {
                integrate_enemy_motion(&mut enemies, dt, MapBounds::default());
                enemies
            },
            BatchSize::PerIteration,
        )
    });

    let enemies = setup_enemies(n);
    c.bench_function("find_nearest_enemy_within", |b| {
        b.iter(|| find_nearest_enemy_within(&enemies, 1000.0, 1000.0, 400.0))
    });

    c.bench_function("game_world_update_500", |b| {
        b.iter_batched(
            || setup_world(500),
            |mut world| {
                world.update(16.0, 16.0);
                world
            },
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(benches, bench_enemy_ai);
criterion_main!(benches);

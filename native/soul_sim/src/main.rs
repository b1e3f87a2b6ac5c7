//! Path: native/soul_sim/src/main.rs
//! Summary: ヘッドレス実行（描画なしで N フレーム回し、結果をログに出す）
//!
//! `soul_headless [frames]`。RUST_LOG=debug で各種イベントも出る。

use soul_sim::{FileStore, FrameEvent, GameWorld, SessionConfig};
use std::error::Error;

const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u64 = 60 * 60 * 3;

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };
    let store_dir = std::env::temp_dir().join("soul_hunter_headless");
    let mut world = GameWorld::with_store(SessionConfig::default(), Box::new(FileStore::new(&store_dir)))?;
    log::info!("headless run: {} frames, store at {}", frames, store_dir.display());

    let mut now = 0.0;
    let mut kills = 0u64;
    let mut worst_frame_ms = 0.0f64;
    for frame in 0..frames {
        // 8 秒で 1 周する円運動
        let t = frame as f32 * FRAME_MS as f32 / 8000.0 * std::f32::consts::TAU;
        world.set_input(t.cos(), t.sin());

        now += FRAME_MS;
        world.update(now, FRAME_MS);
        worst_frame_ms = worst_frame_ms.max(world.frame_time_ms());

        for event in world.drain_frame_events() {
            match event {
                FrameEvent::EnemyKilled { .. } => kills += 1,
                FrameEvent::WaveStarted { number, quota } => {
                    log::info!("wave {} started ({} enemies)", number, quota)
                }
                FrameEvent::AchievementUnlocked { id } => log::info!("achievement: {}", id.key()),
                FrameEvent::GameOver => log::info!("game over at frame {}", frame),
                _ => {}
            }
        }
        if world.is_game_over() || world.is_victory() {
            break;
        }
    }

    log::info!(
        "summary: wave {}/{}, kills {}, souls {}, hp {}/{}, survived {:.1}s, worst frame {:.3}ms",
        world.wave_number(),
        world.total_waves(),
        kills,
        world.souls(),
        world.health(),
        world.max_health(),
        world.elapsed_ms() / 1000.0,
        worst_frame_ms
    );
    log::info!("hud: {}", serde_json::to_string(&world.hud_snapshot())?);
    Ok(())
}

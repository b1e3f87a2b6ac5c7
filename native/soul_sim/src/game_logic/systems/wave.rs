//! Path: native/soul_sim/src/game_logic/systems/wave.rs
//! Summary: ウェーブ遷移への反応（スポーン予算・最終ボス・ウェーブ実績・勝利）

use super::progression::check_achievement;
use super::spawn::spawn_boss;
use crate::world::{FrameEvent, GameWorldInner, WaveTransition};
use soul_core::achievement::AchievementCategory;
use soul_core::constants::WAVE_FIRST_SPAWN_MS;

/// この tick の撃破数でウェーブを進める
pub(crate) fn update_waves(w: &mut GameWorldInner) {
    let kills = std::mem::take(&mut w.pending_kills);
    for transition in w.waves.tick(w.now_ms, kills) {
        match transition {
            WaveTransition::Started { number, quota } => {
                log::info!("wave {}/{} started (quota {})", number, w.waves.total_waves(), quota);
                w.spawn.reset(quota, w.now_ms + WAVE_FIRST_SPAWN_MS);
                w.player.has_been_damaged = false;
                w.frame_events.push(FrameEvent::WaveStarted { number, quota });
                check_achievement(w, AchievementCategory::ReachWave, number as u64);
                if w.waves.is_final_wave() {
                    spawn_boss(w);
                }
            }
            WaveTransition::Completed { number } => {
                log::info!("wave {} completed", number);
                w.frame_events.push(FrameEvent::WaveCompleted { number });
                if !w.player.has_been_damaged {
                    check_achievement(w, AchievementCategory::PerfectWave, 1);
                }
            }
            WaveTransition::Victory => {
                log::info!("all {} waves completed", w.waves.total_waves());
                w.frame_events.push(FrameEvent::Victory);
                check_achievement(w, AchievementCategory::AllWaves, 1);
            }
        }
    }
}

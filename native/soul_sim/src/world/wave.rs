//! Path: native/soul_sim/src/world/wave.rs
//! Summary: ウェーブ状態機械（Pending → Active → Completed → Pending | AllCompleted）とスポーン予算

/// ウェーブの段階。逆戻りしない。
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WavePhase {
    /// `starts_at` で次のウェーブを開始する
    Pending { starts_at: f64 },
    Active,
    /// クールダウン中（次の tick で Pending に戻る）
    Completed { cooldown_until: f64 },
    /// 全ウェーブ終了（勝利）
    AllCompleted,
}

/// `WaveDirector::tick` が報告する遷移
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveTransition {
    Started { number: u32, quota: u32 },
    Completed { number: u32 },
    Victory,
}

#[derive(Clone, Debug)]
pub struct WaveDirector {
    pub number:            u32,
    pub enemy_quota:       u32,
    pub enemies_remaining: u32,
    pub phase:             WavePhase,
    quotas:                Vec<u32>,
    cooldown_ms:           f64,
}

impl WaveDirector {
    pub fn new(quotas: Vec<u32>, cooldown_ms: f64, first_delay_ms: f64) -> Self {
        Self {
            number:            0,
            enemy_quota:       0,
            enemies_remaining: 0,
            phase:             WavePhase::Pending { starts_at: first_delay_ms },
            quotas,
            cooldown_ms,
        }
    }

    pub fn total_waves(&self) -> u32 {
        self.quotas.len() as u32
    }

    pub fn is_active(&self) -> bool {
        self.phase == WavePhase::Active
    }

    pub fn is_final_wave(&self) -> bool {
        self.number >= self.total_waves()
    }

    pub fn is_victory(&self) -> bool {
        self.phase == WavePhase::AllCompleted
    }

    /// 1 tick 分進める。`kills` はこの tick に撃破された敵の数。
    pub fn tick(&mut self, now_ms: f64, kills: u32) -> Vec<WaveTransition> {
        let mut transitions = Vec::new();
        match self.phase {
            WavePhase::Pending { starts_at } if now_ms >= starts_at => {
                self.number += 1;
                self.enemy_quota = self
                    .quotas
                    .get(self.number as usize - 1)
                    .copied()
                    .unwrap_or(0);
                self.enemies_remaining = self.enemy_quota;
                self.phase = WavePhase::Active;
                transitions.push(WaveTransition::Started {
                    number: self.number,
                    quota:  self.enemy_quota,
                });
            }
            WavePhase::Active if kills > 0 => {
                self.enemies_remaining = self.enemies_remaining.saturating_sub(kills);
                if self.enemies_remaining == 0 {
                    transitions.push(WaveTransition::Completed { number: self.number });
                    if self.is_final_wave() {
                        self.phase = WavePhase::AllCompleted;
                        transitions.push(WaveTransition::Victory);
                    } else {
                        self.phase = WavePhase::Completed {
                            cooldown_until: now_ms + self.cooldown_ms,
                        };
                    }
                }
            }
            WavePhase::Completed { cooldown_until } => {
                self.phase = WavePhase::Pending { starts_at: cooldown_until };
            }
            _ => {}
        }
        transitions
    }
}

/// 現ウェーブで残りスポーンできる数と次のスポーン時刻
#[derive(Clone, Debug, Default)]
pub struct SpawnBudget {
    pub remaining:     u32,
    pub next_spawn_at: f64,
}

impl SpawnBudget {
    pub fn reset(&mut self, quota: u32, next_spawn_at: f64) {
        self.remaining = quota;
        self.next_spawn_at = next_spawn_at;
    }

    pub fn consume(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

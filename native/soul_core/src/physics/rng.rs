//! Path: native/soul_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータと範囲ヘルパー

/// シード固定で再現可能な LCG。ゲームロジックの乱数はすべてこれを通す。
#[derive(Clone, Debug)]
pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// [0, 1) の一様乱数
    pub fn next_f32(&mut self) -> f32 {
        // 上位 24bit だけ使い、1.0 に丸め上がらないようにする
        (self.next_u32() >> 7) as f32 / (1u32 << 24) as f32
    }

    /// [min, max) の一様乱数
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// [min, max) の一様乱数（時刻計算用）
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f32() as f64 * (max - min)
    }

    /// [min, max] の整数（両端含む）
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        min + self.next_u32() % (max - min + 1)
    }

    /// 確率 `p` で true
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// [0, TAU) のランダムな角度
    pub fn angle(&mut self) -> f32 {
        self.next_f32() * std::f32::consts::TAU
    }
}

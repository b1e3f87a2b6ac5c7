//! Path: native/soul_core/src/util.rs
//! Summary: スポーン位置の棄却サンプリング・距離計算などの共通ユーティリティ

use crate::constants::{
    MAP_HEIGHT, MAP_WIDTH, SPAWN_MARGIN, SPAWN_MAX_ATTEMPTS, SPAWN_MAX_DIST, SPAWN_MIN_DIST,
    SPAWN_REJECT_DIST,
};
use crate::physics::rng::SimpleRng;

/// 二乗距離（sqrt を避ける）
#[inline]
pub fn dist_sq(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// マップの大きさ（左上が原点）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub width:  f32,
    pub height: f32,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self { width: MAP_WIDTH, height: MAP_HEIGHT }
    }
}

impl MapBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// 座標をマップ内 `[margin, size - margin]` に収める
    pub fn clamp(self, x: f32, y: f32, margin: f32) -> (f32, f32) {
        (
            x.clamp(margin, self.width - margin),
            y.clamp(margin, self.height - margin),
        )
    }

    pub fn contains(self, x: f32, y: f32, margin: f32) -> bool {
        (margin..=self.width - margin).contains(&x) && (margin..=self.height - margin).contains(&y)
    }

    /// `[margin, size - margin]²` から一様に 1 点
    pub fn random_point(self, rng: &mut SimpleRng, margin: f32) -> (f32, f32) {
        (
            rng.range_f32(margin, self.width - margin),
            rng.range_f32(margin, self.height - margin),
        )
    }
}

/// 棄却サンプリングの結果
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampled {
    pub x:        f32,
    pub y:        f32,
    /// 試行回数内に条件を満たせず最後のサンプルを使った
    pub fallback: bool,
}

/// `accept` を満たす点を最大 `max_attempts` 回まで `sample` で引く。
/// 満たせなければ最後のサンプルを返す。
pub fn sample_with_rejection(
    rng: &mut SimpleRng,
    max_attempts: usize,
    mut sample: impl FnMut(&mut SimpleRng) -> (f32, f32),
    accept: impl Fn(f32, f32) -> bool,
) -> Sampled {
    let mut last = (0.0, 0.0);
    for _ in 0..max_attempts.max(1) {
        last = sample(rng);
        if accept(last.0, last.1) {
            return Sampled { x: last.0, y: last.1, fallback: false };
        }
    }
    Sampled { x: last.0, y: last.1, fallback: true }
}

/// プレイヤー周囲 600〜900px の円環上に配置し、マップ内にクランプする。
/// クランプで 500px より近くなった点は棄却する。
pub fn spawn_position_around_player(
    rng: &mut SimpleRng,
    map: MapBounds,
    player_x: f32,
    player_y: f32,
) -> Sampled {
    let reject_sq = SPAWN_REJECT_DIST * SPAWN_REJECT_DIST;
    sample_with_rejection(
        rng,
        SPAWN_MAX_ATTEMPTS,
        |rng| {
            let angle = rng.angle();
            let dist = rng.range_f32(SPAWN_MIN_DIST, SPAWN_MAX_DIST);
            map.clamp(
                player_x + angle.cos() * dist,
                player_y + angle.sin() * dist,
                SPAWN_MARGIN,
            )
        },
        |x, y| dist_sq(x, y, player_x, player_y) >= reject_sq,
    )
}

/// 中心から半径 `radius` 以内のランダムな点
pub fn random_point_in_circle(rng: &mut SimpleRng, cx: f32, cy: f32, radius: f32) -> (f32, f32) {
    let angle = rng.angle();
    // sqrt で面積一様にする
    let r = radius * rng.next_f32().sqrt();
    (cx + angle.cos() * r, cy + angle.sin() * r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_in_open_field_respects_ring() {
        let mut rng = SimpleRng::new(12345);
        for _ in 0..200 {
            let s = spawn_position_around_player(&mut rng, MapBounds::default(), 1000.0, 1000.0);
            assert!(!s.fallback);
            let d = dist_sq(s.x, s.y, 1000.0, 1000.0).sqrt();
            assert!(d >= 500.0 && d <= 900.5, "dist {d}");
        }
    }

    #[test]
    fn spawn_stays_inside_map_near_corner() {
        let mut rng = SimpleRng::new(9);
        for _ in 0..200 {
            let s = spawn_position_around_player(&mut rng, MapBounds::default(), 60.0, 60.0);
            assert!(s.x >= SPAWN_MARGIN && s.x <= MAP_WIDTH - SPAWN_MARGIN);
            assert!(s.y >= SPAWN_MARGIN && s.y <= MAP_HEIGHT - SPAWN_MARGIN);
        }
    }

    #[test]
    fn spawn_respects_smaller_map() {
        let map = MapBounds::new(1200.0, 900.0);
        let mut rng = SimpleRng::new(3);
        for _ in 0..200 {
            let s = spawn_position_around_player(&mut rng, map, 600.0, 450.0);
            assert!(map.contains(s.x, s.y, SPAWN_MARGIN), "({}, {})", s.x, s.y);
        }
    }

    #[test]
    fn bounds_clamp_and_contain() {
        let map = MapBounds::new(500.0, 300.0);
        assert_eq!(map.center(), (250.0, 150.0));
        assert_eq!(map.clamp(-10.0, 400.0, 50.0), (50.0, 250.0));
        assert!(map.contains(50.0, 250.0, 50.0));
        assert!(!map.contains(49.0, 100.0, 50.0));
    }

    #[test]
    fn rejection_is_bounded_and_falls_back() {
        let mut rng = SimpleRng::new(1);
        let mut calls = 0;
        let s = sample_with_rejection(
            &mut rng,
            20,
            |_| {
                calls += 1;
                (calls as f32, 0.0)
            },
            |_, _| false,
        );
        assert!(s.fallback);
        assert!((s.x - 20.0).abs() < 0.001);
    }

    #[test]
    fn point_in_circle_within_radius() {
        let mut rng = SimpleRng::new(4);
        for _ in 0..500 {
            let (x, y) = random_point_in_circle(&mut rng, 10.0, 10.0, 300.0);
            assert!(dist_sq(x, y, 10.0, 10.0) <= 300.0 * 300.0 + 0.1);
        }
    }
}

//! Path: native/soul_core/src/physics/spatial_hash.rs
//! Summary: 空間ハッシュによる近傍クエリ（敵 = 動的、トラップ = 静的）

use rustc_hash::FxHashMap;

pub struct SpatialHash {
    pub cell_size: f32,
    cells: FxHashMap<(i32, i32), Vec<usize>>,
}

impl SpatialHash {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
        }
    }

    pub fn clear(&mut self) {
        // バケットの Vec は残して再利用する
        for ids in self.cells.values_mut() {
            ids.clear();
        }
    }

    pub fn insert(&mut self, id: usize, x: f32, y: f32) {
        let key = self.cell_key(x, y);
        self.cells.entry(key).or_default().push(id);
    }

    fn cell_key(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// 指定円を覆うセルに属する ID を `buf` に書き込む（距離判定は呼び出し側）。
    /// `buf` は内部で `clear()` する。
    pub fn query_nearby_into(&self, x: f32, y: f32, radius: f32, buf: &mut Vec<usize>) {
        buf.clear();
        let r = (radius / self.cell_size).ceil() as i32;
        let (cx, cy) = self.cell_key(x, y);
        for ix in (cx - r)..=(cx + r) {
            for iy in (cy - r)..=(cy + r) {
                if let Some(ids) = self.cells.get(&(ix, iy)) {
                    buf.extend_from_slice(ids);
                }
            }
        }
    }
}

/// 静的ハザード（トラップ）1 件分
#[derive(Clone, Copy, Debug)]
pub struct StaticHazard {
    pub x:      f32,
    pub y:      f32,
    pub radius: f32,
}

pub struct CollisionWorld {
    pub dynamic:     SpatialHash,
    pub static_hash: SpatialHash,
    pub hazards:     Vec<StaticHazard>,
}

impl CollisionWorld {
    pub fn new(cell_size: f32) -> Self {
        Self {
            dynamic:     SpatialHash::new(cell_size),
            static_hash: SpatialHash::new(cell_size),
            hazards:     Vec::new(),
        }
    }

    /// セッション開始時に 1 度だけ呼ぶ。ID は `hazards` の添字と一致する。
    pub fn rebuild_static(&mut self, hazards: &[(f32, f32, f32)]) {
        self.hazards.clear();
        self.static_hash.clear();
        for &(x, y, radius) in hazards {
            let idx = self.hazards.len();
            self.hazards.push(StaticHazard { x, y, radius });
            self.static_hash.insert(idx, x, y);
        }
    }

    /// 円 (x, y, radius) と重なる静的ハザードの ID だけを残す
    pub fn query_static_overlaps_into(
        &self,
        x: f32, y: f32, radius: f32,
        buf: &mut Vec<usize>,
    ) {
        let max_r = self.hazards.iter().map(|h| h.radius).fold(0.0_f32, f32::max);
        self.static_hash.query_nearby_into(x, y, radius + max_r, buf);
        let hazards = &self.hazards;
        buf.retain(|&idx| {
            hazards.get(idx).is_some_and(|h| {
                let hit_r = radius + h.radius;
                let dx = x - h.x;
                let dy = y - h.y;
                dx * dx + dy * dy <= hit_r * hit_r
            })
        });
    }
}

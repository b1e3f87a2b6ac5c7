//! Path: native/soul_sim/src/world/hazard.rs
//! Summary: トラップ（1 回だけダメージ）と宝箱

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trap {
    pub x:         f32,
    pub y:         f32,
    pub triggered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chest {
    pub x:         f32,
    pub y:         f32,
    pub collected: bool,
}

/// トラップと宝箱。トラップの添字は `CollisionWorld::hazards` と一致する。
#[derive(Default)]
pub struct HazardWorld {
    pub traps:  Vec<Trap>,
    pub chests: Vec<Chest>,
}

impl HazardWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未発動なら発動済みにして true
    pub fn trigger_trap(&mut self, i: usize) -> bool {
        match self.traps.get_mut(i) {
            Some(trap) if !trap.triggered => {
                trap.triggered = true;
                true
            }
            _ => false,
        }
    }

    pub fn spawn_chest(&mut self, x: f32, y: f32) -> usize {
        // 取得済みスロットを再利用する
        if let Some(i) = self.chests.iter().position(|c| c.collected) {
            self.chests[i] = Chest { x, y, collected: false };
            return i;
        }
        self.chests.push(Chest { x, y, collected: false });
        self.chests.len() - 1
    }

    /// 未取得なら取得済みにして true
    pub fn collect_chest(&mut self, i: usize) -> bool {
        match self.chests.get_mut(i) {
            Some(chest) if !chest.collected => {
                chest.collected = true;
                true
            }
            _ => false,
        }
    }

    pub fn open_chests(&self) -> impl Iterator<Item = (usize, &Chest)> {
        self.chests.iter().enumerate().filter(|(_, c)| !c.collected)
    }
}

//! Path: native/soul_sim/src/world/effect.rs
//! Summary: 敵ごとの属性エフェクト（燃焼・凍結・毒）と属性バフ状態

use soul_core::element::Element;

/// 継続ダメージ（燃焼・毒）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotEffect {
    pub remaining_ms:     f64,
    pub tick_interval_ms: f64,
    pub last_tick_ms:     f64,
    pub magnitude:        i32,
}

/// 凍結。解除時に `restore_factor`（凍結前の絶対値）へ戻す。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreezeEffect {
    pub remaining_ms:   f64,
    pub restore_factor: f32,
}

/// 1 体の敵が持つ属性エフェクト。種類ごとに最大 1 つ。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementalEffects {
    pub burning:  Option<DotEffect>,
    pub frozen:   Option<FreezeEffect>,
    pub poisoned: Option<DotEffect>,
}

impl ElementalEffects {
    pub fn is_empty(&self) -> bool {
        self.burning.is_none() && self.frozen.is_none() && self.poisoned.is_none()
    }

    /// 付与中のエフェクトを属性で列挙する
    pub fn active_elements(&self) -> impl Iterator<Item = Element> + '_ {
        [
            self.burning.map(|_| Element::Fire),
            self.frozen.map(|_| Element::Ice),
            self.poisoned.map(|_| Element::Poison),
        ]
        .into_iter()
        .flatten()
    }
}

/// プレイヤー武器の属性バフ
#[derive(Clone, Debug)]
pub struct ElementState {
    pub active:              Option<Element>,
    /// エフェクト持続時間の倍率（実績報酬で増える）
    pub duration_multiplier: f32,
}

impl Default for ElementState {
    fn default() -> Self {
        Self { active: None, duration_multiplier: 1.0 }
    }
}

impl ElementState {
    pub fn increase_effect_duration(&mut self, factor: f32) {
        self.duration_multiplier *= factor;
    }

    pub fn scaled(&self, base_ms: f64) -> f64 {
        base_ms * self.duration_multiplier as f64
    }
}

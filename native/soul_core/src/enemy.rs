//! Path: native/soul_core/src/enemy.rs
//! Summary: 敵アーキタイプ・パラメータテーブル・重み付き選択
//!
//! アーキタイプごとの振る舞いは enum + match で表現する。
//! 数値は `ArchetypeParams::get` の静的テーブルに集約する。

use crate::physics::rng::SimpleRng;

/// 敵のアーキタイプ
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Archetype {
    #[default]
    Normal    = 0,
    Explosive = 1,
    Splitter  = 2,
    Elite     = 3,
    Invisible = 4,
    Healer    = 5,
    Boss      = 6,
}

/// 攻撃方式
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttackType {
    /// 接触ダメージのみ
    Melee,
    /// 一定間隔でプレイヤーへ敵弾を撃つ
    Range,
    /// 一定間隔でプレイヤー近くへ瞬間移動
    Teleport,
    /// 接触時に 2 倍ダメージを与えて自滅
    Suicide,
}

/// ドロップ階級（ソウル数・レアリティ表を決める）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DropTier {
    Normal,
    Elite,
    Boss,
}

/// アーキタイプのパラメータ
#[derive(Clone, Copy, Debug)]
pub struct ArchetypeParams {
    pub max_hp:          f32,
    pub scale:           f32,
    pub speed:           f32,
    pub contact_damage:  i32,
    pub tint:            u32,
    /// スポーン重み（0 は通常抽選に出ない）
    pub weight:          u32,
    pub attack:          AttackType,
    /// Range / Teleport の間隔（ms）
    pub attack_interval: f64,
}

static ARCHETYPE_TABLE: [ArchetypeParams; 7] = [
    ArchetypeParams { max_hp: 3.0,  scale: 1.0, speed: 100.0, contact_damage: 15, tint: 0xffffff, weight: 70, attack: AttackType::Melee,    attack_interval: 0.0 },    // Normal
    ArchetypeParams { max_hp: 2.0,  scale: 0.9, speed: 120.0, contact_damage: 15, tint: 0xff5500, weight: 5,  attack: AttackType::Melee,    attack_interval: 0.0 },    // Explosive
    ArchetypeParams { max_hp: 5.0,  scale: 1.2, speed: 80.0,  contact_damage: 20, tint: 0x00ff00, weight: 5,  attack: AttackType::Melee,    attack_interval: 0.0 },    // Splitter
    ArchetypeParams { max_hp: 10.0, scale: 1.3, speed: 90.0,  contact_damage: 25, tint: 0xff8800, weight: 10, attack: AttackType::Range,    attack_interval: 2000.0 }, // Elite
    ArchetypeParams { max_hp: 3.0,  scale: 1.0, speed: 110.0, contact_damage: 15, tint: 0xffffff, weight: 5,  attack: AttackType::Melee,    attack_interval: 0.0 },    // Invisible
    ArchetypeParams { max_hp: 5.0,  scale: 1.1, speed: 70.0,  contact_damage: 10, tint: 0xff00ff, weight: 5,  attack: AttackType::Melee,    attack_interval: 0.0 },    // Healer
    ArchetypeParams { max_hp: 50.0, scale: 2.0, speed: 70.0,  contact_damage: 40, tint: 0xff0000, weight: 0,  attack: AttackType::Teleport, attack_interval: 4000.0 }, // Boss
];

impl ArchetypeParams {
    pub fn get(archetype: Archetype) -> &'static ArchetypeParams {
        &ARCHETYPE_TABLE[archetype as usize]
    }
}

impl Archetype {
    /// テーブル順（重み付き抽選の累積順序）
    pub const ALL: [Archetype; 7] = [
        Self::Normal,
        Self::Explosive,
        Self::Splitter,
        Self::Elite,
        Self::Invisible,
        Self::Healer,
        Self::Boss,
    ];

    pub fn params(self) -> &'static ArchetypeParams {
        ArchetypeParams::get(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal    => "normal",
            Self::Explosive => "explosive",
            Self::Splitter  => "splitter",
            Self::Elite     => "elite",
            Self::Invisible => "invisible",
            Self::Healer    => "healer",
            Self::Boss      => "boss",
        }
    }

    pub fn drop_tier(self) -> DropTier {
        match self {
            Self::Elite => DropTier::Elite,
            Self::Boss  => DropTier::Boss,
            _           => DropTier::Normal,
        }
    }

    /// 当たり判定半径（スケール込み）
    pub fn radius(self, scale_multiplier: f32) -> f32 {
        crate::constants::ENEMY_BASE_RADIUS * self.params().scale * scale_multiplier
    }

    /// ウェーブ進行による重みの加算
    fn wave_bonus(self, wave: u32) -> u32 {
        match self {
            Self::Explosive | Self::Splitter if wave >= 3 => 5,
            Self::Elite if wave >= 5                      => 10,
            Self::Invisible if wave >= 5                  => 5,
            Self::Healer if wave >= 7                     => 5,
            _                                             => 0,
        }
    }
}

/// ウェーブ `wave` における各アーキタイプの重み（テーブル順）
pub fn spawn_weights(wave: u32) -> [(Archetype, u32); 7] {
    Archetype::ALL.map(|a| (a, a.params().weight + a.wave_bonus(wave)))
}

/// 累積重みでアーキタイプを 1 つ選ぶ。何にも当たらなければ Normal。
pub fn select_archetype(wave: u32, rng: &mut SimpleRng) -> Archetype {
    let weights = spawn_weights(wave);
    let total: u32 = weights.iter().map(|&(_, w)| w).sum();
    if total == 0 {
        return Archetype::Normal;
    }
    let draw = rng.next_f32() * total as f32;
    let mut cumulative = 0.0_f32;
    for (archetype, weight) in weights {
        cumulative += weight as f32;
        if draw < cumulative {
            return archetype;
        }
    }
    Archetype::Normal
}

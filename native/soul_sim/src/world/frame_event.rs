//! Path: native/soul_sim/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（render / UI 層が毎フレーム drain する）

use soul_core::achievement::AchievementId;
use soul_core::element::Element;
use soul_core::enemy::Archetype;
use soul_core::item::{ChestReward, SoulRarity};
use soul_core::skill::SkillId;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    EnemySpawned     { index: usize, archetype: Archetype },
    EnemyKilled      { archetype: Archetype, x: f32, y: f32 },
    EnemyHealed      { index: usize },
    EnemyTeleported  { index: usize, x: f32, y: f32 },
    EnemyFired       { index: usize },
    CriticalHit      { index: usize, damage: f32 },
    Explosion        { x: f32, y: f32, radius: f32 },
    PlayerDamaged    { damage: i32 },
    PlayerHealed     { amount: i32 },
    EffectApplied    { index: usize, element: Element },
    EffectExpired    { index: usize, element: Element },
    ChainLightning   { from: usize, to: usize },
    SoulDropped      { rarity: SoulRarity, x: f32, y: f32 },
    SoulCollected    { rarity: SoulRarity, value: u32 },
    ChestSpawned     { x: f32, y: f32 },
    ChestOpened      { reward: ChestReward },
    TrapTriggered    { x: f32, y: f32 },
    WeaponUpgraded   { tier: usize, cost: u32 },
    TemporaryWeapon  { tier: usize, duration_ms: f64 },
    WeaponReverted   { tier: usize },
    ElementChanged   { element: Option<Element> },
    WaveStarted      { number: u32, quota: u32 },
    WaveCompleted    { number: u32 },
    Victory,
    AchievementUnlocked { id: AchievementId },
    SkillUnlocked    { id: SkillId },
    GameOver,
}

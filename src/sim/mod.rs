//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{Aabb, intersects};
pub use difficulty::{
    MAX_LEVEL, SpawnTimers, cloud_spawn_interval_ms, fall_speed, level_for_score,
    powerup_spawn_interval_ms,
};
pub use state::{
    ActiveEffects, Blast, Cloud, CloudTier, Facing, GameEvent, GamePhase, GameState, Pickup,
    Player, PowerUpKind, Sprite, SpriteKind, Star,
};
pub use tick::{TickInput, tick};

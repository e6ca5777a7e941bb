//! Level difficulty tables and spawn cadence
//!
//! The difficulty controller is a pure mapping from the current level to
//! cloud fall speed and the two spawn intervals, plus the countdown timers
//! that drive spawning. It never reads the score; level changes arrive from
//! score progression in `tick`.

use serde::{Deserialize, Serialize};

/// Difficulty is capped at three tiers.
pub const MAX_LEVEL: u32 = 3;

/// Score needed per level step.
pub const LEVEL_SCORE_THRESHOLD: i64 = 500;

/// Cloud fall speed in pixels per tick for a level.
pub fn fall_speed(level: u32) -> f32 {
    2.0 + level as f32 * 0.8
}

/// Milliseconds between cloud spawns, floored at 800ms.
pub fn cloud_spawn_interval_ms(level: u32) -> u32 {
    2000u32.saturating_sub(level * 300).max(800)
}

/// Milliseconds between power-up spawns, floored at 7000ms.
pub fn powerup_spawn_interval_ms(level: u32) -> u32 {
    10000u32.saturating_sub(level * 500).max(7000)
}

/// Level implied by a score: one step per 500 points, capped at [`MAX_LEVEL`].
///
/// Floored division, so a transiently negative score maps to level 1 and can
/// never trigger a level change.
pub fn level_for_score(score: i64) -> u32 {
    (score.div_euclid(LEVEL_SCORE_THRESHOLD) + 1).clamp(1, MAX_LEVEL as i64) as u32
}

/// Countdown timers for the two spawn streams.
///
/// Counts down in wall-clock milliseconds (decremented by `TICK_MS` each
/// tick). Re-arming is unconditional and idempotent: entering a level,
/// finishing a level intro, and resuming from pause all reset both
/// countdowns to the level's full interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub cloud_ms: u32,
    pub powerup_ms: u32,
}

impl SpawnTimers {
    pub fn armed_for(level: u32) -> Self {
        Self {
            cloud_ms: cloud_spawn_interval_ms(level),
            powerup_ms: powerup_spawn_interval_ms(level),
        }
    }

    pub fn rearm(&mut self, level: u32) {
        *self = Self::armed_for(level);
    }
}

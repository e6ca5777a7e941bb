//! Star Guardian - a star-defense arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, difficulty, game state)
//! - `audio`: Sound cue vocabulary and the audio collaborator seam
//! - `highscores`: Top-5 leaderboard with persistence
//! - `persistence`: Key/value storage collaborator (LocalStorage on web)
//! - `settings`: Player preferences

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use highscores::Leaderboard;
pub use settings::Settings;

/// Browser bootstrap: route panics and log output to the console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: u32 = 16;

    /// Playfield dimensions (the display collaborator scales to fit)
    pub const GAME_WIDTH: f32 = 600.0;
    pub const GAME_HEIGHT: f32 = 800.0;

    /// Defense targets: a row of stars along the bottom edge, behind the
    /// guardian. Clouds that get past the guardian reach them.
    pub const STAR_COUNT: usize = 5;
    pub const STAR_SIZE: f32 = 30.0;
    pub const STAR_TOP: f32 = GAME_HEIGHT - STAR_SIZE - 5.0;

    /// Player sprite box and movement; the guardian patrols just above the
    /// star row, so clouds cross its band first.
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_TOP: f32 = STAR_TOP - PLAYER_HEIGHT - 15.0;
    /// Horizontal speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 4.0;

    /// Hazard clouds: box is `size` wide and `size * 0.6` tall
    pub const CLOUD_MIN_SIZE: f32 = 35.0;
    pub const CLOUD_MAX_SIZE: f32 = 45.0;
    /// Clouds never spawn hugging the edges
    pub const CLOUD_SPAWN_MARGIN: f32 = 20.0;

    /// Projectiles
    pub const BLAST_WIDTH: f32 = 10.0;
    pub const BLAST_HEIGHT: f32 = 20.0;
    /// Upward speed in pixels per tick
    pub const BLAST_SPEED: f32 = 10.0;
    /// Multi-shot horizontal spawn offsets and matching drifts per tick
    pub const MULTI_SHOT_OFFSETS: [f32; 3] = [-15.0, 0.0, 15.0];
    pub const MULTI_SHOT_DRIFTS: [f32; 3] = [-2.0, 0.0, 2.0];

    /// Power-up pickups fall at a fixed rate, independent of cloud speed
    pub const PICKUP_SIZE: f32 = 30.0;
    pub const PICKUP_FALL_SPEED: f32 = 2.0;

    /// Every timed power-up runs the same window
    pub const POWERUP_DURATION_MS: u32 = 8000;
    /// Rapid fire shoots on this cadence while active
    pub const RAPID_FIRE_INTERVAL_MS: u32 = 200;

    /// Level intro overlay duration; the sim is frozen while it shows
    pub const LEVEL_INTRO_MS: u32 = 1500;

    /// Scoring
    pub const SCORE_CLOUD_DESTROYED: i64 = 10;
    pub const SCORE_SHIELD_ABSORB: i64 = 5;
    pub const SCORE_PLAYER_HIT: i64 = -20;
    pub const SCORE_POWERUP_COLLECTED: i64 = 20;
    pub const SCORE_BLAST_WAVE_PER_CLOUD: i64 = 5;
}

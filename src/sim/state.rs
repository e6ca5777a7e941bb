//! Game state and core simulation types
//!
//! All state the simulation needs lives here, in one serializable struct.
//! There are no ambient globals and no per-entity timers: entities are plain
//! identified records advanced by `tick`, and timed behavior is a countdown
//! field checked each step.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::SpawnTimers;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No simulation running; entry point
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen, entities held in place
    Paused,
    /// Level intro overlay; transient entities cleared, auto-resumes
    LevelTransition,
    /// Run ended: five stars blocked
    GameOver,
}

/// Which way the guardian faces, from the last horizontal input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player-controlled guardian
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Left edge, clamped to the playfield
    pub x: f32,
    pub facing: Facing,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: GAME_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            facing: Facing::default(),
        }
    }
}

impl Player {
    /// Move horizontally, clamped to `[0, GAME_WIDTH - PLAYER_WIDTH]`
    pub fn shift(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, GAME_WIDTH - PLAYER_WIDTH);
        if dx < 0.0 {
            self.facing = Facing::Left;
        } else if dx > 0.0 {
            self.facing = Facing::Right;
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + PLAYER_WIDTH / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, PLAYER_TOP),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        )
    }
}

/// One of the five defense targets along the bottom of the playfield
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    /// Identity, 1..=5
    pub index: u8,
    pub blocked: bool,
}

impl Star {
    /// Stars sit at fixed, evenly spaced positions; position is derived from
    /// identity, never stored.
    pub fn aabb(&self) -> Aabb {
        let slot = GAME_WIDTH / (STAR_COUNT as f32 + 1.0);
        let x = slot * self.index as f32 - STAR_SIZE / 2.0;
        Aabb::from_pos_size(Vec2::new(x, STAR_TOP), Vec2::new(STAR_SIZE, STAR_SIZE))
    }
}

/// Visual tier of a cloud, fixed at spawn from the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudTier {
    Light,
    Dark,
    Storm,
}

impl CloudTier {
    pub fn for_level(level: u32) -> Self {
        match level {
            1 => CloudTier::Light,
            2 => CloudTier::Dark,
            _ => CloudTier::Storm,
        }
    }
}

/// A falling hazard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud {
    pub id: u32,
    /// Top-left corner; x is fixed at spawn, y increases
    pub pos: Vec2,
    pub size: f32,
    pub tier: CloudTier,
}

impl Cloud {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.size, self.size * 0.6))
    }
}

/// A player-fired projectile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blast {
    pub id: u32,
    pub pos: Vec2,
    /// Horizontal pixels per tick: -2, 0 or +2 depending on multi-shot slot
    pub drift: f32,
}

impl Blast {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(BLAST_WIDTH, BLAST_HEIGHT))
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Rapid,
    Shield,
    Slow,
    Blast,
    Multi,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Rapid,
        PowerUpKind::Shield,
        PowerUpKind::Slow,
        PowerUpKind::Blast,
        PowerUpKind::Multi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Rapid => "rapid fire",
            PowerUpKind::Shield => "shield",
            PowerUpKind::Slow => "slow time",
            PowerUpKind::Blast => "blast wave",
            PowerUpKind::Multi => "multi shot",
        }
    }
}

/// A falling collectible
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl Pickup {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(PICKUP_SIZE, PICKUP_SIZE))
    }
}

/// A pickup the game drops on a schedule after a new game starts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScriptedPickup {
    pub delay_ms: u32,
    pub kind: PowerUpKind,
}

/// Active power-up effects as expiring records
///
/// Each timed effect is a remaining-duration counter; 0 means inactive.
/// Triggering a kind overwrites its counter with a full fresh window -
/// effects replace, they never stack.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub rapid_ms: u32,
    pub shield_ms: u32,
    pub slow_ms: u32,
    pub multi_ms: u32,
    /// Cooldown until rapid fire's next automatic shot
    pub rapid_cooldown_ms: u32,
}

impl ActiveEffects {
    pub fn rapid_active(&self) -> bool {
        self.rapid_ms > 0
    }

    pub fn shield_active(&self) -> bool {
        self.shield_ms > 0
    }

    pub fn slow_active(&self) -> bool {
        self.slow_ms > 0
    }

    pub fn multi_active(&self) -> bool {
        self.multi_ms > 0
    }

    /// Start (or restart) a timed effect. Blast is instantaneous and never
    /// lands here.
    pub fn trigger(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Rapid => {
                self.rapid_ms = POWERUP_DURATION_MS;
                // First automatic shot fires on the next cadence boundary
                self.rapid_cooldown_ms = RAPID_FIRE_INTERVAL_MS;
            }
            PowerUpKind::Shield => self.shield_ms = POWERUP_DURATION_MS,
            PowerUpKind::Slow => self.slow_ms = POWERUP_DURATION_MS,
            PowerUpKind::Multi => self.multi_ms = POWERUP_DURATION_MS,
            PowerUpKind::Blast => {}
        }
    }

    /// Advance all effect clocks by one tick, returning the kinds that
    /// expired on this step.
    pub fn advance(&mut self, dt_ms: u32) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        let mut step = |ms: &mut u32, kind: PowerUpKind| {
            if *ms > 0 {
                *ms = ms.saturating_sub(dt_ms);
                if *ms == 0 {
                    expired.push(kind);
                }
            }
        };
        step(&mut self.rapid_ms, PowerUpKind::Rapid);
        step(&mut self.shield_ms, PowerUpKind::Shield);
        step(&mut self.slow_ms, PowerUpKind::Slow);
        step(&mut self.multi_ms, PowerUpKind::Multi);
        expired
    }

    /// Multiplier applied to the level's fall speed. Slow-time halves it
    /// while active; the level's own speed is read fresh each tick, so a
    /// level change mid-effect lands on the new table value at expiry.
    pub fn fall_speed_multiplier(&self) -> f32 {
        if self.slow_active() { 0.5 } else { 1.0 }
    }
}

/// Events the simulation emits for the shell to react to (sounds, HUD).
///
/// Drained once per frame by the caller; the sim never talks to the audio
/// or display collaborators directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    GameStarted,
    Shoot,
    CloudDestroyed { cloud: u32 },
    ShieldAbsorbed { star: u8 },
    StarBlocked { star: u8 },
    PlayerHit,
    PickupCollected { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    BlastWave { clouds_destroyed: u32 },
    ScoreChanged { score: i64 },
    LevelUp { level: u32 },
    LevelStarted { level: u32 },
    Paused,
    Resumed,
    GameOver { score: i64 },
}

/// What the display collaborator draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player { facing: Facing, shielded: bool },
    Star { blocked: bool, shielded: bool },
    Cloud { tier: CloudTier },
    Blast,
    Pickup { kind: PowerUpKind },
}

/// A positioned rectangle for the display collaborator; `id` is stable for
/// the entity's lifetime so the renderer can keep visuals keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: u32,
    pub kind: SpriteKind,
    pub rect: Aabb,
}

/// Reserved sprite ids: 0 is the player, 1..=5 the stars; dynamic entities
/// allocate upward from here.
const FIRST_DYNAMIC_ID: u32 = 6;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for spawn positions and power-up kinds
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Difficulty tier, 1..=MAX_LEVEL
    pub level: u32,
    /// Running score; may go negative and is never clamped
    pub score: i64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// The five defense targets
    pub stars: [Star; STAR_COUNT],
    pub clouds: Vec<Cloud>,
    pub blasts: Vec<Blast>,
    pub pickups: Vec<Pickup>,
    pub effects: ActiveEffects,
    /// Spawn countdowns, re-armed on every level entry and resume
    pub timers: SpawnTimers,
    /// Remaining level-intro time while in `LevelTransition`
    pub transition_ms: u32,
    /// Opening pickups a new game drops on a schedule
    pub scripted_pickups: Vec<ScriptedPickup>,
    /// Events since the last drain (not part of the snapshot)
    #[serde(skip)]
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a state sitting at the main menu.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            level: 1,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            stars: std::array::from_fn(|i| Star {
                index: i as u8 + 1,
                blocked: false,
            }),
            clouds: Vec::new(),
            blasts: Vec::new(),
            pickups: Vec::new(),
            effects: ActiveEffects::default(),
            timers: SpawnTimers::armed_for(1),
            transition_ms: 0,
            scripted_pickups: Vec::new(),
            events: Vec::new(),
            next_id: FIRST_DYNAMIC_ID,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to the shell.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn blocked_star_count(&self) -> usize {
        self.stars.iter().filter(|s| s.blocked).count()
    }

    /// Fall speed clouds actually move at this tick.
    pub fn effective_fall_speed(&self) -> f32 {
        super::difficulty::fall_speed(self.level) * self.effects.fall_speed_multiplier()
    }

    /// Start a fresh run from the menu or the game-over screen.
    ///
    /// Resets everything mutable, schedules the two opening pickups, and
    /// enters the level 1 intro. A no-op in any other phase.
    pub fn start_game(&mut self) {
        if !matches!(self.phase, GamePhase::Menu | GamePhase::GameOver) {
            return;
        }
        log::info!("new game (seed {})", self.seed);
        self.level = 1;
        self.score = 0;
        self.time_ticks = 0;
        self.player = Player::default();
        for star in &mut self.stars {
            star.blocked = false;
        }
        self.clear_transient_entities();
        self.effects = ActiveEffects::default();
        self.next_id = FIRST_DYNAMIC_ID;
        self.scripted_pickups = vec![
            ScriptedPickup {
                delay_ms: 2000,
                kind: PowerUpKind::Rapid,
            },
            ScriptedPickup {
                delay_ms: 6000,
                kind: PowerUpKind::Multi,
            },
        ];
        self.push_event(GameEvent::GameStarted);
        self.push_event(GameEvent::ScoreChanged { score: 0 });
        self.enter_level(1);
    }

    /// Leave the run for the menu (pause-menu quit, or after game over).
    pub fn quit_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
    }

    /// Enter a level: re-arm spawn timers and show the intro overlay.
    ///
    /// All transient entities are cleared; the sim freezes until the intro
    /// countdown expires, then `tick` resumes it into `Playing`.
    pub fn enter_level(&mut self, level: u32) {
        self.level = level;
        self.timers.rearm(level);
        self.clear_transient_entities();
        self.transition_ms = LEVEL_INTRO_MS;
        self.phase = GamePhase::LevelTransition;
        self.push_event(GameEvent::LevelUp { level });
        log::info!(
            "level {}: fall speed {}, cloud interval {}ms",
            level,
            super::difficulty::fall_speed(level),
            super::difficulty::cloud_spawn_interval_ms(level)
        );
    }

    pub fn clear_transient_entities(&mut self) {
        self.clouds.clear();
        self.blasts.clear();
        self.pickups.clear();
    }

    /// Snapshot of everything the display collaborator should draw.
    pub fn sprites(&self) -> Vec<Sprite> {
        let shielded = self.effects.shield_active();
        let mut sprites = Vec::with_capacity(
            1 + STAR_COUNT + self.clouds.len() + self.blasts.len() + self.pickups.len(),
        );
        sprites.push(Sprite {
            id: 0,
            kind: SpriteKind::Player {
                facing: self.player.facing,
                shielded,
            },
            rect: self.player.aabb(),
        });
        for star in &self.stars {
            sprites.push(Sprite {
                id: star.index as u32,
                kind: SpriteKind::Star {
                    blocked: star.blocked,
                    shielded,
                },
                rect: star.aabb(),
            });
        }
        for cloud in &self.clouds {
            sprites.push(Sprite {
                id: cloud.id,
                kind: SpriteKind::Cloud { tier: cloud.tier },
                rect: cloud.aabb(),
            });
        }
        for blast in &self.blasts {
            sprites.push(Sprite {
                id: blast.id,
                kind: SpriteKind::Blast,
                rect: blast.aabb(),
            });
        }
        for pickup in &self.pickups {
            sprites.push(Sprite {
                id: pickup.id,
                kind: SpriteKind::Pickup { kind: pickup.kind },
                rect: pickup.aabb(),
            });
        }
        sprites
    }
}

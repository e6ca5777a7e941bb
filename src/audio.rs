//! Sound cue vocabulary and the audio collaborator seam
//!
//! The simulation never plays audio. It emits [`GameEvent`]s; the shell
//! drains them each frame and feeds the resulting cues to whatever
//! [`AudioSink`] the platform provides. Playback failures are the sink's
//! problem - the game proceeds without the asset.

use crate::sim::{GameEvent, PowerUpKind};

/// Named sound effects the audio collaborator may play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    MenuSelect,
    GameStart,
    Pause,
    Resume,
    Shoot,
    CloudHit,
    PlayerHit,
    StarBlocked,
    PowerUpCollect,
    RapidFire,
    Shield,
    MultiShot,
    BlastWave,
    SlowTime,
    LevelUp,
    GameOver,
    HighScore,
}

impl SoundCue {
    /// Asset name the collaborator resolves to an actual sound
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::MenuSelect => "menu-select",
            SoundCue::GameStart => "game-start",
            SoundCue::Pause => "pause",
            SoundCue::Resume => "resume",
            SoundCue::Shoot => "shoot",
            SoundCue::CloudHit => "cloud-hit",
            SoundCue::PlayerHit => "player-hit",
            SoundCue::StarBlocked => "star-blocked",
            SoundCue::PowerUpCollect => "powerup-collect",
            SoundCue::RapidFire => "rapid-fire",
            SoundCue::Shield => "shield",
            SoundCue::MultiShot => "multi-shot",
            SoundCue::BlastWave => "blast-wave",
            SoundCue::SlowTime => "slow-time",
            SoundCue::LevelUp => "level-up",
            SoundCue::GameOver => "game-over",
            SoundCue::HighScore => "high-score",
        }
    }
}

/// Audio collaborator capability
///
/// Implementations live with the platform shell (web audio in the browser
/// build). The core only ever calls these methods fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn play_background_loop(&mut self);
    fn stop_background_loop(&mut self);
    fn pause_background_loop(&mut self);
    fn resume_background_loop(&mut self);
    fn set_muted(&mut self, muted: bool);
}

/// Sink that swallows everything; used headless and in tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
    fn play_background_loop(&mut self) {}
    fn stop_background_loop(&mut self) {}
    fn pause_background_loop(&mut self) {}
    fn resume_background_loop(&mut self) {}
    fn set_muted(&mut self, _muted: bool) {}
}

/// Cue played when a specific power-up activates
fn powerup_cue(kind: PowerUpKind) -> SoundCue {
    match kind {
        PowerUpKind::Rapid => SoundCue::RapidFire,
        PowerUpKind::Shield => SoundCue::Shield,
        PowerUpKind::Slow => SoundCue::SlowTime,
        PowerUpKind::Blast => SoundCue::BlastWave,
        PowerUpKind::Multi => SoundCue::MultiShot,
    }
}

/// Map a simulation event to the cues it should play, in order.
///
/// Collecting a power-up plays the generic collect cue followed by the
/// per-type cue. Most bookkeeping events are silent.
pub fn cues_for_event(event: &GameEvent) -> Vec<SoundCue> {
    match event {
        GameEvent::GameStarted => vec![SoundCue::GameStart],
        GameEvent::Shoot => vec![SoundCue::Shoot],
        GameEvent::CloudDestroyed { .. } => vec![SoundCue::CloudHit],
        GameEvent::ShieldAbsorbed { .. } => vec![SoundCue::Shield],
        GameEvent::StarBlocked { .. } => vec![SoundCue::StarBlocked],
        GameEvent::PlayerHit => vec![SoundCue::PlayerHit],
        GameEvent::PickupCollected { kind } => {
            vec![SoundCue::PowerUpCollect, powerup_cue(*kind)]
        }
        GameEvent::BlastWave { .. } => vec![],
        GameEvent::PowerUpExpired { .. } => vec![],
        GameEvent::ScoreChanged { .. } => vec![],
        GameEvent::LevelUp { .. } => vec![SoundCue::LevelUp],
        GameEvent::LevelStarted { .. } => vec![],
        GameEvent::Paused => vec![SoundCue::Pause],
        GameEvent::Resumed => vec![SoundCue::Resume],
        GameEvent::GameOver { .. } => vec![SoundCue::GameOver],
    }
}

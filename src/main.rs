//! Star Guardian entry point
//!
//! The browser shell (renderer, web audio, input wiring) drives the library
//! from JS; the native binary runs a short headless demo of the simulation
//! so the core can be exercised without a display.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use star_guardian::audio::{AudioSink, NullAudio, cues_for_event};
    use star_guardian::persistence::MemoryStorage;
    use star_guardian::sim::{GamePhase, GameState, TickInput, tick};
    use star_guardian::{Leaderboard, Settings};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("star-guardian headless demo (seed {})", seed);

    let mut storage = MemoryStorage::new();
    let settings = Settings::load(&mut storage);
    let mut leaderboard = Leaderboard::load(&mut storage);
    let mut audio = NullAudio;
    audio.set_muted(settings.muted);

    let mut state = GameState::new(seed);
    state.start_game();

    // Drive the sim for up to a minute of game time: patrol the playfield
    // and fire continuously, the bare minimum of competence.
    let mut input = TickInput::default();
    for i in 0..3750u32 {
        input.left = (i / 120).is_multiple_of(2);
        input.right = !input.left;
        input.shoot = i.is_multiple_of(10);
        tick(&mut state, &input);

        for event in state.drain_events() {
            for cue in cues_for_event(&event) {
                audio.play(cue);
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "demo over: score {} at level {} after {} ticks",
        state.score, state.level, state.time_ticks
    );

    let final_score = state.score.max(0) as u32;
    if state.phase == GamePhase::GameOver && leaderboard.is_high_score(final_score) {
        leaderboard.add_score(&settings.player_name, final_score);
        leaderboard.save(&mut storage);
    }
    println!("leaderboard:");
    for (rank, entry) in leaderboard.entries.iter().enumerate() {
        println!("  {}. {:<15} {}", rank + 1, entry.name, entry.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser entry point is provided by the JS shell; this exists to
    // satisfy the binary target.
}

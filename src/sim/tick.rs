//! Fixed timestep simulation tick
//!
//! The single authoritative update: one call advances every entity, runs the
//! collision scan, expires power-up effects, and drives phase transitions.
//! Entities are removed by the scan itself, so a hazard resolves at most one
//! collision per tick and teardown happens exactly once.

use glam::Vec2;
use rand::Rng;

use super::collision::intersects;
use super::difficulty::{self, MAX_LEVEL};
use super::state::{Blast, Cloud, CloudTier, GameEvent, GamePhase, GameState, Pickup, PowerUpKind};
use crate::consts::*;

/// Input commands for a single tick
///
/// `left`/`right` are held-key state; `shoot`, `pause` and `skip_level` are
/// edges the shell raises for one tick per key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Fire once; ignored while rapid fire runs its own cadence
    pub shoot: bool,
    /// Toggle pause; ignored outside Playing/Paused
    pub pause: bool,
    /// Developer command: jump to the next level
    pub skip_level: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Pause toggle runs before anything else. Phase guards make concurrent
    // requests (pause during a level intro, pause at the menu) no-ops.
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
                log::info!("paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                // Spawn cadence restarts at the full interval rather than
                // resuming mid-countdown
                state.timers.rearm(state.level);
                state.push_event(GameEvent::Resumed);
                log::info!("resumed");
            }
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::LevelTransition => {
            state.transition_ms = state.transition_ms.saturating_sub(TICK_MS);
            if state.transition_ms == 0 {
                state.timers.rearm(state.level);
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::LevelStarted { level: state.level });
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    if input.left {
        state.player.shift(-PLAYER_SPEED);
    }
    if input.right {
        state.player.shift(PLAYER_SPEED);
    }

    if input.skip_level && state.level < MAX_LEVEL {
        log::debug!("level skip requested");
        state.enter_level(state.level + 1);
        return;
    }

    // Manual fire is suppressed while rapid fire is active
    if input.shoot && !state.effects.rapid_active() {
        shoot(state);
    }
    if state.effects.rapid_active() {
        state.effects.rapid_cooldown_ms = state.effects.rapid_cooldown_ms.saturating_sub(TICK_MS);
        if state.effects.rapid_cooldown_ms == 0 {
            state.effects.rapid_cooldown_ms = RAPID_FIRE_INTERVAL_MS;
            shoot(state);
        }
    }

    run_scripted_pickups(state);
    run_spawn_timers(state);

    advance_blasts(state);

    advance_pickups(state);
    if state.phase != GamePhase::Playing {
        // A collected pickup leveled us up; the transition cleared the field.
        return;
    }

    advance_clouds(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    for kind in state.effects.advance(TICK_MS) {
        log::debug!("{} expired", kind.label());
        state.push_event(GameEvent::PowerUpExpired { kind });
    }
}

/// Fire from the player's current position; multi-shot fans into three.
fn shoot(state: &mut GameState) {
    state.push_event(GameEvent::Shoot);
    let center = state.player.center_x();
    if state.effects.multi_active() {
        for (offset, drift) in MULTI_SHOT_OFFSETS.into_iter().zip(MULTI_SHOT_DRIFTS) {
            fire_blast(state, center + offset, drift);
        }
    } else {
        fire_blast(state, center, 0.0);
    }
}

fn fire_blast(state: &mut GameState, center_x: f32, drift: f32) {
    let id = state.next_entity_id();
    state.blasts.push(Blast {
        id,
        pos: Vec2::new(center_x - BLAST_WIDTH / 2.0, PLAYER_TOP),
        drift,
    });
}

/// Drop the scheduled opening pickups once their delay runs out.
fn run_scripted_pickups(state: &mut GameState) {
    let mut due = Vec::new();
    for scripted in &mut state.scripted_pickups {
        scripted.delay_ms = scripted.delay_ms.saturating_sub(TICK_MS);
        if scripted.delay_ms == 0 {
            due.push(scripted.kind);
        }
    }
    state.scripted_pickups.retain(|s| s.delay_ms > 0);
    for kind in due {
        spawn_pickup(state, kind);
    }
}

/// Count the spawn timers down and fire them at their level cadence.
fn run_spawn_timers(state: &mut GameState) {
    state.timers.cloud_ms = state.timers.cloud_ms.saturating_sub(TICK_MS);
    if state.timers.cloud_ms == 0 {
        state.timers.cloud_ms = difficulty::cloud_spawn_interval_ms(state.level);
        spawn_cloud(state);
    }

    state.timers.powerup_ms = state.timers.powerup_ms.saturating_sub(TICK_MS);
    if state.timers.powerup_ms == 0 {
        state.timers.powerup_ms = difficulty::powerup_spawn_interval_ms(state.level);
        let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
        spawn_pickup(state, kind);
    }
}

fn spawn_cloud(state: &mut GameState) {
    let x = CLOUD_SPAWN_MARGIN
        + state
            .rng
            .random_range(0.0..GAME_WIDTH - CLOUD_MAX_SIZE - 2.0 * CLOUD_SPAWN_MARGIN);
    let size = state.rng.random_range(CLOUD_MIN_SIZE..CLOUD_MAX_SIZE);
    let id = state.next_entity_id();
    state.clouds.push(Cloud {
        id,
        pos: Vec2::new(x, 0.0),
        size,
        tier: CloudTier::for_level(state.level),
    });
    log::debug!("cloud {} spawned at x={:.0}", id, x);
}

fn spawn_pickup(state: &mut GameState, kind: PowerUpKind) {
    let x = state.rng.random_range(0.0..GAME_WIDTH - PICKUP_SIZE);
    let id = state.next_entity_id();
    state.pickups.push(Pickup {
        id,
        pos: Vec2::new(x, 0.0),
        kind,
    });
    log::debug!("{} pickup {} spawned", kind.label(), id);
}

/// Blasts ascend with their drift and vanish past the top edge.
fn advance_blasts(state: &mut GameState) {
    for blast in &mut state.blasts {
        blast.pos.y -= BLAST_SPEED;
        blast.pos.x += blast.drift;
    }
    state.blasts.retain(|b| b.pos.y >= 0.0);
}

/// Pickups fall at their fixed rate; the player collects on contact.
fn advance_pickups(state: &mut GameState) {
    let player_rect = state.player.aabb();
    let mut collected = Vec::new();

    let pickups = std::mem::take(&mut state.pickups);
    let mut survivors = Vec::with_capacity(pickups.len());
    for mut pickup in pickups {
        pickup.pos.y += PICKUP_FALL_SPEED;
        if pickup.pos.y > GAME_HEIGHT {
            continue;
        }
        if intersects(&pickup.aabb(), &player_rect) {
            collected.push(pickup.kind);
            continue;
        }
        survivors.push(pickup);
    }
    state.pickups = survivors;

    for kind in collected {
        collect_powerup(state, kind);
    }
}

/// Apply a collected power-up: effect first, then the collection bonus
/// (which may trigger a level-up).
fn collect_powerup(state: &mut GameState, kind: PowerUpKind) {
    log::debug!("{} collected", kind.label());
    state.push_event(GameEvent::PickupCollected { kind });
    match kind {
        PowerUpKind::Blast => blast_wave(state),
        timed => state.effects.trigger(timed),
    }
    update_score(state, SCORE_POWERUP_COLLECTED);
}

/// Instantly clear every live cloud, scoring each one.
fn blast_wave(state: &mut GameState) {
    let destroyed = state.clouds.len() as u32;
    state.clouds.clear();
    state.push_event(GameEvent::BlastWave {
        clouds_destroyed: destroyed,
    });
    log::debug!("blast wave destroyed {} clouds", destroyed);
    for _ in 0..destroyed {
        update_score(state, SCORE_BLAST_WAVE_PER_CLOUD);
    }
}

/// Move clouds and run the ordered collision scan.
///
/// Per cloud, in order: blasts, then stars, then the player. The first match
/// destroys the cloud; later categories are not consulted, so a cloud can
/// never score a blast kill and block a star in the same tick.
fn advance_clouds(state: &mut GameState) {
    let speed = state.effective_fall_speed();
    let player_rect = state.player.aabb();
    let shield = state.effects.shield_active();

    let clouds = std::mem::take(&mut state.clouds);
    let mut survivors = Vec::with_capacity(clouds.len());

    'clouds: for mut cloud in clouds {
        cloud.pos.y += speed;
        if cloud.pos.y > GAME_HEIGHT {
            continue;
        }
        let rect = cloud.aabb();

        // Blasts: the first overlapping blast kills the cloud and is spent
        if let Some(hit) = state
            .blasts
            .iter()
            .position(|b| intersects(&rect, &b.aabb()))
        {
            state.blasts.remove(hit);
            state.push_event(GameEvent::CloudDestroyed { cloud: cloud.id });
            update_score(state, SCORE_CLOUD_DESTROYED);
            if state.phase != GamePhase::Playing {
                return;
            }
            continue;
        }

        // Stars: already-blocked stars are transparent; the shield absorbs
        // the hit, otherwise the star is lost
        for i in 0..state.stars.len() {
            let star = state.stars[i];
            if star.blocked || !intersects(&rect, &star.aabb()) {
                continue;
            }
            if shield {
                state.push_event(GameEvent::ShieldAbsorbed { star: star.index });
                update_score(state, SCORE_SHIELD_ABSORB);
                if state.phase != GamePhase::Playing {
                    return;
                }
            } else {
                state.stars[i].blocked = true;
                state.push_event(GameEvent::StarBlocked { star: star.index });
                log::debug!("star {} blocked", star.index);
                if state.blocked_star_count() >= STAR_COUNT {
                    game_over(state);
                    return;
                }
            }
            continue 'clouds;
        }

        // Player: skipped entirely while the shield is up
        if !shield && intersects(&rect, &player_rect) {
            state.push_event(GameEvent::PlayerHit);
            update_score(state, SCORE_PLAYER_HIT);
            if state.phase != GamePhase::Playing {
                return;
            }
            continue;
        }

        survivors.push(cloud);
    }

    state.clouds = survivors;
}

/// Add to the score and evaluate level progression.
///
/// The score may go negative and is never clamped. Only an upward level
/// change triggers a transition; the difficulty tables themselves live in
/// `difficulty` and never read the score.
fn update_score(state: &mut GameState, delta: i64) {
    state.score += delta;
    state.push_event(GameEvent::ScoreChanged { score: state.score });
    let new_level = difficulty::level_for_score(state.score);
    if new_level > state.level {
        log::info!(
            "level up: {} -> {} (score {})",
            state.level,
            new_level,
            state.score
        );
        state.enter_level(new_level);
    }
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.push_event(GameEvent::GameOver { score: state.score });
    log::info!("game over at score {}", state.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::SpawnTimers;

    /// A state that has finished the level 1 intro and sits in Playing.
    fn playing_state() -> GameState {
        let mut state = GameState::new(42);
        state.start_game();
        let input = TickInput::default();
        while state.phase == GamePhase::LevelTransition {
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        state.drain_events();
        state
    }

    fn add_cloud(state: &mut GameState, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.clouds.push(Cloud {
            id,
            pos: Vec2::new(x, y),
            size: 40.0,
            tier: CloudTier::Light,
        });
        id
    }

    fn add_blast(state: &mut GameState, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        state.blasts.push(Blast {
            id,
            pos: Vec2::new(x, y),
            drift: 0.0,
        });
        id
    }

    fn add_pickup(state: &mut GameState, kind: PowerUpKind, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.pickups.push(Pickup {
            id,
            pos: Vec2::new(x, y),
            kind,
        });
    }

    /// A spot over the player's head, inside its collision band.
    fn over_player(state: &GameState) -> (f32, f32) {
        (state.player.x + 10.0, PLAYER_TOP + 10.0)
    }

    /// A spot overlapping the first star's box.
    fn over_star(state: &GameState, index: usize) -> (f32, f32) {
        let rect = state.stars[index].aabb();
        (rect.left, rect.top - 2.0)
    }

    #[test]
    fn test_level_intro_runs_its_fixed_duration() {
        let mut state = GameState::new(1);
        state.start_game();
        assert_eq!(state.phase, GamePhase::LevelTransition);

        let input = TickInput::default();
        let mut ticks = 0;
        while state.phase == GamePhase::LevelTransition {
            tick(&mut state, &input);
            ticks += 1;
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(ticks, LEVEL_INTRO_MS.div_ceil(TICK_MS));
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::LevelStarted { level: 1 })
        );
    }

    #[test]
    fn test_shoot_fires_one_centered_blast() {
        let mut state = playing_state();
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.blasts.len(), 1);
        let blast = state.blasts[0];
        assert_eq!(blast.drift, 0.0);
        // One tick of ascent has already happened
        assert_eq!(blast.pos.y, PLAYER_TOP - BLAST_SPEED);
        assert!(state.drain_events().contains(&GameEvent::Shoot));
    }

    #[test]
    fn test_multi_shot_fans_into_three() {
        let mut state = playing_state();
        state.effects.trigger(PowerUpKind::Multi);
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.blasts.len(), 3);
        let drifts: Vec<f32> = state.blasts.iter().map(|b| b.drift).collect();
        assert_eq!(drifts, MULTI_SHOT_DRIFTS.to_vec());
        // Offsets are centered on the player, with one tick of drift applied
        let center = state.player.center_x();
        for (blast, offset) in state.blasts.iter().zip(MULTI_SHOT_OFFSETS) {
            assert_eq!(
                blast.pos.x,
                center + offset - BLAST_WIDTH / 2.0 + blast.drift
            );
        }
    }

    #[test]
    fn test_manual_shot_suppressed_during_rapid_fire() {
        let mut state = playing_state();
        state.effects.trigger(PowerUpKind::Rapid);
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        // Neither the manual shot nor the cadence (still counting down) fired
        assert!(state.blasts.is_empty());
    }

    #[test]
    fn test_rapid_fire_shoots_on_cadence() {
        let mut state = playing_state();
        state.effects.trigger(PowerUpKind::Rapid);
        let input = TickInput::default();

        let ticks_per_shot = RAPID_FIRE_INTERVAL_MS.div_ceil(TICK_MS);
        for _ in 0..ticks_per_shot {
            tick(&mut state, &input);
        }
        assert_eq!(state.blasts.len(), 1);

        for _ in 0..ticks_per_shot {
            tick(&mut state, &input);
        }
        assert_eq!(state.blasts.len(), 2);
    }

    #[test]
    fn test_blast_destroys_cloud_and_scores() {
        let mut state = playing_state();
        let cloud = add_cloud(&mut state, 300.0, 400.0);
        add_blast(&mut state, 310.0, 410.0);

        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
        assert!(state.blasts.is_empty());
        assert_eq!(state.score, SCORE_CLOUD_DESTROYED);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::CloudDestroyed { cloud })
        );
    }

    #[test]
    fn test_scan_order_blast_beats_star() {
        let mut state = playing_state();
        let (sx, sy) = over_star(&state, 0);
        add_cloud(&mut state, sx, sy);
        // A blast sitting in the same spot: checked before the star
        add_blast(&mut state, sx + 5.0, sy + BLAST_SPEED + 2.0);

        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
        assert!(!state.stars[0].blocked);
        assert_eq!(state.score, SCORE_CLOUD_DESTROYED);
    }

    #[test]
    fn test_cloud_blocks_star() {
        let mut state = playing_state();
        let (sx, sy) = over_star(&state, 2);
        add_cloud(&mut state, sx, sy);

        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
        assert!(state.stars[2].blocked);
        assert_eq!(state.score, 0);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::StarBlocked { star: 3 })
        );
    }

    #[test]
    fn test_blocked_star_is_transparent_to_clouds() {
        let mut state = playing_state();
        state.stars[0].blocked = true;
        let (sx, sy) = over_star(&state, 0);
        let id = add_cloud(&mut state, sx, sy);

        tick(&mut state, &TickInput::default());
        // The cloud keeps falling; no event, no double-block
        assert_eq!(state.clouds.len(), 1);
        assert_eq!(state.clouds[0].id, id);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::StarBlocked { .. }))
        );
    }

    #[test]
    fn test_fifth_star_triggers_game_over_exactly_once() {
        let mut state = playing_state();
        for i in 0..4 {
            state.stars[i].blocked = true;
        }
        let (sx, sy) = over_star(&state, 4);
        add_cloud(&mut state, sx, sy);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count(),
            1
        );

        // Further ticks are inert
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_shield_absorbs_star_hit() {
        let mut state = playing_state();
        state.effects.trigger(PowerUpKind::Shield);
        let (sx, sy) = over_star(&state, 1);
        add_cloud(&mut state, sx, sy);

        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
        assert!(!state.stars[1].blocked);
        assert_eq!(state.score, SCORE_SHIELD_ABSORB);
    }

    #[test]
    fn test_cloud_hits_player_for_a_penalty() {
        let mut state = playing_state();
        let (px, py) = over_player(&state);
        add_cloud(&mut state, px, py);

        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
        assert_eq!(state.score, SCORE_PLAYER_HIT);
        assert!(state.drain_events().contains(&GameEvent::PlayerHit));
    }

    #[test]
    fn test_shield_protects_the_player() {
        let mut state = playing_state();
        state.effects.trigger(PowerUpKind::Shield);
        let (px, py) = over_player(&state);
        add_cloud(&mut state, px, py);

        tick(&mut state, &TickInput::default());
        // The cloud sails straight through
        assert_eq!(state.clouds.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut state = playing_state();
        let (px, py) = over_player(&state);
        add_cloud(&mut state, px, py);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, -20);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_pickup_collection_applies_effect_and_bonus() {
        let mut state = playing_state();
        let (px, py) = over_player(&state);
        add_pickup(&mut state, PowerUpKind::Shield, px, py);

        tick(&mut state, &TickInput::default());
        assert!(state.pickups.is_empty());
        assert!(state.effects.shield_active());
        assert_eq!(state.score, SCORE_POWERUP_COLLECTED);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::PickupCollected {
            kind: PowerUpKind::Shield
        }));
    }

    #[test]
    fn test_blast_wave_clears_the_sky() {
        let mut state = playing_state();
        add_cloud(&mut state, 100.0, 200.0);
        add_cloud(&mut state, 250.0, 300.0);
        add_cloud(&mut state, 400.0, 100.0);
        let (px, py) = over_player(&state);
        add_pickup(&mut state, PowerUpKind::Blast, px, py);

        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
        assert_eq!(
            state.score,
            3 * SCORE_BLAST_WAVE_PER_CLOUD + SCORE_POWERUP_COLLECTED
        );
        assert!(state.drain_events().contains(&GameEvent::BlastWave {
            clouds_destroyed: 3
        }));
    }

    #[test]
    fn test_pause_freezes_everything_and_resume_rearms() {
        let mut state = playing_state();
        add_cloud(&mut state, 300.0, 100.0);
        tick(&mut state, &TickInput::default());
        let frozen_y = state.clouds[0].pos.y;
        let frozen_timers = state.timers;

        let toggle = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Paused);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.clouds[0].pos.y, frozen_y);
        assert_eq!(state.timers, frozen_timers);

        tick(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Playing);
        // Resume restarts the spawn cadence at the full level interval
        // (minus the resume tick that just ran)
        let rearmed = SpawnTimers::armed_for(state.level);
        assert_eq!(state.timers.cloud_ms, rearmed.cloud_ms - TICK_MS);
        assert_eq!(state.timers.powerup_ms, rearmed.powerup_ms - TICK_MS);
    }

    #[test]
    fn test_pause_ignored_during_level_intro() {
        let mut state = GameState::new(5);
        state.start_game();
        assert_eq!(state.phase, GamePhase::LevelTransition);
        let toggle = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::LevelTransition);
    }

    #[test]
    fn test_score_threshold_enters_level_transition() {
        let mut state = playing_state();
        state.score = 490;
        add_cloud(&mut state, 300.0, 400.0);
        add_blast(&mut state, 310.0, 410.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 500);
        assert_eq!(state.level, 2);
        assert_eq!(state.phase, GamePhase::LevelTransition);
        // The transition cleared the field
        assert!(state.clouds.is_empty() && state.blasts.is_empty() && state.pickups.is_empty());
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::LevelUp { level: 2 })
        );
    }

    #[test]
    fn test_clouds_spawned_after_level_up_use_the_new_tier() {
        let mut state = playing_state();
        state.score = 490;
        add_cloud(&mut state, 300.0, 400.0);
        add_blast(&mut state, 310.0, 410.0);
        let input = TickInput::default();
        tick(&mut state, &input);
        while state.phase == GamePhase::LevelTransition {
            tick(&mut state, &input);
        }

        // Run until the level 2 cloud timer fires
        while state.clouds.is_empty() {
            tick(&mut state, &input);
        }
        assert_eq!(state.clouds[0].tier, CloudTier::Dark);
    }

    #[test]
    fn test_skip_level_is_developer_shortcut() {
        let mut state = playing_state();
        let skip = TickInput {
            skip_level: true,
            ..Default::default()
        };
        tick(&mut state, &skip);
        assert_eq!(state.level, 2);
        assert_eq!(state.phase, GamePhase::LevelTransition);
    }

    #[test]
    fn test_skip_level_capped_at_max() {
        let mut state = playing_state();
        state.level = MAX_LEVEL;
        let skip = TickInput {
            skip_level: true,
            ..Default::default()
        };
        tick(&mut state, &skip);
        assert_eq!(state.level, MAX_LEVEL);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_opening_pickups_drop_on_schedule() {
        let mut state = playing_state();
        let input = TickInput::default();
        for _ in 0..(2000 / TICK_MS) {
            tick(&mut state, &input);
        }
        assert!(
            state
                .pickups
                .iter()
                .any(|p| p.kind == PowerUpKind::Rapid)
        );
        // The second scripted drop is still pending
        assert_eq!(state.scripted_pickups.len(), 1);
        assert_eq!(state.scripted_pickups[0].kind, PowerUpKind::Multi);
    }

    #[test]
    fn test_blasts_leave_through_the_top() {
        let mut state = playing_state();
        add_blast(&mut state, 300.0, BLAST_SPEED - 1.0);
        tick(&mut state, &TickInput::default());
        assert!(state.blasts.is_empty());
    }

    #[test]
    fn test_clouds_leave_through_the_bottom() {
        let mut state = playing_state();
        add_cloud(&mut state, 300.0, GAME_HEIGHT - 1.0);
        tick(&mut state, &TickInput::default());
        assert!(state.clouds.is_empty());
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        a.start_game();
        b.start_game();
        for _ in 0..600 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        a.drain_events();
        b.drain_events();
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.clouds.len(), b.clouds.len());
        assert_eq!(a.player.x, b.player.x);
    }
}

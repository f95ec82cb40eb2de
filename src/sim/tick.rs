//! Per-frame simulation tick
//!
//! Core game loop step that advances the simulation by one scheduled frame.

use super::collision::{Landing, is_missed, lands_on_platform};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::REFERENCE_HZ;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
}

/// Advance the game state by one frame of `dt` seconds
///
/// Steps run in a fixed order: move platform, advance blocks (misses end the
/// run), resolve landings, clean up, level up, spawn. The first game-over
/// transition ends the frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = sanitize_dt(dt);
    state.time_ticks += 1;

    move_platform(state, input);

    advance_blocks(state, dt);
    if state.phase == GamePhase::GameOver {
        return;
    }

    resolve_landings(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Safety net; misses already ended the run above
    let area = state.area;
    state.blocks.retain(|b| !is_missed(b, &area));

    check_level_up(state);

    // Once per frame regardless of dt, so spawn rate follows frame rate
    let chance = state.tuning.spawn_chance(state.level);
    if state.roll() < chance {
        let id = state.spawn_random_block();
        log::trace!("Spawned block {id} at level {}", state.level);
    }
}

/// Clamp invalid frame deltas to zero
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::debug!("Ignoring invalid frame delta {dt}");
        0.0
    }
}

/// Nudge the platform by a fixed step per held direction
fn move_platform(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.platform_step;
    let platform = &mut state.platform;

    if input.left && platform.x > 0.0 {
        platform.x -= step;
    }
    if input.right && platform.right() < state.area.width {
        platform.x += step;
    }
    platform.x = platform.x.clamp(0.0, platform.max_x(&state.area));
}

/// Move every block down; any block past the bottom ends the run
fn advance_blocks(state: &mut GameState, dt: f32) {
    let fall = state.speed * dt * REFERENCE_HZ;
    let area = state.area;

    let mut missed = false;
    for block in &mut state.blocks {
        block.pos.y += fall;
        missed |= is_missed(block, &area);
    }

    if missed {
        state.end_run();
        state.blocks.retain(|b| !is_missed(b, &area));
    }
}

/// Score matching blocks on the platform; a mismatched one ends the run
fn resolve_landings(state: &mut GameState) {
    // Reverse order keeps remaining indices valid across removals
    for i in (0..state.blocks.len()).rev() {
        match lands_on_platform(&state.blocks[i], &state.platform, &state.area) {
            Landing::None => {}
            Landing::Caught => {
                let block = state.blocks.remove(i);
                state.score += 1;
                log::debug!("Caught {:?} block {} (score {})", block.color, block.id, state.score);
                state.emit(GameEvent::ScoreChanged(state.score));
            }
            Landing::Mismatch => {
                log::debug!(
                    "Block {} is {:?}, platform is {:?}",
                    state.blocks[i].id,
                    state.blocks[i].color,
                    state.platform.color
                );
                state.end_run();
                return;
            }
        }
    }
}

/// Raise level, speed and platform color when the score crosses a threshold
fn check_level_up(state: &mut GameState) {
    let new_level = state.tuning.level_for_score(state.score);
    if new_level <= state.level {
        return;
    }

    state.level = new_level;
    state.speed = state.tuning.speed_for_level(new_level);
    state.platform.color = state.random_color();
    log::info!(
        "Level {}: speed {:.1}, platform now {}",
        new_level,
        state.speed,
        state.platform.color.as_str()
    );
    state.emit(GameEvent::LevelChanged(new_level));
}

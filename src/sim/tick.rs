//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{breaches_hard_bound, detect};
use super::physics::{integrate, try_flap};
use super::pipes::advance;
use super::state::{GameEvent, GamePhase, GameState};

/// Input edges collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap button went down
    pub flap_pressed: bool,
    /// Flap button went up
    pub flap_released: bool,
    /// Start a new run (from the start prompt)
    pub start: bool,
    /// Back to the start prompt (from game over)
    pub restart: bool,
    /// Host clock in milliseconds, used for flap debounce and hover wobble
    pub now_ms: f64,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.reset();
    }
    if input.start {
        state.start();
    }

    let now_ms = input.now_ms;

    if input.flap_pressed {
        state.input.flap_held = true;
        if state.phase == GamePhase::Playing {
            flap(state, now_ms);
        }
    }
    if input.flap_released {
        state.input.flap_held = false;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Holding flap keeps re-triggering it, subject to the same debounce
    if state.input.flap_held {
        flap(state, now_ms);
    }
    integrate(&mut state.bird, &state.input, &state.tuning, dt, now_ms);

    if breaches_hard_bound(&state.bird, &state.tuning) {
        log::info!("Bird left the play field at y={:.1}", state.bird.pos.y);
        state.end_game();
        return;
    }

    advance(state);

    if let Some(collision) = detect(&state.bird, &state.pipes, &state.tuning) {
        log::info!("Bird hit {:?} at y={:.1}", collision, state.bird.pos.y);
        state.end_game();
    }
}

fn flap(state: &mut GameState, now_ms: f64) {
    if try_flap(&mut state.bird, &mut state.input, &state.tuning, now_ms) {
        state.emit(GameEvent::Flapped);
    }
}

//! Pipe management: scrolling, scoring, retirement and spawning

use super::state::{GameEvent, GameState};

/// What happened to the pipe list during one advance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// Pipes that scrolled past the bird this tick
    pub score_delta: u32,
    /// Whether a new pipe was spawned
    pub spawned: bool,
    /// IDs of pipes removed past the left cutoff
    pub retired: Vec<u32>,
}

/// Scroll every pipe one tick, then score, retire and spawn
///
/// A pipe spawns once the newest one has scrolled `pipe_spacing` left of
/// `spawn_x`. Only the first pipe of a run sits at `spawn_x`; later ones are
/// placed exactly `pipe_spacing` right of the newest pipe (see
/// `GameState::spawn_pipe`), so spacing does not drift with `pipe_speed`.
pub fn advance(state: &mut GameState) -> AdvanceOutcome {
    let speed = state.tuning.pipe_speed;
    let retire_x = state.tuning.retire_x;
    let spawn_line = state.tuning.spawn_x - state.tuning.pipe_spacing;
    let bird_x = state.bird.pos.x;

    let mut outcome = AdvanceOutcome::default();

    for pipe in &mut state.pipes {
        pipe.x -= speed;
        if !pipe.passed && pipe.x < bird_x {
            pipe.passed = true;
            outcome.score_delta += 1;
        }
    }

    state.pipes.retain(|pipe| {
        if pipe.x < retire_x {
            outcome.retired.push(pipe.id);
            false
        } else {
            true
        }
    });
    for &id in &outcome.retired {
        log::debug!("Retired pipe {}", id);
        state.emit(GameEvent::PipeRetired { id });
    }

    if outcome.score_delta > 0 {
        state.score += outcome.score_delta;
        state.emit(GameEvent::ScoreChanged(state.score));
    }

    let needs_spawn = state
        .pipes
        .last()
        .is_none_or(|newest| newest.x < spawn_line);
    if needs_spawn {
        state.spawn_pipe();
        outcome.spawned = true;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pipe;

    fn playing_state() -> GameState {
        let mut state = GameState::new(11);
        state.start();
        state.drain_events();
        state
    }

    fn place(state: &mut GameState, x: f32) {
        let id = state.next_entity_id();
        state.pipes.push(Pipe {
            id,
            x,
            gap_center_y: 0.0,
            gap_height: state.tuning.pipe_gap,
            passed: false,
        });
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut state = playing_state();
        let before = state.pipes[0].x;
        advance(&mut state);
        assert_eq!(state.pipes[0].x, before - 2.0);
    }

    #[test]
    fn test_crossing_bird_scores_once() {
        let mut state = GameState::new(5);
        state.pipes.clear();
        place(&mut state, -149.0);

        let outcome = advance(&mut state);
        assert_eq!(outcome.score_delta, 1);
        assert!(state.pipes[0].passed);
        assert_eq!(state.score, 1);
        assert!(state.events.contains(&GameEvent::ScoreChanged(1)));

        state.drain_events();
        let outcome = advance(&mut state);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(state.score, 1);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::ScoreChanged(_))));
    }

    #[test]
    fn test_retire_past_cutoff_notifies_once() {
        let mut state = GameState::new(5);
        place(&mut state, -399.0);
        let id = state.pipes[0].id;
        state.pipes[0].passed = true;

        let outcome = advance(&mut state);
        assert_eq!(outcome.retired, vec![id]);
        assert!(state.pipes.iter().all(|p| p.id != id));

        advance(&mut state);
        let removals = state
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::PipeRetired { id })
            .count();
        assert_eq!(removals, 1);
    }

    #[test]
    fn test_spawns_when_empty() {
        let mut state = GameState::new(5);
        let outcome = advance(&mut state);
        assert!(outcome.spawned);
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].x, state.tuning.spawn_x);
    }

    #[test]
    fn test_spawn_waits_for_spacing() {
        let mut state = playing_state();
        // Newest pipe reaches the spawn line (100) after 125 ticks and passes it on the next
        for _ in 0..125 {
            assert!(!advance(&mut state).spawned);
        }
        assert_eq!(state.pipes.len(), 1);

        let outcome = advance(&mut state);
        assert!(outcome.spawned);
        assert_eq!(state.pipes.len(), 2);
        assert_eq!(state.pipes[1].x - state.pipes[0].x, state.tuning.pipe_spacing);
    }

    #[test]
    fn test_spacing_holds_over_long_run() {
        let mut state = playing_state();
        for _ in 0..5000 {
            advance(&mut state);
            for pair in state.pipes.windows(2) {
                assert!((pair[1].x - pair[0].x - state.tuning.pipe_spacing).abs() < 1e-3);
                assert!(pair[1].id > pair[0].id);
            }
        }
        assert!(!state.pipes.is_empty());
        assert!(state.score > 0);
    }
}

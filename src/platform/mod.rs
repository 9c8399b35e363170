//! Platform abstraction layer
//!
//! The simulation never talks to a renderer or a HUD directly. Hosts
//! implement `RenderSink` and `HudSink`, collect input edges into a
//! `FixedStep`, and call `present` once per frame to forward queued
//! `GameEvent`s.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{Bird, GameEvent, GameState, Pipe, TickInput, tick};

/// Scene side of the game: bird pose and pipe pairs
pub trait RenderSink {
    /// A pipe pair entered the scene
    fn pipe_added(&mut self, pipe: &Pipe);
    /// A pipe pair left the scene; called once per pipe
    fn pipe_removed(&mut self, id: u32);
    /// Draw the current frame
    fn draw(&mut self, bird: &Bird, pipes: &[Pipe]);
    /// Hook for wing animation
    fn bird_flapped(&mut self) {}
}

/// Score and overlay side of the game
pub trait HudSink {
    fn score_changed(&mut self, score: u32);
    fn game_over_shown(&mut self, shown: bool);
    fn start_prompt_shown(&mut self, shown: bool);
}

/// Forward one event to whichever collaborator consumes it
pub fn dispatch(event: &GameEvent, render: &mut impl RenderSink, hud: &mut impl HudSink) {
    match event {
        GameEvent::PipeSpawned(pipe) => render.pipe_added(pipe),
        GameEvent::PipeRetired { id } => render.pipe_removed(*id),
        GameEvent::Flapped => render.bird_flapped(),
        GameEvent::ScoreChanged(score) => hud.score_changed(*score),
        GameEvent::GameOverShown(shown) => hud.game_over_shown(*shown),
        GameEvent::StartPromptShown(shown) => hud.start_prompt_shown(*shown),
    }
}

/// Drain queued events into the collaborators, then draw the frame
pub fn present(state: &mut GameState, render: &mut impl RenderSink, hud: &mut impl HudSink) {
    for event in state.drain_events() {
        dispatch(&event, render, hud);
    }
    render.draw(&state.bird, &state.pipes);
}

/// Fixed-timestep accumulator between host frames and simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    input: TickInput,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_flap(&mut self) {
        self.input.flap_pressed = true;
    }

    pub fn release_flap(&mut self) {
        self.input.flap_released = true;
    }

    pub fn request_start(&mut self) {
        self.input.start = true;
    }

    pub fn request_restart(&mut self) {
        self.input.restart = true;
    }

    /// Input edges waiting for the next tick
    pub fn pending(&self) -> &TickInput {
        &self.input
    }

    /// Run as many ticks as `frame_dt` seconds cover; returns the tick count
    pub fn update(&mut self, state: &mut GameState, frame_dt: f32, now_ms: f64) -> u32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;
        self.input.now_ms = now_ms;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.flap_pressed = false;
            self.input.flap_released = false;
            self.input.start = false;
            self.input.restart = false;
        }
        substeps
    }
}

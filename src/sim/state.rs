//! Game state and core simulation types
//!
//! Everything a session needs lives in `GameState`, so several sessions can
//! run side by side without sharing anything.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bounds::Aabb;
use super::spawn::generate_pipe;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the start command, start prompt visible
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for reset
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// x is fixed for the whole session, y moves
    pub pos: Vec2,
    /// Vertical velocity (negative = upward)
    pub velocity: f32,
    /// Cosmetic tilt (radians)
    pub rotation: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, 0.0),
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Hitbox around the bird center
    pub fn hitbox(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_center(
            self.pos,
            Vec2::new(tuning.bird_half_width, tuning.bird_half_height),
        )
    }
}

/// A top/bottom pipe pair sharing one x position
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub id: u32,
    pub x: f32,
    pub gap_center_y: f32,
    pub gap_height: f32,
    /// Set once when the pipe scrolls past the bird
    pub passed: bool,
}

impl Pipe {
    /// y of the top pipe's lower (inner) end
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center_y + self.gap_height / 2.0
    }

    /// y of the bottom pipe's upper (inner) end
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y - self.gap_height / 2.0
    }

    /// Rendered extent of the top pipe, body plus cap
    pub fn top_visual(&self, tuning: &Tuning) -> Aabb {
        self.visual_from_end(self.gap_top(), 1.0, tuning)
    }

    /// Rendered extent of the bottom pipe, body plus cap
    pub fn bottom_visual(&self, tuning: &Tuning) -> Aabb {
        self.visual_from_end(self.gap_bottom(), -1.0, tuning)
    }

    pub fn top_hitbox(&self, tuning: &Tuning) -> Aabb {
        self.top_visual(tuning).inset(tuning.hitbox_inset)
    }

    pub fn bottom_hitbox(&self, tuning: &Tuning) -> Aabb {
        self.bottom_visual(tuning).inset(tuning.hitbox_inset)
    }

    /// Body extends from `end_y` away from the gap in direction `dir`; the
    /// cap is centered on `end_y`.
    fn visual_from_end(&self, end_y: f32, dir: f32, tuning: &Tuning) -> Aabb {
        let half_width = tuning.pipe_width / 2.0;
        let far_y = end_y + dir * tuning.pipe_height;
        let body = Aabb::new(
            Vec2::new(self.x - half_width, end_y.min(far_y)),
            Vec2::new(self.x + half_width, end_y.max(far_y)),
        );
        let cap = Aabb::from_center(
            Vec2::new(self.x, end_y),
            Vec2::new(half_width + tuning.cap_overhang, tuning.cap_height / 2.0),
        );
        body.union(&cap)
    }
}

/// Per-session input state, fed from `TickInput` edges
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Flap button currently held
    pub flap_held: bool,
    /// Timestamp of the last accepted flap (host clock, milliseconds)
    pub last_flap_ms: Option<f64>,
}

/// Notifications for the render and HUD collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PipeSpawned(Pipe),
    PipeRetired { id: u32 },
    ScoreChanged(u32),
    GameOverShown(bool),
    StartPromptShown(bool),
    /// A flap impulse was accepted
    Flapped,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Pipes passed this run
    pub score: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    pub bird: Bird,
    pub input: InputState,
    /// Active pipes in spawn order (x descending from back to front)
    pub pipes: Vec<Pipe>,
    /// Pending collaborator notifications, oldest first
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::NotStarted,
            score: 0,
            time_ticks: 0,
            bird: Bird::new(&tuning),
            input: InputState::default(),
            pipes: Vec::new(),
            events: vec![GameEvent::StartPromptShown(true)],
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Generate a pipe and append it to the active list
    ///
    /// The first pipe appears at `spawn_x`; later pipes are placed exactly
    /// `pipe_spacing` right of the newest one.
    pub fn spawn_pipe(&mut self) {
        let id = self.next_entity_id();
        let mut pipe = generate_pipe(&mut self.rng, &self.tuning, id);
        if let Some(newest) = self.pipes.last() {
            pipe.x = newest.x + self.tuning.pipe_spacing;
        }
        log::debug!(
            "Spawned pipe {} at x={:.1} gap_center={:.1}",
            pipe.id,
            pipe.x,
            pipe.gap_center_y
        );
        self.emit(GameEvent::PipeSpawned(pipe.clone()));
        self.pipes.push(pipe);
    }

    /// NotStarted -> Playing
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::StartPromptShown(false));
        self.spawn_pipe();
        log::info!("Session started (seed {})", self.seed);
    }

    /// Playing -> GameOver
    pub fn end_game(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.emit(GameEvent::GameOverShown(true));
        log::info!(
            "Game over after {} ticks with score {}",
            self.time_ticks,
            self.score
        );
    }

    /// GameOver -> NotStarted, clearing the run
    pub fn reset(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        for pipe in std::mem::take(&mut self.pipes) {
            self.events.push(GameEvent::PipeRetired { id: pipe.id });
        }
        self.score = 0;
        self.time_ticks = 0;
        self.bird = Bird::new(&self.tuning);
        self.input.last_flap_ms = None;
        self.phase = GamePhase::NotStarted;
        self.emit(GameEvent::ScoreChanged(0));
        self.emit(GameEvent::GameOverShown(false));
        self.emit(GameEvent::StartPromptShown(true));
        log::info!("Session reset");
    }
}

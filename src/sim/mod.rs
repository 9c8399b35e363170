//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Host clock only through `TickInput::now_ms`
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod physics;
pub mod pipes;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use collision::{Collision, breaches_hard_bound, check, detect};
pub use physics::{integrate, try_flap};
pub use pipes::{AdvanceOutcome, advance};
pub use spawn::generate_pipe;
pub use state::{Bird, GameEvent, GamePhase, GameState, InputState, Pipe};
pub use tick::{TickInput, tick};

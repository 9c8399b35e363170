//! Skyflap - a flap-through-the-pipes arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Render/HUD collaborator traits and the fixed-step driver
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the tuning was playtested at)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per second; position deltas are scaled by `dt * TICK_RATE`
    pub const TICK_RATE: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Linear interpolation from `a` toward `b` by factor `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Replace a non-finite value with `fallback`
#[inline]
pub fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

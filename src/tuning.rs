//! Game balance and geometry tuning
//!
//! Every gameplay constant lives here so alternate tunings can be swapped in
//! for tests or loaded from a JSON file. The defaults are the playtested
//! values; the blend factors in particular set the feel of the bird and
//! should not be changed casually.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Complete set of gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bird physics ===
    /// Downward acceleration added to the fall target each tick
    pub gravity: f32,
    /// Velocity added to the flap target (negative = upward)
    pub flap_force: f32,
    /// Fastest allowed fall speed
    pub max_velocity: f32,
    /// Fastest allowed climb speed (negative)
    pub min_velocity: f32,
    /// Minimum time between accepted flaps (milliseconds)
    pub flap_interval_ms: f64,
    /// Blend toward the flap target on an accepted flap
    pub flap_blend: f32,
    /// Blend toward the gravity target when not holding flap
    pub fall_blend: f32,
    /// Gentle upward velocity while flap is held
    pub hover_velocity: f32,
    /// Blend toward the hover target while flap is held
    pub hover_blend: f32,
    /// Amplitude of the sinusoidal hover wobble
    pub float_amplitude: f32,
    /// Frequency of the hover wobble (radians per millisecond)
    pub float_speed: f32,

    // === Bird visuals / hitbox ===
    /// Rotation per unit of velocity
    pub rotation_scale: f32,
    /// Rotation limit (radians, symmetric)
    pub max_rotation: f32,
    /// Rotation smoothing factor
    pub rotation_blend: f32,
    /// Fixed horizontal position of the bird
    pub bird_x: f32,
    /// Bird hitbox half extents
    pub bird_half_width: f32,
    pub bird_half_height: f32,

    // === Pipes ===
    /// Horizontal scroll per tick
    pub pipe_speed: f32,
    /// Horizontal distance between consecutive pipes
    pub pipe_spacing: f32,
    /// Vertical opening between top and bottom pipe
    pub pipe_gap: f32,
    /// Gap centers are drawn from `[-range, +range]`
    pub gap_center_range: f32,
    /// X where new pipes appear (right of the viewport)
    pub spawn_x: f32,
    /// Pipes left of this x are retired
    pub retire_x: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    /// How far the cap sticks out on each side of the pipe body
    pub cap_overhang: f32,
    pub cap_height: f32,
    /// Pipe hitboxes shrink by this much on every side
    pub hitbox_inset: f32,

    // === Bounds ===
    /// Bird y is clamped to `[-soft_bound, soft_bound]`
    pub soft_bound: f32,
    /// Ground/ceiling line tested by the collision detector
    pub world_bound: f32,
    /// Terminal out-of-bounds line
    pub hard_bound: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.37,
            flap_force: -2.0,
            max_velocity: 4.0,
            min_velocity: -2.5,
            flap_interval_ms: 250.0,
            flap_blend: 0.15,
            fall_blend: 0.06,
            hover_velocity: -1.2,
            hover_blend: 0.03,
            float_amplitude: 0.1,
            float_speed: 0.002,

            rotation_scale: 0.3,
            max_rotation: 0.6,
            rotation_blend: 0.1,
            bird_x: -150.0,
            bird_half_width: 12.0,
            bird_half_height: 10.0,

            pipe_speed: 2.0,
            pipe_spacing: 250.0,
            pipe_gap: 150.0,
            gap_center_range: 100.0,
            spawn_x: 350.0,
            retire_x: -400.0,
            pipe_width: 30.0,
            pipe_height: 800.0,
            cap_overhang: 5.0,
            cap_height: 20.0,
            hitbox_inset: 5.0,

            soft_bound: 250.0,
            world_bound: 200.0,
            hard_bound: 300.0,
        }
    }
}

impl Tuning {
    /// Parse a tuning from JSON; missing fields take their default values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether this tuning can drive a session without degenerate geometry
    pub fn is_playable(&self) -> bool {
        let floats = [
            self.gravity,
            self.flap_force,
            self.max_velocity,
            self.min_velocity,
            self.flap_blend,
            self.fall_blend,
            self.hover_velocity,
            self.hover_blend,
            self.float_amplitude,
            self.float_speed,
            self.rotation_scale,
            self.max_rotation,
            self.rotation_blend,
            self.bird_x,
            self.bird_half_width,
            self.bird_half_height,
            self.pipe_speed,
            self.pipe_spacing,
            self.pipe_gap,
            self.gap_center_range,
            self.spawn_x,
            self.retire_x,
            self.pipe_width,
            self.pipe_height,
            self.cap_overhang,
            self.cap_height,
            self.hitbox_inset,
            self.soft_bound,
            self.world_bound,
            self.hard_bound,
        ];
        if !floats.iter().all(|v| v.is_finite()) || !self.flap_interval_ms.is_finite() {
            return false;
        }

        let blends = [
            self.flap_blend,
            self.fall_blend,
            self.hover_blend,
            self.rotation_blend,
        ];

        self.min_velocity <= 0.0
            && self.max_velocity >= 0.0
            && self.pipe_gap > 0.0
            && self.pipe_speed > 0.0
            && self.pipe_spacing > 0.0
            && self.pipe_width > 0.0
            && self.pipe_height > 0.0
            && self.gap_center_range >= 0.0
            && self.bird_half_width > 0.0
            && self.bird_half_height > 0.0
            && self.cap_height >= 0.0
            && self.cap_overhang >= 0.0
            && self.hitbox_inset >= 0.0
            && self.world_bound > 0.0
            && self.flap_interval_ms >= 0.0
            && self.max_rotation >= 0.0
            && self.soft_bound > 0.0
            && self.hard_bound >= self.soft_bound
            && self.retire_x < self.bird_x
            && self.bird_x < self.spawn_x
            && blends.iter().all(|b| (0.0..=1.0).contains(b))
    }

    /// Load a tuning file, falling back to defaults on any problem
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) if tuning.is_playable() => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(_) => {
                log::warn!("Tuning {} is not playable, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Malformed tuning {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

//! Bird physics
//!
//! Velocity is never assigned outright: flaps, gravity and hovering all blend
//! the current velocity toward a target, which keeps the motion smooth.
//! Velocity sign convention: negative = upward.

use super::state::{Bird, InputState};
use crate::consts::TICK_RATE;
use crate::tuning::Tuning;
use crate::{finite_or, lerp};

/// Attempt a flap impulse at host time `now_ms`
///
/// Accepted only if strictly more than `flap_interval_ms` passed since the
/// last accepted flap. Rejected requests are dropped without a trace.
/// Returns whether the impulse was applied.
pub fn try_flap(bird: &mut Bird, input: &mut InputState, tuning: &Tuning, now_ms: f64) -> bool {
    if !now_ms.is_finite() {
        return false;
    }
    if let Some(last) = input.last_flap_ms {
        if now_ms - last <= tuning.flap_interval_ms {
            return false;
        }
    }

    let target = (bird.velocity + tuning.flap_force).max(tuning.min_velocity);
    bird.velocity = clamp_velocity(lerp(bird.velocity, target, tuning.flap_blend), tuning);
    input.last_flap_ms = Some(now_ms);
    log::trace!("Flap accepted at {:.0}ms, velocity {:.3}", now_ms, bird.velocity);
    true
}

/// Advance the bird by one tick
pub fn integrate(bird: &mut Bird, input: &InputState, tuning: &Tuning, dt: f32, now_ms: f64) {
    let velocity = if input.flap_held {
        let wobble = ((now_ms * tuning.float_speed as f64).sin() as f32) * tuning.float_amplitude;
        let target = tuning.hover_velocity + finite_or(wobble, 0.0);
        lerp(bird.velocity, target, tuning.hover_blend)
    } else {
        let target = (bird.velocity + tuning.gravity).min(tuning.max_velocity);
        lerp(bird.velocity, target, tuning.fall_blend)
    };
    bird.velocity = clamp_velocity(velocity, tuning);

    let new_y = bird.pos.y - bird.velocity * dt * TICK_RATE;
    bird.pos.y = finite_or(new_y, bird.pos.y).clamp(-tuning.soft_bound, tuning.soft_bound);

    let target_rotation =
        (bird.velocity * tuning.rotation_scale).clamp(-tuning.max_rotation, tuning.max_rotation);
    bird.rotation = finite_or(
        lerp(bird.rotation, target_rotation, tuning.rotation_blend),
        0.0,
    );
}

#[inline]
fn clamp_velocity(velocity: f32, tuning: &Tuning) -> f32 {
    finite_or(velocity, 0.0).clamp(tuning.min_velocity, tuning.max_velocity)
}

//! Collision detection
//!
//! Pipe hitboxes are inset from the rendered geometry, so grazing a cap is
//! forgiven. The bird dies on the ground/ceiling line before it can reach
//! the soft clamp.

use super::state::{Bird, Pipe};
use crate::tuning::Tuning;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ceiling,
    Ground,
    Pipe { id: u32 },
}

/// Find the first thing the bird is touching, if any
///
/// World bounds are checked before pipes; pipes are checked in list order
/// and the first hit wins.
pub fn detect(bird: &Bird, pipes: &[Pipe], tuning: &Tuning) -> Option<Collision> {
    if bird.pos.y > tuning.world_bound {
        return Some(Collision::Ceiling);
    }
    if bird.pos.y < -tuning.world_bound {
        return Some(Collision::Ground);
    }

    let bird_box = bird.hitbox(tuning);
    pipes
        .iter()
        .find(|pipe| {
            bird_box.intersects(&pipe.top_hitbox(tuning))
                || bird_box.intersects(&pipe.bottom_hitbox(tuning))
        })
        .map(|pipe| Collision::Pipe { id: pipe.id })
}

/// Whether the bird is colliding with anything
#[inline]
pub fn check(bird: &Bird, pipes: &[Pipe], tuning: &Tuning) -> bool {
    detect(bird, pipes, tuning).is_some()
}

/// Whether the bird is past the terminal out-of-bounds line
#[inline]
pub fn breaches_hard_bound(bird: &Bird, tuning: &Tuning) -> bool {
    bird.pos.y.abs() > tuning.hard_bound
}

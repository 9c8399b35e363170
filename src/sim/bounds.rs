//! Axis-aligned bounding boxes for hitboxes
//!
//! Pure geometry with no rendering dependency. The y axis points up, so a
//! box's `min.y` is its bottom edge.

use glam::Vec2;

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half` in each direction
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Shrink by `amount` on every side
    ///
    /// A box thinner than `2 * amount` collapses to its center line rather
    /// than inverting.
    pub fn inset(&self, amount: f32) -> Aabb {
        let center = self.center();
        let min = (self.min + Vec2::splat(amount)).min(center);
        let max = (self.max - Vec2::splat(amount)).max(center);
        Aabb { min, max }
    }

    /// Overlap test; boxes that only touch count as intersecting
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec2::new(10.0, -5.0), Vec2::new(2.0, 3.0));
        assert_eq!(b.min, Vec2::new(8.0, -8.0));
        assert_eq!(b.max, Vec2::new(12.0, -2.0));
        assert_eq!(b.center(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let overlapping = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let apart = Aabb::new(Vec2::new(10.1, 0.0), Vec2::new(20.0, 10.0));
        let above = Aabb::new(Vec2::new(0.0, 11.0), Vec2::new(10.0, 20.0));

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(!a.intersects(&above));
    }

    #[test]
    fn test_union_and_inset() {
        let body = Aabb::new(Vec2::new(-15.0, 75.0), Vec2::new(15.0, 875.0));
        let cap = Aabb::new(Vec2::new(-20.0, 65.0), Vec2::new(20.0, 85.0));
        let visual = body.union(&cap);
        assert_eq!(visual.min, Vec2::new(-20.0, 65.0));
        assert_eq!(visual.max, Vec2::new(20.0, 875.0));

        let hitbox = visual.inset(5.0);
        assert_eq!(hitbox.min, Vec2::new(-15.0, 70.0));
        assert_eq!(hitbox.max, Vec2::new(15.0, 870.0));
    }

    #[test]
    fn test_inset_never_inverts() {
        let thin = Aabb::new(Vec2::ZERO, Vec2::new(4.0, 100.0));
        let shrunk = thin.inset(5.0);
        assert!(shrunk.min.x <= shrunk.max.x);
        assert_eq!(shrunk.min.x, 2.0);
        assert_eq!(shrunk.max.x, 2.0);
        assert_eq!(shrunk.min.y, 5.0);
    }
}

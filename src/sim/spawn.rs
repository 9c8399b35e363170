//! Pipe generation
//!
//! Gap centers are drawn from a symmetric range around the vertical center,
//! so a generated pipe is always valid for the tuning it came from.

use rand::Rng;

use super::state::Pipe;
use crate::tuning::Tuning;

/// Create a new pipe pair at the spawn line with a random gap center
pub fn generate_pipe<R: Rng>(rng: &mut R, tuning: &Tuning, id: u32) -> Pipe {
    // Scale a unit draw so a huge range cannot overflow the sampler
    let range = tuning.gap_center_range.abs();
    let gap_center_y = if range > 0.0 {
        range * rng.random_range(-1.0f32..=1.0)
    } else {
        0.0
    };

    Pipe {
        id,
        x: tuning.spawn_x,
        gap_center_y,
        gap_height: tuning.pipe_gap,
        passed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_within_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);

        for id in 0..500 {
            let pipe = generate_pipe(&mut rng, &tuning, id);
            assert_eq!(pipe.id, id);
            assert_eq!(pipe.x, 350.0);
            assert_eq!(pipe.gap_height, 150.0);
            assert!(!pipe.passed);
            assert!(pipe.gap_center_y >= -100.0 && pipe.gap_center_y <= 100.0);
        }
    }

    #[test]
    fn test_generate_spreads_gap_centers() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let centers: Vec<f32> = (0..200)
            .map(|id| generate_pipe(&mut rng, &tuning, id).gap_center_y)
            .collect();

        assert!(centers.iter().any(|&c| c > 50.0));
        assert!(centers.iter().any(|&c| c < -50.0));
    }

    #[test]
    fn test_zero_range_centers_gap() {
        let tuning = Tuning {
            gap_center_range: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(generate_pipe(&mut rng, &tuning, 1).gap_center_y, 0.0);
    }

    #[test]
    fn test_huge_range_stays_finite() {
        let tuning = Tuning {
            gap_center_range: f32::MAX,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        for id in 0..100 {
            assert!(generate_pipe(&mut rng, &tuning, id).gap_center_y.is_finite());
        }
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(77);
        let mut b = Pcg32::seed_from_u64(77);
        for id in 0..20 {
            assert_eq!(
                generate_pipe(&mut a, &tuning, id),
                generate_pipe(&mut b, &tuning, id)
            );
        }
    }
}

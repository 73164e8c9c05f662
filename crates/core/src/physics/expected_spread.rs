//! Two-dimensional expected spread rate
//!
//! Expected head fire spread rate through a random mosaic of two fuels.
//! Each sample draws a lattice `depth` cells deep and `2 × laterals + 1`
//! cells wide, assigning each cell the primary fuel with probability equal
//! to its coverage. The fire enters along the first row and may advance
//! straight ahead or diagonally into a neighbouring column; diagonal steps
//! cover √2 cell lengths at the cell's 45° spread rate from its own fire
//! ellipse. The fastest path through the lattice is found by dynamic
//! programming, row by row.
//!
//! The expected rate is the lattice depth divided by the mean fastest
//! arrival time over all samples that can be crossed at all.
//!
//! # References
//! - Finney, M.A. (2003). "Calculation of fire spread rates across random landscapes."
//!   International Journal of Wildland Fire, 12(2), 167-174.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::fire_shape;
use crate::core_types::units::SMIDGEN;

/// Sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedSpreadConfig {
    /// Lattices to draw
    pub samples: usize,
    /// Rows in the spread direction
    pub depth: usize,
    /// Columns on each side of the centre column
    pub laterals: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for ExpectedSpreadConfig {
    fn default() -> Self {
        Self {
            samples: 2,
            depth: 2,
            laterals: 0,
            seed: 0x2d5e_ed00,
        }
    }
}

/// Spread description of one fuel in the mosaic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFuel {
    /// Head fire spread rate (ft/min)
    pub head_rate: f64,
    /// Fire length-to-width ratio
    pub length_to_width: f64,
}

impl CellFuel {
    /// Time to cross one cell straight ahead and diagonally
    fn crossing_times(&self) -> (f64, f64) {
        if self.head_rate < SMIDGEN {
            return (f64::INFINITY, f64::INFINITY);
        }
        let ecc = fire_shape::eccentricity(self.length_to_width);
        let diag_rate = fire_shape::spread_at_beta(self.head_rate, ecc, 45.0);
        let diag = if diag_rate < SMIDGEN {
            f64::INFINITY
        } else {
            std::f64::consts::SQRT_2 / diag_rate
        };
        (1.0 / self.head_rate, diag)
    }
}

/// Expected spread rate (ft/min) through a mosaic of `primary` covering
/// `coverage` of the area and `secondary` covering the rest
#[must_use]
pub fn expected_spread_rate(
    primary: &CellFuel,
    secondary: &CellFuel,
    coverage: f64,
    config: &ExpectedSpreadConfig,
) -> f64 {
    let depth = config.depth.max(1);
    let width = 2 * config.laterals + 1;
    let samples = config.samples.max(1);
    let coverage = coverage.clamp(0.0, 1.0);
    let times = [primary.crossing_times(), secondary.crossing_times()];

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut total = 0.0;
    let mut crossed = 0_usize;
    let mut arrival = vec![0.0; width];
    let mut next = vec![0.0; width];

    for _ in 0..samples {
        for row in 0..depth {
            for (col, slot) in next.iter_mut().enumerate() {
                let fuel = usize::from(!rng.random_bool(coverage));
                let (straight, diagonal) = times[fuel];
                *slot = if row == 0 {
                    straight
                } else {
                    let lo = col.saturating_sub(1);
                    let hi = (col + 1).min(width - 1);
                    (lo..=hi)
                        .map(|from| {
                            arrival[from] + if from == col { straight } else { diagonal }
                        })
                        .fold(f64::INFINITY, f64::min)
                };
            }
            std::mem::swap(&mut arrival, &mut next);
        }
        let fastest = arrival.iter().copied().fold(f64::INFINITY, f64::min);
        if fastest.is_finite() {
            total += fastest;
            crossed += 1;
        }
    }

    if crossed == 0 || total < SMIDGEN {
        return 0.0;
    }
    depth as f64 / (total / crossed as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FAST: CellFuel = CellFuel {
        head_rate: 20.0,
        length_to_width: 2.0,
    };
    const SLOW: CellFuel = CellFuel {
        head_rate: 2.0,
        length_to_width: 1.5,
    };

    #[test]
    fn test_uniform_mosaic_returns_its_rate() {
        let config = ExpectedSpreadConfig {
            samples: 10,
            depth: 5,
            laterals: 2,
            ..ExpectedSpreadConfig::default()
        };
        assert_relative_eq!(expected_spread_rate(&FAST, &SLOW, 1.0, &config), 20.0, epsilon = 1e-9);
        assert_relative_eq!(expected_spread_rate(&FAST, &SLOW, 0.0, &config), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_mosaic_between_extremes() {
        let config = ExpectedSpreadConfig {
            samples: 200,
            depth: 6,
            laterals: 3,
            seed: 7,
        };
        let ros = expected_spread_rate(&FAST, &SLOW, 0.5, &config);
        assert!(ros > 2.0 && ros < 20.0, "ros = {ros}");
    }

    #[test]
    fn test_same_seed_same_answer() {
        let config = ExpectedSpreadConfig {
            samples: 20,
            depth: 4,
            laterals: 1,
            seed: 99,
        };
        let a = expected_spread_rate(&FAST, &SLOW, 0.3, &config);
        let b = expected_spread_rate(&FAST, &SLOW, 0.3, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unburnable_mosaic() {
        let dead = CellFuel {
            head_rate: 0.0,
            length_to_width: 1.0,
        };
        let config = ExpectedSpreadConfig::default();
        assert_eq!(expected_spread_rate(&dead, &dead, 0.5, &config), 0.0);
    }
}

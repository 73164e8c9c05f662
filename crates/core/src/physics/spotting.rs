//! Albini Spotting Distance Model
//!
//! Maximum spotting distance from three firebrand sources: a burning pile,
//! a wind-driven surface fire and a group of torching trees. Each source
//! lofts firebrands to a height that sets how far the 20-ft wind carries
//! them over flat terrain; ridge/valley terrain then stretches or shortens
//! the flat distance.
//!
//! # References
//! - Albini, F.A. (1979). "Spot fire distance from burning trees - a predictive model."
//!   USDA Forest Service General Technical Report INT-56.
//! - Albini, F.A. (1981). "Spot fire distance from isolated sources - extensions of a predictive model."
//!   USDA Forest Service Research Note INT-309.
//! - Chase, C.H. (1981). "Spot fire distance equations for pocket calculators."
//!   USDA Forest Service Research Note INT-310.

use super::fire_shape;
use super::rothermel::SMIDGEN;

/// Tree species with torching flame coefficients, in worksheet item order.
pub const TORCHING_SPECIES: &[&str] = &[
    "Engelmann spruce",
    "Douglas-fir",
    "Subalpine fir",
    "Western hemlock",
    "Ponderosa pine",
    "Lodgepole pine",
    "Western white pine",
    "Grand fir",
    "Balsam fir",
    "Slash pine",
    "Longleaf pine",
    "Pond pine",
    "Shortleaf pine",
    "Loblolly pine",
];

/// Flame height and duration coefficients per torching species:
/// height a × dbh^b, duration c × dbh^d.
const TORCH_COEF: [[f64; 4]; 14] = [
    [15.7, 0.451, 12.6, -0.256],
    [15.7, 0.451, 10.7, -0.278],
    [15.7, 0.451, 10.7, -0.278],
    [15.7, 0.451, 6.3, -0.249],
    [12.9, 0.453, 12.6, -0.256],
    [12.9, 0.453, 12.6, -0.256],
    [12.9, 0.453, 10.7, -0.278],
    [16.5, 0.515, 10.7, -0.278],
    [16.5, 0.515, 10.7, -0.278],
    [2.71, 1.0, 11.9, -0.389],
    [2.71, 1.0, 11.9, -0.389],
    [2.71, 1.0, 7.91, -0.344],
    [2.71, 1.0, 7.91, -0.344],
    [2.71, 1.0, 13.5, -0.544],
];

/// Lofted firebrand height coefficients by flame ratio class.
const LOFT_A: [f64; 4] = [4.24, 3.64, 2.78, 4.70];
const LOFT_B: [f64; 4] = [0.332, 0.391, 0.418, 0.0];

/// Firebrand source position in ridge/valley terrain, in worksheet item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotSource {
    /// Midslope, windward side
    MidslopeWindward,
    /// Valley bottom
    ValleyBottom,
    /// Midslope, leeward side
    MidslopeLeeward,
    /// Ridge top
    RidgeTop,
}

impl SpotSource {
    /// Source for a worksheet item index; unknown indices are ridge top
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => SpotSource::MidslopeWindward,
            1 => SpotSource::ValleyBottom,
            2 => SpotSource::MidslopeLeeward,
            _ => SpotSource::RidgeTop,
        }
    }
}

/// Ridge/valley terrain under the firebrand path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terrain {
    /// Where the firebrand source sits
    pub source: SpotSource,
    /// Horizontal ridge-to-valley distance (mi)
    pub ridge_to_valley_dist: f64,
    /// Ridge-to-valley elevation difference (ft)
    pub ridge_to_valley_elev: f64,
}

/// Spotting distance result common to every source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpotDistance {
    /// Cover height the firebrands must clear (ft)
    pub cover_ht: f64,
    /// Lofted firebrand height (ft)
    pub firebrand_ht: f64,
    /// Distance over flat terrain (mi)
    pub flat_dist: f64,
    /// Distance over the given terrain (mi)
    pub dist: f64,
}

/// Torching tree flame description.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorchingFlame {
    /// Steady flame height (ft)
    pub height: f64,
    /// Steady flame duration (min)
    pub duration: f64,
    /// Tree height over flame height
    pub ratio: f64,
}

/// Effective cover height: downwind canopy height, at least 1 ft
fn cover_height(cover_ht: f64) -> f64 {
    cover_ht.max(1.0)
}

/// Flat-terrain firebrand transport distance (mi)
///
/// # Formula
/// ```text
/// d = 0.000718 × U₂₀ × √H × (0.362 + √(z/H)/2 × ln(z/H))
/// ```
///
/// `H` is the cover height and `z` the lofted firebrand height; firebrands
/// that do not clear the cover travel nowhere.
#[must_use]
pub fn flat_distance(firebrand_ht: f64, cover_ht: f64, wind_20ft: f64) -> f64 {
    if firebrand_ht <= cover_ht || cover_ht < SMIDGEN {
        return 0.0;
    }
    let r = firebrand_ht / cover_ht;
    (0.000_718 * wind_20ft * cover_ht.sqrt() * (0.362 + 0.5 * r.sqrt() * r.ln())).max(0.0)
}

/// Spotting distance (mi) over ridge/valley terrain
///
/// Solved by fixed-point iteration of Albini's sinusoidal terrain profile.
#[must_use]
pub fn terrain_distance(flat_dist: f64, terrain: &Terrain) -> f64 {
    let horz = terrain.ridge_to_valley_dist;
    let elev = terrain.ridge_to_valley_elev;
    if elev <= SMIDGEN || horz <= SMIDGEN {
        return flat_dist;
    }
    let a1 = flat_dist / horz;
    let b1 = elev / (10_560.0 * horz);
    let phase = terrain.source as usize as f64 * std::f64::consts::FRAC_PI_2;
    let mut x = a1;
    for _ in 0..6 {
        x = a1 - b1 * ((std::f64::consts::PI * x - phase).cos() - phase.cos());
    }
    x * horz
}

fn finish(firebrand_ht: f64, cover_ht: f64, wind_20ft: f64, terrain: &Terrain) -> SpotDistance {
    let cover_ht = cover_height(cover_ht);
    let flat_dist = flat_distance(firebrand_ht, cover_ht, wind_20ft);
    SpotDistance {
        cover_ht,
        firebrand_ht,
        flat_dist,
        dist: terrain_distance(flat_dist, terrain),
    }
}

/// Spotting distance from a burning pile, firebrand height 12.2 × flame height
#[must_use]
pub fn burning_pile(
    flame_ht: f64,
    cover_ht: f64,
    wind_20ft: f64,
    terrain: &Terrain,
) -> SpotDistance {
    finish(12.2 * flame_ht.max(0.0), cover_ht, wind_20ft, terrain)
}

/// Spotting from a wind-driven surface fire.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSpot {
    /// Distance result
    pub spot: SpotDistance,
    /// Extra distance from firebrand drift (mi)
    pub drift: f64,
}

/// Spotting distance from a wind-driven surface fire
///
/// # Formula
/// ```text
/// I_B   = (L / 0.45)^(1/0.46)
/// z     = 1.055 √I_B
/// drift = 0.000278 × U₂₀ × z^0.643
/// ```
#[must_use]
pub fn surface_fire(
    flame_length: f64,
    cover_ht: f64,
    wind_20ft: f64,
    terrain: &Terrain,
) -> SurfaceSpot {
    let fli = fire_shape::fireline_intensity_from_flame_length(flame_length);
    let z = 1.055 * fli.sqrt();
    let drift = if z > SMIDGEN {
        0.000_278 * wind_20ft * z.powf(0.643)
    } else {
        0.0
    };
    let cover_ht = cover_height(cover_ht);
    let base = flat_distance(z, cover_ht, wind_20ft);
    let flat_dist = if base > 0.0 { base + drift } else { 0.0 };
    SurfaceSpot {
        spot: SpotDistance {
            cover_ht,
            firebrand_ht: z,
            flat_dist,
            dist: terrain_distance(flat_dist, terrain),
        },
        drift,
    }
}

/// Steady flame height, duration and flame ratio for torching trees
///
/// # Formula
/// ```text
/// h = a × dbh^b × N^0.4
/// t = c × dbh^d × N^-0.2
/// ```
#[must_use]
pub fn torching_flame(species: usize, dbh: f64, tree_ht: f64, trees: f64) -> TorchingFlame {
    let Some(&[a, b, c, d]) = TORCH_COEF.get(species) else {
        return TorchingFlame::default();
    };
    if dbh < SMIDGEN || trees < 1.0 {
        return TorchingFlame::default();
    }
    let height = a * dbh.powf(b) * trees.powf(0.4);
    let duration = c * dbh.powf(d) * trees.powf(-0.2);
    TorchingFlame {
        height,
        duration,
        ratio: if height > SMIDGEN { tree_ht / height } else { 0.0 },
    }
}

/// Lofted firebrand height (ft) above a torching tree group
#[must_use]
pub fn torching_firebrand_height(flame: &TorchingFlame, tree_ht: f64) -> f64 {
    if flame.height < SMIDGEN {
        return 0.0;
    }
    let j = if flame.ratio >= 1.0 {
        0
    } else if flame.ratio >= 0.5 {
        1
    } else if flame.ratio > 0.3 || flame.duration < 3.5 {
        2
    } else {
        3
    };
    LOFT_A[j] * flame.duration.powf(LOFT_B[j]) * flame.height + 0.5 * tree_ht
}

/// Spotting from torching trees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorchingSpot {
    /// Distance result
    pub spot: SpotDistance,
    /// Flame description
    pub flame: TorchingFlame,
}

/// Spotting distance from a group of torching trees
#[must_use]
pub fn torching_trees(
    species: usize,
    dbh: f64,
    tree_ht: f64,
    trees: f64,
    cover_ht: f64,
    wind_20ft: f64,
    terrain: &Terrain,
) -> TorchingSpot {
    let flame = torching_flame(species, dbh, tree_ht, trees);
    let z = torching_firebrand_height(&flame, tree_ht);
    TorchingSpot {
        spot: finish(z, cover_ht, wind_20ft, terrain),
        flame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat() -> Terrain {
        Terrain {
            source: SpotSource::RidgeTop,
            ridge_to_valley_dist: 0.0,
            ridge_to_valley_elev: 0.0,
        }
    }

    #[test]
    fn test_species_table_lengths() {
        assert_eq!(TORCHING_SPECIES.len(), TORCH_COEF.len());
    }

    #[test]
    fn test_no_spotting_below_cover() {
        let spot = burning_pile(2.0, 100.0, 20.0, &flat());
        assert_eq!(spot.flat_dist, 0.0);
        assert_eq!(spot.dist, 0.0);
        assert_relative_eq!(spot.firebrand_ht, 24.4);
    }

    #[test]
    fn test_burning_pile_spots_downwind() {
        let spot = burning_pile(20.0, 30.0, 20.0, &flat());
        assert!(spot.flat_dist > 0.0 && spot.flat_dist < 2.0);
        assert_eq!(spot.dist, spot.flat_dist);
    }

    #[test]
    fn test_torching_trees() {
        let spot = torching_trees(1, 20.0, 100.0, 5.0, 80.0, 15.0, &flat());
        assert!(spot.flame.height > 0.0);
        assert!(spot.spot.firebrand_ht > 50.0);
        assert!(spot.spot.flat_dist > 0.0);
        let bad = torching_trees(99, 20.0, 100.0, 5.0, 80.0, 15.0, &flat());
        assert_eq!(bad.spot.dist, 0.0);
    }

    #[test]
    fn test_terrain_changes_distance() {
        let ridge = Terrain {
            source: SpotSource::ValleyBottom,
            ridge_to_valley_dist: 1.0,
            ridge_to_valley_elev: 2000.0,
        };
        let flat_dist = 0.5;
        let d = terrain_distance(flat_dist, &ridge);
        assert!(d.is_finite());
        assert!((d - flat_dist).abs() > 1e-6);
        assert_eq!(terrain_distance(flat_dist, &flat()), flat_dist);
    }
}

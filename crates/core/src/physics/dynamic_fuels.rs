//! Dynamic fuel beds
//!
//! Fuel loads predicted from stand descriptors instead of taken from a
//! fuel model: palmetto-gallberry understory in the southeastern pine
//! flatwoods, and the western aspen community types.
//!
//! The aspen loads are condensed from the published community type tables
//! and interpolated linearly between uncured and fully cured herbaceous
//! fuel.
//!
//! # References
//! - Hough, W.A., Albini, F.A. (1978). "Predicting fire behavior in palmetto-gallberry fuel complexes."
//!   USDA Forest Service Research Paper SE-174.
//! - Brown, J.K., Simmerman, D.G. (1986). "Appraising fuels and flammability in western aspen:
//!   a prescribed fire guide." USDA Forest Service General Technical Report INT-205.

use super::rothermel::{Life, Particle};
use crate::core_types::units::TONS_PER_ACRE_TO_LB_PER_SQFT;

// ============================================================================
// PALMETTO-GALLBERRY
// ============================================================================

/// Palmetto-gallberry fuel bed (loads in lb/ft²).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PalmettoFuel {
    /// Fuel bed depth (ft)
    pub depth: f64,
    /// Dead fuel moisture of extinction
    pub mext: f64,
    /// Dead 0-1/4 in
    pub dead1: f64,
    /// Dead 1/4-1 in
    pub dead10: f64,
    /// Dead foliage
    pub dead_foliage: f64,
    /// Live 0-1/4 in
    pub live1: f64,
    /// Live 1/4-1 in
    pub live10: f64,
    /// Live foliage
    pub live_foliage: f64,
    /// Litter
    pub litter: f64,
}

impl PalmettoFuel {
    /// Loads from stand age (yr), palmetto cover (%), understory height (ft)
    /// and overstory basal area (ft²/ac)
    #[must_use]
    pub fn new(age: f64, cover: f64, height: f64, basal_area: f64) -> Self {
        let h2 = height * height;
        let age2 = age * age;
        let ln_age = if age > 0.0 { age.ln() } else { 0.0 };
        Self {
            depth: 2.0 * height / 3.0,
            mext: 0.40,
            dead1: (-0.001_21 + 0.003_79 * ln_age + 0.001_18 * h2).max(0.0),
            dead10: (-0.007_75 + 0.000_21 * cover + 0.000_07 * age2).max(0.0),
            dead_foliage: (0.002_21 * age.max(0.0).powf(0.512_63) * (0.024_82 * cover).exp())
                .max(0.0),
            live1: (0.005_46 + 0.000_92 * age + 0.002_12 * h2).max(0.0),
            live10: (-0.021_28 + 0.000_14 * age2 + 0.003_14 * h2).max(0.0),
            live_foliage: (-0.0036 + 0.002_53 * age + 0.000_49 * cover + 0.002_82 * h2).max(0.0),
            litter: ((0.036_32 + 0.000_533_6 * basal_area) * (1.0 - 0.25_f64.powf(age))).max(0.0),
        }
    }

    /// Particle set in worksheet particle order; moistures are left zero
    #[must_use]
    pub fn particles(&self) -> Vec<Particle> {
        let rows: [(Life, f64, f64, f64, f64); 8] = [
            (Life::Dead, self.dead1, 350.0, 30.0, 0.010),
            (Life::Dead, self.dead10, 140.0, 30.0, 0.010),
            (Life::Dead, self.dead_foliage, 2000.0, 30.0, 0.010),
            (Life::Wood, self.live1, 350.0, 46.0, 0.015),
            (Life::Wood, self.live10, 140.0, 46.0, 0.015),
            (Life::Herb, self.live_foliage, 2000.0, 46.0, 0.015),
            (Life::Litter, self.litter, 2000.0, 30.0, 0.010),
            (Life::Dead, 0.0, 1.0, 32.0, 0.010),
        ];
        rows.iter()
            .map(|&(life, load, savr, dens, seff)| Particle {
                life,
                load,
                savr,
                dens,
                heat: 8300.0,
                stot: 0.030,
                seff,
                mois: 0.0,
            })
            .collect()
    }
}

// ============================================================================
// ASPEN
// ============================================================================

/// Aspen fuel bed (loads in lb/ft², savr in ft²/ft³).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AspenFuel {
    /// Fuel bed depth (ft)
    pub depth: f64,
    /// Dead fuel moisture of extinction
    pub mext: f64,
    /// Dead 1-h load
    pub load_dead1: f64,
    /// Dead 10-h load
    pub load_dead10: f64,
    /// Live herbaceous load
    pub load_live_herb: f64,
    /// Live woody load
    pub load_live_woody: f64,
    /// Dead 1-h savr
    pub savr_dead1: f64,
    /// Dead 10-h savr
    pub savr_dead10: f64,
    /// Live herbaceous savr
    pub savr_live_herb: f64,
    /// Live woody savr
    pub savr_live_woody: f64,
}

/// Per community type: depth (ft), dead 1-h (t/ac, uncured and cured),
/// dead 10-h (t/ac), herb (t/ac, uncured and cured), woody (t/ac, uncured
/// and cured).
#[rustfmt::skip]
const ASPEN: [(f64, [f64; 2], f64, [f64; 2], [f64; 2]); 5] = [
    (0.65, [0.80, 1.00], 0.98, [0.24, 0.13], [0.98, 0.60]),
    (0.30, [0.55, 0.80], 0.74, [0.78, 0.30], [0.08, 0.05]),
    (0.18, [0.35, 0.52], 0.32, [0.39, 0.15], [0.04, 0.03]),
    (0.50, [0.73, 0.93], 1.36, [0.42, 0.18], [0.35, 0.22]),
    (0.18, [0.90, 1.09], 1.39, [0.25, 0.12], [1.30, 0.90]),
];

const ASPEN_SAVR_DEAD1: [f64; 2] = [1440.0, 1620.0];
const ASPEN_SAVR_WOODY: [f64; 2] = [2440.0, 2000.0];

#[inline]
fn lerp(ends: [f64; 2], t: f64) -> f64 {
    ends[0] + (ends[1] - ends[0]) * t
}

impl AspenFuel {
    /// Fuel bed for community type `aspen_type` at herbaceous `curing`
    /// (fraction); `None` for an unknown type
    #[must_use]
    pub fn new(aspen_type: usize, curing: f64) -> Option<Self> {
        let &(depth, dead1, dead10, herb, woody) = ASPEN.get(aspen_type)?;
        let t = curing.clamp(0.0, 1.0);
        Some(Self {
            depth,
            mext: 0.25,
            load_dead1: lerp(dead1, t) * TONS_PER_ACRE_TO_LB_PER_SQFT,
            load_dead10: dead10 * TONS_PER_ACRE_TO_LB_PER_SQFT,
            load_live_herb: lerp(herb, t) * TONS_PER_ACRE_TO_LB_PER_SQFT,
            load_live_woody: lerp(woody, t) * TONS_PER_ACRE_TO_LB_PER_SQFT,
            savr_dead1: lerp(ASPEN_SAVR_DEAD1, t),
            savr_dead10: 109.0,
            savr_live_herb: 2800.0,
            savr_live_woody: lerp(ASPEN_SAVR_WOODY, t),
        })
    }

    /// Particle set in worksheet particle order; moistures are left zero
    #[must_use]
    pub fn particles(&self) -> Vec<Particle> {
        let mut rows = vec![
            (Life::Dead, self.load_dead1, self.savr_dead1),
            (Life::Dead, self.load_dead10, self.savr_dead10),
            (Life::Herb, self.load_live_herb, self.savr_live_herb),
            (Life::Wood, self.load_live_woody, self.savr_live_woody),
        ];
        rows.resize(8, (Life::Dead, 0.0, 30.0));
        rows.into_iter()
            .map(|(life, load, savr)| Particle {
                life,
                load,
                savr,
                dens: 32.0,
                heat: 8000.0,
                stot: 0.055,
                seff: 0.010,
                mois: 0.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_palmetto_loads_non_negative() {
        let young = PalmettoFuel::new(1.0, 10.0, 1.0, 0.0);
        for load in [
            young.dead1,
            young.dead10,
            young.dead_foliage,
            young.live1,
            young.live10,
            young.live_foliage,
            young.litter,
        ] {
            assert!(load >= 0.0);
        }
        assert_relative_eq!(young.depth, 2.0 / 3.0);
        assert_eq!(young.particles().len(), 8);
    }

    #[test]
    fn test_palmetto_loads_grow_with_age() {
        let young = PalmettoFuel::new(2.0, 50.0, 3.0, 60.0);
        let old = PalmettoFuel::new(15.0, 50.0, 3.0, 60.0);
        assert!(old.live_foliage > young.live_foliage);
        assert!(old.litter > young.litter);
    }

    #[test]
    fn test_aspen_curing_interpolates() {
        let green = AspenFuel::new(1, 0.0).unwrap();
        let cured = AspenFuel::new(1, 1.0).unwrap();
        let half = AspenFuel::new(1, 0.5).unwrap();
        assert_relative_eq!(half.load_dead1, 0.5 * (green.load_dead1 + cured.load_dead1), epsilon = 1e-12);
        assert!(cured.load_live_herb < green.load_live_herb);
        assert!(AspenFuel::new(5, 0.5).is_none());
        assert_eq!(green.particles()[2].life, Life::Herb);
    }
}

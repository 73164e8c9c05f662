//! Tree Crown Scorch and Post-Fire Mortality
//!
//! Bark thickness, crown scorch geometry and the probability that a tree
//! dies after a surface fire. Conifer mortality uses the Ryan & Reinhardt
//! logistic model with FOFEM's species-specific variants, or Hood's crown
//! length/volume models where they exist. Aspen mortality uses Brown and
//! DeByle's char height model.
//!
//! Species coefficients are a condensed set: bark thickness multipliers are
//! grouped to the nearest FOFEM class and the Hood equations cover the
//! western conifers they were fitted for.
//!
//! # References
//! - Ryan, K.C., Reinhardt, E.D. (1988). "Predicting postfire mortality of seven western conifers."
//!   Canadian Journal of Forest Research, 18(10), 1291-1297.
//! - Reinhardt, E.D., Keane, R.E., Brown, J.K. (1997). "First Order Fire Effects Model: FOFEM 4.0."
//!   USDA Forest Service General Technical Report INT-GTR-344.
//! - Hood, S.M., McHugh, C.W., Ryan, K.C., Reinhardt, E., Smith, S.L. (2007). "Evaluation of a
//!   post-fire tree mortality model for western USA conifers." Int. J. Wildland Fire, 16(6), 679-689.
//! - Brown, J.K., DeByle, N.V. (1987). "Fire damage, mortality, and suckering in aspen."
//!   Canadian Journal of Forest Research, 17(9), 1100-1109.

use super::rothermel::SMIDGEN;

/// FOFEM mortality equation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equation {
    /// Ryan & Reinhardt bark thickness and crown volume scorched
    RyanReinhardt,
    /// Ryan & Reinhardt with a floor of 0.8
    Spruce,
    /// Longleaf pine, crown kill as a fraction
    Longleaf,
}

/// Hood crown scorch model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hood {
    WhiteFir,
    GrandFir,
    RedFir,
    Incensecedar,
    WesternLarch,
    WhitebarkPine,
    EngelmannSpruce,
    SugarPine,
    PonderosaPine,
    DouglasFir,
}

/// Per-species mortality parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Species {
    /// FOFEM species code
    pub code: &'static str,
    /// Bark thickness per inch of diameter (in/in)
    pub bark: f64,
    /// FOFEM equation
    pub equation: Equation,
    hood: Option<Hood>,
}

/// Species codes in worksheet item order.
pub const SPECIES_CODES: &[&str] = &[
    "ABIAMA", "ABIBAL", "ABICON", "ABIGRA", "ABILAS", "ABIMAG", "ABIPRO", "ACERUB", "ACESAC",
    "BETPAP", "CALDEC", "LARLAR", "LAROCC", "LIBDEC", "PICENG", "PICGLA", "PICMAR", "PICRUB",
    "PICSIT", "PINALB", "PINBAN", "PINCON", "PINECH", "PINELL", "PINJEF", "PINLAM", "PINMON",
    "PINPAL", "PINPON", "PINRES", "PINSTR", "PINTAE", "PSEMEN", "QUEALB", "QUERUB", "SEQSEM",
    "THUPLI", "TSUCAN", "TSUHET", "TSUMER",
];

const fn sp(code: &'static str, bark: f64, equation: Equation, hood: Option<Hood>) -> Species {
    Species {
        code,
        bark,
        equation,
        hood,
    }
}

use Equation::{Longleaf, RyanReinhardt as Rr, Spruce as Sp};

/// Species parameters, indexed like [`SPECIES_CODES`].
pub static SPECIES: &[Species] = &[
    sp("ABIAMA", 0.047, Rr, None),
    sp("ABIBAL", 0.034, Rr, None),
    sp("ABICON", 0.048, Rr, Some(Hood::WhiteFir)),
    sp("ABIGRA", 0.046, Rr, Some(Hood::GrandFir)),
    sp("ABILAS", 0.041, Rr, Some(Hood::GrandFir)),
    sp("ABIMAG", 0.041, Rr, Some(Hood::RedFir)),
    sp("ABIPRO", 0.047, Rr, None),
    sp("ACERUB", 0.028, Rr, None),
    sp("ACESAC", 0.034, Rr, None),
    sp("BETPAP", 0.027, Rr, None),
    sp("CALDEC", 0.060, Rr, Some(Hood::Incensecedar)),
    sp("LARLAR", 0.030, Rr, None),
    sp("LAROCC", 0.063, Rr, Some(Hood::WesternLarch)),
    sp("LIBDEC", 0.060, Rr, Some(Hood::Incensecedar)),
    sp("PICENG", 0.036, Sp, Some(Hood::EngelmannSpruce)),
    sp("PICGLA", 0.025, Sp, None),
    sp("PICMAR", 0.030, Sp, None),
    sp("PICRUB", 0.031, Sp, None),
    sp("PICSIT", 0.027, Sp, None),
    sp("PINALB", 0.030, Rr, Some(Hood::WhitebarkPine)),
    sp("PINBAN", 0.030, Rr, None),
    sp("PINCON", 0.028, Rr, Some(Hood::WhitebarkPine)),
    sp("PINECH", 0.045, Rr, None),
    sp("PINELL", 0.045, Rr, None),
    sp("PINJEF", 0.068, Rr, Some(Hood::PonderosaPine)),
    sp("PINLAM", 0.045, Rr, Some(Hood::SugarPine)),
    sp("PINMON", 0.035, Rr, None),
    sp("PINPAL", 0.047, Longleaf, None),
    sp("PINPON", 0.063, Rr, Some(Hood::PonderosaPine)),
    sp("PINRES", 0.035, Rr, None),
    sp("PINSTR", 0.040, Rr, None),
    sp("PINTAE", 0.052, Rr, None),
    sp("PSEMEN", 0.063, Rr, Some(Hood::DouglasFir)),
    sp("QUEALB", 0.042, Rr, None),
    sp("QUERUB", 0.036, Rr, None),
    sp("SEQSEM", 0.081, Rr, None),
    sp("THUPLI", 0.035, Rr, None),
    sp("TSUCAN", 0.040, Rr, None),
    sp("TSUHET", 0.040, Rr, None),
    sp("TSUMER", 0.040, Rr, None),
];

/// Species at worksheet item `index`
#[must_use]
pub fn species(index: usize) -> Option<&'static Species> {
    SPECIES.get(index)
}

// ============================================================================
// BARK AND CROWN
// ============================================================================

/// Bark thickness (in), species multiplier × dbh
#[must_use]
pub fn bark_thickness_behave(species: &Species, dbh: f64) -> f64 {
    species.bark * dbh.max(0.0)
}

/// FOFEM bark thickness (in); diameters below 1 in are taken as 1 in
#[must_use]
pub fn bark_thickness_fofem(species: &Species, dbh: f64) -> f64 {
    species.bark * dbh.max(1.0)
}

/// Crown base height (ft) from tree height and crown ratio
#[must_use]
pub fn crown_base_height(tree_ht: f64, crown_ratio: f64) -> f64 {
    tree_ht * (1.0 - crown_ratio)
}

/// Crown ratio from crown base height and tree height
#[must_use]
pub fn crown_ratio(crown_base_ht: f64, tree_ht: f64) -> f64 {
    if tree_ht < SMIDGEN {
        0.0
    } else {
        ((tree_ht - crown_base_ht) / tree_ht).clamp(0.0, 1.0)
    }
}

/// Scorched portion of a tree crown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CrownScorch {
    /// Scorched crown length (ft)
    pub length: f64,
    /// Scorched fraction of crown length
    pub length_fraction: f64,
    /// Scorched fraction of crown volume
    pub volume_fraction: f64,
}

/// Crown length and volume scorched by a scorch height
///
/// # Formula
/// ```text
/// CL  = H × CR
/// CLs = clamp(h_s - (H - CL), 0, CL)
/// CVS = (CLs/CL) × (2 - CLs/CL)
/// ```
#[must_use]
pub fn crown_scorch(scorch_ht: f64, crown_ratio: f64, tree_ht: f64) -> CrownScorch {
    let crown_length = tree_ht * crown_ratio;
    if crown_length < SMIDGEN {
        return CrownScorch::default();
    }
    let base = tree_ht - crown_length;
    let length = (scorch_ht - base).clamp(0.0, crown_length);
    let fraction = length / crown_length;
    CrownScorch {
        length,
        length_fraction: fraction,
        volume_fraction: fraction * (2.0 - fraction),
    }
}

// ============================================================================
// MORTALITY
// ============================================================================

#[inline]
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Ryan & Reinhardt mortality probability
///
/// # Formula
/// ```text
/// P = 1 / (1 + exp(-1.941 + 6.316 (1 - e^-BT) - 0.000535 CK²))     [CK in %]
/// ```
#[must_use]
pub fn ryan_reinhardt(bark_thickness: f64, crown_vol_scorched: f64) -> f64 {
    let ck = 100.0 * crown_vol_scorched;
    logistic(1.941 - 6.316 * (1.0 - (-bark_thickness).exp()) + 0.000_535 * ck * ck)
}

/// Spruce mortality, Ryan & Reinhardt with a floor of 0.8
#[must_use]
pub fn spruce(bark_thickness: f64, crown_vol_scorched: f64) -> f64 {
    ryan_reinhardt(bark_thickness, crown_vol_scorched).max(0.8)
}

/// Longleaf pine mortality, crown kill as a fraction
#[must_use]
pub fn longleaf(bark_thickness: f64, crown_vol_scorched: f64) -> f64 {
    let ck = crown_vol_scorched;
    let x = 0.169 + 5.136 * bark_thickness + 14.492 * bark_thickness * bark_thickness
        - 0.348 * ck * ck;
    1.0 / (1.0 + x.exp())
}

/// FOFEM mortality for a species' equation family
#[must_use]
pub fn fofem(species: &Species, bark_thickness: f64, crown_vol_scorched: f64) -> f64 {
    match species.equation {
        Equation::RyanReinhardt => ryan_reinhardt(bark_thickness, crown_vol_scorched),
        Equation::Spruce => spruce(bark_thickness, crown_vol_scorched),
        Equation::Longleaf => longleaf(bark_thickness, crown_vol_scorched),
    }
}

/// Mortality by spruce/non-spruce group only
#[must_use]
pub fn fofem_group(is_spruce: bool, bark_thickness: f64, crown_vol_scorched: f64) -> f64 {
    if is_spruce {
        spruce(bark_thickness, crown_vol_scorched)
    } else {
        ryan_reinhardt(bark_thickness, crown_vol_scorched)
    }
}

/// Hood crown scorch mortality, falling back to FOFEM for species without
/// a fitted model
///
/// Crown length and volume scorched enter as percents and diameter in cm.
#[must_use]
pub fn hood(
    species: &Species,
    bark_thickness: f64,
    crown_leng_scorched: f64,
    crown_vol_scorched: f64,
    dbh: f64,
) -> f64 {
    let Some(model) = species.hood else {
        return fofem(species, bark_thickness, crown_vol_scorched);
    };
    let cls = 100.0 * crown_leng_scorched;
    let cvs = 100.0 * crown_vol_scorched;
    let dbh_cm = 2.54 * dbh;
    let x = match model {
        Hood::WhiteFir => {
            -3.5083 + 0.0956 * cls - 0.001_84 * cls * cls + 0.000_017 * cls.powi(3)
        }
        Hood::GrandFir => {
            -1.6950 + 0.2071 * cvs - 0.0047 * cvs * cvs + 0.000_035 * cvs.powi(3)
        }
        Hood::RedFir => -2.3085 + 0.000_004_059 * cls.powi(3),
        Hood::Incensecedar => -4.2466 + 0.000_007_172 * cls.powi(3),
        Hood::WesternLarch => -1.6594 + 0.0327 * cvs - 0.0489 * dbh_cm,
        Hood::WhitebarkPine => {
            -0.3268 + 0.1387 * cvs - 0.0034 * cvs * cvs + 0.000_027 * cvs.powi(3)
                - 0.0358 * dbh_cm
        }
        Hood::EngelmannSpruce => 0.0845 + 0.0445 * cvs,
        Hood::SugarPine => -2.0588 + 0.000_814 * cls * cls,
        Hood::PonderosaPine => -2.7103 + 0.000_004_093 * cvs.powi(3),
        Hood::DouglasFir => {
            -2.0346 + 0.0906 * cvs - 0.0022 * cvs * cvs + 0.000_019 * cvs.powi(3)
        }
    };
    logistic(x)
}

/// Aspen mortality from flame length (Brown and DeByle)
///
/// # Formula
/// ```text
/// h_char = L / 1.8
/// low:   P = 1 / (1 + exp(-4.407 + 0.638 dbh - 2.134 h_char))
/// other: P = 1 / (1 + exp(-2.157 + 0.218 dbh - 3.600 h_char))
/// ```
#[must_use]
pub fn aspen(dbh: f64, flame_length: f64, low_severity: bool) -> f64 {
    let char_ht = flame_length / 1.8;
    let x = if low_severity {
        -4.407 + 0.638 * dbh - 2.134 * char_ht
    } else {
        -2.157 + 0.218 * dbh - 3.600 * char_ht
    };
    1.0 / (1.0 + x.exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tables_line_up() {
        assert_eq!(SPECIES.len(), SPECIES_CODES.len());
        for (s, code) in SPECIES.iter().zip(SPECIES_CODES) {
            assert_eq!(s.code, *code);
        }
    }

    #[test]
    fn test_crown_scorch() {
        // 100 ft tree, 40% crown: crown from 60 to 100 ft
        let none = crown_scorch(50.0, 0.4, 100.0);
        assert_eq!(none.volume_fraction, 0.0);
        let half = crown_scorch(80.0, 0.4, 100.0);
        assert_relative_eq!(half.length, 20.0);
        assert_relative_eq!(half.volume_fraction, 0.75);
        let all = crown_scorch(150.0, 0.4, 100.0);
        assert_relative_eq!(all.volume_fraction, 1.0);
    }

    #[test]
    fn test_mortality_increases_with_scorch() {
        let low = ryan_reinhardt(0.5, 0.1);
        let high = ryan_reinhardt(0.5, 0.9);
        assert!(high > low);
        assert!((0.0..=1.0).contains(&low));
        let picgla = species(15).unwrap();
        assert!(fofem(picgla, 2.0, 0.0) >= 0.8);
    }

    #[test]
    fn test_hood_falls_back_to_fofem() {
        let abiama = species(0).unwrap();
        assert_relative_eq!(
            hood(abiama, 0.8, 0.5, 0.6, 20.0),
            fofem(abiama, 0.8, 0.6)
        );
        let pinpon = species(28).unwrap();
        assert!(hood(pinpon, 0.8, 0.9, 0.95, 20.0) > hood(pinpon, 0.8, 0.1, 0.1, 20.0));
    }

    #[test]
    fn test_bark_thickness_clamp() {
        let s = species(32).unwrap();
        assert_eq!(bark_thickness_fofem(s, 0.5), s.bark);
        assert_relative_eq!(bark_thickness_behave(s, 0.5), 0.5 * s.bark);
    }

    #[test]
    fn test_aspen_mortality_with_flame() {
        assert!(aspen(6.0, 8.0, true) > aspen(6.0, 1.0, true));
        assert!(aspen(6.0, 4.0, false) > aspen(6.0, 4.0, true));
    }
}

//! Two-fuel-model compositing
//!
//! A blended fuel bed is evaluated as two complete single-model runs that are
//! merged field by field. Spread rates follow the selected
//! [`WeightingPolicy`]; every other field follows a fixed rule from
//! [`MERGE_TABLE`]. Near-pure coverage skips the table and copies the
//! dominant model outright.
//!
//! # References
//! - Finney, M.A. (2003). "Calculation of fire spread rates across random landscapes."
//!   International Journal of Wildland Fire, 12(2), 167-174.

use tracing::debug;

use crate::physics::{expected_spread_rate, CellFuel, ExpectedSpreadConfig};

/// Coverage above which the primary model is used alone.
pub const PURE_PRIMARY: f64 = 0.999;

/// Coverage below which the secondary model is used alone.
pub const PURE_SECONDARY: f64 = 0.001;

/// Head rates at or below this make the harmonic mean zero.
const HARMONIC_FLOOR: f64 = 1e-6;

/// How the two models' spread rates are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightingPolicy {
    /// Coverage-weighted arithmetic mean
    AreaWeighted,
    /// Coverage-weighted harmonic mean
    HarmonicMean,
    /// Expected rate through a random two-fuel mosaic
    TwoDimensional,
}

/// Outputs of one single-model surface fire run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceFireRun {
    /// Reaction intensity (Btu/ft²/min)
    pub reaction_int: f64,
    /// Spread rate at the head (ft/min)
    pub spread_at_head: f64,
    /// Spread rate along the vector (ft/min)
    pub spread_at_vector: f64,
    /// Direction of maximum spread from upslope (degrees)
    pub max_dir: f64,
    /// Wind adjustment factor
    pub waf: f64,
    /// Midflame wind speed (mi/h)
    pub midflame: f64,
    /// Effective wind at the head (mi/h)
    pub eff_wind_head: f64,
    /// Effective wind along the vector (mi/h)
    pub eff_wind_vector: f64,
    /// Wind speed reliability limit (mi/h)
    pub wind_limit: f64,
    /// Effective wind exceeded the limit
    pub wind_flag: bool,
    /// Length-to-width ratio
    pub length_to_width: f64,
    /// Heat per unit area (Btu/ft²)
    pub heat_per_unit_area: f64,
    /// Fireline intensity at the head (Btu/ft/s)
    pub line_int_head: f64,
    /// Fireline intensity along the vector (Btu/ft/s)
    pub line_int_vector: f64,
    /// Flame length at the head (ft)
    pub flame_leng_head: f64,
    /// Flame length along the vector (ft)
    pub flame_leng_vector: f64,
    /// Fuel bed depth (ft)
    pub depth: f64,
}

/// A merged field of [`SurfaceFireRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ReactionInt,
    SpreadAtHead,
    SpreadAtVector,
    MaxDir,
    Waf,
    Midflame,
    EffWindHead,
    EffWindVector,
    WindLimit,
    WindFlag,
    LengthToWidth,
    HeatPerUnitArea,
    LineIntHead,
    LineIntVector,
    FlameLengHead,
    FlameLengVector,
    Depth,
}

/// How one field is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Follows the weighting policy
    Policy,
    /// Larger of the two
    Max,
    /// Primary model's value
    Primary,
    /// Smaller of the two
    Min,
    /// Either flag set
    Or,
}

/// Merge rule of every field.
pub static MERGE_TABLE: &[(Field, MergeRule)] = &[
    (Field::SpreadAtHead, MergeRule::Policy),
    (Field::SpreadAtVector, MergeRule::Policy),
    (Field::ReactionInt, MergeRule::Max),
    (Field::HeatPerUnitArea, MergeRule::Max),
    (Field::LineIntHead, MergeRule::Max),
    (Field::LineIntVector, MergeRule::Max),
    (Field::FlameLengHead, MergeRule::Max),
    (Field::FlameLengVector, MergeRule::Max),
    (Field::MaxDir, MergeRule::Primary),
    (Field::Waf, MergeRule::Primary),
    (Field::Midflame, MergeRule::Primary),
    (Field::EffWindHead, MergeRule::Primary),
    (Field::EffWindVector, MergeRule::Primary),
    (Field::LengthToWidth, MergeRule::Primary),
    (Field::WindLimit, MergeRule::Min),
    (Field::WindFlag, MergeRule::Or),
    (Field::Depth, MergeRule::Max),
];

impl SurfaceFireRun {
    /// Value of a field, flags as 0 or 1
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::ReactionInt => self.reaction_int,
            Field::SpreadAtHead => self.spread_at_head,
            Field::SpreadAtVector => self.spread_at_vector,
            Field::MaxDir => self.max_dir,
            Field::Waf => self.waf,
            Field::Midflame => self.midflame,
            Field::EffWindHead => self.eff_wind_head,
            Field::EffWindVector => self.eff_wind_vector,
            Field::WindLimit => self.wind_limit,
            Field::WindFlag => f64::from(u8::from(self.wind_flag)),
            Field::LengthToWidth => self.length_to_width,
            Field::HeatPerUnitArea => self.heat_per_unit_area,
            Field::LineIntHead => self.line_int_head,
            Field::LineIntVector => self.line_int_vector,
            Field::FlameLengHead => self.flame_leng_head,
            Field::FlameLengVector => self.flame_leng_vector,
            Field::Depth => self.depth,
        }
    }

    /// Store a field, flags set by any nonzero value
    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::ReactionInt => &mut self.reaction_int,
            Field::SpreadAtHead => &mut self.spread_at_head,
            Field::SpreadAtVector => &mut self.spread_at_vector,
            Field::MaxDir => &mut self.max_dir,
            Field::Waf => &mut self.waf,
            Field::Midflame => &mut self.midflame,
            Field::EffWindHead => &mut self.eff_wind_head,
            Field::EffWindVector => &mut self.eff_wind_vector,
            Field::WindLimit => &mut self.wind_limit,
            Field::WindFlag => {
                self.wind_flag = value != 0.0;
                return;
            }
            Field::LengthToWidth => &mut self.length_to_width,
            Field::HeatPerUnitArea => &mut self.heat_per_unit_area,
            Field::LineIntHead => &mut self.line_int_head,
            Field::LineIntVector => &mut self.line_int_vector,
            Field::FlameLengHead => &mut self.flame_leng_head,
            Field::FlameLengVector => &mut self.flame_leng_vector,
            Field::Depth => &mut self.depth,
        };
        *slot = value;
    }
}

/// Coverage-weighted harmonic mean, zero when either head rate vanishes
fn harmonic_mean(
    primary: &SurfaceFireRun,
    secondary: &SurfaceFireRun,
    field: Field,
    coverage: f64,
) -> f64 {
    if primary.spread_at_head <= HARMONIC_FLOOR || secondary.spread_at_head <= HARMONIC_FLOOR {
        return 0.0;
    }
    let (p, s) = (primary.get(field), secondary.get(field));
    // A stalled operand pulls the mean to its limit of zero
    if p <= 0.0 || s <= 0.0 {
        return 0.0;
    }
    1.0 / (coverage / p + (1.0 - coverage) / s)
}

fn policy_rate(
    primary: &SurfaceFireRun,
    secondary: &SurfaceFireRun,
    field: Field,
    coverage: f64,
    policy: WeightingPolicy,
    sampler: &ExpectedSpreadConfig,
) -> f64 {
    match policy {
        WeightingPolicy::AreaWeighted => {
            coverage * primary.get(field) + (1.0 - coverage) * secondary.get(field)
        }
        WeightingPolicy::HarmonicMean => harmonic_mean(primary, secondary, field, coverage),
        WeightingPolicy::TwoDimensional => {
            let cell = |run: &SurfaceFireRun| CellFuel {
                head_rate: run.get(field),
                length_to_width: run.length_to_width,
            };
            expected_spread_rate(&cell(primary), &cell(secondary), coverage, sampler)
        }
    }
}

/// Merge two single-model runs
///
/// `coverage` is the fraction of the area carrying the primary model.
/// `sampler` is consulted only by [`WeightingPolicy::TwoDimensional`].
#[must_use]
pub fn composite(
    primary: &SurfaceFireRun,
    secondary: &SurfaceFireRun,
    coverage: f64,
    policy: WeightingPolicy,
    sampler: &ExpectedSpreadConfig,
) -> SurfaceFireRun {
    if coverage > PURE_PRIMARY {
        debug!(coverage, "primary fuel model covers the bed, no blending");
        return *primary;
    }
    if coverage < PURE_SECONDARY {
        debug!(coverage, "secondary fuel model covers the bed, no blending");
        return *secondary;
    }

    let mut merged = SurfaceFireRun::default();
    for &(field, rule) in MERGE_TABLE {
        let (p, s) = (primary.get(field), secondary.get(field));
        let value = match rule {
            MergeRule::Policy => policy_rate(primary, secondary, field, coverage, policy, sampler),
            MergeRule::Max => p.max(s),
            MergeRule::Primary => p,
            MergeRule::Min => p.min(s),
            MergeRule::Or => f64::from(u8::from(p != 0.0 || s != 0.0)),
        };
        merged.set(field, value);
    }
    debug!(
        ?policy,
        coverage,
        head = merged.spread_at_head,
        "blended two fuel models"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grass() -> SurfaceFireRun {
        SurfaceFireRun {
            reaction_int: 1200.0,
            spread_at_head: 60.0,
            spread_at_vector: 40.0,
            max_dir: 10.0,
            waf: 0.4,
            midflame: 5.0,
            eff_wind_head: 5.5,
            eff_wind_vector: 3.0,
            wind_limit: 12.0,
            wind_flag: false,
            length_to_width: 2.4,
            heat_per_unit_area: 300.0,
            line_int_head: 300.0,
            line_int_vector: 200.0,
            flame_leng_head: 6.0,
            flame_leng_vector: 5.0,
            depth: 1.0,
        }
    }

    fn timber() -> SurfaceFireRun {
        SurfaceFireRun {
            reaction_int: 2500.0,
            spread_at_head: 5.0,
            spread_at_vector: 4.0,
            max_dir: 30.0,
            waf: 0.3,
            midflame: 4.0,
            eff_wind_head: 4.2,
            eff_wind_vector: 2.0,
            wind_limit: 25.0,
            wind_flag: true,
            length_to_width: 1.8,
            heat_per_unit_area: 900.0,
            line_int_head: 75.0,
            line_int_vector: 60.0,
            flame_leng_head: 3.3,
            flame_leng_vector: 3.0,
            depth: 0.2,
        }
    }

    #[test]
    fn test_table_covers_every_field_once() {
        let fields: Vec<Field> = MERGE_TABLE.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields.len(), 17);
        for (i, f) in fields.iter().enumerate() {
            assert!(!fields[i + 1..].contains(f), "{f:?} listed twice");
        }
    }

    #[test]
    fn test_merge_rules() {
        let sampler = ExpectedSpreadConfig::default();
        let m = composite(&grass(), &timber(), 0.6, WeightingPolicy::AreaWeighted, &sampler);
        assert_relative_eq!(m.spread_at_head, 0.6 * 60.0 + 0.4 * 5.0);
        assert_relative_eq!(m.spread_at_vector, 0.6 * 40.0 + 0.4 * 4.0);
        assert_eq!(m.reaction_int, 2500.0);
        assert_eq!(m.heat_per_unit_area, 900.0);
        assert_eq!(m.line_int_head, 300.0);
        assert_eq!(m.flame_leng_vector, 5.0);
        assert_eq!(m.max_dir, 10.0);
        assert_eq!(m.waf, 0.4);
        assert_eq!(m.eff_wind_vector, 3.0);
        assert_eq!(m.length_to_width, 2.4);
        assert_eq!(m.wind_limit, 12.0);
        assert!(m.wind_flag);
        assert_eq!(m.depth, 1.0);
    }

    #[test]
    fn test_harmonic_mean() {
        let sampler = ExpectedSpreadConfig::default();
        let m = composite(&grass(), &timber(), 0.5, WeightingPolicy::HarmonicMean, &sampler);
        assert_relative_eq!(m.spread_at_head, 1.0 / (0.5 / 60.0 + 0.5 / 5.0));

        let stalled = SurfaceFireRun {
            spread_at_head: 0.0,
            ..timber()
        };
        let m = composite(&grass(), &stalled, 0.5, WeightingPolicy::HarmonicMean, &sampler);
        assert_eq!(m.spread_at_head, 0.0);
        assert_eq!(m.spread_at_vector, 0.0);
    }

    #[test]
    fn test_harmonic_mean_keeps_slow_vector_rate() {
        let sampler = ExpectedSpreadConfig::default();
        let creeping = SurfaceFireRun {
            spread_at_vector: 1e-8,
            ..timber()
        };
        let m = composite(&grass(), &creeping, 0.5, WeightingPolicy::HarmonicMean, &sampler);
        assert!(m.spread_at_vector > 0.0);
        assert_relative_eq!(m.spread_at_vector, 2e-8, max_relative = 1e-6);

        let stopped = SurfaceFireRun {
            spread_at_vector: 0.0,
            ..timber()
        };
        let m = composite(&grass(), &stopped, 0.5, WeightingPolicy::HarmonicMean, &sampler);
        assert_eq!(m.spread_at_vector, 0.0);
        assert!(m.spread_at_head > 0.0);
    }

    #[test]
    fn test_identical_models_blend_to_themselves() {
        let sampler = ExpectedSpreadConfig::default();
        for policy in [
            WeightingPolicy::AreaWeighted,
            WeightingPolicy::HarmonicMean,
            WeightingPolicy::TwoDimensional,
        ] {
            let m = composite(&grass(), &grass(), 0.5, policy, &sampler);
            assert_relative_eq!(m.spread_at_head, 60.0, epsilon = 1e-9);
            assert_relative_eq!(m.spread_at_vector, 40.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_near_pure_coverage_copies_dominant_model() {
        let sampler = ExpectedSpreadConfig::default();
        let m = composite(&grass(), &timber(), 0.9995, WeightingPolicy::AreaWeighted, &sampler);
        assert_eq!(m, grass());
        let m = composite(&grass(), &timber(), 0.0005, WeightingPolicy::HarmonicMean, &sampler);
        assert_eq!(m, timber());
    }
}

//! Crown Fire Initiation and Spread
//!
//! Active crown fire spread follows Rothermel's (1991) correlation with the
//! surface spread rate of fuel model 10 under 40% of the 20-ft wind. Crown
//! fire initiation and the critical crown spread rate follow Van Wagner
//! (1977). Fire power ratios follow Rothermel's plume-dominated versus
//! wind-driven classification.
//!
//! # References
//! - Rothermel, R.C. (1991). "Predicting behavior and size of crown fires in the Northern Rocky Mountains."
//!   USDA Forest Service Research Paper INT-438.
//! - Van Wagner, C.E. (1977). "Conditions for the start and spread of crown fire."
//!   Canadian Journal of Forest Research, 7(1), 23-34.
//! - Scott, J.H., Reinhardt, E.D. (2001). "Assessing crown fire potential by linking models
//!   of surface and crown fire behavior." USDA Forest Service Research Paper RMRS-RP-29.

use super::fire_shape;
use super::rothermel::{self, FuelBed, Life, Particle, SpreadInputs, FPM_PER_MPH, SMIDGEN};
use crate::core_types::units::SQUARE_FEET_PER_ACRE;
use crate::fuel::{standard_model, FuelModel};

/// Multiplier from fuel model 10 surface spread to active crown spread.
pub const CROWN_SPREAD_FACTOR: f64 = 3.34;

/// Canopy fuel heat of combustion (Btu/lb).
pub const CANOPY_HEAT: f64 = 8000.0;

/// kW/m per Btu/ft/s.
const KW_M_PER_BTU_FT_S: f64 = 3.464_14;

/// kg/m³ per lb/ft³.
const KG_M3_PER_LB_FT3: f64 = 16.0185;

/// Fuel moistures driving the crown spread rate (fractions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrownMoisture {
    /// 1-h dead
    pub dead1: f64,
    /// 10-h dead
    pub dead10: f64,
    /// 100-h dead
    pub dead100: f64,
    /// Live woody, also used for live herbaceous
    pub live_wood: f64,
}

/// Crown fire behavior class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireType {
    /// Surface fire only
    Surface,
    /// Passive crown fire
    Torching,
    /// Active crown fire possible but not initiated
    ConditionalCrown,
    /// Active crown fire
    Crowning,
}

impl FireType {
    /// Classify from the transition and active ratios
    #[must_use]
    pub fn classify(trans_ratio: f64, active_ratio: f64) -> Self {
        match (trans_ratio >= 1.0, active_ratio >= 1.0) {
            (false, false) => FireType::Surface,
            (true, false) => FireType::Torching,
            (false, true) => FireType::ConditionalCrown,
            (true, true) => FireType::Crowning,
        }
    }

    /// Worksheet item index
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

fn model_bed(model: &FuelModel, mois: &CrownMoisture) -> FuelBed {
    let particle = |life, load, savr, heat, mois| Particle {
        life,
        load,
        savr,
        dens: 32.0,
        heat,
        stot: 0.0555,
        seff: 0.010,
        mois,
    };
    FuelBed {
        depth: model.depth,
        mext_dead: model.mext,
        particles: vec![
            particle(Life::Dead, model.load1, model.savr1, model.heat_dead, mois.dead1),
            particle(Life::Dead, model.load10, 109.0, model.heat_dead, mois.dead10),
            particle(Life::Dead, model.load100, 30.0, model.heat_dead, mois.dead100),
            particle(Life::Herb, model.load_herb, model.savr_herb, model.heat_live, mois.live_wood),
            particle(Life::Wood, model.load_wood, model.savr_wood, model.heat_live, mois.live_wood),
        ],
    }
}

/// Active crown fire spread rate (ft/min)
///
/// # Formula
/// ```text
/// R_active = 3.34 × R_FM10(U_mid = 0.4 × U₂₀, slope = 0)
/// ```
#[must_use]
pub fn spread_rate(mois: &CrownMoisture, wind_20ft: f64) -> f64 {
    let Some(model) = standard_model(10) else {
        return 0.0;
    };
    let fuel = model_bed(&model, mois);
    let bed = fuel.intermediates();
    let sink = fuel.heat_sink(bed.bulk_density);
    let ir = fuel.reaction_intensity(&bed, &sink);
    let xi = rothermel::propagating_flux(bed.sigma, bed.packing_ratio);
    let ros0 = rothermel::no_wind_rate(ir.total, xi, sink.heat_sink);
    let spread = rothermel::forward_spread(&SpreadInputs {
        no_wind_rate: ros0,
        reaction_int: ir.total,
        slope: 0.0,
        midflame: 0.4 * wind_20ft,
        wind_dir_from_upslope: 0.0,
        sigma: bed.sigma,
        packing_ratio: bed.packing_ratio,
        beta_ratio: bed.beta_ratio,
        apply_wind_limit: true,
    });
    CROWN_SPREAD_FACTOR * spread.spread_rate
}

/// Critical surface fireline intensity for crown initiation (Btu/ft/s)
///
/// # Formula
/// ```text
/// I₀ = (0.010 × CBH × (460 + 25.9 FMC))^1.5     [kW/m, CBH in m, FMC in %]
/// ```
#[must_use]
pub fn critical_surface_intensity(foliar_mois_pct: f64, crown_base_ht_ft: f64) -> f64 {
    let cbh_m = (crown_base_ht_ft * 0.3048).max(0.0);
    let kw_m = (0.010 * cbh_m * (460.0 + 25.9 * foliar_mois_pct)).powf(1.5);
    kw_m / KW_M_PER_BTU_FT_S
}

/// Flame length (ft) at the critical surface intensity
#[must_use]
pub fn critical_flame_length(critical_intensity: f64) -> f64 {
    fire_shape::flame_length(critical_intensity)
}

/// Critical crown spread rate for active crowning (ft/min), 3.0 / CBD
#[must_use]
pub fn critical_crown_spread_rate(canopy_bulk_dens: f64) -> f64 {
    let cbd = canopy_bulk_dens * KG_M3_PER_LB_FT3;
    if cbd < SMIDGEN {
        0.0
    } else {
        3.0 / cbd / 0.3048
    }
}

/// `numerator / denominator`, zero when the denominator vanishes
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator < SMIDGEN {
        0.0
    } else {
        numerator / denominator
    }
}

/// Crown fire length-to-width ratio, 1 + 0.125 U₂₀
#[must_use]
pub fn length_to_width(wind_20ft: f64) -> f64 {
    1.0 + 0.125 * wind_20ft
}

/// Canopy fuel load (lb/ft²) between crown base and stand height
#[must_use]
pub fn fuel_load(canopy_bulk_dens: f64, cover_ht: f64, crown_base_ht: f64) -> f64 {
    (canopy_bulk_dens * (cover_ht - crown_base_ht)).max(0.0)
}

/// Canopy heat per unit area (Btu/ft²)
#[must_use]
pub fn canopy_heat_per_unit_area(fuel_load: f64) -> f64 {
    fuel_load * CANOPY_HEAT
}

/// Crown fireline intensity (Btu/ft/s) from total heat per unit area
#[must_use]
pub fn fireline_intensity(heat_per_unit_area: f64, spread_rate: f64) -> f64 {
    heat_per_unit_area * spread_rate / 60.0
}

/// Crown flame length (ft), Thomas's relation 0.2 I^(2/3)
#[must_use]
pub fn flame_length(fireline_intensity: f64) -> f64 {
    if fireline_intensity < SMIDGEN {
        0.0
    } else {
        0.2 * fireline_intensity.powf(2.0 / 3.0)
    }
}

/// Power of the fire (ft·lb/s/ft²), P_f = I / 129
#[must_use]
pub fn power_of_fire(fireline_intensity: f64) -> f64 {
    fireline_intensity / 129.0
}

/// Power of the wind (ft·lb/s/ft²)
///
/// # Formula
/// ```text
/// P_w = 0.00106 × ((U₂₀ × 88 - R) / 60)³
/// ```
#[must_use]
pub fn power_of_wind(spread_rate: f64, wind_20ft: f64) -> f64 {
    let v = (wind_20ft * FPM_PER_MPH - spread_rate) / 60.0;
    if v <= 0.0 {
        0.0
    } else {
        0.00106 * v * v * v
    }
}

/// Crown fire area (acres) from spread distance and length-to-width ratio
#[must_use]
pub fn area(spread_dist: f64, length_to_width: f64) -> f64 {
    let width = fire_shape::width(spread_dist, length_to_width);
    fire_shape::area(spread_dist, width) / SQUARE_FEET_PER_ACRE
}

/// Crown fire perimeter (ft)
#[must_use]
pub fn perimeter(spread_dist: f64, length_to_width: f64) -> f64 {
    fire_shape::perimeter(spread_dist, fire_shape::width(spread_dist, length_to_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dry() -> CrownMoisture {
        CrownMoisture {
            dead1: 0.04,
            dead10: 0.05,
            dead100: 0.06,
            live_wood: 0.90,
        }
    }

    #[test]
    fn test_spread_rate_grows_with_wind() {
        let calm = spread_rate(&dry(), 0.0);
        let windy = spread_rate(&dry(), 25.0);
        assert!(calm > 0.0);
        assert!(windy > 5.0 * calm, "calm {calm} windy {windy}");
    }

    #[test]
    fn test_critical_intensity() {
        // CBH 2 m, FMC 100%: (0.010 × 2 × 3050)^1.5 = 61^1.5 kW/m
        let i0 = critical_surface_intensity(100.0, 2.0 / 0.3048);
        assert_relative_eq!(i0 * KW_M_PER_BTU_FT_S, 61.0_f64.powf(1.5), epsilon = 1e-6);
        assert_eq!(critical_surface_intensity(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_critical_crown_rate() {
        // 0.1 kg/m³ needs 30 m/min
        let cbd = 0.1 / KG_M3_PER_LB_FT3;
        assert_relative_eq!(critical_crown_spread_rate(cbd), 30.0 / 0.3048, epsilon = 1e-9);
        assert_eq!(critical_crown_spread_rate(0.0), 0.0);
    }

    #[test]
    fn test_fire_type_classification() {
        assert_eq!(FireType::classify(0.5, 0.5), FireType::Surface);
        assert_eq!(FireType::classify(1.5, 0.5), FireType::Torching);
        assert_eq!(FireType::classify(0.5, 1.0), FireType::ConditionalCrown);
        assert_eq!(FireType::classify(1.0, 2.0), FireType::Crowning);
    }

    #[test]
    fn test_power_of_wind_never_negative() {
        assert_eq!(power_of_wind(2000.0, 10.0), 0.0);
        assert!(power_of_wind(100.0, 20.0) > 0.0);
    }
}

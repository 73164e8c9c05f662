//! Rothermel Surface Fire Spread Model (1972)
//!
//! Fuel bed intermediates, heat sink, reaction intensity and forward spread
//! rate for a heterogeneous fuel bed of up to eight particle classes. All
//! quantities are in the model's native units: feet, pounds, Btu, minutes
//! and miles per hour for wind speeds.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.
//! - Andrews, P.L. (2018). "The Rothermel surface fire spread model and associated developments."
//!   USDA Forest Service General Technical Report RMRS-GTR-371.

pub use crate::core_types::units::SMIDGEN;

/// Feet per minute in one mile per hour.
pub const FPM_PER_MPH: f64 = 88.0;

/// Particle life category, in worksheet item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Life {
    /// Dead time-lag fuel
    Dead,
    /// Live herbaceous fuel
    Herb,
    /// Live woody fuel
    Wood,
    /// Dead litter
    Litter,
}

impl Life {
    /// Life category for a worksheet item index; unknown indices are dead
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Life::Herb,
            2 => Life::Wood,
            3 => Life::Litter,
            _ => Life::Dead,
        }
    }

    /// Worksheet item index
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Dead and litter particles burn as dead fuel
    #[inline]
    #[must_use]
    pub fn is_dead(self) -> bool {
        matches!(self, Life::Dead | Life::Litter)
    }
}

/// One fuel particle class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Life category
    pub life: Life,
    /// Oven-dry load (lb/ft²)
    pub load: f64,
    /// Surface area to volume ratio (ft²/ft³)
    pub savr: f64,
    /// Oven-dry particle density (lb/ft³)
    pub dens: f64,
    /// Low heat of combustion (Btu/lb)
    pub heat: f64,
    /// Total mineral content (fraction)
    pub stot: f64,
    /// Effective mineral content (fraction)
    pub seff: f64,
    /// Moisture content (fraction)
    pub mois: f64,
}

impl Particle {
    /// Surface area per unit ground area, zero for empty particles
    #[inline]
    fn area(&self) -> f64 {
        if self.load > SMIDGEN && self.savr > SMIDGEN && self.dens > SMIDGEN {
            self.load * self.savr / self.dens
        } else {
            0.0
        }
    }

    /// Size class used for net load weighting (Albini 1976)
    fn size_class(&self) -> usize {
        match self.savr {
            s if s >= 1200.0 => 0,
            s if s >= 192.0 => 1,
            s if s >= 96.0 => 2,
            s if s >= 48.0 => 3,
            s if s >= 16.0 => 4,
            _ => 5,
        }
    }

    /// Effective heating number
    #[inline]
    fn effective_heating(&self) -> f64 {
        if self.savr > SMIDGEN {
            (-138.0 / self.savr).exp()
        } else {
            0.0
        }
    }
}

/// Fuel bed described by its particles.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelBed {
    /// Fuel bed depth (ft)
    pub depth: f64,
    /// Dead fuel moisture of extinction (fraction)
    pub mext_dead: f64,
    /// Particle classes
    pub particles: Vec<Particle>,
}

/// Packing and surface-area results of a fuel bed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BedIntermediates {
    /// Characteristic surface area to volume ratio (ft²/ft³)
    pub sigma: f64,
    /// Bulk density (lb/ft³)
    pub bulk_density: f64,
    /// Packing ratio
    pub packing_ratio: f64,
    /// Packing ratio over optimum packing ratio
    pub beta_ratio: f64,
    /// Dead load (lb/ft²)
    pub dead_load: f64,
    /// Live load (lb/ft²)
    pub live_load: f64,
}

impl BedIntermediates {
    /// Dead fraction of the total load, zero for an empty bed
    #[must_use]
    pub fn dead_fraction(&self) -> f64 {
        let total = self.dead_load + self.live_load;
        if total < SMIDGEN {
            0.0
        } else {
            self.dead_load / total
        }
    }
}

/// Heat sink and characteristic moistures of a fuel bed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatSink {
    /// Heat required to ignite a unit volume of the bed (Btu/ft³)
    pub heat_sink: f64,
    /// Characteristic dead moisture (fraction)
    pub mois_dead: f64,
    /// Characteristic live moisture (fraction)
    pub mois_live: f64,
    /// Live fuel moisture of extinction (fraction)
    pub mext_live: f64,
}

/// Reaction intensity by life category (Btu/ft²/min).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReactionIntensity {
    /// Dead plus live
    pub total: f64,
    /// Dead fuel component
    pub dead: f64,
    /// Live fuel component
    pub live: f64,
}

// Per-life area weights: [dead, live]
struct LifeWeights {
    particle: Vec<f64>,
    life: [f64; 2],
    sigma: [f64; 2],
}

#[inline]
fn life_slot(life: Life) -> usize {
    usize::from(!life.is_dead())
}

impl FuelBed {
    fn weights(&self) -> LifeWeights {
        let mut area = [0.0; 2];
        for p in &self.particles {
            area[life_slot(p.life)] += p.area();
        }
        let total = area[0] + area[1];
        let particle: Vec<f64> = self
            .particles
            .iter()
            .map(|p| {
                let a = area[life_slot(p.life)];
                if a > SMIDGEN {
                    p.area() / a
                } else {
                    0.0
                }
            })
            .collect();
        let mut sigma = [0.0; 2];
        for (p, f) in self.particles.iter().zip(&particle) {
            sigma[life_slot(p.life)] += f * p.savr;
        }
        let life = if total > SMIDGEN {
            [area[0] / total, area[1] / total]
        } else {
            [0.0; 2]
        };
        LifeWeights {
            particle,
            life,
            sigma,
        }
    }

    /// Characteristic surface area to volume ratio, packing and bulk density
    ///
    /// # Formula
    /// ```text
    /// σ     = Σ_life f_life × Σ_i f_i × σ_i
    /// β     = Σ_i (w_i / ρ_p,i) / δ
    /// β_op  = 3.348 × σ^-0.8189
    /// ```
    #[must_use]
    pub fn intermediates(&self) -> BedIntermediates {
        let mut out = BedIntermediates::default();
        for p in &self.particles {
            if p.life.is_dead() {
                out.dead_load += p.load;
            } else {
                out.live_load += p.load;
            }
        }
        if self.depth < SMIDGEN {
            return out;
        }
        let w = self.weights();
        out.sigma = w.life[0] * w.sigma[0] + w.life[1] * w.sigma[1];
        out.bulk_density = (out.dead_load + out.live_load) / self.depth;
        out.packing_ratio = self
            .particles
            .iter()
            .filter(|p| p.dens > SMIDGEN)
            .map(|p| p.load / p.dens)
            .sum::<f64>()
            / self.depth;
        if out.sigma > SMIDGEN {
            let beta_opt = 3.348 * out.sigma.powf(-0.8189);
            out.beta_ratio = out.packing_ratio / beta_opt;
        }
        out
    }

    /// Heat sink and the moistures that damp the reaction
    ///
    /// # Formula
    /// ```text
    /// ρ_b ε Q_ig = ρ_b × Σ_life f_life × Σ_i f_i × exp(-138/σ_i) × (250 + 1116 M_i)
    /// M_x,live   = 2.9 × W × (1 - M_f,dead / M_x,dead) - 0.226
    /// ```
    #[must_use]
    pub fn heat_sink(&self, bulk_density: f64) -> HeatSink {
        let w = self.weights();
        let mut sink = [0.0; 2];
        let mut mois = [0.0; 2];
        let mut fine_dead = 0.0;
        let mut fine_live = 0.0;
        let mut fine_dead_water = 0.0;
        for (p, f) in self.particles.iter().zip(&w.particle) {
            let slot = life_slot(p.life);
            sink[slot] += f * p.effective_heating() * (250.0 + 1116.0 * p.mois);
            mois[slot] += f * p.mois;
            if p.savr > SMIDGEN {
                if slot == 0 {
                    let fine = p.load * (-138.0 / p.savr).exp();
                    fine_dead += fine;
                    fine_dead_water += fine * p.mois;
                } else {
                    fine_live += p.load * (-500.0 / p.savr).exp();
                }
            }
        }
        let mut mext_live = self.mext_dead;
        if fine_live > SMIDGEN && self.mext_dead > SMIDGEN {
            let fine_dead_mois = if fine_dead > SMIDGEN {
                fine_dead_water / fine_dead
            } else {
                0.0
            };
            let ratio = fine_dead / fine_live;
            mext_live = (2.9 * ratio * (1.0 - fine_dead_mois / self.mext_dead) - 0.226)
                .max(self.mext_dead);
        }
        HeatSink {
            heat_sink: bulk_density * (w.life[0] * sink[0] + w.life[1] * sink[1]),
            mois_dead: mois[0],
            mois_live: mois[1],
            mext_live,
        }
    }

    /// Reaction intensity of the flaming front
    ///
    /// # Formula
    /// ```text
    /// I_R = Γ' × Σ_life w_n × h × η_M × η_s
    /// Γ'  = Γ'_max × (β/β_op)^A × exp(A × (1 - β/β_op))
    /// ```
    #[must_use]
    pub fn reaction_intensity(
        &self,
        bed: &BedIntermediates,
        sink: &HeatSink,
    ) -> ReactionIntensity {
        if bed.sigma < SMIDGEN || bed.beta_ratio < SMIDGEN {
            return ReactionIntensity::default();
        }
        let w = self.weights();

        // Size-class weights within each life category
        let mut class_weight = [[0.0; 6]; 2];
        for (p, f) in self.particles.iter().zip(&w.particle) {
            class_weight[life_slot(p.life)][p.size_class()] += f;
        }

        let mut net_load = [0.0; 2];
        let mut heat = [0.0; 2];
        let mut seff = [0.0; 2];
        for (p, f) in self.particles.iter().zip(&w.particle) {
            let slot = life_slot(p.life);
            net_load[slot] += class_weight[slot][p.size_class()] * p.load * (1.0 - p.stot);
            heat[slot] += f * p.heat;
            seff[slot] += f * p.seff;
        }

        let sigma15 = bed.sigma.powf(1.5);
        let gamma_max = sigma15 / (495.0 + 0.0594 * sigma15);
        let a = 133.0 * bed.sigma.powf(-0.7913);
        let gamma = gamma_max * bed.beta_ratio.powf(a) * (a * (1.0 - bed.beta_ratio)).exp();

        let mois = [sink.mois_dead, sink.mois_live];
        let mext = [self.mext_dead, sink.mext_live];
        let mut ir = [0.0; 2];
        for slot in 0..2 {
            let eta_s = mineral_damping(seff[slot]);
            let eta_m = moisture_damping(mois[slot], mext[slot]);
            ir[slot] = gamma * net_load[slot] * heat[slot] * eta_m * eta_s;
        }
        ReactionIntensity {
            total: ir[0] + ir[1],
            dead: ir[0],
            live: ir[1],
        }
    }
}

/// Moisture damping coefficient
///
/// # Formula
/// ```text
/// η_M = 1 - 2.59 r + 5.11 r² - 3.52 r³,   r = M_f / M_x
/// ```
#[must_use]
pub fn moisture_damping(mois: f64, mext: f64) -> f64 {
    if mext < SMIDGEN {
        return 0.0;
    }
    let r = mois / mext;
    if r >= 1.0 {
        return 0.0;
    }
    (1.0 - 2.59 * r + 5.11 * r * r - 3.52 * r * r * r).clamp(0.0, 1.0)
}

/// Mineral damping coefficient, η_s = 0.174 × S_e^-0.19 capped at 1
#[must_use]
pub fn mineral_damping(seff: f64) -> f64 {
    if seff < SMIDGEN {
        1.0
    } else {
        (0.174 * seff.powf(-0.19)).min(1.0)
    }
}

/// Propagating flux ratio
///
/// # Formula
/// ```text
/// ξ = exp((0.792 + 0.681 σ^0.5) × (β + 0.1)) / (192 + 0.2595 σ)
/// ```
#[must_use]
pub fn propagating_flux(sigma: f64, packing_ratio: f64) -> f64 {
    if sigma < SMIDGEN {
        return 0.0;
    }
    ((0.792 + 0.681 * sigma.sqrt()) * (packing_ratio + 0.1)).exp() / (192.0 + 0.2595 * sigma)
}

/// Flame residence time (min), τ = 384 / σ
#[must_use]
pub fn residence_time(sigma: f64) -> f64 {
    if sigma < SMIDGEN {
        0.0
    } else {
        384.0 / sigma
    }
}

/// No-wind, no-slope spread rate (ft/min), R₀ = I_R ξ / (ρ_b ε Q_ig)
#[must_use]
pub fn no_wind_rate(reaction_int: f64, propagating_flux: f64, heat_sink: f64) -> f64 {
    if heat_sink < SMIDGEN {
        0.0
    } else {
        reaction_int * propagating_flux / heat_sink
    }
}

/// Herbaceous fraction transferred to dead fuel for a live herb moisture
///
/// Fully cured at or below 30%, fully green at or above 120%.
#[must_use]
pub fn cured_herb_fraction(herb_mois: f64) -> f64 {
    (1.333 - 1.11 * herb_mois).clamp(0.0, 1.0)
}

// ============================================================================
// WIND AND SLOPE
// ============================================================================

/// Wind factor coefficients of a fuel bed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindCoefficients {
    /// C
    pub c: f64,
    /// B
    pub b: f64,
    /// E
    pub e: f64,
}

impl WindCoefficients {
    /// Coefficients for a characteristic surface area to volume ratio
    ///
    /// # Formula
    /// ```text
    /// C = 7.47 exp(-0.133 σ^0.55)
    /// B = 0.02526 σ^0.54
    /// E = 0.715 exp(-0.000359 σ)
    /// ```
    #[must_use]
    pub fn new(sigma: f64) -> Self {
        Self {
            c: 7.47 * (-0.133 * sigma.powf(0.55)).exp(),
            b: 0.02526 * sigma.powf(0.54),
            e: 0.715 * (-0.000359 * sigma).exp(),
        }
    }

    /// Wind factor φ_w for a midflame wind (ft/min)
    #[must_use]
    pub fn wind_factor(&self, wind_fpm: f64, beta_ratio: f64) -> f64 {
        if wind_fpm < SMIDGEN || beta_ratio < SMIDGEN {
            0.0
        } else {
            self.c * wind_fpm.powf(self.b) * beta_ratio.powf(-self.e)
        }
    }

    /// Wind speed (ft/min) that alone would produce wind factor `phi`
    #[must_use]
    pub fn effective_wind(&self, phi: f64, beta_ratio: f64) -> f64 {
        if phi < SMIDGEN || self.c < SMIDGEN || self.b < SMIDGEN {
            0.0
        } else {
            (phi * beta_ratio.powf(self.e) / self.c).powf(1.0 / self.b)
        }
    }
}

/// Slope factor, φ_s = 5.275 β^-0.3 tan²θ
#[must_use]
pub fn slope_factor(slope_fraction: f64, packing_ratio: f64) -> f64 {
    if packing_ratio < SMIDGEN {
        0.0
    } else {
        5.275 * packing_ratio.powf(-0.3) * slope_fraction * slope_fraction
    }
}

/// Inputs to the forward spread calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadInputs {
    /// No-wind, no-slope spread rate (ft/min)
    pub no_wind_rate: f64,
    /// Reaction intensity (Btu/ft²/min)
    pub reaction_int: f64,
    /// Slope steepness (rise over reach)
    pub slope: f64,
    /// Midflame wind speed (mi/h)
    pub midflame: f64,
    /// Direction the wind blows toward, clockwise from upslope (degrees)
    pub wind_dir_from_upslope: f64,
    /// Characteristic surface area to volume ratio
    pub sigma: f64,
    /// Packing ratio
    pub packing_ratio: f64,
    /// Packing ratio over optimum
    pub beta_ratio: f64,
    /// Cap the effective wind at the reliability limit
    pub apply_wind_limit: bool,
}

/// Spread in the direction of maximum spread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForwardSpread {
    /// Spread rate at the head (ft/min)
    pub spread_rate: f64,
    /// Direction of maximum spread, clockwise from upslope (degrees)
    pub dir_from_upslope: f64,
    /// Effective wind speed (mi/h)
    pub eff_wind: f64,
    /// Wind speed above which the model is unreliable (mi/h)
    pub wind_limit: f64,
    /// The effective wind exceeded the limit
    pub wind_exceeded: bool,
    /// Wind factor
    pub wind_factor: f64,
    /// Slope factor
    pub slope_factor: f64,
}

/// Spread rate and direction with wind and slope vectors added
///
/// The wind and slope contributions are added as vectors; the resultant
/// defines the effective wind speed that would produce the same spread on
/// flat ground.
///
/// # Formula
/// ```text
/// R = R₀ × (1 + |φ_s û_slope + φ_w û_wind|)
/// U_lim = 0.9 × I_R  (ft/min)
/// ```
#[must_use]
pub fn forward_spread(input: &SpreadInputs) -> ForwardSpread {
    let coef = WindCoefficients::new(input.sigma);
    let limit_fpm = 0.9 * input.reaction_int;
    let mut out = ForwardSpread {
        wind_limit: limit_fpm / FPM_PER_MPH,
        dir_from_upslope: 0.0,
        ..ForwardSpread::default()
    };

    let mut wind_fpm = input.midflame * FPM_PER_MPH;
    if wind_fpm > limit_fpm {
        out.wind_exceeded = true;
        if input.apply_wind_limit {
            wind_fpm = limit_fpm;
        }
    }
    out.wind_factor = coef.wind_factor(wind_fpm, input.beta_ratio);
    out.slope_factor = slope_factor(input.slope, input.packing_ratio);

    let ros0 = input.no_wind_rate;
    if ros0 < SMIDGEN {
        return out;
    }

    let slope_rate = ros0 * out.slope_factor;
    let wind_rate = ros0 * out.wind_factor;
    let dir = input.wind_dir_from_upslope.to_radians();
    let x = slope_rate + wind_rate * dir.cos();
    let y = wind_rate * dir.sin();
    let resultant = (x * x + y * y).sqrt();

    out.spread_rate = ros0 + resultant;
    if resultant > SMIDGEN {
        let a = (y.abs() / resultant).asin();
        let azimuth = match (x >= 0.0, y >= 0.0) {
            (true, true) => a,
            (true, false) => 2.0 * std::f64::consts::PI - a,
            (false, true) => std::f64::consts::PI - a,
            (false, false) => std::f64::consts::PI + a,
        };
        out.dir_from_upslope = azimuth.to_degrees();
        if out.dir_from_upslope >= 360.0 - 0.5 || out.dir_from_upslope < 0.5 {
            out.dir_from_upslope = 0.0;
        }
    }

    let phi_ew = out.spread_rate / ros0 - 1.0;
    let mut eff_fpm = coef.effective_wind(phi_ew, input.beta_ratio);
    if eff_fpm > limit_fpm {
        out.wind_exceeded = true;
        if input.apply_wind_limit {
            eff_fpm = limit_fpm;
            let phi = coef.wind_factor(eff_fpm, input.beta_ratio);
            out.spread_rate = ros0 * (1.0 + phi);
        }
    }
    out.eff_wind = eff_fpm / FPM_PER_MPH;
    out
}

/// Effective wind speed (mi/h) that produces `spread_rate` on flat ground
#[must_use]
pub fn effective_wind_for_rate(
    spread_rate: f64,
    no_wind_rate: f64,
    sigma: f64,
    beta_ratio: f64,
) -> f64 {
    if no_wind_rate < SMIDGEN {
        return 0.0;
    }
    let phi = spread_rate / no_wind_rate - 1.0;
    WindCoefficients::new(sigma).effective_wind(phi, beta_ratio) / FPM_PER_MPH
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Fuel model 1 (short grass) at 6% dead moisture
    fn short_grass() -> FuelBed {
        FuelBed {
            depth: 1.0,
            mext_dead: 0.12,
            particles: vec![Particle {
                life: Life::Dead,
                load: 0.034,
                savr: 3500.0,
                dens: 32.0,
                heat: 8000.0,
                stot: 0.0555,
                seff: 0.010,
                mois: 0.06,
            }],
        }
    }

    #[test]
    fn test_short_grass_intermediates() {
        let bed = short_grass().intermediates();
        assert_relative_eq!(bed.sigma, 3500.0, epsilon = 1e-9);
        assert_relative_eq!(bed.bulk_density, 0.034, epsilon = 1e-12);
        assert_relative_eq!(bed.packing_ratio, 0.034 / 32.0, epsilon = 1e-12);
        assert!(bed.beta_ratio > 0.2 && bed.beta_ratio < 0.3);
        assert_eq!(bed.dead_fraction(), 1.0);
    }

    #[test]
    fn test_short_grass_spread() {
        let fuel = short_grass();
        let bed = fuel.intermediates();
        let sink = fuel.heat_sink(bed.bulk_density);
        let ir = fuel.reaction_intensity(&bed, &sink);
        let xi = propagating_flux(bed.sigma, bed.packing_ratio);
        let ros0 = no_wind_rate(ir.total, xi, sink.heat_sink);
        assert_eq!(ir.live, 0.0);
        assert!(ros0 > 1.0 && ros0 < 10.0, "ros0 = {ros0}");

        let spread = forward_spread(&SpreadInputs {
            no_wind_rate: ros0,
            reaction_int: ir.total,
            slope: 0.0,
            midflame: 5.0,
            wind_dir_from_upslope: 0.0,
            sigma: bed.sigma,
            packing_ratio: bed.packing_ratio,
            beta_ratio: bed.beta_ratio,
            apply_wind_limit: true,
        });
        assert!(spread.spread_rate > 40.0 && spread.spread_rate < 140.0);
        assert_relative_eq!(spread.eff_wind, 5.0, epsilon = 1e-6);
        assert_eq!(spread.dir_from_upslope, 0.0);
    }

    #[test]
    fn test_cross_slope_wind_direction() {
        let spread = forward_spread(&SpreadInputs {
            no_wind_rate: 2.0,
            reaction_int: 1000.0,
            slope: 0.0,
            midflame: 4.0,
            wind_dir_from_upslope: 90.0,
            sigma: 2000.0,
            packing_ratio: 0.005,
            beta_ratio: 0.5,
            apply_wind_limit: true,
        });
        assert_relative_eq!(spread.dir_from_upslope, 90.0, epsilon = 1e-6);
        assert_relative_eq!(spread.eff_wind, 4.0, epsilon = 1e-6);
    }

    #[test]
    fn test_wet_fuel_does_not_burn() {
        assert_eq!(moisture_damping(0.15, 0.12), 0.0);
        assert_eq!(moisture_damping(0.05, 0.0), 0.0);
        assert_relative_eq!(moisture_damping(0.0, 0.25), 1.0);
    }

    #[test]
    fn test_cured_fraction_bounds() {
        assert_eq!(cured_herb_fraction(0.25), 1.0);
        assert_eq!(cured_herb_fraction(1.25), 0.0);
        assert_relative_eq!(cured_herb_fraction(0.75), 1.333 - 0.8325, epsilon = 1e-12);
    }

    #[test]
    fn test_wind_limit_caps_effective_wind() {
        let spread = forward_spread(&SpreadInputs {
            no_wind_rate: 1.0,
            reaction_int: 100.0,
            slope: 0.0,
            midflame: 20.0,
            wind_dir_from_upslope: 0.0,
            sigma: 1500.0,
            packing_ratio: 0.01,
            beta_ratio: 1.0,
            apply_wind_limit: true,
        });
        assert!(spread.wind_exceeded);
        assert_relative_eq!(spread.eff_wind, 90.0 / 88.0, epsilon = 1e-9);
    }
}

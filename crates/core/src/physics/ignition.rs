//! Ignition probability
//!
//! # References
//! - Schroeder, M.J. (1969). "Ignition probability." USDA Forest Service Office Report 2106-1.
//! - Latham, D.J., Schlieter, J.A. (1989). "Ignition probabilities of wildland fuels based on
//!   simulated lightning discharges." USDA Forest Service Research Paper INT-411.
//! - Rothermel, R.C. (1983). "How to predict the spread and intensity of forest and range fires."
//!   USDA Forest Service General Technical Report INT-143.

/// Fine fuel temperature (°F) from air temperature and sun shading
///
/// Fully shaded fuel runs 5 °F above air temperature, fully exposed fuel
/// 25 °F above.
#[must_use]
pub fn fuel_temperature(air_temp: f64, sun_shading: f64) -> f64 {
    air_temp + 25.0 - 20.0 * sun_shading
}

/// Probability that a firebrand ignites fine dead fuel
///
/// # Formula
/// ```text
/// Q_ig = 144.51 - 0.266 T - 0.00058 T² - T M + 18.54 (1 - e^(-15.1 M)) + 640 M    [T in °C]
/// X    = (400 - Q_ig) / 10
/// P    = 0.000048 X^4.3 / 50
/// ```
#[must_use]
pub fn firebrand_probability(fuel_temp: f64, fuel_mois: f64) -> f64 {
    let t = (fuel_temp - 32.0) * 5.0 / 9.0;
    let m = fuel_mois;
    let qign = (144.51 - 0.266 * t - 0.000_58 * t * t - t * m
        + 18.54 * (1.0 - (-15.1 * m).exp())
        + 640.0 * m)
        .min(400.0);
    let x = 0.1 * (400.0 - qign);
    (0.000_048 * x.powf(4.3) / 50.0).clamp(0.0, 1.0)
}

/// Lightning-receptive fuel bed, in worksheet item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningFuel {
    /// Ponderosa pine litter
    PonderosaPineLitter,
    /// Punky wood, rotten, chunky
    PunkyRotten,
    /// Punky wood powder, deep
    PowderDeep,
    /// Punky wood powder, shallow
    PowderShallow,
    /// Lodgepole pine duff
    LodgepoleDuff,
    /// Douglas-fir duff
    DouglasFirDuff,
    /// High altitude mixed
    HighAltitude,
    /// Commercial peat moss
    Peat,
}

impl LightningFuel {
    /// Fuel type at worksheet item `index`
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        use LightningFuel::*;
        [
            PonderosaPineLitter,
            PunkyRotten,
            PowderDeep,
            PowderShallow,
            LodgepoleDuff,
            DouglasFirDuff,
            HighAltitude,
            Peat,
        ]
        .get(index)
        .copied()
    }

    /// Ignition probability for positive and negative strokes
    fn probabilities(self, mois_pct: f64, depth_cm: f64) -> (f64, f64) {
        use LightningFuel::*;
        let m = mois_pct;
        let d = depth_cm;
        let (pos, neg) = match self {
            PonderosaPineLitter => (0.92 * (-0.087 * m).exp(), 1.04 * (-0.054 * m).exp()),
            PunkyRotten => (0.44 * (-0.110 * m).exp(), 0.59 * (-0.094 * m).exp()),
            PowderDeep => (0.86 * (-0.060 * m).exp(), 0.90 * (-0.056 * m).exp()),
            PowderShallow => (0.60 - 0.011 * m, 0.73 - 0.011 * m),
            LodgepoleDuff => (
                1.0 / (1.0 + (5.13 - 0.68 * d).exp()),
                1.0 / (1.0 + (3.84 - 0.60 * d).exp()),
            ),
            DouglasFirDuff => (
                1.0 / (1.0 + (6.69 - 1.39 * d).exp()),
                1.0 / (1.0 + (5.48 - 1.28 * d).exp()),
            ),
            HighAltitude => (0.62 * (-0.05 * m).exp(), 0.80 - 0.014 * m),
            Peat => (0.71 * (-0.070 * m).exp(), 0.84 * (-0.060 * m).exp()),
        };
        (pos.clamp(0.0, 1.0), neg.clamp(0.0, 1.0))
    }
}

/// Lightning stroke charge, in worksheet item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCharge {
    /// Negative cloud-to-ground
    Negative,
    /// Positive cloud-to-ground
    Positive,
    /// Unknown, weighted by stroke frequency
    Unknown,
}

impl StrokeCharge {
    /// Charge at worksheet item `index`; unknown indices are `Unknown`
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => StrokeCharge::Negative,
            1 => StrokeCharge::Positive,
            _ => StrokeCharge::Unknown,
        }
    }
}

/// Continuing-current probabilities and stroke frequencies.
const CC_NEG: f64 = 0.2;
const CC_POS: f64 = 0.9;
const FREQ_NEG: f64 = 0.723;
const FREQ_POS: f64 = 0.277;

/// Probability that a lightning stroke ignites the fuel bed
///
/// `duff_depth` in inches (capped at 10 cm), `fuel_mois` as a fraction
/// (capped at 40%).
#[must_use]
pub fn lightning_probability(
    fuel: LightningFuel,
    charge: StrokeCharge,
    duff_depth: f64,
    fuel_mois: f64,
) -> f64 {
    let depth_cm = (2.54 * duff_depth).min(10.0);
    let mois_pct = (100.0 * fuel_mois).min(40.0);
    let (pos, neg) = fuel.probabilities(mois_pct, depth_cm);
    match charge {
        StrokeCharge::Negative => CC_NEG * neg,
        StrokeCharge::Positive => CC_POS * pos,
        StrokeCharge::Unknown => FREQ_POS * CC_POS * pos + FREQ_NEG * CC_NEG * neg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fuel_temperature() {
        assert_eq!(fuel_temperature(80.0, 0.0), 105.0);
        assert_eq!(fuel_temperature(80.0, 1.0), 85.0);
    }

    #[test]
    fn test_firebrand_probability_falls_with_moisture() {
        let dry = firebrand_probability(100.0, 0.03);
        let damp = firebrand_probability(100.0, 0.15);
        assert!(dry > damp);
        assert!(dry <= 1.0 && damp >= 0.0);
    }

    #[test]
    fn test_lightning_unknown_is_weighted() {
        let fuel = LightningFuel::PonderosaPineLitter;
        let pos = lightning_probability(fuel, StrokeCharge::Positive, 1.0, 0.2);
        let neg = lightning_probability(fuel, StrokeCharge::Negative, 1.0, 0.2);
        let unk = lightning_probability(fuel, StrokeCharge::Unknown, 1.0, 0.2);
        assert_relative_eq!(unk, FREQ_POS * pos + FREQ_NEG * neg, epsilon = 1e-12);
        assert!(LightningFuel::from_index(8).is_none());
    }
}

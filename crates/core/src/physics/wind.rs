//! Wind adjustment to midflame height

use super::rothermel::SMIDGEN;

/// How the wind adjustment factor was derived, in worksheet item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WafMethod {
    /// Fuel exposed to the wind
    Unsheltered,
    /// Fuel sheltered by an overstory canopy
    Sheltered,
    /// Entered by the user
    Input,
}

/// Wind adjustment factor and the canopy description behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindAdjustment {
    /// 20-ft to midflame reduction factor
    pub factor: f64,
    /// Crown fill portion of the canopy layer (fraction)
    pub crown_fill: f64,
    /// Sheltered or unsheltered
    pub method: WafMethod,
}

/// Wind adjustment factor (Albini and Baughman 1979)
///
/// The fuel is sheltered when the canopy fills at least 5% of its layer and
/// the canopy is at least 6 ft tall.
///
/// # Formula
/// ```text
/// f       = cover × crown ratio / 3
/// exposed = 1.83 / ln((20 + 0.36 δ) / (0.13 δ))
/// shelter = 0.555 / (√(f H) × ln((20 + 0.36 H) / (0.13 H)))
/// ```
#[must_use]
pub fn adjustment_factor(
    canopy_cover: f64,
    canopy_ht: f64,
    crown_ratio: f64,
    fuel_depth: f64,
) -> WindAdjustment {
    let crown_fill = canopy_cover * crown_ratio / 3.0;
    if canopy_cover < SMIDGEN || crown_fill < 0.05 || canopy_ht < 6.0 {
        let factor = if fuel_depth > SMIDGEN {
            1.83 / ((20.0 + 0.36 * fuel_depth) / (0.13 * fuel_depth)).ln()
        } else {
            1.0
        };
        WindAdjustment {
            factor,
            crown_fill,
            method: WafMethod::Unsheltered,
        }
    } else {
        let factor = 0.555
            / ((crown_fill * canopy_ht).sqrt()
                * ((20.0 + 0.36 * canopy_ht) / (0.13 * canopy_ht)).ln());
        WindAdjustment {
            factor,
            crown_fill,
            method: WafMethod::Sheltered,
        }
    }
}

/// 20-ft wind from 10-m wind, U₂₀ = U₁₀ / 1.15
#[must_use]
pub fn speed_at_20ft(speed_at_10m: f64) -> f64 {
    speed_at_10m / 1.15
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unsheltered_grass() {
        let waf = adjustment_factor(0.0, 0.0, 0.0, 1.0);
        assert_eq!(waf.method, WafMethod::Unsheltered);
        assert_relative_eq!(waf.factor, 0.36, epsilon = 0.01);
    }

    #[test]
    fn test_sheltered_under_dense_canopy() {
        let waf = adjustment_factor(0.5, 60.0, 0.5, 1.0);
        assert_eq!(waf.method, WafMethod::Sheltered);
        assert!(waf.factor > 0.05 && waf.factor < 0.2);
        assert_relative_eq!(waf.crown_fill, 0.5 * 0.5 / 3.0);
    }
}

//! Elliptical fire shape and fire intensity
//!
//! A point-source fire burning for a fixed time under uniform conditions is
//! modelled as an ellipse whose length-to-width ratio follows the effective
//! wind speed. Intensity and flame length come from Byram's relations.
//!
//! # References
//! - Anderson, H.E. (1983). "Predicting wind-driven wild land fire size and shape."
//!   USDA Forest Service Research Paper INT-305.
//! - Byram, G.M. (1959). "Combustion of forest fuels." In: Forest Fire: Control and Use.
//! - Van Wagner, C.E. (1973). "Height of crown scorch in forest fires."
//!   Canadian Journal of Forest Research, 3(3), 373-378.

use crate::core_types::units::SMIDGEN;

/// Length-to-width ratio from effective wind speed (mi/h), 1 + 0.25 U
#[must_use]
pub fn length_to_width(eff_wind_mph: f64) -> f64 {
    1.0 + 0.25 * eff_wind_mph.max(0.0)
}

/// Ellipse eccentricity from its length-to-width ratio
///
/// # Formula
/// ```text
/// e = √(L/W² - 1) / (L/W)
/// ```
#[must_use]
pub fn eccentricity(length_to_width: f64) -> f64 {
    let x = length_to_width * length_to_width - 1.0;
    if x > 0.0 {
        x.sqrt() / length_to_width
    } else {
        0.0
    }
}

/// Spread rate at `beta` degrees from the direction of maximum spread
///
/// # Formula
/// ```text
/// R_β = R_head × (1 - e) / (1 - e cos β)
/// ```
#[must_use]
pub fn spread_at_beta(head_rate: f64, eccentricity: f64, beta_deg: f64) -> f64 {
    if head_rate < SMIDGEN || beta_deg.abs() < SMIDGEN {
        return head_rate;
    }
    head_rate * (1.0 - eccentricity) / (1.0 - eccentricity * beta_deg.to_radians().cos())
}

/// Backing spread rate, R_head × (1 - e) / (1 + e)
#[must_use]
pub fn spread_at_back(head_rate: f64, eccentricity: f64) -> f64 {
    head_rate * (1.0 - eccentricity) / (1.0 + eccentricity)
}

/// Angle between the direction of maximum spread and a vector, both
/// clockwise from upslope, folded into `0..=180`
#[must_use]
pub fn vector_beta(max_dir: f64, vector_dir: f64) -> f64 {
    let beta = (max_dir - vector_dir).abs();
    if beta > 180.0 {
        360.0 - beta
    } else {
        beta
    }
}

/// Fire width from its length and length-to-width ratio
#[must_use]
pub fn width(length: f64, length_to_width: f64) -> f64 {
    if length_to_width < SMIDGEN {
        0.0
    } else {
        length / length_to_width
    }
}

/// Ellipse area (ft²), π L W / 4
#[must_use]
pub fn area(length: f64, width: f64) -> f64 {
    std::f64::consts::PI * length * width / 4.0
}

/// Ellipse perimeter (ft), Ramanujan's approximation
///
/// # Formula
/// ```text
/// a = L/2, b = W/2, h = ((a - b)/(a + b))²
/// P = π (a + b) (1 + 3h / (10 + √(4 - 3h)))
/// ```
#[must_use]
pub fn perimeter(length: f64, width: f64) -> f64 {
    let a = 0.5 * length;
    let b = 0.5 * width;
    if a + b < SMIDGEN {
        return 0.0;
    }
    let h = ((a - b) / (a + b)).powi(2);
    std::f64::consts::PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

/// Heat per unit area (Btu/ft²), I_R × τ
#[must_use]
pub fn heat_per_unit_area(reaction_int: f64, residence_time: f64) -> f64 {
    reaction_int * residence_time
}

/// Byram's fireline intensity (Btu/ft/s) from reaction intensity, residence
/// time and spread rate
#[must_use]
pub fn fireline_intensity(reaction_int: f64, residence_time: f64, spread_rate: f64) -> f64 {
    reaction_int * residence_time * spread_rate / 60.0
}

/// Byram's flame length (ft), 0.45 I_B^0.46
#[must_use]
pub fn flame_length(fireline_intensity: f64) -> f64 {
    if fireline_intensity < SMIDGEN {
        0.0
    } else {
        0.45 * fireline_intensity.powf(0.46)
    }
}

/// Fireline intensity (Btu/ft/s) that produces `flame_length` (ft)
#[must_use]
pub fn fireline_intensity_from_flame_length(flame_length: f64) -> f64 {
    if flame_length < SMIDGEN {
        0.0
    } else {
        (flame_length / 0.45).powf(1.0 / 0.46)
    }
}

/// Crown scorch height (ft)
///
/// # Formula
/// ```text
/// h_s = 63 / (140 - T) × I_B^(7/6) / √(I_B + U³)
/// ```
///
/// `air_temp` in °F, `wind` in mi/h at midflame.
#[must_use]
pub fn scorch_height(fireline_intensity: f64, wind: f64, air_temp: f64) -> f64 {
    if fireline_intensity < SMIDGEN {
        return 0.0;
    }
    (63.0 / (140.0 - air_temp)) * fireline_intensity.powf(7.0 / 6.0)
        / (fireline_intensity + wind * wind * wind).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_when_calm() {
        assert_eq!(length_to_width(0.0), 1.0);
        assert_eq!(eccentricity(1.0), 0.0);
        assert_relative_eq!(spread_at_back(10.0, 0.0), 10.0);
        assert_relative_eq!(spread_at_beta(10.0, 0.0, 135.0), 10.0);
        let d = 100.0;
        assert_relative_eq!(perimeter(d, d), std::f64::consts::PI * d, epsilon = 1e-9);
    }

    #[test]
    fn test_flank_spread_slower_than_head() {
        let e = eccentricity(length_to_width(8.0));
        let head = 20.0;
        let flank = spread_at_beta(head, e, 90.0);
        assert!(flank < head);
        assert_relative_eq!(spread_at_beta(head, e, 180.0), spread_at_back(head, e), epsilon = 1e-9);
    }

    #[test]
    fn test_flame_length_inverse() {
        let fli = 250.0;
        let fl = flame_length(fli);
        assert_relative_eq!(fireline_intensity_from_flame_length(fl), fli, epsilon = 1e-9);
        assert_eq!(flame_length(0.0), 0.0);
    }

    #[test]
    fn test_vector_beta_folds() {
        assert_eq!(vector_beta(10.0, 350.0), 20.0);
        assert_eq!(vector_beta(90.0, 45.0), 45.0);
    }

    #[test]
    fn test_scorch_height_grows_with_intensity() {
        let low = scorch_height(50.0, 5.0, 77.0);
        let high = scorch_height(500.0, 5.0, 77.0);
        assert!(high > low && low > 0.0);
        assert_eq!(scorch_height(0.0, 5.0, 77.0), 0.0);
    }
}

//! Psychrometrics and comfort indices
//!
//! Temperatures in °F, elevation in ft, humidity in percent.
//!
//! # References
//! - Buck, A.L. (1981). "New equations for computing vapor pressure and enhancement factor."
//!   Journal of Applied Meteorology, 20(12), 1527-1532.
//! - Rothfusz, L.P. (1990). "The heat index equation." NWS Technical Attachment SR 90-23.
//! - Pepi, J.W. (1987). "The summer simmer index." Weatherwise, 40(3), 143-145.

#[inline]
fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[inline]
fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Saturation vapor pressure (mb) over water at `temp_c`
#[inline]
fn saturation_vapor_pressure(temp_c: f64) -> f64 {
    6.1121 * (17.502 * temp_c / (240.97 + temp_c)).exp()
}

/// Dew point (°F) from dry bulb, wet bulb and site elevation
///
/// # Formula
/// ```text
/// e_w = 6.1121 exp(17.502 T_w / (240.97 + T_w))          (6.1115, 22.452, 272.55 below 0 °C)
/// p   = 1013 exp(-0.0000375 z)
/// e   = e_w - 0.00066 (1 + 0.00115 T_w) (T - T_w) p
/// T_d = -240.97 / (1 - 17.502 / ln(e / 6.1121))
/// ```
#[must_use]
pub fn dew_point(air_temp: f64, wet_bulb: f64, elevation: f64) -> f64 {
    let t = f_to_c(air_temp);
    let w = f_to_c(wet_bulb);
    let e2 = if w < 0.0 {
        6.1115 * (22.452 * w / (272.55 + w)).exp()
    } else {
        saturation_vapor_pressure(w)
    };
    let p = 1013.0 * (-0.000_037_5 * elevation).exp();
    let e = (e2 - 0.000_66 * (1.0 + 0.001_15 * w) * (t - w) * p).max(0.001);
    c_to_f(-240.97 / (1.0 - 17.502 / (e / 6.1121).ln()))
}

/// Relative humidity (%) from dry bulb and dew point, capped at 100
#[must_use]
pub fn relative_humidity(air_temp: f64, dew_point: f64) -> f64 {
    let es = saturation_vapor_pressure(f_to_c(air_temp));
    let e = saturation_vapor_pressure(f_to_c(dew_point));
    (100.0 * e / es).min(100.0)
}

/// Heat index (°F), Rothfusz regression
#[must_use]
pub fn heat_index(t: f64, rh: f64) -> f64 {
    -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
        - 0.224_755_41 * t * rh
        - 0.006_837_83 * t * t
        - 0.054_817_17 * rh * rh
        + 0.001_228_74 * t * t * rh
        + 0.000_852_82 * t * rh * rh
        - 0.000_001_99 * t * t * rh * rh
}

/// Summer simmer index (°F)
///
/// # Formula
/// ```text
/// SSI = 1.98 (T - (0.55 - 0.0055 RH)(T - 58)) - 56.83
/// ```
#[must_use]
pub fn summer_simmer_index(t: f64, rh: f64) -> f64 {
    1.98 * (t - (0.55 - 0.0055 * rh) * (t - 58.0)) - 56.83
}

/// Wind chill temperature (°F) for a wind speed in mi/h
#[must_use]
pub fn wind_chill(t: f64, wind: f64) -> f64 {
    let ws = wind.max(0.0);
    0.0817 * (3.71 * ws.sqrt() + 5.81 - 0.25 * ws) * (t - 91.4) + 91.4
}

/// Cumulus cloud base height (ft) above the site, 222 ft per °F of spread
#[must_use]
pub fn cumulus_base_height(air_temp: f64, dew_point: f64) -> f64 {
    (222.0 * (air_temp - dew_point)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_saturated_air() {
        let td = dew_point(70.0, 70.0, 0.0);
        assert_abs_diff_eq!(td, 70.0, epsilon = 0.1);
        assert_abs_diff_eq!(relative_humidity(70.0, 70.0), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dry_air_dew_point_below_wet_bulb() {
        let td = dew_point(90.0, 65.0, 1000.0);
        assert!(td < 65.0);
        let rh = relative_humidity(90.0, td);
        assert!(rh > 10.0 && rh < 40.0, "rh = {rh}");
    }

    #[test]
    fn test_indices() {
        assert_abs_diff_eq!(heat_index(90.0, 50.0), 95.0, epsilon = 1.0);
        assert_eq!(cumulus_base_height(60.0, 70.0), 0.0);
        assert_abs_diff_eq!(cumulus_base_height(80.0, 50.0), 6660.0, epsilon = 1e-9);
        assert!(wind_chill(20.0, 20.0) < 20.0);
        assert!(summer_simmer_index(95.0, 60.0) > summer_simmer_index(95.0, 20.0));
    }
}

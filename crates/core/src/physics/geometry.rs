//! Map, site and safety zone geometry

use std::f64::consts::PI;

use crate::core_types::units::{FEET_PER_MILE, INCHES_PER_MILE, SMIDGEN};

/// Map scale (in/mi) for a representative fraction denominator, zero when
/// the denominator vanishes
#[must_use]
pub fn map_scale(fraction: f64) -> f64 {
    if fraction < SMIDGEN {
        0.0
    } else {
        INCHES_PER_MILE / fraction
    }
}

/// Map distance (in) for a ground distance in miles
#[must_use]
pub fn map_distance(scale: f64, miles: f64) -> f64 {
    scale * miles
}

/// Map distance (in) for a ground distance in feet
#[must_use]
pub fn map_distance_ft(scale: f64, feet: f64) -> f64 {
    scale * feet / FEET_PER_MILE
}

/// Ground distance (mi) for a map distance, zero without a scale
#[must_use]
pub fn ground_distance(scale: f64, map_inches: f64) -> f64 {
    if scale < SMIDGEN {
        0.0
    } else {
        map_inches / scale
    }
}

/// Slope measured off a contour map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapSlope {
    /// Elevation rise (ft)
    pub rise: f64,
    /// Horizontal reach (ft)
    pub reach: f64,
    /// Slope steepness (degrees)
    pub degrees: f64,
}

/// Slope from contour interval, contour count and measured map distance
///
/// # Formula
/// ```text
/// rise  = interval × count
/// reach = fraction × map distance / 12
/// θ     = atan(rise / reach)
/// ```
#[must_use]
pub fn map_slope(fraction: f64, interval: f64, count: f64, map_dist: f64) -> MapSlope {
    let rise = interval * count;
    let reach = fraction * map_dist / 12.0;
    let degrees = if reach < SMIDGEN {
        0.0
    } else {
        (rise / reach).atan().to_degrees()
    };
    MapSlope {
        rise,
        reach,
        degrees,
    }
}

/// Azimuth (degrees) of compass point `index`, 22.5 degrees apart
#[must_use]
pub fn compass_degrees(index: usize) -> f64 {
    22.5 * index as f64
}

/// Wrap an azimuth into `0..360`
#[must_use]
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Safety zone separation distance (ft), four flame lengths
#[must_use]
pub fn separation_distance(flame_length: f64) -> f64 {
    4.0 * flame_length
}

/// Safety zone radius and area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafetyZone {
    /// Radius (ft)
    pub radius: f64,
    /// Area (ft²)
    pub size: f64,
}

/// Safety zone sized to hold personnel and equipment behind the separation
/// distance
#[must_use]
pub fn safety_zone(
    sep_dist: f64,
    personnel: f64,
    personnel_area: f64,
    equipment: f64,
    equipment_area: f64,
) -> SafetyZone {
    let core = (personnel * personnel_area + equipment * equipment_area).max(0.0);
    let radius = sep_dist + (core / PI).sqrt();
    SafetyZone {
        radius,
        size: PI * radius * radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_map_scale_guard() {
        assert_eq!(map_scale(0.0), 0.0);
        assert_relative_eq!(map_scale(24_000.0), 2.64);
        assert_eq!(ground_distance(0.0, 3.0), 0.0);
    }

    #[test]
    fn test_map_slope() {
        // 10 contours of 40 ft over 1 in at 1:24000 (2000 ft)
        let s = map_slope(24_000.0, 40.0, 10.0, 1.0);
        assert_relative_eq!(s.reach, 2000.0);
        assert_relative_eq!(s.degrees, 0.2_f64.atan().to_degrees());
        assert_eq!(map_slope(0.0, 40.0, 10.0, 1.0).degrees, 0.0);
    }

    #[test]
    fn test_safety_zone() {
        let zone = safety_zone(40.0, 0.0, 50.0, 0.0, 300.0);
        assert_relative_eq!(zone.radius, 40.0);
        let crew = safety_zone(40.0, 20.0, 50.0, 2.0, 300.0);
        assert_relative_eq!(crew.radius, 40.0 + (1600.0 / PI).sqrt());
        assert_relative_eq!(crew.size, PI * crew.radius * crew.radius);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(450.0), 90.0);
        assert_eq!(compass_degrees(4), 90.0);
    }
}

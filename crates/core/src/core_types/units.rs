//! Native units for worksheet quantities
//!
//! Every cell stores its value in a fixed *native* unit (feet, pounds, Btu,
//! minutes, miles per hour, degrees Fahrenheit). The [`Unit`] enum names that
//! unit for each declared cell; display units are formatting metadata only.
//!
//! The newtype wrappers below are used where quantities cross public APIs
//! outside the cell store (the containment kernel and the compositor) so that
//! chains are never mixed with feet or acres with square chains.
//!
//! # Usage
//! ```
//! use fire_calc_core::core_types::units::{Chains, Feet, FeetPerMinute};
//!
//! let head = Feet::new(660.0);
//! assert!((*Chains::from(head) - 10.0).abs() < 1e-12);
//!
//! let ros = FeetPerMinute::new(11.0);
//! assert!((*ros.to_chains_per_hour() - 10.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

/// Feet per chain (Gunter's chain)
pub const FEET_PER_CHAIN: f64 = 66.0;

/// Feet per statute mile
pub const FEET_PER_MILE: f64 = 5280.0;

/// Inches per statute mile
pub const INCHES_PER_MILE: f64 = 63360.0;

/// Square feet per acre
pub const SQUARE_FEET_PER_ACRE: f64 = 43560.0;

/// Acres per square foot, as used by the fire size equations
pub const ACRES_PER_SQUARE_FOOT: f64 = 2.295684e-05;

/// Acres per square chain
pub const ACRES_PER_SQUARE_CHAIN: f64 = 0.1;

/// Tons/acre to lb/ft²
pub const TONS_PER_ACRE_TO_LB_PER_SQFT: f64 = 2000.0 / SQUARE_FEET_PER_ACRE;

/// Values smaller than this are treated as zero by every guarded division.
pub const SMIDGEN: f64 = 1.0e-07;

// ============================================================================
// HELPER FUNCTIONS FOR TOTAL ORDERING
// ============================================================================

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// NATIVE UNIT TAGS
// ============================================================================

/// Native unit of a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless ratio, index or text
    None,
    /// Fraction in [0, 1]
    Fraction,
    /// Percent
    Percent,
    /// Feet
    Feet,
    /// Inches
    Inches,
    /// Statute miles
    Miles,
    /// Chains (66 ft)
    Chains,
    /// Feet per minute
    FeetPerMinute,
    /// Chains per hour
    ChainsPerHour,
    /// Miles per hour
    MilesPerHour,
    /// Minutes
    Minutes,
    /// Years
    Years,
    /// Days (Julian date)
    Days,
    /// Acres
    Acres,
    /// Square feet
    SquareFeet,
    /// Square feet per acre (basal area)
    SquareFeetPerAcre,
    /// Compass degrees
    Degrees,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Btu per pound
    BtuPerPound,
    /// Btu per square foot
    BtuPerSquareFoot,
    /// Btu per square foot per minute
    BtuPerSquareFootPerMinute,
    /// Btu per cubic foot
    BtuPerCubicFoot,
    /// Btu per foot per second
    BtuPerFootPerSecond,
    /// Pounds per square foot
    PoundsPerSquareFoot,
    /// Pounds per cubic foot
    PoundsPerCubicFoot,
    /// Square feet per cubic foot (surface-area-to-volume ratio)
    SquareFeetPerCubicFoot,
    /// Foot-pounds per second per square foot
    FootPoundsPerSecondPerSquareFoot,
    /// Map inches per real mile
    InchesPerMile,
    /// Count
    Count,
    /// Dollars
    Dollars,
    /// Dollars per hour
    DollarsPerHour,
}

impl Unit {
    /// Short display symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Fraction => "fraction",
            Unit::Percent => "%",
            Unit::Feet => "ft",
            Unit::Inches => "in",
            Unit::Miles => "mi",
            Unit::Chains => "ch",
            Unit::FeetPerMinute => "ft/min",
            Unit::ChainsPerHour => "ch/h",
            Unit::MilesPerHour => "mi/h",
            Unit::Minutes => "min",
            Unit::Years => "years",
            Unit::Days => "days",
            Unit::Acres => "ac",
            Unit::SquareFeet => "ft2",
            Unit::SquareFeetPerAcre => "ft2/ac",
            Unit::Degrees => "deg",
            Unit::Fahrenheit => "oF",
            Unit::BtuPerPound => "Btu/lb",
            Unit::BtuPerSquareFoot => "Btu/ft2",
            Unit::BtuPerSquareFootPerMinute => "Btu/ft2/min",
            Unit::BtuPerCubicFoot => "Btu/ft3",
            Unit::BtuPerFootPerSecond => "Btu/ft/s",
            Unit::PoundsPerSquareFoot => "lb/ft2",
            Unit::PoundsPerCubicFoot => "lb/ft3",
            Unit::SquareFeetPerCubicFoot => "ft2/ft3",
            Unit::FootPoundsPerSecondPerSquareFoot => "ft-lb/s/ft2",
            Unit::InchesPerMile => "in/mi",
            Unit::Count => "count",
            Unit::Dollars => "$",
            Unit::DollarsPerHour => "$/h",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// NEWTYPE QUANTITIES
// ============================================================================

/// Declares an f64 newtype with total ordering, `Deref`, arithmetic with
/// itself, scaling by `f64` and serde support.
macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            /// Zero
            pub const ZERO: $name = $name(0.0);

            /// Wrap a value already in this unit
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// Raw value
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $symbol)
            }
        }
    };
}

quantity!(
    /// Distance in feet
    Feet, "ft"
);
quantity!(
    /// Distance in chains
    Chains, "ch"
);
quantity!(
    /// Spread rate in feet per minute
    FeetPerMinute, "ft/min"
);
quantity!(
    /// Spread or line-building rate in chains per hour
    ChainsPerHour, "ch/h"
);
quantity!(
    /// Area in acres
    Acres, "ac"
);
quantity!(
    /// Elapsed time in minutes
    Minutes, "min"
);
quantity!(
    /// Compass direction in degrees
    Degrees, "deg"
);
quantity!(
    /// Dimensionless fraction
    Fraction, ""
);
quantity!(
    /// Wind speed in miles per hour
    MilesPerHour, "mi/h"
);

impl From<Feet> for Chains {
    #[inline]
    fn from(ft: Feet) -> Chains {
        Chains(ft.0 / FEET_PER_CHAIN)
    }
}

impl From<Chains> for Feet {
    #[inline]
    fn from(ch: Chains) -> Feet {
        Feet(ch.0 * FEET_PER_CHAIN)
    }
}

impl FeetPerMinute {
    /// Convert to chains per hour (`fpm * 60 / 66`)
    #[inline]
    #[must_use]
    pub fn to_chains_per_hour(self) -> ChainsPerHour {
        ChainsPerHour(self.0 * 60.0 / FEET_PER_CHAIN)
    }
}

impl ChainsPerHour {
    /// Chains covered per minute
    #[inline]
    #[must_use]
    pub fn per_minute(self) -> f64 {
        self.0 / 60.0
    }
}

impl Acres {
    /// Area of `square_chains` expressed in acres
    #[inline]
    #[must_use]
    pub fn from_square_chains(square_chains: f64) -> Acres {
        Acres(square_chains * ACRES_PER_SQUARE_CHAIN)
    }

    /// Area in square chains
    #[inline]
    #[must_use]
    pub fn to_square_chains(self) -> f64 {
        self.0 / ACRES_PER_SQUARE_CHAIN
    }

    /// Area of `square_feet` expressed in acres
    #[inline]
    #[must_use]
    pub fn from_square_feet(square_feet: f64) -> Acres {
        Acres(square_feet * ACRES_PER_SQUARE_FOOT)
    }
}

impl Degrees {
    /// Wrap into [0, 360)
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }

    /// Value in radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_conversions() {
        let ch = Chains::from(Feet::new(132.0));
        assert!((*ch - 2.0).abs() < 1e-12);
        assert!((*Feet::from(Chains::new(0.5)) - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_acre_conversions() {
        assert!((*Acres::from_square_chains(10.0) - 1.0).abs() < 1e-12);
        assert!((Acres::new(2.0).to_square_chains() - 20.0).abs() < 1e-12);
        assert!((*Acres::from_square_feet(SQUARE_FEET_PER_ACRE) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_total_ordering() {
        let a = Minutes::new(5.0);
        let b = Minutes::new(7.5);
        assert_eq!(a.max(b), b);
        assert_eq!(a.min(b), a);
    }

    #[test]
    fn test_degrees_normalized() {
        assert!((*Degrees::new(-90.0).normalized() - 270.0).abs() < 1e-12);
        assert!((*Degrees::new(720.0).normalized()).abs() < 1e-12);
    }
}

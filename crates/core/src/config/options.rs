//! Option groups
//!
//! Each group is a set of mutually exclusive switches. Resolution follows the
//! worksheet's first-match order: the first switch that is set wins, and a
//! group with a catch-all branch resolves to that branch when nothing earlier
//! matched. Groups without a catch-all resolve to `None` so the rules for that
//! group are skipped entirely.

use super::PropertyDict;
use crate::compositor::WeightingPolicy;
use crate::error::Result;

/// How the surface fuel bed is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelOption {
    /// A fuel model from the catalog
    Models,
    /// Individual fuel parameters
    Parms,
    /// Two blended fuel models
    Weighted(WeightingPolicy),
    /// Palmetto-gallberry dynamic loads
    PalmettoGallberry,
    /// Western aspen dynamic loads
    Aspen,
}

impl FuelOption {
    /// Resolve the fuel group, `None` when no switch is set
    pub fn from_props(props: &PropertyDict) -> Result<Option<Self>> {
        Ok(if props.boolean("surfaceConfFuelModels")? {
            Some(FuelOption::Models)
        } else if props.boolean("surfaceConfFuelParms")? {
            Some(FuelOption::Parms)
        } else if let Some(policy) = WeightingPolicy::from_props(props)? {
            Some(FuelOption::Weighted(policy))
        } else if props.boolean("surfaceConfFuelPalmettoGallberry")? {
            Some(FuelOption::PalmettoGallberry)
        } else if props.boolean("surfaceConfFuelAspen")? {
            Some(FuelOption::Aspen)
        } else {
            None
        })
    }

    /// True for the two-model options
    #[must_use]
    pub fn is_weighted(self) -> bool {
        matches!(self, FuelOption::Weighted(_))
    }
}

impl WeightingPolicy {
    /// Resolve the two-model weighting switches, `None` when none is set
    pub fn from_props(props: &PropertyDict) -> Result<Option<Self>> {
        Ok(if props.boolean("surfaceConfFuelAreaWeighted")? {
            Some(WeightingPolicy::AreaWeighted)
        } else if props.boolean("surfaceConfFuelHarmonicMean")? {
            Some(WeightingPolicy::HarmonicMean)
        } else if props.boolean("surfaceConfFuel2Dimensional")? {
            Some(WeightingPolicy::TwoDimensional)
        } else {
            None
        })
    }
}

/// How the wind speed is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindOption {
    /// Midflame wind speed entered directly
    Midflame,
    /// 20-ft wind with an entered adjustment factor
    At20Ft,
    /// 20-ft wind with a calculated adjustment factor
    At20FtCalc,
    /// 10-m wind with an entered adjustment factor
    At10M,
    /// 10-m wind with a calculated adjustment factor
    At10MCalc,
}

impl WindOption {
    /// Resolve the wind group, `None` when no switch is set
    pub fn from_props(props: &PropertyDict) -> Result<Option<Self>> {
        Ok(if props.boolean("surfaceConfWindSpeedAtMidflame")? {
            Some(WindOption::Midflame)
        } else if props.boolean("surfaceConfWindSpeedAt20Ft")? {
            Some(WindOption::At20Ft)
        } else if props.boolean("surfaceConfWindSpeedAt20FtCalc")? {
            Some(WindOption::At20FtCalc)
        } else if props.boolean("surfaceConfWindSpeedAt10M")? {
            Some(WindOption::At10M)
        } else if props.boolean("surfaceConfWindSpeedAt10MCalc")? {
            Some(WindOption::At10MCalc)
        } else {
            None
        })
    }

    /// True when the input wind is measured at 10 m
    #[must_use]
    pub fn is_10m(self) -> bool {
        matches!(self, WindOption::At10M | WindOption::At10MCalc)
    }

    /// True when the adjustment factor is calculated from the canopy
    #[must_use]
    pub fn is_calculated(self) -> bool {
        matches!(self, WindOption::At20FtCalc | WindOption::At10MCalc)
    }
}

/// Direction(s) of fire spread to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadDirOption {
    /// Direction of maximum spread only
    Max,
    /// User-specified vector
    Input,
}

impl SpreadDirOption {
    /// Resolve; anything but `surfaceConfSpreadDirMax` means `Input`
    pub fn from_props(props: &PropertyDict) -> Result<Self> {
        Ok(if props.boolean("surfaceConfSpreadDirMax")? {
            SpreadDirOption::Max
        } else {
            SpreadDirOption::Input
        })
    }
}

/// How the wind direction is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirOption {
    /// User-specified direction
    Input,
    /// Wind blows upslope
    Upslope,
}

impl WindDirOption {
    /// Resolve; anything but `surfaceConfWindDirInput` means `Upslope`
    pub fn from_props(props: &PropertyDict) -> Result<Self> {
        Ok(if props.boolean("surfaceConfWindDirInput")? {
            WindDirOption::Input
        } else {
            WindDirOption::Upslope
        })
    }
}

/// Reference for compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreesOption {
    /// Clockwise from upslope
    WrtUpslope,
    /// Clockwise from north
    WrtNorth,
}

impl DegreesOption {
    /// Resolve; anything but `surfaceConfDegreesWrtUpslope` means `WrtNorth`
    pub fn from_props(props: &PropertyDict) -> Result<Self> {
        Ok(if props.boolean("surfaceConfDegreesWrtUpslope")? {
            DegreesOption::WrtUpslope
        } else {
            DegreesOption::WrtNorth
        })
    }
}

/// How slope steepness is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeOption {
    /// Entered directly, as degrees when `degrees` is set
    Input {
        /// Entered in degrees rather than as a fraction
        degrees: bool,
    },
    /// Derived from map measurements
    Derived,
}

impl SlopeOption {
    /// Resolve; anything but `surfaceConfSlopeInput` means `Derived`
    pub fn from_props(props: &PropertyDict) -> Result<Self> {
        Ok(if props.boolean("surfaceConfSlopeInput")? {
            let degrees = !props.boolean("surfaceConfSlopeFraction")?
                && props.boolean("surfaceConfSlopeDegrees")?;
            SlopeOption::Input { degrees }
        } else {
            SlopeOption::Derived
        })
    }
}

/// Herbaceous load transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTransferOption {
    /// Calculated from live herbaceous moisture
    Calc,
    /// Entered directly
    Input,
}

impl LoadTransferOption {
    /// Resolve, `None` when neither switch is set
    pub fn from_props(props: &PropertyDict) -> Result<Option<Self>> {
        Ok(if props.boolean("surfaceConfLoadTransferCalc")? {
            Some(LoadTransferOption::Calc)
        } else if props.boolean("surfaceConfLoadTransferInput")? {
            Some(LoadTransferOption::Input)
        } else {
            None
        })
    }
}

/// How fuel moisture is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoistureOption {
    /// Per time-lag size class
    TimeLag,
    /// Dead and live categories
    LifeCategory,
    /// Named moisture scenario
    Scenario,
}

impl MoistureOption {
    /// Resolve, `None` when no switch is set
    pub fn from_props(props: &PropertyDict) -> Result<Option<Self>> {
        Ok(if props.boolean("surfaceConfMoisTimeLag")? {
            Some(MoistureOption::TimeLag)
        } else if props.boolean("surfaceConfMoisLifeCat")? {
            Some(MoistureOption::LifeCategory)
        } else if props.boolean("surfaceConfMoisScenario")? {
            Some(MoistureOption::Scenario)
        } else {
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceConfFuelParms", true);
        // Models is still set and comes first
        assert_eq!(FuelOption::from_props(&props).unwrap(), Some(FuelOption::Models));

        props.set_bool("surfaceConfFuelModels", false);
        props.set_bool("surfaceConfFuelParms", false);
        props.set_bool("surfaceConfFuelHarmonicMean", true);
        assert_eq!(
            FuelOption::from_props(&props).unwrap(),
            Some(FuelOption::Weighted(WeightingPolicy::HarmonicMean))
        );
    }

    #[test]
    fn test_no_fuel_switch_resolves_to_none() {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceConfFuelModels", false);
        assert_eq!(FuelOption::from_props(&props).unwrap(), None);
    }

    #[test]
    fn test_catch_all_groups() {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceConfSpreadDirMax", false);
        assert_eq!(SpreadDirOption::from_props(&props).unwrap(), SpreadDirOption::Input);
        props.set_bool("surfaceConfSlopeInput", false);
        assert_eq!(SlopeOption::from_props(&props).unwrap(), SlopeOption::Derived);
        assert_eq!(WindDirOption::from_props(&props).unwrap(), WindDirOption::Upslope);
    }
}

//! Worksheet configuration
//!
//! The configuration map holds the user's switches as named boolean or integer
//! properties. Keys follow the worksheet convention: `<module>ModuleActive`
//! enables a module, `<module>Conf<Option>` picks a behaviour and
//! `<module>Calc<Output>` selects an output.
//!
//! The graph only ever reads the map. Reconfiguration is a pure function of
//! its contents.

pub mod options;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

pub use options::{
    DegreesOption, FuelOption, LoadTransferOption, MoistureOption, SlopeOption, SpreadDirOption,
    WindDirOption, WindOption,
};

/// A single configuration switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// On/off switch
    Bool(bool),
    /// Integer parameter (step counts, sample sizes)
    Int(i64),
}

/// Named configuration properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyDict {
    values: FxHashMap<String, PropertyValue>,
}

impl PropertyDict {
    /// A map with no properties at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// Boolean property `key`
    pub fn boolean(&self, key: &str) -> Result<bool> {
        match self.values.get(key) {
            Some(PropertyValue::Bool(b)) => Ok(*b),
            Some(PropertyValue::Int(_)) => Err(CalcError::PropertyType {
                key: key.to_string(),
                expected: "a boolean",
            }),
            None => Err(CalcError::UnknownProperty(key.to_string())),
        }
    }

    /// Integer property `key`
    pub fn integer(&self, key: &str) -> Result<i64> {
        match self.values.get(key) {
            Some(PropertyValue::Int(i)) => Ok(*i),
            Some(PropertyValue::Bool(_)) => Err(CalcError::PropertyType {
                key: key.to_string(),
                expected: "an integer",
            }),
            None => Err(CalcError::UnknownProperty(key.to_string())),
        }
    }

    /// Set or replace a property
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.values.insert(key.into(), value);
    }

    /// Set a boolean property
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, PropertyValue::Bool(value));
    }

    /// Set an integer property
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, PropertyValue::Int(value));
    }

    /// Raw value of `key`, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.values.get(key).copied()
    }

    /// Copy every property of `other` into this map
    pub fn merge(&mut self, other: &PropertyDict) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), *value);
        }
    }

    /// Number of properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the map holds no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a JSON object of `key: bool | int` pairs
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Select exactly one switch of an option group, clearing the others.
    ///
    /// ```
    /// use fire_calc_core::config::PropertyDict;
    ///
    /// let mut props = PropertyDict::default();
    /// props.select(&["surfaceConfSpreadDirMax", "surfaceConfSpreadDirInput"], "surfaceConfSpreadDirInput");
    /// assert!(!props.boolean("surfaceConfSpreadDirMax").unwrap());
    /// assert!(props.boolean("surfaceConfSpreadDirInput").unwrap());
    /// ```
    pub fn select(&mut self, group: &[&str], chosen: &str) {
        for key in group {
            self.set_bool(*key, *key == chosen);
        }
    }
}

impl Default for PropertyDict {
    /// The worksheet's default configuration.
    fn default() -> Self {
        let mut dict = Self::empty();
        for key in BOOLEAN_KEYS {
            dict.set_bool(*key, false);
        }
        for key in DEFAULT_ON {
            dict.set_bool(*key, true);
        }
        for (key, value) in INTEGER_DEFAULTS {
            dict.set_int(*key, *value);
        }
        dict
    }
}

/// Switches that are on in the default configuration.
const DEFAULT_ON: &[&str] = &[
    "surfaceModuleActive",
    "surfaceConfFuelModels",
    "surfaceConfMoisTimeLag",
    "surfaceConfWindSpeedAtMidflame",
    "surfaceConfWindDirUpslope",
    "surfaceConfSpreadDirMax",
    "surfaceConfDegreesWrtUpslope",
    "surfaceConfSlopeInput",
    "surfaceConfSlopeFraction",
    "surfaceConfLoadTransferCalc",
    "surfaceConfWindLimitApplied",
    "surfaceCalcFireSpread",
    "surfaceCalcFireLineInt",
    "surfaceCalcFireFlameLeng",
    "crownConfUseFireLineInt",
    "scorchConfUseFireLineInt",
    "containConfResourcesMultiple",
    "containConfLimitDistOff",
    "weatherConfHumidityFromDewPoint",
];

const INTEGER_DEFAULTS: &[(&str, i64)] = &[
    ("containConfMaxSteps", 1000),
    ("containConfMinSteps", 250),
    ("surfaceConfFuel2DSamples", 2),
    ("surfaceConfFuel2DDepth", 2),
    ("surfaceConfFuel2DLaterals", 0),
];

/// Every boolean key the reconfiguration rules and procedures read.
pub const BOOLEAN_KEYS: &[&str] = &[
    "docDescriptionActive",
    "docFireActive",
    "docRxActive",
    "docTrainingActive",
    "mapCalcDist",
    // Surface
    "surfaceModuleActive",
    "surfaceConfFuelModels",
    "surfaceConfFuelParms",
    "surfaceConfFuelAreaWeighted",
    "surfaceConfFuelHarmonicMean",
    "surfaceConfFuel2Dimensional",
    "surfaceConfFuelPalmettoGallberry",
    "surfaceConfFuelAspen",
    "surfaceConfLoadTransferCalc",
    "surfaceConfLoadTransferInput",
    "surfaceConfMoisTimeLag",
    "surfaceConfMoisLifeCat",
    "surfaceConfMoisScenario",
    "surfaceConfWindSpeedAtMidflame",
    "surfaceConfWindSpeedAt20Ft",
    "surfaceConfWindSpeedAt20FtCalc",
    "surfaceConfWindSpeedAt10M",
    "surfaceConfWindSpeedAt10MCalc",
    "surfaceConfWindDirInput",
    "surfaceConfWindDirUpslope",
    "surfaceConfSpreadDirMax",
    "surfaceConfSpreadDirInput",
    "surfaceConfDegreesWrtNorth",
    "surfaceConfDegreesWrtUpslope",
    "surfaceConfSlopeInput",
    "surfaceConfSlopeDerived",
    "surfaceConfSlopeFraction",
    "surfaceConfSlopeDegrees",
    "surfaceConfWindLimitApplied",
    "surfaceCalcAspenLoadDead1",
    "surfaceCalcAspenLoadLiveHerb",
    "surfaceCalcAspenLoadLiveWoody",
    "surfaceCalcAspenMortality",
    "surfaceCalcAspenSavrDead1",
    "surfaceCalcAspenSavrLiveWoody",
    "surfaceCalcCrownFillPortion",
    "surfaceCalcCrownRatio",
    "surfaceCalcFireCharacteristicsDiagram",
    "surfaceCalcFireDist",
    "surfaceCalcFireEffWind",
    "surfaceCalcFireFlameLeng",
    "surfaceCalcFireHeatPerUnitArea",
    "surfaceCalcFireHeatSource",
    "surfaceCalcFireLineInt",
    "surfaceCalcFireMaxDirDiagram",
    "surfaceCalcFireMaxDirFromUpslope",
    "surfaceCalcFireReactionInt",
    "surfaceCalcFireReactionIntDead",
    "surfaceCalcFireReactionIntLive",
    "surfaceCalcFireResidenceTime",
    "surfaceCalcFireSlopeFactor",
    "surfaceCalcFireSpread",
    "surfaceCalcFireWindFactor",
    "surfaceCalcFireWindSpeedFlag",
    "surfaceCalcFireWindSpeedLimit",
    "surfaceCalcFuelBedBetaRatio",
    "surfaceCalcFuelBedBulkDensity",
    "surfaceCalcFuelBedDeadFraction",
    "surfaceCalcFuelBedHeatSink",
    "surfaceCalcFuelBedLiveFraction",
    "surfaceCalcFuelBedMextLive",
    "surfaceCalcFuelBedMoisDead",
    "surfaceCalcFuelBedMoisLive",
    "surfaceCalcFuelBedPackingRatio",
    "surfaceCalcFuelBedSigma",
    "surfaceCalcFuelLoadDead",
    "surfaceCalcFuelLoadDeadHerb",
    "surfaceCalcFuelLoadLive",
    "surfaceCalcFuelLoadTransferFraction",
    "surfaceCalcFuelLoadUndeadHerb",
    "surfaceCalcPalmettoBedDepth",
    "surfaceCalcPalmettoLoadDead1",
    "surfaceCalcPalmettoLoadDead10",
    "surfaceCalcPalmettoLoadDeadFoliage",
    "surfaceCalcPalmettoLoadLitter",
    "surfaceCalcPalmettoLoadLive1",
    "surfaceCalcPalmettoLoadLive10",
    "surfaceCalcPalmettoLoadLiveFoliage",
    "surfaceCalcSlopeReach",
    "surfaceCalcSlopeRise",
    "surfaceCalcSlopeSteepness",
    "surfaceCalcWindAdjFactor",
    "surfaceCalcWindAdjMethod",
    "surfaceCalcWindSpeedAtMidflame",
    // Crown
    "crownModuleActive",
    "crownConfUseFireLineInt",
    "crownConfUseFlameLeng",
    "crownCalcActiveCrown",
    "crownCalcActiveRatio",
    "crownCalcCriticalCrownSpreadRate",
    "crownCalcCriticalSurfaceFlameLeng",
    "crownCalcCriticalSurfaceIntensity",
    "crownCalcCrownFireType",
    "crownCalcCrownSpreadDist",
    "crownCalcCrownSpreadRate",
    "crownCalcFireArea",
    "crownCalcFireLengthToWidth",
    "crownCalcFireLineInt",
    "crownCalcFirePerimeter",
    "crownCalcFlameLeng",
    "crownCalcFuelLoad",
    "crownCalcHeatPerUnitArea",
    "crownCalcHeatPerUnitAreaCanopy",
    "crownCalcPowerOfFire",
    "crownCalcPowerOfWind",
    "crownCalcPowerRatio",
    "crownCalcTransitionRatio",
    "crownCalcTransitionToCrown",
    "crownCalcWindDriven",
    // Size
    "sizeModuleActive",
    "sizeCalcFireArea",
    "sizeCalcFireDistAtBack",
    "sizeCalcFireDistAtFront",
    "sizeCalcFireLengDist",
    "sizeCalcFireLengToWidth",
    "sizeCalcFirePerimeter",
    "sizeCalcFireShapeDiagram",
    "sizeCalcFireWidthDist",
    // Contain
    "containModuleActive",
    "containConfLimitDistOff",
    "containConfLimitDistOn",
    "containConfResourcesMultiple",
    "containConfResourcesSingle",
    "containConfRetry",
    "containCalcAttackPerimeter",
    "containCalcAttackSize",
    "containCalcCost",
    "containCalcDiagram",
    "containCalcLine",
    "containCalcResourcesUsed",
    "containCalcSize",
    "containCalcStatus",
    "containCalcTime",
    // Spot
    "spotModuleActive",
    "spotCalcCoverHtBurningPile",
    "spotCalcCoverHtSurfaceFire",
    "spotCalcCoverHtTorchingTrees",
    "spotCalcDistBurningPile",
    "spotCalcDistSurfaceFire",
    "spotCalcDistTorchingTrees",
    "spotCalcFirebrandDriftSurfaceFire",
    "spotCalcFirebrandHtBurningPile",
    "spotCalcFirebrandHtSurfaceFire",
    "spotCalcFirebrandHtTorchingTrees",
    "spotCalcFlameDurTorchingTrees",
    "spotCalcFlameHtTorchingTrees",
    "spotCalcFlameRatioTorchingTrees",
    "spotCalcFlatDistBurningPile",
    "spotCalcFlatDistSurfaceFire",
    "spotCalcFlatDistTorchingTrees",
    // Scorch
    "scorchModuleActive",
    "scorchConfUseFireLineInt",
    "scorchConfUseFlameLeng",
    "scorchCalcScorchHt",
    // Mortality
    "mortalityModuleActive",
    "mortalityCalcBarkThickness",
    "mortalityCalcTreeCrownLengScorched",
    "mortalityCalcTreeCrownVolScorched",
    "mortalityCalcTreeMortalityCount",
    "mortalityCalcTreeMortalityRate",
    // Ignition
    "ignitionModuleActive",
    "ignitionCalcFuelTemp",
    "ignitionCalcIgnitionFirebrandProb",
    "ignitionCalcIgnitionLightningProb",
    // Weather
    "weatherModuleActive",
    "weatherConfHumidityFromDewPoint",
    "weatherConfHumidityFromWetBulbElev",
    "weatherCalcWthrCumulusBaseHt",
    "weatherCalcWthrDewPointTemp",
    "weatherCalcWthrHeatIndex",
    "weatherCalcWthrRelativeHumidity",
    "weatherCalcWthrSummerSimmerIndex",
    "weatherCalcWthrWindChillTemp",
    // Safety
    "safetyModuleActive",
    "safetyCalcRadius",
    "safetyCalcSepDist",
    "safetyCalcSize",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let props = PropertyDict::default();
        assert!(props.boolean("surfaceModuleActive").unwrap());
        assert!(!props.boolean("crownModuleActive").unwrap());
        assert_eq!(props.integer("containConfMaxSteps").unwrap(), 1000);
        assert_eq!(
            props.boolean("containConfMaxSteps"),
            Err(CalcError::PropertyType {
                key: "containConfMaxSteps".into(),
                expected: "a boolean"
            })
        );
        assert_eq!(
            props.integer("noSuchKey"),
            Err(CalcError::UnknownProperty("noSuchKey".into()))
        );
    }

    #[test]
    fn test_json_overrides() {
        let overrides =
            PropertyDict::from_json(r#"{"crownModuleActive": true, "containConfMinSteps": 50}"#)
                .unwrap();
        let mut props = PropertyDict::default();
        props.merge(&overrides);
        assert!(props.boolean("crownModuleActive").unwrap());
        assert_eq!(props.integer("containConfMinSteps").unwrap(), 50);

        let json = props.to_json().unwrap();
        assert_eq!(PropertyDict::from_json(&json).unwrap(), props);
    }

    #[test]
    fn test_default_keys_are_declared() {
        for key in DEFAULT_ON {
            assert!(BOOLEAN_KEYS.contains(key), "{key} missing from BOOLEAN_KEYS");
        }
    }
}

//! Fire behavior fuel models
//!
//! The catalog is preloaded with the 13 original fire behavior fuel models
//! and the 40 Scott & Burgan dynamic models. Loads are stored in lb/ft²;
//! the tables below are written in tons/acre as published and converted
//! when the catalog is built.
//!
//! # References
//! - Anderson, H.E. (1982). "Aids to determining fuel models for estimating
//!   fire behavior." USDA Forest Service General Technical Report INT-122.
//! - Scott, J.H., Burgan, R.E. (2005). "Standard fire behavior fuel models: a
//!   comprehensive set for use with Rothermel's surface fire spread model."
//!   USDA Forest Service General Technical Report RMRS-GTR-153.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core_types::units::TONS_PER_ACRE_TO_LB_PER_SQFT;
use crate::error::{CalcError, Result};

/// Surface fuel model parameters in native units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    /// Model number (1-13 standard, 101-204 dynamic, user models above)
    pub number: u32,
    /// Short code shown in the worksheet
    pub code: String,
    /// Description
    pub name: String,
    /// Fuel bed depth (ft)
    pub depth: f64,
    /// Dead fuel moisture of extinction (fraction)
    pub mext: f64,
    /// Dead fuel heat of combustion (Btu/lb)
    pub heat_dead: f64,
    /// Live fuel heat of combustion (Btu/lb)
    pub heat_live: f64,
    /// 1-h dead load (lb/ft²)
    pub load1: f64,
    /// 10-h dead load (lb/ft²)
    pub load10: f64,
    /// 100-h dead load (lb/ft²)
    pub load100: f64,
    /// Live herbaceous load (lb/ft²)
    pub load_herb: f64,
    /// Live woody load (lb/ft²)
    pub load_wood: f64,
    /// 1-h dead surface area to volume ratio (ft²/ft³)
    pub savr1: f64,
    /// Live herbaceous surface area to volume ratio (ft²/ft³)
    pub savr_herb: f64,
    /// Live woody surface area to volume ratio (ft²/ft³)
    pub savr_wood: f64,
    /// Herbaceous load transfers to dead with curing
    pub dynamic: bool,
}

impl FuelModel {
    /// Total fine dead and live load (lb/ft²)
    #[must_use]
    pub fn total_load(&self) -> f64 {
        self.load1 + self.load10 + self.load100 + self.load_herb + self.load_wood
    }
}

/// Row of a published table: number, code, name, depth ft, mext %,
/// heat dead, heat live, loads t/ac (1h, 10h, 100h, herb, wood),
/// savr (1h, herb, wood), dynamic.
type Row = (
    u32,
    &'static str,
    &'static str,
    f64,
    f64,
    f64,
    f64,
    [f64; 5],
    [f64; 3],
    bool,
);

#[rustfmt::skip]
const STANDARD: &[Row] = &[
    (1, "1", "Short grass", 1.0, 12.0, 8000.0, 8000.0, [0.74, 0.0, 0.0, 0.0, 0.0], [3500.0, 1500.0, 1500.0], false),
    (2, "2", "Timber grass and understory", 1.0, 15.0, 8000.0, 8000.0, [2.0, 1.0, 0.5, 0.5, 0.0], [3000.0, 1500.0, 1500.0], false),
    (3, "3", "Tall grass", 2.5, 25.0, 8000.0, 8000.0, [3.01, 0.0, 0.0, 0.0, 0.0], [1500.0, 1500.0, 1500.0], false),
    (4, "4", "Chaparral", 6.0, 20.0, 8000.0, 8000.0, [5.01, 4.01, 2.0, 0.0, 5.01], [2000.0, 1500.0, 1500.0], false),
    (5, "5", "Brush", 2.0, 20.0, 8000.0, 8000.0, [1.0, 0.5, 0.0, 0.0, 2.0], [2000.0, 1500.0, 1500.0], false),
    (6, "6", "Dormant brush", 2.5, 25.0, 8000.0, 8000.0, [1.5, 2.5, 2.0, 0.0, 0.0], [1750.0, 1500.0, 1500.0], false),
    (7, "7", "Southern rough", 2.5, 40.0, 8000.0, 8000.0, [1.13, 1.87, 1.5, 0.0, 0.37], [1750.0, 1500.0, 1550.0], false),
    (8, "8", "Short needle litter", 0.2, 30.0, 8000.0, 8000.0, [1.5, 1.0, 2.5, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (9, "9", "Long needle or hardwood litter", 0.2, 25.0, 8000.0, 8000.0, [2.92, 0.41, 0.15, 0.0, 0.0], [2500.0, 1500.0, 1500.0], false),
    (10, "10", "Timber litter and understory", 1.0, 25.0, 8000.0, 8000.0, [3.01, 2.0, 5.01, 0.0, 2.0], [2000.0, 1500.0, 1500.0], false),
    (11, "11", "Light logging slash", 1.0, 15.0, 8000.0, 8000.0, [1.5, 4.51, 5.51, 0.0, 0.0], [1500.0, 1500.0, 1500.0], false),
    (12, "12", "Medium logging slash", 2.3, 20.0, 8000.0, 8000.0, [4.01, 14.03, 16.53, 0.0, 0.0], [1500.0, 1500.0, 1500.0], false),
    (13, "13", "Heavy logging slash", 3.0, 25.0, 8000.0, 8000.0, [7.01, 23.04, 28.05, 0.0, 0.0], [1500.0, 1500.0, 1500.0], false),
];

#[rustfmt::skip]
const DYNAMIC: &[Row] = &[
    (101, "GR1", "Short, sparse dry climate grass", 0.4, 15.0, 8000.0, 8000.0, [0.10, 0.0, 0.0, 0.30, 0.0], [2200.0, 2000.0, 1500.0], true),
    (102, "GR2", "Low load, dry climate grass", 1.0, 15.0, 8000.0, 8000.0, [0.10, 0.0, 0.0, 1.00, 0.0], [2000.0, 1800.0, 1500.0], true),
    (103, "GR3", "Low load, very coarse, humid climate grass", 2.0, 30.0, 8000.0, 8000.0, [0.10, 0.40, 0.0, 1.50, 0.0], [1500.0, 1300.0, 1500.0], true),
    (104, "GR4", "Moderate load, dry climate grass", 2.0, 15.0, 8000.0, 8000.0, [0.25, 0.0, 0.0, 1.90, 0.0], [2000.0, 1800.0, 1500.0], true),
    (105, "GR5", "Low load, humid climate grass", 1.5, 40.0, 8000.0, 8000.0, [0.40, 0.0, 0.0, 2.50, 0.0], [1800.0, 1600.0, 1500.0], true),
    (106, "GR6", "Moderate load, humid climate grass", 1.5, 40.0, 9000.0, 9000.0, [0.10, 0.0, 0.0, 3.40, 0.0], [2200.0, 2000.0, 1500.0], true),
    (107, "GR7", "High load, dry climate grass", 3.0, 15.0, 8000.0, 8000.0, [1.00, 0.0, 0.0, 5.40, 0.0], [2000.0, 1800.0, 1500.0], true),
    (108, "GR8", "High load, very coarse, humid climate grass", 4.0, 30.0, 8000.0, 8000.0, [0.50, 1.00, 0.0, 7.30, 0.0], [1500.0, 1300.0, 1500.0], true),
    (109, "GR9", "Very high load, humid climate grass", 5.0, 40.0, 8000.0, 8000.0, [1.00, 1.00, 0.0, 9.00, 0.0], [1800.0, 1600.0, 1500.0], true),
    (121, "GS1", "Low load, dry climate grass-shrub", 0.9, 15.0, 8000.0, 8000.0, [0.20, 0.0, 0.0, 0.50, 0.65], [2000.0, 1800.0, 1800.0], true),
    (122, "GS2", "Moderate load, dry climate grass-shrub", 1.5, 15.0, 8000.0, 8000.0, [0.50, 0.50, 0.0, 0.60, 1.00], [2000.0, 1800.0, 1800.0], true),
    (123, "GS3", "Moderate load, humid climate grass-shrub", 1.8, 40.0, 8000.0, 8000.0, [0.30, 0.25, 0.0, 1.45, 1.25], [1800.0, 1600.0, 1600.0], true),
    (124, "GS4", "High load, humid climate grass-shrub", 2.1, 40.0, 8000.0, 8000.0, [1.90, 0.30, 0.10, 3.40, 7.10], [1800.0, 1600.0, 1600.0], true),
    (141, "SH1", "Low load, dry climate shrub", 1.0, 15.0, 8000.0, 8000.0, [0.25, 0.25, 0.0, 0.15, 1.30], [2000.0, 1800.0, 1600.0], true),
    (142, "SH2", "Moderate load, dry climate shrub", 1.0, 15.0, 8000.0, 8000.0, [1.35, 2.40, 0.75, 0.0, 3.85], [2000.0, 1500.0, 1600.0], false),
    (143, "SH3", "Moderate load, humid climate shrub", 2.4, 40.0, 8000.0, 8000.0, [0.45, 3.00, 0.0, 0.0, 6.20], [1600.0, 1500.0, 1400.0], false),
    (144, "SH4", "Low load, humid climate timber-shrub", 3.0, 30.0, 8000.0, 8000.0, [0.85, 1.15, 0.20, 0.0, 2.55], [2000.0, 1800.0, 1600.0], false),
    (145, "SH5", "High load, dry climate shrub", 6.0, 15.0, 8000.0, 8000.0, [3.60, 2.10, 0.0, 0.0, 2.90], [750.0, 1500.0, 1600.0], false),
    (146, "SH6", "Low load, humid climate shrub", 2.0, 30.0, 8000.0, 8000.0, [2.90, 1.45, 0.0, 0.0, 1.40], [750.0, 1500.0, 1600.0], false),
    (147, "SH7", "Very high load, dry climate shrub", 6.0, 15.0, 8000.0, 8000.0, [3.50, 5.30, 2.20, 0.0, 3.40], [750.0, 1500.0, 1600.0], false),
    (148, "SH8", "High load, humid climate shrub", 3.0, 40.0, 8000.0, 8000.0, [2.05, 3.40, 0.85, 0.0, 4.35], [750.0, 1500.0, 1600.0], false),
    (149, "SH9", "Very high load, humid climate shrub", 4.4, 40.0, 8000.0, 8000.0, [4.50, 2.45, 0.0, 1.55, 7.00], [750.0, 1800.0, 1500.0], true),
    (161, "TU1", "Low load, dry climate timber-grass-shrub", 0.6, 20.0, 8000.0, 8000.0, [0.20, 0.90, 1.50, 0.20, 0.90], [2000.0, 1800.0, 1600.0], true),
    (162, "TU2", "Moderate load, humid climate timber-shrub", 1.0, 30.0, 8000.0, 8000.0, [0.95, 1.80, 1.25, 0.0, 0.20], [2000.0, 1500.0, 1600.0], false),
    (163, "TU3", "Moderate load, humid climate timber-grass-shrub", 1.3, 30.0, 8000.0, 8000.0, [1.10, 0.15, 0.25, 0.65, 1.10], [1800.0, 1600.0, 1400.0], true),
    (164, "TU4", "Dwarf conifer with understory", 0.5, 12.0, 8000.0, 8000.0, [4.50, 0.0, 0.0, 0.0, 2.00], [2300.0, 1500.0, 2000.0], false),
    (165, "TU5", "Very high load, dry climate timber-shrub", 1.0, 25.0, 8000.0, 8000.0, [4.00, 4.00, 3.00, 0.0, 3.00], [1500.0, 1500.0, 750.0], false),
    (181, "TL1", "Low load, compact conifer litter", 0.2, 30.0, 8000.0, 8000.0, [1.00, 2.20, 3.60, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (182, "TL2", "Low load broadleaf litter", 0.2, 25.0, 8000.0, 8000.0, [1.40, 2.30, 2.20, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (183, "TL3", "Moderate load conifer litter", 0.3, 20.0, 8000.0, 8000.0, [0.50, 2.20, 2.80, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (184, "TL4", "Small downed logs", 0.4, 25.0, 8000.0, 8000.0, [0.50, 1.50, 4.20, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (185, "TL5", "High load conifer litter", 0.6, 25.0, 8000.0, 8000.0, [1.15, 2.50, 4.40, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (186, "TL6", "Moderate load broadleaf litter", 0.3, 25.0, 8000.0, 8000.0, [2.40, 1.20, 1.20, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (187, "TL7", "Large downed logs", 0.4, 25.0, 8000.0, 8000.0, [0.30, 1.40, 8.10, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (188, "TL8", "Long-needle litter", 0.3, 35.0, 8000.0, 8000.0, [5.80, 1.40, 1.10, 0.0, 0.0], [1800.0, 1500.0, 1500.0], false),
    (189, "TL9", "Very high load broadleaf litter", 0.6, 35.0, 8000.0, 8000.0, [6.65, 3.30, 4.15, 0.0, 0.0], [1800.0, 1500.0, 1500.0], false),
    (201, "SB1", "Low load activity fuel", 1.0, 25.0, 8000.0, 8000.0, [1.50, 3.00, 11.00, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (202, "SB2", "Moderate load activity or low load blowdown", 1.0, 25.0, 8000.0, 8000.0, [4.50, 4.25, 4.00, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (203, "SB3", "High load activity fuel or moderate load blowdown", 1.2, 25.0, 8000.0, 8000.0, [5.50, 2.75, 3.00, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
    (204, "SB4", "High load blowdown", 2.7, 25.0, 8000.0, 8000.0, [5.25, 3.50, 5.25, 0.0, 0.0], [2000.0, 1500.0, 1500.0], false),
];

fn model_from_row(row: &Row) -> FuelModel {
    let (number, code, name, depth, mext, heat_dead, heat_live, loads, savr, dynamic) = *row;
    FuelModel {
        number,
        code: code.to_string(),
        name: name.to_string(),
        depth,
        mext: mext / 100.0,
        heat_dead,
        heat_live,
        load1: loads[0] * TONS_PER_ACRE_TO_LB_PER_SQFT,
        load10: loads[1] * TONS_PER_ACRE_TO_LB_PER_SQFT,
        load100: loads[2] * TONS_PER_ACRE_TO_LB_PER_SQFT,
        load_herb: loads[3] * TONS_PER_ACRE_TO_LB_PER_SQFT,
        load_wood: loads[4] * TONS_PER_ACRE_TO_LB_PER_SQFT,
        savr1: savr[0],
        savr_herb: savr[1],
        savr_wood: savr[2],
        dynamic,
    }
}

/// Standard fuel model `number` (1-13)
///
/// Used directly by the crown fire spread rate, which always runs fuel
/// model 10 regardless of the selected surface fuel.
#[must_use]
pub fn standard_model(number: u32) -> Option<FuelModel> {
    STANDARD
        .iter()
        .find(|row| row.0 == number)
        .map(model_from_row)
}

/// Fuel models addressable by code or number.
///
/// Items are kept in insertion order; a fuel-model cell stores the index.
#[derive(Debug, Clone, Default)]
pub struct FuelCatalog {
    models: Vec<FuelModel>,
    index: FxHashMap<String, usize>,
}

impl FuelCatalog {
    /// The 13 standard and 40 dynamic models
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for row in STANDARD.iter().chain(DYNAMIC) {
            catalog.add(model_from_row(row));
        }
        catalog
    }

    /// Add a model, replacing any model with the same code; returns its index
    pub fn add(&mut self, model: FuelModel) -> usize {
        if let Some(&i) = self.index.get(&model.code) {
            self.index.insert(model.number.to_string(), i);
            self.models[i] = model;
            return i;
        }
        let i = self.models.len();
        self.index.insert(model.code.clone(), i);
        self.index.entry(model.number.to_string()).or_insert(i);
        self.models.push(model);
        i
    }

    /// Number of models
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when the catalog holds no models
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model at item index `i`
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&FuelModel> {
        self.models.get(i)
    }

    /// Item index of the model with code or number `name`
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::UnknownFuelModel(name.to_string()))
    }

    /// Model with code or number `name`
    pub fn get_by_name(&self, name: &str) -> Result<&FuelModel> {
        Ok(&self.models[self.index_of(name)?])
    }

    /// Model at item index `i`, as a configuration error when out of range
    pub fn model_at(&self, i: usize) -> Result<&FuelModel> {
        self.models
            .get(i)
            .ok_or_else(|| CalcError::UnknownFuelModel(format!("#{i}")))
    }

    /// Models in item order
    pub fn iter(&self) -> impl Iterator<Item = &FuelModel> {
        self.models.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_catalog() {
        let catalog = FuelCatalog::standard();
        assert_eq!(catalog.len(), 53);
        let fm1 = catalog.get_by_name("1").unwrap();
        assert_relative_eq!(fm1.load1, 0.034, epsilon = 1e-3);
        assert_relative_eq!(fm1.mext, 0.12);
        let gr2 = catalog.get_by_name("GR2").unwrap();
        assert_eq!(catalog.index_of("102").unwrap(), catalog.index_of("GR2").unwrap());
        assert!(gr2.dynamic);
    }

    #[test]
    fn test_unknown_model() {
        let catalog = FuelCatalog::standard();
        assert_eq!(
            catalog.index_of("ZZ9"),
            Err(CalcError::UnknownFuelModel("ZZ9".into()))
        );
    }

    #[test]
    fn test_user_model_replaces_by_code() {
        let mut catalog = FuelCatalog::standard();
        let mut custom = catalog.get_by_name("10").unwrap().clone();
        custom.number = 310;
        custom.code = "my10".into();
        custom.depth = 1.5;
        let i = catalog.add(custom.clone());
        assert_eq!(i, 53);
        custom.depth = 2.0;
        assert_eq!(catalog.add(custom), 53);
        assert_eq!(catalog.get_by_name("310").unwrap().depth, 2.0);
    }
}

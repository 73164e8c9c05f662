//! Fuel moisture scenarios
//!
//! Sixteen named dead/live moisture combinations, D1L1 through D4L4. The
//! dead component sets the 1-h, 10-h and 100-h moistures (1000-h is taken
//! 2 points above 100-h); the live component sets herbaceous and woody.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Named fuel moisture set, all values as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureScenario {
    /// Scenario name
    pub name: String,
    /// Description
    pub description: String,
    /// 1-h dead moisture
    pub dead1: f64,
    /// 10-h dead moisture
    pub dead10: f64,
    /// 100-h dead moisture
    pub dead100: f64,
    /// 1000-h dead moisture
    pub dead1000: f64,
    /// Live herbaceous moisture
    pub live_herb: f64,
    /// Live woody moisture
    pub live_wood: f64,
}

const DEAD: [(&str, &str, [f64; 3]); 4] = [
    ("D1", "Very low dead", [0.03, 0.04, 0.05]),
    ("D2", "Low dead", [0.06, 0.07, 0.08]),
    ("D3", "Moderate dead", [0.09, 0.10, 0.11]),
    ("D4", "High dead", [0.12, 0.13, 0.14]),
];

const LIVE: [(&str, &str, [f64; 2]); 4] = [
    ("L1", "fully cured herb, low live", [0.30, 0.60]),
    ("L2", "2/3 cured herb, moderate live", [0.60, 0.90]),
    ("L3", "1/3 cured herb, high live", [0.90, 1.20]),
    ("L4", "fully green herb, very high live", [1.20, 1.50]),
];

/// Moisture scenarios addressable by name.
#[derive(Debug, Clone, Default)]
pub struct MoistureCatalog {
    scenarios: Vec<MoistureScenario>,
    index: FxHashMap<String, usize>,
}

impl MoistureCatalog {
    /// The 16 standard scenarios
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for (dead, dead_desc, d) in DEAD {
            for (live, live_desc, l) in LIVE {
                catalog.add(MoistureScenario {
                    name: format!("{dead}{live}"),
                    description: format!("{dead_desc}, {live_desc}"),
                    dead1: d[0],
                    dead10: d[1],
                    dead100: d[2],
                    dead1000: d[2] + 0.02,
                    live_herb: l[0],
                    live_wood: l[1],
                });
            }
        }
        catalog
    }

    /// Add a scenario, replacing any scenario with the same name
    pub fn add(&mut self, scenario: MoistureScenario) -> usize {
        if let Some(&i) = self.index.get(&scenario.name) {
            self.scenarios[i] = scenario;
            return i;
        }
        let i = self.scenarios.len();
        self.index.insert(scenario.name.clone(), i);
        self.scenarios.push(scenario);
        i
    }

    /// Number of scenarios
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// True when the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenario at item index `i`
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&MoistureScenario> {
        self.scenarios.get(i)
    }

    /// Item index of scenario `name`
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::UnknownMoistureScenario(name.to_string()))
    }

    /// Scenario at item index `i`, as a configuration error when out of range
    pub fn scenario_at(&self, i: usize) -> Result<&MoistureScenario> {
        self.scenarios
            .get(i)
            .ok_or_else(|| CalcError::UnknownMoistureScenario(format!("#{i}")))
    }

    /// Scenarios in item order
    pub fn iter(&self) -> impl Iterator<Item = &MoistureScenario> {
        self.scenarios.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_scenarios() {
        let catalog = MoistureCatalog::standard();
        assert_eq!(catalog.len(), 16);
        let d2l3 = catalog.scenario_at(catalog.index_of("D2L3").unwrap()).unwrap();
        assert_eq!(d2l3.dead10, 0.07);
        assert_eq!(d2l3.live_wood, 1.20);
        assert_eq!(
            catalog.index_of("D5L1"),
            Err(CalcError::UnknownMoistureScenario("D5L1".into()))
        );
    }
}

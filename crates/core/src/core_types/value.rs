//! Cell values and cell kinds
//!
//! A cell holds either a continuous number in its native unit, an index into
//! a fixed list of named items, or free text (documentation entries and the
//! containment resource lists).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current value of a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Number in the cell's native unit
    Continuous(f64),
    /// Index into the cell's item list
    Item(usize),
    /// Free text
    Text(String),
}

impl CellValue {
    /// Kind of this value
    #[must_use]
    pub fn tag(&self) -> CellKindTag {
        match self {
            CellValue::Continuous(_) => CellKindTag::Continuous,
            CellValue::Item(_) => CellKindTag::Discrete,
            CellValue::Text(_) => CellKindTag::Text,
        }
    }

    /// The number, if continuous
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            CellValue::Continuous(v) => Some(*v),
            _ => None,
        }
    }

    /// The item index, if discrete
    #[must_use]
    pub fn as_item(&self) -> Option<usize> {
        match self {
            CellValue::Item(i) => Some(*i),
            _ => None,
        }
    }

    /// The text, if text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Continuous(v) => write!(f, "{v}"),
            CellValue::Item(i) => write!(f, "#{i}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Item list source for a discrete cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Number in a native unit
    Continuous,
    /// Fixed list of named items
    Discrete(&'static [&'static str]),
    /// Items are the fuel models of the graph's fuel catalog
    FuelModel,
    /// Items are the scenarios of the graph's moisture catalog
    MoistureScenario,
    /// Free text
    Text,
}

impl CellKind {
    /// Value kind accepted by cells of this kind
    #[must_use]
    pub fn tag(self) -> CellKindTag {
        match self {
            CellKind::Continuous => CellKindTag::Continuous,
            CellKind::Discrete(_) | CellKind::FuelModel | CellKind::MoistureScenario => {
                CellKindTag::Discrete
            }
            CellKind::Text => CellKindTag::Text,
        }
    }

    /// Initial value of a freshly built cell of this kind
    #[must_use]
    pub fn initial_value(self) -> CellValue {
        match self.tag() {
            CellKindTag::Continuous => CellValue::Continuous(0.0),
            CellKindTag::Discrete => CellValue::Item(0),
            CellKindTag::Text => CellValue::Text(String::new()),
        }
    }
}

/// Kind discriminant without payload, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKindTag {
    /// Continuous number
    Continuous,
    /// Item index
    Discrete,
    /// Free text
    Text,
}

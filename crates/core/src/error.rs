//! Error type for graph construction, reconfiguration and evaluation.
//!
//! Everything that can go wrong while resolving names, reading the
//! configuration map or ordering the active functions is a configuration
//! error and is returned as a [`CalcError`]. Containment terminal states and
//! degenerate numeric inputs are *values*, not errors.

use thiserror::Error;

use crate::core_types::CellKindTag;

/// Errors raised by the computation graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// A cell name did not resolve to a declared cell.
    #[error("unknown cell `{0}`")]
    UnknownCell(String),

    /// A function name did not resolve to a declared function.
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    /// A configuration property was looked up but is not in the map.
    #[error("unknown configuration property `{0}`")]
    UnknownProperty(String),

    /// A configuration property exists but holds the other value type.
    #[error("configuration property `{key}` is not {expected}")]
    PropertyType {
        /// Property name
        key: String,
        /// `"a boolean"` or `"an integer"`
        expected: &'static str,
    },

    /// A fuel model name or number is not in the catalog.
    #[error("unknown fuel model `{0}`")]
    UnknownFuelModel(String),

    /// A moisture scenario name is not in the catalog.
    #[error("unknown moisture scenario `{0}`")]
    UnknownMoistureScenario(String),

    /// A discrete cell was given an index past the end of its item list.
    #[error("item {index} is out of range for `{cell}` ({len} items)")]
    ItemOutOfRange {
        /// Cell name
        cell: String,
        /// Rejected index
        index: usize,
        /// Number of items the cell offers
        len: usize,
    },

    /// A value of the wrong kind was written to or read from a cell.
    #[error("cell `{cell}` holds {expected:?} values, got {found:?}")]
    ValueKind {
        /// Cell name
        cell: String,
        /// Kind declared for the cell
        expected: CellKindTag,
        /// Kind supplied by the caller
        found: CellKindTag,
    },

    /// The active functions cannot be ordered.
    #[error("dependency cycle among active functions: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),

    /// Two active functions claim the same cell.
    #[error("cell `{cell}` has more than one active writer: {first}, {second}")]
    ConflictingWriters {
        /// Cell name
        cell: String,
        /// First writer found
        first: String,
        /// Second writer found
        second: String,
    },

    /// A containment resource list could not be parsed.
    #[error("invalid containment resource list: {0}")]
    InvalidResource(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalcError>;

//! Per-cell evaluation trace
//!
//! Each evaluation emits one [`TraceRecord`] per user input (before any
//! function runs) and one per user output (after the last function runs).
//! Records always go out as `tracing` events on target `fire_calc::trace`;
//! an attached [`TraceSink`] receives them as well.

use serde::Serialize;
use std::fmt;

use crate::core_types::Unit;

/// Tracing target of per-cell records.
pub const TRACE_TARGET: &str = "fire_calc::trace";

/// Whether a traced cell was read from the user or reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceDirection {
    /// User input, recorded before evaluation
    Input,
    /// User output, recorded after evaluation
    Output,
}

impl fmt::Display for TraceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraceDirection::Input => "in",
            TraceDirection::Output => "out",
        })
    }
}

/// One traced cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRecord {
    /// Input or output
    pub direction: TraceDirection,
    /// Cell name
    pub name: &'static str,
    /// Display value (item name for discrete cells)
    pub value: String,
    /// Display decimals
    pub decimals: u8,
    /// Native unit
    pub units: Unit,
}

impl TraceRecord {
    /// Send this record to the `tracing` subscriber
    pub fn emit(&self) {
        tracing::info!(
            target: TRACE_TARGET,
            direction = %self.direction,
            name = self.name,
            value = %self.value,
            decimals = self.decimals,
            units = %self.units,
            "cell"
        );
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<3} {:<44} {:>14} {}",
            self.direction.to_string(),
            self.name,
            self.value,
            self.units
        )
    }
}

/// Receiver of trace records.
pub trait TraceSink: Send {
    /// Handle one record
    fn record(&mut self, record: &TraceRecord);
}

impl<F> TraceSink for F
where
    F: FnMut(&TraceRecord) + Send,
{
    fn record(&mut self, record: &TraceRecord) {
        self(record);
    }
}

//! Fire behavior physics
//!
//! Closed-form relations in the worksheet's native units (feet, pounds, Btu,
//! minutes, miles per hour, °F). Nothing here touches the cell store;
//! procedures in [`crate::procs`] read cells, call these functions and write
//! the results back.

pub mod calendar;
pub mod crown_fire;
pub mod dynamic_fuels;
pub mod expected_spread;
pub mod fire_shape;
pub mod geometry;
pub mod ignition;
pub mod mortality;
pub mod rothermel;
pub mod spotting;
pub mod weather;
pub mod wind;

pub use crown_fire::FireType;
pub use expected_spread::{expected_spread_rate, CellFuel, ExpectedSpreadConfig};
pub use rothermel::{FuelBed, Life, Particle, FPM_PER_MPH, SMIDGEN};
pub use wind::{WafMethod, WindAdjustment};

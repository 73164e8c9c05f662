//! Core types and utilities

pub mod units;
pub mod value;

pub use units::*;
pub use value::*;

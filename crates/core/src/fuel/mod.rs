//! Fuel model and moisture scenario catalogs

pub mod models;
pub mod moisture;

pub use models::{standard_model, FuelCatalog, FuelModel};
pub use moisture::{MoistureCatalog, MoistureScenario};

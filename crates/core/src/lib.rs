//! Fire Behavior Worksheet Core Library
//!
//! A calculation engine for a fire behavior worksheet. Several hundred named
//! cells (fuel, moisture, weather, terrain, fire outputs) are wired together
//! by named functions, each reading some cells and writing others. A
//! configuration map of module and option switches decides which functions
//! run and which cells the user enters or sees.
//!
//! ## Layout
//!
//! - [`graph`]: cells, functions, configuration state, evaluation order
//! - [`reconfig`]: per-module rules turning the configuration map into state
//! - [`procs`]: the procedure behind every function
//! - [`physics`]: closed-form fire behavior relations
//! - [`compositor`]: blending the behavior of two fuel models
//! - [`contain`]: initial-attack containment simulation
//! - [`fuel`]: fuel model and moisture scenario catalogs
//!
//! ## Example
//! ```
//! use fire_calc_core::{Graph, PropertyDict, Var};
//!
//! let mut props = PropertyDict::default();
//! props.set_bool("sizeModuleActive", true);
//! props.set_bool("sizeCalcFireArea", true);
//! let mut graph = Graph::with_properties(props).unwrap();
//! graph.set_fuel_model(Var::SurfaceFuelBedModel, "2").unwrap();
//! graph.set_real(Var::SurfaceFuelMoisDead1, 0.05).unwrap();
//! graph.set_real(Var::SurfaceFuelMoisDead10, 0.06).unwrap();
//! graph.set_real(Var::SurfaceFuelMoisDead100, 0.07).unwrap();
//! graph.set_real(Var::SurfaceFuelMoisLiveHerb, 0.60).unwrap();
//! graph.set_real(Var::WindSpeedAtMidflame, 4.0).unwrap();
//! graph.set_real(Var::SurfaceFireElapsedTime, 60.0).unwrap();
//! graph.evaluate().unwrap();
//! assert!(graph.real(Var::SurfaceFireArea).unwrap() > 0.0);
//! ```

// Core types and utilities
pub mod config;
pub mod core_types;
pub mod error;
pub mod fuel;

// Computation graph
pub mod graph;
pub mod procs;
pub mod reconfig;

// Fire behavior
pub mod compositor;
pub mod contain;
pub mod physics;

pub use config::PropertyDict;
pub use core_types::{CellKind, CellValue, Unit};
pub use error::{CalcError, Result};
pub use fuel::{FuelCatalog, FuelModel, MoistureCatalog};
pub use graph::{CellId, Func, Graph, Var};

pub use compositor::{composite, SurfaceFireRun, WeightingPolicy};
pub use contain::{ContainConfig, ContainResult, ContainSim, ContainStatus, WorksheetStatus};

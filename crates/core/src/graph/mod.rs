//! Computation graph
//!
//! The [`Graph`] owns every cell value, the configuration map, the fuel and
//! moisture catalogs and the current [`ConfigState`]. A recalculation is two
//! passes:
//!
//! 1. [`Graph::reconfigure`] rebuilds the configuration state from the map:
//!    which functions are active, which cells are inputs, outputs or
//!    constants, then sorts the active functions into evaluation order.
//! 2. [`Graph::evaluate`] writes the pinned constants, runs each active
//!    function once in that order and traces the user inputs and outputs.
//!
//! # Example
//! ```
//! use fire_calc_core::graph::{Graph, Var};
//!
//! let mut graph = Graph::new().unwrap();
//! graph.set_fuel_model(Var::SurfaceFuelBedModel, "1").unwrap();
//! graph.set_real(Var::SurfaceFuelMoisDead1, 0.06).unwrap();
//! graph.set_real(Var::SurfaceFuelMoisDead10, 0.07).unwrap();
//! graph.set_real(Var::SurfaceFuelMoisDead100, 0.08).unwrap();
//! graph.set_real(Var::WindSpeedAtMidflame, 5.0).unwrap();
//! graph.set_real(Var::SiteSlopeFraction, 0.0).unwrap();
//! graph.evaluate().unwrap();
//! assert!(graph.real(Var::SurfaceFireSpreadAtHead).unwrap() > 0.0);
//! ```

pub mod cells;
pub mod context;
pub mod functions;
pub mod state;
pub mod topology;
pub mod trace;

use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{debug, trace};

use crate::config::PropertyDict;
use crate::core_types::{CellKind, CellKindTag, CellValue, Unit};
use crate::error::{CalcError, Result};
use crate::fuel::{FuelCatalog, MoistureCatalog};
use crate::reconfig;

pub use cells::{CellDecl, CellId, ParticleAttr, Var, MAX_PARTICLES};
pub use context::{EvalContext, EvalEnv, PolygonPoint};
pub use functions::{CellRef, Func, FunctionDecl, FUNCTIONS};
pub use state::{CellFlags, ConfigState};
pub use trace::{TraceDirection, TraceRecord, TraceSink, TRACE_TARGET};

/// Worksheet computation graph.
pub struct Graph {
    values: Vec<CellValue>,
    names: FxHashMap<&'static str, CellId>,
    props: PropertyDict,
    state: ConfigState,
    order: Vec<&'static FunctionDecl>,
    fuels: FuelCatalog,
    moistures: MoistureCatalog,
    polygon: Vec<PolygonPoint>,
    sink: Option<Box<dyn TraceSink>>,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("cells", &self.values.len())
            .field("active", &self.order.len())
            .field("fuels", &self.fuels.len())
            .field("moistures", &self.moistures.len())
            .field("trace", &self.sink.is_some())
            .finish()
    }
}

impl Graph {
    /// Build a graph with the default configuration and standard catalogs
    pub fn new() -> Result<Self> {
        Self::with_properties(PropertyDict::default())
    }

    /// Build a graph and reconfigure it from `props`
    pub fn with_properties(props: PropertyDict) -> Result<Self> {
        Self::with_catalogs(props, FuelCatalog::standard(), MoistureCatalog::standard())
    }

    /// Build a graph over custom catalogs
    pub fn with_catalogs(
        props: PropertyDict,
        fuels: FuelCatalog,
        moistures: MoistureCatalog,
    ) -> Result<Self> {
        let values = CellId::all()
            .map(|id| id.decl().kind.initial_value())
            .collect();
        let names = CellId::all().map(|id| (id.name(), id)).collect();
        let mut graph = Self {
            values,
            names,
            props,
            state: ConfigState::new(),
            order: Vec::new(),
            fuels,
            moistures,
            polygon: Vec::new(),
            sink: None,
        };
        graph.reconfigure()?;
        Ok(graph)
    }

    fn env(&self) -> EvalEnv<'_> {
        EvalEnv {
            props: &self.props,
            fuels: &self.fuels,
            moistures: &self.moistures,
        }
    }

    // ========================================================================
    // RECALCULATION
    // ========================================================================

    /// Rebuild the configuration state from the current configuration map
    ///
    /// The new state replaces the old one only when every rule applies and
    /// the active functions can be ordered.
    pub fn reconfigure(&mut self) -> Result<()> {
        let mut state = reconfig::reconfigure(&self.props)?;
        state.derive_inputs(FUNCTIONS);
        let order = topology::evaluation_order(&state)?;
        debug!(
            active = order.len(),
            inputs = state.inputs().count(),
            outputs = state.outputs().count(),
            "reconfigured"
        );
        self.state = state;
        self.order = order;
        Ok(())
    }

    /// Run every active function once, in dependency order
    pub fn evaluate(&mut self) -> Result<()> {
        for (cell, value) in self.state.pins() {
            self.values[cell.index()] = value.clone();
        }
        self.emit_trace(TraceDirection::Input);

        debug!(
            order = ?self.order.iter().map(|d| d.name).collect::<Vec<_>>(),
            "evaluating"
        );
        {
            let env = EvalEnv {
                props: &self.props,
                fuels: &self.fuels,
                moistures: &self.moistures,
            };
            let mut ctx = EvalContext::new(&mut self.values, env, Some(&mut self.polygon));
            for decl in &self.order {
                trace!(function = decl.name, "invoke");
                (decl.procedure)(&mut ctx)?;
            }
        }

        self.emit_trace(TraceDirection::Output);
        Ok(())
    }

    fn emit_trace(&mut self, direction: TraceDirection) {
        let cells: Vec<CellId> = match direction {
            TraceDirection::Input => self.state.inputs().collect(),
            TraceDirection::Output => self.state.outputs().collect(),
        };
        for id in cells {
            let decl = id.decl();
            let record = TraceRecord {
                direction,
                name: decl.name,
                value: self.display_value(id),
                decimals: decl.decimals,
                units: decl.unit,
            };
            record.emit();
            if let Some(sink) = self.sink.as_mut() {
                sink.record(&record);
            }
        }
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Current configuration map
    #[must_use]
    pub fn properties(&self) -> &PropertyDict {
        &self.props
    }

    /// Replace the configuration map and reconfigure
    ///
    /// On error the previous map and state are kept.
    pub fn set_properties(&mut self, props: PropertyDict) -> Result<()> {
        let previous = std::mem::replace(&mut self.props, props);
        if let Err(e) = self.reconfigure() {
            self.props = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Change one boolean switch and reconfigure
    pub fn set_switch(&mut self, key: &str, on: bool) -> Result<()> {
        let mut props = self.props.clone();
        props.set_bool(key, on);
        self.set_properties(props)
    }

    /// Configuration state of the last successful reconfigure
    #[must_use]
    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    /// Active functions in evaluation order
    pub fn evaluation_order(&self) -> impl Iterator<Item = Func> + '_ {
        self.order.iter().map(|d| d.func)
    }

    /// Activation flag of a function
    #[must_use]
    pub fn is_active(&self, func: Func) -> bool {
        self.state.is_active(func)
    }

    /// Whether the worksheet offers to fill the fuel parameters from a model
    #[must_use]
    pub fn show_init_from_fuel_model_button(&self) -> bool {
        self.is_active(Func::SurfaceFuelBedParms) && !self.is_active(Func::SurfaceFuelBedModel)
    }

    /// Cells the user must enter
    pub fn user_inputs(&self) -> impl Iterator<Item = CellId> + '_ {
        self.state.inputs()
    }

    /// Cells reported to the user
    pub fn user_outputs(&self) -> impl Iterator<Item = CellId> + '_ {
        self.state.outputs()
    }

    /// Attach a receiver for per-cell trace records
    pub fn attach_trace(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = Some(sink);
    }

    /// Remove the trace receiver
    pub fn detach_trace(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }

    // ========================================================================
    // NAMES
    // ========================================================================

    /// Resolve a cell name
    pub fn cell_id(&self, name: &str) -> Result<CellId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CalcError::UnknownCell(name.to_string()))
    }

    /// Resolve a function name
    pub fn function(&self, name: &str) -> Result<Func> {
        Func::by_name(name).ok_or_else(|| CalcError::UnknownFunction(name.to_string()))
    }

    /// View of one cell
    #[must_use]
    pub fn cell(&self, id: impl Into<CellId>) -> Cell<'_> {
        let id = id.into();
        Cell {
            id,
            decl: id.decl(),
            value: &self.values[id.index()],
            flags: self.state.flags(id),
            label: self.state.label(id),
            env: self.env(),
        }
    }

    /// View of one cell by name
    pub fn cell_by_name(&self, name: &str) -> Result<Cell<'_>> {
        Ok(self.cell(self.cell_id(name)?))
    }

    // ========================================================================
    // VALUES
    // ========================================================================

    /// Current value of a cell
    #[must_use]
    pub fn value(&self, id: impl Into<CellId>) -> &CellValue {
        &self.values[id.into().index()]
    }

    /// Continuous value of a scalar cell
    pub fn real(&self, var: Var) -> Result<f64> {
        let value = self.value(var);
        value.as_real().ok_or_else(|| CalcError::ValueKind {
            cell: var.name().to_string(),
            expected: CellKindTag::Continuous,
            found: value.tag(),
        })
    }

    /// Store a value after checking its kind and item range
    pub fn set_value(&mut self, id: impl Into<CellId>, value: CellValue) -> Result<()> {
        let id = id.into();
        self.env().validate(id, &value)?;
        self.values[id.index()] = value;
        Ok(())
    }

    /// Store a value in the cell named `name`
    pub fn set_value_by_name(&mut self, name: &str, value: CellValue) -> Result<()> {
        let id = self.cell_id(name)?;
        self.set_value(id, value)
    }

    /// Write a continuous cell
    pub fn set_real(&mut self, var: Var, value: f64) -> Result<()> {
        self.set_value(var, CellValue::Continuous(value))
    }

    /// Write a discrete cell by item index
    pub fn set_item(&mut self, var: Var, index: usize) -> Result<()> {
        self.set_value(var, CellValue::Item(index))
    }

    /// Write a text cell
    pub fn set_text(&mut self, var: Var, text: impl Into<String>) -> Result<()> {
        self.set_value(var, CellValue::Text(text.into()))
    }

    /// Select a fuel model by code or number in a fuel-model cell
    pub fn set_fuel_model(&mut self, var: Var, name: &str) -> Result<()> {
        let index = self.fuels.index_of(name)?;
        self.set_item(var, index)
    }

    /// Select a moisture scenario by name
    pub fn set_moisture_scenario(&mut self, name: &str) -> Result<()> {
        let index = self.moistures.index_of(name)?;
        self.set_item(Var::SurfaceFuelMoisScenario, index)
    }

    /// Parse `text` into the cell named `name`
    ///
    /// Continuous cells take a number, discrete cells an item name (or fuel
    /// model number), text cells take `text` verbatim.
    pub fn set_from_str(&mut self, name: &str, text: &str) -> Result<()> {
        let id = self.cell_id(name)?;
        let decl = id.decl();
        let value = match decl.kind {
            CellKind::Continuous => {
                let v = text.trim().parse::<f64>().map_err(|_| CalcError::ValueKind {
                    cell: name.to_string(),
                    expected: CellKindTag::Continuous,
                    found: CellKindTag::Text,
                })?;
                CellValue::Continuous(v)
            }
            CellKind::Text => CellValue::Text(text.to_string()),
            CellKind::FuelModel => CellValue::Item(self.fuels.index_of(text.trim())?),
            CellKind::MoistureScenario => CellValue::Item(self.moistures.index_of(text.trim())?),
            CellKind::Discrete(items) => {
                let wanted = text.trim();
                let index = items
                    .iter()
                    .position(|item| item.eq_ignore_ascii_case(wanted))
                    .or_else(|| wanted.parse::<usize>().ok())
                    .ok_or_else(|| CalcError::ItemOutOfRange {
                        cell: name.to_string(),
                        index: items.len(),
                        len: items.len(),
                    })?;
                CellValue::Item(index)
            }
        };
        self.set_value(id, value)
    }

    /// Copy a catalog fuel model into the fuel parameter cells
    pub fn init_fuel_parms_from_model(&mut self, name: &str) -> Result<()> {
        let model = self.fuels.get_by_name(name)?.clone();
        let writes = [
            (Var::SurfaceFuelBedDepth, model.depth),
            (Var::SurfaceFuelBedMextDead, model.mext),
            (Var::SurfaceFuelHeatDead, model.heat_dead),
            (Var::SurfaceFuelHeatLive, model.heat_live),
            (Var::SurfaceFuelLoadDead1, model.load1),
            (Var::SurfaceFuelLoadDead10, model.load10),
            (Var::SurfaceFuelLoadDead100, model.load100),
            (Var::SurfaceFuelLoadLiveHerb, model.load_herb),
            (Var::SurfaceFuelLoadLiveWood, model.load_wood),
            (Var::SurfaceFuelSavrDead1, model.savr1),
            (Var::SurfaceFuelSavrLiveHerb, model.savr_herb),
            (Var::SurfaceFuelSavrLiveWood, model.savr_wood),
        ];
        for (var, value) in writes {
            self.set_real(var, value)?;
        }
        self.set_item(Var::SurfaceFuelLoadTransferEq, usize::from(model.dynamic))
    }

    /// Display string of a cell's value
    #[must_use]
    pub fn display_value(&self, id: impl Into<CellId>) -> String {
        self.cell(id).display_value()
    }

    /// Display label override set by reconfiguration
    #[must_use]
    pub fn label(&self, id: impl Into<CellId>) -> Option<&str> {
        self.state.label(id)
    }

    /// Perimeter polygon of the last containment run, in chains
    #[must_use]
    pub fn contain_polygon(&self) -> &[PolygonPoint] {
        &self.polygon
    }

    // ========================================================================
    // CATALOGS
    // ========================================================================

    /// Fuel models
    #[must_use]
    pub fn fuel_catalog(&self) -> &FuelCatalog {
        &self.fuels
    }

    /// Fuel models, for adding custom models
    pub fn fuel_catalog_mut(&mut self) -> &mut FuelCatalog {
        &mut self.fuels
    }

    /// Moisture scenarios
    #[must_use]
    pub fn moisture_catalog(&self) -> &MoistureCatalog {
        &self.moistures
    }
}

/// Read-only view of one cell.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'g> {
    id: CellId,
    decl: CellDecl,
    value: &'g CellValue,
    flags: CellFlags,
    label: Option<&'g str>,
    env: EvalEnv<'g>,
}

impl<'g> Cell<'g> {
    /// Handle
    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Worksheet name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> &'g CellValue {
        self.value
    }

    /// Native unit
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.decl.unit
    }

    /// Display decimals
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.decl.decimals
    }

    /// Configuration flags
    #[must_use]
    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Label override, if reconfiguration set one
    #[must_use]
    pub fn label(&self) -> Option<&'g str> {
        self.label
    }

    /// Value formatted for the worksheet
    ///
    /// Continuous values use the cell's decimals, discrete values show the
    /// item name.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.value {
            CellValue::Continuous(v) => format!("{:.*}", usize::from(self.decl.decimals), v),
            CellValue::Item(i) => self
                .env
                .item_name(self.decl.kind, *i)
                .map_or_else(|| i.to_string(), str::to_string),
            CellValue::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names_are_errors() {
        let graph = Graph::new().unwrap();
        assert_eq!(
            graph.cell_id("vNoSuchCell"),
            Err(CalcError::UnknownCell("vNoSuchCell".into()))
        );
        assert_eq!(
            graph.function("fNoSuchFunction"),
            Err(CalcError::UnknownFunction("fNoSuchFunction".into()))
        );
        assert_eq!(
            graph.cell_id("vSurfaceFuelLoad2").unwrap(),
            CellId::particle(ParticleAttr::Load, 2)
        );
    }

    #[test]
    fn test_display_value() {
        let mut graph = Graph::new().unwrap();
        graph.set_real(Var::SurfaceFireSpreadAtHead, 12.345).unwrap();
        assert_eq!(graph.display_value(Var::SurfaceFireSpreadAtHead), "12.3");
        graph.set_item(Var::CrownFireType, 3).unwrap();
        assert_eq!(graph.display_value(Var::CrownFireType), "Crowning");
        graph.set_fuel_model(Var::SurfaceFuelBedModel, "10").unwrap();
        assert_eq!(graph.display_value(Var::SurfaceFuelBedModel), "10");
    }

    #[test]
    fn test_set_from_str() {
        let mut graph = Graph::new().unwrap();
        graph.set_from_str("vWindSpeedAtMidflame", " 4.5 ").unwrap();
        assert_eq!(graph.real(Var::WindSpeedAtMidflame).unwrap(), 4.5);
        graph.set_from_str("vSiteAspectDirFromCompass", "sw").unwrap();
        assert_eq!(graph.value(Var::SiteAspectDirFromCompass), &CellValue::Item(10));
        assert!(graph.set_from_str("vWindSpeedAtMidflame", "fast").is_err());
    }

    #[test]
    fn test_failed_reconfigure_keeps_state() {
        let mut graph = Graph::new().unwrap();
        let before = graph.state().clone();
        let mut props = graph.properties().clone();
        props.set(
            "surfaceModuleActive",
            crate::config::PropertyValue::Int(1),
        );
        assert!(graph.set_properties(props).is_err());
        assert_eq!(graph.state(), &before);
        assert!(graph.properties().boolean("surfaceModuleActive").unwrap());
    }

    #[test]
    fn test_init_button_follows_fuel_option() {
        let mut graph = Graph::new().unwrap();
        assert!(!graph.show_init_from_fuel_model_button());
        let mut props = graph.properties().clone();
        props.select(
            &["surfaceConfFuelModels", "surfaceConfFuelParms"],
            "surfaceConfFuelParms",
        );
        graph.set_properties(props).unwrap();
        assert!(graph.show_init_from_fuel_model_button());

        graph.init_fuel_parms_from_model("4").unwrap();
        assert_eq!(graph.real(Var::SurfaceFuelBedDepth).unwrap(), 6.0);
    }
}

//! Configuration state
//!
//! The single record of everything reconfiguration decides: which functions
//! run, how each cell is flagged, which constant cells receive pinned values
//! and which display labels are overridden. It is rebuilt from scratch on
//! every reconfigure and only replaces the graph's copy when the rebuild
//! succeeds.

use rustc_hash::FxHashMap;

use super::cells::{CellId, ParticleAttr, MAX_PARTICLES};
use super::functions::{CellRef, Func, FunctionDecl};
use crate::core_types::CellValue;

/// Worksheet flags of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    /// Value does not change during evaluation
    pub constant: bool,
    /// Entered by the user
    pub input: bool,
    /// Reported to the user
    pub output: bool,
    /// Input flag forced by a reconfiguration rule, overriding derivation
    pub explicit_input: Option<bool>,
}

impl CellFlags {
    /// Hidden from the worksheet (neither entered nor reported)
    ///
    /// A masked cell may still be read and written during evaluation.
    #[must_use]
    pub fn masked(&self) -> bool {
        !self.input && !self.output
    }
}

/// Activation flags, cell flags, pins and labels for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    active: Vec<bool>,
    flags: Vec<CellFlags>,
    pins: Vec<(CellId, CellValue)>,
    labels: FxHashMap<CellId, String>,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigState {
    /// Start state: nothing active, nothing flagged, nothing pinned
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: vec![false; Func::ALL.len()],
            flags: vec![CellFlags::default(); CellId::COUNT],
            pins: Vec::new(),
            labels: FxHashMap::default(),
        }
    }

    // ------------------------------------------------------------------------
    // Functions
    // ------------------------------------------------------------------------

    /// Turn a function on
    pub fn activate(&mut self, func: Func) {
        self.active[func as usize] = true;
    }

    /// Turn a function off
    pub fn deactivate(&mut self, func: Func) {
        self.active[func as usize] = false;
    }

    /// Set a function's activation flag
    pub fn set_active(&mut self, func: Func, on: bool) {
        self.active[func as usize] = on;
    }

    /// Activation flag
    #[must_use]
    pub fn is_active(&self, func: Func) -> bool {
        self.active[func as usize]
    }

    /// Active functions in declaration order
    pub fn active_functions(&self) -> impl Iterator<Item = Func> + '_ {
        Func::ALL.iter().copied().filter(|f| self.is_active(*f))
    }

    // ------------------------------------------------------------------------
    // Cells
    // ------------------------------------------------------------------------

    /// Flags of a cell
    #[must_use]
    pub fn flags(&self, cell: impl Into<CellId>) -> CellFlags {
        self.flags[cell.into().index()]
    }

    /// Mark a cell constant or variable
    pub fn set_constant(&mut self, cell: impl Into<CellId>, on: bool) {
        self.flags[cell.into().index()].constant = on;
    }

    /// Force the user-input flag, bypassing derivation
    pub fn set_user_input(&mut self, cell: impl Into<CellId>, on: bool) {
        self.flags[cell.into().index()].explicit_input = Some(on);
    }

    /// Set the user-output flag
    pub fn set_output(&mut self, cell: impl Into<CellId>, on: bool) {
        self.flags[cell.into().index()].output = on;
    }

    /// Make a cell constant with a fixed value written at every evaluation
    ///
    /// Pinning the same cell twice keeps the last value.
    pub fn pin(&mut self, cell: impl Into<CellId>, value: CellValue) {
        let cell = cell.into();
        self.flags[cell.index()].constant = true;
        self.pins.retain(|(id, _)| *id != cell);
        self.pins.push((cell, value));
    }

    /// Remove a pinned value, leaving the cell's constant flag alone
    pub fn unpin(&mut self, cell: impl Into<CellId>) {
        let cell = cell.into();
        self.pins.retain(|(id, _)| *id != cell);
    }

    /// Pinned values in pin order
    #[must_use]
    pub fn pins(&self) -> &[(CellId, CellValue)] {
        &self.pins
    }

    /// Override a cell's display label
    pub fn set_label(&mut self, cell: impl Into<CellId>, label: impl Into<String>) {
        self.labels.insert(cell.into(), label.into());
    }

    /// Display label override
    #[must_use]
    pub fn label(&self, cell: impl Into<CellId>) -> Option<&str> {
        self.labels.get(&cell.into()).map(String::as_str)
    }

    /// Cells flagged as user inputs
    pub fn inputs(&self) -> impl Iterator<Item = CellId> + '_ {
        CellId::all().filter(|id| self.flags[id.index()].input)
    }

    /// Cells flagged as user outputs
    pub fn outputs(&self) -> impl Iterator<Item = CellId> + '_ {
        CellId::all().filter(|id| self.flags[id.index()].output)
    }

    /// Derive user-input flags from the active functions
    ///
    /// Walking back from every user output through the writers of the cells
    /// each needed function reads, a cell is an input when a needed function
    /// reads it, no active function writes or refines it, and it is not
    /// constant. An explicit flag set by a reconfiguration rule wins over the
    /// derived one.
    pub fn derive_inputs(&mut self, table: &[FunctionDecl]) {
        let active: Vec<&FunctionDecl> =
            table.iter().filter(|d| self.is_active(d.func)).collect();
        let mut writers: Vec<Vec<usize>> = vec![Vec::new(); CellId::COUNT];
        for (i, decl) in active.iter().enumerate() {
            for w in decl.writes.iter().chain(decl.refines) {
                for id in w.cells() {
                    writers[id.index()].push(i);
                }
            }
        }

        let mut stack: Vec<usize> = CellId::all()
            .filter(|id| self.flags[id.index()].output)
            .flat_map(|id| writers[id.index()].iter().copied())
            .collect();
        let mut needed = vec![false; active.len()];
        let mut read = vec![false; CellId::COUNT];
        while let Some(i) = stack.pop() {
            if needed[i] {
                continue;
            }
            needed[i] = true;
            for r in active[i].reads {
                for id in r.cells() {
                    read[id.index()] = true;
                    if !self.flags[id.index()].constant {
                        stack.extend(writers[id.index()].iter().copied());
                    }
                }
            }
        }

        for (i, flags) in self.flags.iter_mut().enumerate() {
            flags.input = flags
                .explicit_input
                .unwrap_or(read[i] && writers[i].is_empty() && !flags.constant);
        }
    }
}

impl CellRef {
    /// Cell handles this reference covers
    pub fn cells(self) -> impl Iterator<Item = CellId> {
        let (first, count) = match self {
            CellRef::Var(var) => (CellId::from(var), 1),
            CellRef::Particles(attr) => (CellId::particle(attr, 0), MAX_PARTICLES),
        };
        (first.index()..first.index() + count).filter_map(CellId::from_index)
    }

    /// Reference to one particle attribute array
    #[must_use]
    pub const fn particles(attr: ParticleAttr) -> CellRef {
        CellRef::Particles(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::cells::Var;

    #[test]
    fn test_pin_marks_constant_and_replaces() {
        let mut state = ConfigState::new();
        state.pin(Var::WindAdjFactor, CellValue::Continuous(1.0));
        state.pin(Var::WindAdjFactor, CellValue::Continuous(0.5));
        assert!(state.flags(Var::WindAdjFactor).constant);
        assert_eq!(state.pins().len(), 1);
        assert_eq!(state.pins()[0].1, CellValue::Continuous(0.5));
    }

    #[test]
    fn test_masked_cells() {
        let mut state = ConfigState::new();
        assert!(state.flags(Var::SiteSlopeFraction).masked());
        state.set_output(Var::SiteSlopeFraction, true);
        assert!(!state.flags(Var::SiteSlopeFraction).masked());
    }

    #[test]
    fn test_particle_ref_covers_eight_cells() {
        let cells: Vec<_> = CellRef::particles(ParticleAttr::Mois).cells().collect();
        assert_eq!(cells.len(), MAX_PARTICLES);
        assert_eq!(cells[0].name(), "vSurfaceFuelMois0");
        assert_eq!(cells[7].name(), "vSurfaceFuelMois7");
    }
}

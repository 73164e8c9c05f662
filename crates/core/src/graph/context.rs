//! Evaluation context
//!
//! Procedures see the cell store only through an [`EvalContext`]: typed reads
//! and writes by [`Var`] or particle index, the configuration map and the
//! fuel and moisture catalogs. Writes are checked against the cell's kind and
//! item list so a procedure can never leave a cell in a state `set_value`
//! would have rejected.

use super::cells::{CellId, ParticleAttr, Var};
use crate::config::PropertyDict;
use crate::core_types::{CellKind, CellKindTag, CellValue};
use crate::error::{CalcError, Result};
use crate::fuel::{FuelCatalog, MoistureCatalog};

/// Point of a containment perimeter polygon, in chains from the ignition point.
pub type PolygonPoint = (f64, f64);

/// Read-only collaborators shared by every procedure of one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvalEnv<'a> {
    /// Configuration map the graph was last reconfigured with
    pub props: &'a PropertyDict,
    /// Fuel models addressable by the fuel-model selector cells
    pub fuels: &'a FuelCatalog,
    /// Moisture scenarios addressable by the scenario selector cell
    pub moistures: &'a MoistureCatalog,
}

impl EvalEnv<'_> {
    /// Number of items a discrete cell offers, `None` for other kinds
    #[must_use]
    pub fn item_count(&self, kind: CellKind) -> Option<usize> {
        match kind {
            CellKind::Discrete(items) => Some(items.len()),
            CellKind::FuelModel => Some(self.fuels.len()),
            CellKind::MoistureScenario => Some(self.moistures.len()),
            CellKind::Continuous | CellKind::Text => None,
        }
    }

    /// Display name of item `index` of a discrete cell
    #[must_use]
    pub fn item_name(&self, kind: CellKind, index: usize) -> Option<&str> {
        match kind {
            CellKind::Discrete(items) => items.get(index).copied(),
            CellKind::FuelModel => self.fuels.get(index).map(|m| m.code.as_str()),
            CellKind::MoistureScenario => self.moistures.get(index).map(|s| s.name.as_str()),
            CellKind::Continuous | CellKind::Text => None,
        }
    }

    /// Check that `value` may be stored in `cell`
    pub fn validate(&self, cell: CellId, value: &CellValue) -> Result<()> {
        let decl = cell.decl();
        let expected = decl.kind.tag();
        if value.tag() != expected {
            return Err(CalcError::ValueKind {
                cell: decl.name.to_string(),
                expected,
                found: value.tag(),
            });
        }
        if let (CellValue::Item(index), Some(len)) = (value, self.item_count(decl.kind)) {
            if *index >= len {
                return Err(CalcError::ItemOutOfRange {
                    cell: decl.name.to_string(),
                    index: *index,
                    len,
                });
            }
        }
        Ok(())
    }
}

/// Mutable view of the cell store handed to each procedure.
pub struct EvalContext<'a> {
    values: &'a mut [CellValue],
    env: EvalEnv<'a>,
    polygon: Option<&'a mut Vec<PolygonPoint>>,
}

impl<'a> EvalContext<'a> {
    /// Wrap a cell store
    ///
    /// `polygon` receives the containment perimeter; pass `None` to discard it.
    pub fn new(
        values: &'a mut [CellValue],
        env: EvalEnv<'a>,
        polygon: Option<&'a mut Vec<PolygonPoint>>,
    ) -> Self {
        Self {
            values,
            env,
            polygon,
        }
    }

    /// Shared collaborators
    #[must_use]
    pub fn env(&self) -> EvalEnv<'a> {
        self.env
    }

    /// Configuration map
    #[must_use]
    pub fn props(&self) -> &'a PropertyDict {
        self.env.props
    }

    /// Owned copy of every cell value
    #[must_use]
    pub fn snapshot(&self) -> Vec<CellValue> {
        self.values.to_vec()
    }

    /// Context over a scratch store, sharing this context's collaborators
    ///
    /// The scratch context never receives a containment polygon.
    pub fn scratch<'b>(&self, values: &'b mut [CellValue]) -> EvalContext<'b>
    where
        'a: 'b,
    {
        EvalContext {
            values,
            env: self.env,
            polygon: None,
        }
    }

    // ------------------------------------------------------------------------
    // Generic access
    // ------------------------------------------------------------------------

    /// Current value of any cell
    #[inline]
    #[must_use]
    pub fn value(&self, cell: impl Into<CellId>) -> &CellValue {
        &self.values[cell.into().index()]
    }

    /// Store a value after checking its kind and range
    pub fn set_value(&mut self, cell: impl Into<CellId>, value: CellValue) -> Result<()> {
        let cell = cell.into();
        self.env.validate(cell, &value)?;
        self.values[cell.index()] = value;
        Ok(())
    }

    fn real_at(&self, cell: CellId) -> Result<f64> {
        let value = &self.values[cell.index()];
        value.as_real().ok_or_else(|| CalcError::ValueKind {
            cell: cell.name().to_string(),
            expected: CellKindTag::Continuous,
            found: value.tag(),
        })
    }

    fn item_at(&self, cell: CellId) -> Result<usize> {
        let value = &self.values[cell.index()];
        value.as_item().ok_or_else(|| CalcError::ValueKind {
            cell: cell.name().to_string(),
            expected: CellKindTag::Discrete,
            found: value.tag(),
        })
    }

    // ------------------------------------------------------------------------
    // Scalar cells
    // ------------------------------------------------------------------------

    /// Continuous value of a scalar cell
    pub fn real(&self, var: Var) -> Result<f64> {
        self.real_at(var.into())
    }

    /// Item index of a discrete scalar cell
    pub fn item(&self, var: Var) -> Result<usize> {
        self.item_at(var.into())
    }

    /// Text of a text cell
    pub fn text(&self, var: Var) -> Result<&str> {
        let value = &self.values[CellId::from(var).index()];
        value.as_text().ok_or_else(|| CalcError::ValueKind {
            cell: var.name().to_string(),
            expected: CellKindTag::Text,
            found: value.tag(),
        })
    }

    /// True when a yes/no cell holds "Yes"
    pub fn flag(&self, var: Var) -> Result<bool> {
        Ok(self.item(var)? != 0)
    }

    /// Write a continuous scalar cell
    pub fn set_real(&mut self, var: Var, value: f64) -> Result<()> {
        self.set_value(var, CellValue::Continuous(value))
    }

    /// Write a discrete scalar cell
    pub fn set_item(&mut self, var: Var, index: usize) -> Result<()> {
        self.set_value(var, CellValue::Item(index))
    }

    /// Write a yes/no cell
    pub fn set_flag(&mut self, var: Var, on: bool) -> Result<()> {
        self.set_item(var, usize::from(on))
    }

    // ------------------------------------------------------------------------
    // Particle arrays
    // ------------------------------------------------------------------------

    /// Continuous value of particle `index` of `attr`
    pub fn particle(&self, attr: ParticleAttr, index: usize) -> Result<f64> {
        self.real_at(CellId::particle(attr, index))
    }

    /// Life category index of particle `index`
    pub fn particle_life(&self, index: usize) -> Result<usize> {
        self.item_at(CellId::particle(ParticleAttr::Life, index))
    }

    /// Write a continuous particle attribute
    pub fn set_particle(&mut self, attr: ParticleAttr, index: usize, value: f64) -> Result<()> {
        self.set_value(CellId::particle(attr, index), CellValue::Continuous(value))
    }

    /// Write a particle life category
    pub fn set_particle_life(&mut self, index: usize, life: usize) -> Result<()> {
        self.set_value(
            CellId::particle(ParticleAttr::Life, index),
            CellValue::Item(life),
        )
    }

    // ------------------------------------------------------------------------
    // Side channels
    // ------------------------------------------------------------------------

    /// Hand the containment perimeter polygon to the graph
    pub fn set_contain_polygon(&mut self, points: Vec<PolygonPoint>) {
        if let Some(polygon) = self.polygon.as_deref_mut() {
            *polygon = points;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::cells::CellId;

    fn store() -> Vec<CellValue> {
        CellId::all().map(|id| id.decl().kind.initial_value()).collect()
    }

    #[test]
    fn test_writes_are_kind_checked() {
        let props = PropertyDict::default();
        let fuels = FuelCatalog::standard();
        let moistures = MoistureCatalog::standard();
        let env = EvalEnv {
            props: &props,
            fuels: &fuels,
            moistures: &moistures,
        };
        let mut values = store();
        let mut ctx = EvalContext::new(&mut values, env, None);

        ctx.set_real(Var::SiteSlopeFraction, 0.3).unwrap();
        assert_eq!(ctx.real(Var::SiteSlopeFraction).unwrap(), 0.3);
        assert!(matches!(
            ctx.set_real(Var::CrownFireType, 1.0),
            Err(CalcError::ValueKind { .. })
        ));
        assert!(matches!(
            ctx.set_item(Var::CrownFireType, 4),
            Err(CalcError::ItemOutOfRange { len: 4, .. })
        ));
        assert!(ctx.set_item(Var::SurfaceFuelBedModel, fuels.len() - 1).is_ok());
    }

    #[test]
    fn test_scratch_is_isolated() {
        let props = PropertyDict::default();
        let fuels = FuelCatalog::standard();
        let moistures = MoistureCatalog::standard();
        let env = EvalEnv {
            props: &props,
            fuels: &fuels,
            moistures: &moistures,
        };
        let mut values = store();
        let mut polygon = Vec::new();
        {
            let ctx = EvalContext::new(&mut values, env, Some(&mut polygon));
            let mut copy = ctx.snapshot();
            let mut scratch = ctx.scratch(&mut copy);
            scratch.set_real(Var::WindAdjFactor, 0.4).unwrap();
            scratch.set_contain_polygon(vec![(1.0, 1.0)]);
            assert_eq!(ctx.real(Var::WindAdjFactor).unwrap(), 0.0);
        }
        assert!(polygon.is_empty());
    }
}

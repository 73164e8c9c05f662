//! Evaluation order
//!
//! Builds a dependency graph over the active functions from their read, write
//! and refine sets and sorts it with Kahn's algorithm. Ties between ready
//! functions are broken by declaration order so the order is reproducible.
//!
//! # Edges
//! ```text
//! writer W of c, reader X of c            W -> X
//! writer W of c, refiner R of c           W -> R   unless W is downstream of R
//! refiner R of c, reader X of c           R -> X   unless X is upstream of R
//! ```
//! Cells flagged constant contribute no edges.

use std::collections::BTreeSet;

use super::cells::CellId;
use super::functions::{FunctionDecl, FUNCTIONS};
use super::state::ConfigState;
use crate::error::{CalcError, Result};

/// Order the active functions of `state`
pub fn evaluation_order(state: &ConfigState) -> Result<Vec<&'static FunctionDecl>> {
    let active: Vec<&'static FunctionDecl> = FUNCTIONS
        .iter()
        .filter(|d| state.is_active(d.func))
        .collect();
    let n = active.len();

    // ------------------------------------------------------------------------
    // Writers and refiners per cell
    // ------------------------------------------------------------------------
    let mut writer: Vec<Option<usize>> = vec![None; CellId::COUNT];
    let mut refiner: Vec<Option<usize>> = vec![None; CellId::COUNT];
    for (i, decl) in active.iter().enumerate() {
        for (set, slots) in [(decl.writes, &mut writer), (decl.refines, &mut refiner)] {
            for id in set.iter().flat_map(|r| r.cells()) {
                if state.flags(id).constant {
                    continue;
                }
                if let Some(first) = slots[id.index()] {
                    return Err(CalcError::ConflictingWriters {
                        cell: id.name().to_string(),
                        first: active[first].name.to_string(),
                        second: decl.name.to_string(),
                    });
                }
                slots[id.index()] = Some(i);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Regular edges, writer -> reader
    // ------------------------------------------------------------------------
    let mut succ: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for (x, decl) in active.iter().enumerate() {
        for id in decl.reads.iter().flat_map(|r| r.cells()) {
            if state.flags(id).constant {
                continue;
            }
            if let Some(w) = writer[id.index()] {
                if w != x {
                    succ[w].insert(x);
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Refine edges
    // ------------------------------------------------------------------------
    let refined: Vec<(usize, usize)> = (0..CellId::COUNT)
        .filter_map(|c| refiner[c].map(|r| (c, r)))
        .collect();

    for &(c, r) in &refined {
        if let Some(w) = writer[c] {
            if w != r && !reaches(&succ, r, w) {
                succ[w].insert(r);
            }
        }
    }

    let regular = succ.clone();
    for &(c, r) in &refined {
        for (x, decl) in active.iter().enumerate() {
            if x == r || !decl.reads.iter().flat_map(|cr| cr.cells()).any(|id| id.index() == c) {
                continue;
            }
            if !reaches(&regular, x, r) {
                succ[r].insert(x);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Kahn
    // ------------------------------------------------------------------------
    let mut indegree = vec![0_usize; n];
    for targets in &succ {
        for &t in targets {
            indegree[t] += 1;
        }
    }
    let mut ready: BTreeSet<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(i) = ready.pop_first() {
        order.push(active[i]);
        for &t in &succ[i] {
            indegree[t] -= 1;
            if indegree[t] == 0 {
                ready.insert(t);
            }
        }
    }

    if order.len() < n {
        let stuck = (0..n)
            .filter(|&i| indegree[i] > 0)
            .map(|i| active[i].name.to_string())
            .collect();
        return Err(CalcError::DependencyCycle(stuck));
    }
    Ok(order)
}

/// True when `to` is reachable from `from` along `succ`
fn reaches(succ: &[BTreeSet<usize>], from: usize, to: usize) -> bool {
    let mut seen = vec![false; succ.len()];
    let mut stack = vec![from];
    while let Some(i) = stack.pop() {
        if i == to {
            return true;
        }
        if std::mem::replace(&mut seen[i], true) {
            continue;
        }
        stack.extend(succ[i].iter().copied());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::cells::Var;
    use crate::graph::functions::Func;

    fn position(order: &[&FunctionDecl], func: Func) -> usize {
        order.iter().position(|d| d.func == func).unwrap()
    }

    #[test]
    fn test_writers_run_before_readers() {
        let mut state = ConfigState::new();
        for func in [
            Func::WindSpeedAtMidflame,
            Func::WindSpeedAt20Ft,
            Func::WindAdjFactor,
        ] {
            state.activate(func);
        }
        let order = evaluation_order(&state).unwrap();
        assert!(position(&order, Func::WindSpeedAt20Ft) < position(&order, Func::WindSpeedAtMidflame));
        assert!(position(&order, Func::WindAdjFactor) < position(&order, Func::WindSpeedAtMidflame));
    }

    #[test]
    fn test_two_writers_conflict() {
        let mut state = ConfigState::new();
        state.activate(Func::TreeBarkThicknessBehave);
        state.activate(Func::TreeBarkThicknessFofem);
        assert!(matches!(
            evaluation_order(&state),
            Err(CalcError::ConflictingWriters { .. })
        ));
    }

    #[test]
    fn test_constant_cells_do_not_conflict() {
        let mut state = ConfigState::new();
        state.activate(Func::TreeBarkThicknessBehave);
        state.activate(Func::TreeBarkThicknessFofem);
        state.set_constant(Var::TreeBarkThickness, true);
        assert!(evaluation_order(&state).is_ok());
    }

    #[test]
    fn test_refiner_sits_between_writer_and_readers() {
        let mut state = ConfigState::new();
        for func in [
            Func::WindSpeedAt20Ft,
            Func::WindAdjFactor,
            Func::WindSpeedAtMidflame,
            Func::SurfaceFuelBedWeighted,
            Func::SurfaceFireScorchHtFromFliAtVector,
        ] {
            state.activate(func);
        }
        let order = evaluation_order(&state).unwrap();
        let weighted = position(&order, Func::SurfaceFuelBedWeighted);
        assert!(position(&order, Func::WindSpeedAtMidflame) < weighted);
        assert!(position(&order, Func::WindAdjFactor) < weighted);
        assert!(weighted < position(&order, Func::SurfaceFireScorchHtFromFliAtVector));
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut state = ConfigState::new();
        state.activate(Func::TreeCrownBaseHt);
        state.activate(Func::TreeCrownRatio);
        match evaluation_order(&state) {
            Err(CalcError::DependencyCycle(names)) => {
                assert!(names.contains(&"fTreeCrownBaseHt".to_string()));
                assert!(names.contains(&"fTreeCrownRatio".to_string()));
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }
}

//! Containment

use super::select_outputs;
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const OUTPUTS: &[(Var, &str)] = &[
    (Var::ContainLine, "containCalcLine"),
    (Var::ContainResourcesUsed, "containCalcResourcesUsed"),
    (Var::ContainSize, "containCalcSize"),
    (Var::ContainStatus, "containCalcStatus"),
    (Var::ContainTime, "containCalcTime"),
    (Var::ContainCost, "containCalcCost"),
    (Var::ContainDiagram, "containCalcDiagram"),
    (Var::ContainAttackPerimeter, "containCalcAttackPerimeter"),
    (Var::ContainAttackSize, "containCalcAttackSize"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("containModuleActive")? {
        return Ok(());
    }
    let single = props.boolean("containConfResourcesSingle")?;
    state.set_active(Func::ContainFF, props.boolean("containConfResourcesMultiple")?);
    state.set_active(Func::ContainFFSingle, single);
    state.set_constant(Var::ContainResourceName, single);

    let limited = props.boolean("containConfLimitDistOn")?;
    state.set_constant(Var::ContainLimitDist, !limited);
    state.set_user_input(Var::ContainLimitDist, limited);

    select_outputs(props, state, OUTPUTS)?;
    let costs = state.flags(Var::ContainCost).output;
    state.set_constant(Var::ContainResourceBaseCost, !costs);
    state.set_constant(Var::ContainResourceHourCost, !costs);

    // Report rate and shape come from the surface run when there is one
    if props.boolean("surfaceModuleActive")? {
        state.activate(Func::ContainFFReportRatio);
    }
    if props.boolean("sizeModuleActive")? {
        state.activate(Func::ContainFFReportRatio);
        state.activate(Func::ContainFFReportSize);
    }
    state.activate(Func::ContainFFReportSpread);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_resource_mode() {
        let mut props = PropertyDict::default();
        props.set_bool("containModuleActive", true);
        props.select(
            &["containConfResourcesMultiple", "containConfResourcesSingle"],
            "containConfResourcesSingle",
        );
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(state.is_active(Func::ContainFFSingle));
        assert!(!state.is_active(Func::ContainFF));
        assert!(state.flags(Var::ContainResourceName).constant);
        assert!(state.flags(Var::ContainLimitDist).constant);
        assert!(state.flags(Var::ContainResourceBaseCost).constant);
        assert!(state.is_active(Func::ContainFFReportSpread));
        assert!(state.is_active(Func::ContainFFReportRatio));
        assert!(!state.is_active(Func::ContainFFReportSize));
    }

    #[test]
    fn test_cost_output_opens_cost_inputs() {
        let mut props = PropertyDict::default();
        props.set_bool("containModuleActive", true);
        props.set_bool("containCalcCost", true);
        props.set_bool("containConfLimitDistOn", true);
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(!state.flags(Var::ContainResourceBaseCost).constant);
        assert!(!state.flags(Var::ContainResourceHourCost).constant);
        assert_eq!(state.flags(Var::ContainLimitDist).explicit_input, Some(true));
    }
}

//! Tree mortality

use super::{activate_all, deactivate_all, select_outputs};
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const OUTPUTS: &[(Var, &str)] = &[
    (Var::TreeBarkThickness, "mortalityCalcBarkThickness"),
    (Var::TreeCrownLengScorchedAtVector, "mortalityCalcTreeCrownLengScorched"),
    (Var::TreeCrownVolScorchedAtVector, "mortalityCalcTreeCrownVolScorched"),
    (Var::TreeMortalityCountAtVector, "mortalityCalcTreeMortalityCount"),
    (Var::TreeMortalityRateAtVector, "mortalityCalcTreeMortalityRate"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("mortalityModuleActive")? {
        return Ok(());
    }
    // Crown base height is entered; deriving it would cycle with crown ratio
    deactivate_all(
        state,
        &[
            Func::TreeCrownBaseHt,
            Func::TreeMortalityRateFofemAtVector,
            Func::TreeMortalityRateFofem2AtVector,
        ],
    );
    activate_all(
        state,
        &[
            Func::TreeCrownVolScorchedAtVector,
            Func::TreeMortalityCountAtVector,
            Func::TreeMortalityRateFofemHoodAtVector,
            Func::TreeBarkThicknessFofem,
        ],
    );
    if props.boolean("crownModuleActive")? {
        state.activate(Func::TreeCrownRatio);
    }
    select_outputs(props, state, OUTPUTS)?;
    if props.boolean("surfaceModuleActive")? && !props.boolean("scorchModuleActive")? {
        state.activate(Func::SurfaceFireScorchHtFromFliAtVector);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mortality_needs_scorch_from_surface() {
        let mut props = PropertyDict::default();
        props.set_bool("mortalityModuleActive", true);
        let mut state = ConfigState::new();
        state.activate(Func::TreeCrownBaseHt);
        apply(&props, &mut state).unwrap();
        assert!(!state.is_active(Func::TreeCrownBaseHt));
        assert!(!state.is_active(Func::TreeCrownRatio));
        assert!(state.is_active(Func::SurfaceFireScorchHtFromFliAtVector));
        assert!(state.is_active(Func::TreeMortalityRateFofemHoodAtVector));
    }
}

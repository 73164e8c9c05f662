//! Spotting distance

use super::{activate_all, select_outputs, wind_at_20ft_for_10m};
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const OUTPUTS: &[(Var, &str)] = &[
    (Var::SpotDistBurningPile, "spotCalcDistBurningPile"),
    (Var::SpotCoverHtBurningPile, "spotCalcCoverHtBurningPile"),
    (Var::SpotFirebrandHtBurningPile, "spotCalcFirebrandHtBurningPile"),
    (Var::SpotFlatDistBurningPile, "spotCalcFlatDistBurningPile"),
    (Var::SpotDistSurfaceFire, "spotCalcDistSurfaceFire"),
    (Var::SpotCoverHtSurfaceFire, "spotCalcCoverHtSurfaceFire"),
    (Var::SpotFirebrandDriftSurfaceFire, "spotCalcFirebrandDriftSurfaceFire"),
    (Var::SpotFirebrandHtSurfaceFire, "spotCalcFirebrandHtSurfaceFire"),
    (Var::SpotFlatDistSurfaceFire, "spotCalcFlatDistSurfaceFire"),
    (Var::SpotDistTorchingTrees, "spotCalcDistTorchingTrees"),
    (Var::SpotCoverHtTorchingTrees, "spotCalcCoverHtTorchingTrees"),
    (Var::SpotFlameDurTorchingTrees, "spotCalcFlameDurTorchingTrees"),
    (Var::SpotFlameHtTorchingTrees, "spotCalcFlameHtTorchingTrees"),
    (Var::SpotFlameRatioTorchingTrees, "spotCalcFlameRatioTorchingTrees"),
    (Var::SpotFirebrandHtTorchingTrees, "spotCalcFirebrandHtTorchingTrees"),
    (Var::SpotFlatDistTorchingTrees, "spotCalcFlatDistTorchingTrees"),
];

const MAP_OUTPUTS: &[(Var, &str)] = &[
    (Var::SpotMapDistBurningPile, "spotCalcDistBurningPile"),
    (Var::SpotMapDistSurfaceFire, "spotCalcDistSurfaceFire"),
    (Var::SpotMapDistTorchingTrees, "spotCalcDistTorchingTrees"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("spotModuleActive")? {
        return Ok(());
    }
    activate_all(
        state,
        &[Func::SpotDistBurningPile, Func::SpotDistSurfaceFire, Func::SpotDistTorchingTrees],
    );
    if !props.boolean("surfaceModuleActive")? {
        wind_at_20ft_for_10m(props, state)?;
    }
    select_outputs(props, state, OUTPUTS)?;
    if props.boolean("mapCalcDist")? {
        activate_all(
            state,
            &[
                Func::MapScale,
                Func::SpotMapDistBurningPile,
                Func::SpotMapDistSurfaceFire,
                Func::SpotMapDistTorchingTrees,
            ],
        );
        select_outputs(props, state, MAP_OUTPUTS)?;
    }
    Ok(())
}

//! Fire size

use super::{activate_all, select_outputs};
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const FUNCTIONS: &[Func] = &[
    Func::SurfaceFireArea,
    Func::SurfaceFireDistAtBack,
    Func::SurfaceFireDistAtHead,
    Func::SurfaceFireEccentricity,
    Func::SurfaceFireLengDist,
    Func::SurfaceFireLengMapDist,
    Func::SurfaceFireLengthToWidth,
    Func::SurfaceFireMapDistAtBack,
    Func::SurfaceFireMapDistAtHead,
    Func::SurfaceFirePerimeter,
    Func::SurfaceFireShapeDiagram,
    Func::SurfaceFireSpreadAtBack,
    Func::SurfaceFireWidthDist,
    Func::SurfaceFireWidthMapDist,
];

const OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFireArea, "sizeCalcFireArea"),
    (Var::SurfaceFireDistAtBack, "sizeCalcFireDistAtBack"),
    (Var::SurfaceFireDistAtHead, "sizeCalcFireDistAtFront"),
    (Var::SurfaceFireLengthToWidth, "sizeCalcFireLengToWidth"),
    (Var::SurfaceFireLengDist, "sizeCalcFireLengDist"),
    (Var::SurfaceFirePerimeter, "sizeCalcFirePerimeter"),
    (Var::SurfaceFireWidthDist, "sizeCalcFireWidthDist"),
    (Var::SurfaceFireShapeDiagram, "sizeCalcFireShapeDiagram"),
];

/// Map distances reported alongside their ground distances
const MAP_OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFireMapDistAtBack, "sizeCalcFireDistAtBack"),
    (Var::SurfaceFireMapDistAtHead, "sizeCalcFireDistAtFront"),
    (Var::SurfaceFireLengMapDist, "sizeCalcFireLengDist"),
    (Var::SurfaceFireWidthMapDist, "sizeCalcFireWidthDist"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("sizeModuleActive")? {
        return Ok(());
    }
    activate_all(state, FUNCTIONS);
    select_outputs(props, state, OUTPUTS)?;
    if props.boolean("mapCalcDist")? {
        state.activate(Func::MapScale);
        select_outputs(props, state, MAP_OUTPUTS)?;
    }
    Ok(())
}

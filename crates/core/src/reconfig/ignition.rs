//! Ignition probability

use super::{activate_all, select_outputs};
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const OUTPUTS: &[(Var, &str)] = &[
    (Var::IgnitionFirebrandProb, "ignitionCalcIgnitionFirebrandProb"),
    (Var::IgnitionLightningProb, "ignitionCalcIgnitionLightningProb"),
    (Var::SurfaceFuelTemp, "ignitionCalcFuelTemp"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("ignitionModuleActive")? {
        return Ok(());
    }
    activate_all(
        state,
        &[Func::IgnitionFirebrandProb, Func::IgnitionLightningProb, Func::SurfaceFuelTemp],
    );
    select_outputs(props, state, OUTPUTS)?;
    if props.boolean("surfaceModuleActive")? {
        // Fuel moistures come from the surface inputs
        activate_all(
            state,
            &[
                Func::IgnitionFirebrandFuelMoisFromDead1Hr,
                Func::IgnitionLightningFuelMoisFromDead100Hr,
            ],
        );
    }
    Ok(())
}

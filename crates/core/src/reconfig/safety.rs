//! Safety zone

use super::activate_all;
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("safetyModuleActive")? {
        return Ok(());
    }
    let radius = props.boolean("safetyCalcRadius")?;
    let sep_dist = props.boolean("safetyCalcSepDist")?;
    let size = props.boolean("safetyCalcSize")?;
    state.set_output(Var::SafetyZoneRadius, radius);
    state.set_output(Var::SafetyZoneSepDist, sep_dist);
    state.set_output(Var::SafetyZoneSize, size);
    if radius || size {
        activate_all(state, &[Func::SafetyZoneSepDist, Func::SafetyZoneRadius]);
    } else if sep_dist {
        state.activate(Func::SafetyZoneSepDist);
    }

    // Separation distance needs the flame length at the head, whatever the
    // spread direction option
    if props.boolean("surfaceModuleActive")? {
        state.activate(Func::SurfaceFireFlameLengAtHead);
        state.set_user_input(Var::SurfaceFireFlameLengAtHead, false);
    }
    Ok(())
}

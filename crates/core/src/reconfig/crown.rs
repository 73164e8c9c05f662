//! Crown fire

use super::{activate_all, select_outputs, wind_at_20ft_for_10m};
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const FUNCTIONS: &[Func] = &[
    Func::CrownFireActiveCrown,
    Func::CrownFireActiveRatio,
    Func::CrownFireArea,
    Func::CrownFireCritCrownSpreadRate,
    Func::CrownFireCritSurfFireInt,
    Func::CrownFireCritSurfFlameLeng,
    Func::CrownFireLengthToWidth,
    Func::CrownFirePerimeter,
    Func::CrownFireSpreadDist,
    Func::CrownFireSpreadMapDist,
    Func::CrownFireSpreadRate,
    Func::CrownFireTransToCrown,
    Func::CrownFireType,
    Func::CrownFireFlameLength,
    Func::CrownFireFuelLoad,
    Func::CrownFireHeatPerUnitArea,
    Func::CrownFireHeatPerUnitAreaCanopy,
    Func::CrownFireLineIntensity,
    Func::CrownFirePowerOfFire,
    Func::CrownFirePowerOfWind,
    Func::CrownFirePowerRatio,
    Func::CrownFireWindDriven,
];

const OUTPUTS: &[(Var, &str)] = &[
    (Var::CrownFireActiveCrown, "crownCalcActiveCrown"),
    (Var::CrownFireActiveRatio, "crownCalcActiveRatio"),
    (Var::CrownFireArea, "crownCalcFireArea"),
    (Var::CrownFireCritCrownSpreadRate, "crownCalcCriticalCrownSpreadRate"),
    (Var::CrownFireCritSurfFireInt, "crownCalcCriticalSurfaceIntensity"),
    (Var::CrownFireCritSurfFlameLeng, "crownCalcCriticalSurfaceFlameLeng"),
    (Var::CrownFireFlameLeng, "crownCalcFlameLeng"),
    (Var::CrownFireFuelLoad, "crownCalcFuelLoad"),
    (Var::CrownFireHeatPerUnitArea, "crownCalcHeatPerUnitArea"),
    (Var::CrownFireHeatPerUnitAreaCanopy, "crownCalcHeatPerUnitAreaCanopy"),
    (Var::CrownFireLengthToWidth, "crownCalcFireLengthToWidth"),
    (Var::CrownFireLineInt, "crownCalcFireLineInt"),
    (Var::CrownFirePerimeter, "crownCalcFirePerimeter"),
    (Var::CrownFirePowerOfFire, "crownCalcPowerOfFire"),
    (Var::CrownFirePowerOfWind, "crownCalcPowerOfWind"),
    (Var::CrownFirePowerRatio, "crownCalcPowerRatio"),
    (Var::CrownFireSpreadDist, "crownCalcCrownSpreadDist"),
    (Var::CrownFireSpreadRate, "crownCalcCrownSpreadRate"),
    (Var::CrownFireTransRatio, "crownCalcTransitionRatio"),
    (Var::CrownFireTransToCrown, "crownCalcTransitionToCrown"),
    (Var::CrownFireType, "crownCalcCrownFireType"),
    (Var::CrownFireWindDriven, "crownCalcWindDriven"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("crownModuleActive")? {
        return Ok(());
    }
    activate_all(state, FUNCTIONS);

    // Transition ratio: from the surface run's fireline intensity, or from
    // whichever surface result the user enters
    if props.boolean("surfaceModuleActive")? {
        state.activate(Func::CrownFireTransRatioFromFireIntAtVector);
    } else {
        if props.boolean("crownConfUseFlameLeng")? {
            state.activate(Func::CrownFireTransRatioFromFlameLengAtVector);
        } else {
            state.activate(Func::CrownFireTransRatioFromFireIntAtVector);
        }
        wind_at_20ft_for_10m(props, state)?;
    }

    select_outputs(props, state, OUTPUTS)?;
    if props.boolean("mapCalcDist")? {
        state.activate(Func::MapScale);
        state.set_output(Var::CrownFireSpreadMapDist, props.boolean("crownCalcCrownSpreadDist")?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_ratio_source() {
        let mut props = PropertyDict::default();
        props.set_bool("crownModuleActive", true);
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(state.is_active(Func::CrownFireTransRatioFromFireIntAtVector));
        assert!(!state.is_active(Func::CrownFireTransRatioFromFlameLengAtVector));

        props.set_bool("surfaceModuleActive", false);
        props.select(&["crownConfUseFireLineInt", "crownConfUseFlameLeng"], "crownConfUseFlameLeng");
        props.select(
            &["surfaceConfWindSpeedAtMidflame", "surfaceConfWindSpeedAt10M"],
            "surfaceConfWindSpeedAt10M",
        );
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(state.is_active(Func::CrownFireTransRatioFromFlameLengAtVector));
        assert!(!state.is_active(Func::CrownFireTransRatioFromFireIntAtVector));
        assert!(state.is_active(Func::WindSpeedAt20Ft));
    }
}

//! Scorch height

use super::deactivate_all;
use crate::config::{PropertyDict, WindOption};
use crate::core_types::CellValue;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

/// Wind adjustment method item meaning "entered by the user"
const WAF_INPUT: usize = 2;

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("scorchModuleActive")? || !props.boolean("scorchCalcScorchHt")? {
        return Ok(());
    }
    state.set_output(Var::SurfaceFireScorchHtAtVector, true);
    if props.boolean("surfaceModuleActive")? {
        state.activate(Func::SurfaceFireScorchHtFromFliAtVector);
        return Ok(());
    }

    // Standalone: scorch from an entered surface result, with its own wind
    deactivate_all(state, &[Func::WindSpeedAt20Ft, Func::WindSpeedAtMidflame, Func::WindAdjFactor]);
    if props.boolean("scorchConfUseFlameLeng")? {
        state.activate(Func::SurfaceFireScorchHtFromFlameLengAtVector);
    } else {
        state.activate(Func::SurfaceFireScorchHtFromFliAtVector);
    }

    let Some(wind) = WindOption::from_props(props)? else {
        return Ok(());
    };
    if wind == WindOption::Midflame {
        state.pin(Var::WindAdjFactor, CellValue::Continuous(1.0));
        state.pin(Var::WindAdjMethod, CellValue::Item(WAF_INPUT));
        return Ok(());
    }
    state.activate(Func::WindSpeedAtMidflame);
    state.set_active(Func::WindSpeedAt20Ft, wind.is_10m());
    state.set_active(Func::WindAdjFactor, wind.is_calculated());
    state.set_output(Var::WindSpeedAtMidflame, props.boolean("surfaceCalcWindSpeedAtMidflame")?);
    if !wind.is_calculated() {
        state.pin(Var::WindAdjMethod, CellValue::Item(WAF_INPUT));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standalone(wind: &str) -> ConfigState {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceModuleActive", false);
        props.set_bool("scorchModuleActive", true);
        props.set_bool("scorchCalcScorchHt", true);
        props.select(
            &[
                "surfaceConfWindSpeedAtMidflame",
                "surfaceConfWindSpeedAt20Ft",
                "surfaceConfWindSpeedAt20FtCalc",
                "surfaceConfWindSpeedAt10M",
                "surfaceConfWindSpeedAt10MCalc",
            ],
            wind,
        );
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        state
    }

    #[test]
    fn test_standalone_scorch_wind() {
        let state = standalone("surfaceConfWindSpeedAt10MCalc");
        assert!(state.is_active(Func::SurfaceFireScorchHtFromFliAtVector));
        assert!(state.is_active(Func::WindSpeedAt20Ft));
        assert!(state.is_active(Func::WindSpeedAtMidflame));
        assert!(state.is_active(Func::WindAdjFactor));
        assert!(!state.flags(Var::WindAdjMethod).constant);

        let state = standalone("surfaceConfWindSpeedAt20Ft");
        assert!(!state.is_active(Func::WindSpeedAt20Ft));
        assert!(!state.is_active(Func::WindAdjFactor));
        assert!(state.flags(Var::WindAdjMethod).constant);

        let state = standalone("surfaceConfWindSpeedAtMidflame");
        assert!(!state.is_active(Func::WindSpeedAtMidflame));
        assert!(state.flags(Var::WindAdjFactor).constant);
        assert!(state.flags(Var::SurfaceFireScorchHtAtVector).output);
    }
}

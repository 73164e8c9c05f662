//! Module reconfiguration
//!
//! Turns the configuration map into a fresh [`ConfigState`]: which functions
//! run, which cells are outputs or constants and which constants are pinned.
//! User inputs are not decided here; the graph derives them afterwards from
//! the active functions and the selected outputs.
//!
//! Every worksheet module has one rule procedure. They run in a fixed order
//! and later procedures may override flags set by earlier ones:
//!
//! ```text
//! documentation -> surface -> crown -> size -> contain -> spot
//!               -> scorch -> mortality -> ignition -> weather -> safety
//! ```
//!
//! A procedure whose module-active switch is off leaves the state untouched.
//! Modules that consume surface results while the surface module is off
//! activate the wind helpers they need themselves.
//!
//! The result depends only on the map, so reconfiguring twice yields the
//! same state.

mod contain;
mod crown;
mod documentation;
mod ignition;
mod mortality;
mod safety;
mod scorch;
mod size;
mod spot;
mod surface;
mod weather;

use tracing::debug;

use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

/// Rule procedure of one module.
type Rules = fn(&PropertyDict, &mut ConfigState) -> Result<()>;

/// Rule procedures in application order
const MODULES: [(&str, Rules); 11] = [
    ("documentation", documentation::apply),
    ("surface", surface::apply),
    ("crown", crown::apply),
    ("size", size::apply),
    ("contain", contain::apply),
    ("spot", spot::apply),
    ("scorch", scorch::apply),
    ("mortality", mortality::apply),
    ("ignition", ignition::apply),
    ("weather", weather::apply),
    ("safety", safety::apply),
];

/// Build the configuration state for `props`
///
/// Starts from a state with every function inactive, no flags and no pins.
pub fn reconfigure(props: &PropertyDict) -> Result<ConfigState> {
    let mut state = ConfigState::new();
    for (module, rules) in MODULES {
        rules(props, &mut state)?;
        debug!(module, active = state.active_functions().count(), "module rules applied");
    }
    Ok(state)
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

fn activate_all(state: &mut ConfigState, funcs: &[Func]) {
    for &func in funcs {
        state.activate(func);
    }
}

fn deactivate_all(state: &mut ConfigState, funcs: &[Func]) {
    for &func in funcs {
        state.deactivate(func);
    }
}

/// Copy output-selection switches onto their cells
fn select_outputs(props: &PropertyDict, state: &mut ConfigState, table: &[(Var, &str)]) -> Result<()> {
    for &(var, key) in table {
        state.set_output(var, props.boolean(key)?);
    }
    Ok(())
}

/// Activate the 20-ft wind derivation when a 10-m wind is entered
///
/// Used by modules that need wind while the surface module is off.
fn wind_at_20ft_for_10m(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if props.boolean("surfaceConfWindSpeedAt10M")? || props.boolean("surfaceConfWindSpeedAt10MCalc")? {
        state.activate(Func::WindSpeedAt20Ft);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::CellValue;
    use crate::graph::CellId;

    fn all_modules_on() -> PropertyDict {
        let mut props = PropertyDict::default();
        for key in [
            "crownModuleActive",
            "sizeModuleActive",
            "containModuleActive",
            "spotModuleActive",
            "scorchModuleActive",
            "scorchCalcScorchHt",
            "mortalityModuleActive",
            "ignitionModuleActive",
            "weatherModuleActive",
            "safetyModuleActive",
            "safetyCalcSize",
            "mapCalcDist",
        ] {
            props.set_bool(key, true);
        }
        props
    }

    #[test]
    fn test_default_surface_configuration() {
        let state = reconfigure(&PropertyDict::default()).unwrap();
        assert!(state.is_active(Func::SurfaceFuelBedModel));
        assert!(state.is_active(Func::SurfaceFuelBedParms));
        assert!(state.is_active(Func::SurfaceFireSpreadAtHead));
        assert!(!state.is_active(Func::SurfaceFuelBedWeighted));
        assert!(!state.is_active(Func::WindAdjFactor));
        assert!(!state.is_active(Func::CrownFireType));

        assert!(state.flags(Var::SurfaceFireSpreadAtHead).output);
        assert!(state.flags(Var::SurfaceFireLineIntAtHead).output);
        assert!(state.flags(Var::SurfaceFireFlameLengAtHead).output);
        assert!(!state.flags(Var::SurfaceFireSpreadAtVector).output);
    }

    #[test]
    fn test_midflame_wind_pins_adjustment() {
        let state = reconfigure(&PropertyDict::default()).unwrap();
        let pinned = |var: Var| {
            state
                .pins()
                .iter()
                .find(|(id, _)| *id == CellId::from(var))
                .map(|(_, value)| value.clone())
        };
        assert_eq!(pinned(Var::WindAdjFactor), Some(CellValue::Continuous(1.0)));
        assert_eq!(pinned(Var::WindAdjMethod), Some(CellValue::Item(2)));
        assert_eq!(pinned(Var::SurfaceFuelMoisDead1000), Some(CellValue::Continuous(0.20)));
        assert!(state.flags(Var::WindAdjFactor).constant);
    }

    #[test]
    fn test_inactive_modules_leave_state_untouched() {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceModuleActive", false);
        let state = reconfigure(&props).unwrap();
        assert_eq!(state.active_functions().count(), 0);
        assert!(state.pins().is_empty());
        assert_eq!(state.outputs().count(), 0);
    }

    #[test]
    fn test_reconfigure_is_idempotent() {
        let props = all_modules_on();
        let first = reconfigure(&props).unwrap();
        let second = reconfigure(&props).unwrap();
        assert_eq!(
            first.active_functions().collect::<Vec<_>>(),
            second.active_functions().collect::<Vec<_>>()
        );
        assert_eq!(first.pins(), second.pins());
        assert_eq!(first.outputs().collect::<Vec<_>>(), second.outputs().collect::<Vec<_>>());
    }

    #[test]
    fn test_safety_forces_flame_length_at_head() {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceConfFuelAreaWeighted", true);
        props.set_bool("surfaceConfFuelModels", false);
        props.set_bool("safetyModuleActive", true);
        props.set_bool("safetyCalcSepDist", true);
        let state = reconfigure(&props).unwrap();
        assert!(state.is_active(Func::SurfaceFuelBedWeighted));
        assert!(state.is_active(Func::SurfaceFireFlameLengAtHead));
        assert!(state.is_active(Func::SafetyZoneSepDist));
        assert!(!state.is_active(Func::SafetyZoneRadius));
        assert_eq!(state.flags(Var::SurfaceFireFlameLengAtHead).explicit_input, Some(false));
    }
}

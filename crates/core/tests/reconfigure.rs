//! Reconfiguration through the graph

mod common;

use fire_calc_core::{CalcError, Func, Graph, PropertyDict, Var};

fn busy_config() -> PropertyDict {
    let mut props = PropertyDict::default();
    for key in [
        "crownModuleActive",
        "crownCalcCrownFireType",
        "sizeModuleActive",
        "sizeCalcFireArea",
        "spotModuleActive",
        "spotCalcDistSurfaceFire",
        "mortalityModuleActive",
        "mortalityCalcTreeMortalityRate",
        "safetyModuleActive",
        "safetyCalcSize",
        "mapCalcDist",
    ] {
        props.set_bool(key, true);
    }
    props
}

#[test]
fn test_reconfigure_twice_gives_identical_state() {
    let mut graph = Graph::with_properties(busy_config()).unwrap();
    let first = graph.state().clone();
    let first_order: Vec<Func> = graph.evaluation_order().collect();
    graph.reconfigure().unwrap();
    assert_eq!(graph.state(), &first);
    assert_eq!(graph.evaluation_order().collect::<Vec<_>>(), first_order);
}

#[test]
fn test_state_depends_only_on_current_map() {
    let mut graph = Graph::with_properties(busy_config()).unwrap();
    graph.set_properties(PropertyDict::default()).unwrap();
    let fresh = Graph::new().unwrap();
    assert_eq!(graph.state(), fresh.state());
}

#[test]
fn test_default_inputs_are_derived() {
    let graph = Graph::new().unwrap();
    let inputs: Vec<&str> = graph.user_inputs().map(|id| id.name()).collect();
    for name in [
        "vSurfaceFuelBedModel",
        "vSurfaceFuelMoisDead1",
        "vSurfaceFuelMoisDead10",
        "vSurfaceFuelMoisDead100",
        "vWindSpeedAtMidflame",
        "vSiteSlopeFraction",
    ] {
        assert!(inputs.contains(&name), "{name} missing from {inputs:?}");
    }
    // Pinned and computed cells are never entered
    assert!(!inputs.contains(&"vWindAdjFactor"));
    assert!(!inputs.contains(&"vSurfaceFuelMoisDead1000"));
    assert!(!inputs.contains(&"vSurfaceFireSpreadAtHead"));
}

#[test]
fn test_safety_without_surface_enters_flame_length() {
    let mut props = PropertyDict::default();
    props.set_bool("surfaceModuleActive", false);
    props.set_bool("safetyModuleActive", true);
    props.set_bool("safetyCalcRadius", true);
    let graph = Graph::with_properties(props).unwrap();
    assert!(graph.is_active(Func::SafetyZoneRadius));
    assert!(graph.cell(Var::SurfaceFireFlameLengAtHead).flags().input);
    assert!(graph.cell(Var::SafetyZoneRadius).flags().output);
}

#[test]
fn test_missing_switch_is_an_error() {
    let mut graph = Graph::new().unwrap();
    let mut partial = PropertyDict::empty();
    partial.set_bool("surfaceModuleActive", true);
    let err = graph.set_properties(partial).unwrap_err();
    assert!(matches!(err, CalcError::UnknownProperty(_)));
    // The previous configuration survives
    assert!(graph.is_active(Func::SurfaceFireSpreadAtHead));
}

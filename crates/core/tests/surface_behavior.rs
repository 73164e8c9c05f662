//! End-to-end surface fire evaluations

mod common;

use approx::assert_relative_eq;
use common::surface_graph;
use fire_calc_core::{Graph, PropertyDict, Var};

const FUEL_GROUP: &[&str] = &[
    "surfaceConfFuelModels",
    "surfaceConfFuelParms",
    "surfaceConfFuelAreaWeighted",
    "surfaceConfFuelHarmonicMean",
    "surfaceConfFuel2Dimensional",
    "surfaceConfFuelPalmettoGallberry",
    "surfaceConfFuelAspen",
];

/// Surface outputs written by both the single-model pipeline and the
/// two-model compositor
const SHARED_OUTPUTS: &[Var] = &[
    Var::SurfaceFireReactionInt,
    Var::SurfaceFireSpreadAtHead,
    Var::SurfaceFireSpreadAtVector,
    Var::SurfaceFireMaxDirFromUpslope,
    Var::SurfaceFireEffWindAtHead,
    Var::SurfaceFireEffWindAtVector,
    Var::SurfaceFireWindSpeedLimit,
    Var::SurfaceFireHeatPerUnitArea,
    Var::SurfaceFireLineIntAtHead,
    Var::SurfaceFireLineIntAtVector,
    Var::SurfaceFireFlameLengAtHead,
    Var::SurfaceFireFlameLengAtVector,
    Var::SurfaceFireLengthToWidth,
    Var::SurfaceFireEccentricity,
    Var::WindSpeedAtMidflame,
];

fn blended_graph(policy: &str, model: &str, coverage: f64) -> Graph {
    let mut props = PropertyDict::default();
    props.select(FUEL_GROUP, policy);
    let mut graph = surface_graph(props, Var::SurfaceFuelBedModel1, model);
    graph.set_fuel_model(Var::SurfaceFuelBedModel2, model).unwrap();
    graph.set_real(Var::SurfaceFuelBedCoverage1, coverage).unwrap();
    graph.evaluate().unwrap();
    graph
}

fn blended(policy: &str, model: &str, coverage: f64) -> f64 {
    blended_graph(policy, model, coverage)
        .real(Var::SurfaceFireSpreadAtHead)
        .unwrap()
}

fn single_model(model: &str) -> Graph {
    let mut graph = surface_graph(PropertyDict::default(), Var::SurfaceFuelBedModel, model);
    graph.evaluate().unwrap();
    graph
}

#[test]
fn test_identical_models_blend_to_single_model() {
    let mut single = surface_graph(PropertyDict::default(), Var::SurfaceFuelBedModel, "1");
    single.evaluate().unwrap();
    let expected = single.real(Var::SurfaceFireSpreadAtHead).unwrap();
    assert!(expected > 0.0);

    assert_relative_eq!(
        blended("surfaceConfFuelAreaWeighted", "1", 0.5),
        expected,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        blended("surfaceConfFuelHarmonicMean", "1", 0.5),
        expected,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        blended("surfaceConfFuel2Dimensional", "1", 0.5),
        expected,
        max_relative = 1e-9
    );
}

#[test]
fn test_two_dimensional_identical_models_match_single_model() {
    let single = single_model("4");
    let mosaic = blended_graph("surfaceConfFuel2Dimensional", "4", 0.3);
    for var in [Var::SurfaceFireSpreadAtHead, Var::SurfaceFireSpreadAtVector] {
        let expected = single.real(var).unwrap();
        assert!(expected > 0.0, "{var:?}");
        assert_relative_eq!(mosaic.real(var).unwrap(), expected, max_relative = 1e-9);
    }
}

#[test]
fn test_dominant_coverage_reproduces_single_model_pipeline() {
    let single = single_model("2");
    let blended = blended_graph("surfaceConfFuelAreaWeighted", "2", 0.9995);
    for &var in SHARED_OUTPUTS {
        let expected = single.real(var).unwrap();
        let actual = blended.real(var).unwrap();
        assert_relative_eq!(actual, expected, max_relative = 1e-9, epsilon = 1e-12);
    }
}

#[test]
fn test_size_module_grows_an_ellipse() {
    let mut props = PropertyDict::default();
    props.set_bool("sizeModuleActive", true);
    props.set_bool("sizeCalcFireArea", true);
    props.set_bool("sizeCalcFirePerimeter", true);
    let mut graph = surface_graph(props, Var::SurfaceFuelBedModel, "2");
    graph.evaluate().unwrap();

    let head = graph.real(Var::SurfaceFireDistAtHead).unwrap();
    let back = graph.real(Var::SurfaceFireDistAtBack).unwrap();
    let length = graph.real(Var::SurfaceFireLengDist).unwrap();
    assert!(head > back);
    assert_relative_eq!(length, head + back, max_relative = 1e-12);
    assert!(graph.real(Var::SurfaceFireArea).unwrap() > 0.0);
    assert!(graph.real(Var::SurfaceFirePerimeter).unwrap() > 0.0);
}

#[test]
fn test_zero_map_fraction_gives_zero_scale() {
    let mut props = PropertyDict::default();
    props.set_bool("mapCalcDist", true);
    props.set_bool("surfaceCalcFireDist", true);
    let mut graph = surface_graph(props, Var::SurfaceFuelBedModel, "1");
    graph.set_real(Var::MapFraction, 0.0).unwrap();
    graph.evaluate().unwrap();
    assert_eq!(graph.real(Var::MapScale).unwrap(), 0.0);
    assert!(graph.real(Var::SurfaceFireMapDistAtVector).unwrap().is_finite());
}

#[test]
fn test_trace_sink_sees_inputs_and_outputs() {
    use fire_calc_core::graph::{TraceDirection, TraceRecord};
    use std::sync::{Arc, Mutex};

    let seen: Arc<Mutex<Vec<(TraceDirection, &'static str)>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let mut graph = surface_graph(PropertyDict::default(), Var::SurfaceFuelBedModel, "1");
    graph.attach_trace(Box::new(move |record: &TraceRecord| {
        sink.lock().unwrap().push((record.direction, record.name));
    }));
    graph.evaluate().unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen.contains(&(TraceDirection::Input, "vWindSpeedAtMidflame")));
    assert!(seen.contains(&(TraceDirection::Output, "vSurfaceFireSpreadAtHead")));
}

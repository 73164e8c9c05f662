//! Shared setup for the integration tests

#![allow(dead_code)]

use fire_calc_core::{Graph, PropertyDict, Var};

/// Route library logs through the test harness, honouring `RUST_LOG`
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Graph over `props` with a dry, moderately windy short-grass scenario
pub fn surface_graph(props: PropertyDict, fuel_var: Var, model: &str) -> Graph {
    let mut graph = Graph::with_properties(props).unwrap();
    graph.set_fuel_model(fuel_var, model).unwrap();
    for (var, value) in [
        (Var::SurfaceFuelMoisDead1, 0.06),
        (Var::SurfaceFuelMoisDead10, 0.07),
        (Var::SurfaceFuelMoisDead100, 0.08),
        (Var::SurfaceFuelMoisLiveHerb, 0.60),
        (Var::SurfaceFuelMoisLiveWood, 0.90),
        (Var::WindSpeedAtMidflame, 5.0),
        (Var::SiteSlopeFraction, 0.2),
        (Var::SurfaceFireElapsedTime, 60.0),
    ] {
        graph.set_real(var, value).unwrap();
    }
    graph
}

//! Initial-attack containment through the worksheet and the simulation kernel

mod common;

use fire_calc_core::contain::{ContainForce, ContainTactic, FireReport, Resource};
use fire_calc_core::core_types::units::{Acres, Chains, ChainsPerHour, Minutes};
use fire_calc_core::{
    CellId, ContainConfig, ContainSim, ContainStatus, Func, Graph, PropertyDict, Var, WorksheetStatus,
};

/// Containment run on its own, fed by an entered head spread rate
fn standalone() -> Graph {
    with_props(PropertyDict::default())
}

/// Containment run on its own with one resource entered directly
fn single_resource() -> Graph {
    let mut props = PropertyDict::default();
    props.select(
        &["containConfResourcesMultiple", "containConfResourcesSingle"],
        "containConfResourcesSingle",
    );
    props.set_bool("containCalcResourcesUsed", true);
    with_props(props)
}

fn with_props(mut props: PropertyDict) -> Graph {
    props.set_bool("surfaceModuleActive", false);
    props.set_bool("containModuleActive", true);
    props.set_bool("containCalcStatus", true);
    props.set_bool("containCalcSize", true);
    props.set_bool("containCalcLine", true);

    let mut graph = Graph::with_properties(props).unwrap();
    // 5.5 ft/min is 5 chains per hour
    graph.set_real(Var::SurfaceFireSpreadAtHead, 5.5).unwrap();
    graph.set_real(Var::ContainReportSize, 1.0).unwrap();
    graph.set_real(Var::ContainReportRatio, 2.0).unwrap();
    graph.set_real(Var::ContainAttackDist, 0.0).unwrap();
    graph
}

#[test]
fn test_standalone_wiring() {
    let graph = standalone();
    assert!(graph.is_active(Func::ContainFF));
    assert!(graph.is_active(Func::ContainFFReportSpread));
    assert!(!graph.is_active(Func::ContainFFReportSize));

    let inputs: Vec<CellId> = graph.user_inputs().collect();
    assert!(inputs.contains(&Var::SurfaceFireSpreadAtHead.into()));
    assert!(inputs.contains(&Var::ContainReportSize.into()));
    assert!(inputs.contains(&Var::ContainResourceName.into()));
}

#[test]
fn test_empty_resource_list_escapes() {
    let mut graph = standalone();
    graph.evaluate().unwrap();

    assert_eq!(
        graph.value(Var::ContainStatus).as_item(),
        Some(WorksheetStatus::Escaped.index())
    );
    assert_eq!(graph.real(Var::ContainSize).unwrap(), -1.0);
    assert_eq!(graph.real(Var::ContainLine).unwrap(), 0.0);
    assert!(graph.contain_polygon().is_empty());
}

#[test]
fn test_listed_crew_contains() {
    let mut graph = standalone();
    graph.set_text(Var::ContainResourceName, "Crew1").unwrap();
    graph.set_text(Var::ContainResourceArrival, "30").unwrap();
    graph.set_text(Var::ContainResourceDuration, "600").unwrap();
    graph.set_text(Var::ContainResourceProd, "60").unwrap();
    graph.evaluate().unwrap();

    assert_eq!(
        graph.value(Var::ContainStatus).as_item(),
        Some(WorksheetStatus::Contained.index())
    );
    assert!(graph.real(Var::ContainSize).unwrap() > 1.0);
    assert!(graph.real(Var::ContainLine).unwrap() > 0.0);
    assert!(!graph.contain_polygon().is_empty());
}

#[test]
fn test_bad_resource_token_is_reported() {
    let mut graph = standalone();
    graph.set_text(Var::ContainResourceName, "Crew1").unwrap();
    graph.set_text(Var::ContainResourceArrival, "soon").unwrap();
    graph.set_text(Var::ContainResourceDuration, "600").unwrap();
    graph.set_text(Var::ContainResourceProd, "60").unwrap();
    assert!(graph.evaluate().is_err());
}

#[test]
fn test_kernel_later_arrival_takes_longer() {
    let report = FireReport {
        size: Acres::new(1.0),
        spread_rate: ChainsPerHour::new(5.0),
        length_to_width: 2.0,
    };
    let run = |arrival: f64| {
        let mut force = ContainForce::new();
        force.add(Resource::new(
            "Crew1",
            Minutes::new(arrival),
            ChainsPerHour::new(60.0),
            Minutes::new(600.0),
        ));
        ContainSim::new(report, force, ContainTactic::Rear, Chains::ZERO, ContainConfig::default()).run()
    };

    let early = run(20.0);
    let late = run(40.0);
    assert_eq!(early.status, ContainStatus::Contained);
    assert_eq!(late.status, ContainStatus::Contained);
    assert!(late.final_time > early.final_time);
    assert!(late.final_size > early.final_size);
    assert!(late.final_line > early.final_line);
}

#[test]
fn test_single_resource_inputs_skip_the_name() {
    let graph = single_resource();
    assert!(graph.is_active(Func::ContainFFSingle));
    assert!(!graph.is_active(Func::ContainFF));

    let inputs: Vec<CellId> = graph.user_inputs().collect();
    assert!(!inputs.contains(&Var::ContainResourceName.into()));
    assert!(inputs.contains(&Var::ContainResourceArrival.into()));
    assert!(inputs.contains(&Var::ContainResourceDuration.into()));
    assert!(inputs.contains(&Var::ContainResourceProd.into()));
}

#[test]
fn test_single_resource_matches_one_item_list() {
    let mut single = single_resource();
    single.set_text(Var::ContainResourceArrival, "30").unwrap();
    single.set_text(Var::ContainResourceDuration, "600").unwrap();
    single.set_text(Var::ContainResourceProd, "60").unwrap();
    single.evaluate().unwrap();

    assert_eq!(
        single.value(Var::ContainStatus).as_item(),
        Some(WorksheetStatus::Contained.index())
    );
    assert_eq!(single.real(Var::ContainResourcesUsed).unwrap(), 1.0);
    assert!(single.real(Var::ContainLine).unwrap() > 0.0);

    let mut listed = standalone();
    listed.set_text(Var::ContainResourceName, "Crew1").unwrap();
    listed.set_text(Var::ContainResourceArrival, "30").unwrap();
    listed.set_text(Var::ContainResourceDuration, "600").unwrap();
    listed.set_text(Var::ContainResourceProd, "60").unwrap();
    listed.evaluate().unwrap();

    for var in [Var::ContainSize, Var::ContainLine, Var::ContainTime, Var::ContainPoints] {
        assert_eq!(single.real(var).unwrap(), listed.real(var).unwrap(), "{var:?}");
    }
}

#[test]
fn test_points_count_the_attack_point() {
    let mut graph = standalone();
    graph.evaluate().unwrap();
    // No resource ever arrives: only the attack point is reported
    assert_eq!(graph.real(Var::ContainPoints).unwrap(), 1.0);
}

//! Surface fire
//!
//! The largest rule set. Option groups are applied in this order, each able
//! to undo what an earlier one did:
//!
//! 1. fuel (models, parameters, two blended models, palmetto-gallberry, aspen)
//! 2. herbaceous load transfer
//! 3. moisture entry
//! 4. wind speed height and adjustment factor
//! 5. spread direction
//! 6. wind direction
//! 7. compass reference
//! 8. slope entry
//!
//! followed by the output selection switches.

use super::{activate_all, deactivate_all, select_outputs};
use crate::compositor::WeightingPolicy;
use crate::config::{
    DegreesOption, FuelOption, LoadTransferOption, MoistureOption, PropertyDict, SlopeOption,
    SpreadDirOption, WindDirOption, WindOption,
};
use crate::core_types::CellValue;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

/// Wind adjustment method item meaning "entered by the user"
const WAF_INPUT: usize = 2;

/// Load transfer equation item for static fuel models
const LOAD_TRANSFER_STATIC: usize = 0;

/// 1000-h dead moisture used by every fuel model
const MOIS_DEAD_1000: f64 = 0.20;

/// Active whenever the module is on
const BASE: &[Func] = &[
    Func::SurfaceFireCharacteristicsDiagram,
    Func::SurfaceFireDistAtHead,
    Func::SurfaceFireDistAtVector,
    Func::SurfaceFireEccentricity,
    Func::SurfaceFireEffWindAtVector,
    Func::SurfaceFireFlameLengAtHead,
    Func::SurfaceFireFlameLengAtVector,
    Func::SurfaceFireMaxDirFromNorth,
    Func::SurfaceFireHeatSource,
    Func::SurfaceFireMaxDirDiagram,
    Func::SurfaceFireMapDistAtHead,
    Func::SurfaceFireMapDistAtVector,
    Func::SurfaceFireSpreadAtBack,
    Func::SurfaceFireSpreadAtHead,
    Func::SurfaceFireVectorBeta,
    Func::SurfaceFireSpreadAtBeta,
    Func::SurfaceFireHeatPerUnitArea,
    Func::SurfaceFireLengthToWidth,
    Func::SurfaceFireLineIntAtHead,
    Func::SurfaceFireLineIntAtVector,
    Func::SurfaceFireNoWindRate,
    Func::SurfaceFirePropagatingFlux,
    Func::SurfaceFireReactionInt,
    Func::SurfaceFireResidenceTime,
    Func::SurfaceFuelBedIntermediates,
    Func::SurfaceFuelBedHeatSink,
    Func::SurfaceFuelMoisTimeLag,
];

/// Single-model pipeline, run inside the compositor instead when two fuel
/// models are blended
const SINGLE_MODEL_PIPELINE: &[Func] = &[
    Func::SurfaceFuelBedModel,
    Func::SurfaceFuelBedParms,
    Func::SurfaceFuelLoadTransferFraction,
    Func::SurfaceFuelBedIntermediates,
    Func::SurfaceFireResidenceTime,
    Func::SurfaceFuelMoisLifeClass,
    Func::SurfaceFuelMoisScenarioModel,
    Func::SurfaceFuelMoisTimeLag,
    Func::SurfaceFuelBedHeatSink,
    Func::SurfaceFirePropagatingFlux,
    Func::SurfaceFireReactionInt,
    Func::SurfaceFireNoWindRate,
    Func::WindAdjFactor,
    Func::WindSpeedAt20Ft,
    Func::WindSpeedAtMidflame,
    Func::SurfaceFireSpreadAtHead,
    Func::SurfaceFireLineIntAtHead,
    Func::SurfaceFireFlameLengAtHead,
    Func::SurfaceFireLengthToWidth,
    Func::SurfaceFireEccentricity,
    Func::SurfaceFireVectorBeta,
    Func::SurfaceFireSpreadAtBeta,
    Func::SurfaceFireLineIntAtVector,
    Func::SurfaceFireFlameLengAtVector,
    Func::SurfaceFireEffWindAtVector,
    Func::SurfaceFireHeatPerUnitArea,
];

const PALMETTO_OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFuelPalmettoLoadDead1, "surfaceCalcPalmettoLoadDead1"),
    (Var::SurfaceFuelPalmettoLoadDead10, "surfaceCalcPalmettoLoadDead10"),
    (Var::SurfaceFuelPalmettoLoadDeadFoliage, "surfaceCalcPalmettoLoadDeadFoliage"),
    (Var::SurfaceFuelPalmettoLoadLive1, "surfaceCalcPalmettoLoadLive1"),
    (Var::SurfaceFuelPalmettoLoadLive10, "surfaceCalcPalmettoLoadLive10"),
    (Var::SurfaceFuelPalmettoLoadLiveFoliage, "surfaceCalcPalmettoLoadLiveFoliage"),
    (Var::SurfaceFuelPalmettoLoadLitter, "surfaceCalcPalmettoLoadLitter"),
    (Var::SurfaceFuelBedDepth, "surfaceCalcPalmettoBedDepth"),
];

const ASPEN_OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFuelAspenLoadDead1, "surfaceCalcAspenLoadDead1"),
    (Var::SurfaceFuelAspenLoadLiveHerb, "surfaceCalcAspenLoadLiveHerb"),
    (Var::SurfaceFuelAspenLoadLiveWoody, "surfaceCalcAspenLoadLiveWoody"),
    (Var::SurfaceFuelAspenSavrDead1, "surfaceCalcAspenSavrDead1"),
    (Var::SurfaceFuelAspenSavrLiveWoody, "surfaceCalcAspenSavrLiveWoody"),
    (Var::TreeMortalityRateAspenAtVector, "surfaceCalcAspenMortality"),
];

/// Results reported in the direction of maximum spread
const HEAD_OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFireDistAtVector, "surfaceCalcFireDist"),
    (Var::SurfaceFireEffWindAtHead, "surfaceCalcFireEffWind"),
    (Var::SurfaceFireFlameLengAtHead, "surfaceCalcFireFlameLeng"),
    (Var::SurfaceFireLineIntAtHead, "surfaceCalcFireLineInt"),
    (Var::SurfaceFireSpreadAtHead, "surfaceCalcFireSpread"),
];

/// Results reported in a user-specified direction
const VECTOR_OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFireDistAtVector, "surfaceCalcFireDist"),
    (Var::SurfaceFireEffWindAtVector, "surfaceCalcFireEffWind"),
    (Var::SurfaceFireFlameLengAtVector, "surfaceCalcFireFlameLeng"),
    (Var::SurfaceFireLineIntAtVector, "surfaceCalcFireLineInt"),
    (Var::SurfaceFireSpreadAtVector, "surfaceCalcFireSpread"),
];

const OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFireHeatPerUnitArea, "surfaceCalcFireHeatPerUnitArea"),
    (Var::SurfaceFireReactionInt, "surfaceCalcFireReactionInt"),
    (Var::SurfaceFireWindSpeedFlag, "surfaceCalcFireWindSpeedFlag"),
    (Var::SurfaceFireWindSpeedLimit, "surfaceCalcFireWindSpeedLimit"),
    (Var::TreeCanopyCrownFraction, "surfaceCalcCrownFillPortion"),
    (Var::WindAdjFactor, "surfaceCalcWindAdjFactor"),
    (Var::WindAdjMethod, "surfaceCalcWindAdjMethod"),
];

/// Outputs that only exist for a single fuel model
const SINGLE_MODEL_OUTPUTS: &[(Var, &str)] = &[
    (Var::SurfaceFireHeatSource, "surfaceCalcFireHeatSource"),
    (Var::SurfaceFireReactionIntDead, "surfaceCalcFireReactionIntDead"),
    (Var::SurfaceFireReactionIntLive, "surfaceCalcFireReactionIntLive"),
    (Var::SurfaceFireMaxDirDiagram, "surfaceCalcFireMaxDirDiagram"),
    (Var::SurfaceFireCharacteristicsDiagram, "surfaceCalcFireCharacteristicsDiagram"),
    (Var::SurfaceFuelLoadTransferFraction, "surfaceCalcFuelLoadTransferFraction"),
    (Var::SurfaceFuelLoadDead, "surfaceCalcFuelLoadDead"),
    (Var::SurfaceFuelLoadDeadHerb, "surfaceCalcFuelLoadDeadHerb"),
    (Var::SurfaceFuelLoadLive, "surfaceCalcFuelLoadLive"),
    (Var::SurfaceFuelLoadUndeadHerb, "surfaceCalcFuelLoadUndeadHerb"),
    (Var::SurfaceFuelBedSigma, "surfaceCalcFuelBedSigma"),
    (Var::SurfaceFuelBedPackingRatio, "surfaceCalcFuelBedPackingRatio"),
    (Var::SurfaceFuelBedBulkDensity, "surfaceCalcFuelBedBulkDensity"),
    (Var::SurfaceFuelBedBetaRatio, "surfaceCalcFuelBedBetaRatio"),
    (Var::SurfaceFuelBedDeadFraction, "surfaceCalcFuelBedDeadFraction"),
    (Var::SurfaceFuelBedLiveFraction, "surfaceCalcFuelBedLiveFraction"),
    (Var::SurfaceFuelBedHeatSink, "surfaceCalcFuelBedHeatSink"),
    (Var::SurfaceFuelBedMoisDead, "surfaceCalcFuelBedMoisDead"),
    (Var::SurfaceFuelBedMoisLive, "surfaceCalcFuelBedMoisLive"),
    (Var::SurfaceFuelBedMextLive, "surfaceCalcFuelBedMextLive"),
    (Var::SurfaceFireResidenceTime, "surfaceCalcFireResidenceTime"),
    (Var::SurfaceFireWindFactor, "surfaceCalcFireWindFactor"),
    (Var::SurfaceFireSlopeFactor, "surfaceCalcFireSlopeFactor"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("surfaceModuleActive")? {
        return Ok(());
    }
    activate_all(state, BASE);
    state.deactivate(Func::TreeCrownRatio);
    state.set_constant(Var::SurfaceFuelLoadDeadHerb, true);

    let fuel = FuelOption::from_props(props)?;
    let weighted = fuel.is_some_and(FuelOption::is_weighted);
    fuel_rules(props, state, fuel)?;
    load_transfer_rules(props, state)?;
    match MoistureOption::from_props(props)? {
        Some(MoistureOption::LifeCategory) => state.activate(Func::SurfaceFuelMoisLifeClass),
        Some(MoistureOption::Scenario) => state.activate(Func::SurfaceFuelMoisScenarioModel),
        Some(MoistureOption::TimeLag) | None => {}
    }
    if let Some(wind) = WindOption::from_props(props)? {
        wind_rules(props, state, wind, weighted)?;
    }
    spread_dir_rules(props, state)?;
    direction_rules(props, state)?;
    slope_rules(props, state)?;

    select_outputs(props, state, OUTPUTS)?;
    // Raw switches, regardless of which fuel option won
    let two_fuels = WeightingPolicy::from_props(props)?.is_some();
    for &(var, key) in SINGLE_MODEL_OUTPUTS {
        let on = props.boolean(key)?;
        state.set_output(var, on && !two_fuels);
    }
    state.pin(Var::SurfaceFuelMoisDead1000, CellValue::Continuous(MOIS_DEAD_1000));
    Ok(())
}

// ============================================================================
// OPTION GROUPS
// ============================================================================

fn fuel_rules(props: &PropertyDict, state: &mut ConfigState, fuel: Option<FuelOption>) -> Result<()> {
    match fuel {
        Some(FuelOption::Models) => {
            activate_all(state, &[Func::SurfaceFuelBedParms, Func::SurfaceFuelBedModel]);
        }
        Some(FuelOption::Parms) => state.activate(Func::SurfaceFuelBedParms),
        Some(FuelOption::Weighted(_)) => {
            state.activate(Func::SurfaceFuelBedWeighted);
            state.set_user_input(Var::SurfaceFuelLoadTransferEq, false);
            state.set_constant(Var::SurfaceFuelLoadTransferEq, true);
            deactivate_all(state, SINGLE_MODEL_PIPELINE);
        }
        Some(FuelOption::PalmettoGallberry) => {
            activate_all(state, &[Func::SurfaceFuelPalmettoModel, Func::SurfaceFuelPalmettoParms]);
            select_outputs(props, state, PALMETTO_OUTPUTS)?;
        }
        Some(FuelOption::Aspen) => {
            activate_all(
                state,
                &[
                    Func::SurfaceFuelAspenModel,
                    Func::SurfaceFuelAspenParms,
                    Func::TreeMortalityRateAspenAtVector,
                ],
            );
            select_outputs(props, state, ASPEN_OUTPUTS)?;
        }
        None => {}
    }
    Ok(())
}

fn load_transfer_rules(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    match LoadTransferOption::from_props(props)? {
        Some(LoadTransferOption::Calc) => {
            state.set_user_input(Var::SurfaceFuelLoadTransferFraction, false);
            state.activate(Func::SurfaceFuelLoadTransferFraction);
        }
        Some(LoadTransferOption::Input) => {
            state.set_user_input(Var::SurfaceFuelLoadTransferFraction, true);
            state.deactivate(Func::SurfaceFuelLoadTransferFraction);
        }
        None => {}
    }
    // Dynamic shrub fuels carry no transferable herb load
    if props.boolean("surfaceConfFuelPalmettoGallberry")? || props.boolean("surfaceConfFuelAspen")? {
        state.pin(Var::SurfaceFuelLoadTransferEq, CellValue::Item(LOAD_TRANSFER_STATIC));
        state.set_user_input(Var::SurfaceFuelLoadTransferFraction, false);
        state.activate(Func::SurfaceFuelLoadTransferFraction);
        state.pin(Var::SurfaceFuelLoadTransferFraction, CellValue::Continuous(0.0));
    }
    Ok(())
}

fn wind_rules(props: &PropertyDict, state: &mut ConfigState, wind: WindOption, weighted: bool) -> Result<()> {
    if wind == WindOption::Midflame {
        state.pin(Var::TreeCanopyCrownFraction, CellValue::Continuous(0.0));
        state.pin(Var::WindAdjFactor, CellValue::Continuous(1.0));
        state.pin(Var::WindAdjMethod, CellValue::Item(WAF_INPUT));
        return Ok(());
    }

    state.activate(Func::WindSpeedAtMidflame);
    if wind.is_10m() {
        state.activate(Func::WindSpeedAt20Ft);
    }
    state.set_active(Func::WindAdjFactor, wind.is_calculated());
    state.set_output(Var::WindSpeedAtMidflame, props.boolean("surfaceCalcWindSpeedAtMidflame")?);

    if wind.is_calculated() {
        // The blended bed depth feeds the adjustment factor, which feeds the
        // blend; holding depth constant breaks the loop
        if weighted {
            state.set_constant(Var::SurfaceFuelBedDepth, true);
        }
        if props.boolean("crownModuleActive")? {
            state.activate(Func::TreeCrownRatio);
            state.set_output(Var::TreeCrownRatio, props.boolean("surfaceCalcCrownRatio")?);
        }
    } else {
        state.pin(Var::TreeCanopyCrownFraction, CellValue::Continuous(0.0));
        state.pin(Var::WindAdjMethod, CellValue::Item(WAF_INPUT));
    }
    Ok(())
}

fn spread_dir_rules(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    match SpreadDirOption::from_props(props)? {
        SpreadDirOption::Max => {
            state.pin(Var::SurfaceFireVectorDirFromUpslope, CellValue::Continuous(0.0));
            state.pin(Var::SurfaceFireVectorBeta, CellValue::Continuous(0.0));
            state.deactivate(Func::SurfaceFireVectorBeta);
            state.set_output(Var::SurfaceFireDistAtHead, false);
            select_outputs(props, state, HEAD_OUTPUTS)?;
        }
        SpreadDirOption::Input => {
            if DegreesOption::from_props(props)? == DegreesOption::WrtNorth {
                state.activate(Func::SurfaceFireVectorDirFromUpslope);
            }
            select_outputs(props, state, VECTOR_OUTPUTS)?;
        }
    }
    if props.boolean("mapCalcDist")? {
        state.activate(Func::MapScale);
        state.set_output(Var::SurfaceFireMapDistAtVector, props.boolean("surfaceCalcFireDist")?);
    }
    Ok(())
}

/// Wind direction and the compass reference for reported directions
fn direction_rules(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    let degrees = DegreesOption::from_props(props)?;
    match WindDirOption::from_props(props)? {
        WindDirOption::Input => {
            if degrees == DegreesOption::WrtNorth {
                state.activate(Func::WindDirFromUpslope);
            }
        }
        WindDirOption::Upslope => {
            state.pin(Var::WindDirFromUpslope, CellValue::Continuous(0.0));
            for var in [Var::WindSpeedAtMidflame, Var::WindSpeedAt20Ft, Var::WindSpeedAt10M] {
                state.set_label(var, "Upslope");
            }
        }
    }

    let max_dir = props.boolean("surfaceCalcFireMaxDirFromUpslope")?
        || props.boolean("surfaceCalcFireMaxDirDiagram")?
        || (props.boolean("sizeModuleActive")? && props.boolean("sizeCalcFireShapeDiagram")?);
    match degrees {
        DegreesOption::WrtUpslope => state.set_output(Var::SurfaceFireMaxDirFromUpslope, max_dir),
        DegreesOption::WrtNorth => {
            state.activate(Func::SiteUpslopeDirFromNorth);
            state.set_output(Var::SurfaceFireMaxDirFromNorth, max_dir);
        }
    }
    Ok(())
}

fn slope_rules(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    match SlopeOption::from_props(props)? {
        SlopeOption::Input { degrees } => {
            if degrees {
                state.activate(Func::SiteSlopeFraction);
            }
        }
        SlopeOption::Derived => {
            activate_all(state, &[Func::MapSlope, Func::MapScale, Func::SiteSlopeFraction]);
            state.set_output(Var::SiteSlopeReach, props.boolean("surfaceCalcSlopeReach")?);
            state.set_output(Var::SiteSlopeRise, props.boolean("surfaceCalcSlopeRise")?);
            if props.boolean("surfaceCalcSlopeSteepness")? {
                state.set_output(Var::SiteSlopeFraction, props.boolean("surfaceConfSlopeFraction")?);
                state.set_output(Var::SiteSlopeDegrees, props.boolean("surfaceConfSlopeDegrees")?);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(select: &[(&[&str], &str)]) -> ConfigState {
        let mut props = PropertyDict::default();
        for (group, chosen) in select {
            props.select(group, chosen);
        }
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        state
    }

    const FUEL: &[&str] = &[
        "surfaceConfFuelModels",
        "surfaceConfFuelParms",
        "surfaceConfFuelAreaWeighted",
        "surfaceConfFuelHarmonicMean",
        "surfaceConfFuel2Dimensional",
        "surfaceConfFuelPalmettoGallberry",
        "surfaceConfFuelAspen",
    ];

    const WIND: &[&str] = &[
        "surfaceConfWindSpeedAtMidflame",
        "surfaceConfWindSpeedAt20Ft",
        "surfaceConfWindSpeedAt20FtCalc",
        "surfaceConfWindSpeedAt10M",
        "surfaceConfWindSpeedAt10MCalc",
    ];

    #[test]
    fn test_base_functions() {
        let state = surface(&[]);
        assert_eq!(BASE.len(), 27);
        for &func in BASE {
            if func != Func::SurfaceFireVectorBeta {
                assert!(state.is_active(func), "{func:?}");
            }
        }
        // Spread in the max direction only
        assert!(!state.is_active(Func::SurfaceFireVectorBeta));
        assert!(state.flags(Var::SurfaceFireVectorBeta).constant);
    }

    #[test]
    fn test_two_model_deactivation() {
        let state = surface(&[(FUEL, "surfaceConfFuelHarmonicMean"), (WIND, "surfaceConfWindSpeedAt20FtCalc")]);
        assert!(state.is_active(Func::SurfaceFuelBedWeighted));
        assert!(!state.is_active(Func::SurfaceFuelBedModel));
        assert!(!state.is_active(Func::SurfaceFireSpreadAtHead));
        assert!(!state.is_active(Func::SurfaceFireReactionInt));
        // The wind group runs after the fuel group and brings these back
        assert!(state.is_active(Func::WindSpeedAtMidflame));
        assert!(state.is_active(Func::WindAdjFactor));
        // Load transfer is calculated by default
        assert!(state.is_active(Func::SurfaceFuelLoadTransferFraction));
        assert!(state.flags(Var::SurfaceFuelBedDepth).constant);
        assert!(state.flags(Var::SurfaceFuelLoadTransferEq).constant);
    }

    #[test]
    fn test_single_model_outputs_forced_off() {
        let mut props = PropertyDict::default();
        props.set_bool("surfaceCalcFireHeatSource", true);
        props.set_bool("surfaceCalcFuelBedSigma", true);
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(state.flags(Var::SurfaceFireHeatSource).output);
        assert!(state.flags(Var::SurfaceFuelBedSigma).output);

        props.select(FUEL, "surfaceConfFuelAreaWeighted");
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(!state.flags(Var::SurfaceFireHeatSource).output);
        assert!(!state.flags(Var::SurfaceFuelBedSigma).output);
    }

    #[test]
    fn test_calculated_waf_with_crown_module() {
        let mut props = PropertyDict::default();
        props.select(WIND, "surfaceConfWindSpeedAt10MCalc");
        props.set_bool("crownModuleActive", true);
        props.set_bool("surfaceCalcCrownRatio", true);
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(state.is_active(Func::WindSpeedAt20Ft));
        assert!(state.is_active(Func::WindAdjFactor));
        assert!(state.is_active(Func::TreeCrownRatio));
        assert!(state.flags(Var::TreeCrownRatio).output);
        assert!(!state.flags(Var::WindAdjMethod).constant);
        assert!(!state.flags(Var::SurfaceFuelBedDepth).constant);
    }

    #[test]
    fn test_entered_waf_at_20ft() {
        let state = surface(&[(WIND, "surfaceConfWindSpeedAt20Ft")]);
        assert!(state.is_active(Func::WindSpeedAtMidflame));
        assert!(!state.is_active(Func::WindAdjFactor));
        assert!(!state.is_active(Func::WindSpeedAt20Ft));
        assert!(!state.flags(Var::WindAdjFactor).constant);
        assert!(state.flags(Var::WindAdjMethod).constant);
        assert!(state.flags(Var::TreeCanopyCrownFraction).constant);
    }

    #[test]
    fn test_dynamic_fuels_pin_load_transfer() {
        let state = surface(&[(FUEL, "surfaceConfFuelPalmettoGallberry")]);
        assert!(state.is_active(Func::SurfaceFuelPalmettoModel));
        assert!(state.is_active(Func::SurfaceFuelLoadTransferFraction));
        assert!(state.flags(Var::SurfaceFuelLoadTransferFraction).constant);
        assert!(state.flags(Var::SurfaceFuelLoadTransferEq).constant);
    }

    #[test]
    fn test_derived_slope_and_north_reference() {
        let mut props = PropertyDict::default();
        props.select(&["surfaceConfSlopeInput", "surfaceConfSlopeDerived"], "surfaceConfSlopeDerived");
        props.select(&["surfaceConfDegreesWrtUpslope", "surfaceConfDegreesWrtNorth"], "surfaceConfDegreesWrtNorth");
        props.select(&["surfaceConfWindDirUpslope", "surfaceConfWindDirInput"], "surfaceConfWindDirInput");
        props.set_bool("surfaceCalcFireMaxDirFromUpslope", true);
        let mut state = ConfigState::new();
        apply(&props, &mut state).unwrap();
        assert!(state.is_active(Func::MapSlope));
        assert!(state.is_active(Func::MapScale));
        assert!(state.is_active(Func::SiteSlopeFraction));
        assert!(state.is_active(Func::SiteUpslopeDirFromNorth));
        assert!(state.is_active(Func::WindDirFromUpslope));
        assert!(state.flags(Var::SurfaceFireMaxDirFromNorth).output);
        assert!(state.label(Var::WindSpeedAtMidflame).is_none());
    }

    #[test]
    fn test_upslope_wind_labels() {
        let state = surface(&[]);
        assert_eq!(state.label(Var::WindSpeedAt20Ft), Some("Upslope"));
        assert!(state.flags(Var::WindDirFromUpslope).constant);
    }
}

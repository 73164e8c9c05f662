//! Cell catalogue
//!
//! Every worksheet variable is declared here once, with its name, value kind,
//! native unit and default display decimals. Scalar cells are the [`Var`]
//! enum; per-particle fuel attributes are 8 arrays of 8 cells addressed by
//! [`ParticleAttr`] and a particle index.
//!
//! Cells are created when the graph is built and live as long as the graph.
//! Reconfiguration never adds or removes cells, it only flips their flags.

use crate::core_types::{CellKind, Unit};
use crate::physics::{mortality, spotting};

/// Number of fuel particles per fuel bed.
pub const MAX_PARTICLES: usize = 8;

// ============================================================================
// ITEM LISTS
// ============================================================================

/// Sixteen compass points, 22.5 degrees apart, starting at north.
pub const COMPASS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Two-state flag.
pub const NO_YES: &[&str] = &["No", "Yes"];

/// Containment attack tactic.
pub const ATTACK_TACTICS: &[&str] = &["Head", "Rear"];

/// Worksheet containment status.
pub const CONTAIN_STATUS: &[&str] = &["Contained", "Withdrawn", "Escaped"];

/// Herbaceous load transfer equation.
pub const LOAD_TRANSFER: &[&str] = &["Static", "Dynamic"];

/// Wind adjustment factor method.
pub const WAF_METHOD: &[&str] = &["Unsheltered", "Sheltered", "Input"];

/// Crown fire type.
pub const FIRE_TYPE: &[&str] = &["Surface", "Torching", "Conditional crown", "Crowning"];

/// Crown fire driving force.
pub const WIND_DRIVEN: &[&str] = &["Plume dominated", "Wind driven"];

/// Spotting source location in ridge/valley terrain.
pub const SPOT_SOURCE: &[&str] = &[
    "Midslope, windward",
    "Valley bottom",
    "Midslope, leeward",
    "Ridge top",
];

/// Lightning ignition fuel bed type.
pub const LIGHTNING_FUEL: &[&str] = &[
    "Ponderosa pine litter",
    "Punky wood, rotten, chunky",
    "Punky wood powder, deep",
    "Punky wood powder, shallow",
    "Lodgepole pine duff",
    "Douglas-fir duff",
    "High altitude mixed",
    "Peat moss (commercial)",
];

/// Lightning stroke charge.
pub const LIGHTNING_CHARGE: &[&str] = &["Negative", "Positive", "Unknown"];

/// Aspen community type.
pub const ASPEN_TYPE: &[&str] = &[
    "Aspen/shrub",
    "Aspen/tall forb",
    "Aspen/low forb",
    "Mixed/forb",
    "Mixed/shrub",
];

/// Aspen fire severity.
pub const ASPEN_SEVERITY: &[&str] = &["Low", "Moderate+"];

/// Mortality species group.
pub const MORTALITY_SPECIES: &[&str] = &["Non-spruce", "Spruce"];

/// Particle life category.
pub const PARTICLE_LIFE: &[&str] = &["Dead", "Herb", "Wood", "Litter"];

// ============================================================================
// DECLARATIONS
// ============================================================================

/// Static declaration of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDecl {
    /// Unique worksheet name
    pub name: &'static str,
    /// Value kind and item source
    pub kind: CellKind,
    /// Native unit
    pub unit: Unit,
    /// Default display decimals
    pub decimals: u8,
}

macro_rules! cell_table {
    ( $( $var:ident = $name:literal, $kind:ident $( ( $items:expr ) )?, $unit:ident, $dec:literal; )* ) => {
        /// Scalar worksheet cell.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Var {
            $(
                #[doc = $name]
                $var,
            )*
        }

        const VAR_DECLS: &[CellDecl] = &[
            $( CellDecl {
                name: $name,
                kind: CellKind::$kind $( ( $items ) )?,
                unit: Unit::$unit,
                decimals: $dec,
            }, )*
        ];

        impl Var {
            /// All scalar cells in declaration order
            pub const ALL: &'static [Var] = &[ $( Var::$var, )* ];
        }
    };
}

cell_table! {
    ContainAttackBack = "vContainAttackBack", Continuous, Chains, 1;
    ContainAttackDist = "vContainAttackDist", Continuous, Chains, 0;
    ContainAttackHead = "vContainAttackHead", Continuous, Chains, 1;
    ContainAttackPerimeter = "vContainAttackPerimeter", Continuous, Chains, 1;
    ContainAttackSize = "vContainAttackSize", Continuous, Acres, 2;
    ContainAttackTactic = "vContainAttackTactic", Discrete(ATTACK_TACTICS), None, 0;
    ContainCost = "vContainCost", Continuous, Dollars, 0;
    ContainDiagram = "vContainDiagram", Continuous, None, 0;
    ContainLimitDist = "vContainLimitDist", Continuous, Chains, 0;
    ContainLine = "vContainLine", Continuous, Chains, 1;
    ContainPoints = "vContainPoints", Continuous, Count, 0;
    ContainReportBack = "vContainReportBack", Continuous, Chains, 1;
    ContainReportHead = "vContainReportHead", Continuous, Chains, 1;
    ContainReportRatio = "vContainReportRatio", Continuous, None, 2;
    ContainReportSize = "vContainReportSize", Continuous, Acres, 2;
    ContainReportSpread = "vContainReportSpread", Continuous, ChainsPerHour, 1;
    ContainResourceArrival = "vContainResourceArrival", Text, Minutes, 0;
    ContainResourceBaseCost = "vContainResourceBaseCost", Text, Dollars, 0;
    ContainResourceDuration = "vContainResourceDuration", Text, Minutes, 0;
    ContainResourceHourCost = "vContainResourceHourCost", Text, DollarsPerHour, 0;
    ContainResourceName = "vContainResourceName", Text, None, 0;
    ContainResourceProd = "vContainResourceProd", Text, ChainsPerHour, 1;
    ContainResourcesUsed = "vContainResourcesUsed", Continuous, Count, 0;
    ContainSize = "vContainSize", Continuous, Acres, 2;
    ContainStatus = "vContainStatus", Discrete(CONTAIN_STATUS), None, 0;
    ContainTime = "vContainTime", Continuous, Minutes, 0;
    ContainXMax = "vContainXMax", Continuous, Chains, 1;
    ContainXMin = "vContainXMin", Continuous, Chains, 1;
    ContainYMax = "vContainYMax", Continuous, Chains, 1;

    CrownFireActiveCrown = "vCrownFireActiveCrown", Discrete(NO_YES), None, 0;
    CrownFireActiveRatio = "vCrownFireActiveRatio", Continuous, None, 2;
    CrownFireArea = "vCrownFireArea", Continuous, Acres, 1;
    CrownFireCritCrownSpreadRate = "vCrownFireCritCrownSpreadRate", Continuous, FeetPerMinute, 1;
    CrownFireCritSurfFireInt = "vCrownFireCritSurfFireInt", Continuous, BtuPerFootPerSecond, 0;
    CrownFireCritSurfFlameLeng = "vCrownFireCritSurfFlameLeng", Continuous, Feet, 1;
    CrownFireFlameLeng = "vCrownFireFlameLeng", Continuous, Feet, 1;
    CrownFireFuelLoad = "vCrownFireFuelLoad", Continuous, PoundsPerSquareFoot, 3;
    CrownFireHeatPerUnitArea = "vCrownFireHeatPerUnitArea", Continuous, BtuPerSquareFoot, 0;
    CrownFireHeatPerUnitAreaCanopy = "vCrownFireHeatPerUnitAreaCanopy", Continuous, BtuPerSquareFoot, 0;
    CrownFireLengthToWidth = "vCrownFireLengthToWidth", Continuous, None, 2;
    CrownFireLineInt = "vCrownFireLineInt", Continuous, BtuPerFootPerSecond, 0;
    CrownFirePerimeter = "vCrownFirePerimeter", Continuous, Feet, 0;
    CrownFirePowerOfFire = "vCrownFirePowerOfFire", Continuous, FootPoundsPerSecondPerSquareFoot, 1;
    CrownFirePowerOfWind = "vCrownFirePowerOfWind", Continuous, FootPoundsPerSecondPerSquareFoot, 1;
    CrownFirePowerRatio = "vCrownFirePowerRatio", Continuous, None, 2;
    CrownFireSpreadDist = "vCrownFireSpreadDist", Continuous, Feet, 0;
    CrownFireSpreadMapDist = "vCrownFireSpreadMapDist", Continuous, Inches, 2;
    CrownFireSpreadRate = "vCrownFireSpreadRate", Continuous, FeetPerMinute, 1;
    CrownFireTransRatio = "vCrownFireTransRatio", Continuous, None, 2;
    CrownFireTransToCrown = "vCrownFireTransToCrown", Discrete(NO_YES), None, 0;
    CrownFireType = "vCrownFireType", Discrete(FIRE_TYPE), None, 0;
    CrownFireWindDriven = "vCrownFireWindDriven", Discrete(WIND_DRIVEN), None, 0;

    DocDescription = "vDocDescription", Text, None, 0;
    DocFireAnalyst = "vDocFireAnalyst", Text, None, 0;
    DocFireName = "vDocFireName", Text, None, 0;
    DocFirePeriod = "vDocFirePeriod", Text, None, 0;
    DocRxAdminUnit = "vDocRxAdminUnit", Text, None, 0;
    DocRxName = "vDocRxName", Text, None, 0;
    DocRxPreparedBy = "vDocRxPreparedBy", Text, None, 0;
    DocTrainingCourse = "vDocTrainingCourse", Text, None, 0;
    DocTrainingExercise = "vDocTrainingExercise", Text, None, 0;
    DocTrainingTrainee = "vDocTrainingTrainee", Text, None, 0;

    IgnitionFirebrandFuelMois = "vIgnitionFirebrandFuelMois", Continuous, Fraction, 2;
    IgnitionFirebrandProb = "vIgnitionFirebrandProb", Continuous, Fraction, 2;
    IgnitionLightningDuffDepth = "vIgnitionLightningDuffDepth", Continuous, Inches, 1;
    IgnitionLightningFuelMois = "vIgnitionLightningFuelMois", Continuous, Fraction, 2;
    IgnitionLightningFuelType = "vIgnitionLightningFuelType", Discrete(LIGHTNING_FUEL), None, 0;
    IgnitionLightningProb = "vIgnitionLightningProb", Continuous, Fraction, 2;

    MapContourCount = "vMapContourCount", Continuous, Count, 0;
    MapContourInterval = "vMapContourInterval", Continuous, Feet, 0;
    MapDist = "vMapDist", Continuous, Inches, 2;
    MapFraction = "vMapFraction", Continuous, None, 0;
    MapScale = "vMapScale", Continuous, InchesPerMile, 2;

    SafetyZoneEquipmentArea = "vSafetyZoneEquipmentArea", Continuous, SquareFeet, 0;
    SafetyZoneEquipmentNumber = "vSafetyZoneEquipmentNumber", Continuous, Count, 0;
    SafetyZonePersonnelArea = "vSafetyZonePersonnelArea", Continuous, SquareFeet, 0;
    SafetyZonePersonnelNumber = "vSafetyZonePersonnelNumber", Continuous, Count, 0;
    SafetyZoneRadius = "vSafetyZoneRadius", Continuous, Feet, 0;
    SafetyZoneSepDist = "vSafetyZoneSepDist", Continuous, Feet, 0;
    SafetyZoneSize = "vSafetyZoneSize", Continuous, SquareFeet, 0;

    SiteAspectDirFromCompass = "vSiteAspectDirFromCompass", Discrete(COMPASS), None, 0;
    SiteAspectDirFromNorth = "vSiteAspectDirFromNorth", Continuous, Degrees, 0;
    SiteElevation = "vSiteElevation", Continuous, Feet, 0;
    SiteRidgeToValleyDist = "vSiteRidgeToValleyDist", Continuous, Miles, 2;
    SiteRidgeToValleyElev = "vSiteRidgeToValleyElev", Continuous, Feet, 0;
    SiteRidgeToValleyMapDist = "vSiteRidgeToValleyMapDist", Continuous, Inches, 2;
    SiteSlopeDegrees = "vSiteSlopeDegrees", Continuous, Degrees, 1;
    SiteSlopeFraction = "vSiteSlopeFraction", Continuous, Fraction, 2;
    SiteSlopeReach = "vSiteSlopeReach", Continuous, Feet, 0;
    SiteSlopeRise = "vSiteSlopeRise", Continuous, Feet, 0;
    SiteSunShading = "vSiteSunShading", Continuous, Fraction, 2;
    SiteUpslopeDirFromNorth = "vSiteUpslopeDirFromNorth", Continuous, Degrees, 0;

    SpotCoverHtBurningPile = "vSpotCoverHtBurningPile", Continuous, Feet, 1;
    SpotCoverHtSurfaceFire = "vSpotCoverHtSurfaceFire", Continuous, Feet, 1;
    SpotCoverHtTorchingTrees = "vSpotCoverHtTorchingTrees", Continuous, Feet, 1;
    SpotDistBurningPile = "vSpotDistBurningPile", Continuous, Miles, 2;
    SpotDistSurfaceFire = "vSpotDistSurfaceFire", Continuous, Miles, 2;
    SpotDistTorchingTrees = "vSpotDistTorchingTrees", Continuous, Miles, 2;
    SpotFireSource = "vSpotFireSource", Discrete(SPOT_SOURCE), None, 0;
    SpotFirebrandDriftSurfaceFire = "vSpotFirebrandDriftSurfaceFire", Continuous, Miles, 2;
    SpotFirebrandHtBurningPile = "vSpotFirebrandHtBurningPile", Continuous, Feet, 1;
    SpotFirebrandHtSurfaceFire = "vSpotFirebrandHtSurfaceFire", Continuous, Feet, 1;
    SpotFirebrandHtTorchingTrees = "vSpotFirebrandHtTorchingTrees", Continuous, Feet, 1;
    SpotFlameDurTorchingTrees = "vSpotFlameDurTorchingTrees", Continuous, Minutes, 2;
    SpotFlameHtTorchingTrees = "vSpotFlameHtTorchingTrees", Continuous, Feet, 1;
    SpotFlameRatioTorchingTrees = "vSpotFlameRatioTorchingTrees", Continuous, None, 2;
    SpotFlatDistBurningPile = "vSpotFlatDistBurningPile", Continuous, Miles, 2;
    SpotFlatDistSurfaceFire = "vSpotFlatDistSurfaceFire", Continuous, Miles, 2;
    SpotFlatDistTorchingTrees = "vSpotFlatDistTorchingTrees", Continuous, Miles, 2;
    SpotMapDistBurningPile = "vSpotMapDistBurningPile", Continuous, Inches, 2;
    SpotMapDistSurfaceFire = "vSpotMapDistSurfaceFire", Continuous, Inches, 2;
    SpotMapDistTorchingTrees = "vSpotMapDistTorchingTrees", Continuous, Inches, 2;
    SpotTorchingTrees = "vSpotTorchingTrees", Continuous, Count, 0;

    SurfaceFireArea = "vSurfaceFireArea", Continuous, Acres, 2;
    SurfaceFireCharacteristicsDiagram = "vSurfaceFireCharacteristicsDiagram", Continuous, None, 0;
    SurfaceFireDistAtBack = "vSurfaceFireDistAtBack", Continuous, Feet, 1;
    SurfaceFireDistAtHead = "vSurfaceFireDistAtHead", Continuous, Feet, 1;
    SurfaceFireDistAtVector = "vSurfaceFireDistAtVector", Continuous, Feet, 1;
    SurfaceFireEccentricity = "vSurfaceFireEccentricity", Continuous, None, 2;
    SurfaceFireEffWindAtHead = "vSurfaceFireEffWindAtHead", Continuous, MilesPerHour, 1;
    SurfaceFireEffWindAtVector = "vSurfaceFireEffWindAtVector", Continuous, MilesPerHour, 1;
    SurfaceFireElapsedTime = "vSurfaceFireElapsedTime", Continuous, Minutes, 1;
    SurfaceFireFlameAngleAtVector = "vSurfaceFireFlameAngleAtVector", Continuous, Degrees, 1;
    SurfaceFireFlameHtAtVector = "vSurfaceFireFlameHtAtVector", Continuous, Feet, 1;
    SurfaceFireFlameHtPile = "vSurfaceFireFlameHtPile", Continuous, Feet, 1;
    SurfaceFireFlameLengAtHead = "vSurfaceFireFlameLengAtHead", Continuous, Feet, 1;
    SurfaceFireFlameLengAtVector = "vSurfaceFireFlameLengAtVector", Continuous, Feet, 1;
    SurfaceFireHeatPerUnitArea = "vSurfaceFireHeatPerUnitArea", Continuous, BtuPerSquareFoot, 0;
    SurfaceFireHeatSource = "vSurfaceFireHeatSource", Continuous, BtuPerSquareFootPerMinute, 0;
    SurfaceFireLengDist = "vSurfaceFireLengDist", Continuous, Feet, 1;
    SurfaceFireLengMapDist = "vSurfaceFireLengMapDist", Continuous, Inches, 2;
    SurfaceFireLengthToWidth = "vSurfaceFireLengthToWidth", Continuous, None, 2;
    SurfaceFireLineIntAtHead = "vSurfaceFireLineIntAtHead", Continuous, BtuPerFootPerSecond, 0;
    SurfaceFireLineIntAtVector = "vSurfaceFireLineIntAtVector", Continuous, BtuPerFootPerSecond, 0;
    SurfaceFireMapDistAtBack = "vSurfaceFireMapDistAtBack", Continuous, Inches, 2;
    SurfaceFireMapDistAtHead = "vSurfaceFireMapDistAtHead", Continuous, Inches, 2;
    SurfaceFireMapDistAtVector = "vSurfaceFireMapDistAtVector", Continuous, Inches, 2;
    SurfaceFireMaxDirDiagram = "vSurfaceFireMaxDirDiagram", Continuous, None, 0;
    SurfaceFireMaxDirFromNorth = "vSurfaceFireMaxDirFromNorth", Continuous, Degrees, 0;
    SurfaceFireMaxDirFromUpslope = "vSurfaceFireMaxDirFromUpslope", Continuous, Degrees, 0;
    SurfaceFireNoWindRate = "vSurfaceFireNoWindRate", Continuous, FeetPerMinute, 2;
    SurfaceFirePerimeter = "vSurfaceFirePerimeter", Continuous, Feet, 0;
    SurfaceFirePropagatingFlux = "vSurfaceFirePropagatingFlux", Continuous, None, 4;
    SurfaceFireReactionInt = "vSurfaceFireReactionInt", Continuous, BtuPerSquareFootPerMinute, 0;
    SurfaceFireReactionIntDead = "vSurfaceFireReactionIntDead", Continuous, BtuPerSquareFootPerMinute, 0;
    SurfaceFireReactionIntLive = "vSurfaceFireReactionIntLive", Continuous, BtuPerSquareFootPerMinute, 0;
    SurfaceFireResidenceTime = "vSurfaceFireResidenceTime", Continuous, Minutes, 3;
    SurfaceFireScorchHtAtVector = "vSurfaceFireScorchHtAtVector", Continuous, Feet, 0;
    SurfaceFireSeverityAspen = "vSurfaceFireSeverityAspen", Discrete(ASPEN_SEVERITY), None, 0;
    SurfaceFireShapeDiagram = "vSurfaceFireShapeDiagram", Continuous, None, 0;
    SurfaceFireSlopeFactor = "vSurfaceFireSlopeFactor", Continuous, None, 2;
    SurfaceFireSpreadAtBack = "vSurfaceFireSpreadAtBack", Continuous, FeetPerMinute, 1;
    SurfaceFireSpreadAtHead = "vSurfaceFireSpreadAtHead", Continuous, FeetPerMinute, 1;
    SurfaceFireSpreadAtVector = "vSurfaceFireSpreadAtVector", Continuous, FeetPerMinute, 1;
    SurfaceFireVectorBeta = "vSurfaceFireVectorBeta", Continuous, Degrees, 0;
    SurfaceFireVectorDirFromCompass = "vSurfaceFireVectorDirFromCompass", Discrete(COMPASS), None, 0;
    SurfaceFireVectorDirFromNorth = "vSurfaceFireVectorDirFromNorth", Continuous, Degrees, 0;
    SurfaceFireVectorDirFromUpslope = "vSurfaceFireVectorDirFromUpslope", Continuous, Degrees, 0;
    SurfaceFireWidthDist = "vSurfaceFireWidthDist", Continuous, Feet, 1;
    SurfaceFireWidthMapDist = "vSurfaceFireWidthMapDist", Continuous, Inches, 2;
    SurfaceFireWindFactor = "vSurfaceFireWindFactor", Continuous, None, 2;
    SurfaceFireWindSpeedFlag = "vSurfaceFireWindSpeedFlag", Discrete(NO_YES), None, 0;
    SurfaceFireWindSpeedLimit = "vSurfaceFireWindSpeedLimit", Continuous, MilesPerHour, 1;

    SurfaceFuelAspenCuring = "vSurfaceFuelAspenCuring", Continuous, Fraction, 2;
    SurfaceFuelAspenLoadDead1 = "vSurfaceFuelAspenLoadDead1", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelAspenLoadDead10 = "vSurfaceFuelAspenLoadDead10", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelAspenLoadLiveHerb = "vSurfaceFuelAspenLoadLiveHerb", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelAspenLoadLiveWoody = "vSurfaceFuelAspenLoadLiveWoody", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelAspenSavrDead1 = "vSurfaceFuelAspenSavrDead1", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelAspenSavrDead10 = "vSurfaceFuelAspenSavrDead10", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelAspenSavrLiveHerb = "vSurfaceFuelAspenSavrLiveHerb", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelAspenSavrLiveWoody = "vSurfaceFuelAspenSavrLiveWoody", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelAspenType = "vSurfaceFuelAspenType", Discrete(ASPEN_TYPE), None, 0;
    SurfaceFuelBedBetaRatio = "vSurfaceFuelBedBetaRatio", Continuous, None, 2;
    SurfaceFuelBedBulkDensity = "vSurfaceFuelBedBulkDensity", Continuous, PoundsPerCubicFoot, 4;
    SurfaceFuelBedCoverage1 = "vSurfaceFuelBedCoverage1", Continuous, Fraction, 2;
    SurfaceFuelBedDeadFraction = "vSurfaceFuelBedDeadFraction", Continuous, Fraction, 2;
    SurfaceFuelBedDepth = "vSurfaceFuelBedDepth", Continuous, Feet, 2;
    SurfaceFuelBedHeatSink = "vSurfaceFuelBedHeatSink", Continuous, BtuPerCubicFoot, 0;
    SurfaceFuelBedLiveFraction = "vSurfaceFuelBedLiveFraction", Continuous, Fraction, 2;
    SurfaceFuelBedMextDead = "vSurfaceFuelBedMextDead", Continuous, Fraction, 2;
    SurfaceFuelBedMextLive = "vSurfaceFuelBedMextLive", Continuous, Fraction, 2;
    SurfaceFuelBedModel = "vSurfaceFuelBedModel", FuelModel, None, 0;
    SurfaceFuelBedModel1 = "vSurfaceFuelBedModel1", FuelModel, None, 0;
    SurfaceFuelBedModel2 = "vSurfaceFuelBedModel2", FuelModel, None, 0;
    SurfaceFuelBedMoisDead = "vSurfaceFuelBedMoisDead", Continuous, Fraction, 2;
    SurfaceFuelBedMoisLive = "vSurfaceFuelBedMoisLive", Continuous, Fraction, 2;
    SurfaceFuelBedPackingRatio = "vSurfaceFuelBedPackingRatio", Continuous, None, 4;
    SurfaceFuelBedSigma = "vSurfaceFuelBedSigma", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelHeatDead = "vSurfaceFuelHeatDead", Continuous, BtuPerPound, 0;
    SurfaceFuelHeatLive = "vSurfaceFuelHeatLive", Continuous, BtuPerPound, 0;
    SurfaceFuelLoadDead = "vSurfaceFuelLoadDead", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadDead1 = "vSurfaceFuelLoadDead1", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadDead10 = "vSurfaceFuelLoadDead10", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadDead100 = "vSurfaceFuelLoadDead100", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadDeadHerb = "vSurfaceFuelLoadDeadHerb", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadLive = "vSurfaceFuelLoadLive", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadLiveHerb = "vSurfaceFuelLoadLiveHerb", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadLiveWood = "vSurfaceFuelLoadLiveWood", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelLoadTransferEq = "vSurfaceFuelLoadTransferEq", Discrete(LOAD_TRANSFER), None, 0;
    SurfaceFuelLoadTransferFraction = "vSurfaceFuelLoadTransferFraction", Continuous, Fraction, 2;
    SurfaceFuelLoadUndeadHerb = "vSurfaceFuelLoadUndeadHerb", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelMoisDead1 = "vSurfaceFuelMoisDead1", Continuous, Fraction, 2;
    SurfaceFuelMoisDead10 = "vSurfaceFuelMoisDead10", Continuous, Fraction, 2;
    SurfaceFuelMoisDead100 = "vSurfaceFuelMoisDead100", Continuous, Fraction, 2;
    SurfaceFuelMoisDead1000 = "vSurfaceFuelMoisDead1000", Continuous, Fraction, 2;
    SurfaceFuelMoisLifeDead = "vSurfaceFuelMoisLifeDead", Continuous, Fraction, 2;
    SurfaceFuelMoisLifeLive = "vSurfaceFuelMoisLifeLive", Continuous, Fraction, 2;
    SurfaceFuelMoisLiveHerb = "vSurfaceFuelMoisLiveHerb", Continuous, Fraction, 2;
    SurfaceFuelMoisLiveWood = "vSurfaceFuelMoisLiveWood", Continuous, Fraction, 2;
    SurfaceFuelMoisScenario = "vSurfaceFuelMoisScenario", MoistureScenario, None, 0;
    SurfaceFuelPalmettoAge = "vSurfaceFuelPalmettoAge", Continuous, Years, 1;
    SurfaceFuelPalmettoCover = "vSurfaceFuelPalmettoCover", Continuous, Percent, 1;
    SurfaceFuelPalmettoHeight = "vSurfaceFuelPalmettoHeight", Continuous, Feet, 1;
    SurfaceFuelPalmettoLoadDead1 = "vSurfaceFuelPalmettoLoadDead1", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoLoadDead10 = "vSurfaceFuelPalmettoLoadDead10", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoLoadDeadFoliage = "vSurfaceFuelPalmettoLoadDeadFoliage", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoLoadLitter = "vSurfaceFuelPalmettoLoadLitter", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoLoadLive1 = "vSurfaceFuelPalmettoLoadLive1", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoLoadLive10 = "vSurfaceFuelPalmettoLoadLive10", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoLoadLiveFoliage = "vSurfaceFuelPalmettoLoadLiveFoliage", Continuous, PoundsPerSquareFoot, 3;
    SurfaceFuelPalmettoOverstoryBasalArea = "vSurfaceFuelPalmettoOverstoryBasalArea", Continuous, SquareFeetPerAcre, 0;
    SurfaceFuelSavrDead1 = "vSurfaceFuelSavrDead1", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelSavrLiveHerb = "vSurfaceFuelSavrLiveHerb", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelSavrLiveWood = "vSurfaceFuelSavrLiveWood", Continuous, SquareFeetPerCubicFoot, 0;
    SurfaceFuelTemp = "vSurfaceFuelTemp", Continuous, Fahrenheit, 0;

    TimeIntegerDate = "vTimeIntegerDate", Continuous, None, 0;
    TimeJulianDate = "vTimeJulianDate", Continuous, Days, 2;

    TreeBarkThickness = "vTreeBarkThickness", Continuous, Inches, 2;
    TreeCanopyBulkDens = "vTreeCanopyBulkDens", Continuous, PoundsPerCubicFoot, 4;
    TreeCanopyCover = "vTreeCanopyCover", Continuous, Fraction, 2;
    TreeCanopyCrownFraction = "vTreeCanopyCrownFraction", Continuous, Fraction, 2;
    TreeCount = "vTreeCount", Continuous, Count, 0;
    TreeCoverHt = "vTreeCoverHt", Continuous, Feet, 1;
    TreeCoverHtDownwind = "vTreeCoverHtDownwind", Continuous, Feet, 1;
    TreeCrownBaseHt = "vTreeCrownBaseHt", Continuous, Feet, 1;
    TreeCrownLengFractionScorchedAtVector = "vTreeCrownLengFractionScorchedAtVector", Continuous, Fraction, 2;
    TreeCrownLengScorchedAtVector = "vTreeCrownLengScorchedAtVector", Continuous, Feet, 1;
    TreeCrownRatio = "vTreeCrownRatio", Continuous, Fraction, 2;
    TreeCrownVolScorchedAtVector = "vTreeCrownVolScorchedAtVector", Continuous, Fraction, 2;
    TreeDbh = "vTreeDbh", Continuous, Inches, 1;
    TreeFoliarMois = "vTreeFoliarMois", Continuous, Percent, 0;
    TreeHt = "vTreeHt", Continuous, Feet, 1;
    TreeMortalityCountAtVector = "vTreeMortalityCountAtVector", Continuous, Count, 0;
    TreeMortalityRateAspenAtVector = "vTreeMortalityRateAspenAtVector", Continuous, Fraction, 2;
    TreeMortalityRateAtVector = "vTreeMortalityRateAtVector", Continuous, Fraction, 2;
    TreeSpecies = "vTreeSpecies", Discrete(mortality::SPECIES_CODES), None, 0;
    TreeSpeciesMortality = "vTreeSpeciesMortality", Discrete(MORTALITY_SPECIES), None, 0;
    TreeSpeciesSpot = "vTreeSpeciesSpot", Discrete(spotting::TORCHING_SPECIES), None, 0;

    WindAdjFactor = "vWindAdjFactor", Continuous, Fraction, 2;
    WindAdjMethod = "vWindAdjMethod", Discrete(WAF_METHOD), None, 0;
    WindDirFromCompass = "vWindDirFromCompass", Discrete(COMPASS), None, 0;
    WindDirFromNorth = "vWindDirFromNorth", Continuous, Degrees, 0;
    WindDirFromUpslope = "vWindDirFromUpslope", Continuous, Degrees, 0;
    WindSpeedAt10M = "vWindSpeedAt10M", Continuous, MilesPerHour, 1;
    WindSpeedAt20Ft = "vWindSpeedAt20Ft", Continuous, MilesPerHour, 1;
    WindSpeedAtMidflame = "vWindSpeedAtMidflame", Continuous, MilesPerHour, 1;

    WthrAirTemp = "vWthrAirTemp", Continuous, Fahrenheit, 0;
    WthrCumulusBaseHt = "vWthrCumulusBaseHt", Continuous, Feet, 0;
    WthrDewPointTemp = "vWthrDewPointTemp", Continuous, Fahrenheit, 0;
    WthrHeatIndex = "vWthrHeatIndex", Continuous, Fahrenheit, 0;
    WthrLightningStrikeType = "vWthrLightningStrikeType", Discrete(LIGHTNING_CHARGE), None, 0;
    WthrRelativeHumidity = "vWthrRelativeHumidity", Continuous, Percent, 0;
    WthrSummerSimmerIndex = "vWthrSummerSimmerIndex", Continuous, Fahrenheit, 0;
    WthrWetBulbTemp = "vWthrWetBulbTemp", Continuous, Fahrenheit, 0;
    WthrWindChillTemp = "vWthrWindChillTemp", Continuous, Fahrenheit, 0;
}

impl Var {
    /// Static declaration of this cell
    #[inline]
    #[must_use]
    pub fn decl(self) -> &'static CellDecl {
        &VAR_DECLS[self as usize]
    }

    /// Worksheet name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        self.decl().name
    }
}

// ============================================================================
// PARTICLE ARRAYS
// ============================================================================

/// Per-particle fuel attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParticleAttr {
    /// Oven-dry particle density (lb/ft³)
    Dens,
    /// Low heat of combustion (Btu/lb)
    Heat,
    /// Life category (dead, herb, wood, litter)
    Life,
    /// Oven-dry load (lb/ft²)
    Load,
    /// Moisture content (fraction)
    Mois,
    /// Surface area to volume ratio (ft²/ft³)
    Savr,
    /// Effective (silica-free) mineral content (fraction)
    Seff,
    /// Total mineral content (fraction)
    Stot,
}

impl ParticleAttr {
    /// All attributes in declaration order
    pub const ALL: [ParticleAttr; 8] = [
        ParticleAttr::Dens,
        ParticleAttr::Heat,
        ParticleAttr::Life,
        ParticleAttr::Load,
        ParticleAttr::Mois,
        ParticleAttr::Savr,
        ParticleAttr::Seff,
        ParticleAttr::Stot,
    ];

    /// Declaration of particle `index` of this attribute array
    #[must_use]
    pub fn decl(self, index: usize) -> CellDecl {
        let (kind, unit, decimals) = match self {
            ParticleAttr::Dens => (CellKind::Continuous, Unit::PoundsPerCubicFoot, 1),
            ParticleAttr::Heat => (CellKind::Continuous, Unit::BtuPerPound, 0),
            ParticleAttr::Life => (CellKind::Discrete(PARTICLE_LIFE), Unit::None, 0),
            ParticleAttr::Load => (CellKind::Continuous, Unit::PoundsPerSquareFoot, 3),
            ParticleAttr::Mois => (CellKind::Continuous, Unit::Fraction, 2),
            ParticleAttr::Savr => (CellKind::Continuous, Unit::SquareFeetPerCubicFoot, 0),
            ParticleAttr::Seff => (CellKind::Continuous, Unit::Fraction, 4),
            ParticleAttr::Stot => (CellKind::Continuous, Unit::Fraction, 4),
        };
        CellDecl {
            name: PARTICLE_NAMES[self as usize][index],
            kind,
            unit,
            decimals,
        }
    }
}

const PARTICLE_NAMES: [[&str; MAX_PARTICLES]; 8] = [
    [
        "vSurfaceFuelDens0", "vSurfaceFuelDens1", "vSurfaceFuelDens2", "vSurfaceFuelDens3",
        "vSurfaceFuelDens4", "vSurfaceFuelDens5", "vSurfaceFuelDens6", "vSurfaceFuelDens7",
    ],
    [
        "vSurfaceFuelHeat0", "vSurfaceFuelHeat1", "vSurfaceFuelHeat2", "vSurfaceFuelHeat3",
        "vSurfaceFuelHeat4", "vSurfaceFuelHeat5", "vSurfaceFuelHeat6", "vSurfaceFuelHeat7",
    ],
    [
        "vSurfaceFuelLife0", "vSurfaceFuelLife1", "vSurfaceFuelLife2", "vSurfaceFuelLife3",
        "vSurfaceFuelLife4", "vSurfaceFuelLife5", "vSurfaceFuelLife6", "vSurfaceFuelLife7",
    ],
    [
        "vSurfaceFuelLoad0", "vSurfaceFuelLoad1", "vSurfaceFuelLoad2", "vSurfaceFuelLoad3",
        "vSurfaceFuelLoad4", "vSurfaceFuelLoad5", "vSurfaceFuelLoad6", "vSurfaceFuelLoad7",
    ],
    [
        "vSurfaceFuelMois0", "vSurfaceFuelMois1", "vSurfaceFuelMois2", "vSurfaceFuelMois3",
        "vSurfaceFuelMois4", "vSurfaceFuelMois5", "vSurfaceFuelMois6", "vSurfaceFuelMois7",
    ],
    [
        "vSurfaceFuelSavr0", "vSurfaceFuelSavr1", "vSurfaceFuelSavr2", "vSurfaceFuelSavr3",
        "vSurfaceFuelSavr4", "vSurfaceFuelSavr5", "vSurfaceFuelSavr6", "vSurfaceFuelSavr7",
    ],
    [
        "vSurfaceFuelSeff0", "vSurfaceFuelSeff1", "vSurfaceFuelSeff2", "vSurfaceFuelSeff3",
        "vSurfaceFuelSeff4", "vSurfaceFuelSeff5", "vSurfaceFuelSeff6", "vSurfaceFuelSeff7",
    ],
    [
        "vSurfaceFuelStot0", "vSurfaceFuelStot1", "vSurfaceFuelStot2", "vSurfaceFuelStot3",
        "vSurfaceFuelStot4", "vSurfaceFuelStot5", "vSurfaceFuelStot6", "vSurfaceFuelStot7",
    ],
];

// ============================================================================
// HANDLES
// ============================================================================

/// Stable handle to a scalar or particle cell.
///
/// Scalar cells occupy `0..Var::ALL.len()`; particle cells follow, one block
/// of [`MAX_PARTICLES`] per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// Total number of cells in a graph
    pub const COUNT: usize = VAR_DECLS.len() + 8 * MAX_PARTICLES;

    /// Handle of particle `index` of `attr`
    #[inline]
    #[must_use]
    pub fn particle(attr: ParticleAttr, index: usize) -> CellId {
        debug_assert!(index < MAX_PARTICLES);
        CellId(VAR_DECLS.len() + attr as usize * MAX_PARTICLES + index)
    }

    /// Dense index into cell storage
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Handle for a dense storage index
    #[must_use]
    pub fn from_index(index: usize) -> Option<CellId> {
        (index < Self::COUNT).then_some(CellId(index))
    }

    /// The scalar cell, when this is one
    #[must_use]
    pub fn var(self) -> Option<Var> {
        Var::ALL.get(self.0).copied()
    }

    /// Static declaration
    #[must_use]
    pub fn decl(self) -> CellDecl {
        match self.var() {
            Some(var) => *var.decl(),
            None => {
                let offset = self.0 - VAR_DECLS.len();
                ParticleAttr::ALL[offset / MAX_PARTICLES].decl(offset % MAX_PARTICLES)
            }
        }
    }

    /// Worksheet name
    #[must_use]
    pub fn name(self) -> &'static str {
        self.decl().name
    }

    /// Iterate over every cell handle
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..Self::COUNT).map(CellId)
    }
}

impl From<Var> for CellId {
    #[inline]
    fn from(var: Var) -> CellId {
        CellId(var as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_names_are_unique() {
        let mut seen = FxHashSet::default();
        for id in CellId::all() {
            assert!(seen.insert(id.name()), "duplicate cell name {}", id.name());
        }
        assert_eq!(seen.len(), CellId::COUNT);
    }

    #[test]
    fn test_var_table_matches_enum() {
        for (i, var) in Var::ALL.iter().enumerate() {
            assert_eq!(*var as usize, i);
            assert_eq!(CellId::from(*var).var(), Some(*var));
        }
    }

    #[test]
    fn test_particle_handles() {
        let id = CellId::particle(ParticleAttr::Load, 3);
        assert_eq!(id.name(), "vSurfaceFuelLoad3");
        assert_eq!(id.var(), None);
        assert_eq!(id.decl().unit, Unit::PoundsPerSquareFoot);
        let life = CellId::particle(ParticleAttr::Life, 7);
        assert_eq!(life.decl().kind, CellKind::Discrete(PARTICLE_LIFE));
        assert_eq!(CellId::from_index(CellId::COUNT), None);
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(Var::ALL.len(), 266);
        assert_eq!(CellId::COUNT, 266 + 64);
    }
}

//! Surface fuel procedures
//!
//! Fuel bed assembly from catalog models, entered parameters and the two
//! dynamic fuel types, moisture assignment, and the two-model blended bed.

use tracing::{debug, trace};

use super::{fuel_bed, surface_fire, wind};
use crate::compositor::{self, SurfaceFireRun, WeightingPolicy};
use crate::config::options::{LoadTransferOption, SpreadDirOption, WindOption};
use crate::error::Result;
use crate::graph::{EvalContext, ParticleAttr, Var, MAX_PARTICLES};
use crate::physics::dynamic_fuels::{AspenFuel, PalmettoFuel};
use crate::physics::{fire_shape, ignition, rothermel, ExpectedSpreadConfig, Life, Particle};

/// Standard particle density (lb/ft³)
const DENSITY: f64 = 32.0;
/// Standard total mineral content
const STOT: f64 = 0.0555;
/// Standard effective mineral content
const SEFF: f64 = 0.010;

/// Dead particle surface-area-to-volume cut-offs of the 1-h, 10-h and 100-h
/// size classes; anything finer than the last falls to 1000-h.
const SAVR_1H: f64 = 192.0;
const SAVR_10H: f64 = 48.0;
const SAVR_100H: f64 = 16.0;

/// Write every particle attribute except moisture
fn write_particles(ctx: &mut EvalContext<'_>, particles: &[Particle]) -> Result<()> {
    for (i, p) in particles.iter().take(MAX_PARTICLES).enumerate() {
        ctx.set_particle(ParticleAttr::Dens, i, p.dens)?;
        ctx.set_particle(ParticleAttr::Heat, i, p.heat)?;
        ctx.set_particle_life(i, p.life.index())?;
        ctx.set_particle(ParticleAttr::Load, i, p.load)?;
        ctx.set_particle(ParticleAttr::Savr, i, p.savr)?;
        ctx.set_particle(ParticleAttr::Seff, i, p.seff)?;
        ctx.set_particle(ParticleAttr::Stot, i, p.stot)?;
    }
    Ok(())
}

// ============================================================================
// FUEL MODELS AND PARAMETERS
// ============================================================================

/// Copy the selected catalog model into the fuel parameter cells
pub fn bed_model(ctx: &mut EvalContext<'_>) -> Result<()> {
    let index = ctx.item(Var::SurfaceFuelBedModel)?;
    let model = ctx.env().fuels.model_at(index)?.clone();
    ctx.set_item(Var::SurfaceFuelLoadTransferEq, usize::from(model.dynamic))?;
    ctx.set_real(Var::SurfaceFuelBedDepth, model.depth)?;
    ctx.set_real(Var::SurfaceFuelBedMextDead, model.mext)?;
    ctx.set_real(Var::SurfaceFuelHeatDead, model.heat_dead)?;
    ctx.set_real(Var::SurfaceFuelHeatLive, model.heat_live)?;
    ctx.set_real(Var::SurfaceFuelLoadDead1, model.load1)?;
    ctx.set_real(Var::SurfaceFuelLoadDead10, model.load10)?;
    ctx.set_real(Var::SurfaceFuelLoadDead100, model.load100)?;
    ctx.set_real(Var::SurfaceFuelLoadLiveHerb, model.load_herb)?;
    ctx.set_real(Var::SurfaceFuelLoadLiveWood, model.load_wood)?;
    ctx.set_real(Var::SurfaceFuelSavrDead1, model.savr1)?;
    ctx.set_real(Var::SurfaceFuelSavrLiveHerb, model.savr_herb)?;
    ctx.set_real(Var::SurfaceFuelSavrLiveWood, model.savr_wood)
}

/// Particle set of a five-class fuel model
///
/// Slot 5 is the dead herbaceous particle that receives transferred herb
/// load; it starts empty. Slots 6 and 7 are unused.
pub fn bed_parms(ctx: &mut EvalContext<'_>) -> Result<()> {
    let heat_dead = ctx.real(Var::SurfaceFuelHeatDead)?;
    let heat_live = ctx.real(Var::SurfaceFuelHeatLive)?;
    let savr_herb = ctx.real(Var::SurfaceFuelSavrLiveHerb)?;
    let classes = [
        (Life::Dead, Var::SurfaceFuelLoadDead1, ctx.real(Var::SurfaceFuelSavrDead1)?, heat_dead),
        (Life::Dead, Var::SurfaceFuelLoadDead10, 109.0, heat_dead),
        (Life::Dead, Var::SurfaceFuelLoadDead100, 30.0, heat_dead),
        (Life::Herb, Var::SurfaceFuelLoadLiveHerb, savr_herb, heat_live),
        (Life::Wood, Var::SurfaceFuelLoadLiveWood, ctx.real(Var::SurfaceFuelSavrLiveWood)?, heat_live),
    ];

    let empty = Particle {
        life: Life::Dead,
        load: 0.0,
        savr: 1.0,
        dens: DENSITY,
        heat: 0.0,
        stot: STOT,
        seff: SEFF,
        mois: 0.0,
    };
    let mut particles = vec![empty; MAX_PARTICLES];
    for (slot, &(life, load, savr, heat)) in particles.iter_mut().zip(classes.iter()) {
        *slot = Particle {
            life,
            load: ctx.real(load)?,
            savr,
            heat,
            ..empty
        };
    }
    particles[5] = Particle {
        savr: savr_herb,
        heat: heat_dead,
        ..empty
    };
    write_particles(ctx, &particles)
}

// ============================================================================
// DYNAMIC FUELS
// ============================================================================

pub fn aspen_model(ctx: &mut EvalContext<'_>) -> Result<()> {
    let kind = ctx.item(Var::SurfaceFuelAspenType)?;
    let curing = ctx.real(Var::SurfaceFuelAspenCuring)?;
    let aspen = AspenFuel::new(kind, curing).unwrap_or_default();
    ctx.set_real(Var::SurfaceFuelBedDepth, aspen.depth)?;
    ctx.set_real(Var::SurfaceFuelBedMextDead, aspen.mext)?;
    ctx.set_real(Var::SurfaceFuelAspenLoadDead1, aspen.load_dead1)?;
    ctx.set_real(Var::SurfaceFuelAspenLoadDead10, aspen.load_dead10)?;
    ctx.set_real(Var::SurfaceFuelAspenLoadLiveHerb, aspen.load_live_herb)?;
    ctx.set_real(Var::SurfaceFuelAspenLoadLiveWoody, aspen.load_live_woody)?;
    ctx.set_real(Var::SurfaceFuelAspenSavrDead1, aspen.savr_dead1)?;
    ctx.set_real(Var::SurfaceFuelAspenSavrDead10, aspen.savr_dead10)?;
    ctx.set_real(Var::SurfaceFuelAspenSavrLiveHerb, aspen.savr_live_herb)?;
    ctx.set_real(Var::SurfaceFuelAspenSavrLiveWoody, aspen.savr_live_woody)
}

pub fn aspen_parms(ctx: &mut EvalContext<'_>) -> Result<()> {
    let aspen = AspenFuel {
        load_dead1: ctx.real(Var::SurfaceFuelAspenLoadDead1)?,
        load_dead10: ctx.real(Var::SurfaceFuelAspenLoadDead10)?,
        load_live_herb: ctx.real(Var::SurfaceFuelAspenLoadLiveHerb)?,
        load_live_woody: ctx.real(Var::SurfaceFuelAspenLoadLiveWoody)?,
        savr_dead1: ctx.real(Var::SurfaceFuelAspenSavrDead1)?,
        savr_dead10: ctx.real(Var::SurfaceFuelAspenSavrDead10)?,
        savr_live_herb: ctx.real(Var::SurfaceFuelAspenSavrLiveHerb)?,
        savr_live_woody: ctx.real(Var::SurfaceFuelAspenSavrLiveWoody)?,
        ..AspenFuel::default()
    };
    write_particles(ctx, &aspen.particles())
}

pub fn palmetto_model(ctx: &mut EvalContext<'_>) -> Result<()> {
    let palmetto = PalmettoFuel::new(
        ctx.real(Var::SurfaceFuelPalmettoAge)?,
        ctx.real(Var::SurfaceFuelPalmettoCover)?,
        ctx.real(Var::SurfaceFuelPalmettoHeight)?,
        ctx.real(Var::SurfaceFuelPalmettoOverstoryBasalArea)?,
    );
    ctx.set_real(Var::SurfaceFuelBedDepth, palmetto.depth)?;
    ctx.set_real(Var::SurfaceFuelBedMextDead, palmetto.mext)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadDead1, palmetto.dead1)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadDead10, palmetto.dead10)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadDeadFoliage, palmetto.dead_foliage)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadLitter, palmetto.litter)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadLive1, palmetto.live1)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadLive10, palmetto.live10)?;
    ctx.set_real(Var::SurfaceFuelPalmettoLoadLiveFoliage, palmetto.live_foliage)
}

pub fn palmetto_parms(ctx: &mut EvalContext<'_>) -> Result<()> {
    let palmetto = PalmettoFuel {
        dead1: ctx.real(Var::SurfaceFuelPalmettoLoadDead1)?,
        dead10: ctx.real(Var::SurfaceFuelPalmettoLoadDead10)?,
        dead_foliage: ctx.real(Var::SurfaceFuelPalmettoLoadDeadFoliage)?,
        litter: ctx.real(Var::SurfaceFuelPalmettoLoadLitter)?,
        live1: ctx.real(Var::SurfaceFuelPalmettoLoadLive1)?,
        live10: ctx.real(Var::SurfaceFuelPalmettoLoadLive10)?,
        live_foliage: ctx.real(Var::SurfaceFuelPalmettoLoadLiveFoliage)?,
        ..PalmettoFuel::default()
    };
    write_particles(ctx, &palmetto.particles())
}

// ============================================================================
// FUEL BED
// ============================================================================

pub fn bed_intermediates(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fuel = fuel_bed(ctx)?;
    let bed = fuel.intermediates();
    let dead_fraction = bed.dead_fraction();
    let live_fraction = if bed.dead_load + bed.live_load > 0.0 {
        1.0 - dead_fraction
    } else {
        0.0
    };
    ctx.set_real(Var::SurfaceFuelBedBetaRatio, bed.beta_ratio)?;
    ctx.set_real(Var::SurfaceFuelBedBulkDensity, bed.bulk_density)?;
    ctx.set_real(Var::SurfaceFuelBedDeadFraction, dead_fraction)?;
    ctx.set_real(Var::SurfaceFuelBedLiveFraction, live_fraction)?;
    ctx.set_real(Var::SurfaceFuelBedPackingRatio, bed.packing_ratio)?;
    ctx.set_real(Var::SurfaceFuelBedSigma, bed.sigma)?;
    ctx.set_real(Var::SurfaceFuelLoadDeadHerb, fuel.particles[5].load)?;
    ctx.set_real(Var::SurfaceFuelLoadUndeadHerb, fuel.particles[3].load)?;
    ctx.set_real(Var::SurfaceFuelLoadDead, bed.dead_load)?;
    ctx.set_real(Var::SurfaceFuelLoadLive, bed.live_load)
}

pub fn bed_heat_sink(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fuel = fuel_bed(ctx)?;
    let bed = fuel.intermediates();
    let sink = fuel.heat_sink(bed.bulk_density);
    ctx.set_real(Var::SurfaceFuelBedHeatSink, sink.heat_sink)?;
    ctx.set_real(Var::SurfaceFuelBedMextLive, sink.mext_live)?;
    ctx.set_real(Var::SurfaceFuelBedMoisDead, sink.mois_dead)?;
    ctx.set_real(Var::SurfaceFuelBedMoisLive, sink.mois_live)
}

/// Fraction of the live herb load transferred to dead, zero for static
/// models
pub fn load_transfer_fraction(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fraction = if ctx.item(Var::SurfaceFuelLoadTransferEq)? != 0 {
        rothermel::cured_herb_fraction(ctx.real(Var::SurfaceFuelMoisLiveHerb)?)
    } else {
        0.0
    };
    ctx.set_real(Var::SurfaceFuelLoadTransferFraction, fraction)
}

pub fn fuel_temp(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let shading = ctx.real(Var::SiteSunShading)?;
    ctx.set_real(Var::SurfaceFuelTemp, ignition::fuel_temperature(air, shading))
}

// ============================================================================
// MOISTURE
// ============================================================================

/// One dead and one live moisture spread over all size classes
pub fn mois_life_class(ctx: &mut EvalContext<'_>) -> Result<()> {
    let dead = ctx.real(Var::SurfaceFuelMoisLifeDead)?;
    let live = ctx.real(Var::SurfaceFuelMoisLifeLive)?;
    for var in [
        Var::SurfaceFuelMoisDead1,
        Var::SurfaceFuelMoisDead10,
        Var::SurfaceFuelMoisDead100,
        Var::SurfaceFuelMoisDead1000,
    ] {
        ctx.set_real(var, dead)?;
    }
    ctx.set_real(Var::SurfaceFuelMoisLiveHerb, live)?;
    ctx.set_real(Var::SurfaceFuelMoisLiveWood, live)
}

pub fn mois_scenario_model(ctx: &mut EvalContext<'_>) -> Result<()> {
    let index = ctx.item(Var::SurfaceFuelMoisScenario)?;
    let scenario = ctx.env().moistures.scenario_at(index)?.clone();
    ctx.set_real(Var::SurfaceFuelMoisDead1, scenario.dead1)?;
    ctx.set_real(Var::SurfaceFuelMoisDead10, scenario.dead10)?;
    ctx.set_real(Var::SurfaceFuelMoisDead100, scenario.dead100)?;
    ctx.set_real(Var::SurfaceFuelMoisDead1000, scenario.dead1000)?;
    ctx.set_real(Var::SurfaceFuelMoisLiveHerb, scenario.live_herb)?;
    ctx.set_real(Var::SurfaceFuelMoisLiveWood, scenario.live_wood)
}

/// Particle moistures from the time-lag classes
///
/// Live particles take their category's moisture and litter takes the
/// 100-h value. Dead particles are binned by surface-area-to-volume ratio.
pub fn mois_time_lag(ctx: &mut EvalContext<'_>) -> Result<()> {
    let d1 = ctx.real(Var::SurfaceFuelMoisDead1)?;
    let d10 = ctx.real(Var::SurfaceFuelMoisDead10)?;
    let d100 = ctx.real(Var::SurfaceFuelMoisDead100)?;
    let d1000 = ctx.real(Var::SurfaceFuelMoisDead1000)?;
    let herb = ctx.real(Var::SurfaceFuelMoisLiveHerb)?;
    let wood = ctx.real(Var::SurfaceFuelMoisLiveWood)?;
    for i in 0..MAX_PARTICLES {
        let mois = match Life::from_index(ctx.particle_life(i)?) {
            Life::Herb => herb,
            Life::Wood => wood,
            Life::Litter => d100,
            Life::Dead => match ctx.particle(ParticleAttr::Savr, i)? {
                s if s > SAVR_1H => d1,
                s if s > SAVR_10H => d10,
                s if s > SAVR_100H => d100,
                _ => d1000,
            },
        };
        ctx.set_particle(ParticleAttr::Mois, i, mois)?;
    }
    Ok(())
}

// ============================================================================
// TWO-MODEL FUEL BED
// ============================================================================

/// Switches that steer the single-model pipeline.
#[derive(Debug, Clone, Copy)]
struct Pipeline {
    wind: Option<WindOption>,
    transfer: Option<LoadTransferOption>,
    spread_dir: SpreadDirOption,
}

impl Pipeline {
    /// Run the complete single-model surface fire on `ctx`
    fn run(&self, ctx: &mut EvalContext<'_>) -> Result<SurfaceFireRun> {
        bed_model(ctx)?;
        bed_parms(ctx)?;
        if self.transfer == Some(LoadTransferOption::Calc) {
            load_transfer_fraction(ctx)?;
        }
        bed_intermediates(ctx)?;
        surface_fire::residence_time(ctx)?;
        mois_time_lag(ctx)?;
        bed_heat_sink(ctx)?;
        surface_fire::propagating_flux(ctx)?;
        surface_fire::reaction_int(ctx)?;
        surface_fire::no_wind_rate(ctx)?;

        if self.wind.is_some_and(WindOption::is_calculated) {
            wind::adj_factor(ctx)?;
        }
        if self.wind.is_some_and(|w| w != WindOption::Midflame) {
            wind::speed_at_midflame(ctx)?;
        }

        surface_fire::spread_at_head(ctx)?;
        surface_fire::line_int_at_head(ctx)?;
        surface_fire::flame_leng_at_head(ctx)?;
        surface_fire::length_to_width(ctx)?;
        surface_fire::eccentricity(ctx)?;
        match self.spread_dir {
            SpreadDirOption::Max => ctx.set_real(Var::SurfaceFireVectorBeta, 0.0)?,
            SpreadDirOption::Input => surface_fire::vector_beta(ctx)?,
        }
        surface_fire::spread_at_beta(ctx)?;
        surface_fire::line_int_at_vector(ctx)?;
        surface_fire::flame_leng_at_vector(ctx)?;
        surface_fire::eff_wind_at_vector(ctx)?;
        surface_fire::heat_per_unit_area(ctx)?;

        Ok(SurfaceFireRun {
            reaction_int: ctx.real(Var::SurfaceFireReactionInt)?,
            spread_at_head: ctx.real(Var::SurfaceFireSpreadAtHead)?,
            spread_at_vector: ctx.real(Var::SurfaceFireSpreadAtVector)?,
            max_dir: ctx.real(Var::SurfaceFireMaxDirFromUpslope)?,
            waf: ctx.real(Var::WindAdjFactor)?,
            midflame: ctx.real(Var::WindSpeedAtMidflame)?,
            eff_wind_head: ctx.real(Var::SurfaceFireEffWindAtHead)?,
            eff_wind_vector: ctx.real(Var::SurfaceFireEffWindAtVector)?,
            wind_limit: ctx.real(Var::SurfaceFireWindSpeedLimit)?,
            wind_flag: ctx.flag(Var::SurfaceFireWindSpeedFlag)?,
            length_to_width: ctx.real(Var::SurfaceFireLengthToWidth)?,
            heat_per_unit_area: ctx.real(Var::SurfaceFireHeatPerUnitArea)?,
            line_int_head: ctx.real(Var::SurfaceFireLineIntAtHead)?,
            line_int_vector: ctx.real(Var::SurfaceFireLineIntAtVector)?,
            flame_leng_head: ctx.real(Var::SurfaceFireFlameLengAtHead)?,
            flame_leng_vector: ctx.real(Var::SurfaceFireFlameLengAtVector)?,
            depth: ctx.real(Var::SurfaceFuelBedDepth)?,
        })
    }
}

fn sampler_count(ctx: &EvalContext<'_>, key: &str) -> Result<usize> {
    Ok(usize::try_from(ctx.props().integer(key)?.max(0)).unwrap_or(0))
}

/// Two fuel models blended by coverage
///
/// Each model runs the single-model pipeline on its own copy of the cell
/// store, then the two runs are merged.
pub fn bed_weighted(ctx: &mut EvalContext<'_>) -> Result<()> {
    let props = ctx.props();
    let policy = WeightingPolicy::from_props(props)?.unwrap_or(WeightingPolicy::AreaWeighted);
    let pipeline = Pipeline {
        wind: WindOption::from_props(props)?,
        transfer: LoadTransferOption::from_props(props)?,
        spread_dir: SpreadDirOption::from_props(props)?,
    };
    let sampler = ExpectedSpreadConfig {
        samples: sampler_count(ctx, "surfaceConfFuel2DSamples")?,
        depth: sampler_count(ctx, "surfaceConfFuel2DDepth")?,
        laterals: sampler_count(ctx, "surfaceConfFuel2DLaterals")?,
        ..ExpectedSpreadConfig::default()
    };

    let mut runs = [SurfaceFireRun::default(); 2];
    for (run, model_var) in runs
        .iter_mut()
        .zip([Var::SurfaceFuelBedModel1, Var::SurfaceFuelBedModel2])
    {
        let model = ctx.item(model_var)?;
        let mut values = ctx.snapshot();
        let mut scratch = ctx.scratch(&mut values);
        scratch.set_item(Var::SurfaceFuelBedModel, model)?;
        *run = pipeline.run(&mut scratch)?;
        trace!(model, head = run.spread_at_head, "single-model run");
    }

    let coverage = ctx.real(Var::SurfaceFuelBedCoverage1)?;
    let merged = compositor::composite(&runs[0], &runs[1], coverage, policy, &sampler);
    debug!(?policy, coverage, head = merged.spread_at_head, "two-model fuel bed");

    ctx.set_real(Var::SurfaceFireReactionInt, merged.reaction_int)?;
    ctx.set_real(Var::SurfaceFireSpreadAtHead, merged.spread_at_head)?;
    ctx.set_real(Var::SurfaceFireSpreadAtVector, merged.spread_at_vector)?;
    ctx.set_real(Var::SurfaceFireMaxDirFromUpslope, merged.max_dir)?;
    ctx.set_real(Var::SurfaceFireEffWindAtHead, merged.eff_wind_head)?;
    ctx.set_real(Var::SurfaceFireEffWindAtVector, merged.eff_wind_vector)?;
    ctx.set_real(Var::SurfaceFireWindSpeedLimit, merged.wind_limit)?;
    ctx.set_flag(Var::SurfaceFireWindSpeedFlag, merged.wind_flag)?;
    ctx.set_real(Var::SurfaceFireHeatPerUnitArea, merged.heat_per_unit_area)?;
    ctx.set_real(Var::SurfaceFireLineIntAtHead, merged.line_int_head)?;
    ctx.set_real(Var::SurfaceFireLineIntAtVector, merged.line_int_vector)?;

    ctx.set_real(Var::WindAdjFactor, merged.waf)?;
    ctx.set_real(Var::WindSpeedAtMidflame, merged.midflame)?;
    ctx.set_real(Var::SurfaceFuelBedDepth, merged.depth)?;
    ctx.set_real(Var::SurfaceFireLengthToWidth, merged.length_to_width)?;
    ctx.set_real(
        Var::SurfaceFireEccentricity,
        fire_shape::eccentricity(merged.length_to_width),
    )?;
    ctx.set_real(Var::SurfaceFireFlameLengAtHead, merged.flame_leng_head)?;
    ctx.set_real(Var::SurfaceFireFlameLengAtVector, merged.flame_leng_vector)
}

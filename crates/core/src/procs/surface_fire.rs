//! Surface fire behavior procedures

use super::{fuel_bed, map_dist, snap_degrees};
use crate::core_types::units::SQUARE_FEET_PER_ACRE;
use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::rothermel::{self, SpreadInputs};
use crate::physics::{fire_shape, geometry};

// ============================================================================
// REACTION AND SPREAD
// ============================================================================

/// Reaction intensity of the fuel bed, total and by life category
pub fn reaction_int(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fuel = fuel_bed(ctx)?;
    let bed = fuel.intermediates();
    let sink = fuel.heat_sink(bed.bulk_density);
    let ir = fuel.reaction_intensity(&bed, &sink);
    ctx.set_real(Var::SurfaceFireReactionInt, ir.total)?;
    ctx.set_real(Var::SurfaceFireReactionIntDead, ir.dead)?;
    ctx.set_real(Var::SurfaceFireReactionIntLive, ir.live)
}

pub fn residence_time(ctx: &mut EvalContext<'_>) -> Result<()> {
    let sigma = ctx.real(Var::SurfaceFuelBedSigma)?;
    ctx.set_real(Var::SurfaceFireResidenceTime, rothermel::residence_time(sigma))
}

pub fn propagating_flux(ctx: &mut EvalContext<'_>) -> Result<()> {
    let beta = ctx.real(Var::SurfaceFuelBedPackingRatio)?;
    let sigma = ctx.real(Var::SurfaceFuelBedSigma)?;
    ctx.set_real(
        Var::SurfaceFirePropagatingFlux,
        rothermel::propagating_flux(sigma, beta),
    )
}

pub fn no_wind_rate(ctx: &mut EvalContext<'_>) -> Result<()> {
    let sink = ctx.real(Var::SurfaceFuelBedHeatSink)?;
    let flux = ctx.real(Var::SurfaceFirePropagatingFlux)?;
    let ir = ctx.real(Var::SurfaceFireReactionInt)?;
    ctx.set_real(
        Var::SurfaceFireNoWindRate,
        rothermel::no_wind_rate(ir, flux, sink),
    )
}

/// Spread rate, direction and effective wind in the direction of maximum
/// spread
///
/// The wind limit is applied when configured, except for aspen fuels whose
/// loads fall outside the data the limit was fitted to.
pub fn spread_at_head(ctx: &mut EvalContext<'_>) -> Result<()> {
    let props = ctx.props();
    let apply_wind_limit = props.boolean("surfaceConfWindLimitApplied")?
        && !props.boolean("surfaceConfFuelAspen")?;
    let spread = rothermel::forward_spread(&SpreadInputs {
        no_wind_rate: ctx.real(Var::SurfaceFireNoWindRate)?,
        reaction_int: ctx.real(Var::SurfaceFireReactionInt)?,
        slope: ctx.real(Var::SiteSlopeFraction)?,
        midflame: ctx.real(Var::WindSpeedAtMidflame)?,
        wind_dir_from_upslope: ctx.real(Var::WindDirFromUpslope)?,
        sigma: ctx.real(Var::SurfaceFuelBedSigma)?,
        packing_ratio: ctx.real(Var::SurfaceFuelBedPackingRatio)?,
        beta_ratio: ctx.real(Var::SurfaceFuelBedBetaRatio)?,
        apply_wind_limit,
    });
    ctx.set_real(Var::SurfaceFireSpreadAtHead, spread.spread_rate)?;
    ctx.set_real(Var::SurfaceFireMaxDirFromUpslope, spread.dir_from_upslope)?;
    ctx.set_real(Var::SurfaceFireEffWindAtHead, spread.eff_wind)?;
    ctx.set_real(Var::SurfaceFireWindSpeedLimit, spread.wind_limit)?;
    ctx.set_flag(Var::SurfaceFireWindSpeedFlag, spread.wind_exceeded)?;
    ctx.set_real(Var::SurfaceFireWindFactor, spread.wind_factor)?;
    ctx.set_real(Var::SurfaceFireSlopeFactor, spread.slope_factor)
}

pub fn spread_at_back(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ecc = ctx.real(Var::SurfaceFireEccentricity)?;
    let head = ctx.real(Var::SurfaceFireSpreadAtHead)?;
    ctx.set_real(
        Var::SurfaceFireSpreadAtBack,
        fire_shape::spread_at_back(head, ecc),
    )
}

/// Spread rate along the vector `beta` degrees off the direction of maximum
/// spread
pub fn spread_at_beta(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ecc = ctx.real(Var::SurfaceFireEccentricity)?;
    let head = ctx.real(Var::SurfaceFireSpreadAtHead)?;
    let beta = ctx.real(Var::SurfaceFireVectorBeta)?;
    ctx.set_real(
        Var::SurfaceFireSpreadAtVector,
        fire_shape::spread_at_beta(head, ecc, beta),
    )
}

pub fn eff_wind_at_vector(ctx: &mut EvalContext<'_>) -> Result<()> {
    let wind = rothermel::effective_wind_for_rate(
        ctx.real(Var::SurfaceFireSpreadAtVector)?,
        ctx.real(Var::SurfaceFireNoWindRate)?,
        ctx.real(Var::SurfaceFuelBedSigma)?,
        ctx.real(Var::SurfaceFuelBedBetaRatio)?,
    );
    ctx.set_real(Var::SurfaceFireEffWindAtVector, wind)
}

// ============================================================================
// INTENSITY AND FLAME
// ============================================================================

pub fn heat_per_unit_area(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ir = ctx.real(Var::SurfaceFireReactionInt)?;
    let tau = ctx.real(Var::SurfaceFireResidenceTime)?;
    ctx.set_real(
        Var::SurfaceFireHeatPerUnitArea,
        fire_shape::heat_per_unit_area(ir, tau),
    )
}

/// Heat source, spread rate times heat sink
pub fn heat_source(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ros = ctx.real(Var::SurfaceFireSpreadAtHead)?;
    let sink = ctx.real(Var::SurfaceFuelBedHeatSink)?;
    ctx.set_real(Var::SurfaceFireHeatSource, ros * sink)
}

fn line_int(ctx: &mut EvalContext<'_>, spread: Var, out: Var) -> Result<()> {
    let ir = ctx.real(Var::SurfaceFireReactionInt)?;
    let tau = ctx.real(Var::SurfaceFireResidenceTime)?;
    let ros = ctx.real(spread)?;
    ctx.set_real(out, fire_shape::fireline_intensity(ir, tau, ros))
}

pub fn line_int_at_head(ctx: &mut EvalContext<'_>) -> Result<()> {
    line_int(ctx, Var::SurfaceFireSpreadAtHead, Var::SurfaceFireLineIntAtHead)
}

pub fn line_int_at_vector(ctx: &mut EvalContext<'_>) -> Result<()> {
    line_int(ctx, Var::SurfaceFireSpreadAtVector, Var::SurfaceFireLineIntAtVector)
}

pub fn flame_leng_at_head(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::SurfaceFireLineIntAtHead)?;
    ctx.set_real(Var::SurfaceFireFlameLengAtHead, fire_shape::flame_length(fli))
}

pub fn flame_leng_at_vector(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::SurfaceFireLineIntAtVector)?;
    ctx.set_real(Var::SurfaceFireFlameLengAtVector, fire_shape::flame_length(fli))
}

/// Flame height equals flame length for a vertical flame
pub fn flame_ht_at_vector(ctx: &mut EvalContext<'_>) -> Result<()> {
    let flame = ctx.real(Var::SurfaceFireFlameLengAtVector)?;
    ctx.set_real(Var::SurfaceFireFlameHtAtVector, flame)
}

fn scorch_ht(ctx: &mut EvalContext<'_>, fli: f64) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let wind = ctx.real(Var::WindSpeedAtMidflame)?;
    ctx.set_real(
        Var::SurfaceFireScorchHtAtVector,
        fire_shape::scorch_height(fli, wind, air),
    )
}

pub fn scorch_ht_from_flame_leng(ctx: &mut EvalContext<'_>) -> Result<()> {
    let flame = ctx.real(Var::SurfaceFireFlameLengAtVector)?;
    scorch_ht(ctx, fire_shape::fireline_intensity_from_flame_length(flame))
}

pub fn scorch_ht_from_fli(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::SurfaceFireLineIntAtVector)?;
    scorch_ht(ctx, fli)
}

// ============================================================================
// DIRECTION
// ============================================================================

pub fn max_dir_from_north(ctx: &mut EvalContext<'_>) -> Result<()> {
    let from_upslope = ctx.real(Var::SurfaceFireMaxDirFromUpslope)?;
    let upslope = ctx.real(Var::SiteUpslopeDirFromNorth)?;
    ctx.set_real(
        Var::SurfaceFireMaxDirFromNorth,
        snap_degrees(from_upslope + upslope),
    )
}

pub fn vector_beta(ctx: &mut EvalContext<'_>) -> Result<()> {
    let max = ctx.real(Var::SurfaceFireMaxDirFromUpslope)?;
    let vector = ctx.real(Var::SurfaceFireVectorDirFromUpslope)?;
    ctx.set_real(Var::SurfaceFireVectorBeta, fire_shape::vector_beta(max, vector))
}

pub fn vector_dir_from_north(ctx: &mut EvalContext<'_>) -> Result<()> {
    let index = ctx.item(Var::SurfaceFireVectorDirFromCompass)?;
    ctx.set_real(Var::SurfaceFireVectorDirFromNorth, geometry::compass_degrees(index))
}

pub fn vector_dir_from_upslope(ctx: &mut EvalContext<'_>) -> Result<()> {
    let vector = ctx.real(Var::SurfaceFireVectorDirFromNorth)?;
    let upslope = ctx.real(Var::SiteUpslopeDirFromNorth)?;
    ctx.set_real(
        Var::SurfaceFireVectorDirFromUpslope,
        geometry::wrap_degrees(vector - upslope),
    )
}

// ============================================================================
// SHAPE AND SIZE
// ============================================================================

pub fn length_to_width(ctx: &mut EvalContext<'_>) -> Result<()> {
    let wind = ctx.real(Var::SurfaceFireEffWindAtHead)?;
    ctx.set_real(Var::SurfaceFireLengthToWidth, fire_shape::length_to_width(wind))
}

pub fn eccentricity(ctx: &mut EvalContext<'_>) -> Result<()> {
    let lw = ctx.real(Var::SurfaceFireLengthToWidth)?;
    ctx.set_real(Var::SurfaceFireEccentricity, fire_shape::eccentricity(lw))
}

fn dist(ctx: &mut EvalContext<'_>, spread: Var, out: Var) -> Result<()> {
    let elapsed = ctx.real(Var::SurfaceFireElapsedTime)?;
    let ros = ctx.real(spread)?;
    ctx.set_real(out, ros * elapsed)
}

pub fn dist_at_back(ctx: &mut EvalContext<'_>) -> Result<()> {
    dist(ctx, Var::SurfaceFireSpreadAtBack, Var::SurfaceFireDistAtBack)
}

pub fn dist_at_head(ctx: &mut EvalContext<'_>) -> Result<()> {
    dist(ctx, Var::SurfaceFireSpreadAtHead, Var::SurfaceFireDistAtHead)
}

pub fn dist_at_vector(ctx: &mut EvalContext<'_>) -> Result<()> {
    dist(ctx, Var::SurfaceFireSpreadAtVector, Var::SurfaceFireDistAtVector)
}

/// Total fire length is head plus back spread distance
pub fn leng_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    let back = ctx.real(Var::SurfaceFireDistAtBack)?;
    let head = ctx.real(Var::SurfaceFireDistAtHead)?;
    ctx.set_real(Var::SurfaceFireLengDist, back + head)
}

pub fn width_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    let length = ctx.real(Var::SurfaceFireLengDist)?;
    let lw = ctx.real(Var::SurfaceFireLengthToWidth)?;
    ctx.set_real(Var::SurfaceFireWidthDist, fire_shape::width(length, lw))
}

pub fn area(ctx: &mut EvalContext<'_>) -> Result<()> {
    let length = ctx.real(Var::SurfaceFireLengDist)?;
    let width = ctx.real(Var::SurfaceFireWidthDist)?;
    ctx.set_real(
        Var::SurfaceFireArea,
        fire_shape::area(length, width) / SQUARE_FEET_PER_ACRE,
    )
}

pub fn perimeter(ctx: &mut EvalContext<'_>) -> Result<()> {
    let length = ctx.real(Var::SurfaceFireLengDist)?;
    let width = ctx.real(Var::SurfaceFireWidthDist)?;
    ctx.set_real(Var::SurfaceFirePerimeter, fire_shape::perimeter(length, width))
}

pub fn leng_map_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    map_dist(ctx, Var::SurfaceFireLengDist, Var::SurfaceFireLengMapDist)
}

pub fn width_map_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    map_dist(ctx, Var::SurfaceFireWidthDist, Var::SurfaceFireWidthMapDist)
}

pub fn map_dist_at_back(ctx: &mut EvalContext<'_>) -> Result<()> {
    map_dist(ctx, Var::SurfaceFireDistAtBack, Var::SurfaceFireMapDistAtBack)
}

pub fn map_dist_at_head(ctx: &mut EvalContext<'_>) -> Result<()> {
    map_dist(ctx, Var::SurfaceFireDistAtHead, Var::SurfaceFireMapDistAtHead)
}

pub fn map_dist_at_vector(ctx: &mut EvalContext<'_>) -> Result<()> {
    map_dist(ctx, Var::SurfaceFireDistAtVector, Var::SurfaceFireMapDistAtVector)
}

// ============================================================================
// DIAGRAMS
// ============================================================================

// A diagram cell counts redraws; every evaluation bumps it.
fn redraw(ctx: &mut EvalContext<'_>, diagram: Var) -> Result<()> {
    let count = ctx.real(diagram)?;
    ctx.set_real(diagram, count + 1.0)
}

pub fn characteristics_diagram(ctx: &mut EvalContext<'_>) -> Result<()> {
    redraw(ctx, Var::SurfaceFireCharacteristicsDiagram)
}

pub fn max_dir_diagram(ctx: &mut EvalContext<'_>) -> Result<()> {
    redraw(ctx, Var::SurfaceFireMaxDirDiagram)
}

pub fn shape_diagram(ctx: &mut EvalContext<'_>) -> Result<()> {
    redraw(ctx, Var::SurfaceFireShapeDiagram)
}

//! Maximum spotting distance procedures

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::geometry;
use crate::physics::spotting::{self, SpotDistance, SpotSource, Terrain};

fn terrain(ctx: &EvalContext<'_>) -> Result<Terrain> {
    Ok(Terrain {
        source: SpotSource::from_index(ctx.item(Var::SpotFireSource)?),
        ridge_to_valley_dist: ctx.real(Var::SiteRidgeToValleyDist)?,
        ridge_to_valley_elev: ctx.real(Var::SiteRidgeToValleyElev)?,
    })
}

/// Output cells of one spotting source: cover height, distance, firebrand
/// height and flat distance
fn write_spot(ctx: &mut EvalContext<'_>, spot: &SpotDistance, cells: [Var; 4]) -> Result<()> {
    let [cover, dist, firebrand, flat] = cells;
    ctx.set_real(cover, spot.cover_ht)?;
    ctx.set_real(dist, spot.dist)?;
    ctx.set_real(firebrand, spot.firebrand_ht)?;
    ctx.set_real(flat, spot.flat_dist)
}

pub fn dist_burning_pile(ctx: &mut EvalContext<'_>) -> Result<()> {
    let spot = spotting::burning_pile(
        ctx.real(Var::SurfaceFireFlameHtPile)?,
        ctx.real(Var::TreeCoverHtDownwind)?,
        ctx.real(Var::WindSpeedAt20Ft)?,
        &terrain(ctx)?,
    );
    write_spot(
        ctx,
        &spot,
        [
            Var::SpotCoverHtBurningPile,
            Var::SpotDistBurningPile,
            Var::SpotFirebrandHtBurningPile,
            Var::SpotFlatDistBurningPile,
        ],
    )
}

pub fn dist_surface_fire(ctx: &mut EvalContext<'_>) -> Result<()> {
    let result = spotting::surface_fire(
        ctx.real(Var::SurfaceFireFlameLengAtHead)?,
        ctx.real(Var::TreeCoverHtDownwind)?,
        ctx.real(Var::WindSpeedAt20Ft)?,
        &terrain(ctx)?,
    );
    write_spot(
        ctx,
        &result.spot,
        [
            Var::SpotCoverHtSurfaceFire,
            Var::SpotDistSurfaceFire,
            Var::SpotFirebrandHtSurfaceFire,
            Var::SpotFlatDistSurfaceFire,
        ],
    )?;
    ctx.set_real(Var::SpotFirebrandDriftSurfaceFire, result.drift)
}

pub fn dist_torching_trees(ctx: &mut EvalContext<'_>) -> Result<()> {
    let result = spotting::torching_trees(
        ctx.item(Var::TreeSpeciesSpot)?,
        ctx.real(Var::TreeDbh)?,
        ctx.real(Var::TreeHt)?,
        ctx.real(Var::SpotTorchingTrees)?,
        ctx.real(Var::TreeCoverHtDownwind)?,
        ctx.real(Var::WindSpeedAt20Ft)?,
        &terrain(ctx)?,
    );
    write_spot(
        ctx,
        &result.spot,
        [
            Var::SpotCoverHtTorchingTrees,
            Var::SpotDistTorchingTrees,
            Var::SpotFirebrandHtTorchingTrees,
            Var::SpotFlatDistTorchingTrees,
        ],
    )?;
    ctx.set_real(Var::SpotFlameDurTorchingTrees, result.flame.duration)?;
    ctx.set_real(Var::SpotFlameHtTorchingTrees, result.flame.height)?;
    ctx.set_real(Var::SpotFlameRatioTorchingTrees, result.flame.ratio)
}

// Spot distances are in miles
fn spot_map_dist(ctx: &mut EvalContext<'_>, miles: Var, out: Var) -> Result<()> {
    let scale = ctx.real(Var::MapScale)?;
    let dist = ctx.real(miles)?;
    ctx.set_real(out, geometry::map_distance(scale, dist))
}

pub fn map_dist_burning_pile(ctx: &mut EvalContext<'_>) -> Result<()> {
    spot_map_dist(ctx, Var::SpotDistBurningPile, Var::SpotMapDistBurningPile)
}

pub fn map_dist_surface_fire(ctx: &mut EvalContext<'_>) -> Result<()> {
    spot_map_dist(ctx, Var::SpotDistSurfaceFire, Var::SpotMapDistSurfaceFire)
}

pub fn map_dist_torching_trees(ctx: &mut EvalContext<'_>) -> Result<()> {
    spot_map_dist(ctx, Var::SpotDistTorchingTrees, Var::SpotMapDistTorchingTrees)
}

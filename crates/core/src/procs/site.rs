//! Site aspect, slope and ridge-to-valley distance

use super::ratio;
use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::geometry;

pub fn aspect_dir_from_north(ctx: &mut EvalContext<'_>) -> Result<()> {
    let index = ctx.item(Var::SiteAspectDirFromCompass)?;
    ctx.set_real(Var::SiteAspectDirFromNorth, geometry::compass_degrees(index))
}

/// Ridge-to-valley ground distance (mi) from its map distance
pub fn ridge_to_valley_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    let map_dist = ctx.real(Var::SiteRidgeToValleyMapDist)?;
    let scale = ctx.real(Var::MapScale)?;
    ctx.set_real(Var::SiteRidgeToValleyDist, ratio(map_dist, scale))
}

pub fn slope_fraction(ctx: &mut EvalContext<'_>) -> Result<()> {
    let degrees = ctx.real(Var::SiteSlopeDegrees)?;
    ctx.set_real(Var::SiteSlopeFraction, degrees.to_radians().tan())
}

/// Upslope direction is opposite the aspect
pub fn upslope_dir_from_north(ctx: &mut EvalContext<'_>) -> Result<()> {
    let aspect = ctx.real(Var::SiteAspectDirFromNorth)?;
    ctx.set_real(Var::SiteUpslopeDirFromNorth, geometry::wrap_degrees(aspect + 180.0))
}

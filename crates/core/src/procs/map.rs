//! Map scale and map-measured slope

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::geometry;

/// Map scale from the representative fraction
pub fn scale(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fraction = ctx.real(Var::MapFraction)?;
    ctx.set_real(Var::MapScale, geometry::map_scale(fraction))
}

/// Slope steepness, rise and reach from contour measurements
pub fn slope(ctx: &mut EvalContext<'_>) -> Result<()> {
    let s = geometry::map_slope(
        ctx.real(Var::MapFraction)?,
        ctx.real(Var::MapContourInterval)?,
        ctx.real(Var::MapContourCount)?,
        ctx.real(Var::MapDist)?,
    );
    ctx.set_real(Var::SiteSlopeDegrees, s.degrees)?;
    ctx.set_real(Var::SiteSlopeRise, s.rise)?;
    ctx.set_real(Var::SiteSlopeReach, s.reach)
}

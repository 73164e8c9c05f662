//! Wind speed and direction procedures

use super::snap_degrees;
use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::{geometry, wind};

/// Wind adjustment factor from the canopy and fuel bed depth
pub fn adj_factor(ctx: &mut EvalContext<'_>) -> Result<()> {
    let waf = wind::adjustment_factor(
        ctx.real(Var::TreeCanopyCover)?,
        ctx.real(Var::TreeCoverHt)?,
        ctx.real(Var::TreeCrownRatio)?,
        ctx.real(Var::SurfaceFuelBedDepth)?,
    );
    ctx.set_real(Var::TreeCanopyCrownFraction, waf.crown_fill)?;
    ctx.set_real(Var::WindAdjFactor, waf.factor)?;
    ctx.set_item(Var::WindAdjMethod, waf.method as usize)
}

pub fn dir_from_north(ctx: &mut EvalContext<'_>) -> Result<()> {
    let index = ctx.item(Var::WindDirFromCompass)?;
    ctx.set_real(Var::WindDirFromNorth, geometry::compass_degrees(index))
}

pub fn dir_from_upslope(ctx: &mut EvalContext<'_>) -> Result<()> {
    let upslope = ctx.real(Var::SiteUpslopeDirFromNorth)?;
    let wind = ctx.real(Var::WindDirFromNorth)?;
    ctx.set_real(Var::WindDirFromUpslope, snap_degrees(wind - upslope))
}

pub fn speed_at_20ft(ctx: &mut EvalContext<'_>) -> Result<()> {
    let at_10m = ctx.real(Var::WindSpeedAt10M)?;
    ctx.set_real(Var::WindSpeedAt20Ft, wind::speed_at_20ft(at_10m))
}

pub fn speed_at_midflame(ctx: &mut EvalContext<'_>) -> Result<()> {
    let at_20ft = ctx.real(Var::WindSpeedAt20Ft)?;
    let waf = ctx.real(Var::WindAdjFactor)?;
    ctx.set_real(Var::WindSpeedAtMidflame, at_20ft * waf)
}

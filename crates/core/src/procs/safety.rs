//! Safety zone size

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::geometry;

pub fn radius(ctx: &mut EvalContext<'_>) -> Result<()> {
    let zone = geometry::safety_zone(
        ctx.real(Var::SafetyZoneSepDist)?,
        ctx.real(Var::SafetyZonePersonnelNumber)?,
        ctx.real(Var::SafetyZonePersonnelArea)?,
        ctx.real(Var::SafetyZoneEquipmentNumber)?,
        ctx.real(Var::SafetyZoneEquipmentArea)?,
    );
    ctx.set_real(Var::SafetyZoneRadius, zone.radius)?;
    ctx.set_real(Var::SafetyZoneSize, zone.size)
}

/// Separation distance from the head fire flame length
pub fn sep_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    let flame = ctx.real(Var::SurfaceFireFlameLengAtHead)?;
    ctx.set_real(Var::SafetyZoneSepDist, geometry::separation_distance(flame))
}

//! Crown fire procedures

use super::map_dist;
use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::crown_fire::{self, CrownMoisture, FireType};
use crate::physics::fire_shape;

pub fn active_crown(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ratio = ctx.real(Var::CrownFireActiveRatio)?;
    ctx.set_flag(Var::CrownFireActiveCrown, ratio >= 1.0)
}

pub fn active_ratio(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ros = ctx.real(Var::CrownFireSpreadRate)?;
    let critical = ctx.real(Var::CrownFireCritCrownSpreadRate)?;
    ctx.set_real(Var::CrownFireActiveRatio, crown_fire::ratio(ros, critical))
}

pub fn area(ctx: &mut EvalContext<'_>) -> Result<()> {
    let dist = ctx.real(Var::CrownFireSpreadDist)?;
    let lw = ctx.real(Var::CrownFireLengthToWidth)?;
    ctx.set_real(Var::CrownFireArea, crown_fire::area(dist, lw))
}

pub fn crit_crown_spread_rate(ctx: &mut EvalContext<'_>) -> Result<()> {
    let cbd = ctx.real(Var::TreeCanopyBulkDens)?;
    ctx.set_real(
        Var::CrownFireCritCrownSpreadRate,
        crown_fire::critical_crown_spread_rate(cbd),
    )
}

pub fn crit_surf_fire_int(ctx: &mut EvalContext<'_>) -> Result<()> {
    let foliar = ctx.real(Var::TreeFoliarMois)?;
    let base = ctx.real(Var::TreeCrownBaseHt)?;
    ctx.set_real(
        Var::CrownFireCritSurfFireInt,
        crown_fire::critical_surface_intensity(foliar, base),
    )
}

pub fn crit_surf_flame_leng(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::CrownFireCritSurfFireInt)?;
    ctx.set_real(
        Var::CrownFireCritSurfFlameLeng,
        crown_fire::critical_flame_length(fli),
    )
}

pub fn flame_length(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::CrownFireLineInt)?;
    ctx.set_real(Var::CrownFireFlameLeng, crown_fire::flame_length(fli))
}

pub fn fuel_load(ctx: &mut EvalContext<'_>) -> Result<()> {
    let load = crown_fire::fuel_load(
        ctx.real(Var::TreeCanopyBulkDens)?,
        ctx.real(Var::TreeCoverHt)?,
        ctx.real(Var::TreeCrownBaseHt)?,
    );
    ctx.set_real(Var::CrownFireFuelLoad, load)
}

/// Surface plus canopy heat per unit area
pub fn heat_per_unit_area(ctx: &mut EvalContext<'_>) -> Result<()> {
    let surface = ctx.real(Var::SurfaceFireHeatPerUnitArea)?;
    let canopy = ctx.real(Var::CrownFireHeatPerUnitAreaCanopy)?;
    ctx.set_real(Var::CrownFireHeatPerUnitArea, surface + canopy)
}

pub fn heat_per_unit_area_canopy(ctx: &mut EvalContext<'_>) -> Result<()> {
    let load = ctx.real(Var::CrownFireFuelLoad)?;
    ctx.set_real(
        Var::CrownFireHeatPerUnitAreaCanopy,
        crown_fire::canopy_heat_per_unit_area(load),
    )
}

pub fn length_to_width(ctx: &mut EvalContext<'_>) -> Result<()> {
    let wind = ctx.real(Var::WindSpeedAt20Ft)?;
    ctx.set_real(Var::CrownFireLengthToWidth, crown_fire::length_to_width(wind))
}

pub fn line_intensity(ctx: &mut EvalContext<'_>) -> Result<()> {
    let hpua = ctx.real(Var::CrownFireHeatPerUnitArea)?;
    let ros = ctx.real(Var::CrownFireSpreadRate)?;
    ctx.set_real(Var::CrownFireLineInt, crown_fire::fireline_intensity(hpua, ros))
}

pub fn perimeter(ctx: &mut EvalContext<'_>) -> Result<()> {
    let dist = ctx.real(Var::CrownFireSpreadDist)?;
    let lw = ctx.real(Var::CrownFireLengthToWidth)?;
    ctx.set_real(Var::CrownFirePerimeter, crown_fire::perimeter(dist, lw))
}

pub fn power_of_fire(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::CrownFireLineInt)?;
    ctx.set_real(Var::CrownFirePowerOfFire, crown_fire::power_of_fire(fli))
}

pub fn power_of_wind(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ros = ctx.real(Var::CrownFireSpreadRate)?;
    let wind = ctx.real(Var::WindSpeedAt20Ft)?;
    ctx.set_real(Var::CrownFirePowerOfWind, crown_fire::power_of_wind(ros, wind))
}

pub fn power_ratio(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fire = ctx.real(Var::CrownFirePowerOfFire)?;
    let wind = ctx.real(Var::CrownFirePowerOfWind)?;
    ctx.set_real(Var::CrownFirePowerRatio, crown_fire::ratio(fire, wind))
}

pub fn spread_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ros = ctx.real(Var::CrownFireSpreadRate)?;
    let elapsed = ctx.real(Var::SurfaceFireElapsedTime)?;
    ctx.set_real(Var::CrownFireSpreadDist, ros * elapsed)
}

pub fn spread_map_dist(ctx: &mut EvalContext<'_>) -> Result<()> {
    map_dist(ctx, Var::CrownFireSpreadDist, Var::CrownFireSpreadMapDist)
}

/// Active crown fire spread rate from the surface moistures and 20-ft wind
pub fn spread_rate(ctx: &mut EvalContext<'_>) -> Result<()> {
    let mois = CrownMoisture {
        dead1: ctx.real(Var::SurfaceFuelMoisDead1)?,
        dead10: ctx.real(Var::SurfaceFuelMoisDead10)?,
        dead100: ctx.real(Var::SurfaceFuelMoisDead100)?,
        live_wood: ctx.real(Var::SurfaceFuelMoisLiveWood)?,
    };
    let wind = ctx.real(Var::WindSpeedAt20Ft)?;
    ctx.set_real(Var::CrownFireSpreadRate, crown_fire::spread_rate(&mois, wind))
}

pub fn trans_ratio_from_fire_int(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fli = ctx.real(Var::SurfaceFireLineIntAtVector)?;
    let critical = ctx.real(Var::CrownFireCritSurfFireInt)?;
    ctx.set_real(Var::CrownFireTransRatio, crown_fire::ratio(fli, critical))
}

/// Transition ratio with the surface intensity recovered from flame length
pub fn trans_ratio_from_flame_leng(ctx: &mut EvalContext<'_>) -> Result<()> {
    let flame = ctx.real(Var::SurfaceFireFlameLengAtVector)?;
    let critical = ctx.real(Var::CrownFireCritSurfFireInt)?;
    let fli = fire_shape::fireline_intensity_from_flame_length(flame);
    ctx.set_real(Var::CrownFireTransRatio, crown_fire::ratio(fli, critical))
}

pub fn trans_to_crown(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ratio = ctx.real(Var::CrownFireTransRatio)?;
    ctx.set_flag(Var::CrownFireTransToCrown, ratio >= 1.0)
}

pub fn fire_type(ctx: &mut EvalContext<'_>) -> Result<()> {
    let active = ctx.real(Var::CrownFireActiveRatio)?;
    let trans = ctx.real(Var::CrownFireTransRatio)?;
    ctx.set_item(Var::CrownFireType, FireType::classify(trans, active).index())
}

/// Wind driven when the wind out-powers the fire
pub fn wind_driven(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ratio = ctx.real(Var::CrownFirePowerRatio)?;
    ctx.set_flag(Var::CrownFireWindDriven, ratio < 1.0)
}

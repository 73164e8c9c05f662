//! Ignition probability procedures

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::ignition::{self, LightningFuel, StrokeCharge};

/// Firebrand receptive fuel moisture is the 1-h dead moisture
pub fn firebrand_fuel_mois(ctx: &mut EvalContext<'_>) -> Result<()> {
    let mois = ctx.real(Var::SurfaceFuelMoisDead1)?;
    ctx.set_real(Var::IgnitionFirebrandFuelMois, mois)
}

pub fn firebrand_prob(ctx: &mut EvalContext<'_>) -> Result<()> {
    let temp = ctx.real(Var::SurfaceFuelTemp)?;
    let mois = ctx.real(Var::IgnitionFirebrandFuelMois)?;
    ctx.set_real(
        Var::IgnitionFirebrandProb,
        ignition::firebrand_probability(temp, mois),
    )
}

/// Lightning receptive fuel moisture is the 100-h dead moisture
pub fn lightning_fuel_mois(ctx: &mut EvalContext<'_>) -> Result<()> {
    let mois = ctx.real(Var::SurfaceFuelMoisDead100)?;
    ctx.set_real(Var::IgnitionLightningFuelMois, mois)
}

pub fn lightning_prob(ctx: &mut EvalContext<'_>) -> Result<()> {
    let prob = match LightningFuel::from_index(ctx.item(Var::IgnitionLightningFuelType)?) {
        Some(fuel) => ignition::lightning_probability(
            fuel,
            StrokeCharge::from_index(ctx.item(Var::WthrLightningStrikeType)?),
            ctx.real(Var::IgnitionLightningDuffDepth)?,
            ctx.real(Var::IgnitionLightningFuelMois)?,
        ),
        None => 0.0,
    };
    ctx.set_real(Var::IgnitionLightningProb, prob)
}

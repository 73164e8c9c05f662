//! Tree bark, crown scorch and mortality procedures
//!
//! Every mortality equation reports zero when the fire produces no crown
//! scorch at all.

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::mortality::{self, Species};
use crate::physics::SMIDGEN;

fn tree_species(ctx: &EvalContext<'_>) -> Result<Option<&'static Species>> {
    Ok(mortality::species(ctx.item(Var::TreeSpecies)?))
}

fn bark_thickness(
    ctx: &mut EvalContext<'_>,
    equation: fn(&Species, f64) -> f64,
) -> Result<()> {
    let dbh = ctx.real(Var::TreeDbh)?;
    let bark = tree_species(ctx)?.map_or(0.0, |sp| equation(sp, dbh));
    ctx.set_real(Var::TreeBarkThickness, bark)
}

pub fn bark_thickness_behave(ctx: &mut EvalContext<'_>) -> Result<()> {
    bark_thickness(ctx, mortality::bark_thickness_behave)
}

pub fn bark_thickness_fofem(ctx: &mut EvalContext<'_>) -> Result<()> {
    bark_thickness(ctx, mortality::bark_thickness_fofem)
}

pub fn crown_base_ht(ctx: &mut EvalContext<'_>) -> Result<()> {
    let ratio = ctx.real(Var::TreeCrownRatio)?;
    let height = ctx.real(Var::TreeHt)?;
    ctx.set_real(Var::TreeCrownBaseHt, mortality::crown_base_height(height, ratio))
}

/// Crown ratio of the stand, from crown base and canopy cover height
pub fn crown_ratio(ctx: &mut EvalContext<'_>) -> Result<()> {
    let base = ctx.real(Var::TreeCrownBaseHt)?;
    let height = ctx.real(Var::TreeCoverHt)?;
    ctx.set_real(Var::TreeCrownRatio, mortality::crown_ratio(base, height))
}

pub fn crown_vol_scorched(ctx: &mut EvalContext<'_>) -> Result<()> {
    let scorch = mortality::crown_scorch(
        ctx.real(Var::SurfaceFireScorchHtAtVector)?,
        ctx.real(Var::TreeCrownRatio)?,
        ctx.real(Var::TreeCoverHt)?,
    );
    ctx.set_real(Var::TreeCrownLengScorchedAtVector, scorch.length)?;
    ctx.set_real(Var::TreeCrownLengFractionScorchedAtVector, scorch.length_fraction)?;
    ctx.set_real(Var::TreeCrownVolScorchedAtVector, scorch.volume_fraction)
}

pub fn mortality_count(ctx: &mut EvalContext<'_>) -> Result<()> {
    let rate = ctx.real(Var::TreeMortalityRateAtVector)?;
    let count = ctx.real(Var::TreeCount)?;
    ctx.set_real(Var::TreeMortalityCountAtVector, rate * count)
}

pub fn mortality_rate_aspen(ctx: &mut EvalContext<'_>) -> Result<()> {
    let dbh = ctx.real(Var::TreeDbh)?;
    let flame = ctx.real(Var::SurfaceFireFlameLengAtVector)?;
    let low = ctx.item(Var::SurfaceFireSeverityAspen)? == 0;
    ctx.set_real(
        Var::TreeMortalityRateAspenAtVector,
        mortality::aspen(dbh, flame, low),
    )
}

/// Bark thickness and crown volume scorched, or `None` without scorch
fn scorched(ctx: &EvalContext<'_>) -> Result<Option<(f64, f64)>> {
    if ctx.real(Var::SurfaceFireScorchHtAtVector)? < SMIDGEN {
        return Ok(None);
    }
    Ok(Some((
        ctx.real(Var::TreeBarkThickness)?,
        ctx.real(Var::TreeCrownVolScorchedAtVector)?,
    )))
}

pub fn mortality_rate_behave(ctx: &mut EvalContext<'_>) -> Result<()> {
    let rate = scorched(ctx)?.map_or(0.0, |(bt, cvs)| mortality::ryan_reinhardt(bt, cvs));
    ctx.set_real(Var::TreeMortalityRateAtVector, rate)
}

pub fn mortality_rate_fofem(ctx: &mut EvalContext<'_>) -> Result<()> {
    let rate = match (scorched(ctx)?, tree_species(ctx)?) {
        (Some((bt, cvs)), Some(sp)) => mortality::fofem(sp, bt, cvs),
        _ => 0.0,
    };
    ctx.set_real(Var::TreeMortalityRateAtVector, rate)
}

/// FOFEM mortality by spruce/non-spruce group
pub fn mortality_rate_fofem2(ctx: &mut EvalContext<'_>) -> Result<()> {
    let spruce = ctx.item(Var::TreeSpeciesMortality)? == 1;
    let rate = scorched(ctx)?.map_or(0.0, |(bt, cvs)| mortality::fofem_group(spruce, bt, cvs));
    ctx.set_real(Var::TreeMortalityRateAtVector, rate)
}

pub fn mortality_rate_fofem_hood(ctx: &mut EvalContext<'_>) -> Result<()> {
    let rate = match (scorched(ctx)?, tree_species(ctx)?) {
        (Some((bt, cvs)), Some(sp)) => mortality::hood(
            sp,
            bt,
            ctx.real(Var::TreeCrownLengFractionScorchedAtVector)?,
            cvs,
            ctx.real(Var::TreeDbh)?,
        ),
        _ => 0.0,
    };
    ctx.set_real(Var::TreeMortalityRateAtVector, rate)
}

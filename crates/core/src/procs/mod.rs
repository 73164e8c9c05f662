//! Function procedures
//!
//! One procedure per worksheet function. Each reads its inputs through the
//! [`EvalContext`], calls into [`crate::physics`] and writes its outputs
//! back. Procedures are plain `fn` items so the function table can hold them
//! as pointers; the two-model fuel bed calls the single-model ones directly.

pub mod contain;
pub mod crown;
pub mod ignition;
pub mod map;
pub mod safety;
pub mod site;
pub mod spot;
pub mod surface_fire;
pub mod surface_fuel;
pub mod time;
pub mod tree;
pub mod weather;
pub mod wind;

use crate::error::Result;
use crate::graph::{EvalContext, ParticleAttr, Var, MAX_PARTICLES};
use crate::physics::{geometry, FuelBed, Life, Particle, SMIDGEN};

/// Fuel bed assembled from the particle cells, with the herbaceous load
/// transfer applied
///
/// A dynamic model moves `fraction` of the live herb load (particle 3) into
/// the dead herb slot (particle 5).
pub(crate) fn fuel_bed(ctx: &EvalContext<'_>) -> Result<FuelBed> {
    let mut particles = Vec::with_capacity(MAX_PARTICLES);
    for i in 0..MAX_PARTICLES {
        particles.push(Particle {
            life: Life::from_index(ctx.particle_life(i)?),
            load: ctx.particle(ParticleAttr::Load, i)?,
            savr: ctx.particle(ParticleAttr::Savr, i)?,
            dens: ctx.particle(ParticleAttr::Dens, i)?,
            heat: ctx.particle(ParticleAttr::Heat, i)?,
            stot: ctx.particle(ParticleAttr::Stot, i)?,
            seff: ctx.particle(ParticleAttr::Seff, i)?,
            mois: ctx.particle(ParticleAttr::Mois, i)?,
        });
    }
    let fraction = ctx.real(Var::SurfaceFuelLoadTransferFraction)?;
    if ctx.item(Var::SurfaceFuelLoadTransferEq)? != 0 && fraction > 1e-5 {
        let moved = fraction * particles[3].load;
        particles[3].load -= moved;
        particles[5].load = moved;
    }
    Ok(FuelBed {
        depth: ctx.real(Var::SurfaceFuelBedDepth)?,
        mext_dead: ctx.real(Var::SurfaceFuelBedMextDead)?,
        particles,
    })
}

/// Write a ground distance (ft) as a map distance (in)
pub(crate) fn map_dist(ctx: &mut EvalContext<'_>, feet: Var, out: Var) -> Result<()> {
    let scale = ctx.real(Var::MapScale)?;
    let dist = ctx.real(feet)?;
    ctx.set_real(out, geometry::map_distance_ft(scale, dist))
}

/// Fold a direction into `0..360`, snapping the half degree either side of
/// zero back to zero
pub(crate) fn snap_degrees(deg: f64) -> f64 {
    let d = geometry::wrap_degrees(deg);
    if (0.5..=360.0 - 0.5).contains(&d) {
        d
    } else {
        0.0
    }
}

/// `a / b`, zero when `b` vanishes
#[inline]
pub(crate) fn ratio(a: f64, b: f64) -> f64 {
    if b.abs() < SMIDGEN {
        0.0
    } else {
        a / b
    }
}

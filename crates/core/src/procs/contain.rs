//! Containment procedures

use crate::contain::{
    parse_force, parse_single, ContainConfig, ContainSim, ContainTactic, FireReport, ResourceColumns,
};
use crate::core_types::units::{Acres, Chains, ChainsPerHour, FeetPerMinute};
use crate::error::Result;
use crate::graph::{EvalContext, Var};

fn config(ctx: &EvalContext<'_>) -> Result<ContainConfig> {
    let props = ctx.props();
    let dist_limit = if props.boolean("containConfLimitDistOff")? {
        None
    } else {
        Some(Chains::new(ctx.real(Var::ContainLimitDist)?))
    };
    let steps = |key: &str| -> Result<usize> {
        Ok(usize::try_from(props.integer(key)?.max(0)).unwrap_or(0))
    };
    Ok(ContainConfig {
        min_steps: steps("containConfMinSteps")?,
        max_steps: steps("containConfMaxSteps")?,
        retry: props.boolean("containConfRetry")?,
        dist_limit,
        cost: props.boolean("containCalcCost")?,
    })
}

/// How the resource columns are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Roster {
    /// One resource per name token
    List,
    /// One resource from the first token of each column
    Single,
}

fn run(ctx: &mut EvalContext<'_>, roster: Roster) -> Result<()> {
    let config = config(ctx)?;
    let columns = ResourceColumns {
        names: ctx.text(Var::ContainResourceName)?,
        arrivals: ctx.text(Var::ContainResourceArrival)?,
        durations: ctx.text(Var::ContainResourceDuration)?,
        productions: ctx.text(Var::ContainResourceProd)?,
        base_costs: if config.cost {
            Some(ctx.text(Var::ContainResourceBaseCost)?)
        } else {
            None
        },
        hour_costs: if config.cost {
            Some(ctx.text(Var::ContainResourceHourCost)?)
        } else {
            None
        },
    };
    let force = match roster {
        Roster::List => parse_force(&columns, None)?,
        Roster::Single => parse_single(&columns)?,
    };
    let report = FireReport {
        size: Acres::new(ctx.real(Var::ContainReportSize)?),
        spread_rate: ChainsPerHour::new(ctx.real(Var::ContainReportSpread)?),
        length_to_width: ctx.real(Var::ContainReportRatio)?,
    };
    let tactic = ContainTactic::from_index(ctx.item(Var::ContainAttackTactic)?);
    let attack_dist = Chains::new(ctx.real(Var::ContainAttackDist)?);

    let result = ContainSim::new(report, force, tactic, attack_dist, config).run();

    ctx.set_real(Var::ContainAttackBack, *result.attack_back)?;
    ctx.set_real(Var::ContainAttackHead, *result.attack_head)?;
    ctx.set_real(Var::ContainAttackPerimeter, *result.attack_perimeter())?;
    ctx.set_real(Var::ContainAttackSize, *result.attack_size())?;
    ctx.set_real(Var::ContainCost, result.final_cost)?;
    ctx.set_real(Var::ContainLine, *result.final_line)?;
    ctx.set_real(Var::ContainPoints, (result.steps + 1) as f64)?;
    ctx.set_real(Var::ContainReportBack, *result.report_back)?;
    ctx.set_real(Var::ContainReportHead, *result.report_head)?;
    ctx.set_real(Var::ContainResourcesUsed, result.resources_used as f64)?;
    ctx.set_real(Var::ContainSize, result.worksheet_size())?;
    ctx.set_item(Var::ContainStatus, result.worksheet_status().index())?;
    ctx.set_real(Var::ContainTime, *result.final_time)?;
    ctx.set_real(Var::ContainXMax, *result.x_max)?;
    ctx.set_real(Var::ContainXMin, *result.x_min)?;
    ctx.set_real(Var::ContainYMax, *result.y_max)?;

    let redraws = ctx.real(Var::ContainDiagram)?;
    ctx.set_real(Var::ContainDiagram, redraws + 1.0)?;
    ctx.set_contain_polygon(result.points);
    Ok(())
}

/// Containment by a list of resources
pub fn contain_ff(ctx: &mut EvalContext<'_>) -> Result<()> {
    run(ctx, Roster::List)
}

/// Containment by one resource; its name is only a label
pub fn contain_ff_single(ctx: &mut EvalContext<'_>) -> Result<()> {
    run(ctx, Roster::Single)
}

pub fn report_ratio(ctx: &mut EvalContext<'_>) -> Result<()> {
    let lw = ctx.real(Var::SurfaceFireLengthToWidth)?;
    ctx.set_real(Var::ContainReportRatio, lw)
}

pub fn report_size(ctx: &mut EvalContext<'_>) -> Result<()> {
    let acres = ctx.real(Var::SurfaceFireArea)?;
    ctx.set_real(Var::ContainReportSize, acres)
}

/// Head spread rate in chains per hour
pub fn report_spread(ctx: &mut EvalContext<'_>) -> Result<()> {
    let fpm = FeetPerMinute::new(ctx.real(Var::SurfaceFireSpreadAtHead)?);
    ctx.set_real(Var::ContainReportSpread, *fpm.to_chains_per_hour())
}

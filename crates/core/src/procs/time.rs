//! Calendar conversion

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::calendar;

/// Modified Julian date from a `YYYYMMDD` date
pub fn julian_date(ctx: &mut EvalContext<'_>) -> Result<()> {
    let date = ctx.real(Var::TimeIntegerDate)?;
    ctx.set_real(Var::TimeJulianDate, calendar::modified_julian_date(date))
}

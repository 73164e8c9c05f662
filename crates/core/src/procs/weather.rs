//! Weather procedures

use crate::error::Result;
use crate::graph::{EvalContext, Var};
use crate::physics::weather;

pub fn cumulus_base_ht(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let dew = ctx.real(Var::WthrDewPointTemp)?;
    ctx.set_real(Var::WthrCumulusBaseHt, weather::cumulus_base_height(air, dew))
}

pub fn dew_point_temp(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let wet = ctx.real(Var::WthrWetBulbTemp)?;
    let elev = ctx.real(Var::SiteElevation)?;
    ctx.set_real(Var::WthrDewPointTemp, weather::dew_point(air, wet, elev))
}

pub fn heat_index(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let rh = ctx.real(Var::WthrRelativeHumidity)?;
    ctx.set_real(Var::WthrHeatIndex, weather::heat_index(air, rh))
}

pub fn relative_humidity(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let dew = ctx.real(Var::WthrDewPointTemp)?;
    ctx.set_real(Var::WthrRelativeHumidity, weather::relative_humidity(air, dew))
}

pub fn summer_simmer_index(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let rh = ctx.real(Var::WthrRelativeHumidity)?;
    ctx.set_real(Var::WthrSummerSimmerIndex, weather::summer_simmer_index(air, rh))
}

pub fn wind_chill_temp(ctx: &mut EvalContext<'_>) -> Result<()> {
    let air = ctx.real(Var::WthrAirTemp)?;
    let wind = ctx.real(Var::WindSpeedAtMidflame)?;
    ctx.set_real(Var::WthrWindChillTemp, weather::wind_chill(air, wind))
}

//! Fire weather

use super::{activate_all, select_outputs};
use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Func, Var};

const OUTPUTS: &[(Var, &str)] = &[
    (Var::WthrRelativeHumidity, "weatherCalcWthrRelativeHumidity"),
    (Var::WthrCumulusBaseHt, "weatherCalcWthrCumulusBaseHt"),
    (Var::WthrHeatIndex, "weatherCalcWthrHeatIndex"),
    (Var::WthrSummerSimmerIndex, "weatherCalcWthrSummerSimmerIndex"),
    (Var::WthrWindChillTemp, "weatherCalcWthrWindChillTemp"),
];

pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    if !props.boolean("weatherModuleActive")? {
        return Ok(());
    }
    activate_all(
        state,
        &[
            Func::WthrRelativeHumidity,
            Func::WthrCumulusBaseHt,
            Func::WthrHeatIndex,
            Func::WthrSummerSimmerIndex,
            Func::WthrWindChillTemp,
        ],
    );
    // Dew point is derived from wet bulb and elevation, otherwise entered
    if props.boolean("weatherConfHumidityFromWetBulbElev")? {
        state.activate(Func::WthrDewPointTemp);
        state.set_output(Var::WthrDewPointTemp, props.boolean("weatherCalcWthrDewPointTemp")?);
    }
    select_outputs(props, state, OUTPUTS)
}

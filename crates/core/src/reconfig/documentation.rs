//! Documentation fields

use crate::config::PropertyDict;
use crate::error::Result;
use crate::graph::{ConfigState, Var};

/// Documentation groups and their fields
const GROUPS: &[(&str, &[Var])] = &[
    ("docDescriptionActive", &[Var::DocDescription]),
    ("docRxActive", &[Var::DocRxAdminUnit, Var::DocRxName, Var::DocRxPreparedBy]),
    ("docFireActive", &[Var::DocFireAnalyst, Var::DocFireName, Var::DocFirePeriod]),
    (
        "docTrainingActive",
        &[Var::DocTrainingCourse, Var::DocTrainingExercise, Var::DocTrainingTrainee],
    ),
];

/// Fields of every enabled group are both entered and reported
pub(super) fn apply(props: &PropertyDict, state: &mut ConfigState) -> Result<()> {
    for &(key, fields) in GROUPS {
        if !props.boolean(key)? {
            continue;
        }
        for &var in fields {
            state.set_user_input(var, true);
            state.set_output(var, true);
        }
    }
    Ok(())
}

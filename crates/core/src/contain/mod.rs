//! Fire containment
//!
//! A discrete-step model of initial attack: resources arrive, build
//! fireline along the flanks of a growing elliptical fire, and either close
//! the perimeter or fail in one of several ways. The worksheet reports a
//! coarser three-way status derived from the raw terminal state.
//!
//! ```
//! use fire_calc_core::contain::{
//!     ContainConfig, ContainForce, ContainSim, ContainTactic, FireReport, Resource,
//! };
//! use fire_calc_core::core_types::units::{Acres, Chains, ChainsPerHour, Minutes};
//!
//! let mut force = ContainForce::new();
//! force.add(Resource::new(
//!     "Crew 1",
//!     Minutes::new(30.0),
//!     ChainsPerHour::new(60.0),
//!     Minutes::new(480.0),
//! ));
//! let report = FireReport {
//!     size: Acres::new(1.0),
//!     spread_rate: ChainsPerHour::new(5.0),
//!     length_to_width: 2.0,
//! };
//! let sim = ContainSim::new(report, force, ContainTactic::Rear, Chains::ZERO, ContainConfig::default());
//! let result = sim.run();
//! println!("{:?} after {}", result.worksheet_status(), result.final_time);
//! ```

pub mod force;
pub mod parse;
pub mod sim;

pub use force::{ContainForce, Flank, Resource};
pub use parse::{parse_force, parse_single, tokens, ResourceColumns, SINGLE_RESOURCE_LABEL};
pub use sim::{ContainSim, ContainTactic, FireReport};

use crate::core_types::units::{Acres, Chains, Minutes};
use crate::graph::PolygonPoint;
use crate::physics::fire_shape;

/// Final size reported when the fire was not contained.
pub const NO_SIZE: f64 = -1.0;

/// Raw terminal state of a containment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainStatus {
    /// Fire started but not yet reported; a run starts at the report, so
    /// it never ends here
    Unreported,
    /// Fire reported, no resource ever arrived
    Reported,
    /// Step budget spent while resources were still due to arrive
    Attacked,
    /// Fire contained
    Contained,
    /// Line building outpaced by the fire
    Overrun,
    /// Every resource left before the line closed
    Exhausted,
    /// Maximum step count reached
    StepOverflow,
    /// Head spread past the distance limit
    DistanceLimitExceeded,
}

impl ContainStatus {
    /// Every state, in code order
    pub const ALL: [ContainStatus; 8] = [
        ContainStatus::Unreported,
        ContainStatus::Reported,
        ContainStatus::Attacked,
        ContainStatus::Contained,
        ContainStatus::Overrun,
        ContainStatus::Exhausted,
        ContainStatus::StepOverflow,
        ContainStatus::DistanceLimitExceeded,
    ];

    /// Worksheet status before post-processing
    #[must_use]
    pub fn crosswalk(self) -> WorksheetStatus {
        match self {
            ContainStatus::Contained => WorksheetStatus::Contained,
            ContainStatus::Overrun => WorksheetStatus::Withdrawn,
            _ => WorksheetStatus::Escaped,
        }
    }
}

/// Worksheet containment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorksheetStatus {
    Contained,
    Withdrawn,
    Escaped,
}

impl WorksheetStatus {
    /// Item index of the status cell
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Worksheet status and final size (acres) of a run
///
/// Anything short of containment reports [`NO_SIZE`] and is withdrawn when
/// any line was built, escaped otherwise.
#[must_use]
pub fn outcome(status: ContainStatus, final_line: Chains, final_size: Acres) -> (WorksheetStatus, f64) {
    match status.crosswalk() {
        WorksheetStatus::Contained => (WorksheetStatus::Contained, final_size.value()),
        _ if final_line.value() > 0.0 => (WorksheetStatus::Withdrawn, NO_SIZE),
        _ => (WorksheetStatus::Escaped, NO_SIZE),
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainConfig {
    /// Steps between the first arrival and the last departure
    pub min_steps: usize,
    /// Hard step budget. A run spreads the duty window over about
    /// `min_steps` steps, so the budget only ends a run when it is set below
    /// `min_steps`
    pub max_steps: usize,
    /// Restart an outpaced attack at the next arrival
    pub retry: bool,
    /// Head spread distance that ends the run, unlimited when `None`
    pub dist_limit: Option<Chains>,
    /// Accumulate resource costs
    pub cost: bool,
}

impl Default for ContainConfig {
    fn default() -> Self {
        Self {
            min_steps: 250,
            max_steps: 1000,
            retry: false,
            dist_limit: None,
            cost: false,
        }
    }
}

/// Outputs of one run. Distances are in chains from the point of origin,
/// times in minutes since the fire was reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainResult {
    /// Raw terminal state
    pub status: ContainStatus,
    /// Time the run ended
    pub final_time: Minutes,
    /// Fire size when the run ended
    pub final_size: Acres,
    /// Line built on both flanks
    pub final_line: Chains,
    /// Resource cost, zero unless costs were requested
    pub final_cost: f64,
    /// Resources that reached the fire
    pub resources_used: usize,
    /// Head distance at report
    pub report_head: Chains,
    /// Back distance at report
    pub report_back: Chains,
    /// Head distance at the first arrival
    pub attack_head: Chains,
    /// Back distance at the first arrival
    pub attack_back: Chains,
    /// Length-to-width ratio used for the fire shape
    pub length_to_width: f64,
    /// Construction point after each step, starting at the attack point
    pub points: Vec<PolygonPoint>,
    /// Simulation steps taken
    pub steps: usize,
    pub x_min: Chains,
    pub x_max: Chains,
    pub y_max: Chains,
}

impl ContainResult {
    #[must_use]
    pub fn worksheet_status(&self) -> WorksheetStatus {
        outcome(self.status, self.final_line, self.final_size).0
    }

    /// Final size (acres), or [`NO_SIZE`]
    #[must_use]
    pub fn worksheet_size(&self) -> f64 {
        outcome(self.status, self.final_line, self.final_size).1
    }

    fn attack_ellipse(&self) -> (f64, f64) {
        let length = (self.attack_head + self.attack_back).value();
        (length, fire_shape::width(length, self.length_to_width))
    }

    /// Fire perimeter at the first arrival
    #[must_use]
    pub fn attack_perimeter(&self) -> Chains {
        let (length, width) = self.attack_ellipse();
        Chains::new(fire_shape::perimeter(length, width))
    }

    /// Fire size at the first arrival
    #[must_use]
    pub fn attack_size(&self) -> Acres {
        let (length, width) = self.attack_ellipse();
        Acres::from_square_chains(fire_shape::area(length, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_crosswalks() {
        let built = Chains::new(12.0);
        let none = Chains::ZERO;
        let size = Acres::new(3.5);
        for status in ContainStatus::ALL {
            let with_line = outcome(status, built, size);
            let without_line = outcome(status, none, size);
            if status == ContainStatus::Contained {
                assert_eq!(with_line, (WorksheetStatus::Contained, 3.5));
                assert_eq!(without_line, (WorksheetStatus::Contained, 3.5));
            } else {
                assert_eq!(with_line, (WorksheetStatus::Withdrawn, NO_SIZE), "{status:?}");
                assert_eq!(without_line, (WorksheetStatus::Escaped, NO_SIZE), "{status:?}");
            }
        }
        assert_eq!(ContainStatus::Overrun.crosswalk(), WorksheetStatus::Withdrawn);
        assert_eq!(ContainStatus::StepOverflow.crosswalk(), WorksheetStatus::Escaped);
    }

    #[test]
    fn test_status_indices_follow_item_list() {
        assert_eq!(WorksheetStatus::Contained.index(), 0);
        assert_eq!(WorksheetStatus::Withdrawn.index(), 1);
        assert_eq!(WorksheetStatus::Escaped.index(), 2);
    }
}

//! Discrete-step containment simulation
//!
//! The fire is an ellipse growing linearly from its reported size: head and
//! back distances from the point of origin each advance at a constant rate,
//! the back rate following from the head rate and the length-to-width ratio.
//! Resources build line along one flank, offset from the fire edge by the
//! attack distance; the other flank is held by a mirror force.
//!
//! The construction point is tracked by its arc length from the attack
//! start (the head or the rear). Each step the summed production of the
//! resources on duty advances it along the offset ellipse while the fire
//! edge at that point moves outward. The flank is closed once the line
//! spans the half perimeter of the offset ellipse.
//!
//! # References
//! - Fried, J.S., Fried, B.D. (1996). "Simulating wildfire containment with realistic tactics."
//!   Forest Science, 42(3), 267-281.

use std::f64::consts::PI;

use tracing::debug;

use super::force::{ContainForce, Flank};
use super::{ContainConfig, ContainResult, ContainStatus};
use crate::core_types::units::{Acres, Chains, ChainsPerHour, Minutes, SMIDGEN};
use crate::physics::fire_shape;

/// Simpson intervals for arc lengths.
const ARC_INTERVALS: usize = 32;

/// Bisection passes when locating a point by arc length.
const ARC_BISECTIONS: usize = 40;

/// Where the attack starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainTactic {
    /// At the head, working back toward the rear
    Head,
    /// At the rear, working up toward the head
    Rear,
}

impl ContainTactic {
    /// Worksheet item index, anything but 0 is a rear attack
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            ContainTactic::Head
        } else {
            ContainTactic::Rear
        }
    }

    /// Ellipse angle (0 at the head) lying `phi` radians from the attack
    /// start
    #[inline]
    fn angle(self, phi: f64) -> f64 {
        match self {
            ContainTactic::Head => phi,
            ContainTactic::Rear => PI - phi,
        }
    }
}

/// Fire as first reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireReport {
    /// Area at report
    pub size: Acres,
    /// Head spread rate
    pub spread_rate: ChainsPerHour,
    /// Length-to-width ratio
    pub length_to_width: f64,
}

/// An ellipse in chains, major axis on x with the head toward +x.
#[derive(Debug, Clone, Copy)]
struct Ellipse {
    a: f64,
    b: f64,
    cx: f64,
}

impl Ellipse {
    fn point(&self, theta: f64) -> (f64, f64) {
        (self.cx + self.a * theta.cos(), self.b * theta.sin())
    }

    fn speed(&self, theta: f64) -> f64 {
        (self.a * theta.sin()).hypot(self.b * theta.cos())
    }

    /// Arc length from angle 0 to `phi`
    fn arc(&self, phi: f64) -> f64 {
        if phi <= 0.0 {
            return 0.0;
        }
        let h = phi / ARC_INTERVALS as f64;
        let inner: f64 = (1..ARC_INTERVALS)
            .map(|i| {
                let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
                weight * self.speed(h * i as f64)
            })
            .sum();
        h / 3.0 * (self.speed(0.0) + inner + self.speed(phi))
    }

    fn half_perimeter(&self) -> f64 {
        self.arc(PI)
    }

    /// Angle whose arc length from 0 is `s`
    fn angle_at(&self, s: f64) -> f64 {
        if s <= 0.0 {
            return 0.0;
        }
        if s >= self.half_perimeter() {
            return PI;
        }
        let (mut lo, mut hi) = (0.0, PI);
        for _ in 0..ARC_BISECTIONS {
            let mid = 0.5 * (lo + hi);
            if self.arc(mid) < s {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}

/// Linear fire growth from the report.
#[derive(Debug, Clone, Copy)]
struct Growth {
    report_head: f64,
    report_back: f64,
    /// ch/min
    head_rate: f64,
    /// ch/min
    back_rate: f64,
    length_to_width: f64,
}

impl Growth {
    fn new(report: &FireReport) -> Self {
        let lw = report.length_to_width.max(1.0);
        let ecc = fire_shape::eccentricity(lw);
        let head_rate = report.spread_rate.per_minute().max(0.0);
        let back_rate = fire_shape::spread_at_back(head_rate, ecc);

        // A = π L W / 4 with W = L / lw
        let area = report.size.to_square_chains().max(0.0);
        let length = (4.0 * area * lw / PI).sqrt();
        let total = head_rate + back_rate;
        let head_share = if total < SMIDGEN { 0.5 } else { head_rate / total };
        Self {
            report_head: length * head_share,
            report_back: length * (1.0 - head_share),
            head_rate,
            back_rate,
            length_to_width: lw,
        }
    }

    fn head(&self, t: f64) -> f64 {
        self.report_head + self.head_rate * t
    }

    fn back(&self, t: f64) -> f64 {
        self.report_back + self.back_rate * t
    }

    /// Fire edge at `t`, pushed out by `offset`
    fn edge(&self, t: f64, offset: f64) -> Ellipse {
        let (head, back) = (self.head(t), self.back(t));
        let a = 0.5 * (head + back);
        Ellipse {
            a: a + offset,
            b: a / self.length_to_width + offset,
            cx: 0.5 * (head - back),
        }
    }

    fn area(&self, t: f64) -> Acres {
        let length = self.head(t) + self.back(t);
        let width = fire_shape::width(length, self.length_to_width);
        Acres::from_square_chains(fire_shape::area(length, width))
    }
}

/// One containment run.
#[derive(Debug, Clone)]
pub struct ContainSim {
    report: FireReport,
    force: ContainForce,
    tactic: ContainTactic,
    attack_dist: Chains,
    config: ContainConfig,
}

impl ContainSim {
    pub fn new(
        report: FireReport,
        force: ContainForce,
        tactic: ContainTactic,
        attack_dist: Chains,
        config: ContainConfig,
    ) -> Self {
        Self {
            report,
            force,
            tactic,
            attack_dist,
            config,
        }
    }

    #[must_use]
    pub fn force(&self) -> &ContainForce {
        &self.force
    }

    /// Run to a terminal state
    #[must_use]
    pub fn run(&self) -> ContainResult {
        let growth = Growth::new(&self.report);
        let flank = Flank::Left;
        let offset = self.attack_dist.value().max(0.0);

        let mut result = ContainResult {
            status: ContainStatus::Reported,
            final_time: Minutes::ZERO,
            final_size: self.report.size,
            final_line: Chains::ZERO,
            final_cost: 0.0,
            resources_used: 0,
            report_head: Chains::new(growth.report_head),
            report_back: Chains::new(growth.report_back),
            attack_head: Chains::new(growth.report_head),
            attack_back: Chains::new(growth.report_back),
            length_to_width: growth.length_to_width,
            points: Vec::new(),
            steps: 0,
            x_min: Chains::ZERO,
            x_max: Chains::ZERO,
            y_max: Chains::ZERO,
        };

        let Some(start) = self.force.first_arrival(flank) else {
            debug!("no resources dispatched, fire is never attacked");
            return result;
        };
        let start = start.value();
        result.attack_head = Chains::new(growth.head(start));
        result.attack_back = Chains::new(growth.back(start));

        let horizon = self
            .force
            .last_departure(flank)
            .map_or(start, Minutes::value);
        let dt = (horizon - start) / self.config.min_steps.max(1) as f64;
        let exceeded = |t: f64| {
            self.config
                .dist_limit
                .is_some_and(|limit| growth.head(t) > limit.value())
        };

        let mut t = start;
        let mut line = 0.0;
        let mut built = 0.0;
        let mut steps = 0_usize;
        let mut points = vec![growth.edge(t, offset).point(self.tactic.angle(0.0))];

        let status = loop {
            if exceeded(t) {
                break ContainStatus::DistanceLimitExceeded;
            }
            let now = Minutes::new(t);
            if dt < SMIDGEN || self.force.exhausted(flank, now) {
                break ContainStatus::Exhausted;
            }
            if steps >= self.config.max_steps {
                // Out of steps with help still on the way
                if self.force.next_arrival_after(flank, now).is_some() {
                    break ContainStatus::Attacked;
                }
                break ContainStatus::StepOverflow;
            }
            steps += 1;

            let next = t + dt;
            let before = growth.edge(t, offset);
            let after = growth.edge(next, offset);
            let theta = self.tactic.angle(before.angle_at(line));
            let (x0, y0) = before.point(theta);
            let (x1, y1) = after.point(theta);
            let moved = (x1 - x0).hypot(y1 - y0);
            let ds = self.force.production(flank, now).per_minute() * dt;
            t = next;

            if ds < moved {
                if self.force.all_arrived(flank, now) {
                    break ContainStatus::Overrun;
                }
                if self.config.retry {
                    if let Some(arrival) = self.force.next_arrival_after(flank, now) {
                        debug!(
                            time = *arrival,
                            abandoned = line,
                            "line overrun, attack restarts at next arrival"
                        );
                        t = arrival.value();
                        line = 0.0;
                        points.push(growth.edge(t, offset).point(self.tactic.angle(0.0)));
                        continue;
                    }
                }
            }

            line += ds;
            built += ds;
            if line >= after.half_perimeter() {
                points.push(after.point(self.tactic.angle(PI)));
                break ContainStatus::Contained;
            }
            points.push(after.point(self.tactic.angle(after.angle_at(line))));
        };

        let end = Minutes::new(t);
        result.status = status;
        result.final_time = end;
        result.final_size = growth.area(t);
        result.final_line = Chains::new(2.0 * built);
        result.final_cost = if self.config.cost {
            self.force.cost_until(end)
        } else {
            0.0
        };
        result.resources_used = self.force.used_by(end);
        result.x_min = Chains::new(points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min));
        result.x_max = Chains::new(points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max));
        result.y_max = Chains::new(points.iter().map(|p| p.1).fold(0.0, f64::max));
        result.points = points;
        result.steps = steps;

        debug!(
            ?status,
            time = t,
            line = 2.0 * built,
            steps,
            "containment run finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::force::Resource;
    use super::super::WorksheetStatus;
    use super::*;
    use approx::assert_relative_eq;

    fn report(size: f64, spread: f64, lw: f64) -> FireReport {
        FireReport {
            size: Acres::new(size),
            spread_rate: ChainsPerHour::new(spread),
            length_to_width: lw,
        }
    }

    fn one_crew(arrival: f64, production: f64, duration: f64) -> ContainForce {
        let mut force = ContainForce::new();
        force.add(Resource::new(
            "crew",
            Minutes::new(arrival),
            ChainsPerHour::new(production),
            Minutes::new(duration),
        ));
        force
    }

    #[test]
    fn test_report_geometry_matches_size() {
        let growth = Growth::new(&report(2.0, 10.0, 3.0));
        let length = growth.report_head + growth.report_back;
        let width = length / 3.0;
        assert_relative_eq!(PI * length * width / 4.0, 20.0, epsilon = 1e-9);
        assert!(growth.report_head > growth.report_back);
        assert_relative_eq!(*growth.area(0.0), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_length_of_circle() {
        let circle = Ellipse {
            a: 2.0,
            b: 2.0,
            cx: 0.0,
        };
        assert_relative_eq!(circle.half_perimeter(), 2.0 * PI, epsilon = 1e-9);
        assert_relative_eq!(circle.angle_at(PI), PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_resources_is_reported() {
        let sim = ContainSim::new(
            report(1.0, 10.0, 2.0),
            ContainForce::new(),
            ContainTactic::Rear,
            Chains::ZERO,
            ContainConfig::default(),
        );
        let result = sim.run();
        assert_eq!(result.status, ContainStatus::Reported);
        assert_eq!(result.worksheet_status(), WorksheetStatus::Escaped);
        assert_eq!(result.worksheet_size(), -1.0);
        assert!(result.points.is_empty());
    }

    #[test]
    fn test_strong_rear_attack_contains() {
        let sim = ContainSim::new(
            report(1.0, 5.0, 2.0),
            one_crew(30.0, 60.0, 600.0),
            ContainTactic::Rear,
            Chains::ZERO,
            ContainConfig::default(),
        );
        let result = sim.run();
        assert_eq!(result.status, ContainStatus::Contained);
        assert_eq!(result.worksheet_status(), WorksheetStatus::Contained);
        assert!(*result.final_size > 1.0);
        assert!(*result.final_line > 0.0);
        assert!(*result.final_time > 30.0);
        assert_eq!(result.resources_used, 1);
        assert!(result.x_max >= result.x_min);
    }

    #[test]
    fn test_weak_head_attack_is_overrun() {
        let sim = ContainSim::new(
            report(5.0, 120.0, 3.0),
            one_crew(10.0, 30.0, 600.0),
            ContainTactic::Head,
            Chains::ZERO,
            ContainConfig::default(),
        );
        let result = sim.run();
        assert_eq!(result.status, ContainStatus::Overrun);
        // Overrun before any line was built
        assert_eq!(*result.final_line, 0.0);
        assert_eq!(result.worksheet_status(), WorksheetStatus::Escaped);
        assert_eq!(result.worksheet_size(), -1.0);
    }

    #[test]
    fn test_distance_limit() {
        let config = ContainConfig {
            dist_limit: Some(Chains::new(1.0)),
            ..ContainConfig::default()
        };
        let sim = ContainSim::new(
            report(10.0, 30.0, 2.0),
            one_crew(60.0, 60.0, 600.0),
            ContainTactic::Rear,
            Chains::ZERO,
            config,
        );
        assert_eq!(sim.run().status, ContainStatus::DistanceLimitExceeded);
    }

    #[test]
    fn test_step_budget() {
        let config = ContainConfig {
            min_steps: 50,
            max_steps: 3,
            ..ContainConfig::default()
        };
        // Closing this flank takes about five steps
        let sim = ContainSim::new(
            report(100.0, 5.0, 2.0),
            one_crew(30.0, 60.0, 600.0),
            ContainTactic::Rear,
            Chains::ZERO,
            config,
        );
        let result = sim.run();
        assert_eq!(result.status, ContainStatus::StepOverflow);
        assert_eq!(result.steps, 3);
        assert_eq!(result.points.len(), 4);
    }

    #[test]
    fn test_default_budget_never_overflows() {
        // dt spreads the duty window over min_steps, so the default budget
        // outlasts every run
        let config = ContainConfig::default();
        let result = ContainSim::new(
            report(100.0, 0.1, 2.0),
            one_crew(30.0, 1.0, 600.0),
            ContainTactic::Rear,
            Chains::ZERO,
            config,
        )
        .run();
        assert_eq!(result.status, ContainStatus::Exhausted);
        assert!(result.steps <= config.min_steps + 1);
    }

    #[test]
    fn test_budget_spent_before_last_arrival_is_attacked() {
        let mut force = one_crew(10.0, 1.0, 600.0);
        force.add(Resource::new(
            "dozer",
            Minutes::new(300.0),
            ChainsPerHour::new(120.0),
            Minutes::new(600.0),
        ));
        let config = ContainConfig {
            min_steps: 50,
            max_steps: 3,
            ..ContainConfig::default()
        };
        let result = ContainSim::new(
            report(100.0, 5.0, 2.0),
            force,
            ContainTactic::Rear,
            Chains::ZERO,
            config,
        )
        .run();
        assert_eq!(result.status, ContainStatus::Attacked);
        assert_eq!(result.steps, 3);
        assert!(*result.final_time < 300.0);
        assert_eq!(result.resources_used, 1);
        // Line was built, so the worksheet reports a withdrawal
        assert_eq!(result.worksheet_status(), WorksheetStatus::Withdrawn);
        assert_eq!(result.worksheet_size(), -1.0);
    }

    #[test]
    fn test_costs_only_when_requested() {
        let mut force = ContainForce::new();
        force.add(
            Resource::new(
                "engine",
                Minutes::new(30.0),
                ChainsPerHour::new(60.0),
                Minutes::new(600.0),
            )
            .with_cost(100.0, 60.0),
        );
        let run = |cost| {
            ContainSim::new(
                report(1.0, 5.0, 2.0),
                force.clone(),
                ContainTactic::Rear,
                Chains::ZERO,
                ContainConfig {
                    cost,
                    ..ContainConfig::default()
                },
            )
            .run()
        };
        assert_eq!(run(false).final_cost, 0.0);
        let costed = run(true);
        assert!(costed.final_cost > 100.0);
    }
}

//! Containment resources
//!
//! A [`ContainForce`] is the list of line-building resources dispatched to a
//! fire. Each resource arrives some time after the fire is reported, builds
//! line at a fixed production rate for its assigned duration and then
//! leaves.

use serde::{Deserialize, Serialize};

use crate::core_types::units::{ChainsPerHour, Minutes};

/// Side of the fire a resource works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Flank {
    /// Left flank, looking from the point of origin toward the head
    #[default]
    Left,
    /// Right flank
    Right,
}

/// One line-building resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Display name
    pub name: String,

    /// Arrival time after the fire is reported
    pub arrival: Minutes,

    /// Line production rate while on duty
    pub production: ChainsPerHour,

    /// Time on duty after arrival
    pub duration: Minutes,

    /// Flank the resource is assigned to
    pub flank: Flank,

    /// Fixed cost per dispatch
    pub base_cost: f64,

    /// Cost per hour on duty
    pub hour_cost: f64,
}

impl Resource {
    /// A left-flank resource without costs
    pub fn new(
        name: impl Into<String>,
        arrival: Minutes,
        production: ChainsPerHour,
        duration: Minutes,
    ) -> Self {
        Self {
            name: name.into(),
            arrival,
            production,
            duration,
            flank: Flank::Left,
            base_cost: 0.0,
            hour_cost: 0.0,
        }
    }

    /// Attach base and hourly costs
    #[must_use]
    pub fn with_cost(mut self, base_cost: f64, hour_cost: f64) -> Self {
        self.base_cost = base_cost;
        self.hour_cost = hour_cost;
        self
    }

    /// Time the resource leaves the fire
    #[inline]
    #[must_use]
    pub fn departure(&self) -> Minutes {
        self.arrival + self.duration
    }

    /// Building line at time `t`
    #[inline]
    #[must_use]
    pub fn on_duty(&self, t: Minutes) -> bool {
        self.arrival <= t && t < self.departure()
    }

    /// Cost incurred by time `t`: the base cost once arrived plus the hourly
    /// rate for the time spent on duty
    #[must_use]
    pub fn cost_until(&self, t: Minutes) -> f64 {
        if t < self.arrival {
            return 0.0;
        }
        let worked = t.min(self.departure()) - self.arrival;
        self.base_cost + self.hour_cost * *worked / 60.0
    }
}

/// Resources dispatched to one fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainForce {
    resources: Vec<Resource>,
}

impl ContainForce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    fn on_flank(&self, flank: Flank) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(move |r| r.flank == flank)
    }

    /// Earliest arrival on `flank`
    #[must_use]
    pub fn first_arrival(&self, flank: Flank) -> Option<Minutes> {
        self.on_flank(flank).map(|r| r.arrival).min()
    }

    /// Earliest arrival on `flank` strictly after `t`
    #[must_use]
    pub fn next_arrival_after(&self, flank: Flank, t: Minutes) -> Option<Minutes> {
        self.on_flank(flank)
            .map(|r| r.arrival)
            .filter(|&a| a > t)
            .min()
    }

    /// Latest departure on `flank`
    #[must_use]
    pub fn last_departure(&self, flank: Flank) -> Option<Minutes> {
        self.on_flank(flank).map(Resource::departure).max()
    }

    /// Every resource on `flank` has arrived by `t`
    #[must_use]
    pub fn all_arrived(&self, flank: Flank, t: Minutes) -> bool {
        self.on_flank(flank).all(|r| r.arrival <= t)
    }

    /// Every resource on `flank` has left by `t`
    #[must_use]
    pub fn exhausted(&self, flank: Flank, t: Minutes) -> bool {
        self.on_flank(flank).all(|r| r.departure() <= t)
    }

    /// Summed production of the resources on duty on `flank` at `t`
    #[must_use]
    pub fn production(&self, flank: Flank, t: Minutes) -> ChainsPerHour {
        self.on_flank(flank)
            .filter(|r| r.on_duty(t))
            .fold(ChainsPerHour::ZERO, |sum, r| sum + r.production)
    }

    /// Resources that reached the fire by `t`
    #[must_use]
    pub fn used_by(&self, t: Minutes) -> usize {
        self.resources.iter().filter(|r| r.arrival <= t).count()
    }

    /// Total cost incurred by `t`
    #[must_use]
    pub fn cost_until(&self, t: Minutes) -> f64 {
        self.resources.iter().map(|r| r.cost_until(t)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn crew(arrival: f64, production: f64, duration: f64) -> Resource {
        Resource::new(
            "crew",
            Minutes::new(arrival),
            ChainsPerHour::new(production),
            Minutes::new(duration),
        )
    }

    #[test]
    fn test_production_counts_resources_on_duty() {
        let mut force = ContainForce::new();
        force.add(crew(10.0, 5.0, 60.0));
        force.add(crew(30.0, 8.0, 120.0));
        let mut right = crew(0.0, 100.0, 500.0);
        right.flank = Flank::Right;
        force.add(right);

        assert_eq!(*force.production(Flank::Left, Minutes::new(5.0)), 0.0);
        assert_eq!(*force.production(Flank::Left, Minutes::new(20.0)), 5.0);
        assert_eq!(*force.production(Flank::Left, Minutes::new(40.0)), 13.0);
        assert_eq!(*force.production(Flank::Left, Minutes::new(80.0)), 8.0);
        assert_eq!(force.first_arrival(Flank::Left), Some(Minutes::new(10.0)));
        assert_eq!(
            force.next_arrival_after(Flank::Left, Minutes::new(10.0)),
            Some(Minutes::new(30.0))
        );
        assert!(force.exhausted(Flank::Left, Minutes::new(150.0)));
        assert!(!force.exhausted(Flank::Right, Minutes::new(150.0)));
    }

    #[test]
    fn test_cost_stops_at_departure() {
        let dozer = crew(30.0, 20.0, 60.0).with_cost(500.0, 120.0);
        assert_eq!(dozer.cost_until(Minutes::new(10.0)), 0.0);
        assert_relative_eq!(dozer.cost_until(Minutes::new(60.0)), 560.0);
        assert_relative_eq!(dozer.cost_until(Minutes::new(600.0)), 620.0);
    }
}

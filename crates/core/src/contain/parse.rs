//! Resource list parsing
//!
//! The worksheet holds each resource attribute as one text cell with one
//! token per resource. Tokens are separated by spaces, tabs, commas or
//! double quotes; empty tokens are skipped.

use super::force::{ContainForce, Resource};
use crate::core_types::units::{ChainsPerHour, Minutes};
use crate::error::{CalcError, Result};

const SEPARATORS: [char; 4] = [' ', '\t', ',', '"'];

/// Split a resource attribute list into tokens
#[must_use]
pub fn tokens(text: &str) -> Vec<&str> {
    text.split(SEPARATORS).filter(|t| !t.is_empty()).collect()
}

/// Text of each resource attribute column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceColumns<'a> {
    pub names: &'a str,
    pub arrivals: &'a str,
    pub durations: &'a str,
    pub productions: &'a str,
    /// Only read when costs are requested
    pub base_costs: Option<&'a str>,
    /// Only read when costs are requested
    pub hour_costs: Option<&'a str>,
}

fn number(column: &[&str], index: usize, what: &str, name: &str) -> Result<f64> {
    let token = column.get(index).ok_or_else(|| {
        CalcError::InvalidResource(format!("resource '{name}' has no {what}"))
    })?;
    token.parse::<f64>().map_err(|_| {
        CalcError::InvalidResource(format!("resource '{name}' {what} '{token}' is not a number"))
    })
}

/// Label of the resource in single-resource mode when none was entered
pub const SINGLE_RESOURCE_LABEL: &str = "Resource";

/// Build a force of exactly one resource from the first token of each
/// column
///
/// The name only labels the resource and may be empty.
pub fn parse_single(columns: &ResourceColumns<'_>) -> Result<ContainForce> {
    let name = columns.names.trim();
    let name = if name.is_empty() { SINGLE_RESOURCE_LABEL } else { name };
    let mut resource = Resource::new(
        name,
        Minutes::new(number(&tokens(columns.arrivals), 0, "arrival", name)?),
        ChainsPerHour::new(number(&tokens(columns.productions), 0, "production", name)?),
        Minutes::new(number(&tokens(columns.durations), 0, "duration", name)?),
    );
    if let (Some(base), Some(hour)) = (columns.base_costs, columns.hour_costs) {
        resource = resource.with_cost(
            number(&tokens(base), 0, "base cost", name)?,
            number(&tokens(hour), 0, "hourly cost", name)?,
        );
    }
    let mut force = ContainForce::new();
    force.add(resource);
    Ok(force)
}

/// Build the force, one resource per name token
///
/// At most `limit` resources are read when given.
pub fn parse_force(columns: &ResourceColumns<'_>, limit: Option<usize>) -> Result<ContainForce> {
    let names = tokens(columns.names);
    let arrivals = tokens(columns.arrivals);
    let durations = tokens(columns.durations);
    let productions = tokens(columns.productions);
    let base = columns.base_costs.map(tokens);
    let hour = columns.hour_costs.map(tokens);

    let mut force = ContainForce::new();
    for (i, &name) in names.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        let mut resource = Resource::new(
            name,
            Minutes::new(number(&arrivals, i, "arrival", name)?),
            ChainsPerHour::new(number(&productions, i, "production", name)?),
            Minutes::new(number(&durations, i, "duration", name)?),
        );
        if let (Some(base), Some(hour)) = (&base, &hour) {
            resource = resource.with_cost(
                number(base, i, "base cost", name)?,
                number(hour, i, "hourly cost", name)?,
            );
        }
        force.add(resource);
    }
    Ok(force)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_split_on_all_separators() {
        assert_eq!(
            tokens("\"Crew 7\",Dozer\tEngine  \"\""),
            vec!["Crew", "7", "Dozer", "Engine"]
        );
        assert!(tokens("  ,\t\"").is_empty());
    }

    #[test]
    fn test_parse_force() {
        let columns = ResourceColumns {
            names: "Crew1 Crew2",
            arrivals: "30, 60",
            durations: "480 480",
            productions: "6 12.5",
            base_costs: Some("100 200"),
            hour_costs: Some("10 20"),
        };
        let force = parse_force(&columns, None).unwrap();
        assert_eq!(force.len(), 2);
        let second = &force.resources()[1];
        assert_eq!(second.name, "Crew2");
        assert_eq!(*second.production, 12.5);
        assert_eq!(second.base_cost, 200.0);

        let single = parse_force(&columns, Some(1)).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_costs_ignored_unless_requested() {
        let columns = ResourceColumns {
            names: "Crew1",
            arrivals: "30",
            durations: "480",
            productions: "6",
            ..ResourceColumns::default()
        };
        let force = parse_force(&columns, None).unwrap();
        assert_eq!(force.resources()[0].hour_cost, 0.0);
    }

    #[test]
    fn test_bad_token_is_an_error() {
        let columns = ResourceColumns {
            names: "Crew1 Crew2",
            arrivals: "30 soon",
            durations: "480 480",
            productions: "6 6",
            ..ResourceColumns::default()
        };
        assert!(matches!(
            parse_force(&columns, None),
            Err(CalcError::InvalidResource(_))
        ));
    }

    #[test]
    fn test_single_resource_needs_no_name() {
        let columns = ResourceColumns {
            arrivals: "30",
            durations: "600",
            productions: "60",
            ..ResourceColumns::default()
        };
        let force = parse_single(&columns).unwrap();
        assert_eq!(force.len(), 1);
        let crew = &force.resources()[0];
        assert_eq!(crew.name, SINGLE_RESOURCE_LABEL);
        assert_eq!(*crew.arrival, 30.0);
        assert_eq!(*crew.production, 60.0);

        let named = ResourceColumns {
            names: " Engine 12 ",
            ..columns
        };
        assert_eq!(parse_single(&named).unwrap().resources()[0].name, "Engine 12");
    }
}

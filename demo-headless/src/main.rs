use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fire_calc_core::graph::TraceRecord;
use fire_calc_core::{Graph, PropertyDict, Var};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Evaluate the fire behavior worksheet from the command line
#[derive(Parser, Debug)]
#[command(name = "fire-calc")]
#[command(about = "Fire behavior worksheet calculator", long_about = None)]
struct Args {
    /// JSON file of module and option switches (defaults: surface module only)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input cell assignment, e.g. vWindSpeedAtMidflame=5 (repeatable)
    #[arg(short, long = "input", value_name = "NAME=VALUE")]
    inputs: Vec<String>,

    /// Fuel model for the primary fuel bed
    #[arg(short, long)]
    fuel_model: Option<String>,

    /// Print every input and output cell as it is evaluated
    #[arg(short, long)]
    trace: bool,

    /// List the active functions in evaluation order and exit
    #[arg(short, long)]
    list: bool,
}

fn load_properties(path: Option<&PathBuf>) -> Result<PropertyDict> {
    let Some(path) = path else {
        return Ok(PropertyDict::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration {}", path.display()))?;
    let overrides = PropertyDict::from_json(&json)
        .with_context(|| format!("parsing configuration {}", path.display()))?;
    let mut props = PropertyDict::default();
    props.merge(&overrides);
    Ok(props)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let props = load_properties(args.config.as_ref())?;
    let mut graph = Graph::with_properties(props)?;
    info!(functions = graph.evaluation_order().count(), "worksheet configured");

    if args.list {
        for func in graph.evaluation_order() {
            println!("{}", func.name());
        }
        return Ok(());
    }

    if let Some(model) = &args.fuel_model {
        graph
            .set_fuel_model(Var::SurfaceFuelBedModel, model)
            .with_context(|| format!("fuel model '{model}'"))?;
    }
    for assignment in &args.inputs {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("input '{assignment}' is not NAME=VALUE");
        };
        graph
            .set_from_str(name.trim(), value)
            .with_context(|| format!("input '{assignment}'"))?;
    }

    if args.trace {
        graph.attach_trace(Box::new(|record: &TraceRecord| println!("{record}")));
    }
    graph.evaluate().context("evaluating worksheet")?;
    if args.trace {
        return Ok(());
    }

    for id in graph.user_outputs() {
        let cell = graph.cell(id);
        let name = cell.label().unwrap_or(cell.name());
        println!("{:<44} {:>14} {}", name, cell.display_value(), cell.unit());
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use printq::{
    BatchSummary, ConstraintsRecord, JobRecord, PrintPlan, Scalar, batch_records, get_min_max,
    optimize_printing,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const SCENARIOS: &str = include_str!("../demos/scenarios.json");

#[derive(Parser)]
#[command(name = "printq", version, about = "Min/max search and 3D print batch scheduling")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the minimum and maximum of a list of numbers
    Minmax {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Batch the print jobs described in a JSON file
    Schedule {
        /// JSON file: {"print_jobs": [...], "constraints": {...}}.
        /// See demos/lab_queue.json for an example.
        file: PathBuf,

        /// Override the printer's maximum batch volume
        #[arg(long)]
        max_volume: Option<f64>,

        /// Override the printer's maximum jobs per batch
        #[arg(long, allow_negative_numbers = true)]
        max_items: Option<i64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include per-batch detail
        #[arg(long)]
        batches: bool,
    },

    /// Run the bundled min/max arrays and scheduling scenarios
    Demo,
}

#[derive(Deserialize)]
struct ScheduleInput {
    print_jobs: Vec<JobRecord>,
    #[serde(default)]
    constraints: ConstraintsRecord,
}

#[derive(Serialize)]
struct ScheduleReport<'a> {
    print_order: &'a [String],
    total_time: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    batches: Option<&'a [BatchSummary]>,
}

#[derive(Deserialize)]
struct DemoSet {
    min_max: Vec<Vec<f64>>,
    schedules: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    print_jobs: Vec<JobRecord>,
    constraints: ConstraintsRecord,
    expected: PrintPlan,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Minmax { values, json } => run_minmax(&values, json),
        Command::Schedule {
            file,
            max_volume,
            max_items,
            json,
            batches,
        } => run_schedule(file, max_volume, max_items, json, batches),
        Command::Demo => run_demo(),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("printq={level}"))
            .context("Failed to build log filter")?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn run_minmax(values: &[f64], json: bool) -> Result<()> {
    let (min, max) = get_min_max(values)?;

    if json {
        println!("{}", serde_json::json!({ "min": min, "max": max }));
    } else {
        println!("min/max: ({}, {})", min, max);
    }

    Ok(())
}

/// Parse a schedule file and apply the command-line constraint overrides
fn parse_schedule_input(
    contents: &str,
    max_volume: Option<f64>,
    max_items: Option<i64>,
) -> Result<ScheduleInput> {
    let mut input: ScheduleInput = serde_json::from_str(contents)?;

    if let Some(volume) = max_volume {
        input.constraints.max_volume = Scalar::Real(volume);
    }
    if let Some(items) = max_items {
        input.constraints.max_items = Scalar::Integer(items);
    }

    Ok(input)
}

fn run_schedule(
    file: PathBuf,
    max_volume: Option<f64>,
    max_items: Option<i64>,
    json: bool,
    show_batches: bool,
) -> Result<()> {
    let contents = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let input = parse_schedule_input(&contents, max_volume, max_items)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    tracing::info!(
        jobs = input.print_jobs.len(),
        file = %file.display(),
        "Scheduling print jobs"
    );

    let batches = batch_records(&input.print_jobs, &input.constraints)?;
    let plan = PrintPlan::from_batches(&batches);

    if json {
        let report = ScheduleReport {
            print_order: &plan.print_order,
            total_time: plan.total_time,
            batches: show_batches.then_some(batches.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if show_batches {
        for (i, batch) in batches.iter().enumerate() {
            println!(
                "  Batch {}: {} (volume {}, {} min)",
                i + 1,
                batch.job_ids.join(", "),
                batch.volume,
                batch.batch_time
            );
        }
    }
    print_plan(&plan);

    Ok(())
}

fn print_plan(plan: &PrintPlan) {
    println!("Print order: {:?}", plan.print_order);
    println!("Total time:  {} min", plan.total_time);
}

fn run_demo() -> Result<()> {
    let demo: DemoSet =
        serde_json::from_str(SCENARIOS).context("Failed to parse bundled scenarios")?;

    println!("=== Min/Max ===\n");
    for values in &demo.min_max {
        let (min, max) = get_min_max(values)?;
        println!("{:?}  min/max: ({}, {})", values, min, max);
    }

    println!("\n=== Print Scheduling ===");
    let mut mismatches = 0;
    for (i, scenario) in demo.schedules.iter().enumerate() {
        let plan = optimize_printing(&scenario.print_jobs, &scenario.constraints)
            .with_context(|| format!("Scenario '{}' failed", scenario.name))?;

        println!("\nTest {} ({}):", i + 1, scenario.name);
        print_plan(&plan);

        if plan != scenario.expected {
            mismatches += 1;
            println!(
                "  ✗ expected {:?} / {} min",
                scenario.expected.print_order, scenario.expected.total_time
            );
        }
    }

    if mismatches > 0 {
        anyhow::bail!("{} scenario(s) did not match their expected plan", mismatches);
    }

    println!("\n✓ All {} scenarios match", demo.schedules.len());
    Ok(())
}

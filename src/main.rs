//! Projection Calculator CLI
//!
//! Command-line stand-in for the landing page form: reads the two raw field
//! values, runs the calculator and prints the formatted results.

use anyhow::{Context, Result};
use clap::Parser;
use projection_calculator::{
    format_currency, AssumptionSet, ProjectionCalculator, RawInput, ScenarioRunner,
};
use projection_calculator::projection::ScheduleSummary;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "projection-calculator")]
#[command(about = "Project net worth and monthly income from initial and monthly contributions", long_about = None)]
struct Cli {
    /// Initial contribution (raw text, malformed values count as 0)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    initial: String,

    /// Monthly contribution (raw text, malformed values count as 0)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    monthly: String,

    /// Directory containing calculator_assumptions.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Assumption version to use (defaults to the canonical version)
    #[arg(long = "version")]
    assumptions_version: Option<String>,

    /// Print the month-by-month balance schedule
    #[arg(long)]
    schedule: bool,

    /// Print the projection under every loaded assumption version
    #[arg(long)]
    compare: bool,

    /// CSV file of `initial,monthly` rows; writes formatted results as CSV to stdout
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    assumptions_version: &'a str,
    projected_net_worth: String,
    estimated_monthly_income: String,
}

#[derive(Serialize)]
struct BatchRow<'a> {
    initial: &'a str,
    monthly: &'a str,
    projected_net_worth: String,
    estimated_monthly_income: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let set = match &cli.assumptions {
        Some(dir) => AssumptionSet::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => AssumptionSet::canonical(),
    };
    let runner = ScenarioRunner::new(set);

    let calculator = match &cli.assumptions_version {
        Some(version) => runner.calculator(version)?,
        None => runner.preferred_calculator(),
    };

    if let Some(path) = &cli.batch {
        return run_batch(&runner, &calculator, path);
    }

    let results = calculator.update_results(&cli.initial, &cli.monthly);

    if cli.json {
        let output = JsonOutput {
            assumptions_version: &calculator.assumptions().version,
            projected_net_worth: results.projected_net_worth,
            estimated_monthly_income: results.estimated_monthly_income,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let a = calculator.assumptions();
    println!("Projection Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("==========================\n");
    println!("Assumptions: {}", a.version);
    println!("  Monthly Interest:   {:.4}%", a.monthly_interest_rate * 100.0);
    println!("  Horizon:            {} months", a.horizon_months);
    println!("  Monthly Withdrawal: {:.4}%", a.monthly_withdrawal_rate * 100.0);
    println!();
    println!("Projected Net Worth:      {}", results.projected_net_worth);
    println!("Estimated Monthly Income: {}", results.estimated_monthly_income);

    if cli.schedule {
        print_schedule(&calculator, &cli.initial, &cli.monthly);
    }

    if cli.compare {
        let (initial, monthly) = calculator
            .accept(&cli.initial, &cli.monthly)
            .unwrap_or((0.0, 0.0));
        println!("\nAll versions:");
        println!("{:<24} {:>20} {:>16}", "Version", "Net Worth", "Income");
        println!("{}", "-".repeat(62));
        for entry in runner.run_versions(initial, monthly) {
            println!(
                "{:<24} {:>20} {:>16}",
                entry.version,
                format_currency(entry.result.projected_net_worth),
                format_currency(entry.result.estimated_monthly_income),
            );
        }
    }

    Ok(())
}

fn print_schedule(calculator: &ProjectionCalculator, initial_raw: &str, monthly_raw: &str) {
    let Some((initial, monthly)) = calculator.accept(initial_raw, monthly_raw) else {
        println!("\nNo schedule: inputs rejected");
        return;
    };

    let rows = calculator.schedule(initial, monthly);
    println!("\n{:>5} {:>16} {:>12} {:>12} {:>16}", "Month", "Opening", "Interest", "Contrib", "Closing");
    println!("{}", "-".repeat(65));
    for row in &rows {
        println!(
            "{:>5} {:>16.2} {:>12.2} {:>12.2} {:>16.2}",
            row.month, row.opening_balance, row.interest, row.contribution, row.closing_balance,
        );
    }

    let summary = ScheduleSummary::from_rows(initial, &rows);
    println!("\nSummary:");
    println!("  Total Months:        {}", summary.total_months);
    println!("  Total Contributions: {}", format_currency(summary.total_contributions));
    println!("  Total Interest:      {}", format_currency(summary.total_interest));
    println!("  Final Balance:       {}", format_currency(summary.final_balance));
}

fn run_batch(runner: &ScenarioRunner, calculator: &ProjectionCalculator, path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening batch file {}", path.display()))?;
    process_batch(runner, calculator, file, io::stdout())
}

/// Read `initial,monthly` rows from `input` and write formatted results as CSV to `output`
fn process_batch<R: Read, W: Write>(
    runner: &ScenarioRunner,
    calculator: &ProjectionCalculator,
    input: R,
    output: W,
) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let inputs = reader
        .deserialize::<RawInput>()
        .collect::<Result<Vec<_>, _>>()
        .context("reading batch rows")?;

    let version = &calculator.assumptions().version;
    let outputs = runner.run_batch(version, &inputs)?;

    let mut writer = csv::Writer::from_writer(output);
    for (raw, formatted) in inputs.iter().zip(outputs) {
        writer.serialize(BatchRow {
            initial: &raw.initial,
            monthly: &raw.monthly,
            projected_net_worth: formatted.projected_net_worth,
            estimated_monthly_income: formatted.estimated_monthly_income,
        })?;
    }
    writer.flush()?;
    Ok(())
}

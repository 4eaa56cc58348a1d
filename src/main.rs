use anyhow::Result;
use clap::{Parser, Subcommand};
use configuration::{Config, OutputFormat, load_config, load_config_from};
use core_types::{EquityCurve, EquityPoint};
use risk::RiskAssessor;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod output;
mod render;
mod scenario;

use scenario::{Scenario, build_curve};

/// The main entry point for the drawdown calculator.
fn main() -> ExitCode {
    // Logs go to stderr so `--format json` output stays clean.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {}", e);
    }

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Execute the appropriate command
    let outcome = match cli.command {
        Commands::Calculate(args) => handle_calculate(args, &config),
        Commands::Demo { format } => run_curve(&EquityCurve::default(), format, &config),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Peak-to-trough drawdown calculator for trading accounts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the drawdown of a starting balance and a list of equity points.
    Calculate(CalculateArgs),
    /// Run the calculator's sample account (100,000 up to 108,000, back to 101,000).
    Demo {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Parser)]
struct CalculateArgs {
    /// The starting balance. Overrides the scenario file and the configured default.
    #[arg(long)]
    balance: Option<Decimal>,

    /// An equity point as `<peak|low>:<value>`, e.g. `peak:108000`. Repeat in order.
    #[arg(long = "point", short = 'p')]
    points: Vec<EquityPoint>,

    /// A JSON scenario file with `starting_balance` and `points`.
    #[arg(long, short)]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

fn handle_calculate(args: CalculateArgs, config: &Config) -> Result<ExitCode> {
    let scenario = match &args.file {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let curve = build_curve(
        scenario,
        args.balance,
        args.points,
        config.calculator.starting_balance,
    );
    run_curve(&curve, args.format, config)
}

fn run_curve(curve: &EquityCurve, format: OutputFormat, config: &Config) -> Result<ExitCode> {
    let assessor = RiskAssessor::new(config.risk_thresholds.clone())?;
    let precision = config.calculator.precision;

    tracing::info!(
        starting_balance = %curve.starting_balance(),
        points = curve.len(),
        "Calculating drawdown."
    );

    let output = output::evaluate(curve, &assessor, precision);
    let notice = &output.notice;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => match (&output.report, &output.assessment) {
            (Some(report), Some(assessment)) => {
                println!("{}", render::points_table(curve));
                println!("{}", render::report_table(report, assessment, precision));
                println!("{}: {}", notice.title, notice.description);
            }
            _ => eprintln!("{}: {}", notice.title, notice.description),
        },
    }

    Ok(output.exit_code())
}

//! Fleet demo entry point.
//!
//! A plain run reproduces the reference scenario: a Subaru car checked at
//! license level 6 and a Ford truck checked at level 5, printing `false` and
//! `true` to stdout. The `check` subcommand parametrizes the wiring:
//!
//! ```bash
//! # Reference run
//! fleet-demo
//!
//! # Parametrized check
//! fleet-demo check --category truck --make ford --license-level 5
//!
//! # Include the manufacturer's start procedure and a JSON report
//! fleet-demo check --category car --make subaru --license-level 7 \
//!     --with-ignition --report json
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use core_fleet::{DriveCheckReport, Vehicle, VehicleCategory};
use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use make_traits::{ConsoleSink, Make};
use provider_ford::FordMake;
use provider_subaru::SubaruMake;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "fleet-demo",
    about = "Bridge-pattern demo: vehicle categories decoupled from manufacturers",
    long_about = None
)]
struct Cli {
    /// Minimum level for diagnostic output (stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogLevelArg::Warn)]
    log_level: LogLevelArg,

    /// Diagnostic output format
    #[arg(long, value_enum, global = true, default_value_t = LogFormatArg::Compact)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check one category/make wiring against a license level
    Check {
        /// Vehicle category to construct
        #[arg(long, value_enum)]
        category: CategoryArg,

        /// Manufacturer to inject into the vehicle
        #[arg(long, value_enum)]
        make: MakeArg,

        /// License level to evaluate
        #[arg(long, allow_negative_numbers = true)]
        license_level: i32,

        /// Run the manufacturer's start procedure before the check
        #[arg(long)]
        with_ignition: bool,

        /// Output format for the verdict
        #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
        report: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Car,
    Truck,
}

impl From<CategoryArg> for VehicleCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Car => VehicleCategory::Car,
            CategoryArg::Truck => VehicleCategory::Truck,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MakeArg {
    Subaru,
    Ford,
}

impl MakeArg {
    fn build(self) -> Arc<dyn Make> {
        match self {
            Self::Subaru => Arc::new(SubaruMake),
            Self::Ford => Arc::new(FordMake),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Trace => LogLevel::Trace,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Error => LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Compact => LogFormat::Compact,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = LoggingConfig::default()
        .with_format(cli.log_format.into())
        .with_level(cli.log_level.into());
    init_logging(config).context("failed to initialize logging")?;

    match cli.command {
        None => run_reference(),
        Some(Commands::Check {
            category,
            make,
            license_level,
            with_ignition,
            report,
        }) => run_check(category, make, license_level, with_ignition, report)?,
    }

    Ok(())
}

/// The original demo wiring: two checks, two printed booleans.
///
/// The start procedure is deliberately not invoked here; it stays available
/// behind `check --with-ignition`.
fn run_reference() {
    let car = Vehicle::car(Arc::new(SubaruMake));
    let truck = Vehicle::truck(Arc::new(FordMake));

    println!("{}", car.is_allowed_to_drive(6));
    println!("{}", truck.is_allowed_to_drive(5));
}

fn run_check(
    category: CategoryArg,
    make: MakeArg,
    license_level: i32,
    with_ignition: bool,
    report: ReportFormat,
) -> anyhow::Result<()> {
    let vehicle = Vehicle::new(category.into(), make.build());

    debug!(
        category = vehicle.category().as_str(),
        make = vehicle.make_name(),
        license_level,
        "running drive check"
    );

    if with_ignition {
        vehicle.start(&ConsoleSink);
    }

    match report {
        ReportFormat::Plain => {
            println!("{}", vehicle.is_allowed_to_drive(license_level));
        }
        ReportFormat::Json => {
            let report = DriveCheckReport::evaluate(&vehicle, license_level);
            let json =
                serde_json::to_string(&report).context("failed to serialize drive-check report")?;
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_subcommand_arguments() {
        let cli = Cli::parse_from([
            "fleet-demo",
            "check",
            "--category",
            "truck",
            "--make",
            "ford",
            "--license-level",
            "5",
            "--with-ignition",
            "--report",
            "json",
        ]);

        match cli.command {
            Some(Commands::Check {
                category,
                make,
                license_level,
                with_ignition,
                report,
            }) => {
                assert!(matches!(category, CategoryArg::Truck));
                assert!(matches!(make, MakeArg::Ford));
                assert_eq!(license_level, 5);
                assert!(with_ignition);
                assert!(matches!(report, ReportFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_plain_run_has_no_subcommand() {
        let cli = Cli::parse_from(["fleet-demo"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_negative_license_levels_parse() {
        let cli = Cli::parse_from([
            "fleet-demo",
            "check",
            "--category",
            "car",
            "--make",
            "subaru",
            "--license-level",
            "-3",
        ]);

        match cli.command {
            Some(Commands::Check { license_level, .. }) => assert_eq!(license_level, -3),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

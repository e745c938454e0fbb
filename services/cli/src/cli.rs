use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use clap::{Parser, Subcommand};
use donor_drive::config::AppConfig;
use donor_drive::error::AppError;
use donor_drive::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Donor Drive Coordinator",
    about = "Coordinate a single blood-donation drive from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end demonstration drive (default command)
    Demo(DemoArgs),
    /// Screen and process a roster CSV, then print the drive report
    Report(ReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "donor drive coordinator starting");

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Report(args) => run_report(args),
    }
}

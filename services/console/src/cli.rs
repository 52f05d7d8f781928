use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use maintdesk::config::AppConfig;
use maintdesk::desk::MaintenanceDesk;
use maintdesk::error::AppError;
use maintdesk::telemetry;
use tracing::info;

use crate::{demo, menu};

#[derive(Parser, Debug)]
#[command(
    name = "Maintenance Desk",
    about = "Operator console for the dormitory maintenance request desk",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive operator console (default command)
    Console(DeskArgs),
    /// Run a scripted end-to-end walkthrough of the desk
    Demo(DeskArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct DeskArgs {
    /// Override the configured identifier-space bound
    #[arg(long)]
    pub(crate) capacity: Option<u16>,
    /// Override the configured export destination
    #[arg(long)]
    pub(crate) export_path: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Console(DeskArgs::default()));

    match command {
        Command::Console(args) => {
            let (desk, config) = bootstrap(args)?;
            menu::run(desk, &config)
        }
        Command::Demo(args) => {
            let (desk, config) = bootstrap(args)?;
            demo::run(desk, &config)
        }
    }
}

fn bootstrap(mut args: DeskArgs) -> Result<(MaintenanceDesk, AppConfig), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(capacity) = args.capacity.take() {
        config.desk.capacity = capacity;
    }
    if let Some(export_path) = args.export_path.take() {
        config.desk.export_path = export_path;
    }

    telemetry::init(&config.telemetry)?;

    let desk = MaintenanceDesk::with_standard_roster(&config.desk)?;
    info!(
        ?config.environment,
        capacity = config.desk.capacity,
        "maintenance desk ready"
    );
    Ok((desk, config))
}

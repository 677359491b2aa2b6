use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wird khatam reading-schedule planner.
#[derive(Parser)]
#[command(name = "wird", version, about = "Khatam reading-schedule planner")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build and display the reading schedule.
    Plan(PlanArgs),
    /// Show checklist progress against the schedule.
    Status(StatusArgs),
}

/// Overrides for the plan fields of the TOML configuration, shared by
/// every subcommand that rebuilds the schedule.
#[derive(clap::Args)]
pub struct PlanOverrides {
    /// Override number of days from config.
    #[arg(short, long)]
    pub periods: Option<u16>,

    /// Override khatam repetition count from config.
    #[arg(short, long)]
    pub khatam: Option<u8>,

    /// Override unit scheme from config (pages, verses, juz, hizb).
    #[arg(short, long)]
    pub unit: Option<String>,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "wird.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: PlanOverrides,

    /// List individual slots under each day.
    #[arg(long)]
    pub slots: bool,

    /// Write the schedule as JSON to the given path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args)]
pub struct StatusArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "wird.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: PlanOverrides,

    /// Path to checklist JSON file.
    #[arg(long, default_value = "progress.json")]
    pub progress: PathBuf,
}

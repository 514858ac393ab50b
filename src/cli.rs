use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{prelude::*, tariff::Schedule};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Price a consumption series against the tariff schedule.
    Price(PriceArgs),

    /// Show the active tariff schedule.
    Bands(BandsArgs),
}

#[derive(Parser)]
pub struct PriceArgs {
    /// Input CSV with `timestamp` and `kwh` columns.
    #[clap(long, env = "CONSUMPTION_PATH")]
    pub input: PathBuf,

    /// Write the costed series back out as CSV.
    #[clap(long, env = "COSTED_PATH")]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub schedule: ScheduleArgs,
}

#[derive(Parser)]
pub struct BandsArgs {
    #[clap(flatten)]
    pub schedule: ScheduleArgs,
}

#[derive(Parser)]
pub struct ScheduleArgs {
    /// TOML file with custom tariff bands; the built-in schedule otherwise.
    #[clap(long = "schedule-path", env = "SCHEDULE_PATH")]
    pub schedule_path: Option<PathBuf>,
}

impl ScheduleArgs {
    pub fn load(&self) -> Result<Schedule> {
        match &self.schedule_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                Schedule::from_toml(&text)
            }
            None => Ok(Schedule::default()),
        }
    }
}

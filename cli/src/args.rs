//! Command-line arguments

use crate::commands::CalcArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bmi-plus",
    version,
    about = "BMI+ health metrics calculator",
    long_about = "Calculates BMI and, in advanced mode, body fat percentage and waist ratios from body measurements."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Extra TOML config file, applied after config/<RUST_ENV>.toml
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate metrics once from command-line measurements
    Calc(CalcArgs),
    /// Interactive calculator reading commands from stdin
    Session,
}

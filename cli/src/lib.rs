//! BMI+ command-line front end
//!
//! Drives the shared calculator from arguments (`calc`) or from stdin lines
//! (`session`) and prints reports as text or JSON.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use args::{Cli, Command};
pub use config::AppConfig;
pub use error::{CliError, CliResult};

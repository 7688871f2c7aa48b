//! BMI+ CLI
//!
//! ```bash
//! # Basic BMI
//! bmi-plus calc --weight 70 --height 175
//!
//! # Advanced metrics as JSON
//! bmi-plus calc -w 60 -H 165 -g female --neck 34 --waist 70 --hip 95 --advanced --format json
//!
//! # Interactive session
//! bmi-plus session
//! ```

use anyhow::Result;
use bmi_plus_cli::{commands, config::AppConfig, session, Cli, Command};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting BMI+"
    );

    match &cli.command {
        Command::Calc(args) => {
            let output = commands::run_calc(args, &config)?;
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Command::Session => {
            let stdin = io::stdin();
            session::run_session(stdin.lock(), io::stdout().lock(), &config)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so report output stays clean on stdout
fn init_tracing(verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "bmi_plus_cli=debug,bmi_plus_shared=debug".into()
        } else if AppConfig::is_production() {
            "bmi_plus_cli=info,bmi_plus_shared=warn".into()
        } else {
            "bmi_plus_cli=warn,bmi_plus_shared=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init();
    }
}

//! Configuration management for the BMI+ CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file for the environment (config/development.toml or config/production.toml)
//! 3. An explicit `--config` file
//! 4. Environment variables (prefix: BMI__)

use crate::error::{CliError, CliResult};
use bmi_plus_shared::{AnalysisMode, CalculatorSettings, LengthUnit, WeightUnit};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Narrowest gauge that still shows all four bands
pub const MIN_GAUGE_WIDTH: usize = 8;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub units: UnitsConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Append emoji to category labels
    pub emoji: bool,
    /// Width of the BMI gauge in columns
    pub gauge_width: usize,
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            emoji: true,
            gauge_width: 48,
            format: OutputFormat::Text,
        }
    }
}

/// Units measurements are typed in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitsConfig {
    pub weight: WeightUnit,
    pub length: LengthUnit,
}

/// Calculator defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Start in advanced mode
    pub advanced: bool,
    /// Recompute after every input in interactive sessions
    pub live_updates: bool,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. `explicit` file, when given (must exist)
    /// 4. Environment variables with BMI__ prefix
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let mut builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            // Override with environment variables (BMI__ prefix)
            // e.g., BMI__DISPLAY__GAUGE_WIDTH=60 sets display.gauge_width
            .add_source(config::Environment::with_prefix("BMI").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> CliResult<()> {
        if self.display.gauge_width < MIN_GAUGE_WIDTH {
            return Err(CliError::InvalidConfig(format!(
                "display.gauge_width must be at least {} (got {})",
                MIN_GAUGE_WIDTH, self.display.gauge_width
            )));
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Calculator settings derived from the config
    pub fn calculator_settings(&self) -> CalculatorSettings {
        CalculatorSettings {
            mode: AnalysisMode::from_flag(self.calculator.advanced),
            live_updates: self.calculator.live_updates,
            weight_unit: self.units.weight,
            length_unit: self.units.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.display.emoji);
        assert_eq!(config.display.gauge_width, 48);
        assert_eq!(config.display.format, OutputFormat::Text);
        assert_eq!(config.units.weight, WeightUnit::Kg);
        assert_eq!(config.units.length, LengthUnit::Cm);
        assert!(!config.calculator.advanced);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_narrow_gauge_rejected() {
        let mut config = AppConfig::default();
        config.display.gauge_width = 4;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn test_calculator_settings() {
        let mut config = AppConfig::default();
        config.calculator.advanced = true;
        config.units.weight = WeightUnit::Lbs;
        let settings = config.calculator_settings();
        assert_eq!(settings.mode, AnalysisMode::Advanced);
        assert_eq!(settings.weight_unit, WeightUnit::Lbs);
        assert!(!settings.live_updates);
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("bmi-plus-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[display]\nemoji = false\ngauge_width = 24\nformat = \"json\"").unwrap();
        writeln!(file, "[units]\nweight = \"lbs\"\nlength = \"in\"").unwrap();
        drop(file);

        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!config.display.emoji);
        assert_eq!(config.display.gauge_width, 24);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.units.weight, WeightUnit::Lbs);
        assert_eq!(config.units.length, LengthUnit::In);
        // Sections absent from the file keep their defaults
        assert!(!config.calculator.live_updates);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("bmi-plus-does-not-exist.toml");
        assert!(matches!(AppConfig::load(Some(&path)), Err(CliError::Config(_))));
    }
}

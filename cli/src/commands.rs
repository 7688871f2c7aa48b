//! One-shot `calc` command

use crate::config::{AppConfig, OutputFormat};
use crate::error::CliResult;
use crate::render::{render, RenderedReport};
use bmi_plus_shared::validation::plausibility_warnings;
use bmi_plus_shared::{evaluate, AnalysisMode, Field, Gender, LengthUnit, MeasurementForm, WeightUnit};
use clap::Args;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Body weight
    #[arg(long, short = 'w')]
    pub weight: String,

    /// Body height
    #[arg(long, short = 'H')]
    pub height: String,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// male or female
    #[arg(long, short = 'g', default_value = "male")]
    pub gender: Gender,

    /// Neck circumference
    #[arg(long)]
    pub neck: Option<String>,

    /// Waist circumference
    #[arg(long)]
    pub waist: Option<String>,

    /// Hip circumference
    #[arg(long)]
    pub hip: Option<String>,

    /// Include body fat and circumference ratios
    #[arg(long, short = 'a')]
    pub advanced: bool,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Unit of --weight: kg, lbs or st
    #[arg(long)]
    pub weight_unit: Option<WeightUnit>,

    /// Unit of lengths: cm, m or in
    #[arg(long)]
    pub length_unit: Option<LengthUnit>,

    /// Plain category labels
    #[arg(long)]
    pub no_emoji: bool,
}

impl CalcArgs {
    fn inputs(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Weight, Some(self.weight.as_str())),
            (Field::Height, Some(self.height.as_str())),
            (Field::Age, self.age.as_deref()),
            (Field::Neck, self.neck.as_deref()),
            (Field::Waist, self.waist.as_deref()),
            (Field::Hip, self.hip.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, text)| text.map(|text| (field, text)))
    }
}

/// Evaluate the measurements on the command line and render the report
///
/// Fails only when weight or height is unusable; anything else shows up
/// inside the report.
pub fn run_calc(args: &CalcArgs, config: &AppConfig) -> CliResult<String> {
    let weight_unit = args.weight_unit.unwrap_or(config.units.weight);
    let length_unit = args.length_unit.unwrap_or(config.units.length);
    let mode = AnalysisMode::from_flag(args.advanced || config.calculator.advanced);

    let mut form = MeasurementForm::with_units(weight_unit, length_unit);
    for (field, text) in args.inputs() {
        form.set(field, text);
    }
    let measurements = form.to_measurements(args.gender)?;

    let warnings: Vec<String> = plausibility_warnings(&measurements)
        .into_iter()
        .map(|warning| {
            warn!(field = %warning.field, message = %warning.message, "Implausible measurement");
            warning.user_message()
        })
        .collect();

    let report = evaluate(&measurements, mode);
    info!(
        gender = %args.gender,
        mode = ?mode,
        advanced = report.advanced.is_some(),
        "Calculated metrics"
    );

    let mut display = config.display.clone();
    if let Some(format) = args.format {
        display.format = format;
    }
    if args.no_emoji {
        display.emoji = false;
    }

    render(
        &RenderedReport {
            report: &report,
            warnings,
        },
        &display,
    )
}

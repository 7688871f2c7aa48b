//! Terminal rendering of metrics reports
//!
//! Text output mirrors the calculator card: BMI value and category, a
//! four-band gauge with an indicator, band captions, advice, and the advanced
//! metric cards with their notes. Advanced metrics that could not be computed
//! are left out of the text; JSON keeps their reasons.

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::CliResult;
use bmi_plus_shared::{
    AdvancedMetrics, BmiCategory, CategoryLabel, MetricOutcome, MetricsReport,
};
use serde::Serialize;
use std::fmt::Write;

const BAND_CHARS: [char; 4] = ['░', '▒', '▓', '█'];
const INDICATOR: char = '▲';
const CARD_LABEL_WIDTH: usize = 24;
const CARD_VALUE_WIDTH: usize = 8;

/// Report plus anything the command layer wants to show alongside it
#[derive(Debug, Serialize)]
pub struct RenderedReport<'a> {
    #[serde(flatten)]
    pub report: &'a MetricsReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Render in the configured format
pub fn render(output: &RenderedReport<'_>, display: &DisplayConfig) -> CliResult<String> {
    match display.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Text => {
            let mut text = String::new();
            for warning in &output.warnings {
                let _ = writeln!(text, "Warning: {}", warning);
            }
            text.push_str(&render_text(output.report, display));
            Ok(text)
        }
    }
}

/// Human-readable report
pub fn render_text(report: &MetricsReport, display: &DisplayConfig) -> String {
    let mut out = String::new();

    match &report.bmi {
        MetricOutcome::Computed(bmi) => {
            let _ = writeln!(out, "BMI: {:.1}", bmi.value);
            let _ = writeln!(out, "{}", bmi.category.display_label(display.emoji));
            let _ = writeln!(out);
            out.push_str(&render_gauge(bmi.chart_position(), bmi.value, display.gauge_width));
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", bmi.advice());
        }
        MetricOutcome::Unavailable { message, .. } => {
            let _ = writeln!(out, "BMI: unavailable ({})", message);
        }
    }

    if let Some(advanced) = report.advanced.as_ref().filter(|advanced| advanced.any_computed()) {
        let _ = writeln!(out);
        out.push_str(&render_advanced(advanced, display.emoji));
    }

    out
}

/// Gauge bar, indicator line, band names and range captions
pub fn render_gauge(position: f64, bmi: f64, width: usize) -> String {
    let mut out = String::new();

    let bar: String = (0..width).map(|col| BAND_CHARS[band_of_column(col, width)]).collect();
    let _ = writeln!(out, "{}", bar);

    let column = indicator_column(position, width);
    let _ = writeln!(out, "{}{} {:.1}", " ".repeat(column), INDICATOR, bmi);

    let names: String = BmiCategory::ALL
        .iter()
        .enumerate()
        .map(|(band, category)| format!("{:^w$}", category.band_name(), w = band_width(band, width)))
        .collect();
    let _ = writeln!(out, "{}", names.trim_end());

    let captions: String = BmiCategory::ALL
        .iter()
        .enumerate()
        .map(|(band, category)| format!("{:^w$}", category.range_caption(), w = band_width(band, width)))
        .collect();
    let _ = writeln!(out, "{}", captions.trim_end());

    out
}

/// Column of the gauge indicator for a 0-100 position
pub fn indicator_column(position: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let last = (width - 1) as f64;
    ((position.clamp(0.0, 100.0) / 100.0) * last).round() as usize
}

fn band_of_column(column: usize, width: usize) -> usize {
    (column * BAND_CHARS.len() / width).min(BAND_CHARS.len() - 1)
}

fn band_width(band: usize, width: usize) -> usize {
    let bands = BAND_CHARS.len();
    (band + 1) * width / bands - band * width / bands
}

fn render_advanced(advanced: &AdvancedMetrics, emoji: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", if emoji { "📊 Advanced Metrics" } else { "Advanced Metrics" });

    out.push_str(&card(
        "Body Fat Percentage",
        &advanced.body_fat,
        |bf| format!("{:.1}%", bf.percent),
        |bf| bf.category.display_label(emoji),
    ));
    out.push_str(&card(
        "Waist-to-Hip Ratio",
        &advanced.waist_to_hip,
        |r| format!("{:.2}", r.value),
        |r| r.risk.display_label(emoji),
    ));
    out.push_str(&card(
        "Waist-to-Height Ratio",
        &advanced.waist_to_height,
        |r| format!("{:.2}", r.value),
        |r| r.risk.display_label(emoji),
    ));

    let prefix = if emoji { "ℹ️ Note:" } else { "Note:" };
    for note in &advanced.notes {
        let _ = writeln!(out, "{} {}", prefix, note);
    }
    out
}

/// Card line for a computed metric, empty otherwise
fn card<T>(
    label: &str,
    outcome: &MetricOutcome<T>,
    value: impl Fn(&T) -> String,
    category: impl Fn(&T) -> String,
) -> String {
    match outcome.computed() {
        Some(metric) => format!(
            "  {:<lw$}{:<vw$}{}\n",
            label,
            value(metric),
            category(metric),
            lw = CARD_LABEL_WIDTH,
            vw = CARD_VALUE_WIDTH
        ),
        None => String::new(),
    }
}

/// One-line summary used after live updates
pub fn summary_line(report: &MetricsReport, emoji: bool) -> String {
    match &report.bmi {
        MetricOutcome::Computed(bmi) => {
            format!("BMI: {:.1} ({})", bmi.value, bmi.category.display_label(emoji))
        }
        MetricOutcome::Unavailable { message, .. } => format!("BMI: unavailable ({})", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_plus_shared::{evaluate, AnalysisMode, Gender, Measurements};
    use proptest::prelude::*;
    use rstest::rstest;

    fn plain() -> DisplayConfig {
        DisplayConfig {
            emoji: false,
            gauge_width: 40,
            format: OutputFormat::Text,
        }
    }

    #[rstest]
    #[case(0.0, 40, 0)]
    #[case(100.0, 40, 39)]
    #[case(50.0, 41, 20)]
    #[case(150.0, 40, 39)]
    #[case(-3.0, 40, 0)]
    fn test_indicator_column(#[case] position: f64, #[case] width: usize, #[case] expected: usize) {
        assert_eq!(indicator_column(position, width), expected);
    }

    #[test]
    fn test_gauge_bar_has_four_equal_bands() {
        let gauge = render_gauge(25.0, 18.5, 40);
        let bar = gauge.lines().next().unwrap();
        assert_eq!(bar.chars().count(), 40);
        for (i, ch) in BAND_CHARS.iter().enumerate() {
            assert_eq!(bar.chars().filter(|c| c == ch).count(), 10, "band {}", i);
        }
    }

    #[test]
    fn test_gauge_indicator_line() {
        let gauge = render_gauge(25.0, 18.5, 40);
        let indicator = gauge.lines().nth(1).unwrap();
        // round(0.25 * 39) = 10
        assert_eq!(indicator, format!("{}▲ 18.5", " ".repeat(10)));
    }

    #[test]
    fn test_band_widths_cover_gauge() {
        for width in [8, 13, 40, 48, 61] {
            let total: usize = (0..4).map(|band| band_width(band, width)).sum();
            assert_eq!(total, width);
        }
    }

    #[test]
    fn test_text_report_basic() {
        let m = Measurements::new(70.0, 175.0, Gender::Male);
        let report = evaluate(&m, AnalysisMode::Basic);
        let text = render_text(&report, &plain());

        assert!(text.starts_with("BMI: 22.9\nNormal weight\n"));
        assert!(text.contains("Great! You're in a healthy weight range!"));
        assert!(text.contains("18.5-24.9"));
        assert!(!text.contains("Advanced Metrics"));
    }

    #[test]
    fn test_text_report_with_emoji() {
        let m = Measurements::new(50.0, 180.0, Gender::Male);
        let report = evaluate(&m, AnalysisMode::Basic);
        let display = DisplayConfig {
            emoji: true,
            ..plain()
        };
        let text = render_text(&report, &display);
        assert!(text.contains("Underweight 😟"));
    }

    #[test]
    fn test_text_report_advanced() {
        let m = Measurements::new(60.0, 165.0, Gender::Female).with_circumferences(Some(34.0), Some(70.0), None);
        let report = evaluate(&m, AnalysisMode::Advanced);
        let text = render_text(&report, &plain());

        assert!(text.contains("Advanced Metrics"));
        assert!(!text.contains("Body Fat Percentage"));
        assert!(!text.contains("Waist-to-Hip Ratio"));
        assert!(!text.contains("Hip circumference is required"));
        assert!(text.contains("Waist-to-Height Ratio   0.42"));
        assert!(text.contains("Healthy"));
        assert!(text.contains("Note: Hip measurement required for Waist-to-Hip Ratio."));
    }

    #[test]
    fn test_invalid_body_fat_card_is_hidden() {
        let m = Measurements::new(70.0, 175.0, Gender::Male).with_circumferences(Some(40.0), Some(38.0), Some(95.0));
        let report = evaluate(&m, AnalysisMode::Advanced);
        let text = render_text(&report, &plain());

        assert!(!text.contains("Body Fat Percentage"));
        assert!(!text.contains("Waist must be larger than neck"));
        assert!(text.contains("Waist-to-Hip Ratio      0.40"));
        assert!(text.contains("Waist-to-Height Ratio   0.22"));
    }

    #[test]
    fn test_advanced_section_hidden_without_circumferences() {
        let m = Measurements::new(70.0, 175.0, Gender::Male);
        let report = evaluate(&m, AnalysisMode::Advanced);
        assert!(report.advanced.is_some());

        let text = render_text(&report, &plain());
        assert!(!text.contains("Advanced Metrics"));
        assert!(!text.contains("Note:"));
        assert!(text.trim_end().ends_with("Great! You're in a healthy weight range!"));
    }

    #[test]
    fn test_unavailable_bmi() {
        let m = Measurements::new(0.0, 175.0, Gender::Male);
        let report = evaluate(&m, AnalysisMode::Basic);
        let text = render_text(&report, &plain());
        assert_eq!(text, "BMI: unavailable (Weight must be a positive number)\n");
        assert_eq!(summary_line(&report, false), "BMI: unavailable (Weight must be a positive number)");
    }

    #[test]
    fn test_json_output_includes_warnings() {
        let m = Measurements::new(70.0, 175.0, Gender::Male);
        let report = evaluate(&m, AnalysisMode::Basic);
        let output = RenderedReport {
            report: &report,
            warnings: vec!["Weight: must be at most 500 kg".to_string()],
        };
        let display = DisplayConfig {
            format: OutputFormat::Json,
            ..plain()
        };
        let json: serde_json::Value = serde_json::from_str(&render(&output, &display).unwrap()).unwrap();
        assert_eq!(json["bmi"]["value"], 22.9);
        assert_eq!(json["warnings"][0], "Weight: must be at most 500 kg");
    }

    #[test]
    fn test_text_output_prefixes_warnings() {
        let m = Measurements::new(70.0, 175.0, Gender::Male);
        let report = evaluate(&m, AnalysisMode::Basic);
        let output = RenderedReport {
            report: &report,
            warnings: vec!["Height: must be at most 300 cm".to_string()],
        };
        let text = render(&output, &plain()).unwrap();
        assert!(text.starts_with("Warning: Height: must be at most 300 cm\nBMI: 22.9"));
    }

    proptest! {
        #[test]
        fn indicator_stays_on_gauge(position in -50.0f64..150.0, width in 8usize..200) {
            prop_assert!(indicator_column(position, width) < width);
        }

        #[test]
        fn gauge_lines_fit_width(bmi in 10.0f64..60.0, width in 8usize..120) {
            let gauge = render_gauge(bmi_plus_shared::bmi_chart_position(bmi), bmi, width);
            let bar = gauge.lines().next().unwrap();
            prop_assert_eq!(bar.chars().count(), width);
        }
    }
}

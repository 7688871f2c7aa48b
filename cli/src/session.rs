//! Interactive line-oriented session
//!
//! Every line is one command that maps onto a calculator event, so the
//! terminal behaves like the form: type values, flip the mode, calculate,
//! reset. Reports follow `display.format`; prompts and errors are plain text.

use crate::config::{AppConfig, DisplayConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::render::{render, summary_line, RenderedReport};
use bmi_plus_shared::validation::plausibility_warnings;
use bmi_plus_shared::{AnalysisMode, Calculator, CalculatorEvent, Field, Gender};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const HELP: &str = "\
Commands:
  weight <value>           set weight
  height <value>           set height
  age <value>              set age
  neck|waist|hip <value>   set a circumference (no value clears it)
  gender male|female       select gender
  advanced [on|off]        toggle advanced analysis
  basic                    switch to BMI only
  calc                     calculate
  show                     show the last result
  reset                    clear inputs, gender and results
  help                     show this help
  quit                     leave the session";

/// One parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Event(CalculatorEvent),
    Show,
    Help,
    Quit,
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_command(line: &str) -> CliResult<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "calc" | "calculate" => SessionCommand::Event(CalculatorEvent::Calculate),
        "reset" => SessionCommand::Event(CalculatorEvent::Reset),
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "gender" => {
            let gender = rest.parse::<Gender>().map_err(CliError::InvalidValue)?;
            SessionCommand::Event(CalculatorEvent::SelectGender(gender))
        }
        "advanced" => {
            let on = match rest.to_lowercase().as_str() {
                "" | "on" | "yes" | "true" => true,
                "off" | "no" | "false" => false,
                other => {
                    return Err(CliError::InvalidValue(format!("advanced expects on or off (got {})", other)))
                }
            };
            SessionCommand::Event(CalculatorEvent::SetMode(AnalysisMode::from_flag(on)))
        }
        "basic" => SessionCommand::Event(CalculatorEvent::SetMode(AnalysisMode::Basic)),
        other => match other.parse::<Field>() {
            Ok(field) => SessionCommand::Event(CalculatorEvent::Input {
                field,
                text: rest.to_string(),
            }),
            Err(_) => return Err(CliError::UnknownCommand(other.to_string())),
        },
    };
    Ok(Some(command))
}

/// Last report in the configured format, with plausibility warnings
fn render_current(calculator: &Calculator, display: &DisplayConfig) -> CliResult<Option<String>> {
    let Some(report) = calculator.report() else {
        return Ok(None);
    };
    let warnings: Vec<String> = calculator
        .form()
        .to_measurements(calculator.gender())
        .map(|measurements| {
            plausibility_warnings(&measurements)
                .iter()
                .map(|warning| warning.user_message())
                .collect()
        })
        .unwrap_or_default();
    let mut text = render(&RenderedReport { report, warnings }, display)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(Some(text))
}

/// Run a session until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, config: &AppConfig) -> CliResult<()> {
    let settings = config.calculator_settings();
    let mut calculator = Calculator::new(settings);
    let emoji = config.display.emoji;

    info!(mode = ?settings.mode, live = settings.live_updates, "Starting interactive session");
    writeln!(output, "BMI+ interactive session. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(%err, line = %line, "Rejected session line");
                writeln!(output, "error: {}", err)?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(output, "{}", HELP)?,
            SessionCommand::Show => match render_current(&calculator, &config.display)? {
                Some(text) => write!(output, "{}", text)?,
                None => writeln!(output, "No result yet. Enter weight and height, then 'calc'.")?,
            },
            SessionCommand::Event(event) => {
                let is_input = matches!(event, CalculatorEvent::Input { .. });
                let is_calculate = event == CalculatorEvent::Calculate;
                let is_reset = event == CalculatorEvent::Reset;

                match calculator.apply(event) {
                    Ok(()) if is_calculate => {
                        if let Some(text) = render_current(&calculator, &config.display)? {
                            write!(output, "{}", text)?;
                        }
                    }
                    Ok(()) if is_reset => writeln!(output, "Cleared.")?,
                    Ok(()) if is_input && settings.live_updates => match config.display.format {
                        OutputFormat::Text => {
                            if let Some(report) = calculator.report() {
                                writeln!(output, "{}", summary_line(report, emoji))?;
                            }
                        }
                        OutputFormat::Json => {
                            if let Some(text) = render_current(&calculator, &config.display)? {
                                write!(output, "{}", text)?;
                            }
                        }
                    },
                    Ok(()) => {}
                    Err(reason) => writeln!(output, "{}", CliError::Incomplete(reason))?,
                }
            }
        }
    }

    output.flush()?;
    Ok(())
}

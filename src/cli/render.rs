//! Rendering conversion results for the different run modes

use std::io::Write;

use anyhow::Result;

use crate::converter::ConversionResult;
use crate::utils::write_steps;

/// How successful conversions are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// One-shot rendering: the output, then the trace when present.
pub fn write_result(out: &mut dyn Write, result: &ConversionResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", result.output)?;
            if let Some(steps) = &result.steps {
                write_steps(out, "Conversion steps:", steps)?;
            }
        }
    }
    Ok(())
}

/// Single-line rendering for stream and batch modes.
///
/// Text form is the bare output, or `{input} -> {output}` when `echo_input`
/// is set. JSON form is one compact object per line.
pub fn write_line(
    out: &mut dyn Write,
    result: &ConversionResult,
    format: OutputFormat,
    echo_input: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
        OutputFormat::Text if echo_input => writeln!(out, "{} -> {}", result.input, result.output)?,
        OutputFormat::Text => writeln!(out, "{}", result.output)?,
    }
    Ok(())
}

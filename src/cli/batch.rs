//! Line-oriented conversion of batch files and piped stdin
//!
//! Every non-blank line is one numeral. A line that fails to convert is
//! reported on the error stream and processing moves on to the next line.
//! Bytes that are not valid UTF-8 decode to U+FFFD, which no base accepts,
//! so such a line fails on its own instead of ending the run.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use rayon::prelude::*;

use super::render::{write_line, OutputFormat};
use crate::converter::{ConversionOptions, Converter};
use crate::utils::create_progress_bar;

/// Counts of converted and rejected lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Lines of `reader`, decoded lossily. Only read failures are errors.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    })
}

impl BatchSummary {
    fn record(&mut self, ok: bool) {
        if ok {
            self.converted += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Convert every line of `path`, writing `{line} -> {output}` per success.
///
/// Lines are converted in parallel and reported in file order. Failing to
/// read the file is an error; failing to convert a line is not.
pub fn process_batch(
    path: &Path,
    converter: &Converter,
    options: &ConversionOptions,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<BatchSummary> {
    let contents = fs::read(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    let decoded = lossy_lines(contents.as_slice())
        .collect::<io::Result<Vec<String>>>()
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    let lines: Vec<&str> = decoded
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let pb = create_progress_bar(lines.len() as u64, "Converting");
    let results: Vec<_> = lines
        .par_iter()
        .map(|line| {
            let result = converter.convert(line, options);
            pb.inc(1);
            (*line, result)
        })
        .collect();
    pb.finish_and_clear();

    let mut summary = BatchSummary::default();
    for (line, result) in results {
        match result {
            Ok(converted) => {
                write_line(out, &converted, format, true)?;
                summary.record(true);
            }
            Err(e) => {
                writeln!(
                    err,
                    "{}",
                    style(format!("Error: {} -> {}", line, e)).for_stderr().red()
                )?;
                summary.record(false);
            }
        }
    }
    Ok(summary)
}

/// Convert lines from `reader` as they arrive, writing the bare output per success.
pub fn process_stream<R: BufRead>(
    reader: R,
    converter: &Converter,
    options: &ConversionOptions,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for line in lossy_lines(reader) {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match converter.convert(trimmed, options) {
            Ok(result) => {
                write_line(out, &result, format, false)?;
                summary.record(true);
            }
            Err(e) => {
                writeln!(
                    err,
                    "{}",
                    style(format!("Error converting '{}': {}", trimmed, e))
                        .for_stderr()
                        .red()
                )?;
                summary.record(false);
            }
        }
    }
    Ok(summary)
}

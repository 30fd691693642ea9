//! Terminal styling for results, traces, and diagnostics
//!
//! Colors come from `console::style`, which drops escape codes when the
//! stream is not a terminal. Anything written to stderr must be styled
//! with `for_stderr()` so it follows stderr's terminal state, not stdout's.

use std::io::{self, Write};

use console::style;

/// Print an error diagnostic to stderr.
pub fn print_error(message: &str) {
    eprintln!("{}", style(format!("Error: {}", message)).for_stderr().red());
}

/// Write a dimmed step listing under a header.
pub fn write_steps(out: &mut dyn Write, header: &str, steps: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(header).dim())?;
    for step in steps {
        writeln!(out, "{}", style(format!("  {}", step)).dim())?;
    }
    Ok(())
}

/// Write a confirmation notice (green).
pub fn write_success(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", style(message).green())
}

/// Write a failure notice (red) to an output stream rather than stderr.
pub fn write_failure(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", style(message).red())
}

/// Write the interactive session banner.
pub fn write_banner(out: &mut dyn Write, from_base: i64, to_base: i64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Base Converter REPL").bold())?;
    writeln!(
        out,
        "{}",
        style(format!("Converting from base {} to base {}", from_base, to_base)).dim()
    )?;
    writeln!(
        out,
        "{}",
        style("Commands: :from <base>, :to <base>, :steps, :upper, :help, :quit").dim()
    )?;
    writeln!(out)
}

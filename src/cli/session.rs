//! Interactive REPL session
//!
//! [`Session`] holds the mutable settings (bases and display toggles) and
//! interprets one input line at a time. It writes to any [`Write`], so the
//! same handler serves the terminal prompt, piped stdin, and tests.
//!
//! Lines starting with `:` are commands; everything else is a numeral to
//! convert with the current settings. Conversion errors are reported and
//! the session keeps going.

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use console::style;
use dialoguer::theme::Theme;
use dialoguer::Input;

use super::batch::lossy_lines;
use crate::converter::{ConversionOptions, Converter};
use crate::utils::{write_banner, write_failure, write_steps, write_success};

const PROMPT: &str = "base-convert";

/// Renders the input prompt as `base-convert> `.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplTheme;

impl Theme for ReplTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}> ", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{}> {}", prompt, sel)
    }
}

/// Settings a session starts with and may change along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub from_base: i64,
    pub to_base: i64,
    pub show_steps: bool,
    pub uppercase: bool,
}

impl SessionConfig {
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::new(self.from_base, self.to_base)
            .with_steps(self.show_steps)
            .with_uppercase(self.uppercase)
    }
}

impl From<ConversionOptions> for SessionConfig {
    fn from(options: ConversionOptions) -> Self {
        Self {
            from_base: options.from_base,
            to_base: options.to_base,
            show_steps: options.show_steps,
            uppercase: options.uppercase,
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    config: SessionConfig,
    converter: Converter,
}

impl Session {
    pub fn new(config: SessionConfig, converter: Converter) -> Self {
        Self { config, converter }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Interpret one line of input.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Flow::Continue);
        }
        if input.starts_with(':') {
            self.handle_command(input, out)
        } else {
            self.handle_conversion(input, out)?;
            Ok(Flow::Continue)
        }
    }

    fn handle_command(&mut self, cmd: &str, out: &mut dyn Write) -> Result<Flow> {
        let mut parts = cmd.split_whitespace();
        let command = parts.next().unwrap_or(cmd);
        let arg = parts.next();

        match command {
            ":from" => {
                if let Some(base) = parse_base(arg, out)? {
                    self.config.from_base = base;
                    write_success(out, &format!("Source base set to {}", self.config.from_base))?;
                }
            }
            ":to" => {
                if let Some(base) = parse_base(arg, out)? {
                    self.config.to_base = base;
                    write_success(out, &format!("Target base set to {}", self.config.to_base))?;
                }
            }
            ":steps" => {
                self.config.show_steps = !self.config.show_steps;
                write_success(out, &format!("Steps {}", toggle_word(self.config.show_steps)))?;
            }
            ":upper" => {
                self.config.uppercase = !self.config.uppercase;
                write_success(out, &format!("Uppercase {}", toggle_word(self.config.uppercase)))?;
            }
            ":help" => write_help(out)?,
            ":quit" | ":exit" => return Ok(Flow::Quit),
            other => write_failure(out, &format!("Unknown command: {}", other))?,
        }
        Ok(Flow::Continue)
    }

    fn handle_conversion(&self, input: &str, out: &mut dyn Write) -> Result<()> {
        match self.converter.convert(input, &self.config.options()) {
            Ok(result) => {
                write_success(out, &result.output)?;
                if let Some(steps) = &result.steps {
                    write_steps(out, "Steps:", steps)?;
                }
            }
            Err(e) => write_failure(out, &format!("Error: {}", e))?,
        }
        Ok(())
    }
}

/// Parse a base argument. A missing argument is ignored; a non-numeric one
/// is reported on `out`. Either way the previous base stays in effect.
///
/// Out-of-range integers are accepted here and rejected by the next
/// conversion, like any other base.
fn parse_base(arg: Option<&str>, out: &mut dyn Write) -> Result<Option<i64>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    match arg.parse::<i64>() {
        Ok(base) => Ok(Some(base)),
        Err(_) => {
            write_failure(out, &format!("Invalid base: {}", arg))?;
            Ok(None)
        }
    }
}

fn toggle_word(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

fn write_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Available commands:").bold())?;
    writeln!(out, "  :from <base>  - Set source base")?;
    writeln!(out, "  :to <base>    - Set target base")?;
    writeln!(out, "  :steps        - Toggle step display")?;
    writeln!(out, "  :upper        - Toggle uppercase output")?;
    writeln!(out, "  :help         - Show this help")?;
    writeln!(out, "  :quit         - Exit REPL")?;
    writeln!(out)
}

fn write_goodbye(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Goodbye!").yellow())
}

/// Drive a session from buffered lines until `:quit` or end of input.
pub fn run_lines<R: BufRead>(session: &mut Session, reader: R, out: &mut dyn Write) -> Result<()> {
    for line in lossy_lines(reader) {
        if session.handle_line(&line?, out)? == Flow::Quit {
            break;
        }
    }
    write_goodbye(out)?;
    Ok(())
}

/// Run the REPL on the process's stdin and stdout.
///
/// A terminal gets a dialoguer prompt; piped input is read line by line
/// without prompting.
pub fn run_session(mut session: Session) -> Result<()> {
    let mut stdout = io::stdout();
    let config = *session.config();
    write_banner(&mut stdout, config.from_base, config.to_base)?;

    if !io::stdin().is_terminal() {
        return run_lines(&mut session, io::stdin().lock(), &mut stdout);
    }

    loop {
        let line = match Input::<String>::with_theme(&ReplTheme)
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Ctrl-D / Ctrl-C or a closed terminal ends the session.
            Err(_) => break,
        };
        if session.handle_line(&line, &mut stdout)? == Flow::Quit {
            break;
        }
        stdout.flush()?;
    }
    write_goodbye(&mut stdout)?;
    Ok(())
}

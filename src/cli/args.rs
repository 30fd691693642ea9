//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::converter::ConversionOptions;

/// base-convert - Convert numbers between arbitrary bases (2-62)
#[derive(Parser, Debug)]
#[command(name = "base-convert")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number to convert. Omit to read numbers from piped stdin, one per line.
    pub number: Option<String>,

    /// Source base (2-62, or up to the length of --digits)
    #[arg(short, long = "from", default_value = "10", allow_negative_numbers = true)]
    pub from: i64,

    /// Target base (2-62, or up to the length of --digits)
    #[arg(short, long = "to", default_value = "10", allow_negative_numbers = true)]
    pub to: i64,

    /// Custom digit set. Index in the string is the digit value.
    #[arg(short, long)]
    pub digits: Option<String>,

    /// Show conversion steps
    #[arg(short, long, default_value = "false")]
    pub steps: bool,

    /// Output uppercase letters
    #[arg(short, long, default_value = "false")]
    pub uppercase: bool,

    /// Batch convert from file, one number per line
    #[arg(short, long)]
    pub batch: Option<PathBuf>,

    /// Start interactive REPL mode
    #[arg(short, long, default_value = "false")]
    pub interactive: bool,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

/// What the binary should do for a given set of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch(PathBuf),
    Single(String),
    /// No number given: read stdin when piped, otherwise show help
    Stdin,
}

impl Cli {
    /// Conversion options built from the flags.
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::new(self.from, self.to)
            .with_steps(self.steps)
            .with_uppercase(self.uppercase)
    }

    /// Select the run mode. `--interactive` wins over `--batch`, which wins
    /// over a positional number.
    pub fn mode(&self) -> Mode {
        if self.interactive {
            Mode::Interactive
        } else if let Some(path) = &self.batch {
            Mode::Batch(path.clone())
        } else if let Some(number) = &self.number {
            Mode::Single(number.clone())
        } else {
            Mode::Stdin
        }
    }
}

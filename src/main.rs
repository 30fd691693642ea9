//! base-convert: Arbitrary-Base Conversion CLI Tool
//!
//! Converts a single number, a batch file, piped stdin, or runs an
//! interactive session, depending on the flags given.

use std::io::{self, IsTerminal};
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use base_convert::cli::{
    process_batch, process_stream, run_session, write_result, Cli, Mode, OutputFormat, Session,
};
use base_convert::converter::Converter;
use base_convert::utils::print_error;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_error(&format!("{:#}", err));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let converter = Converter::from_optional_digits(cli.digits.as_deref())?;
    let options = cli.options();
    let format = OutputFormat::from_json_flag(cli.json);

    match cli.mode() {
        Mode::Interactive => run_session(Session::new(options.into(), converter)),
        Mode::Batch(path) => {
            process_batch(
                &path,
                &converter,
                &options,
                format,
                &mut io::stdout(),
                &mut io::stderr(),
            )?;
            Ok(())
        }
        Mode::Single(number) => {
            let result = converter.convert(&number, &options)?;
            write_result(&mut io::stdout(), &result, format)
        }
        Mode::Stdin => {
            if io::stdin().is_terminal() {
                Cli::command().print_help()?;
                return Ok(());
            }
            process_stream(
                io::stdin().lock(),
                &converter,
                &options,
                format,
                &mut io::stdout(),
                &mut io::stderr(),
            )?;
            Ok(())
        }
    }
}

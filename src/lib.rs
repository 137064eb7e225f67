//! Friday finder library crate
//!
//! This crate provides the core functionality for the `friday-finder` CLI. It
//! is organized into small modules: `fridays` (year validation and the Friday
//! iterator), `report` (prompting and printing), `error` (the shared error
//! type), `logging` (opt-in diagnostics) and `clipboard` (cross-platform
//! clipboard helper). The binary `src/main.rs` calls `friday_finder_lib::run()`
//! to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `execute()` — one full session against arbitrary reader/writer.
//! - `fridays::find_fridays()` — the pure computation.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod error;
pub mod fridays;
pub mod logging;
pub mod report;

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use tracing::{debug, info};

use crate::clipboard::copy_to_clipboard;
use crate::error::FridayError;
use crate::fridays::{FridayFinder, parse_year};
use crate::report::{read_year, render_fridays, write_report};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Year to list (1-9999). Prompts on stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    year: Option<String>,

    /// Copy the list of dates to the clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Run one Friday-finder session.
///
/// With `year` set the prompt is skipped; otherwise the banner and prompt are
/// written to `output` and the answer is read from `input`. The report goes to
/// `output` and the printed dates are returned.
///
/// # Errors
/// Invalid year input, or any I/O failure on `input`/`output`.
pub fn execute<R: BufRead, W: Write>(
    year: Option<&str>,
    input: R,
    output: &mut W,
) -> Result<Vec<NaiveDate>, FridayError> {
    let year = match year {
        Some(text) => parse_year(text)?,
        None => read_year(input, output)?,
    };

    let finder = FridayFinder::new(year)?;
    debug!(year, first = %finder.first(), "searching for fridays");

    let dates: Vec<NaiveDate> = finder.fridays().collect();
    let written = write_report(output, year, dates.iter().copied())?;
    info!(year, count = written, "fridays listed");
    Ok(dates)
}

/// Run the Friday finder CLI.
///
/// This function is the high-level entrypoint used by the `friday-finder`
/// binary. It parses CLI arguments and dispatches to module functions. Errors
/// are printed to stderr and cause the process to exit with a non-zero code.
///
/// Example:
///
/// ```no_run
/// friday_finder_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let dates = execute(cli.year.as_deref(), stdin.lock(), &mut stdout).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if cli.clipboard && let Err(e) = copy_to_clipboard(&render_fridays(dates)) {
        eprintln!("warning: failed to copy to clipboard: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_year_and_flags() {
        let cli = Cli::try_parse_from(["friday-finder", "2023", "--clipboard", "-vv"]).unwrap();
        assert_eq!(cli.year.as_deref(), Some("2023"));
        assert!(cli.clipboard);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_year_is_optional() {
        let cli = Cli::try_parse_from(["friday-finder"]).unwrap();
        assert!(cli.year.is_none());
        assert!(!cli.clipboard);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_passes_negative_year_through() {
        let cli = Cli::try_parse_from(["friday-finder", "-5"]).unwrap();
        assert_eq!(cli.year.as_deref(), Some("-5"));
    }

    #[test]
    fn execute_with_argument_skips_prompt() {
        let mut out = Vec::new();
        let dates = execute(Some("2024"), std::io::empty(), &mut out).unwrap();
        assert_eq!(dates[0].to_string(), "2024-01-05");
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nThe Fridays in 2024 are:\n2024-01-05\n"));
        assert!(!text.contains("Enter a year"));
    }
}

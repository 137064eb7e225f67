//! Prompting and printing for the CLI.
//!
//! Functions here take generic readers and writers so the session can be
//! driven from tests with in-memory buffers instead of a terminal.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::FridayError;
use crate::fridays::parse_year;

pub const BANNER: &str = "Welcome to the Friday finder";
pub const PROMPT: &str = "Enter a year: ";

/// Greet the user, prompt for a year and read one line from `input`.
///
/// End of input is reported the same way as an empty answer.
///
/// # Errors
/// Returns the parse error from [`parse_year`], or [`FridayError::Io`] if the
/// terminal cannot be read or written.
pub fn read_year<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<i32, FridayError> {
    writeln!(output, "{}", BANNER)?;
    writeln!(output)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_year(&line)
}

/// Write the header for `year` followed by one date per line.
///
/// Returns how many dates were written.
pub fn write_report<W, I>(output: &mut W, year: i32, fridays: I) -> Result<usize, FridayError>
where
    W: Write,
    I: IntoIterator<Item = NaiveDate>,
{
    writeln!(output)?;
    writeln!(output, "The Fridays in {} are:", year)?;
    let mut written = 0;
    for date in fridays {
        writeln!(output, "{}", date)?;
        written += 1;
    }
    output.flush()?;
    Ok(written)
}

/// Dates as newline-separated `YYYY-MM-DD` text, without the header.
pub fn render_fridays<I: IntoIterator<Item = NaiveDate>>(fridays: I) -> String {
    fridays
        .into_iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fridays::find_fridays;

    #[test]
    fn test_read_year_prompts() {
        let mut out = Vec::new();
        let year = read_year("2023\n".as_bytes(), &mut out).unwrap();
        assert_eq!(year, 2023);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Welcome to the Friday finder\n\nEnter a year: ");
    }

    #[test]
    fn test_read_year_rejects_text() {
        let mut out = Vec::new();
        let err = read_year("abc\n".as_bytes(), &mut out).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_read_year_eof() {
        let mut out = Vec::new();
        let err = read_year("".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(err, FridayError::NotAnInteger { ref input } if input.is_empty()));
    }

    #[test]
    fn test_write_report_layout() {
        let mut out = Vec::new();
        let n = write_report(&mut out, 2023, find_fridays(2023).unwrap()).unwrap();
        assert_eq!(n, 52);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "The Fridays in 2023 are:");
        assert_eq!(lines[2], "2023-01-06");
        assert_eq!(lines.last(), Some(&"2023-12-29"));
        assert_eq!(lines.len(), 54);
    }

    #[test]
    fn test_render_fridays() {
        let text = render_fridays(find_fridays(2024).unwrap().take(2));
        assert_eq!(text, "2024-01-05\n2024-01-12");
    }
}

//! Error type shared by the finder and the CLI glue.

use crate::fridays::{MAX_YEAR, MIN_YEAR};

/// Everything that can go wrong while finding and printing Fridays.
///
/// `NotAnInteger` and `YearOutOfRange` are the invalid-input cases; the
/// computation itself cannot fail once it has a valid year.
#[derive(Debug, thiserror::Error)]
pub enum FridayError {
    /// The year text could not be parsed as an integer.
    #[error("invalid year {input:?}: not an integer")]
    NotAnInteger {
        /// The offending input, trimmed.
        input: String,
    },

    /// The year parsed but falls outside the supported calendar range.
    #[error("invalid year {year}: must be between {} and {}", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
    },

    /// Reading the prompt answer or writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl FridayError {
    /// True for errors caused by the user's year input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FridayError::NotAnInteger { .. } | FridayError::YearOutOfRange { .. }
        )
    }
}

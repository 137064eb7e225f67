//! Friday enumeration for a single Gregorian year.
//!
//! This module exposes `find_fridays`, which validates a year and returns a
//! lazy `Fridays` iterator over every Friday in it, and `parse_year` for turning
//! user text into a validated year. Nothing in here prints or logs; the CLI
//! layer in `report` owns all I/O.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::FridayError;

/// Smallest year accepted (proleptic Gregorian, no year zero).
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted; keeps the default date format at four digits.
pub const MAX_YEAR: i32 = 9999;

const WEEK: Days = Days::new(7);

/// A validated year together with its first Friday.
///
/// The finder is cheap to copy and every call to [`FridayFinder::fridays`]
/// starts over from January, so the sequence can be replayed freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FridayFinder {
    year: i32,
    first: NaiveDate,
}

impl FridayFinder {
    /// Validate `year` and locate its first Friday.
    ///
    /// # Errors
    /// Returns [`FridayError::YearOutOfRange`] when `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32) -> Result<Self, FridayError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(FridayError::YearOutOfRange { year: year.into() });
        }
        let first = NaiveDate::from_weekday_of_month_opt(year, 1, Weekday::Fri, 1)
            .ok_or(FridayError::YearOutOfRange { year: year.into() })?;
        Ok(Self { year, first })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The first Friday of the year; always falls on January 1st to 7th.
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// Number of Fridays in the year (52 or 53).
    pub fn count(&self) -> usize {
        self.fridays().len()
    }

    /// A fresh iterator over the year's Fridays in ascending order.
    pub fn fridays(&self) -> Fridays {
        Fridays {
            year: self.year,
            next: Some(self.first),
        }
    }
}

/// Iterator over the Fridays of one year, 7 days apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fridays {
    year: i32,
    next: Option<NaiveDate>,
}

impl Fridays {
    fn remaining(&self) -> usize {
        let Some(next) = self.next else {
            return 0;
        };
        match NaiveDate::from_ymd_opt(self.year, 12, 31) {
            Some(last_day) => {
                let days = (last_day - next).num_days().max(0);
                usize::try_from(days / 7).map_or(0, |weeks| weeks + 1)
            }
            None => 0,
        }
    }
}

impl Iterator for Fridays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current
            .checked_add_days(WEEK)
            .filter(|d| d.year() == self.year);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Fridays {}

impl FusedIterator for Fridays {}

/// Return every Friday of `year`, lazily and in ascending order.
///
/// # Errors
/// Returns [`FridayError::YearOutOfRange`] for years outside
/// `MIN_YEAR..=MAX_YEAR`.
///
/// ```
/// let fridays: Vec<_> = friday_finder_lib::fridays::find_fridays(2023)
///     .unwrap()
///     .collect();
/// assert_eq!(fridays.len(), 52);
/// assert_eq!(fridays[0].to_string(), "2023-01-06");
/// ```
pub fn find_fridays(year: i32) -> Result<Fridays, FridayError> {
    FridayFinder::new(year).map(|finder| finder.fridays())
}

/// Parse user text into a validated year.
///
/// Surrounding whitespace is ignored. Text that is not an integer gives
/// [`FridayError::NotAnInteger`]; an integer outside the supported range gives
/// [`FridayError::YearOutOfRange`], even when it would overflow `i32`.
pub fn parse_year(input: &str) -> Result<i32, FridayError> {
    let trimmed = input.trim();
    let wide: i64 = trimmed.parse().map_err(|_| FridayError::NotAnInteger {
        input: trimmed.to_string(),
    })?;
    match i32::try_from(wide) {
        Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
        _ => Err(FridayError::YearOutOfRange { year: wide }),
    }
}

//! Expiry date selection.
//!
//! The entry form picks the expiry from two drop-downs: a two-digit month
//! (`01`-`12`) and a two-digit year covering the current year and the nine
//! after it. This module produces those option lists and turns a selection
//! into an [`ExpiryDate`].
//!
//! # Example
//!
//! ```
//! use card_entry::expiry::{month_options, year_options, ExpiryDate};
//!
//! assert_eq!(month_options()[0], "01");
//! assert_eq!(year_options(2026), ["26", "27", "28", "29", "30", "31", "32", "33", "34", "35"]);
//!
//! let expiry = ExpiryDate::from_selection("03", "29").unwrap();
//! assert_eq!(expiry.year(), 2029);
//! assert_eq!(expiry.format_short(), "03/29");
//! ```

use chrono::Datelike;
use std::fmt;

/// Number of years offered in the year drop-down.
pub const YEAR_OPTION_COUNT: usize = 10;

/// A selected expiry month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpiryDate {
    /// Four-digit year (e.g., 2025)
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12).
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Builds a date from the two drop-down values (`"MM"`, `"YY"`).
    ///
    /// Two-digit years are taken to be in the 2000s.
    pub fn from_selection(month: &str, year: &str) -> Result<Self, ExpiryError> {
        let month = parse_month(month)?;
        let yy = parse_two_digit_year(year)?;
        Ok(Self {
            year: 2000 + u16::from(yy),
            month,
        })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card expired before the given month.
    ///
    /// A card is valid through the end of its expiry month.
    pub fn is_expired_at(&self, year: u16, month: u8) -> bool {
        (self.year, self.month) < (year, month)
    }

    /// Returns true if the card has expired, by the local clock.
    pub fn is_expired(&self) -> bool {
        let today = chrono::Local::now().date_naive();
        self.is_expired_at(clamp_year(today.year()), today.month() as u8)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_short())
    }
}

/// Errors turning a drop-down selection into a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// No month was selected.
    MissingMonth,
    /// No year was selected.
    MissingYear,
    /// The month is not one of `01`-`12`.
    InvalidMonth,
    /// The year is not two digits.
    InvalidYear,
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMonth => write!(f, "Month is required"),
            Self::MissingYear => write!(f, "Year is required"),
            Self::InvalidMonth => write!(f, "Month must be between 01 and 12"),
            Self::InvalidYear => write!(f, "Year must be two digits"),
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Parses a month drop-down value.
///
/// Exactly two digits are expected, as offered by [`month_options`].
pub fn parse_month(input: &str) -> Result<u8, ExpiryError> {
    if input.is_empty() {
        return Err(ExpiryError::MissingMonth);
    }
    let month = parse_two_digits(input).ok_or(ExpiryError::InvalidMonth)?;
    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth);
    }
    Ok(month)
}

/// Parses a year drop-down value (`"YY"`).
pub fn parse_two_digit_year(input: &str) -> Result<u8, ExpiryError> {
    if input.is_empty() {
        return Err(ExpiryError::MissingYear);
    }
    parse_two_digits(input).ok_or(ExpiryError::InvalidYear)
}

fn parse_two_digits(input: &str) -> Option<u8> {
    match input.as_bytes() {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}

/// The twelve month values, zero-padded: `"01"` through `"12"`.
pub fn month_options() -> Vec<String> {
    (1..=12).map(|m| format!("{:02}", m)).collect()
}

/// Two-digit years starting at `current_year`, [`YEAR_OPTION_COUNT`] of them.
///
/// Wraps at the century: `year_options(2095)` ends with `"04"`.
pub fn year_options(current_year: u16) -> Vec<String> {
    (0..YEAR_OPTION_COUNT as u32)
        .map(|offset| format!("{:02}", (u32::from(current_year) + offset) % 100))
        .collect()
}

/// The current year by the local clock.
pub fn current_year() -> u16 {
    clamp_year(chrono::Local::now().year())
}

fn clamp_year(year: i32) -> u16 {
    year.clamp(0, i32::from(u16::MAX)) as u16
}

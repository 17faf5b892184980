//! CVV validation for the entry form.
//!
//! The form accepts a 3 or 4 character code made only of digits, whatever
//! the card brand. Checks run in a fixed order and the first failure is
//! reported:
//!
//! 1. at least 3 characters
//! 2. at most 4 characters
//! 3. digits only
//!
//! # Example
//!
//! ```
//! use card_entry::cvv::{validate_cvv, CvvError};
//!
//! assert!(validate_cvv("123").is_ok());
//! assert!(validate_cvv("1234").is_ok());
//! assert_eq!(validate_cvv("12").unwrap_err(), CvvError::TooShort { length: 2 });
//! assert_eq!(validate_cvv("12a").unwrap_err(), CvvError::NonDigit);
//! ```

use crate::form::input_len;
use std::fmt;
use zeroize::Zeroize;

/// Fewest characters a CVV may have.
pub const MIN_CVV_LEN: usize = 3;

/// Most characters a CVV may have (the input's `maxLength`).
pub const MAX_CVV_LEN: usize = 4;

/// A validated CVV code.
#[derive(Clone)]
pub struct ValidatedCvv {
    /// The CVV digits.
    digits: [u8; MAX_CVV_LEN],
    /// Number of digits (3 or 4).
    length: u8,
}

impl ValidatedCvv {
    /// Returns the CVV as a string.
    pub fn as_str(&self) -> String {
        self.digits[..self.length as usize]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }

    /// Returns true if this is a 4-digit CVV.
    #[inline]
    pub const fn is_four_digit(&self) -> bool {
        self.length == 4
    }
}

impl fmt::Debug for ValidatedCvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCvv")
            .field("value", &"***")
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for ValidatedCvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.length as usize))
    }
}

impl Drop for ValidatedCvv {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Reasons a CVV is rejected.
///
/// The `Display` text is the message shown under the CVV field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CvvError {
    /// Fewer than 3 characters.
    TooShort {
        /// Characters provided.
        length: usize,
    },
    /// More than 4 characters.
    TooLong {
        /// Characters provided.
        length: usize,
    },
    /// Something other than an ASCII digit was entered.
    NonDigit,
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { .. } => write!(f, "CVV must be at least {} digits", MIN_CVV_LEN),
            Self::TooLong { .. } => write!(f, "CVV must be at most {} digits", MAX_CVV_LEN),
            Self::NonDigit => write!(f, "CVV must contain only digits"),
        }
    }
}

impl std::error::Error for CvvError {}

/// Validates a CVV string.
///
/// Length is counted in UTF-16 code units, as the input's `maxLength` does,
/// and before any digit check, so `"ab"` is reported as too short rather
/// than as containing non-digits.
pub fn validate_cvv(input: &str) -> Result<ValidatedCvv, CvvError> {
    let length = input_len(input);

    if length < MIN_CVV_LEN {
        return Err(CvvError::TooShort { length });
    }
    if length > MAX_CVV_LEN {
        return Err(CvvError::TooLong { length });
    }

    let mut digits = [0u8; MAX_CVV_LEN];
    for (slot, c) in digits.iter_mut().zip(input.chars()) {
        if !c.is_ascii_digit() {
            return Err(CvvError::NonDigit);
        }
        *slot = (c as u8) - b'0';
    }

    Ok(ValidatedCvv {
        digits,
        length: length as u8,
    })
}

/// Checks if a string is a valid CVV.
#[inline]
pub fn is_valid_cvv(input: &str) -> bool {
    validate_cvv(input).is_ok()
}

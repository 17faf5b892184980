//! Form validation errors.
//!
//! Each field reports at most one [`FieldError`], the first rule it fails.
//! The `Display` text of a `FieldError` is the message shown under the
//! field; [`FormErrors`] collects the errors of a whole submission attempt.

use crate::cvv::CvvError;
use crate::expiry::ExpiryError;
use std::fmt;

/// The inputs of the card entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FormField {
    /// The card number input.
    CardNumber,
    /// The cardholder name input.
    CardholderName,
    /// The expiry month drop-down.
    ExpiryMonth,
    /// The expiry year drop-down.
    ExpiryYear,
    /// The CVV input.
    Cvv,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 5] = [
        Self::CardNumber,
        Self::CardholderName,
        Self::ExpiryMonth,
        Self::ExpiryYear,
        Self::Cvv,
    ];

    /// The field's label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::CardholderName => "Cardholder Name",
            Self::ExpiryMonth => "Month",
            Self::ExpiryYear => "Year",
            Self::Cvv => "CVV",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The formatted card number is shorter than a complete one.
    CardNumberIncomplete {
        /// Characters entered.
        length: usize,
    },

    /// The card number, whitespace removed, is not exactly 16 digits.
    CardNumberLength,

    /// The cardholder name is shorter than 3 characters.
    CardholderNameRequired,

    /// Invalid expiry month or year selection.
    Expiry(ExpiryError),

    /// Invalid CVV.
    Cvv(CvvError),
}

impl FieldError {
    /// The field this error belongs to.
    pub const fn field(&self) -> FormField {
        match self {
            Self::CardNumberIncomplete { .. } | Self::CardNumberLength => FormField::CardNumber,
            Self::CardholderNameRequired => FormField::CardholderName,
            Self::Expiry(ExpiryError::MissingMonth | ExpiryError::InvalidMonth) => {
                FormField::ExpiryMonth
            }
            Self::Expiry(ExpiryError::MissingYear | ExpiryError::InvalidYear) => {
                FormField::ExpiryYear
            }
            Self::Cvv(_) => FormField::Cvv,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardNumberIncomplete { .. } => write!(f, "Card number must be complete"),
            Self::CardNumberLength => write!(f, "Card number must be 16 digits"),
            Self::CardholderNameRequired => write!(f, "Cardholder name is required"),
            Self::Expiry(e) => write!(f, "{}", e),
            Self::Cvv(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expiry(e) => Some(e),
            Self::Cvv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CvvError> for FieldError {
    fn from(e: CvvError) -> Self {
        Self::Cvv(e)
    }
}

impl From<ExpiryError> for FieldError {
    fn from(e: ExpiryError) -> Self {
        Self::Expiry(e)
    }
}

/// All field errors from one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error. A field keeps its first error; later ones are ignored.
    pub fn push(&mut self, error: FieldError) {
        if self.get(error.field()).is_none() {
            self.errors.push(error);
        }
    }

    /// Returns the error for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub(crate) fn sort(&mut self) {
        self.errors.sort_by_key(FieldError::field);
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl<'a> IntoIterator for &'a FormErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

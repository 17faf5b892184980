//! One-shot classification of raw card number input.
//!
//! [`CardNumberClassifier`] bundles normalization, formatting and brand
//! detection so the presentation layer can recompute everything it shows
//! from the latest keystrokes with a single call.
//!
//! # Example
//!
//! ```
//! use card_entry::{CardBrand, CardNumberClassifier, ClassifierConfig};
//!
//! let classifier = CardNumberClassifier::default();
//! let result = classifier.classify("5500-0000-0000-0004");
//! assert_eq!(result.formatted(), "5500 0000 0000 0004");
//! assert_eq!(result.brand(), CardBrand::Mastercard);
//! assert!(result.is_complete());
//!
//! let capped = CardNumberClassifier::new(ClassifierConfig::new().max_digits(4).separator("-"));
//! assert_eq!(capped.classify("41111111").formatted(), "4111");
//! ```

use crate::card::CARD_NUMBER_DIGITS;
use crate::detect::classify_brand;
use crate::format::{format_with_separator, strip_formatting};
use crate::CardBrand;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Settings for a [`CardNumberClassifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    separator: String,
    max_digits: Option<usize>,
}

impl ClassifierConfig {
    /// Space-separated groups, no digit cap.
    pub fn new() -> Self {
        Self {
            separator: " ".to_string(),
            max_digits: None,
        }
    }

    /// Sets the string placed between digit groups.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Keeps only the first `max_digits` digits of the input.
    pub fn max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Removes the digit cap.
    pub fn unlimited(mut self) -> Self {
        self.max_digits = None;
        self
    }

    /// The configuration the card entry form uses: spaces, 16 digits.
    pub fn entry_form() -> Self {
        Self::new().max_digits(CARD_NUMBER_DIGITS)
    }

    /// Returns the group separator.
    pub fn get_separator(&self) -> &str {
        &self.separator
    }

    /// Returns the digit cap, if any.
    pub fn get_max_digits(&self) -> Option<usize> {
        self.max_digits
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns raw keystrokes into a formatted number and a brand.
///
/// Stateless apart from its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct CardNumberClassifier {
    config: ClassifierConfig,
}

impl CardNumberClassifier {
    /// Creates a classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies raw input.
    pub fn classify(&self, raw: &str) -> Classification {
        let mut digits = strip_formatting(raw);
        if let Some(max) = self.config.max_digits {
            // Digits are ASCII, so byte truncation is on a char boundary
            digits.truncate(max);
        }

        let formatted = format_with_separator(&digits, &self.config.separator);
        let brand = classify_brand(&digits);

        Classification {
            digits,
            formatted,
            brand,
        }
    }
}

/// The result of classifying one input.
///
/// The digit strings are wiped from memory when the value is dropped, and
/// `Debug` shows the masked number only.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Classification {
    digits: String,
    formatted: String,
    #[zeroize(skip)]
    brand: CardBrand,
}

impl Classification {
    /// The normalized digits.
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Never log it; use `masked()` instead.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The digits grouped for display.
    #[inline]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The detected brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Number of digits after normalization.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// True once the input holds exactly as many digits as the form requires.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.digits.len() == CARD_NUMBER_DIGITS
    }

    /// Returns the number with all but the last four digits masked.
    pub fn masked(&self) -> String {
        crate::mask::mask_string(&self.digits)
    }
}

impl fmt::Debug for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classification")
            .field("number", &self.masked())
            .field("brand", &self.brand)
            .field("digit_count", &self.digit_count())
            .finish()
    }
}

/// Classifies raw input with the default configuration.
///
/// # Example
///
/// ```
/// use card_entry::{classify, CardBrand};
///
/// let result = classify("3714 4963 5398 431");
/// assert_eq!(result.brand(), CardBrand::Amex);
/// assert_eq!(result.digit_count(), 15);
/// ```
pub fn classify(raw: &str) -> Classification {
    CardNumberClassifier::default().classify(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_visa() {
        let result = classify("4111111111111111");
        assert_eq!(result.digits(), "4111111111111111");
        assert_eq!(result.formatted(), "4111 1111 1111 1111");
        assert_eq!(result.brand(), CardBrand::Visa);
        assert!(result.is_complete());
    }

    #[test]
    fn test_classify_empty() {
        let result = classify("");
        assert_eq!(result.formatted(), "");
        assert_eq!(result.brand(), CardBrand::Unknown);
        assert_eq!(result.digit_count(), 0);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_classify_partial_input_updates_brand() {
        // Brand appears as soon as the prefix is long enough
        assert_eq!(classify("2").brand(), CardBrand::Unknown);
        assert_eq!(classify("222").brand(), CardBrand::Unknown);
        assert_eq!(classify("2221").brand(), CardBrand::Mastercard);
    }

    #[test]
    fn test_entry_form_config_caps_digits() {
        let classifier = CardNumberClassifier::new(ClassifierConfig::entry_form());
        let result = classifier.classify("4111 1111 1111 1111 2222");
        assert_eq!(result.formatted(), "4111 1111 1111 1111");
        assert_eq!(result.digit_count(), 16);
    }

    #[test]
    fn test_custom_separator() {
        let classifier = CardNumberClassifier::new(ClassifierConfig::new().separator("-"));
        assert_eq!(
            classifier.classify("6011000000000000").formatted(),
            "6011-0000-0000-0000"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ClassifierConfig::new().max_digits(8).unlimited();
        assert_eq!(config.get_max_digits(), None);
        assert_eq!(config.get_separator(), " ");
        assert_eq!(config, ClassifierConfig::default());
    }

    #[test]
    fn test_debug_is_masked() {
        let result = classify("4111111111111111");
        let debug = format!("{:?}", result);
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("4111 1111"));
        assert!(debug.contains("****"));
    }

    #[test]
    fn test_masked() {
        assert_eq!(classify("4111111111111111").masked(), "****-****-****-1111");
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNumberClassifier>();
        assert_send_sync::<Classification>();
    }
}

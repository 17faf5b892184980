//! Card brand detection using prefix rules.
//!
//! Brands are identified from the leading digits of the card number. The
//! rules live in [`BRAND_RULES`], an ordered decision list: the first brand
//! with a matching prefix wins, and nothing matching means
//! [`CardBrand::Unknown`].
//!
//! | Order | Brand | Prefixes |
//! |-------|-------|----------|
//! | 1 | Visa | 4 |
//! | 2 | Mastercard | 51-55, 2221-2720 |
//! | 3 | American Express | 34, 37 |
//! | 4 | Discover | 6011, 65, 644-649, 622126-622925 |
//!
//! # Performance
//!
//! Detection looks at no more than the first 6 characters of the input.

use crate::format::strip_formatting;
use crate::CardBrand;
use std::fmt;

/// A single test against the leading characters of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// The number starts with this exact digit string.
    Literal(&'static str),
    /// The first `len` characters, read as a decimal integer, fall in
    /// `low..=high`.
    Range {
        /// Number of leading characters to read.
        len: usize,
        /// Inclusive lower bound.
        low: u32,
        /// Inclusive upper bound.
        high: u32,
    },
}

impl PrefixRule {
    /// Returns true if `digits` satisfies this rule.
    ///
    /// Inputs shorter than the rule's prefix, or whose prefix is not all
    /// digits, never match.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        match *self {
            Self::Literal(prefix) => digits.starts_with(prefix),
            Self::Range { len, low, high } => leading_value(digits, len)
                .is_some_and(|value| (low..=high).contains(&value)),
        }
    }
}

impl fmt::Display for PrefixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(prefix) => write!(f, "{}", prefix),
            Self::Range { low, high, .. } => write!(f, "{}-{}", low, high),
        }
    }
}

/// Reads the first `len` bytes of `digits` as a decimal number.
///
/// Returns `None` if the input is too short or the prefix has a non-digit.
#[inline]
fn leading_value(digits: &str, len: usize) -> Option<u32> {
    let prefix = digits.as_bytes().get(..len)?;
    prefix.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit()
            .then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// The prefixes that identify one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// The brand reported when any prefix matches.
    pub brand: CardBrand,
    /// Prefixes tried in order.
    pub prefixes: &'static [PrefixRule],
}

impl BrandRule {
    /// Returns the first prefix of this rule that `digits` satisfies.
    #[inline]
    pub fn matching_prefix(&self, digits: &str) -> Option<&'static PrefixRule> {
        self.prefixes.iter().find(|prefix| prefix.matches(digits))
    }
}

/// The decision list. Order matters: first match wins.
pub const BRAND_RULES: &[BrandRule] = &[
    BrandRule {
        brand: CardBrand::Visa,
        prefixes: &[PrefixRule::Literal("4")],
    },
    BrandRule {
        brand: CardBrand::Mastercard,
        prefixes: &[
            PrefixRule::Range {
                len: 2,
                low: 51,
                high: 55,
            },
            PrefixRule::Range {
                len: 4,
                low: 2221,
                high: 2720,
            },
        ],
    },
    BrandRule {
        brand: CardBrand::Amex,
        prefixes: &[PrefixRule::Literal("34"), PrefixRule::Literal("37")],
    },
    BrandRule {
        brand: CardBrand::Discover,
        prefixes: &[
            PrefixRule::Literal("6011"),
            PrefixRule::Literal("65"),
            PrefixRule::Range {
                len: 3,
                low: 644,
                high: 649,
            },
            PrefixRule::Range {
                len: 6,
                low: 622126,
                high: 622925,
            },
        ],
    },
];

/// Finds the rule, and the prefix within it, that classifies `digits`.
///
/// # Example
///
/// ```
/// use card_entry::detect::{matching_rule, PrefixRule};
/// use card_entry::CardBrand;
///
/// let (rule, prefix) = matching_rule("2720991234567890").unwrap();
/// assert_eq!(rule.brand, CardBrand::Mastercard);
/// assert_eq!(prefix.to_string(), "2221-2720");
///
/// assert!(matching_rule("9999").is_none());
/// ```
pub fn matching_rule(digits: &str) -> Option<(&'static BrandRule, &'static PrefixRule)> {
    BRAND_RULES
        .iter()
        .find_map(|rule| rule.matching_prefix(digits).map(|prefix| (rule, prefix)))
}

/// Classifies a digit-only card number.
///
/// The input is expected to be digits already; other characters never cause
/// a panic, they just make range rules fail to match.
///
/// # Example
///
/// ```
/// use card_entry::detect::classify_brand;
/// use card_entry::CardBrand;
///
/// assert_eq!(classify_brand("4111111111111111"), CardBrand::Visa);
/// assert_eq!(classify_brand("371449635398431"), CardBrand::Amex);
/// assert_eq!(classify_brand(""), CardBrand::Unknown);
/// ```
#[inline]
pub fn classify_brand(digits: &str) -> CardBrand {
    matching_rule(digits).map_or(CardBrand::Unknown, |(rule, _)| rule.brand)
}

/// Strips non-digit characters, then classifies.
///
/// # Example
///
/// ```
/// use card_entry::detect::detect_brand;
/// use card_entry::CardBrand;
///
/// assert_eq!(detect_brand("6011 0000 0000 0000"), CardBrand::Discover);
/// assert_eq!(detect_brand("5-5-0-0"), CardBrand::Mastercard);
/// ```
#[inline]
pub fn detect_brand(raw: &str) -> CardBrand {
    classify_brand(&strip_formatting(raw))
}

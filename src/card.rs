//! Core card types.
//!
//! This module provides the `CardBrand` enum the entry form shows as the
//! brand icon, plus the size constants the input field works with.

use std::fmt;
use std::str::FromStr;

/// Card networks the entry form recognizes.
///
/// The set is closed: anything the prefix rules don't claim is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 622126-622925, 644-649, 65
    Discover,
    /// No rule matched.
    Unknown,
}

impl CardBrand {
    /// Every brand, in the order the detection rules are evaluated.
    pub const ALL: [CardBrand; 5] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Unknown,
    ];

    /// Returns the lowercase identifier used by the presentation layer.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Unknown => "unknown",
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every brand except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a brand name can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError {
    input: String,
}

impl ParseBrandError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown card brand '{}' (expected visa, mastercard, amex, discover or unknown)",
            self.input.escape_default()
        )
    }
}

impl std::error::Error for ParseBrandError {}

impl FromStr for CardBrand {
    type Err = ParseBrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "american express" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBrandError {
                input: s.to_string(),
            }),
        }
    }
}

/// Number of digits a complete card number has in the entry form.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Digits per display group.
pub const GROUP_SIZE: usize = 4;

/// Length of a complete, space-grouped card number (`4111 1111 1111 1111`).
pub const FORMATTED_CARD_NUMBER_LEN: usize =
    CARD_NUMBER_DIGITS + (CARD_NUMBER_DIGITS - 1) / GROUP_SIZE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_brand_names() {
        assert_eq!(CardBrand::Visa.name(), "Visa");
        assert_eq!(CardBrand::Amex.name(), "American Express");
        assert_eq!(CardBrand::Mastercard.to_string(), "Mastercard");
        assert_eq!(CardBrand::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_card_brand_as_str() {
        let names: Vec<&str> = CardBrand::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(names, ["visa", "mastercard", "amex", "discover", "unknown"]);
    }

    #[test]
    fn test_parse_brand() {
        assert_eq!("visa".parse::<CardBrand>(), Ok(CardBrand::Visa));
        assert_eq!("MC".parse::<CardBrand>(), Ok(CardBrand::Mastercard));
        assert_eq!(
            " American Express ".parse::<CardBrand>(),
            Ok(CardBrand::Amex)
        );
        assert_eq!("Discover".parse::<CardBrand>(), Ok(CardBrand::Discover));

        let err = "jcb".parse::<CardBrand>().unwrap_err();
        assert_eq!(err.input(), "jcb");
        assert!(err.to_string().contains("jcb"));
    }

    #[test]
    fn test_round_trip_through_as_str() {
        for brand in CardBrand::ALL {
            assert_eq!(brand.as_str().parse::<CardBrand>(), Ok(brand));
        }
    }

    #[test]
    fn test_is_known() {
        assert!(CardBrand::Visa.is_known());
        assert!(!CardBrand::Unknown.is_known());
    }

    #[test]
    fn test_formatted_len() {
        assert_eq!(FORMATTED_CARD_NUMBER_LEN, 19);
    }

    #[test]
    fn test_card_brand_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardBrand>();
        assert_send_sync::<ParseBrandError>();
    }
}

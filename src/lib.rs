//! # card_entry
//!
//! The logic behind a credit card entry form: live number formatting, brand
//! detection, a card preview and client-side validation.
//!
//! ## Features
//!
//! - Normalization and 4-digit grouping of raw keystrokes
//! - Brand detection (Visa, Mastercard, American Express, Discover)
//! - Form validation with per-field messages
//! - Card preview text with placeholders and front/back flip
//! - Simulated submission (`submit` feature)
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_entry::{classify_brand, normalize_and_format, CardBrand};
//!
//! // Format whatever the user typed
//! assert_eq!(normalize_and_format("4111-1111-1111-1111"), "4111 1111 1111 1111");
//! assert_eq!(normalize_and_format("41111"), "4111 1");
//!
//! // Detect the brand from the digits
//! assert_eq!(classify_brand("4111111111111111"), CardBrand::Visa);
//! assert_eq!(classify_brand("371449635398431").as_str(), "amex");
//! assert_eq!(classify_brand(""), CardBrand::Unknown);
//! ```
//!
//! ## Classification
//!
//! ```rust
//! use card_entry::{classify, CardBrand};
//!
//! let result = classify("6011 0000 0000 0000");
//! assert_eq!(result.brand(), CardBrand::Discover);
//! assert_eq!(result.formatted(), "6011 0000 0000 0000");
//!
//! // Safe for logging - never exposes full card number
//! println!("{:?}", result);
//! ```
//!
//! ## Form Validation
//!
//! ```rust
//! use card_entry::{FormField, PaymentForm};
//!
//! let mut form = PaymentForm::new();
//! form.set_card_number("5500 0000 0000 0004");
//! form.set_cardholder_name("Al");
//!
//! let errors = form.validate().unwrap_err();
//! assert!(errors.get(FormField::CardNumber).is_none());
//! assert_eq!(
//!     errors.get(FormField::CardholderName).unwrap().to_string(),
//!     "Cardholder name is required"
//! );
//! ```
//!
//! ## Card Preview
//!
//! ```rust
//! use card_entry::{CardFace, CardPreview, FormField, PaymentForm};
//!
//! let mut form = PaymentForm::new();
//! let preview = CardPreview::from_form(&form);
//! assert_eq!(preview.number(), "•••• •••• •••• ••••");
//! assert_eq!(preview.holder(), "YOUR NAME");
//!
//! // Focusing the CVV flips the card
//! form.focus(FormField::Cvv);
//! assert_eq!(CardPreview::from_form(&form).face(), CardFace::Back);
//! ```
//!
//! ## Detection Rules
//!
//! Rules are evaluated in order; the first match wins.
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55, 2221-2720 |
//! | American Express | 34, 37 |
//! | Discover | 6011, 65, 644-649, 622126-622925 |
//!
//! No Luhn check is performed.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | `serde::Serialize` for public value types |
//! | `submit` | Simulated submission on the tokio timer |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - Form state, classifications and previews are zeroized on drop
//! - `Debug` output masks card numbers and CVVs
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod classifier;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod mask;
pub mod preview;
#[cfg(feature = "submit")]
pub mod submit;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardBrand, ParseBrandError, CARD_NUMBER_DIGITS, FORMATTED_CARD_NUMBER_LEN};
pub use classifier::{classify, CardNumberClassifier, Classification, ClassifierConfig};
pub use detect::{classify_brand, detect_brand};
pub use error::{FieldError, FormErrors, FormField};
pub use form::{PaymentForm, ValidatedPayment};
pub use format::{normalize_and_format, strip_formatting};
pub use preview::{CardFace, CardPreview};

#[cfg(test)]
mod tests {
    use super::*;

    // Reference numbers for each brand
    const VISA: &str = "4111111111111111";
    const MASTERCARD: &str = "5500000000000000";
    const AMEX: &str = "371449635398431";
    const DISCOVER: &str = "6011000000000000";
    const UNKNOWN: &str = "1234567890123456";

    #[test]
    fn test_reference_classification() {
        assert_eq!(classify_brand(VISA), CardBrand::Visa);
        assert_eq!(classify_brand(MASTERCARD), CardBrand::Mastercard);
        assert_eq!(classify_brand(AMEX), CardBrand::Amex);
        assert_eq!(classify_brand(DISCOVER), CardBrand::Discover);
        assert_eq!(classify_brand(UNKNOWN), CardBrand::Unknown);
        assert_eq!(classify_brand(""), CardBrand::Unknown);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(classify_brand(VISA).as_str(), "visa");
        assert_eq!(classify_brand(MASTERCARD).as_str(), "mastercard");
        assert_eq!(classify_brand(AMEX).as_str(), "amex");
        assert_eq!(classify_brand(DISCOVER).as_str(), "discover");
        assert_eq!(classify_brand(UNKNOWN).as_str(), "unknown");
    }

    #[test]
    fn test_formatted_input() {
        assert_eq!(normalize_and_format("4111-1111-1111-1111"), "4111 1111 1111 1111");
        assert_eq!(normalize_and_format("4111 1111 1111 1111"), "4111 1111 1111 1111");
        assert_eq!(detect_brand("4111-1111 1111-1111"), CardBrand::Visa);
    }

    #[test]
    fn test_classify_matches_free_functions() {
        for raw in [VISA, MASTERCARD, AMEX, DISCOVER, UNKNOWN, "", "5-5"] {
            let result = classify(raw);
            assert_eq!(result.formatted(), normalize_and_format(raw));
            assert_eq!(result.brand(), detect_brand(raw));
        }
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardBrand>();
        assert_send_sync::<Classification>();
        assert_send_sync::<PaymentForm>();
        assert_send_sync::<CardPreview>();
        assert_send_sync::<FormErrors>();
    }
}

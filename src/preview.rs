//! Live card preview.
//!
//! The preview is the picture of a card next to the form: number, holder
//! name and expiry on the front, CVV on the back, brand icon on both. Empty
//! fields show placeholders. This module computes the text of each face; how
//! it is drawn is up to the presentation layer.

use crate::form::PaymentForm;
use crate::mask::{mask_string, redact};
use crate::CardBrand;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shown on the front until a card number is entered.
pub const NUMBER_PLACEHOLDER: &str = "•••• •••• •••• ••••";

/// Shown until a cardholder name is entered.
pub const NAME_PLACEHOLDER: &str = "YOUR NAME";

/// Shown until both month and year are selected.
pub const EXPIRY_PLACEHOLDER: &str = "MM/YY";

/// Shown on the back until a CVV is entered.
pub const CVV_PLACEHOLDER: &str = "•••";

/// Which side of the card faces the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardFace {
    /// Number, name, expiry.
    #[default]
    Front,
    /// CVV strip.
    Back,
}

impl CardFace {
    /// The face for a flip state.
    #[inline]
    pub const fn from_flipped(flipped: bool) -> Self {
        if flipped {
            Self::Back
        } else {
            Self::Front
        }
    }
}

/// The text content of the card preview.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CardPreview {
    number: String,
    holder: String,
    expiry: String,
    cvv: String,
    #[zeroize(skip)]
    brand: CardBrand,
    #[zeroize(skip)]
    face: CardFace,
}

impl CardPreview {
    /// Builds the preview for the current state of a form.
    pub fn from_form(form: &PaymentForm) -> Self {
        let number = or_placeholder(form.card_number(), NUMBER_PLACEHOLDER);

        let holder = if form.cardholder_name().is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            form.cardholder_name().to_uppercase()
        };

        let expiry = if form.expiry_month().is_empty() || form.expiry_year().is_empty() {
            EXPIRY_PLACEHOLDER.to_string()
        } else {
            format!("{}/{}", form.expiry_month(), form.expiry_year())
        };

        let cvv = or_placeholder(form.cvv(), CVV_PLACEHOLDER);

        Self {
            number,
            holder,
            expiry,
            cvv,
            brand: form.brand(),
            face: CardFace::from_flipped(form.is_flipped()),
        }
    }

    /// The number line on the front.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The holder line, upper-cased.
    #[inline]
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// The expiry line (`MM/YY`).
    #[inline]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// The CVV strip on the back.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The brand whose icon is shown.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// The visible face.
    #[inline]
    pub const fn face(&self) -> CardFace {
        self.face
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Debug for CardPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = if self.number == NUMBER_PLACEHOLDER {
            self.number.clone()
        } else {
            mask_string(&self.number)
        };
        let cvv = if self.cvv == CVV_PLACEHOLDER {
            self.cvv.clone()
        } else {
            redact(&self.cvv)
        };

        f.debug_struct("CardPreview")
            .field("number", &number)
            .field("holder", &self.holder)
            .field("expiry", &self.expiry)
            .field("cvv", &cvv)
            .field("brand", &self.brand)
            .field("face", &self.face)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormField;

    #[test]
    fn test_empty_form_shows_placeholders() {
        let preview = CardPreview::from_form(&PaymentForm::new());
        assert_eq!(preview.number(), NUMBER_PLACEHOLDER);
        assert_eq!(preview.holder(), NAME_PLACEHOLDER);
        assert_eq!(preview.expiry(), EXPIRY_PLACEHOLDER);
        assert_eq!(preview.cvv(), CVV_PLACEHOLDER);
        assert_eq!(preview.brand(), CardBrand::Unknown);
        assert_eq!(preview.face(), CardFace::Front);
    }

    #[test]
    fn test_filled_form() {
        let mut form = PaymentForm::new();
        form.set_card_number("37144963");
        form.set_cardholder_name("Jane Doe");
        form.set_expiry_month("04");
        form.set_expiry_year("29");
        form.set_cvv("1234");

        let preview = CardPreview::from_form(&form);
        assert_eq!(preview.number(), "3714 4963");
        assert_eq!(preview.holder(), "JANE DOE");
        assert_eq!(preview.expiry(), "04/29");
        assert_eq!(preview.cvv(), "1234");
        assert_eq!(preview.brand(), CardBrand::Amex);
    }

    #[test]
    fn test_expiry_needs_both_parts() {
        let mut form = PaymentForm::new();
        form.set_expiry_month("04");
        assert_eq!(CardPreview::from_form(&form).expiry(), EXPIRY_PLACEHOLDER);
    }

    #[test]
    fn test_cvv_focus_shows_back() {
        let mut form = PaymentForm::new();
        form.focus(FormField::Cvv);
        assert_eq!(CardPreview::from_form(&form).face(), CardFace::Back);
        form.blur();
        assert_eq!(CardPreview::from_form(&form).face(), CardFace::Front);
    }

    #[test]
    fn test_debug_is_masked() {
        let mut form = PaymentForm::new();
        form.set_card_number("4111111111111111");
        form.set_cvv("987");

        let debug = format!("{:?}", CardPreview::from_form(&form));
        assert!(!debug.contains("4111 1111 1111 1111"));
        assert!(!debug.contains("987"));
        assert!(debug.contains("1111"));
    }
}

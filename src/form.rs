//! The card entry form.
//!
//! [`PaymentForm`] holds what the user has typed, shapes it the way the
//! inputs do (the card number is re-formatted on every change, the CVV is
//! capped at four characters) and validates it on submit.
//!
//! # Example
//!
//! ```
//! use card_entry::{CardBrand, FormField, PaymentForm};
//!
//! let mut form = PaymentForm::new();
//! form.set_card_number("4111111111111111");
//! form.set_cardholder_name("Jane Doe");
//! form.set_expiry_month("09");
//! form.set_expiry_year("30");
//! form.set_cvv("123");
//!
//! assert_eq!(form.card_number(), "4111 1111 1111 1111");
//! assert_eq!(form.brand(), CardBrand::Visa);
//!
//! let payment = form.validate().unwrap();
//! assert_eq!(payment.last_four(), "1111");
//!
//! form.set_cvv("");
//! let errors = form.validate().unwrap_err();
//! assert_eq!(
//!     errors.get(FormField::Cvv).unwrap().to_string(),
//!     "CVV must be at least 3 digits"
//! );
//! ```

use crate::card::{CARD_NUMBER_DIGITS, FORMATTED_CARD_NUMBER_LEN};
use crate::cvv::{validate_cvv, MAX_CVV_LEN};
use crate::detect::classify_brand;
use crate::error::{FieldError, FormErrors, FormField};
use crate::expiry::{parse_month, parse_two_digit_year, ExpiryDate};
use crate::format::format_capped;
use crate::mask::{last_four, mask_string, redact};
use crate::CardBrand;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Fewest characters accepted as a cardholder name.
pub const MIN_CARDHOLDER_NAME_LEN: usize = 3;

/// Length of a field value as a browser input measures it, in UTF-16 code
/// units. `maxLength` and the form's minimum lengths both count this way.
#[inline]
pub(crate) fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// The state of the card entry form.
///
/// Every field is wiped from memory on drop and on [`reset`](Self::reset).
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct PaymentForm {
    card_number: String,
    cardholder_name: String,
    expiry_month: String,
    expiry_year: String,
    cvv: String,
    #[zeroize(skip)]
    focused: Option<FormField>,
}

impl PaymentForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The formatted card number, as displayed in the input.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The cardholder name, as typed.
    #[inline]
    pub fn cardholder_name(&self) -> &str {
        &self.cardholder_name
    }

    /// The selected expiry month (`"01"`-`"12"`, or empty).
    #[inline]
    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    /// The selected two-digit expiry year, or empty.
    #[inline]
    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    /// The CVV, as typed.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Replaces the card number with the formatted form of `raw`.
    ///
    /// Non-digits are dropped and at most 16 digits are kept.
    pub fn set_card_number(&mut self, raw: &str) {
        let formatted = format_capped(raw, CARD_NUMBER_DIGITS);
        replace(&mut self.card_number, formatted);
    }

    /// Replaces the cardholder name.
    pub fn set_cardholder_name(&mut self, name: &str) {
        replace(&mut self.cardholder_name, name.to_string());
    }

    /// Replaces the expiry month selection.
    pub fn set_expiry_month(&mut self, month: &str) {
        replace(&mut self.expiry_month, month.to_string());
    }

    /// Replaces the expiry year selection.
    pub fn set_expiry_year(&mut self, year: &str) {
        replace(&mut self.expiry_year, year.to_string());
    }

    /// Replaces the CVV, keeping at most four UTF-16 code units.
    pub fn set_cvv(&mut self, raw: &str) {
        let mut units = 0;
        let cvv = raw
            .chars()
            .take_while(|c| {
                units += c.len_utf16();
                units <= MAX_CVV_LEN
            })
            .collect();
        replace(&mut self.cvv, cvv);
    }

    /// Sets a field by name. Card number and CVV are shaped like their setters.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::CardNumber => self.set_card_number(value),
            FormField::CardholderName => self.set_cardholder_name(value),
            FormField::ExpiryMonth => self.set_expiry_month(value),
            FormField::ExpiryYear => self.set_expiry_year(value),
            FormField::Cvv => self.set_cvv(value),
        }
    }

    /// The brand detected from the current card number.
    pub fn brand(&self) -> CardBrand {
        let digits: Zeroizing<String> = Zeroizing::new(
            self.card_number
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect(),
        );
        classify_brand(&digits)
    }

    /// Marks `field` as focused.
    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    /// Clears focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The focused field, if any.
    #[inline]
    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    /// True while the CVV input has focus; the card preview shows its back.
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.focused == Some(FormField::Cvv)
    }

    /// Clears every field and the focus.
    pub fn reset(&mut self) {
        self.zeroize();
        self.focused = None;
    }

    /// Validates every field.
    ///
    /// On failure the returned [`FormErrors`] holds the first failing rule of
    /// each invalid field.
    pub fn validate(&self) -> Result<ValidatedPayment, FormErrors> {
        let mut errors = FormErrors::new();

        if let Err(e) = check_card_number(&self.card_number) {
            errors.push(e);
        }

        if input_len(&self.cardholder_name) < MIN_CARDHOLDER_NAME_LEN {
            errors.push(FieldError::CardholderNameRequired);
        }

        // Month and year are reported independently
        if let Err(e) = parse_month(&self.expiry_month) {
            errors.push(e.into());
        }
        if let Err(e) = parse_two_digit_year(&self.expiry_year) {
            errors.push(e.into());
        }

        let cvv_length = match validate_cvv(&self.cvv) {
            Ok(cvv) => cvv.length(),
            Err(e) => {
                errors.push(e.into());
                0
            }
        };

        if !errors.is_empty() {
            errors.sort();
            return Err(errors);
        }

        let expiry = ExpiryDate::from_selection(&self.expiry_month, &self.expiry_year)
            .map_err(|e| single(e.into()))?;

        Ok(ValidatedPayment {
            brand: self.brand(),
            last_four: last_four(&self.card_number),
            masked_number: mask_string(&self.card_number),
            cardholder_name: self.cardholder_name.clone(),
            expiry,
            cvv_length,
        })
    }

    /// Validates a single field, returning its first failing rule.
    pub fn validate_field(&self, field: FormField) -> Option<FieldError> {
        match self.validate() {
            Ok(_) => None,
            Err(errors) => errors.get(field).cloned(),
        }
    }
}

fn single(error: FieldError) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.push(error);
    errors
}

/// Overwrites a sensitive string, wiping the old contents first.
fn replace(slot: &mut String, value: String) {
    slot.zeroize();
    *slot = value;
}

fn check_card_number(card_number: &str) -> Result<(), FieldError> {
    let length = card_number.chars().count();
    if length < FORMATTED_CARD_NUMBER_LEN {
        return Err(FieldError::CardNumberIncomplete { length });
    }

    let digits: Zeroizing<String> =
        Zeroizing::new(card_number.chars().filter(|c| !c.is_whitespace()).collect());
    if digits.len() != CARD_NUMBER_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::CardNumberLength);
    }

    Ok(())
}

impl fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the number or CVV
        f.debug_struct("PaymentForm")
            .field("card_number", &mask_string(&self.card_number))
            .field("cardholder_name", &self.cardholder_name)
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvv", &redact(&self.cvv))
            .field("focused", &self.focused)
            .finish()
    }
}

/// A form that passed validation.
///
/// Carries only what is safe to show or log: no full card number and no CVV.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidatedPayment {
    brand: CardBrand,
    last_four: String,
    masked_number: String,
    cardholder_name: String,
    expiry: ExpiryDate,
    cvv_length: usize,
}

impl ValidatedPayment {
    /// The detected brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// The last four digits of the card number.
    #[inline]
    pub fn last_four(&self) -> &str {
        &self.last_four
    }

    /// The masked card number (`****-****-****-1111`).
    #[inline]
    pub fn masked_number(&self) -> &str {
        &self.masked_number
    }

    /// The cardholder name.
    #[inline]
    pub fn cardholder_name(&self) -> &str {
        &self.cardholder_name
    }

    /// The selected expiry.
    #[inline]
    pub const fn expiry(&self) -> ExpiryDate {
        self.expiry
    }

    /// Number of CVV digits entered.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        self.cvv_length
    }
}

impl fmt::Display for ValidatedPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} exp {}",
            self.brand, self.masked_number, self.expiry
        )
    }
}

//! WebAssembly bindings for the card entry form.
//!
//! This module provides JavaScript-friendly bindings for the card_entry library.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { normalize_and_format, classify_brand, validate_form } from 'card_entry';
//!
//! await init();
//!
//! // Re-format the input on every change
//! input.value = normalize_and_format(input.value);
//! icon.dataset.brand = classify_brand(input.value.replace(/\s/g, ""));
//!
//! // Validate on submit
//! const result = validate_form(number, name, month, year, cvv);
//! if (!result.valid) {
//!     console.log(result.card_number_error);
//! }
//! ```

#![cfg(feature = "wasm")]

use crate::{FormField, PaymentForm};
use wasm_bindgen::prelude::*;

/// Result of form validation, returned to JavaScript.
#[wasm_bindgen]
pub struct FormResult {
    valid: bool,
    brand: String,
    card_number_error: Option<String>,
    cardholder_name_error: Option<String>,
    expiry_month_error: Option<String>,
    expiry_year_error: Option<String>,
    cvv_error: Option<String>,
}

#[wasm_bindgen]
impl FormResult {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.brand.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn card_number_error(&self) -> Option<String> {
        self.card_number_error.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cardholder_name_error(&self) -> Option<String> {
        self.cardholder_name_error.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn expiry_month_error(&self) -> Option<String> {
        self.expiry_month_error.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn expiry_year_error(&self) -> Option<String> {
        self.expiry_year_error.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cvv_error(&self) -> Option<String> {
        self.cvv_error.clone()
    }
}

/// Strips non-digits and groups the rest in fours.
///
/// # Example
/// ```javascript
/// normalize_and_format("4111-1111-1")  // "4111 1111 1"
/// ```
#[wasm_bindgen]
pub fn normalize_and_format(raw: &str) -> String {
    crate::format::normalize_and_format(raw)
}

/// Like `normalize_and_format`, keeping at most `max_digits` digits.
#[wasm_bindgen]
pub fn format_capped(raw: &str, max_digits: usize) -> String {
    crate::format::format_capped(raw, max_digits)
}

/// Classifies a digit-only card number.
///
/// Returns one of "visa", "mastercard", "amex", "discover", "unknown".
#[wasm_bindgen]
pub fn classify_brand(digits: &str) -> String {
    crate::classify_brand(digits).as_str().to_string()
}

/// Classifies raw input, ignoring non-digits.
#[wasm_bindgen]
pub fn detect_brand(raw: &str) -> String {
    crate::detect_brand(raw).as_str().to_string()
}

/// Validates a CVV, returning the error message or `undefined`.
#[wasm_bindgen]
pub fn validate_cvv(cvv: &str) -> Option<String> {
    crate::cvv::validate_cvv(cvv).err().map(|e| e.to_string())
}

/// The month drop-down values, "01" through "12".
#[wasm_bindgen]
pub fn month_options() -> js_sys::Array {
    to_array(crate::expiry::month_options())
}

/// The year drop-down values: ten two-digit years from the current one.
///
/// The year comes from `Date` in the browser; the `wasm` feature turns on
/// chrono's `wasmbind` backend for that.
#[wasm_bindgen]
pub fn year_options() -> js_sys::Array {
    to_array(crate::expiry::year_options(crate::expiry::current_year()))
}

fn to_array(values: Vec<String>) -> js_sys::Array {
    values.into_iter().map(JsValue::from).collect()
}

/// Validates all form fields at once.
///
/// `card_number` is re-formatted the same way the input does before the
/// rules run.
#[wasm_bindgen]
pub fn validate_form(
    card_number: &str,
    cardholder_name: &str,
    expiry_month: &str,
    expiry_year: &str,
    cvv: &str,
) -> FormResult {
    let mut form = PaymentForm::new();
    form.set_card_number(card_number);
    form.set_cardholder_name(cardholder_name);
    form.set_expiry_month(expiry_month);
    form.set_expiry_year(expiry_year);
    form.set_cvv(cvv);

    let brand = form.brand().as_str().to_string();

    match form.validate() {
        Ok(_) => FormResult {
            valid: true,
            brand,
            card_number_error: None,
            cardholder_name_error: None,
            expiry_month_error: None,
            expiry_year_error: None,
            cvv_error: None,
        },
        Err(errors) => {
            let message = |field| errors.get(field).map(|e| e.to_string());
            FormResult {
                valid: false,
                brand,
                card_number_error: message(FormField::CardNumber),
                cardholder_name_error: message(FormField::CardholderName),
                expiry_month_error: message(FormField::ExpiryMonth),
                expiry_year_error: message(FormField::ExpiryYear),
                cvv_error: message(FormField::Cvv),
            }
        }
    }
}

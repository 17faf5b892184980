//! Fuzz target for form validation.
//!
//! Drives the form with arbitrary field values and checks it never panics.

#![no_main]

use arbitrary::Arbitrary;
use card_entry::{CardPreview, FormField, PaymentForm};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FormInput<'a> {
    card_number: &'a str,
    cardholder_name: &'a str,
    expiry_month: &'a str,
    expiry_year: &'a str,
    cvv: &'a str,
    cvv_focused: bool,
}

fuzz_target!(|input: FormInput<'_>| {
    let mut form = PaymentForm::new();
    form.set_card_number(input.card_number);
    form.set_cardholder_name(input.cardholder_name);
    form.set_expiry_month(input.expiry_month);
    form.set_expiry_year(input.expiry_year);
    form.set_cvv(input.cvv);
    if input.cvv_focused {
        form.focus(FormField::Cvv);
    }

    let _ = CardPreview::from_form(&form);
    let _ = format!("{:?}", form);

    if let Err(errors) = form.validate() {
        assert!(!errors.is_empty());
        assert!(errors.len() <= FormField::ALL.len());
    }
});

//! Payment form example: validation messages and the card preview.
//!
//! Run with: `cargo run --example payment_form`

use card_entry::{expiry, CardFace, CardPreview, FormField, PaymentForm};

fn print_preview(form: &PaymentForm) {
    let preview = CardPreview::from_form(form);
    match preview.face() {
        CardFace::Front => println!(
            "  [{}] {} | {} | {}",
            preview.brand().as_str(),
            preview.number(),
            preview.holder(),
            preview.expiry()
        ),
        CardFace::Back => println!("  [{}] CVV {}", preview.brand().as_str(), preview.cvv()),
    }
}

fn main() {
    println!("=== Payment Form ===\n");

    let mut form = PaymentForm::new();

    println!("Empty form preview:");
    print_preview(&form);
    println!();

    println!("Empty form errors:");
    if let Err(errors) = form.validate() {
        for error in &errors {
            println!("  {:16} {}", error.field().label(), error);
        }
    }
    println!();

    // Fill it in field by field
    form.set(FormField::CardNumber, "5105 1051 0510 5100");
    form.set(FormField::CardholderName, "Jane Doe");
    form.set(FormField::ExpiryMonth, "07");
    form.set(FormField::ExpiryYear, "29");

    println!("Front while typing:");
    print_preview(&form);

    form.focus(FormField::Cvv);
    form.set(FormField::Cvv, "12");
    println!("Back while the CVV has focus:");
    print_preview(&form);
    println!(
        "  CVV error: {}",
        form.validate_field(FormField::Cvv)
            .map(|e| e.to_string())
            .unwrap_or_default()
    );
    println!();

    form.set(FormField::Cvv, "123");
    form.blur();

    match form.validate() {
        Ok(payment) => println!("Valid: {}", payment),
        Err(errors) => println!("Invalid: {}", errors),
    }
    println!();

    println!("Month options: {}", expiry::month_options().join(" "));
    println!(
        "Year options:  {}",
        expiry::year_options(expiry::current_year()).join(" ")
    );

    println!("\nDebug output is masked: {:?}", form);
}

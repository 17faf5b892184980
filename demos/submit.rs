//! Simulated submission example.
//!
//! Run with: `cargo run --example submit --features submit`

use card_entry::submit::{SubmitState, Submitter};
use card_entry::PaymentForm;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut submitter = Submitter::new().with_delay(Duration::from_millis(500));

    let mut form = PaymentForm::new();
    form.set_card_number("4111");
    println!("Submitting an incomplete form...");
    match submitter.submit(&mut form).await {
        Ok(_) => println!("  Unexpectedly accepted"),
        Err(errors) => {
            for error in &errors {
                println!("  {}: {}", error.field(), error);
            }
        }
    }

    form.set_card_number("4111 1111 1111 1111");
    form.set_cardholder_name("Jane Doe");
    form.set_expiry_month("09");
    form.set_expiry_year("30");
    form.set_cvv("123");

    println!("\nSubmitting a complete form ({:?})...", submitter.delay());
    match submitter.submit(&mut form).await {
        Ok(toast) => {
            println!("  {}", toast.title);
            println!("  {}", toast.description);
        }
        Err(errors) => println!("  Rejected: {}", errors),
    }

    assert_eq!(submitter.state(), SubmitState::Idle);
    println!("\nForm cleared: {}", form.card_number().is_empty());
}

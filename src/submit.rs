//! Simulated payment submission.
//!
//! There is no payment backend. Submitting validates the form, waits for a
//! fixed delay to stand in for a network round trip, clears the form and
//! hands back the toast to show.
//!
//! # Example
//!
//! ```no_run
//! use card_entry::submit::{submit, DEFAULT_SUBMIT_DELAY};
//! use card_entry::PaymentForm;
//!
//! # async fn run() {
//! let mut form = PaymentForm::new();
//! form.set_card_number("4111 1111 1111 1111");
//! form.set_cardholder_name("Jane Doe");
//! form.set_expiry_month("09");
//! form.set_expiry_year("30");
//! form.set_cvv("123");
//!
//! let toast = submit(&mut form, DEFAULT_SUBMIT_DELAY).await.unwrap();
//! assert_eq!(toast.title, "Payment Successful");
//! assert!(form.card_number().is_empty());
//! # }
//! ```

use crate::error::FormErrors;
use crate::form::PaymentForm;
use std::time::Duration;
use tracing::{debug, info};

/// How long the simulated submission takes.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// A notification shown after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Toast {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
}

impl Toast {
    /// The toast shown when a payment goes through.
    pub fn payment_successful() -> Self {
        Self {
            title: "Payment Successful".to_string(),
            description: "Your payment has been processed successfully.".to_string(),
        }
    }
}

/// Whether a submission is in flight. UIs disable the pay button while
/// `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Waiting for the simulated round trip.
    Submitting,
}

/// Validates and "submits" the form.
///
/// Invalid forms are rejected immediately with their field errors and are
/// left untouched. Valid forms wait out `delay`, are reset, and produce
/// [`Toast::payment_successful`].
pub async fn submit(form: &mut PaymentForm, delay: Duration) -> Result<Toast, FormErrors> {
    let payment = match form.validate() {
        Ok(payment) => payment,
        Err(errors) => {
            debug!(failed_fields = errors.len(), "submission rejected");
            return Err(errors);
        }
    };

    info!(
        brand = payment.brand().as_str(),
        card = payment.masked_number(),
        delay_ms = delay.as_millis() as u64,
        "submitting payment"
    );

    tokio::time::sleep(delay).await;
    form.reset();

    info!(card = payment.masked_number(), "payment processed");
    Ok(Toast::payment_successful())
}

/// Tracks [`SubmitState`] around a call to [`submit`].
#[derive(Debug, Default)]
pub struct Submitter {
    state: SubmitState,
    delay: Option<Duration>,
}

impl Submitter {
    /// A submitter using [`DEFAULT_SUBMIT_DELAY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the simulated delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The delay each submission waits.
    pub fn delay(&self) -> Duration {
        self.delay.unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    /// The current state.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Submits the form, moving to `Submitting` for the duration of the
    /// delay and back to `Idle` afterwards, whatever the outcome.
    pub async fn submit(&mut self, form: &mut PaymentForm) -> Result<Toast, FormErrors> {
        self.state = SubmitState::Submitting;
        let result = submit(form, self.delay()).await;
        self.state = SubmitState::Idle;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormField;
    use tokio::time::Instant;

    fn filled() -> PaymentForm {
        let mut form = PaymentForm::new();
        form.set_card_number("5500000000000004");
        form.set_cardholder_name("Jane Doe");
        form.set_expiry_month("09");
        form.set_expiry_year("30");
        form.set_cvv("123");
        form
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_and_resets() {
        let mut form = filled();
        let start = Instant::now();

        let toast = submit(&mut form, DEFAULT_SUBMIT_DELAY).await.unwrap();

        assert_eq!(toast, Toast::payment_successful());
        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
        assert!(form.card_number().is_empty());
        assert!(form.cvv().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_is_rejected_without_delay() {
        let mut form = filled();
        form.set_cvv("1");
        let start = Instant::now();

        let errors = submit(&mut form, DEFAULT_SUBMIT_DELAY).await.unwrap_err();

        assert!(errors.get(FormField::Cvv).is_some());
        assert_eq!(start.elapsed(), Duration::ZERO);
        // Nothing is cleared on failure
        assert_eq!(form.card_number(), "5500 0000 0000 0004");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitter_returns_to_idle() {
        let mut submitter = Submitter::new().with_delay(Duration::from_millis(10));
        assert_eq!(submitter.delay(), Duration::from_millis(10));
        assert_eq!(submitter.state(), SubmitState::Idle);

        let mut form = filled();
        assert!(submitter.submit(&mut form).await.is_ok());
        assert_eq!(submitter.state(), SubmitState::Idle);

        assert!(submitter.submit(&mut form).await.is_err());
        assert_eq!(submitter.state(), SubmitState::Idle);
    }

    #[test]
    fn test_toast_text() {
        let toast = Toast::payment_successful();
        assert_eq!(toast.title, "Payment Successful");
        assert_eq!(
            toast.description,
            "Your payment has been processed successfully."
        );
    }
}

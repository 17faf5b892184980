//! CLI tool for the card entry form.
//!
//! # Usage
//!
//! ```bash
//! # Format raw input
//! card-entry format 4111111111111111
//!
//! # Detect the brand and the rule that matched
//! card-entry detect 2221000000000000
//!
//! # Format and detect in one go
//! card-entry classify "4111-1111-1111-1111" --output json
//!
//! # Validate a whole form
//! card-entry validate --number 4111111111111111 --name "Jane Doe" --month 09 --year 30 --cvv 123
//!
//! # Simulate a payment
//! card-entry pay --number 4111111111111111 --name "Jane Doe" --month 09 --year 30 --cvv 123
//! ```

use card_entry::{
    detect, expiry, format, preview::CardFace, submit, CardBrand, CardNumberClassifier,
    CardPreview, ClassifierConfig, FormErrors, FormField, PaymentForm,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "card-entry")]
#[command(author, version, about = "Card number formatting, brand detection and form validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a card number into groups of four
    Format {
        /// Raw input (non-digits are dropped)
        card_number: String,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,

        /// Keep at most this many digits
        #[arg(short, long)]
        max_digits: Option<usize>,
    },

    /// Detect the card brand from a (partial) number
    Detect {
        /// Card number or prefix
        card_number: String,
    },

    /// Format and detect in one step
    Classify {
        /// Raw input
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a complete form
    Validate {
        #[command(flatten)]
        form: FormArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the card preview for a form
    Preview {
        #[command(flatten)]
        form: FormArgs,

        /// Show the back of the card (as when the CVV field has focus)
        #[arg(long)]
        flipped: bool,
    },

    /// List the expiry drop-down values
    Options,

    /// Simulate submitting a payment
    Pay {
        #[command(flatten)]
        form: FormArgs,

        /// Simulated processing time in milliseconds
        #[arg(long, env = "CARD_ENTRY_SUBMIT_DELAY_MS", default_value_t = 2000)]
        delay_ms: u64,
    },
}

#[derive(Args)]
struct FormArgs {
    /// Card number
    #[arg(long, default_value = "")]
    number: String,

    /// Cardholder name
    #[arg(long, default_value = "")]
    name: String,

    /// Expiry month (01-12)
    #[arg(long, default_value = "")]
    month: String,

    /// Expiry year (two digits)
    #[arg(long, default_value = "")]
    year: String,

    /// CVV
    #[arg(long, default_value = "")]
    cvv: String,
}

impl FormArgs {
    fn to_form(&self) -> PaymentForm {
        let mut form = PaymentForm::new();
        form.set_card_number(&self.number);
        form.set_cardholder_name(&self.name);
        form.set_expiry_month(&self.month);
        form.set_expiry_year(&self.year);
        form.set_cvv(&self.cvv);
        form
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            card_number,
            separator,
            max_digits,
        } => {
            cmd_format(&card_number, &separator, max_digits);
        }
        Commands::Detect { card_number } => {
            cmd_detect(&card_number);
        }
        Commands::Classify {
            card_number,
            output,
        } => {
            cmd_classify(&card_number, output);
        }
        Commands::Validate { form, output } => {
            cmd_validate(&form.to_form(), output);
        }
        Commands::Preview { form, flipped } => {
            let mut form = form.to_form();
            if flipped {
                form.focus(FormField::Cvv);
            }
            cmd_preview(&form);
        }
        Commands::Options => {
            cmd_options();
        }
        Commands::Pay { form, delay_ms } => {
            cmd_pay(form.to_form(), Duration::from_millis(delay_ms)).await;
        }
    }
}

fn cmd_format(card_number: &str, separator: &str, max_digits: Option<usize>) {
    let config = ClassifierConfig::new().separator(separator);
    let config = match max_digits {
        Some(max) => config.max_digits(max),
        None => config,
    };
    let result = CardNumberClassifier::new(config).classify(card_number);
    println!("{}", result.formatted());
}

fn cmd_detect(card_number: &str) {
    let digits = format::strip_formatting(card_number);

    if digits.is_empty() {
        eprintln!("Error: No digits provided");
        std::process::exit(1);
    }

    match detect::matching_rule(&digits) {
        Some((rule, prefix)) => {
            println!("Detected Brand: {}", rule.brand.name());
            println!("Matched Prefix: {}", prefix);
        }
        None => {
            println!("Detected Brand: {}", CardBrand::Unknown.name());
        }
    }
}

fn cmd_classify(card_number: &str, output: OutputFormat) {
    let result = card_entry::classify(card_number);

    match output {
        OutputFormat::Text => {
            println!("Formatted: {}", result.formatted());
            println!("Brand: {}", result.brand().name());
            println!("Digits: {}", result.digit_count());
            println!("Complete: {}", if result.is_complete() { "yes" } else { "no" });
        }
        OutputFormat::Json => {
            let value = json!({
                "formatted": result.formatted(),
                "brand": result.brand(),
                "digits": result.digit_count(),
                "complete": result.is_complete(),
            });
            println!("{}", value);
        }
    }
}

fn cmd_validate(form: &PaymentForm, output: OutputFormat) {
    match form.validate() {
        Ok(payment) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: yes");
                    println!("Brand: {}", payment.brand().name());
                    println!("Card: {}", payment.masked_number());
                    println!("Expires: {}", payment.expiry());
                }
                OutputFormat::Json => {
                    let value = json!({ "valid": true, "payment": payment });
                    println!("{}", value);
                }
            }
            std::process::exit(0);
        }
        Err(errors) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    print_errors(&errors);
                }
                OutputFormat::Json => {
                    let fields: Vec<_> = errors
                        .iter()
                        .map(|e| json!({ "field": e.field(), "message": e.to_string() }))
                        .collect();
                    println!("{}", json!({ "valid": false, "errors": fields }));
                }
            }
            std::process::exit(1);
        }
    }
}

fn print_errors(errors: &FormErrors) {
    for error in errors {
        println!("{}: {}", error.field(), error);
    }
}

fn cmd_preview(form: &PaymentForm) {
    let preview = CardPreview::from_form(form);

    match preview.face() {
        CardFace::Front => {
            println!("[{}]", preview.brand().as_str());
            println!("{}", preview.number());
            println!("{}    {}", preview.holder(), preview.expiry());
        }
        CardFace::Back => {
            println!("CVV: {}", preview.cvv());
            println!("[{}]", preview.brand().as_str());
        }
    }
}

fn cmd_options() {
    println!("Months: {}", expiry::month_options().join(" "));
    println!(
        "Years: {}",
        expiry::year_options(expiry::current_year()).join(" ")
    );
}

async fn cmd_pay(mut form: PaymentForm, delay: Duration) {
    println!("Processing...");

    match submit::submit(&mut form, delay).await {
        Ok(toast) => {
            println!("{}", toast.title);
            println!("{}", toast.description);
        }
        Err(errors) => {
            print_errors(&errors);
            std::process::exit(1);
        }
    }
}

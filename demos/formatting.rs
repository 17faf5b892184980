//! Card number formatting example.
//!
//! Run with: `cargo run --example formatting`

use card_entry::{format, CardNumberClassifier, ClassifierConfig};

fn main() {
    println!("=== Card Number Formatting ===\n");

    // -------------------------------------------------------------------------
    // Normalization
    // -------------------------------------------------------------------------
    println!("--- Normalization ---\n");

    let inputs = [
        "",
        "4",
        "41111",
        "4111-1111-1111-1111",
        "4111 1111 1111 1111",
        "378282246310005",
        "card: 5500 0000 0000 0004",
    ];

    for input in inputs {
        println!("  {:28} -> {:?}", format!("{:?}", input), format::normalize_and_format(input));
    }
    println!();

    // -------------------------------------------------------------------------
    // Custom separators
    // -------------------------------------------------------------------------
    println!("--- Custom Separators ---\n");

    let number = "4111111111111111";
    let separators = [" ", "-", ".", " - "];

    println!("  Card: {}", number);
    for sep in separators {
        let classifier = CardNumberClassifier::new(ClassifierConfig::new().separator(sep));
        println!("    {:?} -> {}", sep, classifier.classify(number).formatted());
    }
    println!();

    // -------------------------------------------------------------------------
    // Entry field cap
    // -------------------------------------------------------------------------
    println!("--- Entry Field (16 digits max) ---\n");

    let overlong = "41111111111111112222";
    println!("  Input:     {}", overlong);
    println!("  Unlimited: {}", format::normalize_and_format(overlong));
    println!("  Capped:    {}", format::format_capped(overlong, 16));
    println!();

    // -------------------------------------------------------------------------
    // Groups
    // -------------------------------------------------------------------------
    println!("--- Groups ---\n");

    let groups = format::split_into_groups("378282246310005");
    println!("  378282246310005 -> {:?}", groups);
}

//! Basic brand detection example.
//!
//! Run with: `cargo run --example basic`

use card_entry::{classify, classify_brand, detect, CardBrand};

fn main() {
    println!("=== Card Brand Detection ===\n");

    // Example 1: Classify a typed number
    let input = "4111-1111-1111-1111";
    println!("Classifying: {}", input);

    let result = classify(input);
    println!("  Formatted: {}", result.formatted());
    println!("  Brand: {}", result.brand().name());
    println!("  Wire name: {}", result.brand().as_str());
    println!("  Masked: {}", result.masked());
    println!("  Complete: {}", result.is_complete());
    println!();

    // Example 2: One number per brand
    let test_cards = [
        "4111111111111111",
        "5500000000000004",
        "2223000048400011",
        "378282246310005",
        "6011111111111117",
        "6221260000000000",
        "3530111333300000",
    ];

    println!("Reference numbers:");
    for number in test_cards {
        println!("  {} - {}", number, classify_brand(number).name());
    }
    println!();

    // Example 3: Detection as the user types
    println!("Typing 2221 0000 ...:");
    let mut typed = String::new();
    for c in "22210000".chars() {
        typed.push(c);
        println!("  {:8} -> {}", typed, classify_brand(&typed).as_str());
    }
    println!();

    // Example 4: The decision list
    println!("Detection rules (first match wins):");
    for rule in detect::BRAND_RULES {
        let prefixes: Vec<String> = rule.prefixes.iter().map(|p| p.to_string()).collect();
        println!("  {:18} {}", rule.brand.name(), prefixes.join(", "));
    }
    println!("  {:18} anything else", CardBrand::Unknown.name());
}

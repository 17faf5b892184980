//! Fuzz target for brand detection.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_entry::{classify, classify_brand, detect, detect_brand, CardBrand};

fuzz_target!(|data: &str| {
    // Arbitrary text, including multi-byte characters, must never panic
    let brand = classify_brand(data);
    let _ = detect_brand(data);
    let _ = detect::matching_rule(data);

    let expected = detect::matching_rule(data)
        .map(|(rule, _)| rule.brand)
        .unwrap_or(CardBrand::Unknown);
    assert_eq!(brand, expected);

    let result = classify(data);
    assert_eq!(result.brand(), detect_brand(data));
});

//! Fuzz target for card number formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_entry::format;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = format::format_capped(data, 16);
    let _ = format::split_into_groups(data);
    let _ = format::is_formatted(data);

    // Digits survive formatting in order
    let formatted = format::normalize_and_format(data);
    let stripped = format::strip_formatting(&formatted);
    let original_digits = format::strip_formatting(data);
    assert_eq!(stripped, original_digits, "Formatting should preserve digits");

    assert!(!formatted.starts_with(' ') && !formatted.ends_with(' '));
    assert_eq!(format::normalize_and_format(&formatted), formatted, "Formatting should be idempotent");
});

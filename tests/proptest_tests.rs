//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_entry::{
    classify, classify_brand,
    detect::{matching_rule, BRAND_RULES},
    detect_brand, format, mask, normalize_and_format, strip_formatting, CardBrand, PaymentForm,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(|len| {
        proptest::collection::vec(prop::char::range('0', '9'), len)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    })
}

/// Generates digits with separators (spaces, dashes, letters) mixed in.
fn noisy_input() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => prop::char::range('0', '9').prop_map(|c| c.to_string()),
            1 => Just(" ".to_string()),
            1 => Just("-".to_string()),
            1 => Just("  ".to_string()),
            1 => "[a-zA-Z./]".prop_map(|s| s),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Output contains only ASCII digits and single spaces.
    #[test]
    fn output_is_digits_and_spaces(input in any::<String>()) {
        let formatted = normalize_and_format(&input);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
        prop_assert!(!formatted.starts_with(' '));
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(!formatted.contains("  "));
    }

    /// Property: Removing the spaces gives back the digits of the input, in order.
    #[test]
    fn spaces_removed_equals_digits(input in noisy_input()) {
        let formatted = normalize_and_format(&input);
        let without_spaces: String = formatted.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(without_spaces, strip_formatting(&input));
    }

    /// Property: Every group but the last has exactly four digits.
    #[test]
    fn groups_are_four_wide(input in noisy_input()) {
        let formatted = normalize_and_format(&input);
        if !formatted.is_empty() {
            let groups: Vec<&str> = formatted.split(' ').collect();
            let (last, full) = groups.split_last().unwrap();
            prop_assert!(full.iter().all(|g| g.len() == 4));
            prop_assert!((1..=4).contains(&last.len()));
        }
    }

    /// Property: Formatting is idempotent.
    #[test]
    fn formatting_is_idempotent(input in any::<String>()) {
        let once = normalize_and_format(&input);
        let twice = normalize_and_format(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(format::is_formatted(&once));
    }

    /// Property: Any separator keeps the digit order.
    #[test]
    fn custom_separator_preserves_digits(
        digits in digit_string_range(0..=24),
        separator in prop_oneof![Just(""), Just("-"), Just(" - "), Just("/")],
    ) {
        let formatted = format::format_with_separator(&digits, separator);
        prop_assert_eq!(strip_formatting(&formatted), digits);
    }

    /// Property: The capped formatter never keeps more than the cap.
    #[test]
    fn capped_formatting_respects_cap(input in noisy_input(), cap in 0usize..=20) {
        let formatted = format::format_capped(&input, cap);
        let kept = strip_formatting(&formatted);
        prop_assert!(kept.len() <= cap);
        prop_assert!(strip_formatting(&input).starts_with(&kept));
    }
}

// =============================================================================
// DETECTION PROPERTIES
// =============================================================================

proptest! {
    /// Property: Classification never panics, whatever the input.
    #[test]
    fn classify_brand_never_panics(input in any::<String>()) {
        let _ = classify_brand(&input);
        let _ = detect_brand(&input);
        let _ = classify(&input);
    }

    /// Property: The brand is the brand of the first matching rule.
    #[test]
    fn brand_agrees_with_rule_table(digits in digit_string_range(0..=19)) {
        let expected = matching_rule(&digits)
            .map(|(rule, _)| rule.brand)
            .unwrap_or(CardBrand::Unknown);
        prop_assert_eq!(classify_brand(&digits), expected);
    }

    /// Property: At most one brand's rules match any number.
    #[test]
    fn rules_do_not_overlap(digits in digit_string_range(6..=19)) {
        let matching = BRAND_RULES
            .iter()
            .filter(|rule| rule.matching_prefix(&digits).is_some())
            .count();
        prop_assert!(matching <= 1, "{} matched {} brands", digits, matching);
    }

    /// Property: Only the leading digits decide the brand.
    #[test]
    fn brand_depends_on_prefix_only(
        prefix in digit_string_range(6..=6),
        tail_a in digit_string_range(0..=13),
        tail_b in digit_string_range(0..=13),
    ) {
        prop_assert_eq!(
            classify_brand(&format!("{}{}", prefix, tail_a)),
            classify_brand(&format!("{}{}", prefix, tail_b))
        );
    }

    /// Property: Anything starting with 4 is Visa.
    #[test]
    fn leading_four_is_visa(rest in digit_string_range(0..=18)) {
        prop_assert_eq!(classify_brand(&format!("4{}", rest)), CardBrand::Visa);
    }

    /// Property: Formatting does not change the detected brand.
    #[test]
    fn formatting_preserves_brand(input in noisy_input()) {
        let formatted = normalize_and_format(&input);
        prop_assert_eq!(detect_brand(&formatted), detect_brand(&input));
    }
}

// =============================================================================
// FORM AND MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: The card number field always holds a formatted, capped value.
    #[test]
    fn card_number_field_is_formatted(input in noisy_input()) {
        let mut form = PaymentForm::new();
        form.set_card_number(&input);
        prop_assert!(format::is_formatted(form.card_number()));
        prop_assert!(strip_formatting(form.card_number()).len() <= 16);
    }

    /// Property: Validation never panics and reports each field at most once.
    #[test]
    fn validation_reports_each_field_once(
        number in any::<String>(),
        name in any::<String>(),
        month in any::<String>(),
        year in any::<String>(),
        cvv in any::<String>(),
    ) {
        let mut form = PaymentForm::new();
        form.set_card_number(&number);
        form.set_cardholder_name(&name);
        form.set_expiry_month(&month);
        form.set_expiry_year(&year);
        form.set_cvv(&cvv);

        if let Err(errors) = form.validate() {
            let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
            let mut sorted = fields.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(fields, sorted);
        }
    }

    /// Property: Masking never reveals more than four digits.
    #[test]
    fn mask_hides_all_but_last_four(digits in digit_string_range(0..=19)) {
        let masked = mask::mask_string(&digits);
        let visible = masked.chars().filter(|c| c.is_ascii_digit()).count();
        prop_assert!(visible <= 4);
        if digits.len() > 4 {
            prop_assert!(masked.ends_with(&digits[digits.len() - 4..]));
        }
    }
}

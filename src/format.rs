//! Card number formatting utilities.
//!
//! Every function here first reduces its input to the ASCII digits it
//! contains, then re-groups them in runs of four. Formatting is the same for
//! every brand.
//!
//! # Example
//!
//! ```
//! use card_entry::format::{normalize_and_format, format_with_separator, strip_formatting};
//!
//! assert_eq!(normalize_and_format("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(normalize_and_format("41-11a1"), "4111 1");
//! assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
//! assert_eq!(strip_formatting("4111 1111"), "41111111");
//! ```

use crate::card::GROUP_SIZE;

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use card_entry::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// assert_eq!(strip_formatting("no digits"), "");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalizes raw keystrokes into a space-grouped card number.
///
/// Non-digits are dropped and a single space follows every complete group
/// of four, except the last group. Empty or digit-free input yields an
/// empty string.
///
/// # Example
///
/// ```
/// use card_entry::format::normalize_and_format;
///
/// assert_eq!(normalize_and_format(""), "");
/// assert_eq!(normalize_and_format("4111"), "4111");
/// assert_eq!(normalize_and_format("41111"), "4111 1");
/// assert_eq!(normalize_and_format("4111 1111 1111 1111"), "4111 1111 1111 1111");
/// ```
pub fn normalize_and_format(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a card number with a custom separator between groups.
///
/// # Example
///
/// ```
/// use card_entry::format::format_with_separator;
///
/// assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
/// assert_eq!(format_with_separator("4111111111111111", " - "), "4111 - 1111 - 1111 - 1111");
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    group_digits(input.chars().filter(|c| c.is_ascii_digit()), separator)
}

/// Formats at most `max_digits` digits of the input.
///
/// This is what the card number field does as the user types: anything past
/// the cap is dropped rather than rejected.
///
/// # Example
///
/// ```
/// use card_entry::format::format_capped;
///
/// assert_eq!(format_capped("41111111111111112222", 16), "4111 1111 1111 1111");
/// assert_eq!(format_capped("4111", 16), "4111");
/// ```
pub fn format_capped(input: &str, max_digits: usize) -> String {
    group_digits(
        input.chars().filter(|c| c.is_ascii_digit()).take(max_digits),
        " ",
    )
}

fn group_digits(digits: impl Iterator<Item = char>, separator: &str) -> String {
    let mut result = String::new();

    for (i, c) in digits.enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Splits the digits of a card number into display groups.
///
/// # Example
///
/// ```
/// use card_entry::format::split_into_groups;
///
/// assert_eq!(split_into_groups("4111111111111111"), vec!["4111", "1111", "1111", "1111"]);
/// assert_eq!(split_into_groups("371449635398431"), vec!["3714", "4963", "5398", "431"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    digits
        .chunks(GROUP_SIZE)
        .map(|group| group.iter().collect())
        .collect()
}

/// Returns true if the string is already in normalized form.
///
/// # Example
///
/// ```
/// use card_entry::format::is_formatted;
///
/// assert!(is_formatted("4111 1111 1"));
/// assert!(is_formatted(""));
/// assert!(!is_formatted("4111-1111"));
/// assert!(!is_formatted("4111 "));
/// ```
pub fn is_formatted(input: &str) -> bool {
    normalize_and_format(input) == input
}

//! Masking utilities.
//!
//! Card numbers and CVVs must never end up in logs or `Debug` output. These
//! helpers produce the masked forms used everywhere the crate prints card
//! data: only the last four digits stay visible.

/// Masks a card number string, showing only the last 4 digits.
///
/// Non-digit characters are stripped first. Inputs with four digits or fewer
/// are masked entirely.
///
/// # Example
///
/// ```
/// use card_entry::mask::mask_string;
///
/// assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
/// assert_eq!(mask_string("4111"), "****");
/// ```
pub fn mask_string(input: &str) -> String {
    // Extract only digits
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Separator before last 4 if the masked run ended on a group boundary
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&digits[len - 4..]);
    result
}

/// Extracts just the last 4 digits from a card number string.
///
/// Returns an empty string if there are fewer than 4 digits.
///
/// # Example
///
/// ```
/// use card_entry::mask::last_four;
///
/// assert_eq!(last_four("4111 1111 1111 1234"), "1234");
/// assert_eq!(last_four("123"), "");
/// ```
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}

/// Replaces every character of a secret with `*`.
#[inline]
pub(crate) fn redact(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("4111111111111111"), "****-****-****-1111");
        assert_eq!(mask_string("4111-1111-1111-1111"), "****-****-****-1111");
        assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
    }

    #[test]
    fn test_mask_odd_length() {
        let masked = mask_string("371449635398431");
        assert_eq!(masked, "****-****-***8431");
        assert!(!masked.contains("3714"));
    }

    #[test]
    fn test_mask_short() {
        assert_eq!(mask_string(""), "");
        assert_eq!(mask_string("12"), "**");
        assert_eq!(mask_string("12345"), "*2345");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("4111111111111111"), "1111");
        assert_eq!(last_four("4111-1111-1111-1234"), "1234");
        assert_eq!(last_four("123"), "");
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("123"), "***");
        assert_eq!(redact(""), "");
    }
}

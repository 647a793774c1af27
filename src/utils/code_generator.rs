//! Short code generation and validation utilities.
//!
//! Generated codes are drawn uniformly from the base62 alphabet. Custom codes
//! supplied by users are checked against [`is_valid_custom_code`].

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated short codes.
pub const GENERATED_CODE_LENGTH: usize = 8;

/// Minimum length of a custom short code.
pub const CUSTOM_CODE_MIN_LENGTH: usize = 4;

/// Maximum length of a custom short code.
pub const CUSTOM_CODE_MAX_LENGTH: usize = 15;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("custom code regex is a valid pattern")
});

/// Generates a random base62 short code.
///
/// Uses the thread-local CSPRNG, producing an 8-character code
/// (62^8 ≈ 2.2 × 10^14 possible values).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` is acceptable as a user-provided short code.
///
/// # Rules
///
/// - Length: 4-15 characters
/// - Allowed characters: ASCII letters and digits (case-sensitive)
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_custom_code("Promo2025"));
/// assert!(!is_valid_custom_code("ab"));          // Too short
/// assert!(!is_valid_custom_code("valid$code"));  // Non-alphanumeric
/// ```
pub fn is_valid_custom_code(code: &str) -> bool {
    (CUSTOM_CODE_MIN_LENGTH..=CUSTOM_CODE_MAX_LENGTH).contains(&code.len())
        && CUSTOM_CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generated_codes_fit_custom_alphabet() {
        let code = generate_code();
        assert!(CUSTOM_CODE_REGEX.is_match(&code));
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(is_valid_custom_code("abcd"));
        assert!(!is_valid_custom_code("abc"));
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(is_valid_custom_code("abcd1234567890x"));
        assert!(!is_valid_custom_code("abcd1234567890xy"));
    }

    #[test]
    fn test_validate_too_short() {
        assert!(!is_valid_custom_code("ab"));
    }

    #[test]
    fn test_validate_mixed_case_and_digits() {
        assert!(is_valid_custom_code("MyCode2024"));
        assert!(is_valid_custom_code("12345678"));
        assert!(is_valid_custom_code("ABCD"));
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(!is_valid_custom_code("valid$code"));
        assert!(!is_valid_custom_code("my-link"));
        assert!(!is_valid_custom_code("my_link"));
    }

    #[test]
    fn test_validate_spaces_not_allowed() {
        assert!(!is_valid_custom_code("my code"));
    }

    #[test]
    fn test_validate_non_ascii_rejected() {
        assert!(!is_valid_custom_code("café1"));
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(!is_valid_custom_code(""));
    }
}

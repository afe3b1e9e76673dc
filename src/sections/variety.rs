//! Character variety section - checks for lowercase, uppercase, numbers, special chars.

use super::SectionResult;

/// Scores the character classes present in the password.
///
/// Lowercase, uppercase and digits are worth 10 points each, anything
/// outside `[A-Za-z0-9]` is worth 15.
pub fn character_variety_section(password: &str) -> SectionResult {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut result = SectionResult::default();
    result.check(has_lower, 10, "Add lowercase letters");
    result.check(has_upper, 10, "Add uppercase letters");
    result.check(has_digit, 10, "Add numbers");
    result.check(has_special, 15, "Add special characters (!@#$%^&*)");
    result
}

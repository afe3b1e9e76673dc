//! Length section - rewards longer passwords.

use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

const TOO_SHORT: &str = "Use at least 8 characters";

/// Scores the password length, counted in characters.
///
/// - 12+ chars: 25 points
/// - 8 to 11: 15 points
/// - 6 or 7: 10 points, no suggestion
/// - shorter: nothing, and asks for at least [`MIN_LENGTH`]
pub fn length_section(password: &str) -> SectionResult {
    let points = match password.chars().count() {
        12.. => 25,
        MIN_LENGTH..=11 => 15,
        6..=7 => 10,
        _ => {
            return SectionResult {
                points: 0,
                feedback: vec![TOO_SHORT],
            };
        }
    };
    SectionResult {
        points,
        feedback: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("Sh0r!");
        assert_eq!(result.points, 0);
        assert_eq!(result.feedback, vec!["Use at least 8 characters"]);
    }

    #[test]
    fn test_length_section_six_chars_no_feedback() {
        let result = length_section("abcdef");
        assert_eq!(result.points, 10);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("12345678").points, 15);
    }

    #[test]
    fn test_length_section_long() {
        assert_eq!(length_section("LongEnough123!").points, 25);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        assert_eq!(length_section("ééééééé").points, 10);
    }
}

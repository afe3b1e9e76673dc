//! Random password generation.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Length used by the site's "generate" button.
pub const DEFAULT_GENERATED_LENGTH: usize = 16;

/// Generates a password of `len` characters with at least one lowercase
/// letter, uppercase letter, digit and symbol.
///
/// A `len` below 4 still yields 4 characters, one per class.
pub fn generate_secure_password(len: usize) -> SecretString {
    SecretString::new(generate_with(&mut rand::thread_rng(), len).into())
}

fn generate_with<R: Rng>(rng: &mut R, len: usize) -> String {
    let classes = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
    let all: Vec<u8> = classes.concat();

    let mut chars: Vec<u8> = Vec::with_capacity(len.max(classes.len()));
    for class in classes {
        chars.push(class[rng.gen_range(0..class.len())]);
    }
    while chars.len() < len {
        chars.push(all[rng.gen_range(0..all.len())]);
    }
    chars.shuffle(rng);

    chars.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_password_strength;
    use crate::strength::PasswordStrength;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use secrecy::ExposeSecret;

    fn has_every_class(pwd: &str) -> bool {
        [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
            .iter()
            .all(|class| pwd.bytes().any(|b| class.contains(&b)))
    }

    #[test]
    fn test_generated_length_and_classes() {
        for len in [4, 8, 12, DEFAULT_GENERATED_LENGTH, 64] {
            let pwd = generate_secure_password(len);
            let pwd = pwd.expose_secret();
            assert_eq!(pwd.chars().count(), len);
            assert!(has_every_class(pwd), "missing a class in '{}'", pwd);
        }
    }

    #[test]
    fn test_generated_short_length_keeps_classes() {
        for len in 0..4 {
            let pwd = generate_secure_password(len);
            assert_eq!(pwd.expose_secret().len(), 4);
            assert!(has_every_class(pwd.expose_secret()));
        }
    }

    #[test]
    fn test_generated_only_known_characters() {
        let mut rng = StdRng::seed_from_u64(7);
        let pwd = generate_with(&mut rng, 200);
        let all = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        assert!(pwd.bytes().all(|b| all.contains(&b)));
    }

    #[test]
    fn test_generated_scores_very_strong_without_patterns() {
        const PATTERN_FEEDBACK: [&str; 3] = [
            "Avoid repeated characters",
            "Avoid sequential characters",
            "Avoid common passwords",
        ];

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let pwd = generate_with(&mut rng, 12);
            let score = evaluate_password_strength(&SecretString::new(pwd.clone().into()));

            // length and variety always hold; only chance patterns can cost points
            assert!(
                score.feedback.iter().all(|f| PATTERN_FEEDBACK.contains(&f.as_str())),
                "'{}' got {:?}",
                pwd,
                score.feedback
            );
            if score.feedback.is_empty() {
                assert_eq!(score.strength, PasswordStrength::VeryStrong, "'{}'", pwd);
            }
        }
    }
}

//! Pattern analysis section - detects repeated and sequential characters.

use super::SectionResult;

/// Ascending runs that count as sequential, including the `890` wrap.
const DIGIT_RUN: &[u8] = b"01234567890";
const ALPHA_RUN: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Awards 10 points for the absence of a 3+ run of identical characters
/// and 10 more for the absence of an ascending 3 character sequence.
///
/// An empty password earns nothing here: there is nothing to be free of.
pub fn pattern_analysis_section(password: &str) -> SectionResult {
    let mut result = SectionResult::default();
    if password.is_empty() {
        return result;
    }

    let chars: Vec<char> = password.chars().collect();
    result.check(!has_repeated_run(&chars), 10, "Avoid repeated characters");
    result.check(
        !has_sequential_run(password),
        10,
        "Avoid sequential characters",
    );
    result
}

/// Three or more identical consecutive characters, e.g. `aaa`.
/// Line terminators never count as a run.
fn has_repeated_run(chars: &[char]) -> bool {
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2] && !is_line_terminator(w[0]))
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Any ascending triple such as `123`, `890` or `AbC`.
fn has_sequential_run(password: &str) -> bool {
    let lowered = password.to_ascii_lowercase();
    let haystack = lowered.as_bytes();
    [DIGIT_RUN, ALPHA_RUN]
        .iter()
        .flat_map(|run| run.windows(3))
        .any(|needle| haystack.windows(3).any(|w| w == needle))
}

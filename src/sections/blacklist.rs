//! Blacklist section - checks for common passwords.

use crate::blacklist::Blacklist;
use super::SectionResult;

/// Awards 10 points unless the password contains a common password.
///
/// An empty password earns nothing.
pub fn blacklist_section(password: &str, blacklist: &Blacklist) -> SectionResult {
    let mut result = SectionResult::default();
    if password.is_empty() {
        return result;
    }
    result.check(
        !blacklist.contains_common(password),
        10,
        "Avoid common passwords",
    );
    result
}

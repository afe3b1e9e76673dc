//! Presentation values: what the page shows, without touching a page.

use crate::checklist::ChecklistTracker;
use crate::evaluator::PASSWORD_TIPS;
use crate::ip::{IpRecord, LookupError};
use crate::risk::{RiskAssessment, MAX_RISK_VALUE};
use crate::storage::Storage;
use crate::strength::PasswordScore;

/// A progress bar: fill width and color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    pub width_percent: u8,
    pub color: &'static str,
}

impl From<&PasswordScore> for Meter {
    fn from(score: &PasswordScore) -> Self {
        Self {
            width_percent: score.strength.percentage(),
            color: score.strength.color(),
        }
    }
}

impl<S: Storage> From<&ChecklistTracker<S>> for Meter {
    fn from(tracker: &ChecklistTracker<S>) -> Self {
        Self {
            width_percent: tracker.completion_percent(),
            color: tracker.progress_tier().color(),
        }
    }
}

pub fn render_password_tips() -> String {
    let mut out = String::from("Password Security Tips:");
    for tip in PASSWORD_TIPS {
        out.push_str("\n• ");
        out.push_str(tip);
    }
    out
}

pub fn render_password_feedback(score: &PasswordScore) -> String {
    if score.is_excellent() {
        return "✓ Excellent password!".to_string();
    }
    let mut out = String::from("Suggestions:");
    for tip in &score.feedback {
        out.push_str("\n• ");
        out.push_str(tip);
    }
    out
}

pub fn render_risk(risk: &RiskAssessment) -> String {
    format!(
        "{}\nRisk Score: {}/{}\nRecommendation: {}",
        risk.level.label(),
        risk.value,
        MAX_RISK_VALUE,
        risk.description
    )
}

pub fn render_ip_record(record: &IpRecord) -> String {
    let class = record.classify();
    format!(
        "IP Address: {}\nLocation: {}\nISP: {}\nTimezone: {}\n{}: {}",
        record.ip_or_unknown(),
        record.location(),
        record.org_or_unknown(),
        record.timezone_or_unknown(),
        class.label(),
        class.description()
    )
}

/// Error line for the lookup panel.
///
/// Input validation is shown as-is. Failed requests are prefixed by the
/// action that triggered them: a lookup or detecting the caller's own IP.
pub fn render_ip_error(err: &LookupError, detecting: bool) -> String {
    match err {
        LookupError::InvalidIp(_) => err.to_string(),
        _ if detecting => format!("Error detecting IP: {}", err),
        _ => format!("Error: {}", err),
    }
}

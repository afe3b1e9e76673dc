//! Qualitative risk matrix: likelihood x impact.

use std::fmt;
use std::ops::RangeInclusive;

/// Slider bounds for both axes. [`assess_risk`] itself does not enforce them.
pub const SEVERITY_RANGE: RangeInclusive<i32> = 1..=5;

/// Highest value reachable inside [`SEVERITY_RANGE`].
pub const MAX_RISK_VALUE: i32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_value(value: i32) -> Self {
        if value >= 20 {
            RiskLevel::Critical
        } else if value >= 15 {
            RiskLevel::High
        } else if value >= 10 {
            RiskLevel::Medium
        } else if value >= 5 {
            RiskLevel::Low
        } else {
            RiskLevel::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical Risk",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "#00ff88",
            RiskLevel::Low => "#00ffff",
            RiskLevel::Medium => "#ffaa00",
            RiskLevel::High => "#ff4444",
            RiskLevel::Critical => "#ff0000",
        }
    }

    /// Recommended course of action.
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Minimal risk. Standard monitoring sufficient.",
            RiskLevel::Low => "Acceptable risk. Monitor and review periodically.",
            RiskLevel::Medium => "Moderate risk. Plan mitigation within reasonable timeframe.",
            RiskLevel::High => "Urgent attention needed. Implement mitigation strategies.",
            RiskLevel::Critical => "Immediate action required. Implement emergency controls.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub likelihood: i32,
    pub impact: i32,
    /// `likelihood * impact`
    pub value: i32,
    pub level: RiskLevel,
    pub description: &'static str,
}

impl RiskAssessment {
    pub fn evaluate(likelihood: i32, impact: i32) -> Self {
        let value = likelihood.saturating_mul(impact);
        let level = RiskLevel::from_value(value);
        Self {
            likelihood,
            impact,
            value,
            level,
            description: level.description(),
        }
    }
}

/// Combines likelihood and impact into a risk classification.
///
/// Out-of-range inputs are not rejected; they go through the same thresholds.
pub fn assess_risk(likelihood: i32, impact: i32) -> RiskAssessment {
    RiskAssessment::evaluate(likelihood, impact)
}

//! Password score and strength classification.

use std::fmt;

/// Maximum number of feedback messages kept on a [`PasswordScore`].
pub const MAX_FEEDBACK: usize = 3;

/// Qualitative strength tier derived from a rubric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a rubric score to its tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => PasswordStrength::VeryStrong,
            60..=79 => PasswordStrength::Strong,
            40..=59 => PasswordStrength::Medium,
            20..=39 => PasswordStrength::Weak,
            _ => PasswordStrength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Color token used by the strength meter.
    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "#ff4444",
            PasswordStrength::Weak => "#ff6600",
            PasswordStrength::Medium => "#ffaa00",
            PasswordStrength::Strong => "#00ffff",
            PasswordStrength::VeryStrong => "#00ff88",
        }
    }

    /// Width of the strength meter, in percent.
    pub fn percentage(&self) -> u8 {
        match self {
            PasswordStrength::VeryWeak => 20,
            PasswordStrength::Weak => 40,
            PasswordStrength::Medium => 60,
            PasswordStrength::Strong => 80,
            PasswordStrength::VeryStrong => 100,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring a password against the rubric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordScore {
    pub score: u8,
    pub strength: PasswordStrength,
    /// Actionable suggestions, in rubric order, at most [`MAX_FEEDBACK`].
    pub feedback: Vec<String>,
}

impl PasswordScore {
    /// Builds a score, deriving the strength and truncating the feedback.
    pub fn new(score: u8, mut feedback: Vec<String>) -> Self {
        feedback.truncate(MAX_FEEDBACK);
        Self {
            score,
            strength: PasswordStrength::from_score(score),
            feedback,
        }
    }

    /// `true` when the rubric produced no suggestion at all.
    pub fn is_excellent(&self) -> bool {
        self.feedback.is_empty()
    }
}

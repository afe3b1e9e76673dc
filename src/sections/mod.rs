//! Password evaluation sections
//!
//! Each section scores one part of the rubric and reports the
//! suggestions for whatever it found missing.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// Points earned by one section and the feedback it raised, in rubric order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub points: u8,
    pub feedback: Vec<&'static str>,
}

impl SectionResult {
    /// Awards `points` when `passed`, otherwise records `reason`.
    pub(crate) fn check(&mut self, passed: bool, points: u8, reason: &'static str) {
        if passed {
            self.points += points;
        } else {
            self.feedback.push(reason);
        }
    }
}

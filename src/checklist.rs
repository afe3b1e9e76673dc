//! Security checklist with completion tracking and persistence.
//!
//! State is persisted as a JSON array of booleans, one per item position.
//! Restoring tolerates a stored array of a different length: only the
//! overlapping indices are applied.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::report::SecurityReport;
use crate::storage::{Storage, StorageError};

/// Storage key of the persisted checklist state.
pub const PROGRESS_KEY: &str = "securityChecklistProgress";

pub const BASELINE_ITEMS: &[&str] = &[
    "Use strong, unique passwords for every account",
    "Enable two-factor authentication",
    "Keep operating systems and software up to date",
    "Back up important data regularly",
    "Install and maintain antivirus software",
];

/// Appended after the baseline items.
pub const ADVANCED_ITEMS: &[&str] = &[
    "Configure firewall properly",
    "Enable automatic security updates",
    "Use encrypted communications (HTTPS/VPN)",
    "Implement access controls and user permissions",
    "Regularly audit and monitor system logs",
    "Have an incident response plan",
    "Conduct regular security training",
    "Perform regular penetration testing",
];

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("Checklist item {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Failed to serialize checklist state: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }
}

/// Color tier of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Danger,
    Warning,
    Primary,
    Success,
}

impl ProgressTier {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80.. => ProgressTier::Success,
            60..=79 => ProgressTier::Primary,
            40..=59 => ProgressTier::Warning,
            _ => ProgressTier::Danger,
        }
    }

    /// CSS custom property carrying the tier color.
    pub fn color(&self) -> &'static str {
        match self {
            ProgressTier::Success => "var(--success-color)",
            ProgressTier::Primary => "var(--primary-color)",
            ProgressTier::Warning => "var(--warning-color)",
            ProgressTier::Danger => "var(--danger-color)",
        }
    }
}

/// `round(100 * checked / total)` rounding halves up; 0 for an empty list.
pub fn completion_percent(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * checked + total) / (2 * total)).min(100) as u8
}

pub struct ChecklistTracker<S: Storage> {
    items: Vec<ChecklistItem>,
    storage: S,
}

impl<S: Storage> ChecklistTracker<S> {
    /// Tracker over `labels`, all unchecked. Does not touch storage.
    pub fn new<I, L>(storage: S, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            items: labels.into_iter().map(ChecklistItem::new).collect(),
            storage,
        }
    }

    /// Baseline and advanced items, restored from storage.
    pub fn with_default_items(storage: S) -> Self {
        let mut tracker = Self::new(storage, BASELINE_ITEMS.iter().copied());
        tracker.extend(ADVANCED_ITEMS.iter().copied());
        tracker.restore();
        tracker
    }

    /// Appends unchecked items at the end.
    pub fn extend<I, L>(&mut self, labels: I)
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.items.extend(labels.into_iter().map(ChecklistItem::new));
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Flips one item and persists the whole state.
    ///
    /// Returns the new checked value. Persistence is fire-and-forget: a
    /// failed write is logged, the in-memory toggle stands.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ChecklistError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ChecklistError::IndexOutOfRange { index, len })?;
        item.checked = !item.checked;
        let checked = item.checked;

        if let Err(_e) = self.persist() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Could not save checklist progress: {}", _e);
        }
        Ok(checked)
    }

    pub fn completion_percent(&self) -> u8 {
        completion_percent(self.checked_count(), self.items.len())
    }

    pub fn progress_tier(&self) -> ProgressTier {
        ProgressTier::from_percent(self.completion_percent())
    }

    /// Writes the checked flags, by position, under [`PROGRESS_KEY`].
    pub fn persist(&mut self) -> Result<(), ChecklistError> {
        let flags: Vec<bool> = self.items.iter().map(|item| item.checked).collect();
        let json = serde_json::to_string(&flags)?;
        self.storage.set(PROGRESS_KEY, &json)?;
        Ok(())
    }

    /// Applies the stored flags to the overlapping indices.
    ///
    /// Items past the stored length keep their current value and extra
    /// stored flags are ignored. A non-boolean entry such as `null` reads
    /// as unchecked. A missing, unreadable or non-array entry counts as no
    /// saved state. Returns the number of items restored.
    pub fn restore(&mut self) -> usize {
        let raw = match self.storage.get(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Could not load checklist progress: {}", _e);
                return 0;
            }
        };

        let flags: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(flags) => flags,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Could not load checklist progress: {}", _e);
                return 0;
            }
        };

        let restored = flags.len().min(self.items.len());
        for (item, flag) in self.items.iter_mut().zip(flags) {
            item.checked = flag.as_bool().unwrap_or(false);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Restored {} checklist items", restored);

        restored
    }

    /// Snapshot of the checklist for download.
    pub fn report(&self, now: DateTime<Utc>) -> SecurityReport {
        let (done, todo): (Vec<&ChecklistItem>, Vec<&ChecklistItem>) =
            self.items.iter().partition(|item| item.checked);
        SecurityReport {
            timestamp: now,
            completion_rate: self.completion_percent(),
            completed_items: done.into_iter().map(|i| i.label.clone()).collect(),
            recommendations: todo.into_iter().map(|i| i.label.clone()).collect(),
        }
    }
}

//! Common password list.
//!
//! A password is penalised when it *contains* any entry of the list,
//! compared case-insensitively.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an extra list file, one entry per line.
pub const COMMON_PASSWORDS_PATH_ENV: &str = "IRONFENCE_COMMON_PASSWORDS_PATH";

/// Built-in list, always part of every [`Blacklist`].
pub const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Lower-cased common password entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Blacklist {
    /// The built-in ten entry list.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_COMMON_PASSWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Built-in list extended with the entries of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let mut blacklist = Self::builtin();
        for line in content.lines() {
            blacklist.insert(line);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Built-in list, extended from `IRONFENCE_COMMON_PASSWORDS_PATH` when set.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match common_passwords_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Adds one entry, ignoring blanks and duplicates.
    pub fn insert(&mut self, entry: &str) {
        let entry = entry.trim().to_lowercase();
        if !entry.is_empty() && !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// First entry contained in `password`, if any.
    pub fn find_in(&self, password: &str) -> Option<&str> {
        let lowered = password.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.as_str()))
            .map(String::as_str)
    }

    pub fn contains_common(&self, password: &str) -> bool {
        self.find_in(password).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extra list path from the environment, if configured.
pub fn common_passwords_path() -> Option<PathBuf> {
    std::env::var(COMMON_PASSWORDS_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_builtin_substring_match() {
        let bl = Blacklist::builtin();
        assert_eq!(bl.len(), 10);
        assert!(bl.contains_common("MyPassword!"));
        assert!(bl.contains_common("xxQWERTYxx"));
        assert_eq!(bl.find_in("iloveMonkeys"), Some("monkey"));
        assert!(!bl.contains_common("Tr0ub4dor&3xyz"));
    }

    #[test]
    fn test_insert_normalises_and_dedups() {
        let mut bl = Blacklist::builtin();
        bl.insert("  Dragon ");
        bl.insert("dragon");
        bl.insert("   ");
        assert_eq!(bl.len(), 11);
        assert!(bl.contains_common("XDRAGONX"));
    }

    #[test]
    #[serial]
    fn test_common_passwords_path_unset() {
        remove_env(COMMON_PASSWORDS_PATH_ENV);
        assert_eq!(common_passwords_path(), None);
        let bl = Blacklist::from_env().expect("builtin list");
        assert_eq!(bl, Blacklist::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(COMMON_PASSWORDS_PATH_ENV, "/nonexistent/path/common.txt");

        let result = Blacklist::from_env();
        match result {
            Err(BlacklistError::FileNotFound(p)) => {
                assert_eq!(p, PathBuf::from("/nonexistent/path/common.txt"))
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }

        remove_env(COMMON_PASSWORDS_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n").expect("Failed to write");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_from_env_extends_builtin() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "sunshine").expect("Failed to write");
        writeln!(temp_file, "QWERTY").expect("Failed to write");

        set_env(COMMON_PASSWORDS_PATH_ENV, temp_file.path().to_str().unwrap());

        let bl = Blacklist::from_env().expect("list should load");
        assert_eq!(bl.len(), 11);
        assert!(bl.contains_common("Sunshine2024"));
        assert!(bl.contains_common("password"));

        remove_env(COMMON_PASSWORDS_PATH_ENV);
    }
}

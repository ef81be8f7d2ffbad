//! Common password blacklist
//!
//! Holds the passwords that attackers try first. The built-in list is always
//! present; an extra list can be loaded from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

/// Passwords hackers try first.
pub const COMMON_PASSWORDS: [&str; 15] = [
    "123456",
    "password",
    "123456789",
    "12345678",
    "12345",
    "qwerty",
    "1234567890",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "1234",
    "dragon",
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

/// Immutable, lower-cased set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Blacklist {
    /// The built-in list only.
    pub fn builtin() -> Self {
        Self {
            entries: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in list plus every non-blank line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
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
        blacklist.entries.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords (built-in + {:?})",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    /// Reads `PWD_BLACKLIST_PATH`; falls back to the built-in list when unset.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match blacklist_path_from_env() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the extra blacklist path configured through the environment, if any.
pub fn blacklist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
}

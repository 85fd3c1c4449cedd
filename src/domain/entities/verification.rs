//! Verification Report
//!
//! Compares what is in the target directory against the source store.

use crate::domain::value_objects::{AssetName, ContentHash};

/// Verification state of one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStatus {
    /// Target content matches source content
    Match,
    /// Target exists but differs
    Mismatch {
        expected: ContentHash,
        actual: ContentHash,
    },
    /// No target file
    MissingTarget,
    /// Target file exists but could not be read
    UnreadableTarget { reason: String },
    /// Source could not be read, so nothing to compare against
    SourceUnavailable,
}

#[derive(Debug, Clone)]
pub struct VerifyEntry {
    pub name: AssetName,
    pub status: VerifyStatus,
}

/// Result of verifying a target directory
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    entries: Vec<VerifyEntry>,
}

impl VerificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: AssetName, status: VerifyStatus) {
        self.entries.push(VerifyEntry { name, status });
    }

    pub fn entries(&self) -> &[VerifyEntry] {
        &self.entries
    }

    pub fn status_of(&self, name: &str) -> Option<&VerifyStatus> {
        self.entries
            .iter()
            .find(|e| e.name.as_str() == name)
            .map(|e| &e.status)
    }

    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|e| e.status == VerifyStatus::Match)
    }

    pub fn problems(&self) -> impl Iterator<Item = &VerifyEntry> {
        self.entries
            .iter()
            .filter(|e| e.status != VerifyStatus::Match)
    }
}

//! Materialization Report
//!
//! Per-asset outcome of a materialization run. Failures are values here,
//! never panics or early returns: one bad asset does not hide the others.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::AssetName;

/// Why a single asset could not be materialized
#[derive(Error, Debug)]
pub enum AssetError {
    /// The source store could not open the asset
    #[error("cannot open '{name}' in source: {source}")]
    SourceUnavailable {
        name: AssetName,
        #[source]
        source: io::Error,
    },

    /// The target file could not be created or replaced
    #[error("cannot write '{name}' to target: {source}")]
    TargetUnwritable {
        name: AssetName,
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred after both streams were open
    #[error("transfer of '{name}' failed: {source}")]
    TransferFailed {
        name: AssetName,
        #[source]
        source: io::Error,
    },
}

impl AssetError {
    pub fn kind(&self) -> AssetErrorKind {
        match self {
            AssetError::SourceUnavailable { .. } => AssetErrorKind::SourceUnavailable,
            AssetError::TargetUnwritable { .. } => AssetErrorKind::TargetUnwritable,
            AssetError::TransferFailed { .. } => AssetErrorKind::TransferFailed,
        }
    }

    pub fn name(&self) -> &AssetName {
        match self {
            AssetError::SourceUnavailable { name, .. }
            | AssetError::TargetUnwritable { name, .. }
            | AssetError::TransferFailed { name, .. } => name,
        }
    }

    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            AssetError::SourceUnavailable { source, .. }
            | AssetError::TargetUnwritable { source, .. }
            | AssetError::TransferFailed { source, .. } => source,
        }
    }
}

/// Data-only discriminant of [`AssetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetErrorKind {
    SourceUnavailable,
    TargetUnwritable,
    TransferFailed,
}

impl AssetErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetErrorKind::SourceUnavailable => "source_unavailable",
            AssetErrorKind::TargetUnwritable => "target_unwritable",
            AssetErrorKind::TransferFailed => "transfer_failed",
        }
    }
}

impl fmt::Display for AssetErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of one asset
#[derive(Debug)]
pub enum AssetStatus {
    /// Written to the target directory
    Copied { bytes: u64 },
    /// Target already held identical content; nothing was written
    Unchanged,
    /// Not materialized
    Failed(AssetError),
}

/// One manifest entry's result
#[derive(Debug)]
pub struct AssetOutcome {
    pub name: AssetName,
    pub status: AssetStatus,
}

impl AssetOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self.status, AssetStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&AssetError> {
        match &self.status {
            AssetStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of a materialization run
#[derive(Debug)]
pub struct MaterializationReport {
    target: PathBuf,
    outcomes: Vec<AssetOutcome>,
}

impl MaterializationReport {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, name: AssetName, status: AssetStatus) {
        self.outcomes.push(AssetOutcome { name, status });
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Outcomes in manifest order
    pub fn outcomes(&self) -> &[AssetOutcome] {
        &self.outcomes
    }

    pub fn get(&self, name: &str) -> Option<&AssetOutcome> {
        self.outcomes.iter().find(|o| o.name.as_str() == name)
    }

    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, AssetStatus::Copied { .. }))
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, AssetStatus::Unchanged))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssetError> {
        self.outcomes.iter().filter_map(AssetOutcome::error)
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Total bytes written during this run
    pub fn bytes_copied(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                AssetStatus::Copied { bytes } => bytes,
                _ => 0,
            })
            .sum()
    }

    /// True when every manifest entry is available in the target
    pub fn is_complete(&self) -> bool {
        self.failed_count() == 0
    }

    /// One-line summary, e.g. `3 assets: 2 copied, 0 unchanged, 1 failed`
    pub fn summary(&self) -> String {
        format!(
            "{} assets: {} copied, {} unchanged, {} failed",
            self.outcomes.len(),
            self.copied_count(),
            self.unchanged_count(),
            self.failed_count()
        )
    }

    /// Machine-readable form used by `--json`
    pub fn to_json(&self) -> serde_json::Value {
        let assets: Vec<serde_json::Value> = self
            .outcomes
            .iter()
            .map(|o| match &o.status {
                AssetStatus::Copied { bytes } => serde_json::json!({
                    "name": o.name.as_str(),
                    "status": "copied",
                    "bytes": bytes,
                }),
                AssetStatus::Unchanged => serde_json::json!({
                    "name": o.name.as_str(),
                    "status": "unchanged",
                }),
                AssetStatus::Failed(err) => serde_json::json!({
                    "name": o.name.as_str(),
                    "status": "failed",
                    "kind": err.kind(),
                    "error": err.io_error().to_string(),
                }),
            })
            .collect();

        serde_json::json!({
            "target": self.target.display().to_string(),
            "copied": self.copied_count(),
            "unchanged": self.unchanged_count(),
            "failed": self.failed_count(),
            "assets": assets,
        })
    }
}

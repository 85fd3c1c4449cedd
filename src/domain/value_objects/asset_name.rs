//! Asset Name Value Object
//!
//! A validated logical asset name. The name doubles as the relative path of
//! the materialized file inside the target directory, so it must:
//! - be non-empty
//! - be relative (no leading `/`, no drive prefix)
//! - contain no traversal components (`..`)

use std::fmt;
use std::path::{Component, Path};

use crate::error::{StageError, StageResult};

/// Reason an asset name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty
    Empty,
    /// Name is an absolute path
    AbsoluteNotAllowed,
    /// Name contains `..`
    ContainsTraversal,
    /// Name resolves to no file (e.g. `.` or `./`)
    NoFileName,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "name is empty"),
            NameError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            NameError::ContainsTraversal => write!(f, "contains traversal components (..)"),
            NameError::NoFileName => write!(f, "does not name a file"),
        }
    }
}

impl std::error::Error for NameError {}

/// A validated asset name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    /// Validate and wrap a name
    pub fn new(name: impl Into<String>) -> StageResult<Self> {
        let name = name.into();
        match Self::check(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(StageError::InvalidAssetName {
                name,
                reason: reason.to_string(),
            }),
        }
    }

    fn check(name: &str) -> Result<(), NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        let path = Path::new(name);
        if path.is_absolute() || name.starts_with('/') || name.starts_with('\\') {
            return Err(NameError::AbsoluteNotAllowed);
        }

        let mut has_normal = false;
        for component in path.components() {
            match component {
                Component::ParentDir => return Err(NameError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(NameError::AbsoluteNotAllowed)
                }
                Component::CurDir => {}
                Component::Normal(_) => has_normal = true,
            }
        }

        if !has_normal {
            return Err(NameError::NoFileName);
        }
        Ok(())
    }

    /// The name as given
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a relative path
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for AssetName {
    type Error = StageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for AssetName {
    type Error = StageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

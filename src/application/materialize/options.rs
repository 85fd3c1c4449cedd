//! Materialize Options
//!
//! Configuration types for materialize and verify operations.

use std::path::PathBuf;

/// Size of the intermediate copy buffer
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Options for the materialize use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Directory receiving the assets
    pub target: PathBuf,
    /// Copy buffer size in bytes (values below 1 are treated as 1)
    pub buffer_size: usize,
    /// Write through a temp file and rename into place
    pub atomic_writes: bool,
    /// Leave targets whose content hash already matches the source.
    ///
    /// An asset whose target file exists but differs is read from the
    /// source twice: once to hash it and once to copy it.
    pub skip_unchanged: bool,
}

impl MaterializeOptions {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            atomic_writes: true,
            skip_unchanged: false,
        }
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn with_skip_unchanged(mut self, skip_unchanged: bool) -> Self {
        self.skip_unchanged = skip_unchanged;
        self
    }

    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}

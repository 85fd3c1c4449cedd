//! In-memory source store
//!
//! Holds asset bytes in a map. Useful for assets compiled into the binary
//! with `include_bytes!` and for tests.

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};

use crate::domain::ports::SourceStore;
use crate::domain::value_objects::AssetName;

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    assets: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), content.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.assets.remove(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl SourceStore for MemorySource {
    fn open(&self, name: &AssetName) -> io::Result<Box<dyn Read + '_>> {
        match self.assets.get(name.as_str()) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("asset '{}' not in memory store", name),
            )),
        }
    }

    fn describe(&self) -> String {
        format!("memory ({} assets)", self.assets.len())
    }
}

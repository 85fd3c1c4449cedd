//! Directory-backed source store
//!
//! Serves assets from a directory holding the unpacked bundle. Each open
//! returns a fresh `File`; the caller owns and drops it.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::domain::ports::SourceStore;
use crate::domain::value_objects::AssetName;

#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceStore for DirSource {
    fn open(&self, name: &AssetName) -> io::Result<Box<dyn Read + '_>> {
        let path = self.root.join(name.as_path());
        // A directory with the asset's name opens fine on Unix but is not an asset.
        if path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is a directory", path.display()),
            ));
        }
        let file = File::open(&path)?;
        Ok(Box::new(file))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

//! SourceStore port - read-only origin of bundled assets
//!
//! The materializer never owns the source; it only opens one stream per
//! asset and drops it before moving on.

use std::io::{self, Read};

use crate::domain::value_objects::AssetName;

/// Read-only key → byte-stream provider
///
/// Implementations:
/// - `DirSource` - assets unpacked in a directory
/// - `MemorySource` - bytes held in memory
pub trait SourceStore {
    /// Open a stream for `name`.
    ///
    /// An absent asset is reported as `io::ErrorKind::NotFound`.
    fn open(&self, name: &AssetName) -> io::Result<Box<dyn Read + '_>>;

    /// Human-readable description for diagnostics
    fn describe(&self) -> String;
}

impl<S: SourceStore + ?Sized> SourceStore for &S {
    fn open(&self, name: &AssetName) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

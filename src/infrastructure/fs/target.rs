//! Target directory writer
//!
//! Creates one regular file per asset under the target directory.
//!
//! Two write modes:
//! - atomic: bytes go to a sibling temp file that is renamed over the
//!   destination on commit; a discarded write leaves the old file untouched
//! - direct: the destination is created/truncated in place and removed
//!   again if the write is discarded

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::value_objects::{AssetName, ContentHash};

const TEMP_PREFIX: &str = ".assetstage-";
const TEMP_SUFFIX: &str = ".tmp";

/// Writable directory receiving materialized assets
#[derive(Debug, Clone)]
pub struct TargetDir {
    root: PathBuf,
    atomic: bool,
}

impl TargetDir {
    pub fn new(root: impl Into<PathBuf>, atomic: bool) -> Self {
        Self {
            root: root.into(),
            atomic,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    /// Destination path of an asset
    pub fn path_of(&self, name: &AssetName) -> PathBuf {
        self.root.join(name.as_path())
    }

    /// Make sure the directory exists
    pub fn prepare(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        if !self.root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", self.root.display()),
            ));
        }
        Ok(())
    }

    /// Open a write stream for an asset
    pub fn create(&self, name: &AssetName) -> io::Result<TargetFile> {
        let dest = self.path_of(name);
        let parent = dest.parent().unwrap_or(&self.root).to_path_buf();
        if parent != self.root {
            fs::create_dir_all(&parent)?;
        }

        let sink = if self.atomic {
            let temp = temp_builder().tempfile_in(&parent)?;
            inherit_permissions(&temp, &dest)?;
            Sink::Atomic(temp)
        } else {
            Sink::Direct(File::create(&dest)?)
        };

        Ok(TargetFile { sink, dest })
    }

    /// Hash of the file currently materialized for `name`, if any.
    ///
    /// `None` when nothing exists at the path; an error when something
    /// exists but cannot be read as a file.
    pub fn existing_hash(
        &self,
        name: &AssetName,
        buffer_size: usize,
    ) -> io::Result<Option<ContentHash>> {
        let path = self.path_of(name);
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(_) if !path.exists() => return Ok(None),
            Err(e) => return Err(e),
        };
        ContentHash::from_reader(&mut file, buffer_size).map(Some)
    }
}

#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    // Same mode File::create asks for; the umask still applies
    builder
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);
    builder
}

/// A replaced file keeps its mode
#[cfg(unix)]
fn inherit_permissions(temp: &NamedTempFile, dest: &Path) -> io::Result<()> {
    match fs::metadata(dest) {
        Ok(existing) if existing.is_file() => temp.as_file().set_permissions(existing.permissions()),
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
fn inherit_permissions(_temp: &NamedTempFile, _dest: &Path) -> io::Result<()> {
    Ok(())
}

enum Sink {
    Atomic(NamedTempFile),
    Direct(File),
}

/// An in-progress asset write; finish with [`commit`](Self::commit) or
/// [`discard`](Self::discard).
pub struct TargetFile {
    sink: Sink,
    dest: PathBuf,
}

impl TargetFile {
    pub fn destination(&self) -> &Path {
        &self.dest
    }

    /// Make the written bytes visible at the destination path
    pub fn commit(mut self) -> io::Result<()> {
        self.flush()?;
        match self.sink {
            Sink::Atomic(temp) => {
                temp.persist(&self.dest).map_err(|e| e.error)?;
                Ok(())
            }
            Sink::Direct(_file) => Ok(()),
        }
    }

    /// Abandon the write so no partial file is left behind
    pub fn discard(self) {
        match self.sink {
            // NamedTempFile removes itself on drop
            Sink::Atomic(temp) => drop(temp),
            Sink::Direct(file) => {
                drop(file);
                if let Err(e) = fs::remove_file(&self.dest) {
                    log::debug!(
                        "could not remove partial file {}: {}",
                        self.dest.display(),
                        e
                    );
                }
            }
        }
    }
}

impl Write for TargetFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.sink {
            Sink::Atomic(temp) => temp.write(buf),
            Sink::Direct(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Sink::Atomic(temp) => temp.flush(),
            Sink::Direct(file) => file.flush(),
        }
    }
}

//! Materialize Use Case
//!
//! Copies every manifest entry from the source store into the target
//! directory, one asset at a time, in manifest order:
//! 1. Open the source stream
//! 2. Open the target stream
//! 3. Copy through a fixed-size buffer
//! 4. Commit (or discard) the target file
//! 5. Record the outcome
//!
//! A failing asset never stops the run.

use std::io::{self, Read, Write};

use crate::domain::entities::{AssetError, AssetStatus, Manifest, MaterializationReport};
use crate::domain::ports::{MaterializeEvent, MaterializeEventSink, NoopEventSink, SourceStore};
use crate::domain::value_objects::{AssetName, ContentHash};
use crate::infrastructure::fs::TargetDir;

use super::options::MaterializeOptions;

/// Materialize use case, parameterized by its source store
pub struct MaterializeUseCase<S: SourceStore> {
    source: S,
}

impl<S: SourceStore> MaterializeUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Execute without event reporting
    pub fn execute(&self, manifest: &Manifest, options: &MaterializeOptions) -> MaterializationReport {
        self.execute_with_events(manifest, options, &NoopEventSink)
    }

    /// Execute, emitting an event per step
    pub fn execute_with_events(
        &self,
        manifest: &Manifest,
        options: &MaterializeOptions,
        events: &dyn MaterializeEventSink,
    ) -> MaterializationReport {
        let target = TargetDir::new(&options.target, options.atomic_writes);
        let mut report = MaterializationReport::new(&options.target);

        events.on_event(MaterializeEvent::Started {
            source: self.source.describe(),
            target: options.target.clone(),
            asset_count: manifest.len(),
        });

        let prepared = target.prepare();
        let mut buffer = vec![0u8; options.effective_buffer_size()];

        for (index, name) in manifest.iter().enumerate() {
            if events.wants_detailed_events() {
                events.on_event(MaterializeEvent::AssetStarted {
                    index,
                    name: name.to_string(),
                });
            }

            let status = match &prepared {
                Ok(()) => self.materialize_one(name, &target, options, &mut buffer),
                Err(e) => AssetStatus::Failed(AssetError::TargetUnwritable {
                    name: name.clone(),
                    source: io::Error::new(e.kind(), e.to_string()),
                }),
            };

            emit_outcome(events, index, name, &status);
            report.record(name.clone(), status);
        }

        events.on_event(MaterializeEvent::Completed {
            copied_count: report.copied_count(),
            unchanged_count: report.unchanged_count(),
            failed_count: report.failed_count(),
        });

        report
    }

    fn materialize_one(
        &self,
        name: &AssetName,
        target: &TargetDir,
        options: &MaterializeOptions,
        buffer: &mut [u8],
    ) -> AssetStatus {
        if options.skip_unchanged {
            match self.is_unchanged(name, target, buffer.len()) {
                Ok(true) => return AssetStatus::Unchanged,
                Ok(false) => {}
                Err(e) => log::debug!("could not compare {}: {}", name, e),
            }
        }

        let mut reader = match self.source.open(name) {
            Ok(reader) => reader,
            Err(source) => {
                return AssetStatus::Failed(AssetError::SourceUnavailable {
                    name: name.clone(),
                    source,
                })
            }
        };

        let mut writer = match target.create(name) {
            Ok(writer) => writer,
            Err(source) => {
                return AssetStatus::Failed(AssetError::TargetUnwritable {
                    name: name.clone(),
                    source,
                })
            }
        };

        match copy_buffered(&mut reader, &mut writer, buffer) {
            Ok(bytes) => match writer.commit() {
                Ok(()) => AssetStatus::Copied { bytes },
                Err(source) => AssetStatus::Failed(AssetError::TargetUnwritable {
                    name: name.clone(),
                    source,
                }),
            },
            Err(source) => {
                writer.discard();
                AssetStatus::Failed(AssetError::TransferFailed {
                    name: name.clone(),
                    source,
                })
            }
        }
    }

    /// True when the target already holds the source's exact bytes.
    ///
    /// Hashes the whole source stream, so a changed asset costs an extra
    /// source read before the copy. Skipped entirely when there is no
    /// target file yet. A missing source counts as changed so the copy
    /// path reports it.
    fn is_unchanged(
        &self,
        name: &AssetName,
        target: &TargetDir,
        buffer_size: usize,
    ) -> io::Result<bool> {
        let Some(existing) = target.existing_hash(name, buffer_size)? else {
            return Ok(false);
        };
        let mut reader = match self.source.open(name) {
            Ok(reader) => reader,
            Err(_) => return Ok(false),
        };
        let incoming = ContentHash::from_reader(&mut reader, buffer_size)?;
        Ok(existing == incoming)
    }
}

fn emit_outcome(
    events: &dyn MaterializeEventSink,
    index: usize,
    name: &AssetName,
    status: &AssetStatus,
) {
    let event = match status {
        AssetStatus::Copied { bytes } => {
            if !events.wants_detailed_events() {
                return;
            }
            MaterializeEvent::AssetCopied {
                index,
                name: name.to_string(),
                bytes: *bytes,
            }
        }
        AssetStatus::Unchanged => {
            if !events.wants_detailed_events() {
                return;
            }
            MaterializeEvent::AssetUnchanged {
                index,
                name: name.to_string(),
            }
        }
        // Failures are always reported, even to summary-only sinks
        AssetStatus::Failed(err) => MaterializeEvent::AssetFailed {
            index,
            name: name.to_string(),
            kind: err.kind(),
            error: err.io_error().to_string(),
        },
    };
    events.on_event(event);
}

/// Copy `reader` into `writer` through `buffer`, returning the byte count.
pub fn copy_buffered<R, W>(reader: &mut R, writer: &mut W, buffer: &mut [u8]) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut total = 0u64;
    loop {
        let n = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..n])?;
        total += n as u64;
    }
    writer.flush()?;
    Ok(total)
}

/// Materialize `manifest` from `source` into `target_dir` with default options.
pub fn materialize<S: SourceStore>(
    manifest: &Manifest,
    source: S,
    target_dir: impl Into<std::path::PathBuf>,
) -> MaterializationReport {
    MaterializeUseCase::new(source).execute(manifest, &MaterializeOptions::new(target_dir))
}

//! Verify Use Case
//!
//! Checks that each materialized file still matches its source by content
//! hash. Read-only: never touches the target directory.

use crate::domain::entities::{Manifest, VerificationReport, VerifyStatus};
use crate::domain::ports::SourceStore;
use crate::domain::value_objects::{AssetName, ContentHash};
use crate::infrastructure::fs::TargetDir;

use super::materialize::MaterializeOptions;

pub struct VerifyUseCase<S: SourceStore> {
    source: S,
}

impl<S: SourceStore> VerifyUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, manifest: &Manifest, options: &MaterializeOptions) -> VerificationReport {
        let target = TargetDir::new(&options.target, options.atomic_writes);
        let buffer_size = options.effective_buffer_size();

        let mut report = VerificationReport::new();
        for name in manifest {
            report.record(name.clone(), self.verify_one(name, &target, buffer_size));
        }
        report
    }

    fn verify_one(&self, name: &AssetName, target: &TargetDir, buffer_size: usize) -> VerifyStatus {
        let expected = match self
            .source
            .open(name)
            .and_then(|mut reader| ContentHash::from_reader(&mut reader, buffer_size))
        {
            Ok(hash) => hash,
            Err(e) => {
                log::debug!("cannot read source for {}: {}", name, e);
                return VerifyStatus::SourceUnavailable;
            }
        };

        match target.existing_hash(name, buffer_size) {
            Ok(Some(actual)) if actual == expected => VerifyStatus::Match,
            Ok(Some(actual)) => VerifyStatus::Mismatch { expected, actual },
            Ok(None) => VerifyStatus::MissingTarget,
            Err(e) => {
                log::debug!("cannot read target for {}: {}", name, e);
                VerifyStatus::UnreadableTarget {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Verify with the default buffer size
pub fn verify<S: SourceStore>(
    manifest: &Manifest,
    source: S,
    target_dir: impl Into<std::path::PathBuf>,
) -> VerificationReport {
    VerifyUseCase::new(source).execute(manifest, &MaterializeOptions::new(target_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemorySource;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reports_each_state() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("same.txt"), b"same").unwrap();
        fs::write(dir.path().join("edited.txt"), b"edited locally").unwrap();

        let source = MemorySource::new()
            .with("same.txt", "same")
            .with("edited.txt", "original")
            .with("absent.txt", "never copied");
        let manifest =
            Manifest::new(["same.txt", "edited.txt", "absent.txt", "unknown.txt"]).unwrap();

        let report = verify(&manifest, &source, dir.path());

        assert_eq!(report.status_of("same.txt"), Some(&VerifyStatus::Match));
        assert_eq!(
            report.status_of("edited.txt"),
            Some(&VerifyStatus::Mismatch {
                expected: ContentHash::from_bytes(b"original"),
                actual: ContentHash::from_bytes(b"edited locally"),
            })
        );
        assert_eq!(
            report.status_of("absent.txt"),
            Some(&VerifyStatus::MissingTarget)
        );
        assert_eq!(
            report.status_of("unknown.txt"),
            Some(&VerifyStatus::SourceUnavailable)
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn unreadable_target_is_not_reported_missing() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a.txt")).unwrap();
        let source = MemorySource::new().with("a.txt", "a");
        let manifest = Manifest::new(["a.txt"]).unwrap();

        let report = verify(&manifest, &source, dir.path());

        assert!(matches!(
            report.status_of("a.txt"),
            Some(VerifyStatus::UnreadableTarget { .. })
        ));
        assert!(!report.is_clean());
    }
}

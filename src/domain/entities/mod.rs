//! Domain Entities
//!
//! Core domain objects: the manifest being materialized and the reports
//! produced by materialization and verification.

mod manifest;
mod report;
mod verification;

pub use manifest::{Manifest, DEFAULT_ASSETS};
pub use report::{AssetError, AssetErrorKind, AssetOutcome, AssetStatus, MaterializationReport};
pub use verification::{VerificationReport, VerifyEntry, VerifyStatus};

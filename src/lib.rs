//! assetstage - bundled asset materializer
//!
//! Copies a manifest of read-only bundled assets (textures, fonts, ...) into a
//! writable directory so a dependent program can open them with plain file
//! APIs, then hands that directory to the program as its startup argument.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    handoff_path, materialize, verify, Launcher, MaterializeOptions, MaterializeUseCase,
    VerifyUseCase,
};
pub use config::Config;
pub use domain::entities::{
    AssetError, AssetErrorKind, AssetStatus, Manifest, MaterializationReport, VerificationReport,
    VerifyStatus,
};
pub use domain::ports::SourceStore;
pub use domain::value_objects::AssetName;
pub use error::{StageError, StageResult};
pub use infrastructure::{DirSource, MemorySource};

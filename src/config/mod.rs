//! Configuration module for assetstage
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETSTAGE_*)
//! 3. Config file (`assetstage.toml` or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, EnvWarning};
pub use types::{
    Config, ManifestConfig, OutputConfig, SourceConfig, TargetConfig, TransferConfig, Verbosity,
    CONFIG_FILE_NAME, DEFAULT_SOURCE_DIR,
};

//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::materialize::{MaterializeOptions, DEFAULT_BUFFER_SIZE};
use crate::domain::entities::Manifest;
use crate::error::{StageError, StageResult};
use crate::infrastructure::fs::expand_home;

use super::loader::{self, ConfigWarning, EnvWarning};

/// Where bundled assets are read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Where assets are materialized
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Which assets to materialize
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Overrides the built-in asset list when present
    #[serde(default)]
    pub assets: Option<Vec<String>>,
}

/// Copy behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,

    #[serde(default)]
    pub skip_unchanged: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            atomic_writes: true,
            skip_unchanged: false,
        }
    }
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default `log` filter for this verbosity
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "assetstage.toml";

/// Source directory used when none is configured
pub const DEFAULT_SOURCE_DIR: &str = "assets";

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `assetstage.toml` from `dir` if present, else defaults
    pub fn load_or_default(dir: &Path) -> StageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(dir)
    }

    /// Apply environment variable overrides (ASSETSTAGE_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<EnvWarning>) {
        loader::with_env_overrides(self)
    }

    /// The configured manifest, or the built-in one
    pub fn manifest(&self) -> StageResult<Manifest> {
        match &self.manifest.assets {
            Some(names) => Manifest::new(names.iter().cloned()),
            None => Ok(Manifest::builtin()),
        }
    }

    /// Source directory with `~` expanded
    pub fn source_dir(&self) -> PathBuf {
        let path = self
            .source
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
        expand_home(&path)
    }

    /// Target directory with `~` expanded
    ///
    /// Defaults to `<local data dir>/assetstage`, or `files` when the
    /// platform has no data directory.
    pub fn target_dir(&self) -> PathBuf {
        match &self.target.path {
            Some(path) => expand_home(path),
            None => dirs::data_local_dir()
                .map(|d| d.join("assetstage"))
                .unwrap_or_else(|| PathBuf::from("files")),
        }
    }

    /// Options for the materialize use case
    pub fn materialize_options(&self) -> StageResult<MaterializeOptions> {
        if self.transfer.buffer_size == 0 {
            return Err(StageError::InvalidValue {
                key: "transfer.buffer_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(MaterializeOptions::new(self.target_dir())
            .with_buffer_size(self.transfer.buffer_size)
            .with_atomic_writes(self.transfer.atomic_writes)
            .with_skip_unchanged(self.transfer.skip_unchanged))
    }
}

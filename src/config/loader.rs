//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StageError, StageResult};

use super::types::{Config, Verbosity, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// An environment override that was present but could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: String,
    pub value: String,
    pub expected: &'static str,
}

impl EnvWarning {
    fn new(var: &str, value: &str, expected: &'static str) -> Self {
        Self {
            var: var.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StageResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> StageResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StageError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `assetstage.toml` from `dir`, falling back to defaults when absent.
///
/// A present but malformed file is an error.
pub fn load_or_default(dir: &Path) -> StageResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_with_warnings(&path)
    } else {
        Ok((Config::default(), Vec::new()))
    }
}

/// Apply environment variable overrides (ASSETSTAGE_* prefix)
///
/// Values that cannot be parsed leave the setting untouched and come back
/// as warnings.
pub fn with_env_overrides(config: Config) -> (Config, Vec<EnvWarning>) {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> (Config, Vec<EnvWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(source) = lookup("ASSETSTAGE_SOURCE") {
        config.source.path = Some(PathBuf::from(source));
    }

    if let Some(target) = lookup("ASSETSTAGE_TARGET") {
        config.target.path = Some(PathBuf::from(target));
    }

    if let Some(size) = lookup("ASSETSTAGE_BUFFER_SIZE") {
        match size.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.transfer.buffer_size = n,
            _ => warnings.push(EnvWarning::new(
                "ASSETSTAGE_BUFFER_SIZE",
                &size,
                "a positive byte count",
            )),
        }
    }

    if let Some(val) = lookup("ASSETSTAGE_ATOMIC_WRITES") {
        config.transfer.atomic_writes = parse_flag(&val);
    }

    if let Some(val) = lookup("ASSETSTAGE_SKIP_UNCHANGED") {
        config.transfer.skip_unchanged = parse_flag(&val);
    }

    if let Some(verbosity) = lookup("ASSETSTAGE_VERBOSITY") {
        match verbosity.to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            "debug" => config.output.verbosity = Verbosity::Debug,
            _ => warnings.push(EnvWarning::new(
                "ASSETSTAGE_VERBOSITY",
                &verbosity,
                "quiet, normal, verbose or debug",
            )),
        }
    }

    (config, warnings)
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "target",
        "path",
        "manifest",
        "assets",
        "transfer",
        "buffer_size",
        "atomic_writes",
        "skip_unchanged",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

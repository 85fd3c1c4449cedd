//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests point
//! `ASSETSTAGE_TEST_HOME` at a temp directory instead.

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of home directory.
pub const TEST_HOME_VAR: &str = "ASSETSTAGE_TEST_HOME";

/// Home directory used for `~` expansion in configured paths.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var(TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// Paths without a leading tilde, and all paths when no home directory can
/// be resolved, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };

    if s == "~" {
        return home_dir().unwrap_or_else(|| path.to_path_buf());
    }

    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}

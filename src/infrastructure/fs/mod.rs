//! File System Implementations
//!
//! Target directory writer and path helpers.

mod home;
mod target;

pub use home::{expand_home, home_dir, TEST_HOME_VAR};
pub use target::{TargetDir, TargetFile};

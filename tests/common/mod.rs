//! Common test utilities for assetstage CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory with `assets/` and `files/`
//! - Fixtures: Reusable test content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

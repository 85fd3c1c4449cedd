//! Application Layer
//!
//! Use cases that orchestrate the startup flow.
//!
//! ## Use Cases
//!
//! - `MaterializeUseCase` - Copy manifest assets into the target directory
//! - `VerifyUseCase` - Compare the target directory against the source
//! - `Launcher` - Hand the target directory to the dependent program

pub mod launch;
pub mod materialize;
pub mod verify;

pub use launch::{handoff_path, Launcher};
pub use materialize::{
    copy_buffered, materialize, MaterializeOptions, MaterializeUseCase, DEFAULT_BUFFER_SIZE,
};
pub use verify::{verify, VerifyUseCase};

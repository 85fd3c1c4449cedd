//! Materialize Module
//!
//! Copies bundled assets into a writable directory.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`MaterializeOptions`)
//! - `use_case` - Core use case logic (`MaterializeUseCase`)
//!
//! ## Usage
//!
//! ```no_run
//! use assetstage::application::materialize::{MaterializeOptions, MaterializeUseCase};
//! use assetstage::domain::entities::Manifest;
//! use assetstage::infrastructure::DirSource;
//!
//! let use_case = MaterializeUseCase::new(DirSource::new("assets"));
//! let report = use_case.execute(&Manifest::builtin(), &MaterializeOptions::new("files"));
//! for err in report.failures() {
//!     eprintln!("{}", err);
//! }
//! ```

mod options;
mod use_case;

pub use options::{MaterializeOptions, DEFAULT_BUFFER_SIZE};
pub use use_case::{copy_buffered, materialize, MaterializeUseCase};

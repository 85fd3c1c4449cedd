//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `source/` - Source stores (directory, memory)
//! - `fs/` - Target directory writer, home expansion
//! - `events/` - Event sinks (log, JSON)

pub mod events;
pub mod fs;
pub mod source;

// Re-export for convenience
pub use events::{JsonEventSink, LogEventSink};
pub use fs::TargetDir;
pub use source::{DirSource, MemorySource};

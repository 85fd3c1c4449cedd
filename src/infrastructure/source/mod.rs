//! Source Store Implementations
//!
//! Concrete implementations of the SourceStore port.

mod dir;
mod memory;

pub use dir::DirSource;
pub use memory::MemorySource;

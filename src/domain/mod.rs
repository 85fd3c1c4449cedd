//! Domain Layer
//!
//! Pure types and interfaces, no file system access.
//!
//! ## Structure
//!
//! - `entities/` - Manifest and the materialization/verification reports
//! - `value_objects/` - Immutable value types (AssetName, ContentHash)
//! - `ports/` - Interface definitions for infrastructure (SourceStore, event sinks)

pub mod entities;
pub mod ports;
pub mod value_objects;

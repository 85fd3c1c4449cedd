//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_name;
mod hash;

pub use asset_name::{AssetName, NameError};
pub use hash::ContentHash;

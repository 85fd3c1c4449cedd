//! Property tests for assetstage.
//!
//! Properties use randomized input generation to protect the core copy
//! guarantees: byte-identical output, isolation of per-asset failures and
//! idempotence.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/asset_names.rs"]
mod asset_names;

#[path = "properties/materialize.rs"]
mod materialize;

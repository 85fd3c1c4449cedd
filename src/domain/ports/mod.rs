//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod materialize_events;
pub mod source_store;

pub use materialize_events::{
    FanoutEventSink, MaterializeEvent, MaterializeEventSink, NoopEventSink,
};
pub use source_store::SourceStore;

//! Event Sink Implementations
//!
//! Provides concrete implementations of MaterializeEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - LogEventSink: diagnostics through the `log` facade

mod json;
mod logging;

pub use json::JsonEventSink;
pub use logging::LogEventSink;

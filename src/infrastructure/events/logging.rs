//! Log Event Sink
//!
//! Routes materialize events to the `log` facade. This is the diagnostic
//! channel for per-asset failures: every failure becomes a `warn!` line
//! carrying the asset name and cause.

use log::{debug, info, warn};

use crate::domain::ports::{MaterializeEvent, MaterializeEventSink};

const TARGET: &str = "assetstage::materialize";

#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl MaterializeEventSink for LogEventSink {
    fn on_event(&self, event: MaterializeEvent) {
        match event {
            MaterializeEvent::Started {
                source,
                target,
                asset_count,
            } => info!(
                target: TARGET,
                "copying {} assets from {} to {}",
                asset_count,
                source,
                target.display()
            ),
            MaterializeEvent::AssetStarted { index, name } => {
                debug!(target: TARGET, "[{}] copying {}", index, name)
            }
            MaterializeEvent::AssetCopied { index, name, bytes } => {
                debug!(target: TARGET, "[{}] copied {} ({} bytes)", index, name, bytes)
            }
            MaterializeEvent::AssetUnchanged { index, name } => {
                debug!(target: TARGET, "[{}] {} unchanged", index, name)
            }
            MaterializeEvent::AssetFailed {
                index,
                name,
                kind,
                error,
            } => warn!(
                target: TARGET,
                "[{}] could not materialize {} ({}): {}", index, name, kind, error
            ),
            MaterializeEvent::Completed {
                copied_count,
                unchanged_count,
                failed_count,
            } => info!(
                target: TARGET,
                "done: {} copied, {} unchanged, {} failed",
                copied_count,
                unchanged_count,
                failed_count
            ),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        log::log_enabled!(target: TARGET, log::Level::Warn)
    }
}

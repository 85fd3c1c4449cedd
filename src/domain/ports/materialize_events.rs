//! Materialize Event Port
//!
//! Observable interface for materialization runs. Sinks turn events into
//! log lines, NDJSON, or nothing at all.

use std::path::PathBuf;

use crate::domain::entities::AssetErrorKind;

/// Event emitted during materialization
#[derive(Debug, Clone, PartialEq)]
pub enum MaterializeEvent {
    /// Run started
    Started {
        source: String,
        target: PathBuf,
        asset_count: usize,
    },

    /// Asset copy started
    AssetStarted { index: usize, name: String },

    /// Asset written to the target directory
    AssetCopied {
        index: usize,
        name: String,
        bytes: u64,
    },

    /// Asset already up to date
    AssetUnchanged { index: usize, name: String },

    /// Asset could not be materialized
    AssetFailed {
        index: usize,
        name: String,
        kind: AssetErrorKind,
        error: String,
    },

    /// Run finished
    Completed {
        copied_count: usize,
        unchanged_count: usize,
        failed_count: usize,
    },
}

/// Trait for receiving materialize events
///
/// Implementations:
/// - LogEventSink: diagnostics through the `log` facade
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait MaterializeEventSink {
    /// Handle a materialize event
    fn on_event(&self, event: MaterializeEvent);

    /// Check if this sink wants per-asset events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl MaterializeEventSink for NoopEventSink {
    fn on_event(&self, _event: MaterializeEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Fans events out to several sinks
pub struct FanoutEventSink<'a> {
    sinks: Vec<&'a dyn MaterializeEventSink>,
}

impl<'a> FanoutEventSink<'a> {
    pub fn new(sinks: Vec<&'a dyn MaterializeEventSink>) -> Self {
        Self { sinks }
    }
}

impl MaterializeEventSink for FanoutEventSink<'_> {
    fn on_event(&self, event: MaterializeEvent) {
        for sink in &self.sinks {
            let detailed = !matches!(
                event,
                MaterializeEvent::Started { .. } | MaterializeEvent::Completed { .. }
            );
            if detailed && !sink.wants_detailed_events() {
                continue;
            }
            sink.on_event(event.clone());
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.sinks.iter().any(|s| s.wants_detailed_events())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<MaterializeEvent>>>,
        detailed: bool,
    }

    impl RecordingEventSink {
        fn new(detailed: bool) -> (Self, Arc<Mutex<Vec<MaterializeEvent>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                    detailed,
                },
                events,
            )
        }
    }

    impl MaterializeEventSink for RecordingEventSink {
        fn on_event(&self, event: MaterializeEvent) {
            self.events.lock().unwrap().push(event);
        }

        fn wants_detailed_events(&self) -> bool {
            self.detailed
        }
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }

    #[test]
    fn fanout_respects_detail_preference() {
        let (detailed, detailed_events) = RecordingEventSink::new(true);
        let (summary, summary_events) = RecordingEventSink::new(false);
        let sinks: Vec<&dyn MaterializeEventSink> = vec![&detailed, &summary];
        let fanout = FanoutEventSink::new(sinks);

        fanout.on_event(MaterializeEvent::AssetStarted {
            index: 0,
            name: "a.txt".to_string(),
        });
        fanout.on_event(MaterializeEvent::Completed {
            copied_count: 1,
            unchanged_count: 0,
            failed_count: 0,
        });

        assert_eq!(detailed_events.lock().unwrap().len(), 2);
        assert_eq!(summary_events.lock().unwrap().len(), 1);
    }
}

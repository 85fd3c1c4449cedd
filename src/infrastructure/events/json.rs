//! JSON Event Sink
//!
//! Outputs materialize events as NDJSON for CI/automation consumption.

use crate::domain::ports::{MaterializeEvent, MaterializeEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl MaterializeEventSink for JsonEventSink {
    fn on_event(&self, event: MaterializeEvent) {
        let json = match event {
            MaterializeEvent::Started {
                source,
                target,
                asset_count,
            } => serde_json::json!({
                "event": "start",
                "command": "materialize",
                "source": source,
                "target": target.display().to_string(),
                "asset_count": asset_count,
            }),

            MaterializeEvent::AssetStarted { index, name } => serde_json::json!({
                "event": "item_start",
                "command": "materialize",
                "index": index,
                "name": name,
            }),

            MaterializeEvent::AssetCopied { index, name, bytes } => serde_json::json!({
                "event": "item_copied",
                "command": "materialize",
                "index": index,
                "name": name,
                "bytes": bytes,
            }),

            MaterializeEvent::AssetUnchanged { index, name } => serde_json::json!({
                "event": "item_unchanged",
                "command": "materialize",
                "index": index,
                "name": name,
            }),

            MaterializeEvent::AssetFailed {
                index,
                name,
                kind,
                error,
            } => serde_json::json!({
                "event": "item_error",
                "command": "materialize",
                "index": index,
                "name": name,
                "kind": kind,
                "error": error,
            }),

            MaterializeEvent::Completed {
                copied_count,
                unchanged_count,
                failed_count,
            } => {
                let status = if failed_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "materialize",
                    "status": status,
                    "copied": copied_count,
                    "unchanged": unchanged_count,
                    "failed": failed_count,
                })
            }
        };

        self.write_event(json);
    }
}

//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
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

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                css_sections,
                js_sections,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "build",
                    "css_sections": css_sections,
                    "js_sections": js_sections,
                })
            }

            BuildEvent::SectionResolved {
                section,
                parent,
                local_files,
                remote_files,
            } => {
                serde_json::json!({
                    "event": "section_resolved",
                    "command": "build",
                    "section": section.to_string(),
                    "parent": parent,
                    "local_files": local_files,
                    "remote_files": remote_files,
                })
            }

            BuildEvent::RegistryCollision {
                key,
                previous,
                current,
            } => {
                serde_json::json!({
                    "event": "registry_collision",
                    "command": "build",
                    "key": key,
                    "previous": previous.to_string(),
                    "current": current.to_string(),
                })
            }

            BuildEvent::Completed { pipeline_count } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "build",
                    "status": "success",
                    "pipelines": pipeline_count,
                })
            }
        };

        self.write_event(json);
    }
}

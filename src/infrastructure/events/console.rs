//! Console Event Sink
//!
//! Human-readable build progress on stderr. Per-section lines only show up
//! with `-v`; collisions are always reported.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    verbose: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: u8) -> Self {
        Self::with_writer(verbose, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbose: u8, writer: W) -> Self {
        Self {
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                css_sections,
                js_sections,
            } if self.verbose > 0 => self.line(format!(
                "Building {} css and {} js section(s)",
                css_sections, js_sections
            )),
            BuildEvent::SectionResolved {
                section,
                parent,
                local_files,
                remote_files,
            } if self.verbose > 0 => {
                let inherits = parent
                    .map(|p| format!(" (extends {})", p))
                    .unwrap_or_default();
                self.line(format!(
                    "  {}{}: {} local, {} remote",
                    section, inherits, local_files, remote_files
                ));
            }
            BuildEvent::RegistryCollision {
                key,
                previous,
                current,
            } => self.line(format!(
                "Warning: loader '{}' from {} replaced by {}",
                key, previous, current
            )),
            BuildEvent::Completed { pipeline_count } if self.verbose > 0 => {
                self.line(format!("Built {} pipeline(s)", pipeline_count))
            }
            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}

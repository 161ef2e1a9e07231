//! Build Event Port
//!
//! Provides an observable interface for pipeline builds.
//! Enables progress reporting, JSON event streams, and debugging.

use crate::domain::value_objects::SectionId;

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Build started
    Started {
        css_sections: usize,
        js_sections: usize,
    },

    /// A section was resolved into a pipeline
    SectionResolved {
        section: SectionId,
        parent: Option<String>,
        local_files: usize,
        remote_files: usize,
    },

    /// Two sections published the same loader name; the later one wins
    RegistryCollision {
        key: String,
        previous: SectionId,
        current: SectionId,
    },

    /// Build completed
    Completed { pipeline_count: usize },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-section events
    ///
    /// Some sinks only want summary events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

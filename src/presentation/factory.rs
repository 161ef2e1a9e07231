//! Use case factory
//!
//! Wires use cases to their infrastructure implementations.

use crate::application::BuildUseCase;
use crate::domain::ports::BuildEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};

/// Build use case backed by the local filesystem
pub fn create_build_use_case() -> BuildUseCase<LocalFs> {
    BuildUseCase::new(LocalFs::new())
}

/// NDJSON on stdout in `--json` mode, otherwise progress lines on stderr
pub fn create_event_sink(json: bool, verbose: u8) -> Box<dyn BuildEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stderr(verbose))
    }
}

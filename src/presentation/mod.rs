//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases and event sinks (dependency injection)
//! - `output` - Text and NDJSON rendering of build results
//!
//! ## Usage
//!
//! ```ignore
//! use assetpack::presentation::factory;
//!
//! let use_case = factory::create_build_use_case();
//! let output = use_case.execute(&loaded.config, &loaded.defaults)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_build_use_case, create_event_sink};
pub use output::OutputFormat;

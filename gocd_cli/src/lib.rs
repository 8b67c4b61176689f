//! # gocd-cli
//!
//! Command layer foundation for the `gocd` command-line tool.
//!
//! Every concrete command implements [`Command`]: it declares its usage text,
//! a one-line summary and a [`CallShape`] describing how it is called. From
//! that static declaration the crate renders usage text on demand, and gives
//! each command a uniform [`ResultEnvelope`] to hand back to the dispatcher.
//!
//! ## Quick Start
//!
//! ```rust
//! use gocd_cli::{CallShape, Command};
//!
//! struct RetriggerPipeline;
//!
//! impl Command for RetriggerPipeline {
//!     const NAME: &'static str = "RetriggerPipeline";
//!     const USAGE: Option<&'static str> = Some(
//!         "
//!         Schedules a new run of the named pipeline.
//!
//!         Example:
//!             gocd pipeline retrigger-pipeline Build-Linux
//!         ",
//!     );
//!     const USAGE_SUMMARY: Option<&'static str> = Some("Schedule a new pipeline run");
//!     const SHAPE: CallShape = CallShape::new().positional(&["name"]);
//! }
//!
//! assert_eq!(
//!     RetriggerPipeline::get_call_documentation(),
//!     "retrigger-pipeline <name>"
//! );
//! assert!(RetriggerPipeline::get_usage().unwrap().ends_with("Build-Linux\n"));
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Command trait, call shapes, outcomes and result envelopes.
pub mod command;

/// Errors raised while rendering command documentation.
pub mod error;

/// Name lookup over registered command types for help output.
pub mod registry;

/// Dasherization and usage text cleaning.
pub mod utils;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{
    CallShape, Command, CommandInfo, GENERIC_FAILURE_EXIT_CODE, KEYWORD_PLACEHOLDER, Outcome,
    ResultEnvelope, SUCCESS_EXIT_CODE,
};
pub use error::CommandError;
pub use registry::Registry;
pub use utils::{clean_usage, dasherize_name};

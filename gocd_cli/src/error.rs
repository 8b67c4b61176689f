//! Error taxonomy for the command layer.
//!
//! Only one kind of failure originates here: a command type that forgot to
//! declare one of its documentation strings. It is a static misconfiguration,
//! so callers surface it rather than retry.

use thiserror::Error;

/// Errors raised by the command documentation accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A required documentation attribute is absent or empty.
    #[error("Command \"{command}\" has no \"{attribute}\" string set.")]
    MissingDocumentation {
        /// Type name of the offending command, e.g. `FooBar`.
        command: &'static str,
        /// Attribute that was missing (`usage` or `usage_summary`).
        attribute: &'static str,
    },
}

impl CommandError {
    /// Name of the command type the error refers to.
    pub fn command(&self) -> &'static str {
        match self {
            CommandError::MissingDocumentation { command, .. } => command,
        }
    }
}

/// Return `value` when it holds a non-empty string, otherwise fail with
/// [`CommandError::MissingDocumentation`] naming `command` and `attribute`.
pub(crate) fn require_doc(
    command: &'static str,
    attribute: &'static str,
    value: Option<&'static str>,
) -> Result<&'static str, CommandError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(CommandError::MissingDocumentation { command, attribute }),
    }
}

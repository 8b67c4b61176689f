//! The command base every `gocd` command builds on.
//!
//! A command type declares its documentation and its [`CallShape`] as
//! associated constants. Usage text is derived from those declarations
//! without constructing the command, and finished commands report back
//! through a [`ResultEnvelope`].

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, require_doc};
use crate::utils::{clean_usage, dasherize_name};

/// Exit code carried by a successful outcome.
pub const SUCCESS_EXIT_CODE: i32 = 0;

/// Exit code used when a command reports plain failure without a code.
pub const GENERIC_FAILURE_EXIT_CODE: i32 = 2;

/// Token rendered for a command that accepts arbitrary `--key value` options.
pub const KEYWORD_PLACEHOLDER: &str = "[--...]";

// ============================================================================
// Call Shape
// ============================================================================

/// How a command is called, as far as its usage line is concerned.
///
/// Declared once per command type, usually in a `const`:
///
/// ```rust
/// use gocd_cli::CallShape;
///
/// const SHAPE: CallShape = CallShape::new()
///     .positional(&["pipeline", "stage"])
///     .variadic("jobs")
///     .keywords("options");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CallShape {
    /// Required arguments, in call order.
    pub positional: &'static [&'static str],
    /// Name capturing the remaining positional arguments, if any.
    pub variadic: Option<&'static str>,
    /// Name capturing the remaining named arguments, if any.
    pub keywords: Option<&'static str>,
}

impl CallShape {
    /// A shape with no arguments at all.
    pub const fn new() -> Self {
        Self {
            positional: &[],
            variadic: None,
            keywords: None,
        }
    }

    /// Set the required positional arguments.
    pub const fn positional(mut self, names: &'static [&'static str]) -> Self {
        self.positional = names;
        self
    }

    /// Accept any number of trailing positional arguments under `name`.
    pub const fn variadic(mut self, name: &'static str) -> Self {
        self.variadic = Some(name);
        self
    }

    /// Accept arbitrary named arguments collected under `name`.
    pub const fn keywords(mut self, name: &'static str) -> Self {
        self.keywords = Some(name);
        self
    }

    /// Usage tokens for this shape, without the command name.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self
            .positional
            .iter()
            .map(|name| format!("<{name}>"))
            .collect();

        if let Some(name) = self.variadic {
            tokens.push(format!("*{name}"));
        }

        if self.keywords.is_some() {
            tokens.push(KEYWORD_PLACEHOLDER.to_string());
        }

        tokens
    }
}

// ============================================================================
// Command Descriptor
// ============================================================================

/// Static description of a command type.
///
/// This is what [`Command`] exposes without an instance; it is `Copy` and
/// object-free, so descriptors of unrelated command types can live side by
/// side (see [`crate::Registry`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    name: &'static str,
    usage: Option<&'static str>,
    usage_summary: Option<&'static str>,
    shape: CallShape,
}

impl CommandInfo {
    pub const fn new(
        name: &'static str,
        usage: Option<&'static str>,
        usage_summary: Option<&'static str>,
        shape: CallShape,
    ) -> Self {
        Self {
            name,
            usage,
            usage_summary,
            shape,
        }
    }

    /// Descriptor for the command type `C`.
    pub const fn of<C: Command>() -> Self {
        Self::new(C::NAME, C::USAGE, C::USAGE_SUMMARY, C::SHAPE)
    }

    /// Type name as declared, e.g. `FooBar`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Token the command is invoked by, e.g. `foo-bar`.
    pub fn invocation_name(&self) -> String {
        dasherize_name(self.name)
    }

    pub fn shape(&self) -> &CallShape {
        &self.shape
    }

    /// The declared one-line summary.
    pub fn usage_summary(&self) -> Result<&'static str, CommandError> {
        require_doc(self.name, "usage_summary", self.usage_summary)
    }

    /// Full usage text: call line, summary, then the cleaned usage body.
    ///
    /// `usage` is checked before the summary, so a command missing both
    /// reports `usage`.
    pub fn usage(&self) -> Result<String, CommandError> {
        let usage = require_doc(self.name, "usage", self.usage)?;

        Ok(format!(
            "{}\n\n{}\n\n{}\n",
            self.call_documentation(),
            self.usage_summary()?,
            clean_usage(usage),
        ))
    }

    /// Single-line call signature such as `foo-bar <alpha> *rest [--...]`.
    pub fn call_documentation(&self) -> String {
        let mut parts = vec![self.invocation_name()];
        parts.extend(self.shape.tokens());
        parts.join(" ").trim().to_string()
    }
}

/// Base trait for every `gocd` command.
///
/// Implementors declare their documentation and call shape; the rendering
/// accessors are provided. Missing documentation is not caught at compile
/// time: the accessors fail with [`CommandError::MissingDocumentation`] when
/// asked for the absent text.
pub trait Command: Sized {
    /// Type name of the command, dasherized into its invocation token.
    const NAME: &'static str;

    /// Detailed usage body. May be written as an indented block.
    const USAGE: Option<&'static str> = None;

    /// One-line description.
    const USAGE_SUMMARY: Option<&'static str> = None;

    /// Arguments the command takes, for the usage line.
    const SHAPE: CallShape = CallShape::new();

    fn info() -> CommandInfo {
        CommandInfo::of::<Self>()
    }

    fn get_usage() -> Result<String, CommandError> {
        Self::info().usage()
    }

    fn get_usage_summary() -> Result<&'static str, CommandError> {
        Self::info().usage_summary()
    }

    fn get_call_documentation() -> String {
        Self::info().call_documentation()
    }

    /// Wrap `output` in an envelope: success exits 0, failure exits
    /// [`GENERIC_FAILURE_EXIT_CODE`].
    fn return_value<T>(&self, output: T, succeeded: bool) -> ResultEnvelope<T> {
        Outcome::from_bool(output, succeeded).into()
    }

    /// Wrap `output` in an envelope carrying `exit_code` unchanged.
    fn return_code<T>(&self, output: T, exit_code: i32) -> ResultEnvelope<T> {
        Outcome::with_code(output, exit_code).into()
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// What a command run amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = String> {
    Success(T),
    /// Output plus the exit code to report.
    Failure(T, i32),
}

impl<T> Outcome<T> {
    /// `true` maps to success, `false` to a generic failure.
    pub fn from_bool(output: T, succeeded: bool) -> Self {
        if succeeded {
            Outcome::Success(output)
        } else {
            Outcome::Failure(output, GENERIC_FAILURE_EXIT_CODE)
        }
    }

    /// Zero is success; any other code is a failure carrying that code.
    pub fn with_code(output: T, exit_code: i32) -> Self {
        if exit_code == SUCCESS_EXIT_CODE {
            Outcome::Success(output)
        } else {
            Outcome::Failure(output, exit_code)
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) => SUCCESS_EXIT_CODE,
            Outcome::Failure(_, code) => *code,
        }
    }

    /// Same rule as [`ResultEnvelope::is_success`], so a `Failure` built
    /// with code 0 still counts as success.
    pub fn is_success(&self) -> bool {
        self.exit_code() == SUCCESS_EXIT_CODE
    }

    pub fn output(&self) -> &T {
        match self {
            Outcome::Success(output) | Outcome::Failure(output, _) => output,
        }
    }

    pub fn into_envelope(self) -> ResultEnvelope<T> {
        let exit_code = self.exit_code();
        let output = match self {
            Outcome::Success(output) | Outcome::Failure(output, _) => output,
        };
        ResultEnvelope { exit_code, output }
    }
}

impl<T> From<Outcome<T>> for ResultEnvelope<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_envelope()
    }
}

/// Normalized result every command hands back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope<T = String> {
    pub exit_code: i32,
    pub output: T,
}

impl<T> ResultEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.exit_code == SUCCESS_EXIT_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FooBar;

    impl Command for FooBar {
        const NAME: &'static str = "FooBar";
        const USAGE: Option<&'static str> = Some(
            "
            Does foo things to bar.

            Example:
                gocd foo-bar one two
            ",
        );
        const USAGE_SUMMARY: Option<&'static str> = Some("Foo the bar");
        const SHAPE: CallShape = CallShape::new().positional(&["alpha", "beta"]);
    }

    struct Collect;

    impl Command for Collect {
        const NAME: &'static str = "Collect";
        const SHAPE: CallShape = CallShape::new().variadic("items");
    }

    struct Configure;

    impl Command for Configure {
        const NAME: &'static str = "Configure";
        const SHAPE: CallShape = CallShape::new().keywords("opts");
    }

    struct Status;

    impl Command for Status {
        const NAME: &'static str = "Status";
        const USAGE: Option<&'static str> = Some("Shows status.");
    }

    struct Undocumented;

    impl Command for Undocumented {
        const NAME: &'static str = "Undocumented";
        const USAGE: Option<&'static str> = Some("");
        const USAGE_SUMMARY: Option<&'static str> = Some("");
    }

    #[test]
    fn call_documentation_lists_required_args() {
        assert_eq!(FooBar::get_call_documentation(), "foo-bar <alpha> <beta>");
    }

    #[test]
    fn call_documentation_variadic_and_keywords() {
        assert_eq!(Collect::get_call_documentation(), "collect *items");
        assert_eq!(Configure::get_call_documentation(), "configure [--...]");
    }

    #[test]
    fn call_documentation_without_args_is_just_the_name() {
        assert_eq!(Status::get_call_documentation(), "status");
    }

    #[test]
    fn call_documentation_full_shape_order() {
        struct ScheduleStage;
        impl Command for ScheduleStage {
            const NAME: &'static str = "ScheduleStage";
            const SHAPE: CallShape = CallShape::new()
                .keywords("options")
                .variadic("jobs")
                .positional(&["pipeline", "stage"]);
        }

        assert_eq!(
            ScheduleStage::get_call_documentation(),
            "schedule-stage <pipeline> <stage> *jobs [--...]"
        );
    }

    #[test]
    fn usage_composes_call_line_summary_and_body() {
        assert_eq!(
            FooBar::get_usage().unwrap(),
            "foo-bar <alpha> <beta>\n\nFoo the bar\n\nDoes foo things to bar.\n\nExample:\n    gocd foo-bar one two\n"
        );
    }

    #[test]
    fn usage_checks_usage_before_summary() {
        let err = Collect::get_usage().unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingDocumentation {
                command: "Collect",
                attribute: "usage",
            }
        );
    }

    #[test]
    fn usage_fails_on_missing_summary() {
        let err = Status::get_usage().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Command \"Status\" has no \"usage_summary\" string set."
        );
    }

    #[test]
    fn empty_documentation_counts_as_missing() {
        assert!(Undocumented::get_usage_summary().is_err());
        assert_eq!(
            Undocumented::get_usage().unwrap_err().to_string(),
            "Command \"Undocumented\" has no \"usage\" string set."
        );
    }

    #[test]
    fn usage_summary_returns_declared_text() {
        assert_eq!(FooBar::get_usage_summary().unwrap(), "Foo the bar");
    }

    #[test]
    fn return_value_maps_booleans() {
        assert_eq!(
            FooBar.return_value("done", true),
            ResultEnvelope {
                exit_code: 0,
                output: "done"
            }
        );
        assert_eq!(
            FooBar.return_value("failed", false),
            ResultEnvelope {
                exit_code: 2,
                output: "failed"
            }
        );
    }

    #[test]
    fn return_code_passes_integers_through() {
        let envelope = FooBar.return_code("x", 7);
        assert_eq!(envelope.exit_code, 7);
        assert_eq!(envelope.output, "x");
        assert!(!envelope.is_success());
        assert!(FooBar.return_code("ok", 0).is_success());
    }

    #[test]
    fn outcome_accessors() {
        let failed = Outcome::with_code(String::from("boom"), 3);
        assert!(!failed.is_success());
        assert_eq!(failed.exit_code(), 3);
        assert_eq!(failed.output(), "boom");

        assert_eq!(Outcome::with_code("fine", 0), Outcome::Success("fine"));
        assert_eq!(Outcome::from_bool((), false).exit_code(), 2);
    }

    #[test]
    fn failure_with_zero_code_agrees_with_envelope() {
        let outcome = Outcome::Failure("x", 0);
        assert!(outcome.is_success());

        let envelope: ResultEnvelope<&str> = outcome.into();
        assert_eq!(envelope.exit_code, 0);
        assert!(envelope.is_success());
    }

    #[test]
    fn whitespace_only_documentation_is_accepted() {
        struct Blank;
        impl Command for Blank {
            const NAME: &'static str = "Blank";
            const USAGE: Option<&'static str> = Some("   ");
            const USAGE_SUMMARY: Option<&'static str> = Some("   ");
        }

        assert_eq!(Blank::get_usage_summary().unwrap(), "   ");
        assert_eq!(Blank::get_usage().unwrap(), "blank\n\n   \n\n\n");
    }
}

//! Console user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`LineUI`] for piped or redirected standard input
//! - Prompts, spinners, and the color theme
//!
//! # Example
//!
//! ```
//! use dotnet_audit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("dotnet-audit");
//! ui.success("Scan complete");
//! assert!(ui.has_success("Scan complete"));
//! assert_eq!(ui.headers(), &["dotnet-audit"]);
//! ```

pub mod line;
pub mod mock;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use line::LineUI;
pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, AuditTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display one inventory line, flagging end-of-support versions.
    fn version_line(&mut self, name: &str, version: &str, eol: bool);

    /// Show a prompt and get user input.
    ///
    /// Returns [`AuditError::InputClosed`](crate::error::AuditError::InputClosed)
    /// once standard input is exhausted.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Remove the spinner without a final line.
    fn finish_clear(&mut self);
}

/// Marker appended to end-of-support versions in listings.
pub const EOL_MARKER: &str = "[EOL]";

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Free-form text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: None,
        }
    }

    /// Masked prompt for secrets.
    pub fn password(key: &str, question: &str) -> Self {
        Self {
            prompt_type: PromptType::Password,
            ..Self::input(key, question)
        }
    }

    /// Set the value used when the answer is empty.
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }
}

/// The type of prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Free-form text input.
    Input,
    /// Text input that is not echoed.
    Password,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Text the operator entered (or the default).
    String(String),
}

impl PromptResult {
    /// Consume into the entered text.
    pub fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
        }
    }
}

/// Answer used for a prompt when the operator entered nothing.
pub(crate) fn answer_or_default(prompt: &Prompt, answer: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        prompt.default.clone().unwrap_or_default()
    } else {
        trimmed.to_string()
    }
}

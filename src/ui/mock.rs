//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use dotnet_audit::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("org", "contoso");
//!
//! let answer = ui.prompt(&Prompt::input("org", "Organization")).unwrap();
//! assert_eq!(answer.into_string(), "contoso");
//! assert_eq!(ui.prompts_shown(), &["org"]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::{AuditError, Result};

use super::{Prompt, PromptResult, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked multiple times.
/// A prompt with no configured response and no default behaves like closed
/// input.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    version_lines: Vec<(String, String, bool)>,
    spinners: Vec<String>,
    spinner_outcomes: Rc<RefCell<Vec<SpinnerStatus>>>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    ///
    /// When `prompt()` is called with this key, it returns the configured response.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured inventory lines as (name, version, eol).
    pub fn version_lines(&self) -> &[(String, String, bool)] {
        &self.version_lines
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each started spinner was finished, in finishing order.
    pub fn spinner_outcomes(&self) -> Vec<SpinnerStatus> {
        self.spinner_outcomes.borrow().clone()
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn version_line(&mut self, name: &str, version: &str, eol: bool) {
        self.version_lines
            .push((name.to_string(), version.to_string(), eol));
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        // Queued responses first (for keys asked multiple times)
        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(PromptResult::String(super::answer_or_default(
                    prompt, &response,
                )));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(PromptResult::String(super::answer_or_default(
                prompt, response,
            )));
        }

        if let Some(default) = &prompt.default {
            return Ok(PromptResult::String(default.clone()));
        }

        Err(AuditError::InputClosed)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            outcomes: Rc::clone(&self.spinner_outcomes),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

/// Mock spinner that reports how it was finished back to its [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    outcomes: Rc<RefCell<Vec<SpinnerStatus>>>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    /// Finished with error.
    Error,
    /// Cleared without a final line.
    Cleared,
}

impl SpinnerHandle for MockSpinner {
    fn finish_error(&mut self, _msg: &str) {
        self.outcomes.borrow_mut().push(SpinnerStatus::Error);
    }

    fn finish_clear(&mut self) {
        self.outcomes.borrow_mut().push(SpinnerStatus::Cleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn mock_ui_captures_version_lines() {
        let mut ui = MockUI::new();
        ui.version_line("Framework: v4.0", "4.0.0.0", true);

        assert_eq!(
            ui.version_lines(),
            &[("Framework: v4.0".to_string(), "4.0.0.0".to_string(), true)]
        );
    }

    #[test]
    fn queued_responses_come_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1", "5"]);
        let prompt = Prompt::input("choice", "Select");

        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "1");
        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "5");
        assert!(ui.prompt(&prompt).unwrap_err().is_input_closed());
    }

    #[test]
    fn queue_falls_back_to_fixed_response() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1"]);
        ui.set_prompt_response("choice", "5");
        let prompt = Prompt::input("choice", "Select");

        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "1");
        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "5");
        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "5");
    }

    #[test]
    fn blank_response_uses_prompt_default() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("channel", "");
        let prompt = Prompt::input("channel", "Channel").with_default("STS");

        assert_eq!(ui.prompt(&prompt).unwrap().into_string(), "STS");
    }

    #[test]
    fn unconfigured_prompt_uses_default_or_closes() {
        let mut ui = MockUI::new();
        let with_default = Prompt::input("channel", "Channel").with_default("STS");
        let without = Prompt::input("org", "Organization");

        assert_eq!(ui.prompt(&with_default).unwrap().into_string(), "STS");
        assert!(matches!(ui.prompt(&without), Err(AuditError::InputClosed)));
        assert_eq!(ui.prompts_shown(), &["channel", "org"]);
    }

    #[test]
    fn spinner_outcomes_are_recorded() {
        let mut ui = MockUI::new();
        ui.start_spinner("Downloading").finish_error("Download failed");
        ui.start_spinner("Installing").finish_clear();

        assert_eq!(ui.spinners(), &["Downloading", "Installing"]);
        assert_eq!(
            ui.spinner_outcomes(),
            vec![SpinnerStatus::Error, SpinnerStatus::Cleared]
        );
    }
}

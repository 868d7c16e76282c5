//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use crate::error::{AuditError, Result};

use super::{answer_or_default, Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to AuditError.
fn map_dialoguer_err(e: dialoguer::Error) -> AuditError {
    let io: std::io::Error = e.into();
    if io.kind() == std::io::ErrorKind::UnexpectedEof {
        AuditError::InputClosed
    } else {
        AuditError::Io(io)
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input on a terminal.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Password => prompt_password(prompt, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(true);

    if let Some(default) = &prompt.default {
        input = input.default(default.clone()).show_default(true);
    }

    let answer = input.interact_text_on(term).map_err(map_dialoguer_err)?;
    Ok(PromptResult::String(answer_or_default(prompt, &answer)))
}

fn prompt_password(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let answer = Password::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty_password(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(answer_or_default(prompt, &answer)))
}

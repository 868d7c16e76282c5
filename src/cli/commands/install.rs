//! Install action: install the latest .NET for a channel.

use crate::error::Result;
use crate::installer::{Channel, InstallOutcome};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{AuditContext, Command, CommandResult};

/// The install action.
pub struct InstallCommand<'a> {
    ctx: &'a AuditContext,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: &'a AuditContext) -> Self {
        Self { ctx }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let answer = ui
            .prompt(
                &Prompt::input("channel", "Release channel (STS or LTS)")
                    .with_default(&Channel::default().to_string()),
            )?
            .into_string();
        let channel = Channel::from_input(&answer)?;

        let outcome = self.ctx.installer.install_latest(
            self.ctx.settings.install_dir.as_deref(),
            channel,
            ui,
        )?;

        match outcome {
            InstallOutcome::Installed { dir, channel } => {
                ui.success(&format!(
                    "Installed latest .NET ({}) into {}",
                    channel,
                    dir.display()
                ));
                Ok(CommandResult::success())
            }
            InstallOutcome::Aborted => {
                ui.warning("Installation cancelled.");
                Ok(CommandResult::cancelled())
            }
        }
    }
}

//! Ticket action: file an upgrade work item.

use crate::error::Result;
use crate::ticket::{TicketSubmitter, TicketTarget};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{AuditContext, Command, CommandResult};

/// The ticket action.
pub struct TicketCommand<'a> {
    ctx: &'a AuditContext,
}

impl<'a> TicketCommand<'a> {
    /// Create a new ticket command.
    pub fn new(ctx: &'a AuditContext) -> Self {
        Self { ctx }
    }

    fn ask_target(&self, ui: &mut dyn UserInterface) -> Result<TicketTarget> {
        let org = ui
            .prompt(&Prompt::input("org", "Azure DevOps organization"))?
            .into_string();
        let project = ui
            .prompt(&Prompt::input("project", "Project"))?
            .into_string();
        let credential = ui
            .prompt(&Prompt::password("pat", "Personal access token"))?
            .into_string();

        TicketTarget::new(&org, &project, &credential)
    }
}

impl Command for TicketCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.ask_target(ui)?;

        let submitter = TicketSubmitter::new(
            &self.ctx.scanner,
            &self.ctx.classifier,
            &self.ctx.tracker,
            self.ctx.host.machine_name.clone(),
        );

        let mut spinner = ui.start_spinner("Creating work item...");
        match submitter.create_ticket_at(&target, self.ctx.now(), None, None) {
            Ok(id) => {
                spinner.finish_clear();
                ui.success(&format!("Created work item #{}", id));
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("Work item not created");
                Err(e)
            }
        }
    }
}

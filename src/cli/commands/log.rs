//! Log action: write the inventory to CSV.

use crate::error::Result;
use crate::report::{write_csv, WriteOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{AuditContext, Command, CommandResult};

/// The log action.
pub struct LogCommand<'a> {
    ctx: &'a AuditContext,
}

impl<'a> LogCommand<'a> {
    /// Create a new log command.
    pub fn new(ctx: &'a AuditContext) -> Self {
        Self { ctx }
    }
}

impl Command for LogCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let records = self.ctx.scanner.scan();

        match write_csv(&records, &self.ctx.settings.csv_path)? {
            WriteOutcome::NothingToLog => {
                ui.message("No .NET versions found to log.");
            }
            WriteOutcome::Written { path, rows } => {
                ui.success(&format!("Logged {} version(s) to {}", rows, path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}

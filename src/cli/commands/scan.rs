//! Scan action: list installed versions with end-of-support markers.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{AuditContext, Command, CommandResult};

/// The scan action.
pub struct ScanCommand<'a> {
    ctx: &'a AuditContext,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command.
    pub fn new(ctx: &'a AuditContext) -> Self {
        Self { ctx }
    }
}

impl Command for ScanCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let records = self.ctx.scanner.scan();
        if records.is_empty() {
            ui.message("No .NET versions found.");
            return Ok(CommandResult::success());
        }

        let now = self.ctx.now();
        for record in &records {
            let eol = self.ctx.classifier.is_eol(record, now);
            ui.version_line(&record.name, &record.version, eol);
        }

        Ok(CommandResult::success())
    }
}

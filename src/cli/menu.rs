//! Interactive numbered menu.

use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::commands::{AuditContext, CommandDispatcher};

/// Menu entries, in display order.
pub const MENU_ITEMS: [&str; 5] = [
    "1. Scan installed .NET versions",
    "2. Log versions to CSV",
    "3. Create Azure DevOps ticket",
    "4. Install latest .NET",
    "5. Exit",
];

/// Shown for anything that is not a menu number.
pub const INVALID_SELECTION: &str = "Invalid selection, please choose 1-5.";

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Scan,
    Log,
    Ticket,
    Install,
    Exit,
}

impl MenuChoice {
    /// Parse operator input; `None` for anything outside 1..=5.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Scan),
            "2" => Some(Self::Log),
            "3" => Some(Self::Ticket),
            "4" => Some(Self::Install),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu loop.
pub struct Menu<'a> {
    dispatcher: CommandDispatcher<'a>,
}

impl<'a> Menu<'a> {
    /// Create a menu over `ctx`.
    pub fn new(ctx: &'a AuditContext) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(ctx),
        }
    }

    /// Show the menu until the operator exits or input runs out.
    ///
    /// Action failures are reported and the menu is shown again.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header(concat!("dotnet-audit ", env!("CARGO_PKG_VERSION")));

        loop {
            for item in MENU_ITEMS {
                ui.message(item);
            }

            let answer = match ui.prompt(&Prompt::input("choice", "Select an option")) {
                Ok(answer) => answer.into_string(),
                Err(e) if e.is_input_closed() => {
                    tracing::debug!("Input closed; leaving menu");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                ui.warning(INVALID_SELECTION);
                continue;
            };

            if choice == MenuChoice::Exit {
                return Ok(());
            }

            match self.dispatcher.dispatch(choice, ui) {
                Ok(result) => tracing::debug!("{:?} finished: {:?}", choice, result),
                Err(e) if e.is_input_closed() => return Ok(()),
                Err(e) => {
                    tracing::warn!("{:?} failed: {}", choice, e);
                    ui.error(&e.to_string());
                }
            }
        }
    }
}

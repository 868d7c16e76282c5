//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing menu actions
//! - [`CommandResult`] for uniform result reporting
//! - [`AuditContext`] holding the services every action shares
//! - [`CommandDispatcher`] for routing menu choices

use chrono::NaiveDateTime;

use crate::cli::args::Settings;
use crate::cli::menu::MenuChoice;
use crate::environment::HostEnvironment;
use crate::eol::Classifier;
use crate::error::Result;
use crate::installer::Installer;
use crate::inventory::Scanner;
use crate::ticket::WorkItemClient;
use crate::ui::UserInterface;

use super::install::InstallCommand;
use super::log::LogCommand;
use super::scan::ScanCommand;
use super::ticket::TicketCommand;

/// Trait for menu action implementations.
pub trait Command {
    /// Execute the action.
    ///
    /// Errors are reported by the menu, which then shows itself again.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the action completed.
    pub success: bool,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { success: true }
    }

    /// Create a result for an action the operator cancelled.
    pub fn cancelled() -> Self {
        Self { success: false }
    }
}

/// Services shared by all menu actions.
///
/// Built once at startup; the classifier's reference table is never
/// modified afterwards.
pub struct AuditContext {
    pub settings: Settings,
    pub host: HostEnvironment,
    pub scanner: Scanner,
    pub classifier: Classifier,
    pub tracker: WorkItemClient,
    pub installer: Installer,
    clock: Box<dyn Fn() -> NaiveDateTime>,
}

impl AuditContext {
    /// Context for this machine.
    pub fn for_host(settings: Settings, host: HostEnvironment, classifier: Classifier) -> Self {
        let scanner = Scanner::for_host(&host);
        let tracker = match &settings.tracker_url {
            Some(url) => WorkItemClient::with_base_url(url.clone()),
            None => WorkItemClient::new(),
        };
        let installer = Installer::for_host(&host, settings.installer_url.as_deref());
        Self::new(settings, host, scanner, classifier, tracker, installer)
    }

    /// Assemble a context from parts.
    pub fn new(
        settings: Settings,
        host: HostEnvironment,
        scanner: Scanner,
        classifier: Classifier,
        tracker: WorkItemClient,
        installer: Installer,
    ) -> Self {
        Self {
            settings,
            host,
            scanner,
            classifier,
            tracker,
            installer,
            clock: Box::new(|| chrono::Local::now().naive_local()),
        }
    }

    /// Replace the clock used for end-of-support decisions.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Current local time.
    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}

/// Dispatches menu choices to their implementations.
pub struct CommandDispatcher<'a> {
    ctx: &'a AuditContext,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher over `ctx`.
    pub fn new(ctx: &'a AuditContext) -> Self {
        Self { ctx }
    }

    /// Dispatch and execute a menu action.
    ///
    /// [`MenuChoice::Exit`] is handled by the menu itself and is a no-op here.
    pub fn dispatch(
        &self,
        choice: MenuChoice,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", choice);
        match choice {
            MenuChoice::Scan => ScanCommand::new(self.ctx).execute(ui),
            MenuChoice::Log => LogCommand::new(self.ctx).execute(ui),
            MenuChoice::Ticket => TicketCommand::new(self.ctx).execute(ui),
            MenuChoice::Install => InstallCommand::new(self.ctx).execute(ui),
            MenuChoice::Exit => Ok(CommandResult::success()),
        }
    }
}

//! Upgrade ticket creation.
//!
//! Builds a work item describing the end-of-support runtimes found on this
//! machine and files it with the work-tracking service.
//!
//! # Example
//!
//! ```
//! use dotnet_audit::ticket::default_title;
//!
//! let eol = vec!["6.0.28".to_string(), "7.0.1".to_string()];
//! assert_eq!(
//!     default_title("HOST1", &eol),
//!     "Upgrade .NET on HOST1 (EOL installed: 6.0.28, 7.0.1)"
//! );
//! ```

pub mod client;

use chrono::NaiveDateTime;

use crate::eol::Classifier;
use crate::error::{AuditError, Result};
use crate::inventory::Scanner;

pub use client::{patch_document, PatchOperation, WorkItemClient};

/// Placeholder used when no end-of-support versions were found.
const NONE_PLACEHOLDER: &str = "None";

/// Organization, project and credential of the work-tracking service.
///
/// Construction rejects blank values, so a target in hand is always
/// complete.
#[derive(Clone)]
pub struct TicketTarget {
    org: String,
    project: String,
    credential: String,
}

impl TicketTarget {
    /// Validate and build a target.
    pub fn new(org: &str, project: &str, credential: &str) -> Result<Self> {
        Ok(Self {
            org: require("organization", org)?,
            project: require("project", project)?,
            credential: require("personal access token", credential)?,
        })
    }

    /// Organization name.
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Project name.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Personal access token.
    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl std::fmt::Debug for TicketTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketTarget")
            .field("org", &self.org)
            .field("project", &self.project)
            .field("credential", &"***")
            .finish()
    }
}

fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuditError::Validation {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Title and description of a work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    pub title: String,
    pub description: String,
}

impl TicketRequest {
    /// Build a request, filling in defaults for anything not supplied.
    pub fn build(
        machine: &str,
        eol_versions: &[String],
        title: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| default_title(machine, eol_versions)),
            description: description
                .unwrap_or_else(|| default_description(machine, eol_versions)),
        }
    }
}

/// Versions joined for display, or `None` when empty.
pub fn joined_versions(eol_versions: &[String]) -> String {
    if eol_versions.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        eol_versions.join(", ")
    }
}

/// Default work item title.
pub fn default_title(machine: &str, eol_versions: &[String]) -> String {
    format!(
        "Upgrade .NET on {} (EOL installed: {})",
        machine,
        joined_versions(eol_versions)
    )
}

/// Default work item description.
pub fn default_description(machine: &str, eol_versions: &[String]) -> String {
    format!(
        "The following end-of-support .NET versions were detected on {}:\n{}\n\nPlease upgrade to a supported .NET release.",
        machine,
        joined_versions(eol_versions)
    )
}

/// Scans, classifies, and files the upgrade ticket.
pub struct TicketSubmitter<'a> {
    scanner: &'a Scanner,
    classifier: &'a Classifier,
    client: &'a WorkItemClient,
    machine: String,
}

impl<'a> TicketSubmitter<'a> {
    /// Create a submitter for `machine`.
    pub fn new(
        scanner: &'a Scanner,
        classifier: &'a Classifier,
        client: &'a WorkItemClient,
        machine: impl Into<String>,
    ) -> Self {
        Self {
            scanner,
            classifier,
            client,
            machine: machine.into(),
        }
    }

    /// Build the request from a fresh scan at `now`.
    pub fn prepare(
        &self,
        now: NaiveDateTime,
        title: Option<String>,
        description: Option<String>,
    ) -> TicketRequest {
        let records = self.scanner.scan();
        let eol: Vec<String> = self
            .classifier
            .filter_eol(&records, now)
            .into_iter()
            .map(|r| r.version)
            .collect();
        tracing::debug!("{} end-of-support version(s) for ticket", eol.len());
        TicketRequest::build(&self.machine, &eol, title, description)
    }

    /// Create the ticket and return its id.
    pub fn create_ticket(
        &self,
        target: &TicketTarget,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<u64> {
        let now = chrono::Local::now().naive_local();
        self.create_ticket_at(target, now, title, description)
    }

    /// Create the ticket, classifying versions as of `now`.
    pub fn create_ticket_at(
        &self,
        target: &TicketTarget,
        now: NaiveDateTime,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<u64> {
        let request = self.prepare(now, title, description);
        self.client.create(target, &request)
    }
}

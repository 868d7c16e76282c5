//! dotnet-audit - Installed .NET runtime inventory and end-of-support audit.
//!
//! dotnet-audit enumerates the .NET Framework and .NET (Core) runtimes on a
//! machine, flags the ones past Microsoft's end-of-support date, writes the
//! inventory to CSV, files upgrade work items, and installs the latest
//! release through the official install script.
//!
//! # Modules
//!
//! - [`cli`] - Command-line flags, the interactive menu, and menu actions
//! - [`environment`] - Host values captured once at startup
//! - [`eol`] - End-of-support reference table and classification
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Install script download and execution
//! - [`inventory`] - Installed version discovery
//! - [`report`] - CSV report writing
//! - [`ticket`] - Upgrade work item creation
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dotnet_audit::eol::{Classifier, EolTable};
//! use dotnet_audit::inventory::VersionRecord;
//!
//! let classifier = Classifier::new(EolTable::builtin());
//! let now = NaiveDate::from_ymd_opt(2025, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 1)
//!     .unwrap();
//!
//! let record = VersionRecord::new("Core: Microsoft.NETCore.App", "6.0.28");
//! assert!(classifier.is_eol(&record, now));
//! ```

pub mod cli;
pub mod environment;
pub mod eol;
pub mod error;
pub mod installer;
pub mod inventory;
pub mod report;
pub mod ticket;
pub mod ui;

pub use error::{AuditError, Result};

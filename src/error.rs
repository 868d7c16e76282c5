//! Error types for dotnet-audit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Unreadable version sources are not errors; they contribute nothing
//! - Use `AuditError` for failures the menu reports to the operator
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dotnet-audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Required operator input was blank or malformed.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The work item could not be created.
    #[error("Ticket creation failed: {message}")]
    TicketRequest { message: String },

    /// The installer script could not be downloaded.
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// The installer script ran but did not succeed.
    #[error("Installation failed: {message}")]
    InstallFailed { message: String },

    /// A replacement install directory could not be created.
    #[error("Could not create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input reached end of file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,

    /// CSV serialization or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AuditError {
    /// Whether this error means no more operator input will arrive.
    pub fn is_input_closed(&self) -> bool {
        match self {
            Self::InputClosed => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}

/// Result type alias for dotnet-audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

//! Command-line interface for dotnet-audit.
//!
//! # Architecture
//!
//! - [`args`] - Global flags and resolved [`Settings`]
//! - [`menu`] - The interactive numbered menu loop
//! - [`commands`] - One implementation per menu action

pub mod args;
pub mod commands;
pub mod menu;

pub use args::{Cli, Settings};
pub use commands::{AuditContext, Command, CommandDispatcher, CommandResult};
pub use menu::{Menu, MenuChoice};

//! Menu action implementations.
//!
//! Each action implements the [`Command`] trait, which provides a uniform
//! interface for executing actions and reporting results.
//!
//! # Architecture
//!
//! Actions are dispatched via [`CommandDispatcher`], which routes menu
//! choices to their implementations over a shared [`AuditContext`].

pub mod dispatcher;
pub mod install;
pub mod log;
pub mod scan;
pub mod ticket;

pub use dispatcher::{AuditContext, Command, CommandDispatcher, CommandResult};

//! End-of-support reference data and classification.
//!
//! - [`EolTable`] holds the release cutoff dates and is the only place
//!   they are defined
//! - [`Classifier`] maps a [`VersionRecord`](crate::inventory::VersionRecord)
//!   to a [`SupportStatus`]

pub mod classifier;
pub mod table;

pub use classifier::{Classifier, SupportStatus, UNKNOWN_IS_SUPPORTED};
pub use table::{EolTable, EosEntry};

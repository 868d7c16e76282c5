//! End-of-support classification.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::inventory::VersionRecord;

use super::table::EolTable;

/// Name prefix of .NET Framework records.
pub const FRAMEWORK_PREFIX: &str = "Framework";

/// Name prefix of .NET (Core) records.
pub const CORE_PREFIX: &str = "Core";

/// The only .NET Framework line still in support.
pub const SUPPORTED_FRAMEWORK_PREFIX: &str = "4.8";

/// Policy for versions the reference table does not know about.
///
/// Applies to Core releases missing from the table, Core versions with a
/// single component, and records that are neither Framework nor Core.
pub const UNKNOWN_IS_SUPPORTED: bool = true;

/// Support status of a single version record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// Known to be supported.
    Supported,
    /// Past end of support. `since` is the cutoff date when one is known.
    EndOfSupport { since: Option<NaiveDate> },
    /// Not enough information to decide.
    Unknown,
}

impl SupportStatus {
    /// Collapse to the boolean end-of-support flag.
    pub fn is_eol(&self) -> bool {
        match self {
            Self::Supported => false,
            Self::EndOfSupport { .. } => true,
            Self::Unknown => !UNKNOWN_IS_SUPPORTED,
        }
    }
}

/// Classifies version records against an [`EolTable`].
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: EolTable,
}

impl Classifier {
    /// Create a classifier backed by the given table.
    pub fn new(table: EolTable) -> Self {
        Self { table }
    }

    /// The reference table in use.
    pub fn table(&self) -> &EolTable {
        &self.table
    }

    /// Determine the support status of a record at `now`.
    pub fn status(&self, record: &VersionRecord, now: NaiveDateTime) -> SupportStatus {
        if record.name.starts_with(FRAMEWORK_PREFIX) {
            return if record.version.starts_with(SUPPORTED_FRAMEWORK_PREFIX) {
                SupportStatus::Supported
            } else {
                SupportStatus::EndOfSupport { since: None }
            };
        }

        if !record.name.starts_with(CORE_PREFIX) {
            return SupportStatus::Unknown;
        }

        let Some(key) = major_minor(&record.version) else {
            return SupportStatus::Unknown;
        };

        match self.table.lookup(&key) {
            Some(cutoff) if now > cutoff.and_time(NaiveTime::MIN) => {
                SupportStatus::EndOfSupport {
                    since: Some(cutoff),
                }
            }
            Some(_) => SupportStatus::Supported,
            None => SupportStatus::Unknown,
        }
    }

    /// Whether a record is past end of support at `now`.
    pub fn is_eol(&self, record: &VersionRecord, now: NaiveDateTime) -> bool {
        self.status(record, now).is_eol()
    }

    /// Keep only end-of-support records, preserving input order.
    pub fn filter_eol(&self, records: &[VersionRecord], now: NaiveDateTime) -> Vec<VersionRecord> {
        records
            .iter()
            .filter(|r| self.is_eol(r, now))
            .cloned()
            .collect()
    }
}

/// Two-component `major.minor` prefix of a dotted version string.
fn major_minor(version: &str) -> Option<String> {
    let mut parts = version.split('.');
    let major = parts.next()?;
    let minor = parts.next()?;
    Some(format!("{}.{}", major, minor))
}

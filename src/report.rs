//! CSV report of installed versions.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::inventory::VersionRecord;

/// File written by the log action unless overridden.
pub const DEFAULT_CSV_PATH: &str = "dotnet_versions.csv";

/// What [`write_csv`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// There were no records, so no file was touched.
    NothingToLog,
    /// The file was (over)written.
    Written { path: PathBuf, rows: usize },
}

/// Write `records` as a `Name,Version` CSV file at `path`.
///
/// An existing file is overwritten. With no records nothing is written,
/// leaving any previous report in place.
pub fn write_csv(records: &[VersionRecord], path: &Path) -> Result<WriteOutcome> {
    if records.is_empty() {
        tracing::debug!("No versions to log; skipping {}", path.display());
        return Ok(WriteOutcome::NothingToLog);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} version(s) to {}", records.len(), path.display());
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}

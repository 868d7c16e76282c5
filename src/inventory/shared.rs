//! Shared .NET runtime directory source.

use std::fs;
use std::path::{Path, PathBuf};

use super::{VersionRecord, VersionSource};

/// Runtime family whose side-by-side versions are enumerated.
pub const CORE_RUNTIME_FAMILY: &str = "Microsoft.NETCore.App";

/// Reads versions from the subdirectory names of a shared runtime directory.
#[derive(Debug, Clone)]
pub struct SharedRuntimeSource {
    dir: PathBuf,
    family: String,
}

impl SharedRuntimeSource {
    /// Source for `dir`, labelled with the default runtime family.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            family: CORE_RUNTIME_FAMILY.to_string(),
        }
    }

    /// The directory being enumerated.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl VersionSource for SharedRuntimeSource {
    fn label(&self) -> &str {
        "shared runtime"
    }

    fn versions(&self) -> Vec<VersionRecord> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            // Follows symlinks and junctions to versioned directories.
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        // NTFS returns entries in name order; other filesystems don't.
        names.sort();

        let name = format!("Core: {}", self.family);
        names
            .into_iter()
            .map(|version| VersionRecord::new(name.clone(), version))
            .collect()
    }
}

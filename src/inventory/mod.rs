//! Installed .NET version inventory.
//!
//! The [`Scanner`] concatenates the records of every configured
//! [`VersionSource`]. Sources never fail: an unreadable registry path or a
//! missing directory simply contributes nothing.
//!
//! # Example
//!
//! ```
//! use dotnet_audit::inventory::{Scanner, StaticSource, VersionRecord};
//!
//! let scanner = Scanner::new()
//!     .with_source(StaticSource::new(vec![VersionRecord::new("Framework: v4.0", "4.0.0")]))
//!     .with_source(StaticSource::new(vec![VersionRecord::new("Core: X", "6.0.28")]));
//!
//! let records = scanner.scan();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].version, "4.0.0");
//! ```

pub mod framework;
pub mod shared;

use serde::Serialize;

use crate::environment::HostEnvironment;

pub use framework::{FrameworkSource, KeyTree, NDP_REGISTRY_PATH};
pub use shared::{SharedRuntimeSource, CORE_RUNTIME_FAMILY};

/// One installed runtime version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Category tag plus identifier, e.g. `"Framework: v4.0"`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Dotted numeric version, e.g. `"6.0.28"`.
    #[serde(rename = "Version")]
    pub version: String,
}

impl VersionRecord {
    /// Create a record.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A place installed versions can be discovered from.
pub trait VersionSource {
    /// Short label used in logs.
    fn label(&self) -> &str;

    /// Enumerate the versions this source knows about.
    ///
    /// Must not fail; an unavailable source returns an empty list.
    fn versions(&self) -> Vec<VersionRecord>;
}

/// Source returning a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<VersionRecord>,
}

impl StaticSource {
    /// Create a source that always yields `records`.
    pub fn new(records: Vec<VersionRecord>) -> Self {
        Self { records }
    }
}

impl VersionSource for StaticSource {
    fn label(&self) -> &str {
        "static"
    }

    fn versions(&self) -> Vec<VersionRecord> {
        self.records.clone()
    }
}

/// Enumerates installed versions across all sources.
#[derive(Default)]
pub struct Scanner {
    sources: Vec<Box<dyn VersionSource>>,
}

impl Scanner {
    /// Create a scanner with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner for this machine: Framework registry first, then the shared
    /// .NET runtime directory.
    pub fn for_host(host: &HostEnvironment) -> Self {
        Self::new()
            .with_source(FrameworkSource::system())
            .with_source(SharedRuntimeSource::new(host.shared_runtime_dir()))
    }

    /// Append a source. Records are returned in source order.
    pub fn with_source(mut self, source: impl VersionSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Enumerate every installed version.
    pub fn scan(&self) -> Vec<VersionRecord> {
        let mut records = Vec::new();
        for source in &self.sources {
            let found = source.versions();
            tracing::debug!("{} source returned {} version(s)", source.label(), found.len());
            records.extend(found);
        }
        records
    }
}

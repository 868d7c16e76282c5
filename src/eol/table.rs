//! End-of-support reference table.

use chrono::NaiveDate;

use crate::error::{AuditError, Result};

/// Built-in .NET (Core) end-of-support dates, keyed by `major.minor`.
const BUILTIN_ENTRIES: &[(&str, (i32, u32, u32))] = &[
    ("7.0", (2024, 5, 14)),
    ("6.0", (2024, 11, 12)),
    ("5.0", (2022, 5, 10)),
    ("3.1", (2022, 12, 13)),
    ("3.0", (2020, 3, 3)),
    ("2.2", (2019, 12, 23)),
    ("2.1", (2021, 8, 21)),
    ("2.0", (2018, 10, 1)),
    ("1.1", (2019, 6, 27)),
    ("1.0", (2019, 6, 27)),
];

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EosEntry {
    /// Two-component release identifier, e.g. `"6.0"`.
    pub major_minor: String,
    /// Last day the release is supported.
    pub end_of_support: NaiveDate,
}

impl EosEntry {
    /// Create an entry.
    pub fn new(major_minor: impl Into<String>, end_of_support: NaiveDate) -> Self {
        Self {
            major_minor: major_minor.into(),
            end_of_support,
        }
    }
}

/// Immutable lookup table of release end-of-support dates.
///
/// Keys are unique and always of the form `X.Y`.
#[derive(Debug, Clone)]
pub struct EolTable {
    entries: Vec<EosEntry>,
}

impl EolTable {
    /// Build a table from explicit entries.
    ///
    /// Fails if a key is not `major.minor` or appears twice.
    pub fn new(entries: Vec<EosEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if !is_major_minor(&entry.major_minor) {
                return Err(AuditError::Validation {
                    field: "end-of-support key".to_string(),
                    message: format!("'{}' is not of the form X.Y", entry.major_minor),
                });
            }
            if entries[..i]
                .iter()
                .any(|e| e.major_minor == entry.major_minor)
            {
                return Err(AuditError::Validation {
                    field: "end-of-support key".to_string(),
                    message: format!("duplicate entry for {}", entry.major_minor),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The table shipped with the tool.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .filter_map(|(key, (y, m, d))| {
                NaiveDate::from_ymd_opt(*y, *m, *d).map(|date| EosEntry::new(*key, date))
            })
            .collect();
        Self { entries }
    }

    /// Look up the end-of-support date for an exact `major.minor` key.
    pub fn lookup(&self, major_minor: &str) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|e| e.major_minor == major_minor)
            .map(|e| e.end_of_support)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[EosEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EolTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_major_minor(key: &str) -> bool {
    match key.split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.chars().all(|c| c.is_ascii_digit())
                && minor.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builtin_has_every_release() {
        let table = EolTable::builtin();
        assert_eq!(table.len(), 10);
        assert_eq!(table.lookup("7.0"), Some(date(2024, 5, 14)));
        assert_eq!(table.lookup("6.0"), Some(date(2024, 11, 12)));
        assert_eq!(table.lookup("1.0"), Some(date(2019, 6, 27)));
    }

    #[test]
    fn lookup_is_exact_match() {
        let table = EolTable::builtin();
        assert_eq!(table.lookup("6"), None);
        assert_eq!(table.lookup("6.0.1"), None);
        assert_eq!(table.lookup("8.0"), None);
    }

    #[test]
    fn builtin_keys_are_unique() {
        let table = EolTable::builtin();
        let rebuilt = EolTable::new(table.entries().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn new_rejects_duplicates() {
        let result = EolTable::new(vec![
            EosEntry::new("8.0", date(2026, 11, 10)),
            EosEntry::new("8.0", date(2027, 1, 1)),
        ]);
        assert!(matches!(result, Err(AuditError::Validation { .. })));
    }

    #[test]
    fn new_rejects_malformed_key() {
        let result = EolTable::new(vec![EosEntry::new("8", date(2026, 11, 10))]);
        assert!(result.is_err());
        let result = EolTable::new(vec![EosEntry::new("v8.0", date(2026, 11, 10))]);
        assert!(result.is_err());
    }

    #[test]
    fn custom_table_extends_lookup() {
        let mut entries = EolTable::builtin().entries().to_vec();
        entries.push(EosEntry::new("8.0", date(2026, 11, 10)));
        let table = EolTable::new(entries).unwrap();
        assert_eq!(table.lookup("8.0"), Some(date(2026, 11, 10)));
        assert_eq!(table.len(), 11);
    }
}

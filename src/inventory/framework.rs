//! .NET Framework registry source.
//!
//! Framework installs record themselves under the `NDP` key of the local
//! machine hive. Every key below it (at any depth) that carries a `Version`
//! string value is one installed version, named after the key itself
//! (`v4.0`, `Full`, `Client`, ...).

use super::{VersionRecord, VersionSource};

/// Registry path (under `HKEY_LOCAL_MACHINE`) of the Framework setup keys.
pub const NDP_REGISTRY_PATH: &str = r"SOFTWARE\Microsoft\NET Framework Setup\NDP";

/// Registry value holding a version string.
const VERSION_VALUE: &str = "Version";

/// A hierarchical key-value store shaped like the Windows registry.
pub trait KeyTree {
    /// Names of the immediate subkeys, in enumeration order.
    fn subkeys(&self) -> Vec<(String, Self)>
    where
        Self: Sized;

    /// A string value stored directly on this key.
    fn string_value(&self, name: &str) -> Option<String>;
}

/// Reads installed Framework versions from a [`KeyTree`].
pub struct FrameworkSource {
    root: Option<Box<dyn Fn() -> Vec<VersionRecord>>>,
}

impl FrameworkSource {
    /// Source backed by the local machine registry.
    ///
    /// Yields nothing on hosts without a registry.
    pub fn system() -> Self {
        #[cfg(windows)]
        {
            Self {
                root: Some(Box::new(|| match registry::open_ndp() {
                    Some(key) => collect(&key),
                    None => Vec::new(),
                })),
            }
        }

        #[cfg(not(windows))]
        {
            Self { root: None }
        }
    }

    /// Source backed by an arbitrary key tree rooted at the `NDP` key.
    pub fn from_tree<T>(tree: T) -> Self
    where
        T: KeyTree + 'static,
    {
        Self {
            root: Some(Box::new(move || collect(&tree))),
        }
    }
}

impl VersionSource for FrameworkSource {
    fn label(&self) -> &str {
        "framework registry"
    }

    fn versions(&self) -> Vec<VersionRecord> {
        match &self.root {
            Some(read) => read(),
            None => {
                tracing::debug!("No registry on this platform; skipping Framework scan");
                Vec::new()
            }
        }
    }
}

/// Depth-first walk collecting every key with a `Version` value.
fn collect<T: KeyTree>(root: &T) -> Vec<VersionRecord> {
    let mut records = Vec::new();
    walk(root, &mut records);
    records
}

fn walk<T: KeyTree>(key: &T, records: &mut Vec<VersionRecord>) {
    for (name, child) in key.subkeys() {
        if let Some(version) = child.string_value(VERSION_VALUE) {
            records.push(VersionRecord::new(format!("Framework: {}", name), version));
        }
        walk(&child, records);
    }
}

#[cfg(windows)]
mod registry {
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};
    use winreg::RegKey;

    use super::{KeyTree, NDP_REGISTRY_PATH};

    pub(super) fn open_ndp() -> Option<RegKey> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        match hklm.open_subkey_with_flags(NDP_REGISTRY_PATH, KEY_READ) {
            Ok(key) => Some(key),
            Err(e) => {
                tracing::debug!("Cannot open HKLM\\{}: {}", NDP_REGISTRY_PATH, e);
                None
            }
        }
    }

    impl KeyTree for RegKey {
        fn subkeys(&self) -> Vec<(String, Self)> {
            self.enum_keys()
                .filter_map(|name| name.ok())
                .filter_map(|name| {
                    self.open_subkey_with_flags(&name, KEY_READ)
                        .ok()
                        .map(|key| (name, key))
                })
                .collect()
        }

        fn string_value(&self, name: &str) -> Option<String> {
            self.get_value::<String, _>(name).ok()
        }
    }
}

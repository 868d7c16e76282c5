//! Host values read once at startup.

use std::path::PathBuf;

/// Fallback when `ProgramFiles` is not set on Windows.
const DEFAULT_PROGRAM_FILES: &str = r"C:\Program Files";

/// Read-only snapshot of the host values the tool depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Root under which the shared `dotnet` installation lives.
    pub program_files: PathBuf,
    /// Directory for the downloaded installer script.
    pub temp_dir: PathBuf,
    /// Name used in ticket titles and descriptions.
    pub machine_name: String,
    /// Current user's home directory, if known.
    pub home: Option<PathBuf>,
}

impl HostEnvironment {
    /// Capture the current process environment.
    pub fn detect() -> Self {
        Self::detect_with_env(|key| std::env::var(key))
    }

    /// Capture with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let program_files = env_fn("ProgramFiles")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_program_files());

        let temp_dir = env_fn("TEMP")
            .or_else(|_| env_fn("TMPDIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir());

        let machine_name = env_fn("COMPUTERNAME")
            .or_else(|_| env_fn("HOSTNAME"))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(system_hostname);

        let home = env_fn("USERPROFILE")
            .or_else(|_| env_fn("HOME"))
            .ok()
            .map(PathBuf::from);

        Self {
            program_files,
            temp_dir,
            machine_name,
            home,
        }
    }

    /// Directory holding side-by-side .NET runtime versions.
    pub fn shared_runtime_dir(&self) -> PathBuf {
        self.dotnet_root()
            .join("shared")
            .join(crate::inventory::CORE_RUNTIME_FAMILY)
    }

    /// Root of the machine-wide `dotnet` installation.
    pub fn dotnet_root(&self) -> PathBuf {
        self.program_files.join("dotnet")
    }

    /// Where the installer puts a new runtime unless told otherwise.
    pub fn default_install_dir(&self) -> PathBuf {
        if cfg!(windows) {
            return self.dotnet_root();
        }
        match &self.home {
            Some(home) => home.join(".dotnet"),
            None => self.dotnet_root(),
        }
    }
}

fn default_program_files() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(DEFAULT_PROGRAM_FILES)
    } else {
        PathBuf::from("/usr/share")
    }
}

fn system_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown-host".to_string())
}

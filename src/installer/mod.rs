//! Latest .NET installation.
//!
//! Downloads the official `dotnet-install` script into the temp directory
//! and runs it for a release channel. When the run fails because the
//! install directory is not writable, the operator is asked once for a
//! replacement directory and the install is retried there.

pub mod download;
pub mod script;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::environment::HostEnvironment;
use crate::error::{AuditError, Result};
use crate::ui::{Prompt, UserInterface};

pub use download::ScriptDownloader;
pub use script::{
    is_permission_failure, Platform, ProcessRunner, ScriptInvocation, ScriptOutput, ScriptRunner,
};

/// How many times a permission failure may lead to a new directory.
const MAX_RELOCATIONS: u32 = 1;

/// Release channel passed to the install script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Standard-term support.
    #[default]
    Sts,
    /// Long-term support.
    Lts,
}

impl Channel {
    /// Parse operator input; blank means the default channel.
    pub fn from_input(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        trimmed.parse()
    }
}

impl FromStr for Channel {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STS" => Ok(Self::Sts),
            "LTS" => Ok(Self::Lts),
            _ => Err(AuditError::Validation {
                field: "channel".to_string(),
                message: format!("expected STS or LTS, got '{}'", s.trim()),
            }),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sts => write!(f, "STS"),
            Self::Lts => write!(f, "LTS"),
        }
    }
}

/// Result of an install attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The script succeeded.
    Installed { dir: PathBuf, channel: Channel },
    /// The operator declined to pick a replacement directory.
    Aborted,
}

/// Downloads and runs the install script.
pub struct Installer {
    platform: Platform,
    downloader: ScriptDownloader,
    runner: Box<dyn ScriptRunner>,
    temp_dir: PathBuf,
    default_dir: PathBuf,
}

impl Installer {
    /// Installer for this host, using the official script URL unless
    /// `script_url` overrides it.
    pub fn for_host(host: &HostEnvironment, script_url: Option<&str>) -> Self {
        let platform = Platform::current();
        let url = script_url.unwrap_or(platform.script_url());
        Self::new(
            platform,
            ScriptDownloader::new(url, platform.script_name()),
            Box::new(ProcessRunner),
            host.temp_dir.clone(),
            host.default_install_dir(),
        )
    }

    /// Assemble an installer from parts.
    pub fn new(
        platform: Platform,
        downloader: ScriptDownloader,
        runner: Box<dyn ScriptRunner>,
        temp_dir: PathBuf,
        default_dir: PathBuf,
    ) -> Self {
        Self {
            platform,
            downloader,
            runner,
            temp_dir,
            default_dir,
        }
    }

    /// Directory used when none is given.
    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }

    /// Install the latest release of `channel` into `install_dir` (or the
    /// default directory).
    pub fn install_latest(
        &self,
        install_dir: Option<&Path>,
        channel: Channel,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        let dir = install_dir.unwrap_or(self.default_dir.as_path()).to_path_buf();

        let mut spinner = ui.start_spinner("Downloading install script...");
        let script = match self.downloader.download(&self.temp_dir) {
            Ok(path) => {
                spinner.finish_clear();
                path
            }
            Err(e) => {
                spinner.finish_error("Download failed");
                return Err(e);
            }
        };

        let result = self.run_in(&script, &dir, channel, ui, 0);

        if let Err(e) = std::fs::remove_file(&script) {
            tracing::debug!("Could not remove {}: {}", script.display(), e);
        }

        result
    }

    fn run_in(
        &self,
        script: &Path,
        dir: &Path,
        channel: Channel,
        ui: &mut dyn UserInterface,
        depth: u32,
    ) -> Result<InstallOutcome> {
        let invocation = ScriptInvocation::new(self.platform, script, dir, channel);

        let mut spinner = ui.start_spinner(&format!(
            "Installing .NET ({}) into {}...",
            channel,
            dir.display()
        ));
        let output = self.runner.run(&invocation)?;
        spinner.finish_clear();

        if output.success {
            return Ok(InstallOutcome::Installed {
                dir: dir.to_path_buf(),
                channel,
            });
        }

        if !output.is_permission_failure() || depth >= MAX_RELOCATIONS {
            let detail = output.last_line().unwrap_or("script exited with an error");
            return Err(AuditError::InstallFailed {
                message: format!("{} ({})", detail, dir.display()),
            });
        }

        tracing::warn!("No write access to {}", dir.display());
        ui.warning(&format!("No write access to {}.", dir.display()));

        let answer = ui
            .prompt(&Prompt::input(
                "install_dir",
                "Enter a different install directory (blank to cancel)",
            ))?
            .into_string();
        if answer.is_empty() {
            return Ok(InstallOutcome::Aborted);
        }

        let new_dir = PathBuf::from(answer);
        if !new_dir.exists() {
            std::fs::create_dir_all(&new_dir).map_err(|source| AuditError::DirectoryCreate {
                path: new_dir.clone(),
                source,
            })?;
        }

        self.run_in(script, &new_dir, channel, ui, depth + 1)
    }
}

//! Install script invocation.
//!
//! Builds the platform command line for `dotnet-install`, runs it, and
//! classifies failures.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use crate::error::{AuditError, Result};

use super::Channel;

/// Output patterns meaning the install directory is not writable.
static PERMISSION_FAILURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(access to the path .* is denied|access is denied|permission denied|unauthorizedaccess|requires elevation|operation not permitted|read-only file system|EACCES)",
    )
    .expect("PERMISSION_FAILURE must compile")
});

/// Script flavor for the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// PowerShell script run through `powershell`.
    Windows,
    /// Bash script.
    Unix,
}

impl Platform {
    /// Platform of the running host.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Official download URL of the install script.
    pub fn script_url(&self) -> &'static str {
        match self {
            Self::Windows => "https://dot.net/v1/dotnet-install.ps1",
            Self::Unix => "https://dot.net/v1/dotnet-install.sh",
        }
    }

    /// File name the script is saved under.
    pub fn script_name(&self) -> &'static str {
        match self {
            Self::Windows => "dotnet-install.ps1",
            Self::Unix => "dotnet-install.sh",
        }
    }
}

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub install_dir: PathBuf,
}

impl ScriptInvocation {
    /// Command line for running `script` into `install_dir` on `platform`.
    ///
    /// The script never touches `PATH`.
    pub fn new(platform: Platform, script: &Path, install_dir: &Path, channel: Channel) -> Self {
        let script = script.display().to_string();
        let dir = install_dir.display().to_string();
        let channel = channel.to_string();

        let (program, args) = match platform {
            Platform::Windows => (
                "powershell",
                vec![
                    "-NoProfile".to_string(),
                    "-ExecutionPolicy".to_string(),
                    "Bypass".to_string(),
                    "-File".to_string(),
                    script,
                    "-InstallDir".to_string(),
                    dir,
                    "-Channel".to_string(),
                    channel,
                    "-NoPath".to_string(),
                ],
            ),
            Platform::Unix => (
                "bash",
                vec![
                    script,
                    "--install-dir".to_string(),
                    dir,
                    "--channel".to_string(),
                    channel,
                    "--no-path".to_string(),
                ],
            ),
        };

        Self {
            program: program.to_string(),
            args,
            install_dir: install_dir.to_path_buf(),
        }
    }

    /// Command line as one display string.
    pub fn display(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// What a finished script run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub success: bool,
    /// Combined stdout and stderr.
    pub output: String,
}

impl ScriptOutput {
    /// Whether the output shows the install directory was not writable.
    pub fn is_permission_failure(&self) -> bool {
        !self.success && is_permission_failure(&self.output)
    }

    /// The last non-empty output line, for error messages.
    pub fn last_line(&self) -> Option<&str> {
        self.output
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

/// Whether `output` reports a write-access problem.
pub fn is_permission_failure(output: &str) -> bool {
    PERMISSION_FAILURE.is_match(output)
}

/// Executes install script invocations.
pub trait ScriptRunner {
    /// Run to completion. `Err` only when the process could not start.
    fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutput>;
}

/// Runs invocations as child processes.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ScriptRunner for ProcessRunner {
    fn run(&self, invocation: &ScriptInvocation) -> Result<ScriptOutput> {
        tracing::info!("Running {}", invocation.display());

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| AuditError::InstallFailed {
                message: format!("could not start {}: {}", invocation.program, e),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(
            "{} exited with {:?}",
            invocation.program,
            output.status.code()
        );

        Ok(ScriptOutput {
            success: output.status.success(),
            output: text,
        })
    }
}

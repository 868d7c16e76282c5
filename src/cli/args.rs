//! CLI argument definitions.
//!
//! There are no subcommands: every flag adjusts how the interactive menu
//! behaves. The main entry point is the [`Cli`] struct, resolved once into
//! [`Settings`].

use clap::Parser;
use std::path::PathBuf;

use crate::report::DEFAULT_CSV_PATH;
use crate::ui::{should_use_colors, OutputMode};

/// dotnet-audit - Inventory installed .NET runtimes and flag end-of-support releases.
#[derive(Debug, Parser)]
#[command(name = "dotnet-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimal output (no banner or spinners)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Where the log action writes its CSV report
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Install directory for the install action (defaults per platform)
    #[arg(long, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Work-tracking service base URL (overrides https://<org>.visualstudio.com)
    #[arg(long, env = "DOTNET_AUDIT_TRACKER_URL", hide = true)]
    pub tracker_url: Option<String>,

    /// Install script URL (overrides the official dot.net script)
    #[arg(long, env = "DOTNET_AUDIT_INSTALLER_URL", hide = true)]
    pub installer_url: Option<String>,
}

/// Runtime settings resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_mode: OutputMode,
    pub colors: bool,
    pub csv_path: PathBuf,
    pub install_dir: Option<PathBuf>,
    pub tracker_url: Option<String>,
    pub installer_url: Option<String>,
}

impl Settings {
    /// Resolve settings for the current process.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli, should_use_colors())
    }

    /// Resolve settings with a known terminal color capability.
    pub fn resolve(cli: &Cli, terminal_colors: bool) -> Self {
        Self {
            output_mode: OutputMode::from_quiet(cli.quiet),
            colors: terminal_colors && !cli.no_color,
            csv_path: cli.csv_path.clone(),
            install_dir: cli.install_dir.clone(),
            tracker_url: non_blank(cli.tracker_url.as_deref()),
            installer_url: non_blank(cli.installer_url.as_deref()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::Normal,
            colors: false,
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            install_dir: None,
            tracker_url: None,
            installer_url: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

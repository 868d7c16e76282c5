//! dotnet-audit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dotnet_audit::cli::{AuditContext, Cli, Menu, Settings};
use dotnet_audit::environment::HostEnvironment;
use dotnet_audit::eol::{Classifier, EolTable};
use dotnet_audit::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, since the menu owns stdout
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dotnet_audit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotnet_audit=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dotnet-audit starting with args: {:?}", cli);

    let settings = Settings::from_cli(&cli);
    if !settings.colors {
        console::set_colors_enabled(false);
    }

    let host = HostEnvironment::detect();
    tracing::debug!("Host: {:?}", host);

    let classifier = Classifier::new(EolTable::builtin());
    let mut ui = create_ui(settings.output_mode, settings.colors);
    let ctx = AuditContext::for_host(settings, host, classifier);

    match Menu::new(&ctx).run(ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

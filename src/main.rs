//! Stackprobe entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use stackprobe::config::Config;
use stackprobe::probe::build_probes;
use stackprobe::report::Reporter;
use stackprobe::server::serve;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stackprobe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stackprobe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(config.debug);

    tracing::debug!("Stackprobe starting, binding {}", config.bind);

    let probes = build_probes(&config);
    let reporter = Arc::new(Reporter::new(config.server_software.clone(), probes));

    match serve(config.bind, reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

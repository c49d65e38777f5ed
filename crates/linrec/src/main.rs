//! linrec: N-th term of a linear recurrence by matrix exponentiation.

use std::process::ExitCode;

use linrec_lib::{app, config, errors};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing; RUST_LOG overrides the default level.
    let default_level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let status = errors::exit_status(&app::run(&config));
    ExitCode::from(u8::try_from(status).unwrap_or(1))
}

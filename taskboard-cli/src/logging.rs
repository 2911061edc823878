use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Pick the log level from the command-line flags, falling back to the
/// configured level and then `WARN`.
pub fn log_level(verbose: bool, debug: bool, quiet: bool, configured: Option<&str>) -> String {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else if let Some(configured) = configured {
        return configured.to_string();
    } else {
        Level::WARN
    };
    level.to_string().to_lowercase()
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable. `RUST_LOG` wins over everything else.
pub fn configure_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

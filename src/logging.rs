//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level selected by the `--debug` flag
pub fn level_for(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Output goes to stderr so records printed on
/// stdout are not interleaved with log lines.
pub fn init(debug: bool) {
    let log_level = level_for(debug);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}

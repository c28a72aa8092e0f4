// ChromaLog - util/logging.rs
//
// Structured diagnostic logging with runtime-selectable debug mode. This is
// the diagnostic side channel (stderr or file), distinct from the visual
// console the application exists to demonstrate: dropped appends and export
// failures are noted here.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (same as RUST_LOG=debug)
//   - Config file: [logging] level = "debug"
//
// Priority: RUST_LOG env var > CLI --debug flag > config level > default.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
/// `log_file` is the optional log file path from config.toml; when set and
/// creatable, output goes to that file instead of stderr.
pub fn init(debug_flag: bool, config_level: Option<&str>, log_file: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    match log_file.map(std::fs::File::create) {
        Some(Ok(file)) => {
            builder.with_ansi(false).with_writer(Arc::new(file)).init();
        }
        Some(Err(e)) => {
            // Fall back to stderr; the subscriber is not up yet, so report
            // the failure directly.
            eprintln!("Warning: cannot create log file: {e}. Logging to stderr.");
            builder.init();
        }
        None => {
            builder.init();
        }
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

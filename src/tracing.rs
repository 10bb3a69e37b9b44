//! Logging setup
//!
//! Console logs go to stderr so they never interleave with the panel on
//! stdout. `RUST_LOG` takes precedence over `-v`:
//! - `sandbox-config -vv` - debug for everything
//! - `RUST_LOG=sandbox_config::update=trace` - per-module filtering
//!
//! A debug-level copy is written to `<config dir>/logs/sandbox-config.log`
//! with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_NAME};

/// Console filter directive for a `-v` count
pub fn console_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing with a stderr layer and a rolling file layer
pub fn init(verbosity: u8) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directive(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .with_filter(console_filter);

    // File logging is best effort; a read-only home still gets console logs
    let file_layer = match ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("sandbox_config=debug")),
        ),
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

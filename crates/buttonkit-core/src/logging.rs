//! Logging setup.
//!
//! Verbosity comes from repeated `-v` flags; `RUST_LOG` takes precedence
//! when set so the filter can still be tuned per-module.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `verbose` maps to a default level: 0 = warn, 1 = info, 2 = debug,
/// 3+ = trace.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

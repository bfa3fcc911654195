//! Logging setup for the gt-core binary.
//!
//! stdout is reserved for command payloads; all diagnostics go to stderr.
//! The level comes from the verbosity flags, with `RUST_LOG` taking
//! precedence when set.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs. Verbosity
/// maps to levels as: quiet = error, default = info, `-v` = debug,
/// `-vv` = trace.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let use_ansi = std::io::stderr().is_terminal();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

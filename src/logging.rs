//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with minified output on stdout.
//! `DEVMIN_LOG` takes the usual `EnvFilter` syntax and wins over `-v`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "DEVMIN_LOG";

/// Level selected by the number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the filter from `DEVMIN_LOG`, falling back to the verbosity level.
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = level_for_verbosity(verbosity);
        EnvFilter::new(format!("devmin={}", level.as_str().to_lowercase()))
    })
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr))
        .try_init();
}

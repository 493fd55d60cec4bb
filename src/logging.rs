//! Tracing subscriber setup
//!
//! Events go to stderr so they never mix with game output on stdout. The
//! filter comes from `RUST_LOG`, falling back to the level passed to [`init`].

use tracing::trace;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber
///
/// Returns whether this call installed it. Later calls leave the first
/// subscriber in place and return `false`.
pub fn init(default_level: &str) -> bool {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter(directives.as_deref(), default_level))
        .try_init()
        .is_ok();

    if installed {
        trace!("logging initialized");
    }
    installed
}

/// Filter from `RUST_LOG`-style directives, else `default_level`, else `warn`
fn env_filter(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

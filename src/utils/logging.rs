//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, filtered by the
//! `PERSONABOT_LOG` environment variable (same syntax as `RUST_LOG`).
//! Without it only warnings and errors are shown, so the transcript on
//! stdout stays readable.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PERSONABOT_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let directive = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

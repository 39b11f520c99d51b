//! frontdesk-app library root.
//!
//! Re-exports the shell modules so that the binary, examples and
//! integration tests drive the same command layer a frontend would.

pub mod aws;
pub mod backend;
pub mod commands;
pub mod config;
pub mod state;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// `RUST_LOG`-style filtering, `info` by default.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run `f` under a plain-text subscriber writing to `writer`, for events
/// raised before [`init_tracing`] runs (config migration happens there).
pub fn with_startup_logging<W, T>(writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

pub fn init_tracing(json: bool) {
    let filter = env_filter();

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

//! Timestamped logging
//!
//! A single `tracing` subscriber is installed at startup. Its timer writes the
//! local wall-clock time as `HH:MM:SS` at the very start of every line, ahead
//! of the level and the message.

use axum::extract::Request;
use chrono::Local;
use std::io::IsTerminal;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{info, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `chrono` format of the line prefix
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Local wall-clock timer for the fmt layer
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIME_FORMAT))
    }
}

/// Level filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Build the subscriber without installing it
pub fn build_subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalClock)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(make_writer)
        .finish()
}

/// Whether output to `stream` gets colour. Only terminals do, so piped or
/// redirected lines begin with the bare timestamp.
pub fn use_ansi(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

/// Install the process-wide subscriber writing to stdout.
///
/// Fails if a subscriber is already installed.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let ansi = use_ansi(&std::io::stdout());
    let subscriber = build_subscriber(env_filter(), std::io::stdout, ansi);
    tracing::subscriber::set_global_default(subscriber)
}

/// Log an inbound request the way both responders do
pub(crate) fn log_request(request: &Request) {
    info!(
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        headers = ?request.headers(),
        "Request received"
    );
}

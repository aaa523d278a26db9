//! Logging integration for mapfmt.
//!
//! Provides a helper for configuring a [`tracing`]-based subscriber. The
//! library itself only emits events (suppressed rendering errors are logged
//! at `warn`); installing a subscriber is left to the embedding application.

/// Sets up the global tracing subscriber with the given filter directive.
///
/// `filter` is an env-filter string such as `"info"` or `"mapfmt=debug"`.
/// In pretty mode a human-readable format with file/line locations is used;
/// otherwise events are emitted as structured JSON.
///
/// Installation failures (e.g. a subscriber was already set) are ignored so
/// the helper is safe to call from multiple tests.
pub fn setup_logging(filter: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

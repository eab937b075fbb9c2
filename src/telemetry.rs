//! Tracing subscriber setup shared by the server and the admin CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `level` is an `EnvFilter` directive string such as `info` or
/// `linkforge=debug,tower_http=info`; an unparsable value falls back to `info`.
/// `format` selects `json` output, anything else gives human-readable text.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

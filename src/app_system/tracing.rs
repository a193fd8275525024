use tracing_subscriber::EnvFilter;

/// Initializes structured logging once for the whole process.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (from the
/// `[logging]` config section) applies.
pub fn setup_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

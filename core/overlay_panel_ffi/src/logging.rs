use tracing_subscriber::EnvFilter;

/// Installs the global subscriber for the core's `tracing` events.
///
/// With `debug` the level defaults to `debug` and `RUST_LOG` may override it;
/// otherwise it is pinned to `info`. Calling this again is a no-op.
#[uniffi::export]
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

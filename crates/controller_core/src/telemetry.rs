//! Telemetry init (dev-friendly pretty logs by default).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Initialize the global subscriber, honoring `LOG_LEVEL` (default `info`).
/// Safe to call more than once; later calls are ignored.
pub fn init(dev_pretty: bool) {
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if dev_pretty {
        fmt::layer().pretty().boxed()
    } else {
        fmt::layer().boxed()
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global JSON log subscriber.
///
/// Each record is written to stdout as one JSON object with its structured
/// fields. `RUST_LOG` overrides the default `info` level, e.g.
/// `RUST_LOG=image_guard=debug,serenity=warn`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stdout),
        )
        .init();
}

//! Shared setup for the integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for dispatch events.
///
/// Safe to call from every test. Only takes effect when `RUST_LOG` is set,
/// e.g. `RUST_LOG=matchkit=trace cargo test`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_test_writer())
                .with(filter)
                .init();
        }
    });
}

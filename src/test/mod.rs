
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TEST_LOGGING: Once = Once::new();

/// Installs a global `tracing` subscriber writing through the test harness.
/// `RUST_LOG` overrides the default `debug` filter.
pub(crate) fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init()
        {
            eprintln!("Failed to set up test logging: {}", e);
        }
    });
}

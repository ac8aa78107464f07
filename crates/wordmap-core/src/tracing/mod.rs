//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the wordmap tracing/logging system.
///
/// Reads the `WORDMAP_LOG` environment variable for log levels, e.g.
/// `WORDMAP_LOG=wordmap_core::loader=debug`. Falls back to `info` for the
/// wordmap crates if `WORDMAP_LOG` is not set or is invalid.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("WORDMAP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("wordmap_core=info,wordmap_cli=info,wordmap=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

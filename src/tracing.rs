//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Without `RUST_LOG` the level is INFO, or DEBUG when `verbose` is set so
/// per-item score details are emitted. A valid `RUST_LOG` replaces that default
/// entirely, bare levels included.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level(is_test || verbose).to_string()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        // Another test in the same binary may already have installed one.
        if is_test {
            let _ = builder.with_test_writer().try_init();
        } else if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

const fn default_level(debug: bool) -> tracing::Level {
    if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

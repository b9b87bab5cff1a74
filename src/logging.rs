use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, `RUST_LOG` aware).
///
/// Safe to call more than once; only the first call has any effect.
/// `verbose` raises the default filter to debug when `RUST_LOG` is unset.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default_filter = if verbose {
            "info,codeassist=debug"
        } else {
            "warn"
        };
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // stdout is reserved for listings and tool results
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}

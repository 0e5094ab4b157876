use std::sync::Once;

use crate::GeneratorOptions;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter. `RUST_LOG` is read when it
/// is unset.
pub const LOG_ENV: &str = "METAGEN_LOG";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `METAGEN_LOG=meta_filter=debug` (or `RUST_LOG`). Without
/// either variable nothing is installed, unless `options.verbose` asks for
/// debug output.
pub fn init_tracing(options: &GeneratorOptions) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = log_directives(options.verbose) else {
            return;
        };
        let filter = EnvFilter::new(directives);
        // Another subscriber may already be installed by the embedding binary.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

fn log_directives(verbose: bool) -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .or_else(|| verbose.then(|| "debug".to_string()))
}

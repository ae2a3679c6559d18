pub mod colors;
pub mod date;
pub mod formatting;
pub mod number;
pub mod path;

pub use formatting::format_amount;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber. Diagnostics go to stderr and
/// default to warnings only; `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rtimesheet=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

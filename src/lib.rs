pub mod api;
pub mod config;
pub mod history;
pub mod loader;
pub mod models;
pub mod source;
pub mod view;

use tracing_subscriber::EnvFilter;

/// Initialize tracing from RUST_LOG, falling back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Application-level constants
pub const APP_NAME: &str = "Chartview";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the demo server binds when none is given on the command line.
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Base latency the mock data source adds per fetch, so the loading phase
/// is visible in a live viewer. Jitter is added on top.
pub const MOCK_LATENCY_MS: u64 = 120;

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info,tower_http=info", env!("CARGO_PKG_NAME"))
}

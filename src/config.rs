use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "MedTimeline";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Listen address when `MEDTIMELINE_ADDR` is unset or invalid.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Environment variable overriding the listen address.
pub const BIND_ADDR_ENV: &str = "MEDTIMELINE_ADDR";

/// Largest accepted request body (1 MiB).
pub const MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "warn,medtimeline_lib=info,medtimeline=info"
}

/// Resolve the listen address from the environment.
pub fn bind_addr() -> SocketAddr {
    parse_bind_addr(std::env::var(BIND_ADDR_ENV).ok().as_deref())
}

/// Parse a listen address, falling back to [`DEFAULT_BIND_ADDR`].
pub fn parse_bind_addr(raw: Option<&str>) -> SocketAddr {
    let default = default_bind_addr();
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!(value, error = %e, "Invalid {BIND_ADDR_ENV}, using {default}");
            default
        }),
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

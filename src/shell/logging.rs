use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
/// Respects `RUST_LOG`, otherwise logs `info` for the service, axum and tower_http.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt().with_env_filter(env_filter).with_target(false).try_init();
}

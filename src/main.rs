use std::sync::Arc;

use pl_server_rs::api::{Api, ApiState};
use pl_server_rs::config_handler;
use tracing::log;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info,tower_http=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Arc::new(config_handler::get_config()?);
    if !config.has_token() {
        log::warn!("[MAIN] No football-data token, set {}", config_handler::TOKEN_ENV_VARS.join(" or "));
    }

    let state = ApiState::new(config.clone());
    Api::serve(config.port, state).await
}

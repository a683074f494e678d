use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tsuki_auth_api::app;
use tsuki_auth_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up AUTH_API_PORT, VALIDATION_LOCALE, etc.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    init_tracing(&config);
    tracing::info!(
        "Starting auth API in {:?} mode (validation locale: {})",
        config.environment,
        config.validation.locale
    );

    let app = app::app(&config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Listening on http://{}", bind_addr);
    tracing::info!(
        "API reference at http://{}/ui (document at {})",
        bind_addr,
        config.docs.openapi_path
    );

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let default_filter = if config.is_development() {
        "tsuki_auth_api=debug,tower_http=info"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

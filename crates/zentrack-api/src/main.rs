use tracing_subscriber::EnvFilter;

use zentrack_api::config::ApiConfig;
use zentrack_api::router;
use zentrack_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let state = AppState::new(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        unset_policy = ?config.unset_policy,
        trend_capacity = config.trend_capacity,
        "zentrack api listening"
    );

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}

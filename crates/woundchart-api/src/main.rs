use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use woundchart_api::config::{ApiConfig, LogFormat};
use woundchart_api::routes;
use woundchart_api::state::AppState;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;
    init_tracing(config.log_format);

    let bind = config.bind;
    let app = routes::app(AppState::new(config));

    let listener = TcpListener::bind(bind).await?;
    tracing::info!(%bind, "woundchart api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

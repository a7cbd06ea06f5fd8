use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use crewseat_api::{app, AppState};
use crewseat_core::service::VoucherService;
use crewseat_store::{app_config::Config, DbClient, SqlVoucherRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crewseat_api=debug,crewseat_core=info,crewseat_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting crew seat voucher API on port {}", config.server.port);
    tracing::info!("Database: {}", config.database.url);

    let db = DbClient::new(&config.database)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;

    let repo = Arc::new(SqlVoucherRepository::new(db.pool.clone()));

    let app_state = AppState {
        vouchers: VoucherService::new(repo),
        cors_origins: config.server.cors_origins.clone(),
    };
    tracing::info!("CORS enabled for: {:?}", app_state.cors_origins);

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

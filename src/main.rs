// src/main.rs

use std::sync::Arc;

use progress_dashboard_api::{
    auth::StaticCredential,
    build_router,
    config::AppConfig,
    db::SqlReportStore,
    notifier::spawn_notifier,
    telemetry,
    test_data::TestDataProvider,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();
    telemetry::init(telemetry::DEFAULT_FILTER);

    let config = AppConfig::from_env()?;
    info!(
        database = %config.database.target(),
        driver = %config.database.driver,
        sql_dir = %config.database.sql_dir.display(),
        test_data = %config.test_data_file.display(),
        "configuration loaded"
    );

    let store = SqlReportStore::from_config(&config.database)?;
    let credentials = StaticCredential::new(&config.auth.username, &config.auth.password);
    let state = AppState::new(
        Arc::new(store),
        TestDataProvider::new(&config.test_data_file),
        Arc::new(credentials),
    );

    // Realtime notifier runs for the life of the process
    let notifier = spawn_notifier(state.updates.clone(), config.notify_interval);

    let app = build_router(state);
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    notifier.abort();
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use youandme_api::app_state::build_app_state;
use youandme_api::config::AppConfig;
use youandme_api::logging::init_tracing;
use youandme_api::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_dir.as_deref(), "info");

    info!(
        addr = %config.server_addr,
        database = %config.database_path.display(),
        cors_origin = %config.cors_origin,
        llm = ?config.llm,
        "Starting youandme-api"
    );

    if !config.database_path.exists() {
        warn!(
            "Database {} not found; location endpoints will fail until `import-locations` is run",
            config.database_path.display()
        );
    }

    let addr = config.server_addr.clone();
    let app = app_router(build_app_state(config)?)?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

use color_eyre::{eyre::WrapErr, Result};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use crate::{api, config::ServerConfig};

/// Resolves once the process is asked to stop (Ctrl-C, or SIGTERM on unix)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(?e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(?e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received, draining connections");
}

/// Binds the configured address and serves the API until shutdown.
#[instrument(skip_all, fields(address = %config.bind_address))]
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = api::router(&config);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.bind_address))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    info!("Server stopped");
    Ok(())
}

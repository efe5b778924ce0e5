//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for SIGINT and trigger shutdown.
pub async fn handle_signals(shutdown: &Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to install signal handler"),
    }
    shutdown.trigger();
}

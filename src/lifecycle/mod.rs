//! Serving and graceful shutdown.

mod shutdown;

pub use shutdown::shutdown_signal;

use crate::error::{Result, StampError};
use axum::Router;

/// Bind `addr` and serve `router` until a shutdown signal arrives.
pub async fn serve(router: Router, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StampError::Internal(format!("failed to bind {}: {}", addr, e)))?;

    if let Ok(local) = listener.local_addr() {
        tracing::info!("Listening on http://{}", local);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StampError::Internal(format!("server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

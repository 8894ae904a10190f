//! Timeline API server lifecycle: starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::timeline_api_router;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Metadata for a running server.
#[derive(Debug, Clone)]
pub struct TimelineApiSession {
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running timeline API server.
pub struct TimelineApiServer {
    pub session: TimelineApiSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TimelineApiServer {
    /// Signal graceful shutdown. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Timeline API server shutdown signal sent");
        }
    }

    /// Shut down and wait for in-flight requests to finish.
    pub async fn stop(mut self) {
        self.shutdown();
        if let Err(e) = self.task.await {
            tracing::error!("Timeline API server task failed: {e}");
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Bind `addr` and serve the timeline API in a background task.
///
/// Port 0 picks an ephemeral port; the bound port is reported in the
/// returned session.
pub async fn start_server(addr: SocketAddr) -> Result<TimelineApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind timeline API server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = timeline_api_router();

    let session = TimelineApiSession {
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Timeline API server received shutdown signal");
        };

        tracing::info!(%addr, "Timeline API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Timeline API server error: {e}");
        }

        tracing::info!("Timeline API server stopped");
    });

    Ok(TimelineApiServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

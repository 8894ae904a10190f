pub mod api;
pub mod config;
pub mod extraction;
pub mod timeline;

use tracing_subscriber::EnvFilter;

pub use extraction::{analyze_text, Event, EventCategory, TimelineExtractor};
pub use timeline::Timeline;

/// Start the timeline API and serve until Ctrl-C.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server = api::start_server(config::bind_addr()).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
    }

    server.stop().await;
    Ok(())
}

// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{PreviewError, Result};
use crate::traits::ContentSource;
pub use self::state::AppState;

/// Create the Axum application router with all routes and middleware
pub fn create_app<S>(state: AppState<S>) -> Router
where
    S: ContentSource + 'static,
{
    Router::new()
        .route("/preview", get(handlers::preview_handler::<S>))
        .route("/health", get(handlers::health_check))
        .route("/debug", get(handlers::debug_environment::<S>))
        .route("/", get(handlers::root_handler::<S>))
        .route("/*path", get(handlers::content_by_path_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    info!("Preview server listening on {}", local);
    info!("- Preview endpoint: http://{}/preview?key=...", local);
    info!("- Health endpoint: http://{}/health", local);
    info!("- Debug endpoint: http://{}/debug", local);

    axum::serve(listener, app)
        .await
        .map_err(|e| PreviewError::server(format!("Server stopped: {}", e)))
}

//! Axum server setup
//!
//! Server skeleton with:
//! - CORS restricted to configured origins
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C, then the store is closed

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::error::{Result, StartupError};
use crate::store::StudyStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudyStore>,
}

/// CORS for the given origins: credentials allowed, methods and headers
/// mirrored from the preflight request.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the application router with all routes
pub fn build_router(store: Arc<dyn StudyStore>, origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::schedules::router())
        .merge(routes::completed_topics::router())
        .layer(cors_layer(origins))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// Run the HTTP server until a shutdown signal, then close the store.
///
/// # Example
///
/// ```ignore
/// let store = PgStore::connect(&config.database_url, config.max_connections).await?;
/// run_server(Arc::new(store), &config).await?;
/// ```
pub async fn run_server(store: Arc<dyn StudyStore>, config: &ServerConfig) -> Result<()> {
    let origins = config.cors_origins()?;
    tracing::info!(origins = ?config.allowed_origins, "CORS origins configured");

    let app = build_router(store.clone(), origins);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    served.map_err(StartupError::Serve)?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

use crate::config::ServerConfig;
use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the Axum application
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let cors = cors_layer(config);

    let api_routes = Router::new()
        .route("/predict", post(routes::predict))
        .route("/form", get(routes::form_spec))
        .route("/schema", get(routes::schema));

    Router::new()
        .route("/", get(routes::index))
        .nest("/api", api_routes)
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .route("/static/*path", get(static_files::serve_static))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the server until Ctrl+C or SIGTERM
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.address, config.port).parse()?;
    let app = build_app(state, config);

    info!("Starting SalaryCast server on {}", addr);
    info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Cross-origin policy: any origin when enabled, otherwise the server's own
/// address and its loopback aliases on the configured port
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allow_any_origin {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let mut origins: Vec<HeaderValue> = Vec::new();
    for host in [config.address.as_str(), "localhost", "127.0.0.1"] {
        let origin = format!("http://{}:{}", host, config.port);
        match HeaderValue::from_str(&origin) {
            Ok(value) if !origins.contains(&value) => origins.push(value),
            Ok(_) => {}
            Err(e) => warn!("Skipping invalid CORS origin {}: {}", origin, e),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}

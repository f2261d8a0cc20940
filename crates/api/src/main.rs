use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;
use movies_db::repositories::MongoMovieStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=debug,movies_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let mongodb_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let database_name = std::env::var("MONGODB_DATABASE").ok();

    let db = movies_db::connect(&mongodb_uri, database_name.as_deref())
        .await
        .expect("Failed to configure MongoDB client");

    // The driver connects lazily; an unreachable server is logged, not fatal.
    match movies_db::health_check(&db).await {
        Ok(()) => tracing::info!(database = %db.name(), "MongoDB connected"),
        Err(err) => tracing::error!(error = %err, "MongoDB connection error"),
    }

    let state = AppState {
        store: Arc::new(MongoMovieStore::new(&db)),
    };

    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Movie service stopped");
}

/// Resolves on Ctrl-C, or SIGTERM on Unix. In-flight requests are drained
/// before the MongoDB client is dropped.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!(signal = "SIGINT", "Shutting down movie service"),
        () = terminate => tracing::info!(signal = "SIGTERM", "Shutting down movie service"),
    }
}

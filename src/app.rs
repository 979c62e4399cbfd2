//! Application shell: assembles the router and runs the server between `connect` and `disconnect`.

use crate::config::Settings;
use crate::routes::{common_routes, menu_item_routes, restaurant_routes};
use crate::state::AppState;
use crate::store::Gateway;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(restaurant_routes(state.clone()))
        .merge(menu_item_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Connect, serve until a shutdown signal, let in-flight requests drain, then disconnect.
/// A store that cannot be reached at startup is fatal.
pub async fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    if settings.telemetry_connection_string.is_some() {
        tracing::info!("telemetry connection string configured");
    }
    tracing::info!(database = %settings.database, "connecting");
    let gateway = Gateway::new(settings.database.connect_options()?, settings.max_connections);
    gateway.connect().await?;

    let app = build_router(AppState::new(gateway.clone(), settings.app_name.clone()));
    let served = serve(app, &settings).await;
    gateway.disconnect().await;
    served
}

async fn serve(app: Router, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(
        "{} {} listening on http://{}",
        settings.app_name,
        settings.app_version,
        listener.local_addr()?
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
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
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}

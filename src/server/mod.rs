//! HTTP transport: five stateless POST endpoints over the store handle.

pub mod response;
pub mod routes;

use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::initialize::open_store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::post;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub reconciler: Arc<Reconciler>,
}

impl AppState {
    pub fn new(pool: DbPool, reconciler: Reconciler) -> Self {
        Self {
            pool: Arc::new(pool),
            reconciler: Arc::new(reconciler),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(routes::login))
        .route("/addActivity", post(routes::add_activity))
        .route("/editActivity", post(routes::edit_activity))
        .route("/getComputedActivities", post(routes::computed_activities))
        .route("/getRawActivities", post(routes::raw_activities))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}

/// Open the store, run migrations and serve until Ctrl-C.
pub async fn serve(cfg: &Config, bind: &str) -> AppResult<()> {
    let reconciler = cfg.reconciler()?;
    let pool = open_store(&cfg.database)?;
    let state = AppState::new(pool, reconciler);

    let listener = TcpListener::bind(bind).await?;
    info!(
        address = %bind,
        database = %cfg.database,
        policy = ?cfg.policy,
        "server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

mod handlers;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::session::Prioritizer;

pub use handlers::ApiError;

/// Shared handle to the session.
///
/// Every request goes through the one mutex, so the session sees a single
/// writer at a time.
#[derive(Clone)]
pub struct AppState {
    prioritizer: Arc<Mutex<Prioritizer>>,
}

impl AppState {
    pub fn new(prioritizer: Prioritizer) -> Self {
        Self {
            prioritizer: Arc::new(Mutex::new(prioritizer)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Prioritizer>, ApiError> {
        self.prioritizer
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}

pub fn create_router(prioritizer: Prioritizer) -> Router {
    let api = Router::new()
        // Initiatives
        .route(
            "/initiatives",
            get(handlers::list_initiatives).post(handlers::create_initiative),
        )
        .route("/initiatives/{id}", delete(handlers::delete_initiative))
        // Ranking
        .route("/ranked", get(handlers::list_ranked))
        // Weights
        .route(
            "/weights",
            get(handlers::get_weights).put(handlers::replace_weights),
        )
        .route("/weights/{factor}", put(handlers::set_weight))
        // Diagnostics and metadata
        .route("/config", get(handlers::get_config))
        .route("/factors", get(handlers::list_factors))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState::new(prioritizer))
}

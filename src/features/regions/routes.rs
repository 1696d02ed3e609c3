use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/states", get(handlers::list_states))
        .route("/api/states/{code}", get(handlers::get_state))
        .route("/api/counties", get(handlers::list_counties))
        .with_state(service)
}

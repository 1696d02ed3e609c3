use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cases::handlers;
use crate::features::cases::services::CaseService;

/// Create routes for the cases feature
pub fn routes(service: Arc<CaseService>) -> Router {
    Router::new()
        .route(
            "/api/cases",
            get(handlers::list_cases).post(handlers::create_case),
        )
        // Fixed path must come before {id} route
        .route("/api/cases/summary", get(handlers::get_case_summary))
        .route(
            "/api/cases/{id}",
            get(handlers::get_case).patch(handlers::update_case_status),
        )
        .with_state(service)
}

use axum::{routing::get, Router};

use crate::features::crime_types::handlers;

/// Create routes for the crime type taxonomy (public, static)
pub fn routes() -> Router {
    Router::new()
        .route("/api/crime-types", get(handlers::list_crime_types))
        // Fixed path must come before {code} route
        .route(
            "/api/crime-types/categories",
            get(handlers::list_crime_type_categories),
        )
        .route("/api/crime-types/{code}", get(handlers::get_crime_type))
}

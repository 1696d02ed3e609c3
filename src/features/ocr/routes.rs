use axum::{routing::post, Router};

use crate::features::ocr::handlers;

/// Create routes for the OCR feature (public, stateless)
pub fn routes() -> Router {
    Router::new().route("/api/ocr/parse", post(handlers::parse_text))
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{CountyListQuery, CountyResponseDto, StateResponseDto};
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorResponse;

// ==================== State Handlers ====================

/// List all states with pending-case counts
#[utoipa::path(
    get,
    path = "/api/states",
    responses(
        (status = 200, description = "List of states", body = Vec<StateResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_states(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<StateResponseDto>>> {
    let states = service.list_states().await?;
    Ok(Json(states.into_iter().map(Into::into).collect()))
}

/// Get a state by code
#[utoipa::path(
    get,
    path = "/api/states/{code}",
    params(
        ("code" = String, Path, description = "Two-letter state code")
    ),
    responses(
        (status = 200, description = "State details", body = StateResponseDto),
        (status = 400, description = "Malformed state code", body = ErrorResponse),
        (status = 404, description = "State not found", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn get_state(
    State(service): State<Arc<RegionService>>,
    Path(code): Path<String>,
) -> Result<Json<StateResponseDto>> {
    let state = service.get_state(&code).await?;
    Ok(Json(state.into()))
}

// ==================== County Handlers ====================

/// List counties with pending-case counts
#[utoipa::path(
    get,
    path = "/api/counties",
    params(CountyListQuery),
    responses(
        (status = 200, description = "List of counties", body = Vec<CountyResponseDto>),
        (status = 400, description = "Malformed state code", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_counties(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<CountyListQuery>,
) -> Result<Json<Vec<CountyResponseDto>>> {
    let counties = service.list_counties(query.state_code.as_deref()).await?;
    Ok(Json(counties.into_iter().map(Into::into).collect()))
}

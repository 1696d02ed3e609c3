use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::cases::dtos::{
    CaseListQuery, CaseResponseDto, CaseSummaryDto, CreateCaseDto, UpdateCaseStatusDto,
};
use crate::features::cases::services::CaseService;
use crate::shared::types::ErrorResponse;

/// List cases
///
/// Filters by FOIA status, county, state or crime type. `countyId` takes precedence over
/// `stateCode` when both are supplied.
#[utoipa::path(
    get,
    path = "/api/cases",
    params(CaseListQuery),
    responses(
        (status = 200, description = "Cases, newest first", body = Vec<CaseResponseDto>),
        (status = 400, description = "Malformed filter", body = ErrorResponse)
    ),
    tag = "cases"
)]
pub async fn list_cases(
    State(service): State<Arc<CaseService>>,
    AppQuery(query): AppQuery<CaseListQuery>,
) -> Result<Json<Vec<CaseResponseDto>>> {
    let cases = service.list(query).await?;
    Ok(Json(cases))
}

/// Get a case by id
#[utoipa::path(
    get,
    path = "/api/cases/{id}",
    params(
        ("id" = Uuid, Path, description = "Case ID")
    ),
    responses(
        (status = 200, description = "Case details", body = CaseResponseDto),
        (status = 404, description = "Case not found", body = ErrorResponse)
    ),
    tag = "cases"
)]
pub async fn get_case(
    State(service): State<Arc<CaseService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaseResponseDto>> {
    let case = service.get(id).await?;
    Ok(Json(case))
}

/// Create a case
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = CreateCaseDto,
    responses(
        (status = 201, description = "Case created", body = CaseResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "cases"
)]
pub async fn create_case(
    State(service): State<Arc<CaseService>>,
    AppJson(dto): AppJson<CreateCaseDto>,
) -> Result<(StatusCode, Json<CaseResponseDto>)> {
    dto.validate()?;

    let case = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(case)))
}

/// Update a case's FOIA status
#[utoipa::path(
    patch,
    path = "/api/cases/{id}",
    params(
        ("id" = Uuid, Path, description = "Case ID")
    ),
    request_body = UpdateCaseStatusDto,
    responses(
        (status = 200, description = "Case updated", body = CaseResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Case not found", body = ErrorResponse),
        (status = 409, description = "Case already applied", body = ErrorResponse)
    ),
    tag = "cases"
)]
pub async fn update_case_status(
    State(service): State<Arc<CaseService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCaseStatusDto>,
) -> Result<Json<CaseResponseDto>> {
    dto.validate()?;

    let case = service.update_status(id, dto).await?;
    Ok(Json(case))
}

/// Case counts by FOIA status
#[utoipa::path(
    get,
    path = "/api/cases/summary",
    responses(
        (status = 200, description = "Case counts", body = CaseSummaryDto)
    ),
    tag = "cases"
)]
pub async fn get_case_summary(
    State(service): State<Arc<CaseService>>,
) -> Result<Json<CaseSummaryDto>> {
    let summary = service.summary().await?;
    Ok(Json(summary))
}

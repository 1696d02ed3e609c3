use axum::{extract::Path, Json};

use crate::features::crime_types::dtos::{CrimeCategoryGroupDto, CrimeTypeResponseDto};
use crate::features::crime_types::models::CrimeType;

/// List every crime type
#[utoipa::path(
    get,
    path = "/api/crime-types",
    responses(
        (status = 200, description = "All crime types", body = Vec<CrimeTypeResponseDto>),
    ),
    tag = "crime-types"
)]
pub async fn list_crime_types() -> Json<Vec<CrimeTypeResponseDto>> {
    Json(CrimeType::ALL.iter().copied().map(Into::into).collect())
}

/// List crime types grouped by category
#[utoipa::path(
    get,
    path = "/api/crime-types/categories",
    responses(
        (status = 200, description = "Crime types grouped by category", body = Vec<CrimeCategoryGroupDto>),
    ),
    tag = "crime-types"
)]
pub async fn list_crime_type_categories() -> Json<Vec<CrimeCategoryGroupDto>> {
    Json(CrimeCategoryGroupDto::all_groups())
}

/// Look up a crime type by code
///
/// Unknown codes resolve to `OTHER`, matching how stored cases are read.
#[utoipa::path(
    get,
    path = "/api/crime-types/{code}",
    params(
        ("code" = String, Path, description = "Crime type code, e.g. THEFT")
    ),
    responses(
        (status = 200, description = "Crime type", body = CrimeTypeResponseDto),
    ),
    tag = "crime-types"
)]
pub async fn get_crime_type(Path(code): Path<String>) -> Json<CrimeTypeResponseDto> {
    Json(CrimeType::from_code(&code).into())
}

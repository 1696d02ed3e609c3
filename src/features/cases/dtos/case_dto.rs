use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::cases::models::{CaseSummary, CaseWithLocation, FoiaStatus};
use crate::features::crime_types::CrimeType;
use crate::features::regions::dtos::StateRefDto;
use crate::shared::types::empty_string_as_none;

// ==================== Request DTOs ====================

/// Query parameters for listing cases.
///
/// When both `countyId` and `stateCode` are given, only `countyId` is applied.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CaseListQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = "CA")]
    pub state_code: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub county_id: Option<Uuid>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub foia_status: Option<FoiaStatus>,

    /// Crime type code; unknown codes are rejected rather than read as OTHER
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = "THEFT")]
    pub crime_type: Option<String>,
}

/// Request DTO for creating a case
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCaseDto {
    #[validate(length(max = 100, message = "Case number must not exceed 100 characters"))]
    #[schema(example = "AB-123")]
    pub case_number: Option<String>,

    /// Crime type code; unknown codes are stored as OTHER
    #[serde(default)]
    #[schema(value_type = String, example = "THEFT")]
    pub crime_type: CrimeType,

    #[validate(length(max = 10000, message = "Description must not exceed 10000 characters"))]
    pub description: Option<String>,

    /// `YYYY-MM-DD`, an RFC 3339 timestamp or `M/D/YYYY`
    #[schema(example = "2024-03-15")]
    pub date_occurred: Option<String>,

    pub county_id: Uuid,

    #[validate(length(max = 2048, message = "Screenshot path must not exceed 2048 characters"))]
    pub screenshot_path: Option<String>,

    /// Raw OCR output kept alongside the case
    #[schema(value_type = Option<Object>)]
    pub extracted_data: Option<serde_json::Value>,
}

/// Request DTO for changing a case's FOIA status
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_status_change"))]
pub struct UpdateCaseStatusDto {
    pub foia_status: FoiaStatus,

    /// When the request was filed; defaults to now for APPLIED
    pub applied_date: Option<DateTime<Utc>>,
}

fn validate_status_change(dto: &UpdateCaseStatusDto) -> Result<(), ValidationError> {
    if dto.foia_status == FoiaStatus::Pending && dto.applied_date.is_some() {
        return Err(ValidationError::new("applied_date_without_applied").with_message(
            Cow::Borrowed("appliedDate can only be set when foiaStatus is APPLIED"),
        ));
    }
    Ok(())
}

// ==================== Response DTOs ====================

/// County reference nested in a case, carrying its state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountyRefDto {
    pub id: Uuid,
    #[schema(example = "Los Angeles")]
    pub name: String,
    pub state_id: Uuid,
    pub state: StateRefDto,
}

/// Response DTO for a case joined with its county and state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponseDto {
    pub id: Uuid,
    pub case_number: Option<String>,
    #[schema(value_type = String, example = "THEFT")]
    pub crime_type: CrimeType,
    pub description: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    pub county_id: Uuid,
    pub county: CountyRefDto,
    pub screenshot_path: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub extracted_data: Option<serde_json::Value>,
    pub foia_status: FoiaStatus,
    pub applied_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CaseWithLocation> for CaseResponseDto {
    fn from(row: CaseWithLocation) -> Self {
        let crime_type = row.case.crime_type();
        let case = row.case;
        Self {
            id: case.id,
            case_number: case.case_number,
            crime_type,
            description: case.description,
            date_occurred: case.date_occurred,
            county_id: case.county_id,
            county: CountyRefDto {
                id: case.county_id,
                name: row.county_name,
                state_id: row.state_id,
                state: StateRefDto {
                    id: row.state_id,
                    code: row.state_code,
                    name: row.state_name,
                },
            },
            screenshot_path: case.screenshot_path,
            extracted_data: case.extracted_data,
            foia_status: case.foia_status,
            applied_date: case.applied_date,
            created_at: case.created_at,
            updated_at: case.updated_at,
        }
    }
}

/// Case counts by FOIA status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummaryDto {
    pub total: i64,
    pub pending: i64,
    pub applied: i64,
    /// Cases applied within the last `windowDays` days
    pub applied_recently: i64,
    pub window_days: i64,
}

impl CaseSummaryDto {
    pub fn new(summary: CaseSummary, window_days: i64) -> Self {
        Self {
            total: summary.total,
            pending: summary.pending,
            applied: summary.applied,
            applied_recently: summary.applied_recently,
            window_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dto_defaults_crime_type_to_other() {
        let dto: CreateCaseDto =
            serde_json::from_value(json!({ "countyId": Uuid::new_v4() })).unwrap();
        assert_eq!(dto.crime_type, CrimeType::Other);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_unknown_fields() {
        let result = serde_json::from_value::<CreateCaseDto>(json!({
            "countyId": Uuid::new_v4(),
            "status": "APPLIED"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_dto_requires_county() {
        let result = serde_json::from_value::<CreateCaseDto>(json!({ "caseNumber": "A-1" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_dto_case_number_length() {
        let dto: CreateCaseDto = serde_json::from_value(json!({
            "countyId": Uuid::new_v4(),
            "caseNumber": "9".repeat(101)
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_pending_with_applied_date_fails_validation() {
        let dto: UpdateCaseStatusDto = serde_json::from_value(json!({
            "foiaStatus": "PENDING",
            "appliedDate": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert!(dto.validate().is_err());

        let dto: UpdateCaseStatusDto =
            serde_json::from_value(json!({ "foiaStatus": "PENDING" })).unwrap();
        assert!(dto.validate().is_ok());

        let dto: UpdateCaseStatusDto = serde_json::from_value(json!({
            "foiaStatus": "APPLIED",
            "appliedDate": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_list_query_treats_empty_values_as_absent() {
        let query: CaseListQuery = serde_json::from_value(json!({
            "stateCode": "",
            "countyId": "",
            "foiaStatus": "applied",
            "crimeType": ""
        }))
        .unwrap();
        assert_eq!(query.crime_type, None);
        assert_eq!(query.state_code, None);
        assert_eq!(query.county_id, None);
        assert_eq!(query.foia_status, Some(FoiaStatus::Applied));
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::regions::models::{CountyPendingSummary, StatePendingSummary};
use crate::shared::types::empty_string_as_none;

/// Query parameters for listing counties
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CountyListQuery {
    /// Two-letter state code; omit to list every county
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(example = "CA")]
    pub state_code: Option<String>,
}

/// Minimal state reference nested in county and case responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateRefDto {
    pub id: Uuid,
    #[schema(example = "CA")]
    pub code: String,
    #[schema(example = "California")]
    pub name: String,
}

/// Response DTO for a state with its pending-case count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateResponseDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub county_count: i64,
    pub pending_cases: i64,
}

impl From<StatePendingSummary> for StateResponseDto {
    fn from(state: StatePendingSummary) -> Self {
        Self {
            id: state.id,
            code: state.code,
            name: state.name,
            county_count: state.county_count,
            pending_cases: state.pending_cases,
        }
    }
}

/// Response DTO for a county with its pending-case count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountyResponseDto {
    pub id: Uuid,
    pub name: String,
    pub state_id: Uuid,
    pub state: StateRefDto,
    pub pending_cases: i64,
}

impl From<CountyPendingSummary> for CountyResponseDto {
    fn from(county: CountyPendingSummary) -> Self {
        Self {
            id: county.id,
            name: county.name,
            state_id: county.state_id,
            state: StateRefDto {
                id: county.state_id,
                code: county.state_code,
                name: county.state_name,
            },
            pending_cases: county.pending_cases,
        }
    }
}

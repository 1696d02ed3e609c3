use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::crime_types::models::{CrimeCategory, CrimeType};

/// Response DTO for a crime type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrimeTypeResponseDto {
    /// Stored code, e.g. `POLICE_CHASE`
    #[schema(example = "POLICE_CHASE")]
    pub value: String,
    #[schema(example = "Police Chase")]
    pub label: String,
    pub category: CrimeCategory,
}

impl From<CrimeType> for CrimeTypeResponseDto {
    fn from(crime_type: CrimeType) -> Self {
        Self {
            value: crime_type.code().to_string(),
            label: crime_type.label().to_string(),
            category: crime_type.category(),
        }
    }
}

/// Crime types of one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrimeCategoryGroupDto {
    pub category: CrimeCategory,
    pub types: Vec<CrimeTypeResponseDto>,
}

impl CrimeCategoryGroupDto {
    /// Group the full taxonomy by category, in display order
    pub fn all_groups() -> Vec<CrimeCategoryGroupDto> {
        CrimeCategory::ALL
            .into_iter()
            .map(|category| CrimeCategoryGroupDto {
                category,
                types: CrimeType::in_category(category).map(Into::into).collect(),
            })
            .collect()
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::crime_types::CrimeType;
use crate::features::ocr::services::ParsedCaseFields;

/// Request DTO for parsing OCR output
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParseTextDto {
    /// Raw text recognized from the screenshot
    #[validate(length(max = 100000, message = "Text must not exceed 100000 characters"))]
    pub text: String,
}

/// Pre-filled case fields derived from OCR text
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCaseFieldsDto {
    #[schema(example = "AB-123")]
    pub case_number: Option<String>,
    #[schema(value_type = String, example = "THEFT")]
    pub crime_type: CrimeType,
    pub description: String,
    pub date_occurred: Option<NaiveDate>,
}

impl From<ParsedCaseFields> for ParsedCaseFieldsDto {
    fn from(fields: ParsedCaseFields) -> Self {
        Self {
            case_number: fields.case_number,
            crime_type: fields.crime_type,
            description: fields.description,
            date_occurred: fields.date_occurred,
        }
    }
}

use axum::Json;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::ocr::dtos::{ParseTextDto, ParsedCaseFieldsDto};
use crate::features::ocr::services::parse_extracted_text;

/// Derive case fields from OCR text
///
/// Guesses the case number, crime type, description and date from the text a
/// client recognized in an uploaded screenshot.
#[utoipa::path(
    post,
    path = "/api/ocr/parse",
    request_body = ParseTextDto,
    responses(
        (status = 200, description = "Best-guess case fields", body = ParsedCaseFieldsDto),
        (status = 400, description = "Validation error", body = crate::shared::types::ErrorResponse)
    ),
    tag = "ocr"
)]
pub async fn parse_text(AppJson(dto): AppJson<ParseTextDto>) -> Result<Json<ParsedCaseFieldsDto>> {
    dto.validate()?;

    let fields = parse_extracted_text(&dto.text);
    tracing::debug!(
        "Parsed OCR text ({} chars): case_number={:?}, crime_type={}",
        dto.text.chars().count(),
        fields.case_number,
        fields.crime_type
    );

    Ok(Json(fields.into()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::ocr::routes;

    #[tokio::test]
    async fn test_parse_text_endpoint() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server
            .post("/api/ocr/parse")
            .json(&json!({ "text": "Case #: AB-123\nrobbery reported 4/1/2024" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["caseNumber"], "AB-123");
        assert_eq!(body["crimeType"], "THEFT");
        assert_eq!(body["dateOccurred"], "2024-04-01");
    }

    #[tokio::test]
    async fn test_parse_text_without_date_returns_null() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server
            .post("/api/ocr/parse")
            .json(&json!({ "text": "nothing to see" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["dateOccurred"], Value::Null);
        assert_eq!(body["caseNumber"], Value::Null);
        assert_eq!(body["crimeType"], "OTHER");
    }

    #[tokio::test]
    async fn test_parse_text_rejects_unknown_fields() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server
            .post("/api/ocr/parse")
            .json(&json!({ "text": "x", "lang": "eng" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

use utoipa::{Modify, OpenApi};

use crate::features::cases::{dtos as cases_dtos, handlers as cases_handlers, models as cases_models};
use crate::features::crime_types::{dtos as crime_types_dtos, handlers as crime_types_handlers};
use crate::features::ocr::{dtos as ocr_dtos, handlers as ocr_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_states,
        regions_handlers::get_state,
        regions_handlers::list_counties,
        // Cases
        cases_handlers::list_cases,
        cases_handlers::create_case,
        cases_handlers::get_case_summary,
        cases_handlers::get_case,
        cases_handlers::update_case_status,
        // Crime types
        crime_types_handlers::list_crime_types,
        crime_types_handlers::list_crime_type_categories,
        crime_types_handlers::get_crime_type,
        // OCR
        ocr_handlers::parse_text,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Regions
            regions_dtos::StateRefDto,
            regions_dtos::StateResponseDto,
            regions_dtos::CountyResponseDto,
            // Cases
            cases_models::FoiaStatus,
            cases_dtos::CreateCaseDto,
            cases_dtos::UpdateCaseStatusDto,
            cases_dtos::CountyRefDto,
            cases_dtos::CaseResponseDto,
            cases_dtos::CaseSummaryDto,
            // Crime types
            crime_types_dtos::CrimeTypeResponseDto,
            crime_types_dtos::CrimeCategoryGroupDto,
            // OCR
            ocr_dtos::ParseTextDto,
            ocr_dtos::ParsedCaseFieldsDto,
        )
    ),
    tags(
        (name = "regions", description = "US states and counties with pending-case counts"),
        (name = "cases", description = "FOIA cases and their request status"),
        (name = "crime-types", description = "Crime type taxonomy"),
        (name = "ocr", description = "Case field extraction from OCR text"),
    ),
    info(
        title = "FOIA Case Tracker API",
        version = "0.1.0",
        description = "API documentation for the FOIA case tracker",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

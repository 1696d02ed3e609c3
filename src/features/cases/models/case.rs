use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::cases::models::FoiaStatus;
use crate::features::crime_types::CrimeType;

/// Database model for a case
#[derive(Debug, Clone, FromRow)]
pub struct Case {
    pub id: Uuid,
    pub case_number: Option<String>,
    /// Stored code; read through [`Case::crime_type`]
    pub crime_type: String,
    pub description: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    pub county_id: Uuid,
    pub screenshot_path: Option<String>,
    pub extracted_data: Option<serde_json::Value>,
    pub foia_status: FoiaStatus,
    pub applied_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    pub fn crime_type(&self) -> CrimeType {
        CrimeType::from_code(&self.crime_type)
    }
}

/// Case joined with its county and state
#[derive(Debug, Clone, FromRow)]
pub struct CaseWithLocation {
    #[sqlx(flatten)]
    pub case: Case,
    pub county_name: String,
    pub state_id: Uuid,
    pub state_code: String,
    pub state_name: String,
}

/// Data for creating a new case
#[derive(Debug, Clone)]
pub struct CreateCase {
    pub case_number: Option<String>,
    pub crime_type: CrimeType,
    pub description: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    pub county_id: Uuid,
    pub screenshot_path: Option<String>,
    pub extracted_data: Option<serde_json::Value>,
}

/// Resolved filter for listing cases.
///
/// Built by the service so that `county_id` and `state_code` are never both
/// set: a county filter replaces any state filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub foia_status: Option<FoiaStatus>,
    pub county_id: Option<Uuid>,
    pub state_code: Option<String>,
    pub crime_type: Option<CrimeType>,
}

impl CaseFilter {
    pub fn new(
        foia_status: Option<FoiaStatus>,
        county_id: Option<Uuid>,
        state_code: Option<String>,
        crime_type: Option<CrimeType>,
    ) -> Self {
        match county_id {
            Some(county_id) => Self {
                foia_status,
                county_id: Some(county_id),
                state_code: None,
                crime_type,
            },
            None => Self {
                foia_status,
                county_id: None,
                state_code,
                crime_type,
            },
        }
    }
}

/// Case counts for the dashboard
#[derive(Debug, Clone, Default, FromRow)]
pub struct CaseSummary {
    pub total: i64,
    pub pending: i64,
    pub applied: i64,
    pub applied_recently: i64,
}

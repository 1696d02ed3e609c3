use sqlx::FromRow;
use uuid::Uuid;

/// State with its county count and number of PENDING cases
#[derive(Debug, Clone, FromRow)]
pub struct StatePendingSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub county_count: i64,
    pub pending_cases: i64,
}

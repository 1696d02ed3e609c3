use sqlx::FromRow;
use uuid::Uuid;

/// County belonging to a US state
#[derive(Debug, Clone, FromRow)]
pub struct County {
    pub id: Uuid,
    pub name: String,
    pub state_id: Uuid,
}

/// County joined with its state and number of PENDING cases
#[derive(Debug, Clone, FromRow)]
pub struct CountyPendingSummary {
    pub id: Uuid,
    pub name: String,
    pub state_id: Uuid,
    pub state_code: String,
    pub state_name: String,
    pub pending_cases: i64,
}

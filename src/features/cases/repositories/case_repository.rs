use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cases::models::{
    CaseFilter, CaseSummary, CaseWithLocation, CreateCase, FoiaStatus,
};

/// Storage access for cases
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Cases matching the filter, newest first
    async fn list(&self, filter: &CaseFilter) -> Result<Vec<CaseWithLocation>>;

    async fn find(&self, id: Uuid) -> Result<Option<CaseWithLocation>>;

    /// Insert a PENDING case. The county must exist.
    async fn insert(&self, data: &CreateCase) -> Result<CaseWithLocation>;

    /// Set the status in a single guarded write.
    ///
    /// Returns `None` when no row was written: either the case is missing or
    /// it is APPLIED and `status` is PENDING.
    async fn update_status(
        &self,
        id: Uuid,
        status: FoiaStatus,
        applied_date: Option<DateTime<Utc>>,
    ) -> Result<Option<CaseWithLocation>>;

    /// Status counts, with `applied_recently` covering cases applied at or after `since`
    async fn summary(&self, since: DateTime<Utc>) -> Result<CaseSummary>;
}

/// Postgres-backed [`CaseRepository`]
pub struct PgCaseRepository {
    pool: PgPool,
}

impl PgCaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Case columns plus county and state, selected from an alias `c` of the cases table
const CASE_WITH_LOCATION_COLUMNS: &str = r#"
    c.id, c.case_number, c.crime_type, c.description, c.date_occurred,
    c.county_id, c.screenshot_path, c.extracted_data, c.foia_status,
    c.applied_date, c.created_at, c.updated_at,
    co.name AS county_name,
    s.id AS state_id,
    s.code AS state_code,
    s.name AS state_name
"#;

#[async_trait]
impl CaseRepository for PgCaseRepository {
    async fn list(&self, filter: &CaseFilter) -> Result<Vec<CaseWithLocation>> {
        let sql = format!(
            r#"
            SELECT {CASE_WITH_LOCATION_COLUMNS}
            FROM cases c
            JOIN counties co ON co.id = c.county_id
            JOIN states s ON s.id = co.state_id
            WHERE ($1::foia_status IS NULL OR c.foia_status = $1)
              AND ($2::uuid IS NULL OR c.county_id = $2)
              AND ($3::text IS NULL OR s.code = $3)
              AND ($4::text IS NULL OR c.crime_type = $4)
            ORDER BY c.created_at DESC, c.id DESC
            "#
        );

        sqlx::query_as::<_, CaseWithLocation>(&sql)
            .bind(filter.foia_status)
            .bind(filter.county_id)
            .bind(filter.state_code.as_deref())
            .bind(filter.crime_type.map(|t| t.code()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list cases with filter {:?}: {:?}", filter, e);
                AppError::Database(e)
            })
    }

    async fn find(&self, id: Uuid) -> Result<Option<CaseWithLocation>> {
        let sql = format!(
            r#"
            SELECT {CASE_WITH_LOCATION_COLUMNS}
            FROM cases c
            JOIN counties co ON co.id = c.county_id
            JOIN states s ON s.id = co.state_id
            WHERE c.id = $1
            "#
        );

        sqlx::query_as::<_, CaseWithLocation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch case {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, data: &CreateCase) -> Result<CaseWithLocation> {
        let sql = format!(
            r#"
            WITH c AS (
                INSERT INTO cases (
                    case_number, crime_type, description, date_occurred,
                    county_id, screenshot_path, extracted_data, foia_status
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, 'PENDING')
                RETURNING *
            )
            SELECT {CASE_WITH_LOCATION_COLUMNS}
            FROM c
            JOIN counties co ON co.id = c.county_id
            JOIN states s ON s.id = co.state_id
            "#
        );

        sqlx::query_as::<_, CaseWithLocation>(&sql)
            .bind(data.case_number.as_deref())
            .bind(data.crime_type.code())
            .bind(data.description.as_deref())
            .bind(data.date_occurred)
            .bind(data.county_id)
            .bind(data.screenshot_path.as_deref())
            .bind(data.extracted_data.as_ref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return AppError::Validation(format!(
                            "County {} does not exist",
                            data.county_id
                        ));
                    }
                }
                tracing::error!("Failed to insert case: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: FoiaStatus,
        applied_date: Option<DateTime<Utc>>,
    ) -> Result<Option<CaseWithLocation>> {
        let sql = format!(
            r#"
            WITH c AS (
                UPDATE cases
                SET foia_status = $2, applied_date = $3, updated_at = NOW()
                WHERE id = $1
                  AND NOT (foia_status = 'APPLIED' AND $2::foia_status = 'PENDING')
                RETURNING *
            )
            SELECT {CASE_WITH_LOCATION_COLUMNS}
            FROM c
            JOIN counties co ON co.id = c.county_id
            JOIN states s ON s.id = co.state_id
            "#
        );

        sqlx::query_as::<_, CaseWithLocation>(&sql)
            .bind(id)
            .bind(status)
            .bind(applied_date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update status of case {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn summary(&self, since: DateTime<Utc>) -> Result<CaseSummary> {
        sqlx::query_as::<_, CaseSummary>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE foia_status = 'PENDING') AS pending,
                COUNT(*) FILTER (WHERE foia_status = 'APPLIED') AS applied,
                COUNT(*) FILTER (
                    WHERE foia_status = 'APPLIED' AND applied_date >= $1
                ) AS applied_recently
            FROM cases
            "#,
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute case summary: {:?}", e);
            AppError::Database(e)
        })
    }
}

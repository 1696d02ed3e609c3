use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{County, CountyPendingSummary, StatePendingSummary};

/// Storage access for states and counties
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// All states ordered by name, with county and PENDING case counts
    async fn states_with_pending_counts(&self) -> Result<Vec<StatePendingSummary>>;

    /// One state by its (upper-case) code, with counts
    async fn find_state_summary(&self, code: &str) -> Result<Option<StatePendingSummary>>;

    /// Counties ordered by name, optionally limited to one state code
    async fn counties_with_pending_counts(
        &self,
        state_code: Option<&str>,
    ) -> Result<Vec<CountyPendingSummary>>;

    async fn find_county(&self, id: Uuid) -> Result<Option<County>>;
}

/// Postgres-backed [`RegionRepository`]
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn states_with_pending_counts(&self) -> Result<Vec<StatePendingSummary>> {
        sqlx::query_as::<_, StatePendingSummary>(
            r#"
            SELECT
                s.id, s.code, s.name,
                COUNT(DISTINCT co.id) AS county_count,
                COUNT(c.id) FILTER (WHERE c.foia_status = 'PENDING') AS pending_cases
            FROM states s
            LEFT JOIN counties co ON co.state_id = s.id
            LEFT JOIN cases c ON c.county_id = co.id
            GROUP BY s.id, s.code, s.name
            ORDER BY s.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch states with pending counts: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_state_summary(&self, code: &str) -> Result<Option<StatePendingSummary>> {
        sqlx::query_as::<_, StatePendingSummary>(
            r#"
            SELECT
                s.id, s.code, s.name,
                COUNT(DISTINCT co.id) AS county_count,
                COUNT(c.id) FILTER (WHERE c.foia_status = 'PENDING') AS pending_cases
            FROM states s
            LEFT JOIN counties co ON co.state_id = s.id
            LEFT JOIN cases c ON c.county_id = co.id
            WHERE s.code = $1
            GROUP BY s.id, s.code, s.name
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch state by code {}: {:?}", code, e);
            AppError::Database(e)
        })
    }

    async fn counties_with_pending_counts(
        &self,
        state_code: Option<&str>,
    ) -> Result<Vec<CountyPendingSummary>> {
        sqlx::query_as::<_, CountyPendingSummary>(
            r#"
            SELECT
                co.id, co.name, co.state_id,
                s.code AS state_code,
                s.name AS state_name,
                COUNT(c.id) FILTER (WHERE c.foia_status = 'PENDING') AS pending_cases
            FROM counties co
            JOIN states s ON s.id = co.state_id
            LEFT JOIN cases c ON c.county_id = co.id
            WHERE ($1::text IS NULL OR s.code = $1)
            GROUP BY co.id, co.name, co.state_id, s.code, s.name
            ORDER BY co.name ASC, s.code ASC
            "#,
        )
        .bind(state_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch counties (state filter {:?}): {:?}",
                state_code,
                e
            );
            AppError::Database(e)
        })
    }

    async fn find_county(&self, id: Uuid) -> Result<Option<County>> {
        sqlx::query_as::<_, County>(
            r#"
            SELECT id, name, state_id
            FROM counties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch county {}: {:?}", id, e);
            AppError::Database(e)
        })
    }
}

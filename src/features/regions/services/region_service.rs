use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{County, CountyPendingSummary, StatePendingSummary};
use crate::features::regions::repositories::RegionRepository;
use crate::shared::validation::normalize_state_code;

/// Service for US states and counties and their pending-case aggregates
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>) -> Self {
        Self { repository }
    }

    /// Validate a state code from a request and normalize it to upper case
    pub fn parse_state_code(code: &str) -> Result<String> {
        normalize_state_code(code).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid state code '{}': expected a two-letter code",
                code
            ))
        })
    }

    // ==================== State Methods ====================

    /// List all states with their pending-case counts
    pub async fn list_states(&self) -> Result<Vec<StatePendingSummary>> {
        self.repository.states_with_pending_counts().await
    }

    /// Get a state by its code
    pub async fn get_state(&self, code: &str) -> Result<StatePendingSummary> {
        let code = Self::parse_state_code(code)?;
        self.repository
            .find_state_summary(&code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("State with code '{}' not found", code)))
    }

    // ==================== County Methods ====================

    /// List counties with their pending-case counts, optionally for one state.
    ///
    /// An unknown state code yields an empty list rather than an error.
    pub async fn list_counties(&self, state_code: Option<&str>) -> Result<Vec<CountyPendingSummary>> {
        let state_code = state_code.map(Self::parse_state_code).transpose()?;
        self.repository
            .counties_with_pending_counts(state_code.as_deref())
            .await
    }

    /// Get a county by id
    pub async fn get_county(&self, id: Uuid) -> Result<County> {
        self.repository
            .find_county(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("County {} not found", id)))
    }
}

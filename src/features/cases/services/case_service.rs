use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::core::config::CaseConfig;
use crate::core::error::{AppError, Result};
use crate::features::cases::dtos::{
    CaseListQuery, CaseResponseDto, CaseSummaryDto, CreateCaseDto, UpdateCaseStatusDto,
};
use crate::features::cases::models::{CaseFilter, CreateCase, FoiaStatus};
use crate::features::cases::repositories::CaseRepository;
use crate::features::crime_types::CrimeType;
use crate::features::regions::RegionService;
use crate::shared::validation::parse_loose_date;

/// Service for creating, listing and progressing FOIA cases
pub struct CaseService {
    repository: Arc<dyn CaseRepository>,
    region_service: Arc<RegionService>,
    config: CaseConfig,
}

impl CaseService {
    pub fn new(
        repository: Arc<dyn CaseRepository>,
        region_service: Arc<RegionService>,
        config: CaseConfig,
    ) -> Self {
        Self {
            repository,
            region_service,
            config,
        }
    }

    /// List cases, newest first.
    ///
    /// A county filter wins over a state filter; the state code is only
    /// validated when it is actually applied. An unknown crime type code is
    /// a bad request.
    pub async fn list(&self, query: CaseListQuery) -> Result<Vec<CaseResponseDto>> {
        let state_code = match (query.county_id, query.state_code.as_deref()) {
            (None, Some(code)) => Some(RegionService::parse_state_code(code)?),
            _ => None,
        };
        let crime_type = query
            .crime_type
            .as_deref()
            .map(|code| {
                CrimeType::parse_code(code)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown crime type '{}'", code)))
            })
            .transpose()?;
        let filter = CaseFilter::new(query.foia_status, query.county_id, state_code, crime_type);

        let cases = self.repository.list(&filter).await?;
        Ok(cases.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<CaseResponseDto> {
        self.repository
            .find(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Case {} not found", id)))
    }

    /// Create a case in PENDING status
    pub async fn create(&self, dto: CreateCaseDto) -> Result<CaseResponseDto> {
        let date_occurred = match dto.date_occurred.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_loose_date(raw).ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid dateOccurred '{}': expected YYYY-MM-DD or M/D/YYYY",
                    raw
                ))
            })?),
        };

        let county = match self.region_service.get_county(dto.county_id).await {
            Ok(county) => county,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Validation(format!(
                    "County {} does not exist",
                    dto.county_id
                )))
            }
            Err(e) => return Err(e),
        };

        let data = CreateCase {
            case_number: dto.case_number.filter(|s| !s.trim().is_empty()),
            crime_type: dto.crime_type,
            description: dto.description,
            date_occurred,
            county_id: county.id,
            screenshot_path: dto.screenshot_path,
            extracted_data: dto.extracted_data,
        };

        let case = self.repository.insert(&data).await?;

        tracing::info!(
            "Case created: id={}, county={} ({}), crime_type={}",
            case.case.id,
            county.name,
            case.state_code,
            data.crime_type
        );

        Ok(case.into())
    }

    /// Move a case to a new FOIA status.
    ///
    /// APPLIED always ends up with an applied date. Reverting an APPLIED
    /// case to PENDING is a conflict, including when the case was applied
    /// after it was read here.
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: UpdateCaseStatusDto,
    ) -> Result<CaseResponseDto> {
        let current = self
            .repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Case {} not found", id)))?;

        let applied_date = FoiaStatus::resolve_transition(
            current.case.foia_status,
            dto.foia_status,
            dto.applied_date,
            Utc::now(),
        )?;

        let updated = match self
            .repository
            .update_status(id, dto.foia_status, applied_date)
            .await?
        {
            Some(updated) => updated,
            None => return Err(self.rejected_update(id).await?),
        };

        tracing::info!(
            "Case {} status {} -> {} (applied_date={:?})",
            id,
            current.case.foia_status,
            updated.case.foia_status,
            updated.case.applied_date
        );

        Ok(updated.into())
    }

    /// Error for a status write the repository refused
    async fn rejected_update(&self, id: Uuid) -> Result<AppError> {
        Ok(match self.repository.find(id).await? {
            Some(case) => {
                tracing::warn!(
                    "Case {} changed to {} concurrently; revert refused",
                    id,
                    case.case.foia_status
                );
                AppError::Conflict(
                    "FOIA request has already been applied and cannot be reverted to PENDING"
                        .to_string(),
                )
            }
            None => AppError::NotFound(format!("Case {} not found", id)),
        })
    }

    /// Status counts, with the recently-applied window from configuration
    pub async fn summary(&self) -> Result<CaseSummaryDto> {
        let window_days = self.config.recent_applied_window_days;
        let since = Duration::try_days(window_days)
            .and_then(|window| Utc::now().checked_sub_signed(window))
            .ok_or_else(|| {
                AppError::Internal(format!("Invalid summary window of {} days", window_days))
            })?;
        let summary = self.repository.summary(since).await?;
        Ok(CaseSummaryDto::new(summary, window_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cases::models::{CaseSummary, CaseWithLocation};
    use crate::shared::test_helpers::{region_service, InMemoryStore};
    use async_trait::async_trait;
    use chrono::DateTime;

    /// Hands out the row as it was, then lets another writer apply the case
    struct AppliedAfterRead {
        store: InMemoryStore,
    }

    #[async_trait]
    impl CaseRepository for AppliedAfterRead {
        async fn list(&self, filter: &CaseFilter) -> Result<Vec<CaseWithLocation>> {
            self.store.list(filter).await
        }

        async fn find(&self, id: Uuid) -> Result<Option<CaseWithLocation>> {
            let row = self.store.find(id).await?;
            if row
                .as_ref()
                .is_some_and(|r| r.case.foia_status == FoiaStatus::Pending)
            {
                self.store
                    .update_status(id, FoiaStatus::Applied, Some(Utc::now()))
                    .await?;
            }
            Ok(row)
        }

        async fn insert(&self, data: &CreateCase) -> Result<CaseWithLocation> {
            self.store.insert(data).await
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: FoiaStatus,
            applied_date: Option<DateTime<Utc>>,
        ) -> Result<Option<CaseWithLocation>> {
            self.store.update_status(id, status, applied_date).await
        }

        async fn summary(&self, since: DateTime<Utc>) -> Result<CaseSummary> {
            self.store.summary(since).await
        }
    }

    fn service(store: &InMemoryStore, repository: Arc<dyn CaseRepository>) -> CaseService {
        CaseService::new(repository, region_service(store), CaseConfig::default())
    }

    fn seed_pending(store: &InMemoryStore) -> Uuid {
        let state_id = store.add_state("OR", "Oregon");
        let county_id = store.add_county(state_id, "Lane");
        store.add_case(county_id, FoiaStatus::Pending)
    }

    #[tokio::test]
    async fn test_revert_refused_when_applied_after_read() {
        let store = InMemoryStore::new();
        let id = seed_pending(&store);
        let service = service(
            &store,
            Arc::new(AppliedAfterRead {
                store: store.clone(),
            }),
        );

        let dto = UpdateCaseStatusDto {
            foia_status: FoiaStatus::Pending,
            applied_date: None,
        };
        let result = service.update_status(id, dto).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let stored = store.find(id).await.unwrap().unwrap();
        assert_eq!(stored.case.foia_status, FoiaStatus::Applied);
        assert!(stored.case.applied_date.is_some());
    }

    #[tokio::test]
    async fn test_update_of_missing_case_is_not_found() {
        let store = InMemoryStore::new();
        let service = service(&store, Arc::new(store.clone()));

        let dto = UpdateCaseStatusDto {
            foia_status: FoiaStatus::Applied,
            applied_date: None,
        };
        let result = service.update_status(Uuid::new_v4(), dto).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_crime_type() {
        let store = InMemoryStore::new();
        seed_pending(&store);
        let service = service(&store, Arc::new(store.clone()));

        let query = CaseListQuery {
            crime_type: Some("JAYWALKING".to_string()),
            ..Default::default()
        };
        let result = service.list(query).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

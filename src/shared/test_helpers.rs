use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use uuid::Uuid;

use crate::core::config::CaseConfig;
use crate::core::error::{AppError, Result};
use crate::features::cases::models::{
    Case, CaseFilter, CaseSummary, CaseWithLocation, CreateCase, FoiaStatus,
};
use crate::features::cases::{self, CaseRepository, CaseService};
use crate::features::crime_types::CrimeType;
use crate::features::regions::models::{County, CountyPendingSummary, StatePendingSummary};
use crate::features::regions::{self, RegionRepository, RegionService};

struct StateRow {
    id: Uuid,
    code: String,
    name: String,
}

#[derive(Default)]
struct StoreData {
    states: Vec<StateRow>,
    counties: Vec<County>,
    cases: Vec<Case>,
    sequence: i64,
}

impl StoreData {
    /// Strictly increasing timestamps so "newest first" is deterministic
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        self.sequence += 1;
        Utc::now() + Duration::milliseconds(self.sequence)
    }

    fn state(&self, id: Uuid) -> &StateRow {
        self.states
            .iter()
            .find(|s| s.id == id)
            .expect("county references a seeded state")
    }

    fn with_location(&self, case: &Case) -> CaseWithLocation {
        let county = self
            .counties
            .iter()
            .find(|c| c.id == case.county_id)
            .expect("case references a seeded county");
        let state = self.state(county.state_id);
        CaseWithLocation {
            case: case.clone(),
            county_name: county.name.clone(),
            state_id: state.id,
            state_code: state.code.clone(),
            state_name: state.name.clone(),
        }
    }

    fn pending_in_county(&self, county_id: Uuid) -> i64 {
        self.cases
            .iter()
            .filter(|c| c.county_id == county_id && c.foia_status == FoiaStatus::Pending)
            .count() as i64
    }

    fn state_summary(&self, state: &StateRow) -> StatePendingSummary {
        let counties: Vec<&County> = self
            .counties
            .iter()
            .filter(|c| c.state_id == state.id)
            .collect();
        StatePendingSummary {
            id: state.id,
            code: state.code.clone(),
            name: state.name.clone(),
            county_count: counties.len() as i64,
            pending_cases: counties.iter().map(|c| self.pending_in_county(c.id)).sum(),
        }
    }
}

fn matches(filter: &CaseFilter, case: &CaseWithLocation) -> bool {
    filter.foia_status.is_none_or(|s| case.case.foia_status == s)
        && filter.county_id.is_none_or(|id| case.case.county_id == id)
        && filter
            .state_code
            .as_deref()
            .is_none_or(|code| case.state_code == code)
        && filter
            .crime_type
            .is_none_or(|t| case.case.crime_type() == t)
}

/// In-memory store implementing both repositories, shared between clones
#[derive(Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<StoreData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(&self, code: &str, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.data.lock().unwrap().states.push(StateRow {
            id,
            code: code.to_string(),
            name: name.to_string(),
        });
        id
    }

    pub fn add_county(&self, state_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.data.lock().unwrap().counties.push(County {
            id,
            name: name.to_string(),
            state_id,
        });
        id
    }

    /// Seed a THEFT case with generated text fields
    pub fn add_case(&self, county_id: Uuid, status: FoiaStatus) -> Uuid {
        self.add_case_of_type(county_id, status, CrimeType::Theft)
    }

    pub fn add_case_of_type(
        &self,
        county_id: Uuid,
        status: FoiaStatus,
        crime_type: CrimeType,
    ) -> Uuid {
        let mut data = self.data.lock().unwrap();
        let created_at = data.next_timestamp();
        let number: u32 = (1000..9999).fake();
        let id = Uuid::new_v4();
        data.cases.push(Case {
            id,
            case_number: Some(format!("CR-{}", number)),
            crime_type: crime_type.code().to_string(),
            description: Some(Sentence(3..8).fake()),
            date_occurred: None,
            county_id,
            screenshot_path: None,
            extracted_data: None,
            foia_status: status,
            applied_date: (status == FoiaStatus::Applied).then_some(created_at),
            created_at,
            updated_at: created_at,
        });
        id
    }

    /// Move a case's applied date into the past
    pub fn backdate_applied(&self, id: Uuid, by: Duration) {
        let mut data = self.data.lock().unwrap();
        let case = data
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .expect("case was seeded");
        case.applied_date = case.applied_date.map(|d| d - by);
    }

    pub fn case_count(&self) -> usize {
        self.data.lock().unwrap().cases.len()
    }
}

#[async_trait]
impl RegionRepository for InMemoryStore {
    async fn states_with_pending_counts(&self) -> Result<Vec<StatePendingSummary>> {
        let data = self.data.lock().unwrap();
        let mut states: Vec<StatePendingSummary> =
            data.states.iter().map(|s| data.state_summary(s)).collect();
        states.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(states)
    }

    async fn find_state_summary(&self, code: &str) -> Result<Option<StatePendingSummary>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .states
            .iter()
            .find(|s| s.code == code)
            .map(|s| data.state_summary(s)))
    }

    async fn counties_with_pending_counts(
        &self,
        state_code: Option<&str>,
    ) -> Result<Vec<CountyPendingSummary>> {
        let data = self.data.lock().unwrap();
        let mut counties: Vec<CountyPendingSummary> = data
            .counties
            .iter()
            .filter_map(|county| {
                let state = data.state(county.state_id);
                if state_code.is_some_and(|code| code != state.code) {
                    return None;
                }
                Some(CountyPendingSummary {
                    id: county.id,
                    name: county.name.clone(),
                    state_id: state.id,
                    state_code: state.code.clone(),
                    state_name: state.name.clone(),
                    pending_cases: data.pending_in_county(county.id),
                })
            })
            .collect();
        counties.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.state_code.cmp(&b.state_code))
        });
        Ok(counties)
    }

    async fn find_county(&self, id: Uuid) -> Result<Option<County>> {
        let data = self.data.lock().unwrap();
        Ok(data.counties.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl CaseRepository for InMemoryStore {
    async fn list(&self, filter: &CaseFilter) -> Result<Vec<CaseWithLocation>> {
        let data = self.data.lock().unwrap();
        let mut cases: Vec<CaseWithLocation> = data
            .cases
            .iter()
            .map(|c| data.with_location(c))
            .filter(|c| matches(filter, c))
            .collect();
        cases.sort_by(|a, b| b.case.created_at.cmp(&a.case.created_at));
        Ok(cases)
    }

    async fn find(&self, id: Uuid) -> Result<Option<CaseWithLocation>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .cases
            .iter()
            .find(|c| c.id == id)
            .map(|c| data.with_location(c)))
    }

    async fn insert(&self, input: &CreateCase) -> Result<CaseWithLocation> {
        let mut data = self.data.lock().unwrap();
        if !data.counties.iter().any(|c| c.id == input.county_id) {
            return Err(AppError::Validation(format!(
                "County {} does not exist",
                input.county_id
            )));
        }
        let created_at = data.next_timestamp();
        let case = Case {
            id: Uuid::new_v4(),
            case_number: input.case_number.clone(),
            crime_type: input.crime_type.code().to_string(),
            description: input.description.clone(),
            date_occurred: input.date_occurred,
            county_id: input.county_id,
            screenshot_path: input.screenshot_path.clone(),
            extracted_data: input.extracted_data.clone(),
            foia_status: FoiaStatus::Pending,
            applied_date: None,
            created_at,
            updated_at: created_at,
        };
        let row = data.with_location(&case);
        data.cases.push(case);
        Ok(row)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: FoiaStatus,
        applied_date: Option<DateTime<Utc>>,
    ) -> Result<Option<CaseWithLocation>> {
        let mut data = self.data.lock().unwrap();
        let updated_at = data.next_timestamp();
        let Some(case) = data.cases.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if case.foia_status == FoiaStatus::Applied && status == FoiaStatus::Pending {
            return Ok(None);
        }
        case.foia_status = status;
        case.applied_date = applied_date;
        case.updated_at = updated_at;
        let case = case.clone();
        Ok(Some(data.with_location(&case)))
    }

    async fn summary(&self, since: DateTime<Utc>) -> Result<CaseSummary> {
        let data = self.data.lock().unwrap();
        let count = |status: FoiaStatus| {
            data.cases.iter().filter(|c| c.foia_status == status).count() as i64
        };
        Ok(CaseSummary {
            total: data.cases.len() as i64,
            pending: count(FoiaStatus::Pending),
            applied: count(FoiaStatus::Applied),
            applied_recently: data
                .cases
                .iter()
                .filter(|c| {
                    c.foia_status == FoiaStatus::Applied
                        && c.applied_date.is_some_and(|d| d >= since)
                })
                .count() as i64,
        })
    }
}

pub fn region_service(store: &InMemoryStore) -> Arc<RegionService> {
    Arc::new(RegionService::new(Arc::new(store.clone())))
}

/// Test server for the regions routes backed by `store`
pub fn region_server(store: &InMemoryStore) -> TestServer {
    TestServer::new(regions::routes::routes(region_service(store))).unwrap()
}

/// Test server for the cases routes backed by `store`
pub fn case_server(store: &InMemoryStore) -> TestServer {
    let service = CaseService::new(
        Arc::new(store.clone()),
        region_service(store),
        CaseConfig::default(),
    );
    TestServer::new(cases::routes::routes(Arc::new(service))).unwrap()
}

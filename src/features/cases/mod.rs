//! FOIA cases.
//!
//! A case is created PENDING for one county and moves one way to APPLIED
//! once the records request is filed. Applying always stamps an applied
//! date; an applied case cannot be reverted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/cases?stateCode=&countyId=&foiaStatus=&crimeType=` | List cases, newest first |
//! | POST | `/api/cases` | Create a case |
//! | GET | `/api/cases/summary` | Counts by status |
//! | GET | `/api/cases/{id}` | Get one case |
//! | PATCH | `/api/cases/{id}` | Update FOIA status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CaseRepository, PgCaseRepository};
pub use services::CaseService;

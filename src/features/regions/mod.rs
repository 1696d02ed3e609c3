//! US states and counties.
//!
//! Read-only endpoints used by the map and the county picker. Every state
//! and county carries its number of PENDING cases, computed in a single
//! grouped query.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/states` | List states with pending-case counts |
//! | GET | `/api/states/{code}` | Get one state by code |
//! | GET | `/api/counties?stateCode=` | List counties, optionally for one state |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgRegionRepository, RegionRepository};
pub use services::RegionService;

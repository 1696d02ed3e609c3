//! Crime type taxonomy.
//!
//! A fixed list of crime types, each tagged with a display category. Cases
//! store the code (`THEFT`, `POLICE_CHASE`, ...); anything unrecognized is
//! read back as `OTHER`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

pub use models::CrimeType;

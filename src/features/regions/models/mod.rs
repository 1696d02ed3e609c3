mod county;
mod state;

pub use county::{County, CountyPendingSummary};
pub use state::StatePendingSummary;

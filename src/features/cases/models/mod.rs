mod case;
mod foia_status;

pub use case::{Case, CaseFilter, CaseSummary, CaseWithLocation, CreateCase};
pub use foia_status::FoiaStatus;

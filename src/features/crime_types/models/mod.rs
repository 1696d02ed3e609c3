mod crime_type;

pub use crime_type::{CrimeCategory, CrimeType};

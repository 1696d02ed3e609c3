mod crime_type_handler;

pub use crime_type_handler::*;

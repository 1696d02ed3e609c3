mod crime_type_dto;

pub use crime_type_dto::*;

pub mod cases;
pub mod crime_types;
pub mod ocr;
pub mod regions;

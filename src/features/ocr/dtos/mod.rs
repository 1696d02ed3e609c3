mod ocr_dto;

pub use ocr_dto::*;

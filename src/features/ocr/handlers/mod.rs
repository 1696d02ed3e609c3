mod ocr_handler;

pub use ocr_handler::*;

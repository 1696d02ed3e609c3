mod text_parser;

pub use text_parser::{parse_extracted_text, ParsedCaseFields};

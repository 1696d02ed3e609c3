/// Number of characters of OCR text kept as the pre-filled case description
pub const OCR_DESCRIPTION_MAX_CHARS: usize = 500;

/// Two-digit years below this pivot are read as 20xx, the rest as 19xx
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

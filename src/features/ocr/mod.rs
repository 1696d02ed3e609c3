//! OCR text parsing.
//!
//! The OCR engine runs on the client; this feature turns the recognized
//! text into pre-filled case fields with a small set of regex heuristics.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

//! Video records
//!
//! Raw provider records, the normalized output shape, and the parsing
//! helpers used to map one onto the other.

mod models;
mod parse;

pub use models::{NormalizedVideo, RawResult};
pub use parse::{duration_to_iso, parse_view_count};

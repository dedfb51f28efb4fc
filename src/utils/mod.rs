pub mod formatting;
pub mod truncation;

pub use formatting::{format_bytes, format_percent, format_time, signed_ceil};
pub use truncation::truncate_output;

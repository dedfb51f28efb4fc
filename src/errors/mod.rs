pub mod types;
pub mod classification;

pub use types::SizeLimitError;
pub use classification::ErrorClassification;

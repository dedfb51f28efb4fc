pub mod comment;
pub mod formatter;
pub mod markdown;
pub mod mode;
pub mod parser;
pub mod significance;
pub mod store;

pub use comment::{is_report_comment, render_comment, should_notify, REPORT_HEADING};
pub use formatter::{format_change, format_results};
pub use markdown::render_markdown;
pub use mode::determine_mode;
pub use parser::parse_results;
pub use significance::has_size_changes;
pub use store::{read_input, read_snapshot, write_snapshot};

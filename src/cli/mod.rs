pub mod commands;
pub mod common;
pub mod baseline;
pub mod report;
pub mod output;

pub use commands::{Cli, Commands};

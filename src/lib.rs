//! Bundle size comparison for pull requests.
//!
//! Raw measurement tool output is parsed into a [`models::Snapshot`],
//! compared against the snapshot of a base branch, and rendered as a
//! markdown table for a pull request comment.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod reporting;
pub mod utils;

//! End-to-end tests for sheetbind.
//!
//! Each test builds the grid it needs in memory (or as a temporary CSV file),
//! reads it back through `GridTemplate` and asserts on the decoded output.

mod common;
mod reading;

// Re-export common utilities for submodules
pub use common::*;

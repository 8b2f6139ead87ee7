//! Integration test entry point.
//!
//! All integration tests compile into a single binary so the helpers
//! module can be shared across test files.

mod helpers;

mod check_test;
mod cli_test;
mod config_test;

//! RunTest CLI - a client for remote automated-test runs
//!
//! Resolves a layered configuration (properties file plus command-line
//! overrides), triggers a test-suite run on a remote server, and reports
//! aggregate pass/fail/error counts with a deterministic exit code.

pub mod common;
pub mod config;
pub mod report;
pub mod result;
pub mod runner;
pub mod service;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use config::{Configuration, PropertyKey};
pub use result::TestResult;

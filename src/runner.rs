//! Test invocation control
//!
//! Validates the required properties, then delegates to the remote
//! test-execution provider. Missing required properties short-circuit into
//! local error results without contacting the server; endpoint and remote
//! failures propagate to the entry point.

use crate::common::Result;
use crate::config::{Configuration, PropertyKey};
use crate::result::TestResult;
use crate::service::{Endpoint, TestService};

/// Execute the configured test run.
///
/// `testsuite` and `reports` must both be set; if either is missing the
/// returned result carries `error_num = 1` and no remote call is made.
/// Otherwise the endpoint is constructed from the configuration and the
/// provider is invoked once, its result returned verbatim.
pub async fn execute(config: &Configuration, service: &dyn TestService) -> Result<TestResult> {
    let testsuite = match config.get(PropertyKey::Testsuite) {
        Some(name) => name,
        None => return Ok(TestResult::local_error("Test suite name is not set")),
    };

    let reports = match config.get(PropertyKey::Reports) {
        Some(name) => name,
        None => return Ok(TestResult::local_error("Report file not set")),
    };

    let endpoint = Endpoint::from_config(config)?;
    service.run_test(&endpoint, testsuite, reports).await
}

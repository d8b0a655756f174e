//! Aggregate outcome of a test-suite run
//!
//! `error_num` is the sole success/failure discriminator: 0 means the run
//! completed, even if individual tests failed or errored. The process exit
//! code is `error_num` verbatim.

use serde::{Deserialize, Serialize};

/// Result of a remote test-suite invocation, or of a local failure that
/// prevented one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Number of tests that passed
    #[serde(default)]
    pub succeeded: u32,

    /// Number of tests that failed
    #[serde(default)]
    pub failed: u32,

    /// Number of tests that raised an error
    #[serde(default)]
    pub errors: u32,

    /// 0 on success; nonzero failure code otherwise
    #[serde(default)]
    pub error_num: i32,

    /// Failure description; present only when `error_num` is nonzero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TestResult {
    /// Build the result for a failure detected before the remote call.
    pub fn local_error(message: impl Into<String>) -> Self {
        Self {
            errors: 1,
            error_num: 1,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Total number of tests the run touched.
    pub fn total(&self) -> u32 {
        self.succeeded + self.failed + self.errors
    }
}

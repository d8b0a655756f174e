//! Console summary and exit-code derivation
//!
//! Pure formatting; every decision about success or failure was already
//! encoded in the result's `error_num`.

use std::fmt::Write;

use crate::result::TestResult;

/// Render the aligned console summary for a test result.
///
/// The error line is appended only when `error_num` is nonzero.
pub fn format(result: &TestResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tests succeeded: {}", result.succeeded);
    let _ = writeln!(out, "Tests failed   : {}", result.failed);
    let _ = writeln!(out, "Test errors    : {}", result.errors);
    let _ = writeln!(out, "Total tests    : {}", result.total());
    let _ = writeln!(out, "Result is      : {}", result.error_num);
    if result.error_num != 0 {
        let _ = writeln!(
            out,
            "Error: {}",
            result.error_message.as_deref().unwrap_or("")
        );
    }
    out
}

/// The process exit code for a result is its `error_num` verbatim.
pub fn exit_code(result: &TestResult) -> i32 {
    result.error_num
}

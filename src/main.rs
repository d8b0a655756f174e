//! RunTest CLI - a client for remote automated-test runs
//!
//! Exit code is the result's `error_num`: 0 when the run completed
//! (regardless of individual test failures), 1 on any configuration,
//! validation, or invocation failure.

use runtest::service::HttpTestService;
use runtest::{common, config, report, result::TestResult, runner};

/// Program version printed in the startup banner.
const VERSION: &str = env!("CARGO_PKG_VERSION");

async fn run(args: &[String]) -> common::Result<TestResult> {
    let configuration = config::resolve(args)?;
    let service = HttpTestService::new();
    runner::execute(&configuration, &service).await
}

#[tokio::main]
async fn main() {
    common::logging::init();

    println!("Begin RunTest, Version {VERSION}");

    // Raw tokens: the pairwise override scan handles flags itself.
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match run(&args).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            TestResult {
                error_num: 1,
                error_message: Some(e.to_string()),
                ..TestResult::default()
            }
        }
    };

    print!("{}", report::format(&result));
    std::process::exit(report::exit_code(&result));
}

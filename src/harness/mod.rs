//! Regression harness: copies each test case into a timestamped run directory,
//! generates its CMakeLists.txt files and compares them with the checked-in
//! `CMakeLists.answer` files.

pub mod context;
pub mod report;
pub mod result;
pub mod runner;

pub use context::HarnessContext;
pub use report::{HtmlWriter, ResultWriter};
pub use result::{TestResult, TestResultItem};

use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub struct HarnessOutcome {
    pub result: TestResult,
    pub report_path: PathBuf,
}

pub async fn run_harness(ctx: &HarnessContext) -> Result<HarnessOutcome> {
    runner::initialize(ctx)?;

    let test_cases = runner::search_test_cases(ctx)?;
    tracing::info!("Found {} test case(s)", test_cases.len());

    let case_runner = runner::TestCaseRunner::new();
    let mut result = TestResult::default();
    for testcase in &test_cases {
        case_runner.run(ctx, testcase, &mut result).await?;
    }

    let report_path = HtmlWriter::new(ctx.result_file_path()).write(&result)?;
    if result.is_success() {
        tracing::info!("All {} test case(s) passed", test_cases.len());
    } else {
        tracing::warn!(
            "{} difference(s) in: {}",
            result.difference_count(),
            result.failed_cases().join(", ")
        );
    }

    Ok(HarnessOutcome {
        result,
        report_path,
    })
}

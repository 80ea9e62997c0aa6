use cmm::config::harness_config::HarnessConfig;
use cmm::harness::{run_harness, HarnessContext};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn context_with_output(output: &Path, testcases: &Path) -> HarnessContext {
    let mut config = HarnessConfig::default();
    config.harness.testcase_directory = testcases.to_string_lossy().into_owned();
    config.harness.output_directory = output.to_string_lossy().into_owned();
    HarnessContext::from_config(env!("CARGO_MANIFEST_DIR"), &config).with_run_name("it")
}

#[tokio::test]
async fn test_checked_in_testcases_pass() -> anyhow::Result<()> {
    let output = TempDir::new()?;
    let testcases = Path::new(env!("CARGO_MANIFEST_DIR")).join("testcases");
    let ctx = context_with_output(output.path(), &testcases);

    let outcome = run_harness(&ctx).await?;

    assert!(outcome.result.is_success(), "{:?}", outcome.result);
    assert!(outcome.result.items.contains_key("basic-example"));
    assert_eq!(outcome.report_path, output.path().join("it/result.html"));
    let html = fs::read_to_string(&outcome.report_path)?;
    assert!(html.contains("<h2>basic-example (0)</h2>"));
    assert!(!html.contains("<h3>"));
    assert!(output
        .path()
        .join("it/basic-example/src/Geometry/CMakeLists.txt")
        .is_file());
    Ok(())
}

#[tokio::test]
async fn test_differences_are_reported() -> anyhow::Result<()> {
    let workspace = TempDir::new()?;
    let testcases = workspace.path().join("testcases");
    let case = testcases.join("broken/src");
    fs::create_dir_all(case.join("App"))?;
    fs::write(case.join("cmm.json"), r#"{"name": "broken"}"#)?;
    fs::write(case.join("App/cmm.json"), "{}")?;
    fs::write(case.join("App/main.cpp"), "int main() { return 0; }")?;
    fs::write(case.join("App/CMakeLists.answer"), "cmake_minimum_required(VERSION 3.5)\nwrong")?;

    let unparsable = testcases.join("unparsable/src");
    fs::create_dir_all(&unparsable)?;
    fs::write(unparsable.join("cmm.json"), "{")?;

    let ctx = context_with_output(&workspace.path().join("out"), &testcases);
    let outcome = run_harness(&ctx).await?;

    assert!(!outcome.result.is_success());
    assert_eq!(outcome.result.failed_cases(), vec!["broken", "unparsable"]);

    let broken = &outcome.result.items["broken"];
    assert_eq!(broken.len(), 2);
    assert_eq!(broken[0].message, "CMakeLists.answer does not exist");
    assert_eq!(
        broken[1].message,
        "Content differs (first difference at line 2)"
    );
    assert!(outcome.result.items["unparsable"][0]
        .message
        .starts_with("Generation failed"));

    let html = fs::read_to_string(&outcome.report_path)?;
    assert!(html.contains("<h2>broken (2)</h2>"));
    assert!(html.contains("<h2>unparsable (1)</h2>"));
    assert!(html.contains("<h3>Diff 3</h3>"));
    Ok(())
}

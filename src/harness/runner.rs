use crate::config::cli::LocalStorage;
use crate::core::document::CMAKE_LISTS_FILENAME;
use crate::core::engine::GenerationEngine;
use crate::core::generator::CMakeGenerator;
use crate::harness::context::HarnessContext;
use crate::harness::result::{TestResult, TestResultItem};
use crate::utils::error::{CmmError, Result};
use crate::utils::fs::{copy_dir_all, sorted_entries};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

pub const ANSWER_FILENAME: &str = "CMakeLists.answer";

/// Creates the output directory when missing, then this run's directory.
pub fn initialize(ctx: &HarnessContext) -> Result<()> {
    let output_dir = ctx.test_output_directory_path();
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(CmmError::harness(format!(
            "{} exists and is not a directory",
            output_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;
    fs::create_dir(ctx.test_running_directory_path())?;
    tracing::debug!(
        "Run directory: {}",
        ctx.test_running_directory_path().display()
    );
    Ok(())
}

/// Every directory directly under the test-case directory, by name.
pub fn search_test_cases(ctx: &HarnessContext) -> Result<Vec<String>> {
    let mut test_cases = Vec::new();
    for entry in sorted_entries(ctx.test_case_directory_path())? {
        if entry.file_type()?.is_dir() {
            test_cases.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(test_cases)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPair {
    pub answer: PathBuf,
    pub candidate: PathBuf,
}

#[derive(Debug, Default)]
pub struct TestCaseRunner;

impl TestCaseRunner {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, ctx: &HarnessContext, testcase: &str, result: &mut TestResult) -> Result<()> {
        let diffs = result.items.entry(testcase.to_string()).or_default();

        let source_dir = ctx.test_case_directory_path().join(testcase);
        let destination_dir = ctx.test_running_directory_path().join(testcase);
        copy_dir_all(&source_dir, &destination_dir)?;

        let solution_dir = ctx.solution_dir_of(testcase);
        tracing::info!("Running test case '{}'", testcase);

        let storage = LocalStorage::new(&solution_dir);
        let generator = CMakeGenerator::new(storage, ctx.generator_settings(solution_dir.clone()));
        let engine = GenerationEngine::new(generator);
        if let Err(e) = engine.run().await {
            tracing::warn!("Test case '{}': generation failed: {}", testcase, e);
            diffs.push(TestResultItem {
                answer: solution_dir.clone(),
                candidate: solution_dir.clone(),
                message: format!("Generation failed: {}", e),
            });
            return Ok(());
        }

        for pair in find_comparison_pairs(&solution_dir)? {
            if let Some(message) = compare_cmake_files(&pair.answer, &pair.candidate)? {
                tracing::warn!(
                    "Test case '{}': {} ({})",
                    testcase,
                    message,
                    pair.candidate.display()
                );
                diffs.push(TestResultItem {
                    answer: pair.answer,
                    candidate: pair.candidate,
                    message,
                });
            }
        }
        Ok(())
    }
}

/// Breadth-first walk from `root`; each directory holding a generated file or
/// an answer yields one pair.
pub fn find_comparison_pairs(root: &Path) -> Result<Vec<ComparisonPair>> {
    let mut pairs = Vec::new();
    let mut directories = VecDeque::from([root.to_path_buf()]);

    while let Some(directory) = directories.pop_front() {
        let mut has_cmake_file = false;
        for entry in sorted_entries(&directory)? {
            let file_type = entry.file_type()?;
            let name = entry.file_name();
            if file_type.is_dir() {
                directories.push_back(entry.path());
            } else if name == CMAKE_LISTS_FILENAME || name == ANSWER_FILENAME {
                has_cmake_file = true;
            }
        }
        if has_cmake_file {
            pairs.push(ComparisonPair {
                answer: directory.join(ANSWER_FILENAME),
                candidate: directory.join(CMAKE_LISTS_FILENAME),
            });
        }
    }
    Ok(pairs)
}

fn normalize_content(content: &str) -> String {
    content.replace("\r\n", "\n").trim_end().to_string()
}

/// `None` when both files exist and match, otherwise the difference message.
pub fn compare_cmake_files(answer: &Path, candidate: &Path) -> Result<Option<String>> {
    if !answer.is_file() {
        return Ok(Some(format!("{} does not exist", ANSWER_FILENAME)));
    }
    if !candidate.is_file() {
        return Ok(Some(format!("{} does not exist", CMAKE_LISTS_FILENAME)));
    }

    let answer_content = normalize_content(&fs::read_to_string(answer)?);
    let candidate_content = normalize_content(&fs::read_to_string(candidate)?);
    if answer_content == candidate_content {
        return Ok(None);
    }

    let answer_lines: Vec<&str> = answer_content.lines().collect();
    let candidate_lines: Vec<&str> = candidate_content.lines().collect();
    let line = answer_lines
        .iter()
        .zip(candidate_lines.iter())
        .position(|(a, c)| a != c)
        .unwrap_or_else(|| answer_lines.len().min(candidate_lines.len()))
        + 1;

    Ok(Some(format!("Content differs (first difference at line {})", line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_compare_identical_ignores_line_endings() {
        let dir = TempDir::new().unwrap();
        let answer = dir.path().join(ANSWER_FILENAME);
        let candidate = dir.path().join(CMAKE_LISTS_FILENAME);
        fs::write(&answer, "a\nb\n").unwrap();
        fs::write(&candidate, "a\r\nb").unwrap();

        assert_eq!(compare_cmake_files(&answer, &candidate).unwrap(), None);
    }

    #[test]
    fn test_compare_reports_first_differing_line() {
        let dir = TempDir::new().unwrap();
        let answer = dir.path().join(ANSWER_FILENAME);
        let candidate = dir.path().join(CMAKE_LISTS_FILENAME);
        fs::write(&answer, "a\nb\nc").unwrap();
        fs::write(&candidate, "a\nx\nc").unwrap();

        let message = compare_cmake_files(&answer, &candidate).unwrap().unwrap();
        assert!(message.contains("line 2"));

        fs::write(&candidate, "a\nb").unwrap();
        let message = compare_cmake_files(&answer, &candidate).unwrap().unwrap();
        assert!(message.contains("line 3"));
    }

    #[test]
    fn test_compare_missing_files() {
        let dir = TempDir::new().unwrap();
        let answer = dir.path().join(ANSWER_FILENAME);
        let candidate = dir.path().join(CMAKE_LISTS_FILENAME);

        let message = compare_cmake_files(&answer, &candidate).unwrap().unwrap();
        assert_eq!(message, "CMakeLists.answer does not exist");

        fs::write(&answer, "a").unwrap();
        let message = compare_cmake_files(&answer, &candidate).unwrap().unwrap();
        assert_eq!(message, "CMakeLists.txt does not exist");
    }

    #[test]
    fn test_find_comparison_pairs_breadth_first() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("App")).unwrap();
        fs::create_dir_all(root.join("libs/Core")).unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join(CMAKE_LISTS_FILENAME), "").unwrap();
        fs::write(root.join("App").join(ANSWER_FILENAME), "").unwrap();
        fs::write(root.join("libs/Core").join(CMAKE_LISTS_FILENAME), "").unwrap();

        let pairs = find_comparison_pairs(root).unwrap();
        let dirs: Vec<PathBuf> = pairs
            .iter()
            .map(|p| p.candidate.parent().unwrap().to_path_buf())
            .collect();
        assert_eq!(
            dirs,
            vec![root.to_path_buf(), root.join("App"), root.join("libs/Core")]
        );
    }

    #[test]
    fn test_initialize_and_search() {
        let repo = TempDir::new().unwrap();
        fs::create_dir_all(repo.path().join("testcases/second")).unwrap();
        fs::create_dir_all(repo.path().join("testcases/first")).unwrap();
        fs::write(repo.path().join("testcases/README"), "").unwrap();

        let ctx = HarnessContext::new(repo.path()).with_run_name("run");
        initialize(&ctx).unwrap();
        assert!(ctx.test_running_directory_path().is_dir());
        assert!(initialize(&ctx).is_err());

        assert_eq!(search_test_cases(&ctx).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_initialize_rejects_file_in_place_of_output_dir() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join("test-output"), "").unwrap();
        let ctx = HarnessContext::new(repo.path());
        assert!(matches!(initialize(&ctx), Err(CmmError::HarnessError { .. })));
    }
}

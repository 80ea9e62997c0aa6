use crate::config::harness_config::{GeneratorSection, HarnessConfig};
use crate::config::GeneratorSettings;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Paths and settings of one harness run.
#[derive(Debug, Clone)]
pub struct HarnessContext {
    repository_path: PathBuf,
    test_case_directory_path: PathBuf,
    test_output_directory_path: PathBuf,
    test_running_name: String,
    test_running_directory_path: PathBuf,
    test_running_result_filename: String,
    solution_subdirectory: String,
    generator: GeneratorSection,
}

/// `2024-03-05T07:08:09.123Z` becomes `2024_03_05_07_08_09_123`.
pub fn run_name(now: DateTime<Utc>) -> String {
    now.format("%Y_%m_%d_%H_%M_%S_%3f").to_string()
}

impl HarnessContext {
    pub fn new<P: Into<PathBuf>>(repository_path: P) -> Self {
        Self::from_config(repository_path, &HarnessConfig::default())
    }

    pub fn from_config<P: Into<PathBuf>>(repository_path: P, config: &HarnessConfig) -> Self {
        let repository_path = repository_path.into();
        let test_case_directory_path = repository_path.join(&config.harness.testcase_directory);
        let test_output_directory_path = repository_path.join(&config.harness.output_directory);
        let test_running_name = run_name(Utc::now());
        let test_running_directory_path = test_output_directory_path.join(&test_running_name);

        Self {
            repository_path,
            test_case_directory_path,
            test_output_directory_path,
            test_running_name,
            test_running_directory_path,
            test_running_result_filename: config.harness.result_filename.clone(),
            solution_subdirectory: config.harness.solution_subdirectory.clone(),
            generator: config.generator.clone(),
        }
    }

    /// Replaces the timestamp name, e.g. to get a predictable run directory.
    pub fn with_run_name(mut self, name: &str) -> Self {
        self.test_running_name = name.to_string();
        self.test_running_directory_path = self.test_output_directory_path.join(name);
        self
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    pub fn test_case_directory_path(&self) -> &Path {
        &self.test_case_directory_path
    }

    pub fn test_output_directory_path(&self) -> &Path {
        &self.test_output_directory_path
    }

    pub fn test_running_name(&self) -> &str {
        &self.test_running_name
    }

    pub fn test_running_directory_path(&self) -> &Path {
        &self.test_running_directory_path
    }

    pub fn test_running_result_filename(&self) -> &str {
        &self.test_running_result_filename
    }

    pub fn result_file_path(&self) -> PathBuf {
        self.test_running_directory_path
            .join(format!("{}.html", self.test_running_result_filename))
    }

    /// Solution directory of a test case copied into the run directory.
    pub fn solution_dir_of(&self, testcase: &str) -> PathBuf {
        self.test_running_directory_path
            .join(testcase)
            .join(&self.solution_subdirectory)
    }

    pub fn generator_settings(&self, solution_dir: PathBuf) -> GeneratorSettings {
        GeneratorSettings {
            solution_dir,
            cmake_minimum_required: self.generator.cmake_minimum_required.clone(),
            line_ending: self.generator.line_ending,
        }
    }
}

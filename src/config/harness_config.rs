use crate::config::DEFAULT_CMAKE_MINIMUM_REQUIRED;
use crate::domain::model::LineEnding;
use crate::utils::error::{CmmError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_version, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings of the regression harness.
///
/// ```toml
/// [harness]
/// testcase_directory = "testcases"
/// output_directory = "${CMM_TEST_OUTPUT}"
///
/// [generator]
/// cmake_minimum_required = "3.16"
/// line_ending = "lf"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub harness: HarnessSection,
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessSection {
    /// Relative paths are resolved against the repository.
    pub testcase_directory: String,
    pub output_directory: String,
    pub result_filename: String,
    /// Solution directory inside each test case.
    pub solution_subdirectory: String,
}

impl Default for HarnessSection {
    fn default() -> Self {
        Self {
            testcase_directory: "testcases".to_string(),
            output_directory: "test-output".to_string(),
            result_filename: "result".to_string(),
            solution_subdirectory: "src".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    pub cmake_minimum_required: String,
    pub line_ending: LineEnding,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            cmake_minimum_required: DEFAULT_CMAKE_MINIMUM_REQUIRED.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

impl HarnessConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| CmmError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for HarnessConfig {
    fn validate(&self) -> Result<()> {
        validate_path("harness.testcase_directory", &self.harness.testcase_directory)?;
        validate_path("harness.output_directory", &self.harness.output_directory)?;
        validate_non_empty_string("harness.result_filename", &self.harness.result_filename)?;
        validate_path(
            "harness.solution_subdirectory",
            &self.harness.solution_subdirectory,
        )?;
        validate_version(
            "generator.cmake_minimum_required",
            &self.generator.cmake_minimum_required,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = HarnessConfig::from_toml_str("").unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.harness.testcase_directory, "testcases");
        assert_eq!(config.harness.output_directory, "test-output");
        assert_eq!(config.generator.cmake_minimum_required, "3.5");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[harness]
testcase_directory = "fixtures"
output_directory = "/tmp/cmm-runs"
result_filename = "report"

[generator]
cmake_minimum_required = "3.16"
line_ending = "lf"
"#;
        let config = HarnessConfig::from_toml_str(content).unwrap();
        assert_eq!(config.harness.testcase_directory, "fixtures");
        assert_eq!(config.harness.result_filename, "report");
        assert_eq!(config.harness.solution_subdirectory, "src");
        assert_eq!(config.generator.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CMM_HARNESS_TEST_OUTPUT", "/tmp/substituted");

        let content = r#"
[harness]
output_directory = "${CMM_HARNESS_TEST_OUTPUT}"
"#;
        let config = HarnessConfig::from_toml_str(content).unwrap();
        assert_eq!(config.harness.output_directory, "/tmp/substituted");

        std::env::remove_var("CMM_HARNESS_TEST_OUTPUT");
    }

    #[test]
    fn test_invalid_values() {
        let config = HarnessConfig::from_toml_str(
            r#"
[generator]
cmake_minimum_required = "three"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        assert!(HarnessConfig::from_toml_str("[generator]\nline_ending = \"cr\"").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[harness]\nresult_filename = \"from-file\"\n")
            .unwrap();

        let config = HarnessConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.harness.result_filename, "from-file");
    }
}

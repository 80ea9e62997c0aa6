pub mod cli;
pub mod harness_config;

use crate::core::SettingsProvider;
use crate::domain::model::LineEnding;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_version, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CMAKE_MINIMUM_REQUIRED: &str = "3.5";

/// Resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub solution_dir: PathBuf,
    pub cmake_minimum_required: String,
    pub line_ending: LineEnding,
}

impl GeneratorSettings {
    pub fn new<P: Into<PathBuf>>(solution_dir: P) -> Self {
        Self {
            solution_dir: solution_dir.into(),
            cmake_minimum_required: DEFAULT_CMAKE_MINIMUM_REQUIRED.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

impl SettingsProvider for GeneratorSettings {
    fn solution_dir(&self) -> &Path {
        &self.solution_dir
    }

    fn cmake_minimum_required(&self) -> &str {
        &self.cmake_minimum_required
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_path("solution_dir", &self.solution_dir.to_string_lossy())?;
        validate_version("cmake_minimum_required", &self.cmake_minimum_required)
    }
}

/// Makes `path` absolute against the current working directory.
pub fn resolve_against_cwd(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::{resolve_against_cwd, GeneratorSettings, DEFAULT_CMAKE_MINIMUM_REQUIRED};
    use crate::domain::model::LineEnding;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_version, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "cmm")]
    #[command(about = "Generate CMakeLists.txt files for a C++ solution described by cmm.json files")]
    pub struct CliConfig {
        /// Directory holding the solution cmm.json
        #[arg(long)]
        pub solution_dir: PathBuf,

        #[arg(long, default_value = DEFAULT_CMAKE_MINIMUM_REQUIRED)]
        pub cmake_minimum_required: String,

        /// Line ending of generated files (crlf or lf)
        #[arg(long, default_value = "crlf")]
        pub line_ending: LineEnding,

        /// Print the files that would be generated without writing them
        #[arg(long)]
        pub dry_run: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn settings(&self) -> Result<GeneratorSettings> {
            Ok(GeneratorSettings {
                solution_dir: resolve_against_cwd(&self.solution_dir)?,
                cmake_minimum_required: self.cmake_minimum_required.clone(),
                line_ending: self.line_ending,
            })
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("solution_dir", &self.solution_dir.to_string_lossy())?;
            validate_version("cmake_minimum_required", &self.cmake_minimum_required)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_settings_defaults() {
        let settings = GeneratorSettings::new("/s/src");
        assert_eq!(settings.cmake_minimum_required(), "3.5");
        assert_eq!(settings.line_ending(), LineEnding::Crlf);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_resolve_against_cwd() {
        let absolute = resolve_against_cwd(Path::new("/already/absolute")).unwrap();
        assert_eq!(absolute, PathBuf::from("/already/absolute"));
        assert!(resolve_against_cwd(Path::new("rel")).unwrap().is_absolute());
    }
}

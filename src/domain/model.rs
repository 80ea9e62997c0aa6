use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    ConsoleApplication,
    DesktopApplication,
    DynamicLinkLibrary,
    StaticLibrary,
}

impl ProjectType {
    pub fn is_application(self) -> bool {
        matches!(
            self,
            ProjectType::ConsoleApplication | ProjectType::DesktopApplication
        )
    }

    pub fn is_library(self) -> bool {
        !self.is_application()
    }

    /// Extension of the default target filename.
    pub fn target_extension(self) -> &'static str {
        match self {
            ProjectType::ConsoleApplication | ProjectType::DesktopApplication => "exe",
            ProjectType::StaticLibrary => "lib",
            ProjectType::DynamicLinkLibrary => "dll",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CxxStandard {
    #[default]
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
}

impl CxxStandard {
    pub fn as_str(self) -> &'static str {
        match self {
            CxxStandard::Cxx11 => "11",
            CxxStandard::Cxx14 => "14",
            CxxStandard::Cxx17 => "17",
            CxxStandard::Cxx20 => "20",
        }
    }
}

impl TryFrom<u32> for CxxStandard {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            11 => Ok(CxxStandard::Cxx11),
            14 => Ok(CxxStandard::Cxx14),
            17 => Ok(CxxStandard::Cxx17),
            20 => Ok(CxxStandard::Cxx20),
            other => Err(format!(
                "unsupported C++ standard {} (expected 11, 14, 17 or 20)",
                other
            )),
        }
    }
}

impl From<CxxStandard> for u32 {
    fn from(value: CxxStandard) -> Self {
        match value {
            CxxStandard::Cxx11 => 11,
            CxxStandard::Cxx14 => 14,
            CxxStandard::Cxx17 => 17,
            CxxStandard::Cxx20 => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QtProjectConfig {
    pub auto_uic: bool,
    pub auto_moc: bool,
    pub auto_rcc: bool,
    pub packages: Vec<String>,
    pub console: bool,
}

impl Default for QtProjectConfig {
    fn default() -> Self {
        Self {
            auto_uic: true,
            auto_moc: true,
            auto_rcc: true,
            packages: Vec::new(),
            console: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub name: String,
    pub project_path: PathBuf,
    pub project_type: ProjectType,
    pub target_filename: String,
    /// Source files relative to `project_path`.
    pub files: Vec<PathBuf>,
    pub definitions: Vec<String>,
    pub include_current_dir: bool,
    pub cxx_standard: CxxStandard,
    pub cxx_standard_required: bool,
    pub cxx_flags: Vec<String>,
    pub include_directories: Vec<String>,
    pub link_directories: Vec<String>,
    pub link_libraries: Vec<String>,
    pub internal_includes: Vec<String>,
    pub internal_libraries: Vec<String>,
    pub qt_config: Option<QtProjectConfig>,
}

impl ProjectConfig {
    pub fn new<P: Into<PathBuf>>(name: &str, project_path: P) -> Self {
        let project_type = ProjectType::default();
        Self {
            name: name.to_string(),
            project_path: project_path.into(),
            project_type,
            target_filename: default_target_filename(name, project_type),
            files: Vec::new(),
            definitions: Vec::new(),
            include_current_dir: true,
            cxx_standard: CxxStandard::default(),
            cxx_standard_required: true,
            cxx_flags: Vec::new(),
            include_directories: Vec::new(),
            link_directories: Vec::new(),
            link_libraries: Vec::new(),
            internal_includes: Vec::new(),
            internal_libraries: Vec::new(),
            qt_config: None,
        }
    }

    /// Import library other projects link against: the target stem plus `.lib`.
    pub fn link_library_name(&self) -> String {
        let stem = Path::new(&self.target_filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target_filename.clone());
        format!("{}.lib", stem)
    }
}

pub fn default_target_filename(name: &str, project_type: ProjectType) -> String {
    format!("{}.{}", name, project_type.target_extension())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionConfig {
    pub name: String,
    pub solution_path: PathBuf,
    pub version: String,
    pub output_directory: String,
    /// Project directories relative to the solution, in discovery order.
    pub subdirectories: Vec<String>,
    pub startup_project: String,
    pub debugger_working_directory: String,
}

impl SolutionConfig {
    pub fn new<P: Into<PathBuf>>(name: &str, solution_path: P) -> Self {
        Self {
            name: name.to_string(),
            solution_path: solution_path.into(),
            version: "0.1".to_string(),
            output_directory: String::new(),
            subdirectories: Vec::new(),
            startup_project: String::new(),
            debugger_working_directory: String::new(),
        }
    }
}

/// Config files found below a solution directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionLayout {
    pub solution_config_path: PathBuf,
    pub project_config_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SolutionModel {
    pub solution: SolutionConfig,
    pub projects: Vec<ProjectConfig>,
}

impl SolutionModel {
    pub fn project(&self, name: &str) -> Option<&ProjectConfig> {
        self.projects.iter().find(|p| p.name == name)
    }
}

/// A generated file, addressed relative to the solution directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crlf" => Ok(LineEnding::Crlf),
            "lf" => Ok(LineEnding::Lf),
            other => Err(format!("unknown line ending '{}' (expected crlf or lf)", other)),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Crlf => write!(f, "crlf"),
            LineEnding::Lf => write!(f, "lf"),
        }
    }
}

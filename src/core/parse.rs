use crate::domain::model::{
    default_target_filename, CxxStandard, ProjectConfig, ProjectType, QtProjectConfig,
    SolutionConfig, SolutionModel,
};
use crate::utils::error::{CmmError, Result};
use crate::utils::fs::sorted_entries;
use crate::utils::paths::{relative_path, to_cmake_path};
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const CXX_EXTENSIONS: &[&str] = &[
    "h", "c", "i", "hpp", "cpp", "cc", "cxx", "c++", "hh", "hxx", "h++", "ii",
];
const QT_EXTENSIONS: &[&str] = &["ui", "qrc"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSolutionConfig {
    name: Option<String>,
    version: Option<String>,
    output_directory: Option<String>,
    startup_project: Option<String>,
    debugger_working_directory: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawProjectConfig {
    name: Option<String>,
    #[serde(rename = "type")]
    project_type: Option<ProjectType>,
    target_filename: Option<String>,
    definitions: Vec<String>,
    include_current_directory: Option<bool>,
    cxx_standard: Option<CxxStandard>,
    cxx_standard_required: Option<bool>,
    cxx_flags: Vec<String>,
    include_directories: Vec<String>,
    /// Older spelling, merged after `include_directories`.
    include_directory: Vec<String>,
    link_directories: Vec<String>,
    link_libraries: Vec<String>,
    internal_includes: Vec<String>,
    internal_libraries: Vec<String>,
    #[serde(deserialize_with = "qt_section")]
    qt: Option<QtProjectConfig>,
}

fn qt_section<'de, D>(deserializer: D) -> std::result::Result<Option<QtProjectConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value @ serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Err(de::Error::custom("`qt` must be a JSON object")),
    }
}

fn from_json<T: DeserializeOwned>(config_path: &Path, content: &str) -> Result<T> {
    let parse_error = |message: String| CmmError::ConfigParseError {
        path: config_path.display().to_string(),
        message,
    };

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    if !value.is_object() {
        return Err(parse_error("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))
}

fn config_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn parse_solution(config_path: &Path, content: &str) -> Result<SolutionConfig> {
    let raw: RawSolutionConfig = from_json(config_path, content)?;

    let name = validate_required_field("name", &raw.name)
        .and_then(|name| validate_non_empty_string("name", name).map(|_| name))
        .map_err(|e| CmmError::ConfigParseError {
            path: config_path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut solution = SolutionConfig::new(name, config_dir(config_path));
    if let Some(version) = non_empty(raw.version) {
        solution.version = version;
    }
    if let Some(output_directory) = non_empty(raw.output_directory) {
        solution.output_directory = output_directory;
    }
    if let Some(startup_project) = non_empty(raw.startup_project) {
        solution.startup_project = startup_project;
    }
    if let Some(dir) = raw.debugger_working_directory {
        solution.debugger_working_directory = dir;
    }

    tracing::debug!("Parsed solution '{}' v{}", solution.name, solution.version);
    Ok(solution)
}

pub fn parse_project(config_path: &Path, content: &str) -> Result<ProjectConfig> {
    let raw: RawProjectConfig = from_json(config_path, content)?;
    let project_path = config_dir(config_path);

    let name = non_empty(raw.name)
        .or_else(|| {
            project_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CmmError::ConfigParseError {
            path: config_path.display().to_string(),
            message: "project has no name and its directory name is unusable".to_string(),
        })?;

    let mut project = ProjectConfig::new(&name, project_path);
    project.project_type = raw.project_type.unwrap_or_default();
    project.target_filename = non_empty(raw.target_filename)
        .unwrap_or_else(|| default_target_filename(&name, project.project_type));
    project.definitions = raw.definitions;
    if let Some(include_current_dir) = raw.include_current_directory {
        project.include_current_dir = include_current_dir;
    }
    if let Some(cxx_standard) = raw.cxx_standard {
        project.cxx_standard = cxx_standard;
    }
    if let Some(required) = raw.cxx_standard_required {
        project.cxx_standard_required = required;
    }
    project.cxx_flags = raw.cxx_flags;
    project.include_directories = raw.include_directories;
    project.include_directories.extend(raw.include_directory);
    project.link_directories = raw.link_directories;
    project.link_libraries = raw.link_libraries;
    project.internal_includes = raw.internal_includes;
    project.internal_libraries = raw.internal_libraries;
    project.qt_config = raw.qt;

    project.files = discover_sources(&project.project_path, project.qt_config.is_some())?;

    tracing::debug!(
        "Parsed project '{}' ({:?}, {} files)",
        project.name,
        project.project_type,
        project.files.len()
    );
    Ok(project)
}

/// Source files below `root`, relative to it and sorted by their `/` form.
pub fn discover_sources(root: &Path, include_qt: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_sources(root, root, include_qt, &mut files)?;
    files.sort_by_key(|f| to_cmake_path(f));
    Ok(files)
}

fn collect_sources(
    root: &Path,
    directory: &Path,
    include_qt: bool,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in sorted_entries(directory)? {
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_sources(root, &path, include_qt, files)?;
        } else if file_type.is_file() && is_source_file(&path, include_qt) {
            files.push(relative_path(root, &path));
        }
    }
    Ok(())
}

fn is_source_file(path: &Path, include_qt: bool) -> bool {
    let Some(extension) = path.extension() else {
        return false;
    };
    let extension = extension.to_string_lossy().to_lowercase();
    CXX_EXTENSIONS.contains(&extension.as_str())
        || (include_qt && QT_EXTENSIONS.contains(&extension.as_str()))
}

/// Registers every project with the solution, in discovery order.
pub fn assemble(mut solution: SolutionConfig, projects: Vec<ProjectConfig>) -> Result<SolutionModel> {
    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.name.as_str()) {
            return Err(CmmError::config(format!(
                "duplicate project name '{}' ({})",
                project.name,
                project.project_path.display()
            )));
        }
        let subdirectory = relative_path(&solution.solution_path, &project.project_path);
        solution.subdirectories.push(to_cmake_path(&subdirectory));
    }

    Ok(SolutionModel { solution, projects })
}

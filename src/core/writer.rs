use crate::core::cmake;
use crate::core::document::Document;
use crate::domain::model::{ProjectConfig, ProjectType, SolutionConfig, SolutionModel};
use crate::utils::paths::{normalize, relative_path, to_cmake_path};
use std::path::{Path, PathBuf};

pub const PROJECT_SOURCES_VARIABLE: &str = "PROJECT_SOURCES";

/// Produces the `CMakeLists.txt` of one directory of the solution.
pub trait CMakeWriter {
    fn target_dir(&self) -> &Path;

    fn update_cmake_lines(&self, model: &SolutionModel, doc: &mut Document);

    fn build_document(&self, cmake_minimum_required: &str, model: &SolutionModel) -> Document {
        let mut doc = Document::new();
        doc.add(cmake::cmake_minimum_required(cmake_minimum_required));
        self.update_cmake_lines(model, &mut doc);
        doc
    }
}

/// Insertion-ordered set of normalized directories.
#[derive(Default)]
struct IncludeDirectories {
    dirs: Vec<PathBuf>,
}

impl IncludeDirectories {
    fn insert(&mut self, dir: &Path) {
        let dir = normalize(dir);
        if !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    /// The project directory and the directory of each of its sources.
    fn insert_project(&mut self, project: &ProjectConfig) {
        self.insert(&project.project_path);
        self.insert_sources_of(project);
    }

    fn insert_sources_of(&mut self, project: &ProjectConfig) {
        for file in &project.files {
            let full_path = project.project_path.join(file);
            if let Some(parent) = full_path.parent() {
                self.insert(parent);
            }
        }
    }
}

pub struct ProjectWriter<'a> {
    data: &'a ProjectConfig,
}

impl<'a> ProjectWriter<'a> {
    pub fn new(data: &'a ProjectConfig) -> Self {
        Self { data }
    }

    fn source_group(file: &Path) -> String {
        let filter = file.parent().map(to_cmake_path).unwrap_or_default();
        cmake::source_group(&filter, file)
    }

    fn add_target(&self, doc: &mut Document) {
        let name = &self.data.name;
        let target = match self.data.project_type {
            ProjectType::ConsoleApplication | ProjectType::DesktopApplication => {
                cmake::add_executable(name, PROJECT_SOURCES_VARIABLE)
            }
            ProjectType::StaticLibrary => cmake::add_library(name, PROJECT_SOURCES_VARIABLE, false),
            ProjectType::DynamicLinkLibrary => {
                cmake::add_library(name, PROJECT_SOURCES_VARIABLE, true)
            }
        };
        doc.add(target);
    }
}

impl CMakeWriter for ProjectWriter<'_> {
    fn target_dir(&self) -> &Path {
        &self.data.project_path
    }

    fn update_cmake_lines(&self, model: &SolutionModel, doc: &mut Document) {
        let data = self.data;
        let project_path = &data.project_path;
        let qt_config = data.qt_config.as_ref();

        doc.add(cmake::project(&data.name, None));
        doc.add_optional(cmake::cmake_include_current_dir(data.include_current_dir));
        if let Some(qt) = qt_config {
            doc.add_optional(cmake::cmake_autouic(qt.auto_uic));
            doc.add_optional(cmake::cmake_automoc(qt.auto_moc));
            doc.add_optional(cmake::cmake_autorcc(qt.auto_rcc));
        }
        let console_qt = qt_config.map(|qt| qt.console).unwrap_or(false);
        if data.project_type == ProjectType::DesktopApplication && !console_qt {
            doc.add(cmake::cmake_exe_linker_flags());
        }
        doc.add(cmake::cmake_cxx_standard(data.cxx_standard));
        doc.add_optional(cmake::cmake_cxx_standard_required(data.cxx_standard_required));
        if !data.cxx_flags.is_empty() {
            doc.add(cmake::set_cmake_cxx_flags(&data.cxx_flags));
        }

        let mut include_dirs = IncludeDirectories::default();
        include_dirs.insert_sources_of(data);

        for library_name in &data.internal_libraries {
            match model.project(library_name) {
                Some(library) if library.project_type.is_library() => {
                    include_dirs.insert_project(library);
                    doc.add_optional(cmake::link_libraries(&library.link_library_name()));
                }
                Some(_) => tracing::warn!(
                    "Project '{}': internal library '{}' is not a library, not linked",
                    data.name,
                    library_name
                ),
                None => tracing::warn!(
                    "Project '{}': internal library '{}' not found in solution, skipped",
                    data.name,
                    library_name
                ),
            }
        }

        for include_name in &data.internal_includes {
            match model.project(include_name) {
                Some(included) => include_dirs.insert_project(included),
                None => tracing::warn!(
                    "Project '{}': internal include '{}' not found in solution, skipped",
                    data.name,
                    include_name
                ),
            }
        }

        for include_directory in &data.include_directories {
            include_dirs.insert(&project_path.join(include_directory));
        }

        for dir in &include_dirs.dirs {
            let rel = relative_path(project_path, dir);
            if !rel.as_os_str().is_empty() {
                doc.add(cmake::include_directories(&rel));
            }
        }

        for link_dir in &data.link_directories {
            let rel = relative_path(project_path, &project_path.join(link_dir));
            if !rel.as_os_str().is_empty() {
                doc.add(cmake::link_directories(&rel));
            }
        }

        for link_lib in &data.link_libraries {
            doc.add_optional(cmake::link_libraries(link_lib));
        }

        if !data.internal_libraries.is_empty() {
            let solution = &model.solution;
            let output_dir = solution.solution_path.join(&solution.output_directory);
            let rel = relative_path(project_path, &output_dir);
            if !rel.as_os_str().is_empty() {
                doc.add(cmake::link_directories(&rel));
            }
        }

        if let Some(qt) = qt_config {
            for package in &qt.packages {
                doc.extend(cmake::find_package_qt(package));
            }
        }

        doc.extend(cmake::set_variable_multi_paths(
            PROJECT_SOURCES_VARIABLE,
            &data.files,
        ));
        self.add_target(doc);
        for file in &data.files {
            doc.add(Self::source_group(file));
        }
        for definition in &data.definitions {
            doc.add(cmake::target_compile_definitions(&data.name, definition));
        }
        if let Some(qt) = qt_config {
            for package in &qt.packages {
                doc.add(cmake::target_link_libraries_qt(&data.name, package));
            }
        }
    }
}

pub struct SolutionWriter<'a> {
    data: &'a SolutionConfig,
}

impl<'a> SolutionWriter<'a> {
    pub fn new(data: &'a SolutionConfig) -> Self {
        Self { data }
    }
}

impl CMakeWriter for SolutionWriter<'_> {
    fn target_dir(&self) -> &Path {
        &self.data.solution_path
    }

    fn update_cmake_lines(&self, model: &SolutionModel, doc: &mut Document) {
        let data = self.data;
        doc.add(cmake::project(&data.name, Some(&data.version)));
        doc.extend(cmake::cmake_output_directory(&data.output_directory));
        for subdirectory in &data.subdirectories {
            doc.add(cmake::add_subdirectory(subdirectory));
        }
        if !data.startup_project.is_empty() {
            doc.add(cmake::startup_project(&data.startup_project));
        }
        if !data.debugger_working_directory.is_empty() {
            if data.startup_project.is_empty() {
                tracing::warn!("debugger_working_directory ignored: no startup_project set");
            } else {
                doc.add(cmake::debugger_working_directory(
                    &data.startup_project,
                    &data.debugger_working_directory,
                ));
            }
        }
        for project in &model.projects {
            for library_name in &project.internal_libraries {
                if model.project(library_name).is_some() {
                    doc.add(cmake::add_dependencies(&project.name, library_name));
                }
            }
        }
    }
}

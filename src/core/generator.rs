use crate::core::document::CMAKE_LISTS_FILENAME;
use crate::core::parse::{assemble, parse_project, parse_solution};
use crate::core::search::search_solution_and_projects;
use crate::core::writer::{CMakeWriter, ProjectWriter, SolutionWriter};
use crate::core::{Pipeline, SettingsProvider, Storage};
use crate::domain::model::{RenderedFile, SolutionLayout, SolutionModel};
use crate::utils::error::{CmmError, Result};
use crate::utils::paths::{relative_path, to_cmake_path};
use std::path::Path;

/// Generates `CMakeLists.txt` files for a solution read from `settings`,
/// writing them through `storage` rooted at the solution directory.
pub struct CMakeGenerator<S: Storage, C: SettingsProvider> {
    storage: S,
    settings: C,
}

impl<S: Storage, C: SettingsProvider> CMakeGenerator<S, C> {
    pub fn new(storage: S, settings: C) -> Self {
        Self { storage, settings }
    }

    async fn read_config(&self, config_path: &Path) -> Result<String> {
        let storage_path = to_cmake_path(&relative_path(self.settings.solution_dir(), config_path));
        let bytes = self.storage.read_file(&storage_path).await?;
        String::from_utf8(bytes).map_err(|e| CmmError::ConfigParseError {
            path: config_path.display().to_string(),
            message: format!("not valid UTF-8: {}", e),
        })
    }

    fn render_writer<W: CMakeWriter>(&self, writer: &W, model: &SolutionModel) -> RenderedFile {
        let directory = relative_path(&model.solution.solution_path, writer.target_dir());
        let document = writer.build_document(self.settings.cmake_minimum_required(), model);
        RenderedFile {
            path: to_cmake_path(&directory.join(CMAKE_LISTS_FILENAME)),
            content: document.render(self.settings.line_ending()),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SettingsProvider> Pipeline for CMakeGenerator<S, C> {
    async fn discover(&self) -> Result<SolutionLayout> {
        search_solution_and_projects(self.settings.solution_dir())
    }

    async fn parse(&self, layout: SolutionLayout) -> Result<SolutionModel> {
        let content = self.read_config(&layout.solution_config_path).await?;
        let solution = parse_solution(&layout.solution_config_path, &content)?;

        let mut projects = Vec::with_capacity(layout.project_config_paths.len());
        for config_path in &layout.project_config_paths {
            let content = self.read_config(config_path).await?;
            projects.push(parse_project(config_path, &content)?);
        }

        assemble(solution, projects)
    }

    async fn emit(&self, model: SolutionModel) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for file in self.render(&model) {
            tracing::debug!("Writing {} ({} bytes)", file.path, file.content.len());
            self.storage
                .write_file(&file.path, file.content.as_bytes())
                .await?;
            written.push(file.path);
        }
        Ok(written)
    }

    /// Project files first, then the solution file.
    fn render(&self, model: &SolutionModel) -> Vec<RenderedFile> {
        let mut files: Vec<RenderedFile> = model
            .projects
            .iter()
            .map(|project| self.render_writer(&ProjectWriter::new(project), model))
            .collect();
        files.push(self.render_writer(&SolutionWriter::new(&model.solution), model));
        files
    }
}

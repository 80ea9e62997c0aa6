use crate::core::{Pipeline, RenderedFile, SolutionModel};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub solution: String,
    pub projects: usize,
    pub written: Vec<String>,
}

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Discovers and parses the solution without writing anything.
    pub async fn plan(&self) -> Result<SolutionModel> {
        tracing::info!("Searching for solution and projects...");
        let layout = self.pipeline.discover().await?;
        tracing::info!(
            "Found {} project config(s)",
            layout.project_config_paths.len()
        );

        tracing::info!("Parsing configurations...");
        let model = self.pipeline.parse(layout).await?;
        tracing::debug!(
            "Solution '{}' with projects: {:?}",
            model.solution.name,
            model.projects.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
        );
        Ok(model)
    }

    pub async fn preview(&self) -> Result<Vec<RenderedFile>> {
        let model = self.plan().await?;
        Ok(self.pipeline.render(&model))
    }

    pub async fn run(&self) -> Result<GenerationReport> {
        let model = self.plan().await?;
        let solution = model.solution.name.clone();
        let projects = model.projects.len();

        tracing::info!("Writing CMakeLists.txt files...");
        let written = self.pipeline.emit(model).await?;
        tracing::info!("Wrote {} file(s) for solution '{}'", written.len(), solution);

        Ok(GenerationReport {
            solution,
            projects,
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SolutionConfig, SolutionLayout};
    use crate::utils::error::CmmError;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockPipeline {
        fail_discovery: bool,
        emitted: AtomicUsize,
    }

    impl MockPipeline {
        fn new(fail_discovery: bool) -> Self {
            Self {
                fail_discovery,
                emitted: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for MockPipeline {
        async fn discover(&self) -> Result<SolutionLayout> {
            if self.fail_discovery {
                return Err(CmmError::SolutionNotFound {
                    path: "/nowhere".to_string(),
                    filename: "cmm.json".to_string(),
                });
            }
            Ok(SolutionLayout {
                solution_config_path: PathBuf::from("/s/cmm.json"),
                project_config_paths: vec![],
            })
        }

        async fn parse(&self, _layout: SolutionLayout) -> Result<SolutionModel> {
            Ok(SolutionModel {
                solution: SolutionConfig::new("mock", "/s"),
                projects: vec![],
            })
        }

        async fn emit(&self, model: SolutionModel) -> Result<Vec<String>> {
            self.emitted.fetch_add(1, Ordering::SeqCst);
            Ok(self.render(&model).into_iter().map(|f| f.path).collect())
        }

        fn render(&self, _model: &SolutionModel) -> Vec<RenderedFile> {
            vec![RenderedFile {
                path: "CMakeLists.txt".to_string(),
                content: String::new(),
            }]
        }
    }

    #[tokio::test]
    async fn test_run_reports_written_files() {
        let engine = GenerationEngine::new(MockPipeline::new(false));
        let report = engine.run().await.unwrap();
        assert_eq!(report.solution, "mock");
        assert_eq!(report.projects, 0);
        assert_eq!(report.written, vec!["CMakeLists.txt"]);
    }

    #[tokio::test]
    async fn test_preview_does_not_emit() {
        let engine = GenerationEngine::new(MockPipeline::new(false));
        let files = engine.preview().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(engine.pipeline.emitted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_discovery_failure_propagates() {
        let engine = GenerationEngine::new(MockPipeline::new(true));
        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, CmmError::SolutionNotFound { .. }));
    }
}

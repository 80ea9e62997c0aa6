use crate::domain::model::{LineEnding, RenderedFile, SolutionLayout, SolutionModel};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait SettingsProvider: Send + Sync {
    fn solution_dir(&self) -> &Path;
    fn cmake_minimum_required(&self) -> &str;
    fn line_ending(&self) -> LineEnding;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn discover(&self) -> Result<SolutionLayout>;
    async fn parse(&self, layout: SolutionLayout) -> Result<SolutionModel>;
    async fn emit(&self, model: SolutionModel) -> Result<Vec<String>>;

    /// The files `emit` would write, without writing them.
    fn render(&self, model: &SolutionModel) -> Vec<RenderedFile>;
}

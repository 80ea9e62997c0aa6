pub mod cmake;
pub mod document;
pub mod engine;
pub mod generator;
pub mod parse;
pub mod search;
pub mod writer;

pub use crate::domain::model::{ProjectConfig, RenderedFile, SolutionConfig, SolutionModel};
pub use crate::domain::ports::{Pipeline, SettingsProvider, Storage};
pub use crate::utils::error::Result;

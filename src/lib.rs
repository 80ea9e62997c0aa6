pub mod config;
pub mod core;
pub mod domain;
pub mod geometry;
pub mod harness;
pub mod utils;

pub use config::{cli::LocalStorage, GeneratorSettings};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::GenerationEngine, generator::CMakeGenerator};
pub use utils::error::{CmmError, Result};

use crate::domain::model::SolutionLayout;
use crate::utils::error::{CmmError, Result};
use crate::utils::fs::sorted_entries;
use std::path::{Path, PathBuf};

/// Name of the configuration file marking solutions and projects.
pub const CONFIG_FILENAME: &str = "cmm.json";

/// Finds the solution config in `solution_dir` and every project config below it.
///
/// Sub-directories are visited depth-first in name order. A directory holding
/// its own `cmm.json` is a project and is not searched any further.
pub fn search_solution_and_projects(solution_dir: &Path) -> Result<SolutionLayout> {
    if !solution_dir.is_dir() {
        return Err(CmmError::SolutionNotFound {
            path: solution_dir.display().to_string(),
            filename: CONFIG_FILENAME.to_string(),
        });
    }

    let solution_config_path = solution_dir.join(CONFIG_FILENAME);
    if !solution_config_path.is_file() {
        return Err(CmmError::SolutionNotFound {
            path: solution_dir.display().to_string(),
            filename: CONFIG_FILENAME.to_string(),
        });
    }

    let mut project_config_paths = Vec::new();
    search_projects(solution_dir, &mut project_config_paths)?;
    tracing::debug!(
        "Found {} project(s) below {}",
        project_config_paths.len(),
        solution_dir.display()
    );

    Ok(SolutionLayout {
        solution_config_path,
        project_config_paths,
    })
}

fn search_projects(directory: &Path, projects: &mut Vec<PathBuf>) -> Result<()> {
    for entry in sorted_entries(directory)? {
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let child = entry.path();
        let config_path = child.join(CONFIG_FILENAME);
        if config_path.is_file() {
            tracing::debug!("Project config: {}", config_path.display());
            projects.push(config_path);
        } else {
            search_projects(&child, projects)?;
        }
    }
    Ok(())
}

use crate::utils::error::{CmmError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+(\.\d+){0,3}$").expect("valid version regex"))
}

/// Accepts CMake style versions: `3`, `3.5`, `3.16.2`, `3.16.2.1`.
pub fn validate_version(field_name: &str, version: &str) -> Result<()> {
    if !version_pattern().is_match(version) {
        return Err(CmmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: version.to_string(),
            reason: "Expected a dotted numeric version such as 3.5".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CmmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CmmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CmmError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CmmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_version() {
        assert!(validate_version("cmake_minimum_required", "3.5").is_ok());
        assert!(validate_version("cmake_minimum_required", "3").is_ok());
        assert!(validate_version("cmake_minimum_required", "3.16.2").is_ok());
        assert!(validate_version("cmake_minimum_required", "").is_err());
        assert!(validate_version("cmake_minimum_required", "3.x").is_err());
        assert!(validate_version("cmake_minimum_required", "3.5 FATAL_ERROR").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("solution_dir", "src").is_ok());
        assert!(validate_path("solution_dir", "").is_err());
        assert!(validate_path("solution_dir", "a\0b").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("App".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("name", &present).unwrap(), "App");
        assert!(matches!(
            validate_required_field("name", &missing),
            Err(CmmError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "demo").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}

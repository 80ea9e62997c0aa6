use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmmError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Solution not found: {path} has no {filename}")]
    SolutionNotFound { path: String, filename: String },

    #[error("Test harness error: {message}")]
    HarnessError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Discovery,
    Harness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CmmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CmmError::IoError(_) => ErrorCategory::Io,
            CmmError::TomlError(_)
            | CmmError::ConfigError { .. }
            | CmmError::MissingConfigError { .. }
            | CmmError::InvalidConfigValueError { .. }
            | CmmError::ConfigParseError { .. } => ErrorCategory::Configuration,
            CmmError::SolutionNotFound { .. } => ErrorCategory::Discovery,
            CmmError::HarnessError { .. } => ErrorCategory::Harness,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CmmError::IoError(_) => ErrorSeverity::Critical,
            CmmError::HarnessError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the directories exist and are readable and writable",
            ErrorCategory::Configuration => {
                "Fix the reported cmm.json or command line value and run again"
            }
            ErrorCategory::Discovery => {
                "Point --solution-dir at a directory that contains the solution cmm.json"
            }
            ErrorCategory::Harness => "Inspect the test case directory layout and the run output",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CmmError::ConfigParseError { path, message } => {
                format!("Could not read configuration {}: {}", path, message)
            }
            CmmError::SolutionNotFound { path, filename } => {
                format!("No {} found in {}", filename, path)
            }
            CmmError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {} '{}': {}", field, value, reason),
            other => other.to_string(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        CmmError::ConfigError {
            message: message.into(),
        }
    }

    pub fn harness<S: Into<String>>(message: S) -> Self {
        CmmError::HarnessError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CmmError>;

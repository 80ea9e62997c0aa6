pub mod error;
pub mod fs;
pub mod logger;
pub mod paths;
pub mod validation;

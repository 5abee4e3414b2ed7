use crate::utils::error::{AreaError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    // A missing file is left to the open call, which reports it as an IO error.
    if path.is_dir() {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path is a directory".to_string(),
        });
    }

    Ok(())
}

#[cfg(feature = "cli")]
impl Validate for crate::config::CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        Ok(())
    }
}

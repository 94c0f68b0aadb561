use crate::utils::error::{FileIoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FileIoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FileIoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A file path must name a file, not a directory.
pub fn validate_file_path(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(FileIoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must name a file, not a directory".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FileIoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("log.path", "data/app_log.txt").is_ok());
        assert!(validate_path("log.path", "").is_err());
        assert!(validate_path("log.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("log.path", "logs/app.txt").is_ok());
        assert!(validate_file_path("log.path", "logs/").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("converter.indent", 4, 0, 16).is_ok());
        assert!(validate_range("converter.indent", 17, 0, 16).is_err());
    }
}

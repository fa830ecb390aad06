use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A value read back from a single console line can never contain a line break.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot contain line breaks".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "first-steps.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("guess.target", "blue").is_ok());
        assert!(validate_non_empty_string("guess.target", "").is_err());
        assert!(validate_non_empty_string("guess.target", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("guess.target", "blue green").is_ok());
        assert!(validate_single_line("guess.target", "blue\n").is_err());
        assert!(validate_single_line("guess.target", "blue\r").is_err());
    }
}

use crate::utils::error::{NotionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> NotionError {
    NotionError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

/// A bare file name: no directory components and no NUL bytes.
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('\0') {
        return Err(invalid(field_name, value, "File name contains null bytes"));
    }

    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        return Err(invalid(
            field_name,
            value,
            "Expected a file name, not a path",
        ));
    }

    Ok(())
}

/// Names used as environment variable keys or `KEY=value` keys.
pub fn validate_key_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid(
            field_name,
            value,
            "Only ASCII letters, digits and '_' are allowed",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("filename.placeholder", "untitled").is_ok());
        assert!(validate_non_empty_string("filename.placeholder", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("filename.max_length", 200, 1).is_ok());
        assert!(validate_positive_number("filename.max_length", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("token.env_file", ".env.notion").is_ok());
        assert!(validate_file_name("token.env_file", "config/.env.notion").is_err());
        assert!(validate_file_name("token.env_file", "..").is_err());
        assert!(validate_file_name("token.env_file", "").is_err());
    }

    #[test]
    fn test_validate_key_name() {
        assert!(validate_key_name("token.key", "NOTION_TOKEN").is_ok());
        assert!(validate_key_name("token.key", "NOTION TOKEN").is_err());
        assert!(validate_key_name("token.key", "NOTION=TOKEN").is_err());
    }
}

use crate::utils::error::{Result, ServiceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value must not contain line breaks".to_string(),
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
        return Err(ServiceError::InvalidConfigValueError {
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
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("idle_message", "waiting").is_ok());
        assert!(validate_non_empty_string("idle_message", "").is_err());
        assert!(validate_non_empty_string("idle_message", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("label", "Processed: ").is_ok());
        assert!(validate_single_line("label", "a\nb").is_err());
        assert!(validate_single_line("label", "a\r").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("buffer_capacity", 50usize, 1, 65536).is_ok());
        assert!(validate_range("buffer_capacity", 1usize, 1, 65536).is_ok());
        assert!(validate_range("buffer_capacity", 0usize, 1, 65536).is_err());
        assert!(validate_range("buffer_capacity", 65537usize, 1, 65536).is_err());
    }
}

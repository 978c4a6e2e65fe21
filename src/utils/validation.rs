use crate::utils::error::{GreeterError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects line breaks and other control characters.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|c| c.is_control()) {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: format!(
                "Value must be a single line without control characters (found {})",
                c.escape_default()
            ),
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
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_date_order(field_name: &str, from: NaiveDate, till: NaiveDate) -> Result<()> {
    if till < from {
        return Err(GreeterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: till.to_string(),
            reason: format!("Date must not be earlier than from_date ({})", from),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("greeting.name", "John Doe").is_ok());
        assert!(validate_non_empty_string("greeting.name", "").is_err());
        assert!(validate_non_empty_string("greeting.name", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("greeting.place", "New York").is_ok());
        assert!(validate_single_line("greeting.place", "").is_ok());
        assert!(validate_single_line("greeting.place", "São Paulo").is_ok());
        assert!(validate_single_line("greeting.place", "New\nYork").is_err());
        assert!(validate_single_line("greeting.place", "New\rYork").is_err());
        assert!(validate_single_line("greeting.place", "New\tYork").is_err());
        assert!(validate_single_line("greeting.place", "New\u{1b}[2JYork").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("greeting.age", 30, 0, 150).is_ok());
        assert!(validate_range("greeting.age", 0, 0, 150).is_ok());
        assert!(validate_range("greeting.age", -1, 0, 150).is_err());
        assert!(validate_range("greeting.age", 151, 0, 150).is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let jan8 = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(validate_date_order("greeting.till_date", jan1, jan8).is_ok());
        assert!(validate_date_order("greeting.till_date", jan1, jan1).is_ok());

        let err = validate_date_order("greeting.till_date", jan8, jan1).unwrap_err();
        match err {
            GreeterError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "greeting.till_date");
                assert_eq!(value, "2024-01-01");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date out of range: cannot go back {days} days from {date}")]
    DateOutOfRange { date: NaiveDate, days: u64 },
}

impl GreeterError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::IoError(_) => "Check that standard output is open and writable",
            GreeterError::ConfigError { .. } => "Make sure the config file exists and is readable",
            GreeterError::ConfigValidationError { .. } => {
                "Fix the TOML syntax and make sure every field has the expected type"
            }
            GreeterError::InvalidConfigValueError { .. } => {
                "Correct the value named above in the config file"
            }
            GreeterError::DateOutOfRange { .. } => "Use a smaller lookback or a later till_date",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::IoError(e) => format!("Could not write the greeting: {}", e),
            GreeterError::ConfigError { message } => format!("Could not load config: {}", message),
            GreeterError::ConfigValidationError { field, message } => {
                format!("Config file is invalid ({}): {}", field, message)
            }
            GreeterError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' = '{}' is not allowed: {}", field, value, reason),
            GreeterError::DateOutOfRange { date, days } => {
                format!("{} minus {} days is not a representable date", date, days)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;

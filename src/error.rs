//! Error types for `snapping-stepper`
//!
//! The value core itself never fails: out-of-range values and inverted bounds are
//! absorbed by the bounding policy. Errors only come from the surfaces around it
//! (configuration loading, demo scripts, logging setup).
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Main error type for the stepper crate
#[derive(Debug, Error)]
pub enum StepperError {
    /// Configuration could not be read or applied
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration parsed but holds values the controller cannot use
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A demo script line could not be parsed
    #[error("Script error on line {line}: {message}")]
    ScriptError {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Logging subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    LoggingError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for stepper operations
pub type Result<T> = std::result::Result<T, StepperError>;

/// Convert an error to a message suitable for printing to a user
pub fn get_user_friendly_error(error: &StepperError) -> String {
    match error {
        StepperError::ConfigError(e) => format!(
            "Failed to load the stepper configuration:\n\n{e}\n\n\
             Default settings will be used where possible."
        ),
        StepperError::InvalidConfig(reason) => format!(
            "The stepper configuration is not usable: {reason}\n\n\
             Bounds, step and value must be finite numbers and the step must not be negative."
        ),
        StepperError::IoError(e) => format!(
            "A file system error occurred:\n\n{e}\n\n\
             Please check the path and file permissions."
        ),
        StepperError::JsonError(e) => format!(
            "Configuration file is corrupted:\n\n{e}\n\n\
             Fix the JSON or remove the file to use default settings."
        ),
        StepperError::ScriptError { line, message } => {
            format!("Script line {line} could not be run: {message}")
        }
        StepperError::LoggingError(_) => "Logging could not be initialized.\n\n\
             The stepper will keep running without log output."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = StepperError::InvalidConfig("stepValue is NaN".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: stepValue is NaN");
    }

    #[test]
    fn test_script_error_display() {
        let error = StepperError::ScriptError {
            line: 3,
            message: "unknown command 'jump'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Script error on line 3: unknown command 'jump'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: StepperError = io_error.into();
        assert!(matches!(error, StepperError::IoError(_)));
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = StepperError::ConfigError(Box::new(io_error));
        assert_eq!(error.to_string(), "Configuration error: denied");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = StepperError::InvalidConfig("maximumValue is infinite".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("maximumValue is infinite"));
        assert!(message.contains("finite numbers"));

        let error = StepperError::ScriptError {
            line: 7,
            message: "expected a number".to_string(),
        };
        let message = get_user_friendly_error(&error);
        assert!(message.contains("line 7"));
    }
}

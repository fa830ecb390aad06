use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("input read failed: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("input read failed: end of input")]
    EndOfInput,

    #[error("output write failed: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,   // 重試錯誤
            ErrorSeverity::High => 1,     // 處理錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl AppError {
    /// True for the failures that end a guess loop: a closed stream or an I/O
    /// error while reading a line.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, AppError::InputRead(_) | AppError::EndOfInput)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InputRead(_) | AppError::EndOfInput => ErrorCategory::Input,
            AppError::Output(_) => ErrorCategory::Output,
            AppError::ConfigError { .. }
            | AppError::ConfigFileError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::EndOfInput => ErrorSeverity::Low,
            AppError::InputRead(_) => ErrorSeverity::Medium,
            AppError::ConfigError { .. }
            | AppError::ConfigFileError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AppError::Output(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for an error that reaches the top of the binary.
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::EndOfInput => "No more input was available.".to_string(),
            AppError::InputRead(e) => format!("Could not read from the console: {}", e),
            AppError::Output(e) => format!("Could not write to the console: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::ConfigFileError { path, .. } => {
                format!("Could not load the config file '{}'", path)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::EndOfInput => "Provide a line of input before closing the stream",
            AppError::InputRead(_) => "Check that standard input is readable and UTF-8 encoded",
            AppError::Output(_) => "Check that standard output is still open",
            AppError::ConfigError { .. } => "Make sure the file is valid TOML",
            AppError::ConfigFileError { .. } => "Check the --config path and file permissions",
            AppError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failures_are_flagged() {
        assert!(AppError::EndOfInput.is_read_failure());
        assert!(AppError::InputRead(std::io::Error::other("boom")).is_read_failure());
        assert!(!AppError::Output(std::io::Error::other("boom")).is_read_failure());
        assert!(!AppError::ConfigError {
            message: "bad".to_string()
        }
        .is_read_failure());
    }

    #[test]
    fn test_end_of_input_message() {
        assert_eq!(
            AppError::EndOfInput.to_string(),
            "input read failed: end of input"
        );
        assert_eq!(AppError::EndOfInput.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AppError::InvalidConfigValueError {
            field: "guess.target".to_string(),
            value: String::new(),
            reason: "Value cannot be empty".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("guess.target"));
    }

    #[test]
    fn test_severity_exit_codes() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_per_variant() {
        let io = || std::io::Error::other("boom");

        assert_eq!(AppError::EndOfInput.exit_code(), 0);
        assert_eq!(AppError::InputRead(io()).exit_code(), 2);
        assert_eq!(AppError::Output(io()).exit_code(), 3);
        assert_eq!(
            AppError::ConfigError {
                message: "bad".to_string()
            }
            .exit_code(),
            1
        );
        assert_eq!(
            AppError::ConfigFileError {
                path: "first-steps.toml".to_string(),
                source: io(),
            }
            .exit_code(),
            1
        );
        assert_eq!(
            AppError::InvalidConfigValueError {
                field: "guess.target".to_string(),
                value: String::new(),
                reason: "Value cannot be empty".to_string(),
            }
            .exit_code(),
            1
        );
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgFlagsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 設定或使用方式錯誤
    High,
    /// 讀寫失敗
    Critical,
}

impl PkgFlagsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PkgFlagsError::IoError(_) => ErrorCategory::Io,
            PkgFlagsError::SerializationError(_) => ErrorCategory::Serialization,
            PkgFlagsError::ConfigError { .. }
            | PkgFlagsError::ConfigValidationError { .. }
            | PkgFlagsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PkgFlagsError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PkgFlagsError::IoError(e) => format!("Could not read pkg-config output: {}", e),
            PkgFlagsError::SerializationError(e) => format!("Could not render output: {}", e),
            PkgFlagsError::ConfigError { message } => format!("Configuration problem: {}", message),
            PkgFlagsError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PkgFlagsError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            PkgFlagsError::ValidationError { message } => format!("Invalid request: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PkgFlagsError::IoError(_) => {
                "Check that the input file exists and is readable, or pipe pkg-config output into stdin"
            }
            PkgFlagsError::SerializationError(_) => "Try a different output format such as 'lines'",
            PkgFlagsError::ConfigError { .. } | PkgFlagsError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            PkgFlagsError::InvalidConfigValueError { .. } => {
                "Fix the value in the configuration file or on the command line"
            }
            PkgFlagsError::ValidationError { .. } => {
                "Pass at least one prefix, for example '--prefix I'"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PkgFlagsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = PkgFlagsError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unknown".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("xml"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: PkgFlagsError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}

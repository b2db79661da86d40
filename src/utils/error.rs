use thiserror::Error;

/// 遠端服務沒有提供錯誤描述時使用的訊息
pub const UNKNOWN_API_ERROR: &str = "An unknown error occurred with the Gemini API.";

#[derive(Error, Debug)]
pub enum CatalystError {
    #[error("Gemini API error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Gemini API error: {}", remote_message(.status, .message))]
    RemoteServiceError { status: u16, message: String },

    #[error("Gemini API error: the response contained no text")]
    EmptyResponse,

    #[error("Failed to parse AI response. Raw text: {raw}")]
    ResponseParseError { raw: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{message}")]
    ValidationError { message: String },
}

fn remote_message(status: &u16, message: &str) -> String {
    if message.trim().is_empty() {
        format!("{} (HTTP {})", UNKNOWN_API_ERROR, status)
    } else {
        format!("{} (HTTP {})", message, status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Response,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalystError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ApiError(_) | Self::RemoteServiceError { .. } => ErrorCategory::Network,
            Self::EmptyResponse | Self::ResponseParseError { .. } => ErrorCategory::Response,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Response => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否值得以相同輸入重試
    pub fn is_retryable(&self) -> bool {
        matches!(self.severity(), ErrorSeverity::Medium)
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ValidationError { .. } => "Fill in the required input and run the module again".to_string(),
            Self::ApiError(_) => "Check network connectivity and the configured endpoint, then retry".to_string(),
            Self::RemoteServiceError { status, .. } if *status == 401 || *status == 403 => {
                "Check that GEMINI_API_KEY holds a valid key".to_string()
            }
            Self::RemoteServiceError { status, .. } if *status == 429 => {
                "The service is rate limiting requests; wait a moment and retry".to_string()
            }
            Self::RemoteServiceError { .. } | Self::EmptyResponse => {
                "The generation service failed; retry with the same inputs".to_string()
            }
            Self::ResponseParseError { .. } => {
                "The model returned malformed JSON; retrying usually produces a valid reply".to_string()
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Fix the '{}' setting in the config file, flags or environment", field)
            }
            Self::CsvError(_) => "Check the sales ledger format".to_string(),
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => self.to_string(),
            ErrorCategory::Network => format!("Could not reach the AI service. {}", self),
            ErrorCategory::Response => format!("The AI service returned an unusable reply. {}", self),
            ErrorCategory::Configuration => format!("Configuration problem. {}", self),
            ErrorCategory::System => format!("Internal error. {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalystError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_without_message_uses_fallback() {
        let err = CatalystError::RemoteServiceError {
            status: 500,
            message: "  ".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains(UNKNOWN_API_ERROR));
        assert!(text.contains("500"));
    }

    #[test]
    fn test_remote_error_keeps_service_message() {
        let err = CatalystError::RemoteServiceError {
            status: 400,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error: API key not valid (HTTP 400)");
    }

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = CatalystError::validation("Please enter a question.");
        assert_eq!(err.to_string(), "Please enter a question.");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_parse_error_carries_raw_text() {
        let err = CatalystError::ResponseParseError {
            raw: "not json".to_string(),
        };
        assert!(err.to_string().contains("not json"));
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Response);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = CatalystError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("api_key"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    FetchStatus { status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Course not found in catalog: {course_number}")]
    CourseNotFound { course_number: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::FetchStatus { .. } => ErrorCategory::Network,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::InvalidArgument { .. } | Self::CourseNotFound { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether a fresh attempt at the same operation could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError(e) => e.is_timeout() || e.is_connect(),
            Self::FetchStatus { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::FetchStatus { .. } => {
                format!("Error loading courses: {}", self)
            }
            Self::SerializationError(_) => {
                "The course catalog could not be decoded as JSON".to_string()
            }
            Self::CsvError(_) => "Failed to write CSV output".to_string(),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => format!("Invalid configuration: {}", self),
            Self::InvalidArgument { .. } => format!("Rejected request: {}", self),
            Self::CourseNotFound { course_number } => {
                format!("No course numbered '{}' in the catalog", course_number)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Check that the catalog server is running and reachable".to_string()
            }
            Self::FetchStatus { status } if *status == 404 => {
                "Check the catalog URL (expected something like /api/courses.json)".to_string()
            }
            Self::FetchStatus { .. } => "Try again once the catalog server recovers".to_string(),
            Self::SerializationError(_) => {
                "Make sure the source returns a JSON array of course objects".to_string()
            }
            Self::CsvError(_) | Self::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and configuration file".to_string()
            }
            Self::InvalidArgument { .. } => "Provide a non-empty course number".to_string(),
            Self::CourseNotFound { .. } => {
                "Search the catalog for the exact course number first".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_status_message_matches_display_text() {
        let err = CatalogError::FetchStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(
            err.user_friendly_message(),
            "Error loading courses: HTTP error! status: 404"
        );
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(CatalogError::FetchStatus { status: 503 }.is_retryable());
        assert!(CatalogError::FetchStatus { status: 429 }.is_retryable());
    }

    #[test]
    fn test_invalid_argument_is_low_severity() {
        let err = CatalogError::invalid_argument("course_number", "must not be blank");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.to_string().contains("course_number"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = CatalogError::InvalidConfigValueError {
            field: "page_size".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}

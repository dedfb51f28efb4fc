use super::types::SizeLimitError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl SizeLimitError {
    /// Classify this error to pick the process exit code.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            SizeLimitError::LimitExceeded(_) => ErrorClassification {
                error_type: "LimitExceededError",
                exit_code: 1,
            },
            SizeLimitError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            SizeLimitError::Parse(_) => ErrorClassification {
                error_type: "ParseError",
                exit_code: 3,
            },
            SizeLimitError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 4,
            },
            SizeLimitError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 4,
            },
            SizeLimitError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 4,
            },
        }
    }
}

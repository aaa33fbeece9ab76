use thiserror::Error;

/// 伺服器未提供 `message` 時使用的錯誤訊息
pub const FALLBACK_MESSAGE: &str = "Request failed";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    #[error("Network error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Invalid JSON response (HTTP {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    /// 回應的 HTTP 狀態碼（若有）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } | ApiError::InvalidBody { status, .. } => {
                Some(*status)
            }
            ApiError::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ApiError::ConfigValidationError { .. } | ApiError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_displays_message_only() {
        let err = ApiError::RequestFailed {
            status: 400,
            message: "Donor already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Donor already exists");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_invalid_body_keeps_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ApiError::InvalidBody { status: 502, source };
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().starts_with("Invalid JSON response (HTTP 502)"));
    }

    #[test]
    fn test_config_errors_are_classified() {
        let err = ApiError::ConfigValidationError {
            field: "server.base_url".to_string(),
            message: "missing".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(err.status(), None);
    }
}

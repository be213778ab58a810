//! API Errors

/// Transport and decode failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Status { code: u16, text: String },
    Decode(String),
    Encode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { code, text } => write!(f, "HTTP {}: {}", code, text),
            ApiError::Decode(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Encode(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Status { code: 422, text: "Unprocessable Entity".to_string() };
        assert_eq!(err.to_string(), "HTTP 422: Unprocessable Entity");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API key or unauthorized access")]
    Authentication,

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API returned error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match status.as_u16() {
            401 => ApiError::Authentication,
            code => ApiError::Http {
                status: code,
                body: Self::truncate_body(body),
            },
        }
    }

    /// True for the 401 case, which callers usually want to handle separately
    /// (prompt for a new key rather than retry).
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication)
    }

    /// The envelope error code, if this error came from a non-zero `err`.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            ApiError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "nope");
        assert!(err.is_authentication());
    }

    #[test]
    fn test_other_statuses_keep_code_and_body() {
        for status in [StatusCode::FORBIDDEN, StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            let err = ApiError::from_status(status, "body text");
            assert!(!err.is_authentication());
            match err {
                ApiError::Http { status: code, body } => {
                    assert_eq!(code, status.as_u16());
                    assert_eq!(body, "body text");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 100);
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, &body);
        let ApiError::Http { body, .. } = err else {
            panic!("expected Http error");
        };
        assert!(body.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(body.ends_with("(truncated, 600 total bytes)"));
    }

    #[test]
    fn test_api_error_message_carries_code_and_text() {
        let err = ApiError::Api {
            code: 5,
            message: "bad project".to_string(),
        };
        assert_eq!(err.api_code(), Some(5));
        assert_eq!(err.to_string(), "API returned error 5: bad project");
    }
}

//! Error type shared by every call that goes through [`crate::ApiClient`].

use thiserror::Error;

/// Failure of a single REST call.
///
/// Views never show these verbatim: they go through [`ApiError::user_message`],
/// which prefers the server-supplied message and falls back to a caller-chosen
/// string otherwise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset...).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("server returned {status}{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        /// Message extracted from the response body, if the body carried one.
        message: Option<String>,
        body: String,
    },

    /// The body could not be decoded into the expected type.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The owning view was torn down before the response arrived.
    #[error("request cancelled")]
    Cancelled,

    /// The request could not be built (bad header, bad MIME type...).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = extract_message(&body);
        ApiError::Status {
            status,
            message,
            body,
        }
    }

    /// The server-supplied message, or `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a read may be re-issued after this failure.
    ///
    /// Transport failures and 5xx responses are retryable. Client errors,
    /// decode errors and cancellation are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message`, `detail` and `error` in that order, then at the first
/// entry of `non_field_errors`, then at the first string of any field-level
/// error list (`{"username": ["already taken"]}`).
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["message", "detail", "error"] {
        if let Some(text) = object.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }

    let first_of = |v: &serde_json::Value| -> Option<String> {
        v.as_array()?.first()?.as_str().map(str::to_string)
    };

    if let Some(text) = object.get("non_field_errors").and_then(first_of) {
        return Some(text);
    }

    object.values().find_map(first_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_field() {
        let err = ApiError::from_status(400, r#"{"message":"Invalid credentials"}"#.into());
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_extracts_detail_and_field_errors() {
        assert_eq!(
            extract_message(r#"{"detail":"Not found."}"#).as_deref(),
            Some("Not found.")
        );
        assert_eq!(
            extract_message(r#"{"username":["A user with that username already exists."]}"#)
                .as_deref(),
            Some("A user with that username already exists.")
        );
        assert_eq!(
            extract_message(r#"{"non_field_errors":["Bad pair"],"x":["other"]}"#).as_deref(),
            Some("Bad pair")
        );
    }

    #[test]
    fn test_falls_back_when_body_has_no_message() {
        let err = ApiError::from_status(500, "<html>oops</html>".into());
        assert_eq!(err.user_message("Failed to fetch fields"), "Failed to fetch fields");

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ApiError::Transport("reset".into()).is_retryable());
        assert!(ApiError::from_status(503, String::new()).is_retryable());
        assert!(!ApiError::from_status(404, String::new()).is_retryable());
        assert!(!ApiError::Cancelled.is_retryable());
    }

    #[test]
    fn test_display_includes_message() {
        let err = ApiError::from_status(409, r#"{"error":"duplicate"}"#.into());
        assert_eq!(err.to_string(), "server returned 409: duplicate");
    }
}

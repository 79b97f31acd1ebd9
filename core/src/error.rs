//! Error types for the user-directory API client.
//!
//! # Design
//! Every non-2xx response collapses into the single `Http` variant, which
//! keeps the original status and status text and picks up the server's
//! `error`/`detail` fields when the body carries them. Callers that care
//! about a specific outcome (say, 404) match on the status instead of a
//! dedicated variant. Local and transport failures get their own variants
//! so they cannot be confused with a server verdict.

use std::fmt;

use serde::Deserialize;

use crate::http::HttpResponse;

/// Errors returned by the client.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http {
        status: u16,
        status_text: String,
        error: Option<String>,
        detail: Option<String>,
    },

    /// An update with no fields set, rejected before any network call.
    EmptyUpdate,

    /// The request never completed: DNS, connect, or read failure.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),
}

/// The error shape the server attaches to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

impl ApiError {
    /// Normalize a non-2xx response into `Http`, sniffing `error` and
    /// `detail` out of the body when it parses as the server error shape.
    pub fn from_response(response: &HttpResponse) -> Self {
        let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
        ApiError::Http {
            status: response.status,
            status_text: response.status_text.clone(),
            error: body.error,
            detail: body.detail,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http {
                status,
                status_text,
                error,
                detail,
            } => {
                write!(
                    f,
                    "[{status} {status_text}] {}",
                    error.as_deref().unwrap_or("Unknown Error")
                )?;
                if let Some(detail) = detail {
                    write!(f, " ({detail})")?;
                }
                Ok(())
            }
            ApiError::EmptyUpdate => {
                write!(
                    f,
                    "at least one field (name, email, or role) must be provided for update"
                )
            }
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn from_response_picks_up_error_and_detail() {
        let err = ApiError::from_response(&response(
            404,
            "Not Found",
            r#"{"error":"Not found","detail":"no user with id 7"}"#,
        ));
        match err {
            ApiError::Http {
                status,
                status_text,
                error,
                detail,
            } => {
                assert_eq!(status, 404);
                assert_eq!(status_text, "Not Found");
                assert_eq!(error.as_deref(), Some("Not found"));
                assert_eq!(detail.as_deref(), Some("no user with id 7"));
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn from_response_tolerates_unparseable_body() {
        let err = ApiError::from_response(&response(502, "Bad Gateway", "<html>oops</html>"));
        match err {
            ApiError::Http { error, detail, .. } => {
                assert!(error.is_none());
                assert!(detail.is_none());
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn display_mirrors_status_and_server_message() {
        let err = ApiError::from_response(&response(
            404,
            "Not Found",
            r#"{"error":"Not found","detail":"no user with id 7"}"#,
        ));
        assert_eq!(
            err.to_string(),
            "[404 Not Found] Not found (no user with id 7)"
        );
    }

    #[test]
    fn display_falls_back_when_server_gave_no_message() {
        let err = ApiError::from_response(&response(500, "Internal Server Error", ""));
        assert_eq!(err.to_string(), "[500 Internal Server Error] Unknown Error");
    }
}

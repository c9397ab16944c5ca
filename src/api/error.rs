//! Wire error taxonomy.

use reqwest::StatusCode;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Field-level messages from the controller, one `field: message` per line.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },

    /// Any other non-success status.
    #[error("{status}: {message}")]
    Unexpected { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to decode controller response: {0}")]
    Decode(String),

    /// The controller speaks a different API version. Soft: callers warn and continue.
    #[error("client API version {client} does not match server API version {server}")]
    ApiMismatch { client: String, server: String },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Conflict(_) => Some(StatusCode::CONFLICT),
            Self::Validation(_) => Some(StatusCode::UNPROCESSABLE_ENTITY),
            Self::Server { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::ApiMismatch { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Map a non-success status and its body to an error kind.
pub(crate) fn from_status(status: StatusCode, body: &[u8]) -> ApiError {
    let lines = body_messages(body);
    let message = if lines.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        lines.join("\n")
    };

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            if lines.is_empty() {
                ApiError::Validation(vec![message])
            } else {
                ApiError::Validation(lines)
            }
        }
        s if s.is_server_error() => ApiError::Server { status, message },
        _ => ApiError::Unexpected { status, message },
    }
}

/// Flatten a controller error body.
///
/// `{"detail": "..."}` yields the detail; `{"field": ["a", "b"]}` yields
/// `field: a` and `field: b`; anything else is returned as trimmed text.
pub(crate) fn body_messages(body: &[u8]) -> Vec<String> {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        let text = String::from_utf8_lossy(body).trim().to_string();
        return if text.is_empty() { Vec::new() } else { vec![text] };
    };

    match value {
        serde_json::Value::Object(map) => {
            if let Some(detail) = map.get("detail").and_then(|v| v.as_str()) {
                return vec![detail.to_string()];
            }
            let mut out = Vec::new();
            for (field, v) in map {
                match v {
                    serde_json::Value::Array(items) => {
                        for item in items {
                            out.push(format!("{}: {}", field, plain(&item)));
                        }
                    }
                    other => out.push(format!("{}: {}", field, plain(&other))),
                }
            }
            out
        }
        serde_json::Value::Array(items) => items.iter().map(plain).collect(),
        other => vec![plain(&other)],
    }
}

fn plain(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/api/error_tests.rs"]
mod tests;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::render::html::escape;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The remote API could not be reached or the connection broke mid-request.
    Transport(String),
    /// The remote API answered with a non-success status.
    UpstreamStatus { status: u16, message: String },
    NotFound(String),
    /// The remote API answered with a body that is not the expected JSON shape.
    Decode(String),
    BadRequest(String),
    Configuration(String),
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Decode(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures that came from talking to the remote API.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_)
                | AppError::UpstreamStatus { .. }
                | AppError::NotFound(_)
                | AppError::Decode(_)
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(msg) => write!(f, "Network error: {}", msg),
            AppError::UpstreamStatus { status, message } => {
                write!(f, "API responded with status {}: {}", status, message)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Decode(msg) => write!(f, "Malformed API response: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Configuration(msg) | AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>AnimalDex - {code}</title>\
             <link rel=\"stylesheet\" href=\"/static/app.css\"></head>\
             <body class=\"error-page\"><main class=\"centered\"><h1>{code}</h1><p class=\"text-red\">{message}</p>\
             <a class=\"button\" href=\"/\">Back to Home</a></main></body></html>",
            code = status.as_u16(),
            message = escape(&message),
        );

        (status, Html(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::UpstreamStatus {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

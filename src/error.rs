use std::collections::BTreeMap;

use reqwest::{Response, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Failure of a call made through the request pipeline.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or client-side failure; no response was received.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status {
        status: StatusCode,
        message: Option<String>,
        body: Option<Value>,
    },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Reads a non-success response into `ApiError::Status`.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
            Err(e) => {
                tracing::debug!("Failed to read error body for {}: {}", status, e);
                None
            }
        };
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);

        ApiError::Status {
            status,
            message,
            body,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            ApiError::Decode(_) => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Field-level errors from a validation failure body (`{"errors": {"field": ["..."]}}`).
    pub fn validation_errors(&self) -> Option<BTreeMap<String, Vec<String>>> {
        match self {
            ApiError::Status {
                body: Some(body), ..
            } => body
                .get("errors")
                .and_then(|errors| serde_json::from_value(errors.clone()).ok()),
            _ => None,
        }
    }
}

/// Failed credential exchange. The session is left as it was.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct LoginError {
    pub reason: String,
    #[source]
    pub source: ApiError,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Failure while wiring the application together.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to open session store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

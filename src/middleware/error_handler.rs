use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Request;

use super::{InterceptResult, Interceptor, Next};
use crate::error::ApiError;
use crate::navigation::{FORBIDDEN_ROUTE, Navigator, Redirect};
use crate::notification::{Notification, Notifier};

/// User-facing outcome of a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub message: String,
    /// False when another layer owns the message (401, 422).
    pub notify: bool,
    pub redirect: Option<Redirect>,
}

impl Classification {
    fn shown(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            notify: true,
            redirect: None,
        }
    }

    fn silent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            notify: false,
            redirect: None,
        }
    }
}

/// Maps a failure to its message and side effects. Pure.
pub fn classify(error: &ApiError) -> Classification {
    let status = match error {
        ApiError::Status { status, .. } => *status,
        other => return Classification::shown(format!("Error: {}", other)),
    };
    let server = error.server_message();

    match status.as_u16() {
        400 => Classification::shown(server.unwrap_or("Bad Request")),
        401 => Classification::silent("Unauthorized. Please login again."),
        403 => Classification {
            message: "You do not have permission to perform this action.".into(),
            notify: true,
            redirect: Some(Redirect::to(FORBIDDEN_ROUTE)),
        },
        404 => Classification::shown(server.unwrap_or("Resource not found")),
        422 => Classification::silent(server.unwrap_or("Validation failed")),
        500 => Classification::shown("Internal server error. Please try again later."),
        503 => Classification::shown("Service unavailable. Please try again later."),
        code => match server {
            Some(message) => Classification::shown(message),
            None => Classification::shown(format!("Error: {}", code)),
        },
    }
}

/// Turns failed responses into `ApiError`s, tells the user, and passes the
/// error on unchanged.
pub struct ErrorClassifier {
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    quiet_paths: Vec<String>,
}

impl ErrorClassifier {
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            notifier,
            navigator,
            quiet_paths: Vec::new(),
        }
    }

    /// Failures on paths containing `path` get no user-facing side effects.
    pub fn quiet_path(mut self, path: &str) -> Self {
        self.quiet_paths.push(path.to_string());
        self
    }

    fn is_quiet(&self, path: &str) -> bool {
        self.quiet_paths.iter().any(|p| path.contains(p.as_str()))
    }

    fn report(&self, path: &str, error: &ApiError) {
        if let Some(status) = error.status() {
            if status.is_server_error() {
                tracing::error!("Server error occurred - Path: {}, Error: {}", path, error);
            } else {
                tracing::debug!("Request to {} failed: {}", path, error);
            }
        } else {
            tracing::warn!("Request to {} failed: {}", path, error);
        }

        if self.is_quiet(path) {
            return;
        }

        let classification = classify(error);
        if classification.notify {
            self.notifier.notify(Notification::error(classification.message));
        }
        if let Some(redirect) = &classification.redirect {
            self.navigator.navigate(redirect);
        }
    }
}

#[async_trait]
impl Interceptor for ErrorClassifier {
    async fn intercept(&self, request: Request, next: Next<'_>) -> InterceptResult {
        let path = request.url().path().to_string();

        let error = match next.run(request).await {
            Ok(response) if response.status().is_success() => return Ok(response),
            Ok(response) => ApiError::from_response(response).await,
            Err(e) => e,
        };

        self.report(&path, &error);
        Err(error)
    }

    fn on_failure(&self, path: &str, error: &ApiError) {
        self.report(path, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn status(code: u16, message: Option<&str>) -> ApiError {
        ApiError::Status {
            status: StatusCode::from_u16(code).unwrap(),
            message: message.map(str::to_string),
            body: message.map(|m| json!({ "message": m })),
        }
    }

    #[test]
    fn unauthorized_is_never_shown() {
        let c = classify(&status(401, Some("token expired")));
        assert_eq!(c.message, "Unauthorized. Please login again.");
        assert!(!c.notify);
        assert!(c.redirect.is_none());
    }

    #[test]
    fn forbidden_is_shown_and_redirects() {
        let c = classify(&status(403, Some("nope")));
        assert_eq!(c.message, "You do not have permission to perform this action.");
        assert!(c.notify);
        assert_eq!(c.redirect, Some(Redirect::to("/forbidden")));
    }

    #[test]
    fn validation_failure_is_left_to_the_caller() {
        let c = classify(&status(422, Some("Email already used")));
        assert_eq!(c.message, "Email already used");
        assert!(!c.notify);

        assert_eq!(classify(&status(422, None)).message, "Validation failed");
    }

    #[test]
    fn server_message_or_default() {
        assert_eq!(classify(&status(400, Some("Bad date"))).message, "Bad date");
        assert_eq!(classify(&status(400, None)).message, "Bad Request");
        assert_eq!(classify(&status(404, None)).message, "Resource not found");
        assert_eq!(
            classify(&status(409, Some("Duplicate roll number"))).message,
            "Duplicate roll number"
        );
        assert_eq!(classify(&status(418, None)).message, "Error: 418");
    }

    #[test]
    fn server_failures_ignore_server_message() {
        let c = classify(&status(500, Some("NullReferenceException")));
        assert_eq!(c.message, "Internal server error. Please try again later.");
        assert!(c.notify);

        let c = classify(&status(503, None));
        assert_eq!(c.message, "Service unavailable. Please try again later.");
    }

    #[test]
    fn non_status_errors_are_prefixed() {
        let decode = serde_json::from_str::<u32>("x").unwrap_err();
        let c = classify(&ApiError::Decode(decode));
        assert!(c.message.starts_with("Error: "));
        assert!(c.notify);
    }
}

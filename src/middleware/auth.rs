use std::sync::{Arc, Weak};

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Request, StatusCode};

use super::{InterceptResult, Interceptor, Next};
use crate::session::Session;

/// Paths that must work without (and never carry) a bearer token.
const PUBLIC_AUTH_PATHS: [&str; 2] = ["/auth/login", "/auth/register"];

pub fn is_public_auth_path(path: &str) -> bool {
    PUBLIC_AUTH_PATHS.iter().any(|p| path.contains(p))
}

/// Reacts to the server rejecting the session's credentials.
#[async_trait]
pub trait SessionInvalidator: Send + Sync {
    async fn invalidate(&self);
}

/// Attaches the session's bearer token and invalidates the session on 401.
pub struct CredentialInterceptor {
    session: Arc<Session>,
    invalidator: Weak<dyn SessionInvalidator>,
}

impl CredentialInterceptor {
    pub fn new(session: Arc<Session>, invalidator: Weak<dyn SessionInvalidator>) -> Self {
        Self {
            session,
            invalidator,
        }
    }
}

#[async_trait]
impl Interceptor for CredentialInterceptor {
    async fn intercept(&self, mut request: Request, next: Next<'_>) -> InterceptResult {
        if is_public_auth_path(request.url().path()) {
            return next.run(request).await;
        }

        if let Some(token) = self.session.access_token().await {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    request.headers_mut().insert(AUTHORIZATION, value);
                }
                Err(_) => tracing::warn!("Stored access token is not a valid header value"),
            }
        }

        let result = next.run(request).await;

        let unauthorized = match &result {
            Ok(response) => response.status() == StatusCode::UNAUTHORIZED,
            Err(e) => e.status() == Some(StatusCode::UNAUTHORIZED),
        };
        if unauthorized {
            tracing::info!("Credentials rejected, ending session");
            if let Some(invalidator) = self.invalidator.upgrade() {
                invalidator.invalidate().await;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_register_are_public() {
        assert!(is_public_auth_path("/api/auth/login"));
        assert!(is_public_auth_path("/api/auth/register"));
        assert!(!is_public_auth_path("/api/auth/logout"));
        assert!(!is_public_auth_path("/api/students"));
    }
}

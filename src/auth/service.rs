use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::model::{
    ChangePasswordRequest, LoginRequest, LoginResponse, LogoutRequest, ResetPasswordRequest,
};
use super::{CHANGE_PASSWORD_PATH, LOGIN_PATH, LOGOUT_PATH, RESET_PASSWORD_PATH};
use crate::api::ApiClient;
use crate::error::{ApiError, LoginError};
use crate::loading::LoadingTracker;
use crate::middleware::SessionInvalidator;
use crate::navigation::{DASHBOARD_ROUTE, LOGIN_ROUTE, Navigator, Redirect};
use crate::session::{Session, User};

const LOGIN_FAILED: &str = "Login failed";

/// Holds the in-flight logout flag; releases it even when the logout future
/// is dropped half way.
struct LogoutInFlight<'a>(&'a AtomicBool);

impl Drop for LogoutInFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Login/logout round trips; the only writer of the session besides forced
/// invalidation.
pub struct AuthService {
    api: ApiClient,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
    loading: LoadingTracker,
    last_error: RwLock<Option<String>>,
    logging_out: AtomicBool,
}

impl AuthService {
    pub fn new(
        api: ApiClient,
        session: Arc<Session>,
        navigator: Arc<dyn Navigator>,
        loading: LoadingTracker,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            loading,
            last_error: RwLock::new(None),
            logging_out: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Reason of the most recent failed login, cleared when a new one starts.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    /// Exchanges credentials for a session. On failure the session is left
    /// untouched and nothing is retried.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let _loading = self.loading.track();
        *self.last_error.write() = None;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.post::<_, LoginResponse>(LOGIN_PATH, &request).await {
            Ok(response) => {
                let user = User::from(response);
                self.session.establish(user.clone()).await;
                tracing::info!("Logged in as {}", user.email);

                self.navigator.navigate(&Redirect::to(DASHBOARD_ROUTE));
                Ok(user)
            }
            Err(source) => {
                let reason = source.server_message().unwrap_or(LOGIN_FAILED).to_string();
                tracing::info!("Login for {} failed: {}", email, reason);
                *self.last_error.write() = Some(reason.clone());

                Err(LoginError { reason, source })
            }
        }
    }

    /// Ends the session. The server is told on a best-effort basis; the local
    /// session is cleared whatever happens there.
    pub async fn logout(&self) {
        if self.logging_out.swap(true, Ordering::AcqRel) {
            // a logout is already in flight (possibly this request's own 401)
            self.session.clear().await;
            return;
        }
        let in_flight = LogoutInFlight(&self.logging_out);

        if let Some(refresh_token) = self.session.refresh_token() {
            let request = LogoutRequest {
                refresh_token: Some(refresh_token),
            };
            if let Err(e) = self.api.post::<_, ()>(LOGOUT_PATH, &request).await {
                tracing::warn!("Logout notification failed: {}", e);
            }
        }

        if self.session.clear().await {
            tracing::info!("Logged out");
        }
        drop(in_flight);

        self.navigator.navigate(&Redirect::to(LOGIN_ROUTE));
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.api.post(CHANGE_PASSWORD_PATH, request).await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.api.post(RESET_PASSWORD_PATH, request).await
    }
}

#[async_trait]
impl SessionInvalidator for AuthService {
    async fn invalidate(&self) {
        self.logout().await;
    }
}

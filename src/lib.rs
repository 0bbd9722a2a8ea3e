use std::sync::{Arc, Weak};

use config::Config;
use error::SetupError;
use store::SessionStore;

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod loading;
pub mod middleware;
pub mod navigation;
pub mod notification;
pub mod resources;
pub mod session;
pub mod store;
pub mod utils;

use api::ApiClient;
use auth::AuthService;
use loading::LoadingTracker;
use middleware::{CredentialInterceptor, ErrorClassifier, Pipeline, SessionInvalidator};
use navigation::{Navigator, TracingNavigator};
use notification::{Notifier, TracingNotifier};
use resources::{
    ClassService, ExamService, PromotionService, StaffService, StudentService, SubjectService,
    TimetableService,
};
use session::Session;

/// Everything a host program needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: Arc<Session>,
    pub auth: Arc<AuthService>,
    pub api: ApiClient,
    pub loading: LoadingTracker,
}

impl AppState {
    /// Restores the session from `store` and builds the request pipeline:
    /// credentials first, then error classification.
    pub async fn connect(
        config: Config,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, reqwest::Error> {
        let mut client = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            client = client.timeout(timeout);
        }
        let client = client.build()?;

        let session = Arc::new(Session::restore(store).await);
        let loading = LoadingTracker::new();

        // the credential stage needs the auth service, which needs the client
        let auth = Arc::new_cyclic(|weak: &Weak<AuthService>| {
            let invalidator: Weak<dyn SessionInvalidator> = weak.clone();
            let pipeline = Pipeline::builder(client)
                .with(CredentialInterceptor::new(session.clone(), invalidator))
                .with(
                    ErrorClassifier::new(notifier, navigator.clone())
                        .quiet_path(&format!("/{}", auth::LOGOUT_PATH)),
                )
                .build();
            let api = ApiClient::new(&config.api_url, pipeline);

            AuthService::new(api, session.clone(), navigator, loading.clone())
        });

        tracing::info!(
            "{} {} using API at {}",
            config.app_name,
            config.app_version,
            config.api_url
        );

        Ok(AppState {
            api: auth.api().clone(),
            config,
            session,
            auth,
            loading,
        })
    }

    /// `connect` with the configured session store and log-only collaborators.
    pub async fn from_config(config: Config) -> Result<Self, SetupError> {
        let store = store::open_store(&config.session_backend)?;
        let state = Self::connect(
            config,
            store,
            Arc::new(TracingNotifier),
            Arc::new(TracingNavigator),
        )
        .await?;
        Ok(state)
    }

    pub fn students(&self) -> StudentService {
        StudentService::new(self.api.clone())
    }

    pub fn staff(&self) -> StaffService {
        StaffService::new(self.api.clone())
    }

    pub fn classes(&self) -> ClassService {
        ClassService::new(self.api.clone())
    }

    pub fn subjects(&self) -> SubjectService {
        SubjectService::new(self.api.clone())
    }

    pub fn exams(&self) -> ExamService {
        ExamService::new(self.api.clone())
    }

    pub fn timetable(&self) -> TimetableService {
        TimetableService::new(self.api.clone())
    }

    pub fn promotions(&self) -> PromotionService {
        PromotionService::new(self.api.clone())
    }
}

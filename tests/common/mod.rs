//! Common test utilities: an in-process mock of the school API and
//! recording collaborators.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;
use serde_json::{Value, json};

use school_admin::AppState;
use school_admin::config::Config;
use school_admin::navigation::{Navigator, Redirect};
use school_admin::notification::{Notification, Notifier};
use school_admin::store::{MemorySessionStore, SessionStore};

/// One request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct Scripted {
    status: u16,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<HashMap<(String, String), Scripted>>>,
}

pub struct MockApi {
    pub base_url: String,
    state: MockState,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    /// Scripts the answer for `method` on `/api/{endpoint}`.
    pub fn respond(&self, method: &str, endpoint: &str, status: u16, body: Value) {
        self.script(method, endpoint, status, Some(body));
    }

    /// Scripts an empty-bodied answer.
    pub fn respond_empty(&self, method: &str, endpoint: &str, status: u16) {
        self.script(method, endpoint, status, None);
    }

    fn script(&self, method: &str, endpoint: &str, status: u16, body: Option<Value>) {
        self.state.responses.lock().insert(
            (method.to_string(), format!("/api/{}", endpoint)),
            Scripted { status, body },
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().clone()
    }

    pub fn requests_to(&self, endpoint: &str) -> Vec<Recorded> {
        let path = format!("/api/{}", endpoint);
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    pub fn config(&self) -> Config {
        Config::for_api(&self.base_url)
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    let key = (recorded.method.clone(), recorded.path.clone());
    state.requests.lock().push(recorded);

    let scripted = state.responses.lock().get(&key).cloned();
    match scripted {
        Some(Scripted { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap();
            match body {
                Some(body) => (status, axum::Json(body)).into_response(),
                None => status.into_response(),
            }
        }
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "message": "Not found" })),
        )
            .into_response(),
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    seen: Mutex<Vec<Redirect>>,
}

impl RecordingNavigator {
    pub fn seen(&self) -> Vec<Redirect> {
        self.seen.lock().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.seen.lock().iter().map(|r| r.path.clone()).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &Redirect) {
        self.seen.lock().push(target.clone());
    }
}

pub struct Harness {
    pub state: AppState,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

pub async fn connect(mock: &MockApi, store: Arc<dyn SessionStore>) -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let state = AppState::connect(mock.config(), store, notifier.clone(), navigator.clone())
        .await
        .unwrap();

    Harness {
        state,
        notifier,
        navigator,
    }
}

pub async fn connect_fresh(mock: &MockApi) -> Harness {
    connect(mock, Arc::new(MemorySessionStore::new())).await
}

pub fn login_body(email: &str, roles: &[&str]) -> Value {
    json!({
        "token": "access-1",
        "refreshToken": "refresh-1",
        "expiresAt": "2026-10-18T08:00:00Z",
        "email": email,
        "userType": "Admin",
        "roles": roles,
    })
}

pub fn student_body(id: &str) -> Value {
    json!({
        "id": id,
        "firstName": "Ravi",
        "lastName": "Kumar",
        "dateOfBirth": "2013-04-02",
        "gender": 0,
        "email": "ravi@school.example.com",
        "phone": "555-0142",
        "address": "12 Hill Road",
        "rollNumber": "7B-14",
        "admissionId": "ADM-2025-014",
        "admissionDate": "2025-06-01",
        "isActive": true,
        "classSectionId": "6f1c2f4e-93b4-4c40-9f67-1b2b7e1c0a11",
        "classSectionName": "Grade 7 - B",
        "guardians": [],
        "documents": []
    })
}

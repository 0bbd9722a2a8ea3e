mod common;

use std::sync::Arc;

use common::{MockApi, connect, connect_fresh, login_body};
use futures_util::FutureExt;
use futures_util::future::join_all;
use serde_json::json;

use school_admin::session::roles;
use school_admin::store::{FileSessionStore, MemorySessionStore};

#[tokio::test]
async fn login_establishes_session_and_goes_to_dashboard() {
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("a@b.com", &["Admin"]));
    let h = connect_fresh(&mock).await;

    let user = h.state.auth.login("a@b.com", "secret").await.unwrap();

    assert_eq!(user.email, "a@b.com");
    assert!(h.state.session.is_authenticated());
    assert!(h.state.session.has_any_role(&[roles::ADMIN, roles::TEACHER]));
    assert!(!h.state.session.has_any_role(&[roles::STUDENT]));
    assert_eq!(h.navigator.paths(), vec!["/dashboard"]);
    assert!(!h.state.auth.is_loading());

    let sent = mock.requests_to("auth/login");
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        Some(json!({ "email": "a@b.com", "password": "secret" }))
    );
}

#[tokio::test]
async fn failed_login_reports_server_reason_and_keeps_anonymous() {
    let mock = MockApi::start().await;
    mock.respond(
        "POST",
        "auth/login",
        401,
        json!({ "message": "Invalid email or password" }),
    );
    let h = connect_fresh(&mock).await;

    let err = h.state.auth.login("a@b.com", "wrong").await.unwrap_err();

    assert_eq!(err.reason, "Invalid email or password");
    assert_eq!(h.state.auth.last_error().as_deref(), Some("Invalid email or password"));
    assert!(!h.state.session.is_authenticated());
    assert!(h.notifier.seen().is_empty());
    assert!(h.navigator.seen().is_empty());
    // no retry
    assert_eq!(mock.requests_to("auth/login").len(), 1);
}

#[tokio::test]
async fn failed_login_without_message_uses_generic_reason() {
    let mock = MockApi::start().await;
    mock.respond_empty("POST", "auth/login", 502);
    let h = connect_fresh(&mock).await;

    let err = h.state.auth.login("a@b.com", "secret").await.unwrap_err();

    assert_eq!(err.reason, "Login failed");
    assert!(!h.state.session.is_authenticated());
    assert!(!h.state.auth.is_loading());
}

#[tokio::test]
async fn logout_tells_server_once_and_clears() {
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("a@b.com", &["Admin"]));
    mock.respond_empty("POST", "auth/logout", 200);
    let store = Arc::new(MemorySessionStore::new());
    let h = connect(&mock, store.clone()).await;
    h.state.auth.login("a@b.com", "secret").await.unwrap();

    h.state.auth.logout().await;
    h.state.auth.logout().await;

    let sent = mock.requests_to("auth/logout");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, Some(json!({ "refreshToken": "refresh-1" })));
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer access-1"));

    assert!(!h.state.session.is_authenticated());
    assert!(store.is_empty());
    assert_eq!(h.navigator.paths(), vec!["/dashboard", "/login", "/login"]);
}

#[tokio::test]
async fn concurrent_logouts_make_one_server_call() {
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("a@b.com", &["Teacher"]));
    mock.respond_empty("POST", "auth/logout", 204);
    let h = connect_fresh(&mock).await;
    h.state.auth.login("a@b.com", "secret").await.unwrap();

    join_all((0..4).map(|_| h.state.auth.logout())).await;

    assert_eq!(mock.requests_to("auth/logout").len(), 1);
    assert!(!h.state.session.is_authenticated());
    assert!(h.state.session.refresh_token().is_none());
}

#[tokio::test]
async fn failed_server_logout_is_swallowed() {
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("a@b.com", &["Admin"]));
    mock.respond("POST", "auth/logout", 500, json!({ "message": "boom" }));
    let h = connect_fresh(&mock).await;
    h.state.auth.login("a@b.com", "secret").await.unwrap();

    h.state.auth.logout().await;

    assert!(!h.state.session.is_authenticated());
    assert!(h.notifier.seen().is_empty());
    assert_eq!(h.navigator.paths().last().map(String::as_str), Some("/login"));
}

#[tokio::test]
async fn anonymous_logout_skips_the_server() {
    let mock = MockApi::start().await;
    let h = connect_fresh(&mock).await;

    h.state.auth.logout().await;

    assert!(mock.requests().is_empty());
    assert_eq!(h.navigator.paths(), vec!["/login"]);
}

#[tokio::test]
async fn session_survives_restart() {
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("a@b.com", &["Admin"]));
    mock.respond("GET", "classes", 200, json!([]));
    let store = Arc::new(MemorySessionStore::new());

    let first = connect(&mock, store.clone()).await;
    let user = first.state.auth.login("a@b.com", "secret").await.unwrap();
    drop(first);

    let second = connect(&mock, store).await;
    assert!(second.state.session.is_authenticated());
    assert_eq!(second.state.session.current_user(), Some(user));

    second.state.classes().list_classes().await.unwrap();
    let sent = mock.requests_to("classes");
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer access-1"));
}

#[tokio::test]
async fn session_survives_restart_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("t@school.test", &["Teacher"]));

    let first = connect(&mock, Arc::new(FileSessionStore::new(&path))).await;
    first.state.auth.login("t@school.test", "secret").await.unwrap();

    let second = connect(&mock, Arc::new(FileSessionStore::new(&path))).await;
    assert!(second.state.session.has_role(roles::TEACHER));
    assert_eq!(
        second.state.session.access_token().await.as_deref(),
        Some("access-1")
    );
}

#[tokio::test]
async fn cancelled_logout_does_not_block_the_next_one() {
    let mock = MockApi::start().await;
    mock.respond("POST", "auth/login", 200, login_body("a@b.com", &["Admin"]));
    mock.respond_empty("POST", "auth/logout", 200);
    let h = connect_fresh(&mock).await;
    h.state.auth.login("a@b.com", "secret").await.unwrap();

    // polled once, then dropped while the server call is pending
    assert!(h.state.auth.logout().now_or_never().is_none());

    h.state.auth.login("a@b.com", "secret").await.unwrap();
    let before = mock.requests_to("auth/logout").len();
    h.state.auth.logout().await;

    assert!(mock.requests_to("auth/logout").len() > before);
    assert!(!h.state.session.is_authenticated());
    assert_eq!(h.navigator.paths().last().map(String::as_str), Some("/login"));
}

#[tokio::test]
async fn login_accepts_expiry_without_offset() {
    let mock = MockApi::start().await;
    let mut body = login_body("a@b.com", &["Admin"]);
    body["expiresAt"] = json!("2026-10-18T08:00:00");
    mock.respond("POST", "auth/login", 200, body);
    let h = connect_fresh(&mock).await;

    let user = h.state.auth.login("a@b.com", "secret").await.unwrap();

    assert!(h.state.session.is_authenticated());
    assert_eq!(user.expires_at.to_rfc3339(), "2026-10-18T08:00:00+00:00");
}

//! Session state holder: who is logged in, backed by the durable record.
//!
//! Reads are open to everyone. Writes go through `establish`/`clear`, which
//! only the credential exchange and the request pipeline call.

pub mod model;

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::SessionStore;
use crate::store::keys::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, USER_KEY};

pub use model::{User, UserType, roles};

#[derive(Debug, Default)]
struct SessionState {
    hydrated: bool,
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<User>,
}

impl SessionState {
    fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            authenticated: self.is_authenticated(),
        }
    }
}

/// Immutable view of the session at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    user: Option<User>,
    authenticated: bool,
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.authenticated && self.user.as_ref().is_some_and(|u| u.has_role(role))
    }

    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        self.authenticated && self.user.as_ref().is_some_and(|u| u.has_any_role(roles))
    }
}

pub struct Session {
    store: Arc<dyn SessionStore>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Empty, not yet hydrated. Token reads go to the store until `hydrate` runs.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Hydrated from the durable record.
    pub async fn restore(store: Arc<dyn SessionStore>) -> Self {
        let session = Self::new(store);
        session.hydrate().await;
        session
    }

    /// Loads the durable record. Only a token together with a readable user
    /// counts as a session; anything else starts anonymous.
    pub async fn hydrate(&self) {
        let access_token = self.read_key(ACCESS_TOKEN_KEY).await;
        let refresh_token = self.read_key(REFRESH_TOKEN_KEY).await;
        let user = self.read_key(USER_KEY).await.and_then(|json| {
            serde_json::from_str::<User>(&json)
                .map_err(|e| tracing::warn!("Ignoring unreadable stored user: {}", e))
                .ok()
        });

        let mut state = self.state.write();
        match (access_token, user) {
            (Some(token), Some(user)) => {
                tracing::debug!("Restored session for {}", user.email);
                state.access_token = Some(token);
                state.refresh_token = refresh_token;
                state.user = Some(user);
            }
            _ => {
                state.access_token = None;
                state.refresh_token = None;
                state.user = None;
            }
        }
        state.hydrated = true;
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read session key {}: {}", key, e);
                None
            }
        }
    }

    /// Current bearer token. Before hydration this reads the durable record.
    pub async fn access_token(&self) -> Option<String> {
        {
            let state = self.state.read();
            if state.hydrated {
                return state.access_token.clone();
            }
        }
        self.read_key(ACCESS_TOKEN_KEY).await
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state.read().refresh_token.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.state.read().user.as_ref().map(|u| u.user_type)
    }

    pub fn roles(&self) -> BTreeSet<String> {
        self.state
            .read()
            .user
            .as_ref()
            .map(|u| u.roles.clone())
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn has_role(&self, role: &str) -> bool {
        let state = self.state.read();
        state.is_authenticated() && state.user.as_ref().is_some_and(|u| u.has_role(role))
    }

    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        let state = self.state.read();
        state.is_authenticated() && state.user.as_ref().is_some_and(|u| u.has_any_role(roles))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().snapshot()
    }

    /// Installs a server-confirmed identity. The durable record is written
    /// first; if that fails the session still lives in memory.
    pub(crate) async fn establish(&self, user: User) {
        let user_json = match serde_json::to_string(&user) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("Failed to serialize user for storage: {}", e);
                None
            }
        };

        if let Some(user_json) = user_json {
            let entries = [
                (ACCESS_TOKEN_KEY, user.token.clone()),
                (REFRESH_TOKEN_KEY, user.refresh_token.clone()),
                (USER_KEY, user_json),
            ];
            if let Err(e) = self.store.set_all(&entries).await {
                tracing::warn!("Failed to persist session for {}: {}", user.email, e);
            }
        }

        let mut state = self.state.write();
        state.access_token = Some(user.token.clone());
        state.refresh_token = Some(user.refresh_token.clone());
        state.user = Some(user);
        state.hydrated = true;
    }

    /// Drops the session from memory and the durable record.
    /// Returns whether a session existed; clearing twice is a no-op.
    pub(crate) async fn clear(&self) -> bool {
        let was_authenticated = {
            let mut state = self.state.write();
            let was = state.is_authenticated();
            state.access_token = None;
            state.refresh_token = None;
            state.user = None;
            state.hydrated = true;
            was
        };

        if let Err(e) = self.store.remove_all(&SESSION_KEYS).await {
            tracing::warn!("Failed to remove stored session: {}", e);
        }

        if was_authenticated {
            tracing::debug!("Session cleared");
        }
        was_authenticated
    }
}

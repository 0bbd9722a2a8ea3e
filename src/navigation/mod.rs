//! Navigation decisions and the sidebar menu.

pub mod menu;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const FORBIDDEN_ROUTE: &str = "/forbidden";

/// Query parameter carrying the path a user was sent away from.
pub const RETURN_URL_PARAM: &str = "returnUrl";

/// A navigation target with optional query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Redirect {
    pub fn to(path: &str) -> Self {
        Self {
            path: path.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path plus percent-encoded query string.
    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Whatever moves the user between screens. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &Redirect);
}

/// Navigator for headless hosts: records the decision in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, target: &Redirect) {
        tracing::info!("Navigate to {}", target.to_url());
    }
}

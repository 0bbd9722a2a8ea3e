use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_APP_NAME: &str = "School Management System";
const DEFAULT_APP_VERSION: &str = "1.0.0";
const DEFAULT_NAMESPACE: &str = "school_admin";

/// Where the durable session record lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionBackend {
    File(PathBuf),
    Redis { url: String, namespace: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub app_name: String,
    pub app_version: String,
    pub request_timeout_secs: Option<u64>,
    pub session_backend: SessionBackend,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL").ok_or(env::VarError::NotPresent)?;

        let session_backend = if let Some(url) = lookup("SESSION_REDIS_URL") {
            SessionBackend::Redis {
                url,
                namespace: lookup("SESSION_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.into()),
            }
        } else if lookup("SESSION_BACKEND").as_deref() == Some("memory") {
            SessionBackend::Memory
        } else {
            let path = lookup("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| default_session_file(lookup("HOME")));
            SessionBackend::File(path)
        };

        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.into()),
            app_version: lookup("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.into()),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
            session_backend,
        })
    }

    /// Defaults for everything except the API location; sessions stay in memory.
    pub fn for_api(api_url: &str) -> Self {
        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            app_name: DEFAULT_APP_NAME.into(),
            app_version: DEFAULT_APP_VERSION.into(),
            request_timeout_secs: None,
            session_backend: SessionBackend::Memory,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_session_file(home: Option<String>) -> PathBuf {
    let home = home.unwrap_or_else(|| "/tmp".to_string());
    PathBuf::from(home).join(".school-admin").join("session.json")
}

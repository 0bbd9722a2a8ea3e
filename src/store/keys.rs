/// Bearer credential of the current session
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Refresh token, only sent back on logout
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// JSON-serialized `User`
pub const USER_KEY: &str = "user";

/// Every key of the durable session record; removed together.
pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Namespaced key used by shared backends
pub fn namespaced_key(namespace: &str, key: &str) -> String {
    format!("{}:{}", namespace, key)
}

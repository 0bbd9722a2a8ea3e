use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::model::expiry;
use crate::session::{User, UserType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
    #[serde(deserialize_with = "expiry::deserialize")]
    pub expires_at: DateTime<Utc>,
    pub email: String,
    pub user_type: UserType,
    pub roles: BTreeSet<String>,
}

impl From<LoginResponse> for User {
    fn from(response: LoginResponse) -> Self {
        User {
            email: response.email,
            user_type: response.user_type,
            roles: response.roles,
            token: response.token,
            refresh_token: response.refresh_token,
            expires_at: response.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub user_id: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_becomes_user() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "jwt",
            "refreshToken": "refresh",
            "expiresAt": "2026-10-18T08:00:00Z",
            "email": "a@b.com",
            "userType": "Admin",
            "roles": ["Admin"]
        }))
        .unwrap();

        let user = User::from(response);
        assert_eq!(user.token, "jwt");
        assert_eq!(user.refresh_token, "refresh");
        assert_eq!(user.user_type, UserType::Admin);
        assert!(user.has_role("Admin"));
    }

    #[test]
    fn login_response_accepts_expiry_without_offset() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "jwt",
            "refreshToken": "refresh",
            "expiresAt": "2026-10-18T08:00:00",
            "email": "a@b.com",
            "userType": "Staff",
            "roles": ["Teacher"]
        }))
        .unwrap();

        assert_eq!(response.expires_at.to_rfc3339(), "2026-10-18T08:00:00+00:00");
    }

    #[test]
    fn password_requests_use_camel_case() {
        let body = serde_json::to_value(ChangePasswordRequest {
            current_password: "old".into(),
            new_password: "new".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "currentPassword": "old", "newPassword": "new" }));

        let body = serde_json::to_value(ResetPasswordRequest {
            user_id: "u-1".into(),
            new_password: "new".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "userId": "u-1", "newPassword": "new" }));
    }
}

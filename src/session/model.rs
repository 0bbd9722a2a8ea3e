use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role names issued by the identity endpoint
pub mod roles {
    pub const ADMIN: &str = "Admin";
    pub const SUPER_ADMIN: &str = "SuperAdmin";
    pub const TEACHER: &str = "Teacher";
    pub const STUDENT: &str = "Student";
    pub const PARENT: &str = "Parent";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    Student,
    Staff,
    Admin,
    Parent,
    #[serde(other)]
    Unknown,
}

/// Expiry timestamps as the identity endpoint sends them: RFC 3339, or a
/// bare ISO date-time without offset, which is read as UTC.
pub(crate) mod expiry {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|at| at.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid expiry timestamp {}", raw)))
    }
}

/// Authenticated identity, as mirrored under the `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub user_type: UserType,
    pub roles: BTreeSet<String>,
    pub token: String,
    pub refresh_token: String,
    #[serde(deserialize_with = "expiry::deserialize")]
    pub expires_at: DateTime<Utc>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|role| self.roles.contains(role.as_ref()))
    }
}

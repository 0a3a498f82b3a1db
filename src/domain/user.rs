use serde::{Deserialize, Serialize};

/// Accounts with this `user_level` or above see the admin pages even
/// when the API did not send an explicit role string.
const ADMIN_LEVEL: i64 = 9;

/// The signed-in account, as returned by the login and profile
/// endpoints and persisted by the auth store.
///
/// The login endpoint writes snake_case keys, the profile ones
/// camelCase, so the camel spellings ride along as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default, alias = "contactNumber")]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "userLevel")]
    pub user_level: Option<i64>,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            _ => self.email.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin") || self.user_level.unwrap_or(0) >= ADMIN_LEVEL
    }
}

/// Payload for the signup endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

/// Account record as returned by `/users/profile` and the admin `/users`
/// listing. The server never sends password material to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub role: Role,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn initial(&self) -> char {
        self.name.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?')
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
}

/// Body for the admin `PUT /users/:id` endpoint, which may also change
/// the account role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUpdateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub role: Role,
}

impl AdminUpdateUserRequest {
    /// The existing account fields with a different role.
    pub fn with_role(user: &UserProfile, role: Role) -> Self {
        AdminUpdateUserRequest {
            name: user.name.clone(),
            email: user.email.clone(),
            mobile_number: user.mobile_number.clone(),
            role,
        }
    }
}

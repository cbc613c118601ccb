use serde::{Deserialize, Serialize};

/// The authenticated identity returned by `GET /api/auth/user/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// Whether the account may open the administrative view.
    #[serde(default)]
    pub is_staff: bool,
}

/// Entry of the staff-only user listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

/// Credentials posted to `/api/auth/token/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account creation body for `/api/auth/register/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Confirmation returned by a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegisterResponse {
    pub message: String,
}

impl Default for RegisterResponse {
    fn default() -> Self {
        Self {
            message: "Registration successful".to_string(),
        }
    }
}

//! Request and response types for the directory API.
//!
//! Field names mirror the remote contract exactly.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// A user record as served by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned unique id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl User {
    /// Full display name, as rendered in lists.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response for `GET /api/users?page=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    /// Page number this response covers.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
    /// Total record count across all pages.
    pub total: u32,
    /// Total page count.
    pub total_pages: u32,
    /// The records on this page.
    pub data: Vec<User>,
}

/// Editable fields for a partial user update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response for `PUT /api/users/{id}`.
///
/// The mock echoes the submitted fields with a timestamp. It does not
/// persist the edit; a later `list` call will not reflect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    /// Echoed first name, if submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Echoed last name, if submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Echoed email, if submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Server-side timestamp of the echo (ISO 8601).
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /api/login` and `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token.
    pub token: String,
}

/// Response for `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Id of the registered account.
    pub id: i64,
    /// Opaque session token.
    pub token: String,
}

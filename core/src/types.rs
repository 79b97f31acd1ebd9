//! Domain DTOs for the user-directory API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Optional
//! request fields are encoded as `Option` with `skip_serializing_if`, so the
//! server can distinguish "field not provided" from "field cleared". The
//! `from_fields` constructors absorb raw form-style input, where an empty or
//! whitespace-only string means the field was left blank.

use serde::{Deserialize, Serialize};

/// A single user record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Request payload for creating a new user.
///
/// `id` and `role` are optional; the server assigns an id and defaults the
/// role when they are absent. Absent fields are omitted from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Build a create payload from raw form fields. `name` and `email` are
    /// trimmed; a blank `role` is treated as not provided.
    pub fn from_fields(id: Option<u64>, name: &str, email: &str, role: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            role: non_empty(role),
        }
    }
}

/// Request payload for updating an existing user. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    /// Build an update payload from raw form fields, keeping only the ones
    /// that were actually filled in.
    pub fn from_fields(name: &str, email: &str, role: &str) -> Self {
        Self {
            name: non_empty(name),
            email: non_empty(email),
            role: non_empty(role),
        }
    }

    /// True when no field is set; such an update is rejected before any
    /// network call.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

/// Response body of a successful DELETE, echoing the removed id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedUser {
    pub deleted: u64,
}

/// Map a trimmed form value to `None` when it is blank.
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

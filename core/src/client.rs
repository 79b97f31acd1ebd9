//! Stateless HTTP request builder and response parser for the user API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`,
//! so both sides of the network boundary stay deterministic and testable
//! without I/O. `UserApi` wires these to a `Transport` for callers that just
//! want the round trip.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateUserRequest, DeletedUser, UpdateUserRequest, User};

/// Stateless request builder and response parser for the user-directory API.
///
/// The base URL is fixed at construction; all routes are derived from it.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The URL of the user collection.
    pub fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// The URL of a single user.
    pub fn user_url(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_user(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.user_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_user(&self, input: &CreateUserRequest) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Rejects an update with no fields set before anything goes on the wire.
    pub fn build_update_user(
        &self,
        id: u64,
        input: &UpdateUserRequest,
    ) -> Result<HttpRequest, ApiError> {
        if input.is_empty() {
            return Err(ApiError::EmptyUpdate);
        }
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.user_url(id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_user(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.user_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<DeletedUser, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Any 2xx passes; everything else is normalized into `ApiError::Http`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_response(response))
}

//! Executing client: request building, one HTTP round trip, parsing.
//!
//! `UserApi` is what most callers want. It owns a `UserClient` for the
//! build/parse halves and a `Transport` for the wire, and exposes one method
//! per route plus the generic `send` escape hatch for endpoints outside the
//! typed surface.

use crate::client::UserClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::{CreateUserRequest, DeletedUser, UpdateUserRequest, User};

/// High-level client for the user-directory API.
#[derive(Debug, Clone)]
pub struct UserApi {
    client: UserClient,
    transport: Transport,
}

impl UserApi {
    /// Create a client bound to the service root, e.g. `http://host:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: UserClient::new(base_url),
            transport: Transport::new(),
        }
    }

    /// The underlying request builder, for callers that run their own I/O.
    pub fn client(&self) -> &UserClient {
        &self.client
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.client.build_list_users();
        let response = self.transport.execute(&request)?;
        self.client.parse_list_users(response)
    }

    pub fn create_user(&self, input: &CreateUserRequest) -> Result<User, ApiError> {
        let request = self.client.build_create_user(input)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_create_user(response)
    }

    pub fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let request = self.client.build_get_user(id);
        let response = self.transport.execute(&request)?;
        self.client.parse_get_user(response)
    }

    pub fn update_user(&self, id: u64, input: &UpdateUserRequest) -> Result<User, ApiError> {
        let request = self.client.build_update_user(id, input)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_update_user(response)
    }

    pub fn delete_user(&self, id: u64) -> Result<DeletedUser, ApiError> {
        let request = self.client.build_delete_user(id);
        let response = self.transport.execute(&request)?;
        self.client.parse_delete_user(response)
    }

    /// Generic JSON round trip against an arbitrary URL. See
    /// [`Transport::send`] for the normalization rules.
    pub fn send(
        &self,
        method: HttpMethod,
        url: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        self.transport.send(method, url, payload)
    }
}

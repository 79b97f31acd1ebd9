//! HTTP execution over ureq, plus the generic JSON round-trip.
//!
//! # Design
//! `Transport` is the only piece of the crate that touches the network. The
//! agent is configured with status-as-error disabled so 4xx/5xx responses
//! come back as data and status interpretation stays in one place. Response
//! interpretation for the generic `send` is a pure function over
//! `HttpResponse`, tested without any I/O.
//!
//! One request per call: no retries, no timeout, no deduplication of
//! overlapping calls.

use std::fmt;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes `HttpRequest` values over real HTTP.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform one HTTP round trip. Network-level failures map to
    /// `ApiError::Transport`; any status that made it back is a response.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");

        let result = match (&request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(status = status.as_u16(), "received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers: Vec::new(),
            body,
        })
    }

    /// Generic JSON round trip: attach the payload when present, then
    /// normalize the outcome. A 2xx response returns its JSON body; a 2xx
    /// response with an empty or non-JSON body returns a synthesized
    /// `{"message": ...}` object; a non-2xx response is an `ApiError::Http`.
    pub fn send(
        &self,
        method: HttpMethod,
        url: &str,
        payload: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let body = payload
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        let request = HttpRequest {
            method,
            path: url.to_string(),
            headers,
            body,
        };
        let response = self.execute(&request)?;
        interpret_response(&request.method, &response)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a raw response into the generic `send` result.
fn interpret_response(
    method: &HttpMethod,
    response: &HttpResponse,
) -> Result<serde_json::Value, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_response(response));
    }
    Ok(serde_json::from_str(&response.body)
        .unwrap_or_else(|_| synthesized_result(method, response)))
}

/// Stand-in body for a success with nothing parseable in it, e.g. a 204.
fn synthesized_result(method: &HttpMethod, response: &HttpResponse) -> serde_json::Value {
    let message = if response.status_text.is_empty() {
        format!("{method} successful with status {}", response.status)
    } else {
        response.status_text.clone()
    };
    serde_json::json!({ "message": message })
}

//! Synchronous API client for a user-directory REST service.
//!
//! # Overview
//! Wraps the five CRUD routes of the service (`GET /users`, `POST /users`,
//! `GET /users/{id}`, `PUT /users/{id}`, `DELETE /users/{id}`) behind typed
//! request and response types, and normalizes every non-2xx outcome into a
//! single failure shape carrying the status, the status text, and the
//! server's `error`/`detail` fields when present.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url`, fixed at
//!   construction.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response); `Transport` is the only module that does
//!   I/O, so everything else stays deterministic and testable.
//! - `UserApi` composes the two for ordinary callers; `Transport::send` is
//!   the generic JSON round trip with the no-body/unparseable-body fallback.
//! - Optional payload fields are `Option` + `skip_serializing_if`, so the
//!   server can tell "not provided" from "cleared".
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::UserApi;
pub use client::UserClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{CreateUserRequest, DeletedUser, UpdateUserRequest, User};

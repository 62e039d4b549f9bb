//! Sans-IO client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller performs the HTTP round-trip, so the
//! core stays deterministic and easy to test against recorded vectors.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is a `build_*` / `parse_*` pair.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, FieldError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Priority, Todo, UpdateTodo};

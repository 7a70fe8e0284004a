//! Synchronous client core for the todo GraphQL service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and
//! testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only the GraphQL endpoint URL.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - [`view::TodoView`] applies the same discipline to the UI: user
//!   events go in, effects come out, and the host renders the state and
//!   runs the I/O.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{Priority, Todo, TodoFilter, TodoInput};
pub use view::{Effect, Phase, PriorityFilter, StatusFilter, TodoView};

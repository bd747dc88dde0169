//! Client library for the todo service: API gateway plus state store.
//!
//! # Overview
//! Two halves, matching the flow presentation code drives:
//!
//! - [`TodoClient`] builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern); every
//!   failure is normalized into a single message string at this boundary.
//! - [`TodoState`] mirrors the server's paginated list state and advances
//!   only through [`TodoState::apply`], a pure reducer over operation
//!   lifecycle events.
//!
//! A typical round-trip: apply the `*Started` event, execute the built
//! request, parse the response, then apply `*Succeeded` / `*Failed` and run
//! any [`Followup`] the store returns.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Followup, TodoEvent, TodoState};
pub use types::{
    CreateTodo, ListResponse, MessageResponse, Pagination, Status, Todo, TodoResponse, UpdateTodo,
};

//! HTTP access to the Ex-Online API.
//!
//! This module provides the `ExOnlineClient` used to list projects,
//! equipment and per-dossier attachments, plus the `Transport` underneath it.
//!
//! Every request carries the API key as a bearer token. Calls are blocking:
//! one GET per operation, no retries.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

pub use client::ExOnlineClient;
pub use endpoints::{DateRange, Endpoint, Page};
pub use error::ApiError;
pub use transport::Transport;

//! HTTP API layer for the AMD service.
//!
//! Provides the acknowledgment and prediction endpoints.

mod extract;
pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;

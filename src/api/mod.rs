//! HTTP delivery for the viewer pages.
//!
//! Thin axum surface over the loader + renderer: each request runs one
//! complete load cycle and returns the rendered page tree as JSON. The
//! routes are read-only; nothing here writes back to the data source.

pub mod endpoints;
pub mod error;
pub mod router;

pub use error::ApiError;
pub use router::{records_router, ViewerContext};

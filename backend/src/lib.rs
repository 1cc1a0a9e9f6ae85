//! Anonymous feedback service backend.
//!
//! Hexagonal layout: [`domain`] holds the rules and use-cases, [`inbound`]
//! exposes them over HTTP, and [`outbound`] stores records in PostgreSQL or
//! in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

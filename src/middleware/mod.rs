//! Custom middleware implementations for the API.
//!
//! CORS policy, request ids with request logging, and metrics collection.

pub mod cors;
pub mod metrics;
pub mod request_id;

pub use cors::*;
pub use metrics::*;
pub use request_id::*;

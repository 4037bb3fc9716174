//! HTTP request handlers for API endpoints.
//!
//! `whoami` is the introspection endpoint; the rest are operational.

pub mod health;
pub mod index;
pub mod metrics;
pub mod openapi;
pub mod version;
pub mod whoami;

pub use health::*;
pub use index::*;
pub use metrics::*;
pub use openapi::*;
pub use version::*;
pub use whoami::*;

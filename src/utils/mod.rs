//! Utility functions and helper modules.
//!
//! Client address resolution, header extraction and route labelling.

pub mod http;
pub mod route;

pub use http::*;
pub use route::*;

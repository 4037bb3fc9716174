//! Data models for the whoami API.
//!
//! This module contains the wire records returned by the endpoints. All of
//! them are plain values built per request.

pub mod api;
pub mod whoami;

pub use api::*;
pub use whoami::*;

//! Configuration structures and loading utilities.
//!
//! Every structure here has a `Default` and a `from_env()` constructor that
//! falls back to the default for any missing or unparsable variable.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod server;

pub use cors::*;
pub use logging::*;
pub use metrics::*;
pub use server::*;

//! Business logic and service layer modules.
//!
//! The header parsers are pure functions over request metadata; `whoami`
//! composes them into a validated response and `metrics` counts the results.

pub mod accept_language;
pub mod metrics;
pub mod user_agent;
pub mod whoami;

pub use accept_language::*;
pub use metrics::*;
pub use user_agent::*;
pub use whoami::*;

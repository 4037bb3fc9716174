//! Error type for whoami response assembly.

/// Errors raised while building or encoding a whoami response
///
/// None of these are ever shown to the caller; the whoami handler logs the
/// cause and answers with a fixed 500 body.
#[derive(Debug, thiserror::Error)]
pub enum WhoamiError {
    #[error("Response validation failed on `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WhoamiError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WhoamiError>;

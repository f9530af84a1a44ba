/// Domain-level error raised before anything reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A field constraint was violated.
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: &'static str, reason: String },
}

impl CoreError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

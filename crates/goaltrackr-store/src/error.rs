use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] goaltrackr_core::error::CoreError),

    #[error("validation failed: {0}")]
    Validation(String),
}

impl StoreError {
    /// The payload handed to import could not be parsed as a snapshot.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Self::Core(e) => e.is_parse_error(),
            _ => false,
        }
    }

    /// A required field was blank.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Core(goaltrackr_core::error::CoreError::Validation(_))
        )
    }
}

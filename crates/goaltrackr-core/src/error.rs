use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("snapshot must be a JSON array of goals")]
    NotASequence,

    #[error("malformed goal at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },

    #[error("progress {value} out of range 0..=100 at index {index}")]
    ProgressOutOfRange { index: usize, value: u8 },

    #[error("duplicate goal id in snapshot: {0}")]
    DuplicateId(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid snapshot digest: {0:?}")]
    InvalidDigest(String),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl CoreError {
    /// True for every failure that means "the snapshot payload could not be parsed".
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::NotASequence
                | Self::MalformedEntry { .. }
                | Self::ProgressOutOfRange { .. }
                | Self::DuplicateId(_)
                | Self::Serialization(_)
        )
    }
}

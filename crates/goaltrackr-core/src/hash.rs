use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 of a snapshot's canonical bytes, displayed and stored as 64 hex chars.
///
/// Deserialization goes through [`SnapshotDigest::parse`], so every value
/// holds exactly 64 lowercase hex chars.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SnapshotDigest(String);

impl SnapshotDigest {
    /// Create a digest by hashing raw bytes.
    pub fn hash(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        Self(hex::encode(digest))
    }

    /// Parse a full 64-char hex string.
    pub fn parse(hex_str: &str) -> Result<Self, CoreError> {
        let hex_str = hex_str.trim();
        if hex_str.len() != 64 || !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidDigest(hex_str.to_string()));
        }
        Ok(Self(hex_str.to_lowercase()))
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// First 8 chars, used for display.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl TryFrom<String> for SnapshotDigest {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SnapshotDigest> for String {
    fn from(digest: SnapshotDigest) -> Self {
        digest.0
    }
}

impl fmt::Debug for SnapshotDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SnapshotDigest({})", self.short())
    }
}

impl fmt::Display for SnapshotDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

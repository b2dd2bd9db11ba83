use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::document::DescriptorError;

/// Longest name the wire format can carry.
pub const MAX_NAME_BYTES: usize = i32::MAX as usize;

/// Human-readable document label. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentName(String);

impl DocumentName {
    pub fn new(name: impl Into<String>) -> Result<Self, DescriptorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if name.len() > MAX_NAME_BYTES {
            return Err(DescriptorError::NameTooLong(name.len()));
        }
        Ok(DocumentName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentName {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DocumentName::new(value)
    }
}

impl From<DocumentName> for String {
    fn from(name: DocumentName) -> Self {
        name.0
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a descriptor's canonical wire encoding.
///
/// Unlike `std::hash::Hash`, the value is stable across processes and
/// toolchains, so it can key descriptors in persistent stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorFingerprint(String);

impl DescriptorFingerprint {
    pub fn from_wire(encoded: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(encoded);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DescriptorFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DescriptorFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

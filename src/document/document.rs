use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::codec::{self, DecodeError};
use crate::types::{ContentType, DescriptorFingerprint, DocumentName, PageCount};
use super::builder::DocumentDescriptorBuilder;

/// Rejected field values. Raised before any descriptor is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name is {0} bytes, longer than the wire format allows")]
    NameTooLong(usize),
    #[error("Page count must be >= 0 or PageCount::UNKNOWN, got {0}")]
    InvalidPageCount(i32),
}

/// Metadata snapshot of a print job's document.
///
/// Everything except `data_size` is fixed once built. The data size is
/// filled in by the owner once the rendered output size is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    name: DocumentName,
    #[serde(default)]
    page_count: PageCount,
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    data_size: i64,
}

impl DocumentDescriptor {
    pub(crate) fn from_parts(
        name: DocumentName,
        page_count: PageCount,
        content_type: ContentType,
        data_size: i64,
    ) -> Self {
        DocumentDescriptor {
            name,
            page_count,
            content_type,
            data_size,
        }
    }

    /// Start a builder. Fails if `name` is empty.
    pub fn builder(name: impl Into<String>) -> Result<DocumentDescriptorBuilder, DescriptorError> {
        DocumentDescriptorBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn document_name(&self) -> &DocumentName {
        &self.name
    }

    pub fn page_count(&self) -> PageCount {
        self.page_count
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn data_size(&self) -> i64 {
        self.data_size
    }

    /// Overwrites the data size. Accepts any value, negatives included.
    pub fn set_data_size(&mut self, data_size: i64) {
        self.data_size = data_size;
    }

    /// Builder prefilled with every field of this descriptor.
    pub fn to_builder(&self) -> DocumentDescriptorBuilder {
        DocumentDescriptorBuilder::from_descriptor(self)
    }

    /// Canonical binary encoding.
    pub fn to_wire_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Decode a single descriptor using the default codec config.
    pub fn from_wire_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(bytes)
    }

    pub fn fingerprint(&self) -> DescriptorFingerprint {
        DescriptorFingerprint::from_wire(&self.to_wire_bytes())
    }
}

impl fmt::Display for DocumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DocumentDescriptor{{name={}, pageCount={}, contentType={}, size={}}}",
            self.name, self.page_count, self.content_type, self.data_size
        )
    }
}

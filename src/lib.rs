//! Validated print document descriptors.
//!
//! `print-document` models the metadata of a document in a print job: its
//! name, page count, content type and rendered data size. Descriptors are
//! built through a validating builder, compare and hash structurally, and
//! round-trip exactly through a fixed little-endian wire format.

pub mod codec;
pub mod document;
pub mod types;

pub use codec::{CodecConfig, DecodeError};
pub use document::{DescriptorError, DocumentDescriptor, DocumentDescriptorBuilder};
pub use types::{ContentType, DescriptorFingerprint, DocumentName, PageCount};

pub mod builder;
pub mod document;

pub use crate::types::{ContentType, DocumentName, PageCount};
pub use builder::DocumentDescriptorBuilder;
pub use document::{DescriptorError, DocumentDescriptor};

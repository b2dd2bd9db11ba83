pub mod content_type;
pub mod identifiers;
pub mod page_count;

pub use content_type::{ContentType, UnknownContentType};
pub use identifiers::{DescriptorFingerprint, DocumentName, MAX_NAME_BYTES};
pub use page_count::PageCount;

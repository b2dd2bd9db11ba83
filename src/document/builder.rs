use tracing::{debug, warn};

use crate::types::{ContentType, DocumentName, PageCount};
use super::document::{DescriptorError, DocumentDescriptor};

/// Validating builder for [`DocumentDescriptor`].
///
/// The name is checked on construction and the page count on assignment,
/// so `build` itself cannot fail.
#[derive(Debug, Clone)]
pub struct DocumentDescriptorBuilder {
    name: DocumentName,
    page_count: PageCount,
    content_type: ContentType,
    data_size: i64,
}

impl DocumentDescriptorBuilder {
    pub fn new(name: impl Into<String>) -> Result<Self, DescriptorError> {
        let name = DocumentName::new(name).map_err(|e| {
            warn!(error = %e, "rejected document name");
            e
        })?;

        Ok(Self {
            name,
            page_count: PageCount::UNKNOWN,
            content_type: ContentType::Unknown,
            data_size: 0,
        })
    }

    pub(crate) fn from_descriptor(descriptor: &DocumentDescriptor) -> Self {
        Self {
            name: descriptor.document_name().clone(),
            page_count: descriptor.page_count(),
            content_type: descriptor.content_type(),
            data_size: descriptor.data_size(),
        }
    }

    /// Set the page count. On error the previous value is kept.
    pub fn page_count(&mut self, count: i32) -> Result<&mut Self, DescriptorError> {
        let count = PageCount::new(count).map_err(|e| {
            warn!(page_count = count, "rejected page count");
            e
        })?;
        self.page_count = count;
        Ok(self)
    }

    pub fn content_type(&mut self, content_type: ContentType) -> &mut Self {
        self.content_type = content_type;
        self
    }

    /// Snapshot the current state. Each call returns an independent value.
    pub fn build(&self) -> DocumentDescriptor {
        debug!(
            name = self.name.as_str(),
            page_count = self.page_count.as_i32(),
            content_type = self.content_type.as_str(),
            "built document descriptor"
        );
        DocumentDescriptor::from_parts(
            self.name.clone(),
            self.page_count,
            self.content_type,
            self.data_size,
        )
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::DescriptorError;

/// Number of pages in a document, or [`PageCount::UNKNOWN`].
///
/// Only non-negative counts and the `-1` sentinel are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PageCount(i32);

impl PageCount {
    /// Page count not yet determined. Distinct from zero.
    pub const UNKNOWN: PageCount = PageCount(-1);

    pub fn new(count: i32) -> Result<Self, DescriptorError> {
        if count < 0 && count != Self::UNKNOWN.0 {
            return Err(DescriptorError::InvalidPageCount(count));
        }
        Ok(PageCount(count))
    }

    pub fn is_known(self) -> bool {
        self.0 >= 0
    }

    /// The count, if known.
    pub fn known(self) -> Option<u32> {
        u32::try_from(self.0).ok()
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl Default for PageCount {
    fn default() -> Self {
        PageCount::UNKNOWN
    }
}

impl TryFrom<i32> for PageCount {
    type Error = DescriptorError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        PageCount::new(value)
    }
}

impl From<PageCount> for i32 {
    fn from(count: PageCount) -> Self {
        count.0
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

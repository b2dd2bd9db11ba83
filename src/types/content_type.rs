use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering hint for the print pipeline.
///
/// Wire values: `Unknown = -1`, `Document = 0`, `Photo = 1`.
/// JSON uses the symbolic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    #[default]
    Unknown,
    Document,
    Photo,
}

impl ContentType {
    pub fn as_i32(self) -> i32 {
        match self {
            ContentType::Unknown => -1,
            ContentType::Document => 0,
            ContentType::Photo => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Unknown => "UNKNOWN",
            ContentType::Document => "DOCUMENT",
            ContentType::Photo => "PHOTO",
        }
    }
}

/// Wire integer outside the known variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown content type: {0}")]
pub struct UnknownContentType(pub i32);

impl TryFrom<i32> for ContentType {
    type Error = UnknownContentType;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ContentType::Unknown),
            0 => Ok(ContentType::Document),
            1 => Ok(ContentType::Photo),
            other => Err(UnknownContentType(other)),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_fixed() {
        assert_eq!(ContentType::Unknown.as_i32(), -1);
        assert_eq!(ContentType::Document.as_i32(), 0);
        assert_eq!(ContentType::Photo.as_i32(), 1);
    }

    #[test]
    fn out_of_range_values_rejected() {
        assert_eq!(ContentType::try_from(2), Err(UnknownContentType(2)));
        assert_eq!(ContentType::try_from(-2), Err(UnknownContentType(-2)));
    }

    #[test]
    fn json_uses_symbolic_names() {
        let json = serde_json::to_string(&ContentType::Photo).unwrap();
        assert_eq!(json, "\"PHOTO\"");
        let parsed: ContentType = serde_json::from_str("\"DOCUMENT\"").unwrap();
        assert_eq!(parsed, ContentType::Document);
    }
}

//! Binary wire format.
//!
//! Fields in order, little-endian, no padding:
//!
//! | field          | encoding                                  |
//! |----------------|-------------------------------------------|
//! | `name`         | `i32` byte length, then that many UTF-8 bytes |
//! | `page_count`   | `i32`                                     |
//! | `content_type` | `i32`                                     |
//! | `data_size`    | `i64`                                     |

use thiserror::Error;
use tracing::{debug, warn};

use crate::codec::config::CodecConfig;
use crate::document::{DescriptorError, DocumentDescriptor};
use crate::types::{ContentType, DocumentName, PageCount, UnknownContentType};

/// Input that does not hold a valid descriptor. No partial value is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Truncated input reading {field}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },
    #[error("Negative name length: {0}")]
    NegativeLength(i32),
    #[error("Name must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Name is {len} bytes, limit is {max}")]
    NameTooLong { len: usize, max: usize },
    #[error("Unknown content type: {0}")]
    UnknownContentType(i32),
    #[error("Invalid field: {0}")]
    InvalidField(#[from] DescriptorError),
    #[error("{0} trailing bytes after descriptor")]
    TrailingBytes(usize),
}

impl From<UnknownContentType> for DecodeError {
    fn from(e: UnknownContentType) -> Self {
        DecodeError::UnknownContentType(e.0)
    }
}

/// Encoded length of `descriptor` in bytes.
pub fn encoded_len(descriptor: &DocumentDescriptor) -> usize {
    4 + descriptor.name().len() + 4 + 4 + 8
}

pub fn encode(descriptor: &DocumentDescriptor) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(descriptor));
    encode_into(descriptor, &mut out);
    out
}

/// Append the encoding of `descriptor` to `out`.
pub fn encode_into(descriptor: &DocumentDescriptor, out: &mut Vec<u8>) {
    let name = descriptor.name().as_bytes();
    // DocumentName caps the length at i32::MAX.
    out.extend_from_slice(&(name.len() as i32).to_le_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(&descriptor.page_count().as_i32().to_le_bytes());
    out.extend_from_slice(&descriptor.content_type().as_i32().to_le_bytes());
    out.extend_from_slice(&descriptor.data_size().to_le_bytes());
}

/// Decode exactly one descriptor with the default config.
pub fn decode(bytes: &[u8]) -> Result<DocumentDescriptor, DecodeError> {
    decode_with(bytes, &CodecConfig::v0())
}

pub fn decode_with(bytes: &[u8], config: &CodecConfig) -> Result<DocumentDescriptor, DecodeError> {
    let mut decoder = Decoder::with_config(bytes, config.clone());
    let descriptor = decoder.next_descriptor()?;

    if config.reject_trailing_bytes && decoder.remaining() > 0 {
        warn!(trailing = decoder.remaining(), "rejected descriptor with trailing bytes");
        return Err(DecodeError::TrailingBytes(decoder.remaining()));
    }

    Ok(descriptor)
}

/// Reads consecutive descriptors from one buffer.
///
/// A failed read leaves the position where the descriptor started.
/// `reject_trailing_bytes` does not apply here.
#[derive(Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    config: CodecConfig,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, CodecConfig::v0())
    }

    pub fn with_config(buf: &'a [u8], config: CodecConfig) -> Self {
        Self {
            buf,
            pos: 0,
            config,
            failed: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn next_descriptor(&mut self) -> Result<DocumentDescriptor, DecodeError> {
        let start = self.pos;
        match self.read_descriptor() {
            Ok(descriptor) => {
                debug!(
                    offset = start,
                    len = self.pos - start,
                    name = descriptor.name(),
                    "decoded document descriptor"
                );
                Ok(descriptor)
            }
            Err(e) => {
                warn!(offset = start, error = %e, "malformed document descriptor");
                self.pos = start;
                Err(e)
            }
        }
    }

    fn read_descriptor(&mut self) -> Result<DocumentDescriptor, DecodeError> {
        let name = self.read_name()?;
        let page_count = PageCount::new(self.read_i32("page_count")?)?;
        let content_type = ContentType::try_from(self.read_i32("content_type")?)?;
        let data_size = self.read_i64("data_size")?;

        Ok(DocumentDescriptor::from_parts(
            name,
            page_count,
            content_type,
            data_size,
        ))
    }

    fn read_name(&mut self) -> Result<DocumentName, DecodeError> {
        let len = self.read_i32("name_len")?;
        let len = usize::try_from(len).map_err(|_| DecodeError::NegativeLength(len))?;

        if let Some(max) = self.config.max_name_bytes {
            if len > max {
                return Err(DecodeError::NameTooLong { len, max });
            }
        }

        let raw = self.take("name", len)?.to_vec();
        let name = String::from_utf8(raw)?;
        Ok(DocumentName::new(name)?)
    }

    fn read_i32(&mut self, field: &'static str) -> Result<i32, DecodeError> {
        let bytes = self.take(field, 4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_i64(&mut self, field: &'static str) -> Result<i64, DecodeError> {
        let bytes = self.take(field, 8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(i64::from_le_bytes(raw))
    }

    fn take(&mut self, field: &'static str, needed: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::Truncated {
                field,
                needed,
                remaining,
            });
        }
        let buf: &'a [u8] = self.buf;
        let slice = &buf[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<DocumentDescriptor, DecodeError>;

    /// Yields descriptors until the buffer is exhausted or one fails.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_empty() {
            return None;
        }
        let item = self.next_descriptor();
        self.failed = item.is_err();
        Some(item)
    }
}

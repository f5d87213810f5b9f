use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{RecordError, Result};

/// Size of the length prefix: a 4-byte little-endian unsigned integer.
pub const PREFIX_LEN: usize = 4;

/// Minimum valid declared length.
///
/// The length field counts the whole record including itself, so anything
/// under 4 cannot describe a record boundary. Exactly 4 is a valid record
/// with an empty body.
pub const MIN_RECORD_LEN: u32 = 4;

/// One length-prefixed record: the 4-byte prefix and body, contiguous.
///
/// A `Record` is always well-formed — construction enforces the minimum
/// length and prefix/body consistency. The bytes are exactly what travels
/// on the wire and what lands in the file, so transfer never re-encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    bytes: Bytes,
}

impl Record {
    /// Assemble a record from a decoded prefix and the body it promised.
    ///
    /// `body.len()` must equal `length − 4` for the `length` encoded in
    /// `prefix`; the framing loops guarantee this by construction.
    pub(crate) fn from_parts(prefix: [u8; PREFIX_LEN], body: &[u8]) -> Self {
        let mut bytes = BytesMut::with_capacity(PREFIX_LEN + body.len());
        bytes.put_slice(&prefix);
        bytes.put_slice(body);
        Self {
            bytes: bytes.freeze(),
        }
    }

    /// Build a record around a body, writing the matching prefix.
    ///
    /// Rejects bodies whose total record size would overflow the 32-bit
    /// length field.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let total = PREFIX_LEN
            .checked_add(body.len())
            .filter(|&t| t <= u32::MAX as usize)
            .ok_or(RecordError::BodyTooLarge { size: body.len() })?;

        let mut bytes = BytesMut::with_capacity(total);
        bytes.put_u32_le(total as u32);
        bytes.put_slice(body);
        Ok(Self {
            bytes: bytes.freeze(),
        })
    }

    /// Total record size in bytes (prefix included).
    pub fn total_len(&self) -> usize {
        self.bytes.len()
    }

    /// The length value encoded in the prefix.
    ///
    /// Always equal to `total_len()` for a constructed `Record`.
    pub fn declared_len(&self) -> u32 {
        let mut prefix = [0u8; PREFIX_LEN];
        prefix.copy_from_slice(&self.bytes[..PREFIX_LEN]);
        decode_length(prefix)
    }

    /// The body bytes (everything after the prefix). May be empty.
    pub fn body(&self) -> &[u8] {
        &self.bytes[PREFIX_LEN..]
    }

    /// The full wire bytes: prefix followed by body.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the record, returning the wire bytes.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Decode a length prefix.
pub(crate) fn decode_length(prefix: [u8; PREFIX_LEN]) -> u32 {
    u32::from_le_bytes(prefix)
}

/// Validate a decoded length against the minimum.
pub(crate) fn check_length(length: u32) -> Result<()> {
    if length < MIN_RECORD_LEN {
        return Err(RecordError::InvalidLength { length });
    }
    Ok(())
}

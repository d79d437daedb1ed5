//! Canonical MessagePack writer.
//!
//! Only the constructs the ledger uses are supported: unsigned integers,
//! strings, byte strings, maps and arrays. Headers come from `rmp::encode`,
//! which always picks the smallest marker for a value or length; that is
//! what makes the output canonical.

use std::fmt::Display;

use rmp::encode;

use super::Value;
use crate::config::MAX_ENCODED_LENGTH;
use crate::error::EncodingError;

/// Append-only buffer producing canonical MessagePack.
#[derive(Debug, Default, Clone)]
pub struct MsgpackWriter {
    buf: Vec<u8>,
}

impl MsgpackWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer and returns the encoded bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Appends already-encoded bytes verbatim.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an unsigned integer in its smallest encoding.
    pub fn write_uint(&mut self, value: u64) -> Result<(), EncodingError> {
        encode::write_uint(&mut self.buf, value)
            .map(drop)
            .map_err(|e| msgpack_error("uint", e))
    }

    /// Writes a UTF-8 string.
    pub fn write_str(&mut self, field: &'static str, value: &str) -> Result<(), EncodingError> {
        checked_len(field, value.len())?;
        encode::write_str(&mut self.buf, value).map_err(|e| msgpack_error(field, e))
    }

    /// Writes a byte string.
    pub fn write_bin(&mut self, field: &'static str, value: &[u8]) -> Result<(), EncodingError> {
        checked_len(field, value.len())?;
        encode::write_bin(&mut self.buf, value).map_err(|e| msgpack_error(field, e))
    }

    /// Writes a map header for `entries` key/value pairs.
    pub fn write_map_len(&mut self, entries: usize) -> Result<(), EncodingError> {
        let len = checked_len("map", entries)?;
        encode::write_map_len(&mut self.buf, len)
            .map(drop)
            .map_err(|e| msgpack_error("map", e))
    }

    /// Writes an array header for `items` elements.
    pub fn write_array_len(&mut self, items: usize) -> Result<(), EncodingError> {
        let len = checked_len("array", items)?;
        encode::write_array_len(&mut self.buf, len)
            .map(drop)
            .map_err(|e| msgpack_error("array", e))
    }

    /// Writes one field value.
    pub fn write_value(&mut self, field: &'static str, value: &Value<'_>) -> Result<(), EncodingError> {
        match value {
            Value::Uint(n) => self.write_uint(*n),
            Value::Str(s) => self.write_str(field, s),
            Value::Bin(b) => self.write_bin(field, b),
        }
    }
}

fn checked_len(field: &'static str, len: usize) -> Result<u32, EncodingError> {
    u32::try_from(len)
        .ok()
        .filter(|_| len <= MAX_ENCODED_LENGTH)
        .ok_or(EncodingError::LengthOverflow {
            field,
            len,
            max: MAX_ENCODED_LENGTH,
        })
}

fn msgpack_error(field: &'static str, err: impl Display) -> EncodingError {
    EncodingError::Msgpack {
        field,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint_bytes(n: u64) -> Vec<u8> {
        let mut w = MsgpackWriter::new();
        w.write_uint(n).unwrap();
        w.into_inner()
    }

    #[test]
    fn uint_uses_smallest_form() {
        assert_eq!(uint_bytes(0), vec![0x00]);
        assert_eq!(uint_bytes(127), vec![0x7f]);
        assert_eq!(uint_bytes(128), vec![0xcc, 0x80]);
        assert_eq!(uint_bytes(1000), vec![0xcd, 0x03, 0xe8]);
        assert_eq!(uint_bytes(1_000_000), vec![0xce, 0x00, 0x0f, 0x42, 0x40]);
        assert_eq!(
            uint_bytes(u64::MAX),
            vec![0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn short_str_is_fixstr() {
        let mut w = MsgpackWriter::new();
        w.write_str("type", "pay").unwrap();
        assert_eq!(w.into_inner(), vec![0xa3, b'p', b'a', b'y']);
    }

    #[test]
    fn str_of_32_bytes_uses_str8() {
        let s = "x".repeat(32);
        let mut w = MsgpackWriter::new();
        w.write_str("gen", &s).unwrap();
        let out = w.into_inner();
        assert_eq!(&out[..2], &[0xd9, 32]);
        assert_eq!(out.len(), 34);
    }

    #[test]
    fn bin_headers_grow_with_length() {
        let mut w = MsgpackWriter::new();
        w.write_bin("note", &[1, 2, 3]).unwrap();
        assert_eq!(w.into_inner(), vec![0xc4, 3, 1, 2, 3]);

        let mut w = MsgpackWriter::new();
        w.write_bin("note", &[0u8; 300]).unwrap();
        let out = w.into_inner();
        assert_eq!(&out[..3], &[0xc5, 0x01, 0x2c]);
        assert_eq!(out.len(), 303);
    }

    #[test]
    fn container_headers() {
        let mut w = MsgpackWriter::new();
        w.write_map_len(9).unwrap();
        w.write_array_len(2).unwrap();
        w.write_map_len(16).unwrap();
        assert_eq!(w.into_inner(), vec![0x89, 0x92, 0xde, 0x00, 0x10]);
    }

    #[test]
    fn empty_bin_is_still_encodable() {
        let mut w = MsgpackWriter::new();
        w.write_bin("note", &[]).unwrap();
        assert_eq!(w.into_inner(), vec![0xc4, 0x00]);
    }

    #[test]
    fn oversized_lengths_are_rejected() {
        let err = checked_len("note", MAX_ENCODED_LENGTH + 1).unwrap_err();
        assert!(matches!(err, EncodingError::LengthOverflow { field: "note", .. }));
    }
}

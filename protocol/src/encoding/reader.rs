//! Strict MessagePack reader over an in-memory slice.
//!
//! Headers are parsed with `rmp::decode` and bodies are borrowed straight
//! from the input. Before each header the reader checks that the whole
//! header is present, so a truncated buffer yields a precise
//! [`DecodingError::Truncated`] instead of a partial value.

use rmp::{decode, Marker};

use super::Value;
use crate::error::DecodingError;

/// Deepest container nesting [`MsgpackReader::skip_value`] will follow.
pub const MAX_SKIP_DEPTH: usize = 32;

/// Cursor over a MessagePack-encoded byte slice.
#[derive(Debug, Clone)]
pub struct MsgpackReader<'a> {
    input: &'a [u8],
    rest: &'a [u8],
}

impl<'a> MsgpackReader<'a> {
    /// Creates a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            input: buf,
            rest: buf,
        }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    /// Slice of the input between `start` and the current offset.
    pub fn consumed_since(&self, start: usize) -> &'a [u8] {
        let end = self.offset();
        &self.input[start.min(end)..end]
    }

    /// Fails with [`DecodingError::TrailingBytes`] unless the input is used up.
    pub fn finish(&self) -> Result<(), DecodingError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(DecodingError::TrailingBytes {
                offset: self.offset(),
                remaining,
            }),
        }
    }

    /// Reads a map header and returns the entry count.
    pub fn read_map_len(&mut self) -> Result<usize, DecodingError> {
        self.header("map", |rd| decode::read_map_len(rd))
            .map(|len| len as usize)
    }

    /// Reads an array header and returns the element count.
    pub fn read_array_len(&mut self) -> Result<usize, DecodingError> {
        self.header("array", |rd| decode::read_array_len(rd))
            .map(|len| len as usize)
    }

    /// Reads a string. `field` names it in error messages.
    pub fn read_str(&mut self, field: &str) -> Result<&'a str, DecodingError> {
        let len = self.header("string", |rd| decode::read_str_len(rd))?;
        let bytes = self.take(len as usize)?;
        std::str::from_utf8(bytes).map_err(|_| DecodingError::InvalidUtf8 {
            field: field.to_string(),
        })
    }

    /// Reads a byte string.
    pub fn read_bin(&mut self) -> Result<&'a [u8], DecodingError> {
        let len = self.header("binary", |rd| decode::read_bin_len(rd))?;
        self.take(len as usize)
    }

    /// Reads one canonical field value: an unsigned integer, string or bytes.
    pub fn read_value(&mut self, field: &str) -> Result<Value<'a>, DecodingError> {
        const EXPECTED: &str = "unsigned integer, string or binary";

        let marker = self.peek_marker()?;
        match Marker::from_u8(marker) {
            Marker::FixPos(_) | Marker::U8 | Marker::U16 | Marker::U32 | Marker::U64 => self
                .header(EXPECTED, |rd| decode::read_int::<u64, _>(rd))
                .map(Value::Uint),
            Marker::FixStr(_) | Marker::Str8 | Marker::Str16 | Marker::Str32 => {
                self.read_str(field).map(Value::Str)
            }
            Marker::Bin8 | Marker::Bin16 | Marker::Bin32 => self.read_bin().map(Value::Bin),
            _ => Err(DecodingError::UnexpectedMarker {
                offset: self.offset(),
                expected: EXPECTED,
                marker,
            }),
        }
    }

    /// Skips one complete value of any MessagePack type.
    ///
    /// Containers deeper than [`MAX_SKIP_DEPTH`] are rejected with
    /// [`DecodingError::NestingTooDeep`].
    pub fn skip_value(&mut self) -> Result<(), DecodingError> {
        let start = self.offset();
        let mut cursor = self.rest;
        rmpv::decode::read_value_ref_with_max_depth(&mut cursor, MAX_SKIP_DEPTH).map_err(
            |err| match err {
                rmpv::decode::Error::DepthLimitExceeded => DecodingError::NestingTooDeep {
                    offset: start,
                    limit: MAX_SKIP_DEPTH,
                },
                other => DecodingError::Malformed {
                    offset: start,
                    reason: other.to_string(),
                },
            },
        )?;
        self.rest = cursor;
        Ok(())
    }

    fn peek_marker(&self) -> Result<u8, DecodingError> {
        self.rest.first().copied().ok_or(DecodingError::Truncated {
            offset: self.offset(),
            needed: 1,
            available: 0,
        })
    }

    // Runs one `rmp` header read on a copy of the cursor and only advances
    // when it succeeds. Any `rmp` failure past the length check is a marker
    // of the wrong kind.
    fn header<T, E>(
        &mut self,
        expected: &'static str,
        read: impl FnOnce(&mut &'a [u8]) -> Result<T, E>,
    ) -> Result<T, DecodingError> {
        let start = self.offset();
        let marker = self.peek_marker()?;
        let needed = header_len(Marker::from_u8(marker));
        if self.rest.len() < needed {
            return Err(DecodingError::Truncated {
                offset: start,
                needed,
                available: self.rest.len(),
            });
        }

        let mut cursor = self.rest;
        let value = read(&mut cursor).map_err(|_| DecodingError::UnexpectedMarker {
            offset: start,
            expected,
            marker,
        })?;
        self.rest = cursor;
        Ok(value)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodingError> {
        if self.rest.len() < n {
            return Err(DecodingError::Truncated {
                offset: self.offset(),
                needed: n,
                available: self.rest.len(),
            });
        }
        let (out, rest) = self.rest.split_at(n);
        self.rest = rest;
        Ok(out)
    }
}

/// Marker byte plus the fixed-width length or integer that follows it.
fn header_len(marker: Marker) -> usize {
    match marker {
        Marker::U8 | Marker::Str8 | Marker::Bin8 => 2,
        Marker::U16 | Marker::Str16 | Marker::Bin16 | Marker::Array16 | Marker::Map16 => 3,
        Marker::U32 | Marker::Str32 | Marker::Bin32 | Marker::Array32 | Marker::Map32 => 5,
        Marker::U64 => 9,
        _ => 1,
    }
}

//! # Canonical MessagePack
//!
//! The ledger's wire format is a strict subset of MessagePack. Transactions
//! are maps from short string keys to three kinds of value: unsigned
//! integers, UTF-8 strings and byte strings. Canonical form adds three rules
//! on top of plain MessagePack:
//!
//! 1. Integers use the smallest representation that fits.
//! 2. Byte strings are `bin`, never `str`; strings are `str`.
//! 3. Map keys follow a fixed per-type order and default values are omitted.
//!
//! Rules 1 and 2 are enforced by [`MsgpackWriter`] on top of `rmp`. Rule 3
//! belongs to the transaction layer, which knows the field tables.
//!
//! [`MsgpackReader`] is the strict inverse. It never panics on hostile input:
//! every length is checked against the remaining buffer before slicing, and
//! generic skipping (via `rmpv`) is depth-limited.

pub mod reader;
pub mod writer;

pub use reader::MsgpackReader;
pub use writer::MsgpackWriter;

/// A single canonical field value, borrowed from the input or the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Unsigned integer.
    Uint(u64),
    /// UTF-8 string.
    Str(&'a str),
    /// Raw bytes.
    Bin(&'a [u8]),
}

impl Value<'_> {
    /// Short name of the value kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Uint(_) => "unsigned integer",
            Value::Str(_) => "string",
            Value::Bin(_) => "binary",
        }
    }
}

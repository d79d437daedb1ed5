//! Error types for the transaction codec.
//!
//! There are two failure kinds at the boundary: the caller handed us a model
//! that cannot be represented ([`EncodingError`]), or bytes that cannot be
//! parsed ([`DecodingError`]). Each variant carries the offending field name
//! and/or byte offset so callers can inspect it without scraping the message.

use thiserror::Error;

use crate::transaction::TransactionType;

/// Errors raised while turning a model into canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A fixed-size input had the wrong number of bytes.
    #[error("{field} should be {expected} bytes, got {got}")]
    InvalidLength {
        /// Field being encoded.
        field: &'static str,
        /// Required length.
        expected: usize,
        /// Length supplied.
        got: usize,
    },

    /// An optional field was set to its default value. Canonical encoding
    /// represents that state only by omission.
    #[error("optional field `{field}` is present with its default value; leave it unset instead")]
    DefaultValuedOptional {
        /// Wire name of the field.
        field: &'static str,
    },

    /// A variable-length value is too long for the wire format.
    #[error("{field} is {len} bytes, exceeding the maximum encodable length of {max}")]
    LengthOverflow {
        /// Field being encoded.
        field: &'static str,
        /// Actual length.
        len: usize,
        /// Largest representable length.
        max: usize,
    },

    /// The MessagePack serializer failed.
    #[error("failed to write {field}: {reason}")]
    Msgpack {
        /// Field being encoded.
        field: &'static str,
        /// Serializer error message.
        reason: String,
    },

    /// The declared transaction type does not match the populated payload.
    #[error("transaction type is {declared} but the {populated} payload is populated")]
    TypeMismatch {
        /// Type tag supplied by the caller.
        declared: TransactionType,
        /// Payload that was actually populated.
        populated: TransactionType,
    },

    /// No type-specific payload was supplied.
    #[error("{0} transaction data missing")]
    MissingPayload(TransactionType),

    /// More than one type-specific payload was supplied.
    #[error("multiple transaction type specific fields set")]
    MultiplePayloads,

    /// A required field was not supplied.
    #[error("required field `{field}` is missing")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The transaction type is declared but has no payload layout.
    #[error("transaction type {0} is not implemented")]
    UnsupportedTransactionType(TransactionType),
}

/// Errors raised while parsing bytes or strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// Nothing to decode.
    #[error("attempted to decode 0 bytes")]
    Empty,

    /// The input ended before a complete value was read.
    #[error("unexpected end of input at byte {offset}: needed {needed} more bytes, {available} available")]
    Truncated {
        /// Offset where the read started.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },

    /// A MessagePack marker of the wrong kind was found.
    #[error("expected {expected} at byte {offset}, found marker 0x{marker:02x}")]
    UnexpectedMarker {
        /// Offset of the marker.
        offset: usize,
        /// What the decoder was looking for.
        expected: &'static str,
        /// Marker byte that was found.
        marker: u8,
    },

    /// Containers nested deeper than the reader will follow.
    #[error("value at byte {offset} is nested deeper than {limit} levels")]
    NestingTooDeep {
        /// Offset of the container that crossed the limit.
        offset: usize,
        /// Maximum depth.
        limit: usize,
    },

    /// The MessagePack parser rejected a value it was skipping over.
    #[error("malformed value at byte {offset}: {reason}")]
    Malformed {
        /// Offset of the value.
        offset: usize,
        /// Parser error message.
        reason: String,
    },

    /// A field held the wrong kind of value.
    #[error("field `{field}` should be {expected}, found {found}")]
    InvalidFieldType {
        /// Wire name of the field.
        field: String,
        /// Kind the layout requires.
        expected: &'static str,
        /// Kind that was found.
        found: &'static str,
    },

    /// A fixed-size field had the wrong number of bytes.
    #[error("field `{field}` should be {expected} bytes, got {got}")]
    InvalidLength {
        /// Wire name of the field.
        field: String,
        /// Required length.
        expected: usize,
        /// Length found.
        got: usize,
    },

    /// A string value was not valid UTF-8.
    #[error("field `{field}` is not valid UTF-8")]
    InvalidUtf8 {
        /// Wire name of the field (or `"<key>"` for map keys).
        field: String,
    },

    /// A key that is not part of the layout for this transaction type.
    #[error("unknown field `{field}` for {context}")]
    UnknownField {
        /// Key found on the wire.
        field: String,
        /// Structure being decoded.
        context: String,
    },

    /// A key appeared twice.
    #[error("duplicate field `{field}`")]
    DuplicateField {
        /// Repeated key.
        field: String,
    },

    /// Keys were not in canonical order.
    #[error("field `{field}` appears after `{previous}`, violating canonical order")]
    FieldOrder {
        /// Key that was out of place.
        field: String,
        /// Key that preceded it.
        previous: String,
    },

    /// A required field was absent.
    #[error("required field `{field}` is missing")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
    },

    /// A field was explicitly encoded with its default value.
    #[error("field `{field}` is encoded with its default value; canonical encoding omits it")]
    DefaultValue {
        /// Wire name of the field.
        field: String,
    },

    /// The type tag is not one this codec knows.
    #[error("unknown transaction type `{0}`")]
    UnknownTransactionType(String),

    /// The type tag is known but has no payload layout here.
    #[error("transaction type {0} is not supported by this decoder")]
    UnsupportedTransactionType(TransactionType),

    /// Bytes remained after the complete value was parsed.
    #[error("{remaining} trailing bytes after byte {offset}")]
    TrailingBytes {
        /// Offset where the value ended.
        offset: usize,
        /// Number of leftover bytes.
        remaining: usize,
    },

    /// The input parsed, but does not match the canonical re-encoding.
    #[error("input is not canonically encoded: {0}")]
    NonCanonical(String),

    /// An address string of the wrong length.
    #[error("address should be {expected} characters, got {got}")]
    InvalidAddressLength {
        /// Required length.
        expected: usize,
        /// Length found.
        got: usize,
    },

    /// An address string that is not valid base32.
    #[error("address is not valid base32: {0}")]
    InvalidAddressEncoding(String),

    /// An address whose checksum does not match its key.
    #[error("address checksum mismatch: expected {expected}, found {found}")]
    AddressChecksumMismatch {
        /// Hex of the checksum computed from the key.
        expected: String,
        /// Hex of the checksum carried by the string.
        found: String,
    },
}

/// Errors raised while assigning a group ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// An empty group has no ID.
    #[error("Transaction group size cannot be 0")]
    Empty,

    /// The ledger caps group size.
    #[error("Transaction group size exceeds the max limit of {max}, got {got}")]
    TooLarge {
        /// Maximum allowed group size.
        max: usize,
        /// Size supplied.
        got: usize,
    },

    /// A member already carries a group ID.
    #[error("Transactions must not be already grouped (transaction {index} has a group)")]
    AlreadyGrouped {
        /// Position of the grouped transaction.
        index: usize,
    },

    /// A member could not be encoded for hashing.
    #[error("failed to encode group member: {0}")]
    Encoding(#[from] EncodingError),
}

/// Top-level error returned by the operations facade.
///
/// The message prefixes (`EncodingError:` / `DecodingError:`) are part of the
/// contract with bindings that only see the rendered string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactError {
    /// The supplied model cannot be represented.
    #[error("EncodingError: {0}")]
    Encoding(#[from] EncodingError),

    /// The supplied bytes cannot be parsed.
    #[error("DecodingError: {0}")]
    Decoding(#[from] DecodingError),

    /// Group assignment failed.
    #[error("EncodingError: {0}")]
    Group(#[from] GroupError),

    /// Arguments that are inconsistent with each other.
    #[error("{0}")]
    Input(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_messages_carry_kind_prefix() {
        let enc: TransactError = EncodingError::MultiplePayloads.into();
        assert!(enc.to_string().starts_with("EncodingError: "));

        let dec: TransactError = DecodingError::Empty.into();
        assert_eq!(dec.to_string(), "DecodingError: attempted to decode 0 bytes");
    }

    #[test]
    fn truncated_message_names_offset() {
        let err = DecodingError::Truncated {
            offset: 12,
            needed: 32,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("byte 12"));
        assert!(msg.contains("32"));
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let err = EncodingError::TypeMismatch {
            declared: TransactionType::Payment,
            populated: TransactionType::AssetTransfer,
        };
        assert_eq!(
            err.to_string(),
            "transaction type is pay but the axfer payload is populated"
        );
    }
}

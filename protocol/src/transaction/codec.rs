//! Canonical transaction encoding and strict decoding.
//!
//! Each supported transaction type declares a static [`FieldLayout`]: the
//! complete list of wire keys it may carry, in emission order. The encoder
//! walks the layout and writes whichever fields are non-default. The decoder
//! accepts a map only if its keys are strictly ascending in that same order,
//! then re-encodes what it parsed and compares byte for byte.

use tracing::{debug, trace};

use super::{
    AssetTransferFields, PaymentFields, Transaction, TransactionHeader, TransactionPayload,
    TransactionType,
};
use crate::config::{Byte32, TRANSACTION_PREFIX};
use crate::encoding::{MsgpackReader, MsgpackWriter, Value};
use crate::error::{DecodingError, EncodingError};
use crate::identity::Address;

// ---------------------------------------------------------------------------
// Field layouts
// ---------------------------------------------------------------------------

/// The ordered set of wire keys a transaction type may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Name used in error messages.
    pub name: &'static str,
    /// Every permitted key, in canonical order.
    pub keys: &'static [&'static str],
}

impl FieldLayout {
    /// Index of `key` in the layout, or `None` if the type does not have it.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| *k == key)
    }
}

/// Layout for `pay` transactions.
pub const PAYMENT_LAYOUT: FieldLayout = FieldLayout {
    name: "payment transaction",
    keys: &[
        "amt", "close", "fee", "fv", "gen", "gh", "grp", "lv", "lx", "note", "rcv", "rekey",
        "snd", "type",
    ],
};

/// Layout for `axfer` transactions.
pub const ASSET_TRANSFER_LAYOUT: FieldLayout = FieldLayout {
    name: "asset transfer transaction",
    keys: &[
        "aamt", "aclose", "arcv", "asnd", "fee", "fv", "gen", "gh", "grp", "lv", "lx", "note",
        "rekey", "snd", "type", "xaid",
    ],
};

/// Returns the layout for a transaction type, or `None` if this crate has
/// no payload shape for it.
pub fn layout_for(tx_type: TransactionType) -> Option<&'static FieldLayout> {
    match tx_type {
        TransactionType::Payment => Some(&PAYMENT_LAYOUT),
        TransactionType::AssetTransfer => Some(&ASSET_TRANSFER_LAYOUT),
        _ => None,
    }
}

/// Removes a leading `TX` domain prefix, if present.
///
/// A buffer that is exactly `TX` is left alone; it is not a transaction
/// either way and the map reader reports it.
pub(crate) fn strip_prefix(bytes: &[u8]) -> &[u8] {
    if bytes.len() > TRANSACTION_PREFIX.len() && bytes.starts_with(TRANSACTION_PREFIX) {
        &bytes[TRANSACTION_PREFIX.len()..]
    } else {
        bytes
    }
}

// ---------------------------------------------------------------------------
// FieldWriter
// ---------------------------------------------------------------------------

/// Collects non-default fields, then writes them in layout order.
#[derive(Debug, Default)]
pub(crate) struct FieldWriter<'a> {
    entries: Vec<(&'static str, Value<'a>)>,
}

impl<'a> FieldWriter<'a> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::with_capacity(16),
        }
    }

    pub(crate) fn uint(&mut self, key: &'static str, value: u64) {
        if value != 0 {
            self.entries.push((key, Value::Uint(value)));
        }
    }

    pub(crate) fn str(&mut self, key: &'static str, value: &'a str) {
        if !value.is_empty() {
            self.entries.push((key, Value::Str(value)));
        }
    }

    pub(crate) fn address(&mut self, key: &'static str, value: &'a Address) {
        if !value.is_zero() {
            self.entries.push((key, Value::Bin(value.as_bytes())));
        }
    }

    pub(crate) fn opt_address(
        &mut self,
        key: &'static str,
        value: Option<&'a Address>,
    ) -> Result<(), EncodingError> {
        match value {
            None => Ok(()),
            Some(a) if a.is_zero() => Err(EncodingError::DefaultValuedOptional { field: key }),
            Some(a) => {
                self.entries.push((key, Value::Bin(a.as_bytes())));
                Ok(())
            }
        }
    }

    pub(crate) fn opt_byte32(
        &mut self,
        key: &'static str,
        value: Option<&'a Byte32>,
    ) -> Result<(), EncodingError> {
        match value {
            None => Ok(()),
            Some(b) if b.iter().all(|&x| x == 0) => {
                Err(EncodingError::DefaultValuedOptional { field: key })
            }
            Some(b) => {
                self.entries.push((key, Value::Bin(b)));
                Ok(())
            }
        }
    }

    /// Variable-length bytes: only the empty buffer is the default.
    pub(crate) fn opt_bytes(
        &mut self,
        key: &'static str,
        value: Option<&'a [u8]>,
    ) -> Result<(), EncodingError> {
        match value {
            None => Ok(()),
            Some([]) => Err(EncodingError::DefaultValuedOptional { field: key }),
            Some(b) => {
                self.entries.push((key, Value::Bin(b)));
                Ok(())
            }
        }
    }

    pub(crate) fn opt_str(
        &mut self,
        key: &'static str,
        value: Option<&'a str>,
    ) -> Result<(), EncodingError> {
        match value {
            None => Ok(()),
            Some("") => Err(EncodingError::DefaultValuedOptional { field: key }),
            Some(s) => {
                self.entries.push((key, Value::Str(s)));
                Ok(())
            }
        }
    }

    /// Writes the collected fields as one map, ordered by `layout`.
    pub(crate) fn write(
        self,
        layout: &FieldLayout,
        out: &mut MsgpackWriter,
    ) -> Result<(), EncodingError> {
        let ordered: Vec<&(&'static str, Value<'a>)> = layout
            .keys
            .iter()
            .filter_map(|key| self.entries.iter().find(|(k, _)| k == key))
            .collect();
        debug_assert_eq!(
            ordered.len(),
            self.entries.len(),
            "field outside the {} layout",
            layout.name
        );

        out.write_map_len(ordered.len())?;
        for &(key, value) in ordered {
            out.write_str(key, key)?;
            out.write_value(key, &value)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FieldReader
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct FieldEntry<'a> {
    key: &'a str,
    value: Value<'a>,
    taken: bool,
}

/// One parsed map, with each field consumed at most once.
#[derive(Debug)]
pub(crate) struct FieldReader<'a> {
    entries: Vec<FieldEntry<'a>>,
}

impl<'a> FieldReader<'a> {
    /// Reads a map of canonical field values. Order is not checked here.
    pub(crate) fn parse(reader: &mut MsgpackReader<'a>) -> Result<Self, DecodingError> {
        let count = reader.read_map_len()?;
        // The count is untrusted; let the reads fail before the allocation grows.
        let mut entries = Vec::with_capacity(count.min(32));
        for _ in 0..count {
            let key = reader.read_str("<key>")?;
            let value = reader.read_value(key)?;
            entries.push(FieldEntry {
                key,
                value,
                taken: false,
            });
        }
        Ok(Self { entries })
    }

    /// Consumes the `type` field and resolves it.
    pub(crate) fn transaction_type(&mut self) -> Result<TransactionType, DecodingError> {
        match self.take("type") {
            None => Err(DecodingError::MissingField { field: "type" }),
            Some(Value::Str(tag)) => TransactionType::from_tag(tag)
                .ok_or_else(|| DecodingError::UnknownTransactionType(tag.to_string())),
            Some(other) => Err(type_error("type", "string", other)),
        }
    }

    /// Checks that every key belongs to `layout` and keys strictly ascend.
    pub(crate) fn check_order(&self, layout: &FieldLayout) -> Result<(), DecodingError> {
        let mut previous: Option<(usize, &str)> = None;
        for entry in &self.entries {
            let pos = layout
                .position(entry.key)
                .ok_or_else(|| DecodingError::UnknownField {
                    field: entry.key.to_string(),
                    context: layout.name.to_string(),
                })?;
            if let Some((prev_pos, prev_key)) = previous {
                if pos == prev_pos {
                    return Err(DecodingError::DuplicateField {
                        field: entry.key.to_string(),
                    });
                }
                if pos < prev_pos {
                    return Err(DecodingError::FieldOrder {
                        field: entry.key.to_string(),
                        previous: prev_key.to_string(),
                    });
                }
            }
            previous = Some((pos, entry.key));
        }
        Ok(())
    }

    fn take(&mut self, key: &str) -> Option<Value<'a>> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| !e.taken && e.key == key)?;
        entry.taken = true;
        Some(entry.value)
    }

    pub(crate) fn uint(&mut self, key: &'static str) -> Result<u64, DecodingError> {
        match self.take(key) {
            None => Ok(0),
            Some(Value::Uint(0)) => Err(default_error(key)),
            Some(Value::Uint(n)) => Ok(n),
            Some(other) => Err(type_error(key, "unsigned integer", other)),
        }
    }

    pub(crate) fn opt_byte32(&mut self, key: &'static str) -> Result<Option<Byte32>, DecodingError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Bin(bytes)) => {
                let array: Byte32 =
                    bytes
                        .try_into()
                        .map_err(|_| DecodingError::InvalidLength {
                            field: key.to_string(),
                            expected: 32,
                            got: bytes.len(),
                        })?;
                if array.iter().all(|&b| b == 0) {
                    return Err(default_error(key));
                }
                Ok(Some(array))
            }
            Some(other) => Err(type_error(key, "binary", other)),
        }
    }

    pub(crate) fn opt_address(&mut self, key: &'static str) -> Result<Option<Address>, DecodingError> {
        Ok(self.opt_byte32(key)?.map(Address::from))
    }

    /// A required address; omission means the zero address.
    pub(crate) fn address(&mut self, key: &'static str) -> Result<Address, DecodingError> {
        Ok(self.opt_address(key)?.unwrap_or_default())
    }

    pub(crate) fn opt_bytes(&mut self, key: &'static str) -> Result<Option<Vec<u8>>, DecodingError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Bin([])) => Err(default_error(key)),
            Some(Value::Bin(bytes)) => Ok(Some(bytes.to_vec())),
            Some(other) => Err(type_error(key, "binary", other)),
        }
    }

    pub(crate) fn opt_str(&mut self, key: &'static str) -> Result<Option<String>, DecodingError> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Str("")) => Err(default_error(key)),
            Some(Value::Str(s)) => Ok(Some(s.to_string())),
            Some(other) => Err(type_error(key, "string", other)),
        }
    }

    /// Fails if any field was left unconsumed.
    pub(crate) fn finish(self, layout: &FieldLayout) -> Result<(), DecodingError> {
        match self.entries.into_iter().find(|e| !e.taken) {
            Some(entry) => Err(DecodingError::UnknownField {
                field: entry.key.to_string(),
                context: layout.name.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn type_error(field: &str, expected: &'static str, found: Value<'_>) -> DecodingError {
    DecodingError::InvalidFieldType {
        field: field.to_string(),
        expected,
        found: found.kind(),
    }
}

fn default_error(field: &str) -> DecodingError {
    DecodingError::DefaultValue {
        field: field.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Transaction encode / decode
// ---------------------------------------------------------------------------

impl TransactionPayload {
    /// Field layout for this payload's type.
    pub fn layout(&self) -> &'static FieldLayout {
        match self {
            Self::Payment(_) => &PAYMENT_LAYOUT,
            Self::AssetTransfer(_) => &ASSET_TRANSFER_LAYOUT,
        }
    }
}

impl Transaction {
    /// Canonical encoding without the `TX` prefix.
    ///
    /// This is the form embedded in a signed envelope and hashed for ids.
    pub fn encode_raw(&self) -> Result<Vec<u8>, EncodingError> {
        let tx_type = self.transaction_type();
        let mut fields = FieldWriter::new();
        self.header.write_fields(&mut fields)?;
        fields.str("type", tx_type.as_str());
        match &self.payload {
            TransactionPayload::Payment(p) => p.write_fields(&mut fields)?,
            TransactionPayload::AssetTransfer(a) => a.write_fields(&mut fields)?,
        }

        let mut out = MsgpackWriter::with_capacity(256);
        fields.write(self.payload.layout(), &mut out)?;
        let bytes = out.into_inner();
        trace!(tx_type = %tx_type, len = bytes.len(), "encoded transaction");
        Ok(bytes)
    }

    /// Canonical encoding with the `TX` prefix, ready for signing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledger_transact::transaction::{PaymentFields, TransactionBuilder};
    /// use ledger_transact::Address;
    ///
    /// let tx = TransactionBuilder::new(Address::from([1u8; 32]))
    ///     .fee(1000)
    ///     .payment(PaymentFields::new(Address::from([2u8; 32]), 5))
    ///     .build()
    ///     .unwrap();
    /// let bytes = tx.encode().unwrap();
    /// assert!(bytes.starts_with(b"TX"));
    /// ```
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        let raw = self.encode_raw()?;
        let mut out = Vec::with_capacity(TRANSACTION_PREFIX.len() + raw.len());
        out.extend_from_slice(TRANSACTION_PREFIX);
        out.extend_from_slice(&raw);
        Ok(out)
    }

    /// Strictly decodes a transaction, with or without the `TX` prefix.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodingError> {
        if bytes.is_empty() {
            return Err(DecodingError::Empty);
        }
        let mut reader = MsgpackReader::new(strip_prefix(bytes));
        let tx = Self::read_from(&mut reader)?;
        reader.finish()?;
        debug!(tx_type = %tx.transaction_type(), len = bytes.len(), "decoded transaction");
        Ok(tx)
    }

    /// Decodes one transaction map at the reader's position and checks that
    /// its bytes are exactly the canonical encoding.
    pub(crate) fn read_from(reader: &mut MsgpackReader<'_>) -> Result<Self, DecodingError> {
        let start = reader.offset();
        let mut fields = FieldReader::parse(reader)?;

        let tx_type = fields.transaction_type()?;
        let layout = layout_for(tx_type).ok_or(DecodingError::UnsupportedTransactionType(tx_type))?;
        fields.check_order(layout)?;

        let header = TransactionHeader::read_fields(&mut fields)?;
        let payload = match tx_type {
            TransactionType::Payment => {
                TransactionPayload::Payment(PaymentFields::read_fields(&mut fields)?)
            }
            TransactionType::AssetTransfer => {
                TransactionPayload::AssetTransfer(AssetTransferFields::read_fields(&mut fields)?)
            }
            other => return Err(DecodingError::UnsupportedTransactionType(other)),
        };
        fields.finish(layout)?;

        let tx = Self { header, payload };
        let input = reader.consumed_since(start);
        let canonical = tx
            .encode_raw()
            .map_err(|e| DecodingError::NonCanonical(e.to_string()))?;
        if canonical != input {
            return Err(DecodingError::NonCanonical(format!(
                "{} input bytes re-encode to {} different bytes",
                input.len(),
                canonical.len()
            )));
        }
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionBuilder;

    fn addr(byte: u8) -> Address {
        Address::from([byte; 32])
    }

    fn payment() -> Transaction {
        TransactionBuilder::new(addr(1))
            .fee(1000)
            .first_valid(100)
            .last_valid(1000)
            .payment(PaymentFields::new(addr(2), 1_000_000))
            .build()
            .unwrap()
    }

    fn asset_transfer() -> Transaction {
        let mut fields = AssetTransferFields::new(31566704, addr(3), 2500);
        fields.asset_sender = Some(addr(4));
        fields.close_remainder_to = Some(addr(5));
        TransactionBuilder::new(addr(1))
            .fee(2000)
            .first_valid(7)
            .last_valid(1007)
            .genesis_id("mainnet-v1.0")
            .genesis_hash([9u8; 32])
            .note(b"hello".to_vec())
            .rekey_to(addr(6))
            .lease([7u8; 32])
            .group([8u8; 32])
            .asset_transfer(fields)
            .build()
            .unwrap()
    }

    /// Writes a map of hand-picked entries, bypassing the canonical encoder.
    fn raw_map(entries: &[(&'static str, Value<'_>)]) -> Vec<u8> {
        let mut w = MsgpackWriter::new();
        w.write_map_len(entries.len()).unwrap();
        for (key, value) in entries {
            w.write_str(key, key).unwrap();
            w.write_value(key, value).unwrap();
        }
        w.into_inner()
    }

    #[test]
    fn layouts_are_strictly_ascending() {
        for layout in [&PAYMENT_LAYOUT, &ASSET_TRANSFER_LAYOUT] {
            assert!(layout.keys.windows(2).all(|w| w[0] < w[1]), "{}", layout.name);
            assert!(layout.position("type").is_some());
            assert!(layout.position("snd").is_some());
        }
    }

    #[test]
    fn unsupported_types_have_no_layout() {
        assert!(layout_for(TransactionType::KeyRegistration).is_none());
        assert!(layout_for(TransactionType::ApplicationCall).is_none());
        assert_eq!(layout_for(TransactionType::Payment), Some(&PAYMENT_LAYOUT));
    }

    #[test]
    fn strip_prefix_rules() {
        assert_eq!(strip_prefix(b"TXab"), b"ab");
        assert_eq!(strip_prefix(b"TX"), b"TX");
        assert_eq!(strip_prefix(b"ab"), b"ab");
    }

    #[test]
    fn payment_roundtrip() {
        let tx = payment();
        let bytes = tx.encode().unwrap();
        assert_eq!(Transaction::decode(&bytes).unwrap(), tx);
        assert_eq!(Transaction::decode(&bytes[2..]).unwrap(), tx);
    }

    #[test]
    fn asset_transfer_with_every_field_roundtrips() {
        let tx = asset_transfer();
        let bytes = tx.encode_raw().unwrap();
        // 16 keys needs a map16 header.
        assert_eq!(bytes[0], 0xde);
        assert_eq!(Transaction::decode(&bytes).unwrap(), tx);
    }

    #[test]
    fn omits_defaults_but_always_writes_type() {
        let tx = TransactionBuilder::new(Address::zero())
            .payment(PaymentFields::default())
            .build()
            .unwrap();
        let bytes = tx.encode_raw().unwrap();
        assert_eq!(bytes, vec![0x81, 0xa4, b't', b'y', b'p', b'e', 0xa3, b'p', b'a', b'y']);
        assert_eq!(Transaction::decode(&bytes).unwrap(), tx);
    }

    #[test]
    fn encoder_rejects_hand_built_default_optional() {
        let mut tx = payment();
        tx.header.note = Some(Vec::new());
        assert_eq!(
            tx.encode(),
            Err(EncodingError::DefaultValuedOptional { field: "note" })
        );

        let mut tx = payment();
        tx.header.lease = Some([0u8; 32]);
        assert_eq!(
            tx.encode_raw(),
            Err(EncodingError::DefaultValuedOptional { field: "lx" })
        );
    }

    #[test]
    fn all_zero_note_is_encoded() {
        let mut tx = payment();
        tx.header.note = Some(vec![0u8; 3]);
        let bytes = tx.encode().unwrap();
        assert_eq!(Transaction::decode(&bytes).unwrap().header.note, Some(vec![0u8; 3]));
    }

    #[test]
    fn decode_empty_input() {
        assert_eq!(Transaction::decode(&[]), Err(DecodingError::Empty));
    }

    #[test]
    fn decode_missing_type() {
        let bytes = raw_map(&[("fee", Value::Uint(1000))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::MissingField { field: "type" })
        );
    }

    #[test]
    fn decode_unknown_and_unsupported_types() {
        let bytes = raw_map(&[("type", Value::Str("xyz"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::UnknownTransactionType("xyz".into()))
        );

        let bytes = raw_map(&[("type", Value::Str("keyreg"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::UnsupportedTransactionType(
                TransactionType::KeyRegistration
            ))
        );
    }

    #[test]
    fn decode_type_of_wrong_kind() {
        let bytes = raw_map(&[("type", Value::Uint(1))]);
        assert!(matches!(
            Transaction::decode(&bytes),
            Err(DecodingError::InvalidFieldType { field, .. }) if field == "type"
        ));
    }

    #[test]
    fn decode_rejects_out_of_order_keys() {
        let bytes = raw_map(&[("fee", Value::Uint(1000)), ("amt", Value::Uint(5)), ("type", Value::Str("pay"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::FieldOrder {
                field: "amt".into(),
                previous: "fee".into()
            })
        );
    }

    #[test]
    fn decode_rejects_duplicate_keys() {
        let bytes = raw_map(&[
            ("fee", Value::Uint(1000)),
            ("fee", Value::Uint(2000)),
            ("type", Value::Str("pay")),
        ]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::DuplicateField { field: "fee".into() })
        );
    }

    #[test]
    fn decode_rejects_foreign_keys() {
        // `xaid` belongs to asset transfers, not payments.
        let bytes = raw_map(&[("type", Value::Str("pay")), ("xaid", Value::Uint(1))]);
        assert!(matches!(
            Transaction::decode(&bytes),
            Err(DecodingError::UnknownField { field, .. }) if field == "xaid"
        ));
    }

    #[test]
    fn decode_rejects_explicit_defaults() {
        let bytes = raw_map(&[("fee", Value::Uint(0)), ("type", Value::Str("pay"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::DefaultValue { field: "fee".into() })
        );

        let bytes = raw_map(&[("note", Value::Bin(&[])), ("type", Value::Str("pay"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::DefaultValue { field: "note".into() })
        );

        let zero = [0u8; 32];
        let bytes = raw_map(&[("rcv", Value::Bin(&zero)), ("type", Value::Str("pay"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::DefaultValue { field: "rcv".into() })
        );
    }

    #[test]
    fn decode_rejects_short_address() {
        let bytes = raw_map(&[("snd", Value::Bin(&[1u8; 31])), ("type", Value::Str("pay"))]);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::InvalidLength {
                field: "snd".into(),
                expected: 32,
                got: 31
            })
        );
    }

    #[test]
    fn decode_rejects_string_where_bytes_expected() {
        let bytes = raw_map(&[("note", Value::Str("hi")), ("type", Value::Str("pay"))]);
        assert!(matches!(
            Transaction::decode(&bytes),
            Err(DecodingError::InvalidFieldType { field, expected: "binary", found: "string" })
                if field == "note"
        ));
    }

    #[test]
    fn decode_rejects_non_minimal_integer() {
        // 1000 as uint32 instead of uint16.
        let mut bytes = vec![0x82, 0xa3, b'f', b'e', b'e', 0xce, 0x00, 0x00, 0x03, 0xe8];
        bytes.extend_from_slice(&[0xa4, b't', b'y', b'p', b'e', 0xa3, b'p', b'a', b'y']);
        assert!(matches!(
            Transaction::decode(&bytes),
            Err(DecodingError::NonCanonical(_))
        ));
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let mut bytes = payment().encode().unwrap();
        let len = bytes.len();
        bytes.push(0x00);
        assert_eq!(
            Transaction::decode(&bytes),
            Err(DecodingError::TrailingBytes {
                offset: len - 2,
                remaining: 1
            })
        );
    }

    #[test]
    fn every_strict_prefix_fails() {
        let bytes = asset_transfer().encode().unwrap();
        for end in 0..bytes.len() {
            assert!(Transaction::decode(&bytes[..end]).is_err(), "prefix of {end} bytes");
        }
    }
}

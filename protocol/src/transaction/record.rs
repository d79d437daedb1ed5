//! Flat, serde-friendly transaction form.
//!
//! [`TransactionRecord`] is the shape exchanged with language bindings and
//! the command line: a type tag, the header fields, and one optional field
//! per payload kind. Addresses are strings and byte fields are hex. Because
//! the tag and the payload fields are independent here, this is the one
//! place a type/payload mismatch can be expressed, and converting into a
//! [`Transaction`] rejects it.

use serde::{Deserialize, Serialize};

use super::asset_transfer::AssetTransferFields;
use super::builder::{Transaction, TransactionPayload};
use super::header::TransactionHeader;
use super::payment::PaymentFields;
use super::types::TransactionType;
use crate::config::{Byte32, HASH_LENGTH};
use crate::error::EncodingError;
use crate::identity::Address;

/// Payment fields in record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub receiver: Address,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_remainder_to: Option<Address>,
}

/// Asset transfer fields in record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTransferRecord {
    pub asset_id: u64,
    pub amount: u64,
    pub receiver: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_sender: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_remainder_to: Option<Address>,
}

/// A transaction as a flat record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_type: TransactionType,
    pub sender: Address,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub first_valid: u64,
    #[serde(default)]
    pub last_valid: u64,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_opt")]
    pub genesis_hash: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_opt")]
    pub note: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rekey_to: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_opt")]
    pub lease: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hex_opt")]
    pub group: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_transfer: Option<AssetTransferRecord>,
}

impl From<Transaction> for TransactionRecord {
    fn from(tx: Transaction) -> Self {
        let transaction_type = tx.transaction_type();
        let header = tx.header;
        let (payment, asset_transfer) = match tx.payload {
            TransactionPayload::Payment(p) => (
                Some(PaymentRecord {
                    receiver: p.receiver,
                    amount: p.amount,
                    close_remainder_to: p.close_remainder_to,
                }),
                None,
            ),
            TransactionPayload::AssetTransfer(a) => (
                None,
                Some(AssetTransferRecord {
                    asset_id: a.asset_id,
                    amount: a.amount,
                    receiver: a.receiver,
                    asset_sender: a.asset_sender,
                    close_remainder_to: a.close_remainder_to,
                }),
            ),
        };
        Self {
            transaction_type,
            sender: header.sender,
            fee: header.fee,
            first_valid: header.first_valid,
            last_valid: header.last_valid,
            genesis_hash: header.genesis_hash.map(|h| h.to_vec()),
            genesis_id: header.genesis_id,
            note: header.note,
            rekey_to: header.rekey_to,
            lease: header.lease.map(|l| l.to_vec()),
            group: header.group.map(|g| g.to_vec()),
            payment,
            asset_transfer,
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = EncodingError;

    /// Validates the record and normalizes default-valued optionals.
    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        if record.payment.is_some() && record.asset_transfer.is_some() {
            return Err(EncodingError::MultiplePayloads);
        }
        let declared = record.transaction_type;

        let payload = match (declared, record.payment, record.asset_transfer) {
            (TransactionType::Payment, Some(p), None) => TransactionPayload::Payment(PaymentFields {
                receiver: p.receiver,
                amount: p.amount,
                close_remainder_to: p.close_remainder_to,
            }),
            (TransactionType::AssetTransfer, None, Some(a)) => {
                TransactionPayload::AssetTransfer(AssetTransferFields {
                    asset_id: a.asset_id,
                    amount: a.amount,
                    receiver: a.receiver,
                    asset_sender: a.asset_sender,
                    close_remainder_to: a.close_remainder_to,
                })
            }
            (t, _, _) if !t.is_supported() => {
                return Err(EncodingError::UnsupportedTransactionType(t))
            }
            (t, Some(_), _) => {
                return Err(EncodingError::TypeMismatch {
                    declared: t,
                    populated: TransactionType::Payment,
                })
            }
            (t, _, Some(_)) => {
                return Err(EncodingError::TypeMismatch {
                    declared: t,
                    populated: TransactionType::AssetTransfer,
                })
            }
            (t, None, None) => return Err(EncodingError::MissingPayload(t)),
        };

        let header = TransactionHeader {
            sender: record.sender,
            fee: record.fee,
            first_valid: record.first_valid,
            last_valid: record.last_valid,
            genesis_hash: record.genesis_hash.map(|h| to_byte32("genesis_hash", h)).transpose()?,
            genesis_id: record.genesis_id,
            note: record.note,
            rekey_to: record.rekey_to,
            lease: record.lease.map(|l| to_byte32("lease", l)).transpose()?,
            group: record.group.map(|g| to_byte32("group", g)).transpose()?,
        };

        let mut tx = Transaction { header, payload };
        tx.normalize();
        Ok(tx)
    }
}

fn to_byte32(field: &'static str, bytes: Vec<u8>) -> Result<Byte32, EncodingError> {
    let got = bytes.len();
    bytes.try_into().map_err(|_| EncodingError::InvalidLength {
        field,
        expected: HASH_LENGTH,
        got,
    })
}

/// Hex (de)serialization for optional byte fields.
mod hex_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => s.serialize_some(&hex::encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

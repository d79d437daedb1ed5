//! The transaction model and its builder.
//!
//! A [`Transaction`] is a common [`TransactionHeader`] plus exactly one
//! [`TransactionPayload`]. The type discriminant is derived from the payload
//! variant, so a transaction whose declared type disagrees with its payload
//! cannot be constructed.

use serde::{Deserialize, Serialize};

use super::asset_transfer::AssetTransferFields;
use super::header::TransactionHeader;
use super::payment::PaymentFields;
use super::types::TransactionType;
use crate::config::Byte32;
use crate::error::EncodingError;
use crate::identity::Address;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// Type-specific transaction data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionPayload {
    /// `pay`
    Payment(PaymentFields),
    /// `axfer`
    AssetTransfer(AssetTransferFields),
}

impl TransactionPayload {
    /// The discriminant matching this variant.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Payment(_) => TransactionType::Payment,
            Self::AssetTransfer(_) => TransactionType::AssetTransfer,
        }
    }

    fn normalize(&mut self) {
        match self {
            Self::Payment(p) => p.normalize(),
            Self::AssetTransfer(a) => a.normalize(),
        }
    }
}

impl From<PaymentFields> for TransactionPayload {
    fn from(fields: PaymentFields) -> Self {
        Self::Payment(fields)
    }
}

impl From<AssetTransferFields> for TransactionPayload {
    fn from(fields: AssetTransferFields) -> Self {
        Self::AssetTransfer(fields)
    }
}

/// An unsigned ledger transaction.
///
/// Encoding lives in [`super::codec`]; ids and size estimates in
/// [`super::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Fields common to every transaction type.
    pub header: TransactionHeader,
    /// The type-specific fields.
    pub payload: TransactionPayload,
}

impl Transaction {
    /// Assembles a transaction from parts, as-is.
    ///
    /// Unlike [`TransactionBuilder::build`] this does not normalize
    /// default-valued optionals; the encoder will reject them.
    pub fn new(header: TransactionHeader, payload: impl Into<TransactionPayload>) -> Self {
        Self {
            header,
            payload: payload.into(),
        }
    }

    /// The discriminant written to the `type` field.
    pub fn transaction_type(&self) -> TransactionType {
        self.payload.transaction_type()
    }

    /// Returns `true` if a group id has been assigned.
    pub fn is_grouped(&self) -> bool {
        self.header.group.is_some()
    }

    /// The payment fields, if this is a payment.
    pub fn as_payment(&self) -> Option<&PaymentFields> {
        match &self.payload {
            TransactionPayload::Payment(p) => Some(p),
            _ => None,
        }
    }

    /// The asset transfer fields, if this is an asset transfer.
    pub fn as_asset_transfer(&self) -> Option<&AssetTransferFields> {
        match &self.payload {
            TransactionPayload::AssetTransfer(a) => Some(a),
            _ => None,
        }
    }

    /// Replaces every `Some(default)` optional with `None`.
    pub fn normalize(&mut self) {
        self.header.normalize();
        self.payload.normalize();
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Transaction`] instances.
///
/// # Usage
///
/// ```rust
/// use ledger_transact::transaction::{PaymentFields, TransactionBuilder, TransactionType};
/// use ledger_transact::Address;
///
/// let sender = Address::from([1u8; 32]);
/// let receiver = Address::from([2u8; 32]);
///
/// let tx = TransactionBuilder::new(sender)
///     .fee(1_000)
///     .first_valid(100)
///     .last_valid(1_100)
///     .genesis_id("testnet-v1.0")
///     .payment(PaymentFields::new(receiver, 1_000_000))
///     .build()
///     .unwrap();
///
/// assert_eq!(tx.transaction_type(), TransactionType::Payment);
/// ```
///
/// `build()` normalizes optionals, so setting a default (an empty note, the
/// zero address) is the same as not setting it.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    header: TransactionHeader,
    payloads: Vec<TransactionPayload>,
}

impl TransactionBuilder {
    /// Creates a builder for a transaction sent by `sender`.
    ///
    /// Numeric fields default to zero and optionals to unset.
    pub fn new(sender: Address) -> Self {
        Self {
            header: TransactionHeader {
                sender,
                ..TransactionHeader::default()
            },
            payloads: Vec::with_capacity(1),
        }
    }

    /// Starts from an existing header.
    pub fn from_header(header: TransactionHeader) -> Self {
        Self {
            header,
            payloads: Vec::with_capacity(1),
        }
    }

    pub fn fee(mut self, fee: u64) -> Self {
        self.header.fee = fee;
        self
    }

    pub fn first_valid(mut self, round: u64) -> Self {
        self.header.first_valid = round;
        self
    }

    pub fn last_valid(mut self, round: u64) -> Self {
        self.header.last_valid = round;
        self
    }

    pub fn genesis_hash(mut self, hash: Byte32) -> Self {
        self.header.genesis_hash = Some(hash);
        self
    }

    pub fn genesis_id(mut self, id: impl Into<String>) -> Self {
        self.header.genesis_id = Some(id.into());
        self
    }

    pub fn note(mut self, note: Vec<u8>) -> Self {
        self.header.note = Some(note);
        self
    }

    /// Hands spending authority for the sender account to `address`.
    pub fn rekey_to(mut self, address: Address) -> Self {
        self.header.rekey_to = Some(address);
        self
    }

    pub fn lease(mut self, lease: Byte32) -> Self {
        self.header.lease = Some(lease);
        self
    }

    /// Sets the group id directly. Usually assigned by
    /// [`super::group::group_transactions`] instead.
    pub fn group(mut self, group: Byte32) -> Self {
        self.header.group = Some(group);
        self
    }

    /// Makes this a payment.
    pub fn payment(mut self, fields: PaymentFields) -> Self {
        self.payloads.push(TransactionPayload::Payment(fields));
        self
    }

    /// Makes this an asset transfer.
    pub fn asset_transfer(mut self, fields: AssetTransferFields) -> Self {
        self.payloads.push(TransactionPayload::AssetTransfer(fields));
        self
    }

    /// Consumes the builder and produces a normalized [`Transaction`].
    ///
    /// Fails if no payload or more than one payload was supplied.
    pub fn build(mut self) -> Result<Transaction, EncodingError> {
        if self.payloads.len() > 1 {
            return Err(EncodingError::MultiplePayloads);
        }
        let payload = self
            .payloads
            .pop()
            .ok_or(EncodingError::MissingField { field: "payload" })?;

        let mut tx = Transaction {
            header: self.header,
            payload,
        };
        tx.normalize();
        Ok(tx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! # Operations
//!
//! The codec's external surface as plain functions over bytes, strings and
//! records. Each returns [`TransactError`], whose rendered message starts
//! with `EncodingError:` or `DecodingError:`, so a binding that can only
//! pass strings across still tells the two apart.

use crate::config::{Byte32, LedgerConstant};
use crate::error::TransactError;
use crate::identity::Address;
use crate::transaction::{self, Transaction, TransactionRecord, TransactionType};

/// Derives the address for a 32-byte public key.
pub fn address_from_pub_key(pub_key: &[u8]) -> Result<Address, TransactError> {
    Ok(Address::from_pubkey_slice(pub_key)?)
}

/// Parses and validates an address string.
pub fn address_from_string(address: &str) -> Result<Address, TransactError> {
    Ok(Address::from_string(address)?)
}

/// Encodes a transaction with the `TX` prefix.
pub fn encode_transaction(tx: &Transaction) -> Result<Vec<u8>, TransactError> {
    Ok(tx.encode()?)
}

/// Encodes each transaction with the `TX` prefix, stopping at the first
/// failure.
pub fn encode_transactions(txs: &[Transaction]) -> Result<Vec<Vec<u8>>, TransactError> {
    txs.iter().map(encode_transaction).collect()
}

/// Encodes a transaction without the `TX` prefix.
pub fn encode_transaction_raw(tx: &Transaction) -> Result<Vec<u8>, TransactError> {
    Ok(tx.encode_raw()?)
}

/// Validates a record and encodes it with the `TX` prefix.
pub fn encode_transaction_record(record: TransactionRecord) -> Result<Vec<u8>, TransactError> {
    let tx = Transaction::try_from(record)?;
    encode_transaction(&tx)
}

/// Strictly decodes a transaction, with or without the `TX` prefix.
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction, TransactError> {
    Ok(Transaction::decode(bytes)?)
}

/// Wraps encoded transaction bytes and a 64-byte signature in an envelope.
pub fn attach_signature(encoded_tx: &[u8], signature: &[u8]) -> Result<Vec<u8>, TransactError> {
    Ok(transaction::attach_signature(encoded_tx, signature)?)
}

/// Pairs transactions with signatures positionally.
///
/// The two slices must be the same length.
pub fn attach_signatures<T, S>(
    encoded_txs: &[T],
    signatures: &[S],
) -> Result<Vec<Vec<u8>>, TransactError>
where
    T: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    if encoded_txs.len() != signatures.len() {
        return Err(TransactError::Input(format!(
            "Number of transactions ({}) and signatures ({}) must match",
            encoded_txs.len(),
            signatures.len()
        )));
    }
    encoded_txs
        .iter()
        .zip(signatures)
        .map(|(tx, sig)| attach_signature(tx.as_ref(), sig.as_ref()))
        .collect()
}

/// Returns the type tag of an encoded transaction without decoding it.
pub fn get_encoded_transaction_type(bytes: &[u8]) -> Result<TransactionType, TransactError> {
    Ok(transaction::peek_transaction_type(bytes)?)
}

/// The 52-character transaction id.
pub fn transaction_id(tx: &Transaction) -> Result<String, TransactError> {
    Ok(tx.id()?)
}

/// The 32-byte transaction id.
pub fn transaction_id_raw(tx: &Transaction) -> Result<Byte32, TransactError> {
    Ok(tx.id_raw()?)
}

/// Returns copies of `txs` sharing a freshly computed group id.
pub fn group_transactions(txs: &[Transaction]) -> Result<Vec<Transaction>, TransactError> {
    Ok(transaction::group_transactions(txs)?)
}

/// Encoded size of `tx` once signed, for fee estimation.
pub fn estimate_transaction_size(tx: &Transaction) -> Result<u64, TransactError> {
    let size = tx.estimate_size()?;
    u64::try_from(size).map_err(|_| TransactError::Input(format!("size {size} exceeds u64")))
}

/// Numeric value of a named ledger constant.
pub fn get_constant(constant: LedgerConstant) -> u64 {
    constant.value()
}

//! Transaction ids and signed-size estimates.

use data_encoding::BASE32_NOPAD;

use super::builder::Transaction;
use super::signed::SignedTransaction;
use crate::config::{Byte32, SIGNATURE_ENCODING_INCREMENT, TRANSACTION_PREFIX};
use crate::crypto::prefixed_hash;
use crate::error::EncodingError;

impl Transaction {
    /// SHA-512/256 of the prefixed canonical encoding.
    pub fn id_raw(&self) -> Result<Byte32, EncodingError> {
        let raw = self.encode_raw()?;
        Ok(prefixed_hash(TRANSACTION_PREFIX, &raw))
    }

    /// The id as shown by explorers: 52 characters of unpadded base32.
    pub fn id(&self) -> Result<String, EncodingError> {
        Ok(BASE32_NOPAD.encode(&self.id_raw()?))
    }

    /// Size of this transaction once wrapped in a signed envelope.
    ///
    /// The envelope adds a fixed overhead for a single 64-byte signature, so
    /// the estimate is exact for single-signature transactions.
    pub fn estimate_size(&self) -> Result<usize, EncodingError> {
        Ok(self.encode_raw()?.len() + SIGNATURE_ENCODING_INCREMENT)
    }
}

impl SignedTransaction {
    /// The id of the wrapped transaction; the signature does not affect it.
    pub fn id(&self) -> Result<String, EncodingError> {
        self.transaction.id()
    }
}

//! # Hashing Utilities
//!
//! The ledger uses a single hash function everywhere: **SHA-512/256**, the
//! SHA-512 compression function with a distinct IV, truncated to 32 bytes.
//! It backs address checksums, transaction IDs and group IDs.
//!
//! Domain separation is done the way the ledger does it: a short ASCII tag
//! (`TX`, `TG`) is prepended to the message. [`prefixed_hash`] feeds the tag
//! and the message into the hasher sequentially so callers never have to
//! build the concatenated buffer themselves.

use sha2::{Digest, Sha512_256};

use crate::config::{Byte32, CHECKSUM_LENGTH, HASH_LENGTH};

/// Compute the SHA-512/256 digest of `data`.
///
/// # Example
///
/// ```
/// use ledger_transact::crypto::sha512_256;
///
/// let digest = sha512_256(b"ledger");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha512_256(data: &[u8]) -> Byte32 {
    let mut hasher = Sha512_256::new();
    hasher.update(data);
    let mut output = [0u8; HASH_LENGTH];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Hash `data` behind a domain-separation `prefix`.
///
/// Equivalent to `sha512_256(prefix || data)` without the intermediate buffer.
pub fn prefixed_hash(prefix: &[u8], data: &[u8]) -> Byte32 {
    let mut hasher = Sha512_256::new();
    hasher.update(prefix);
    hasher.update(data);
    let mut output = [0u8; HASH_LENGTH];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Address checksum: the last [`CHECKSUM_LENGTH`] bytes of the key's digest.
pub fn checksum(public_key: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = sha512_256(public_key);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[HASH_LENGTH - CHECKSUM_LENGTH..]);
    out
}

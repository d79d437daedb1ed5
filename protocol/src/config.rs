//! # Protocol Configuration & Constants
//!
//! Every magic number the codec depends on lives here. These values are
//! fixed by the ledger's wire format. Changing any of them changes the bytes
//! that signatures and transaction IDs are computed over, so treat this
//! file as consensus-critical.

/// Version of this codec crate, reported by the command-line tool.
pub const CODEC_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Key & Hash Sizes
// ---------------------------------------------------------------------------

/// Ed25519 public key length in bytes. An address is a public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 secret key length in bytes. Reported for callers sizing key
/// buffers; the codec itself never handles secret keys.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. The envelope only ever carries this size.
pub const SIGNATURE_LENGTH: usize = 64;

/// SHA-512/256 digest length. Used for checksums, transaction IDs and group IDs.
pub const HASH_LENGTH: usize = 32;

/// Number of trailing digest bytes appended to a public key as its checksum.
pub const CHECKSUM_LENGTH: usize = 4;

/// Length of the base32 (unpadded) address string: `ceil((32 + 4) * 8 / 5)`.
pub const ADDRESS_LENGTH: usize = 58;

/// Length of the base32 (unpadded) transaction ID string.
pub const TRANSACTION_ID_LENGTH: usize = 52;

/// Fixed 32-byte value (genesis hash, lease, group ID).
pub type Byte32 = [u8; HASH_LENGTH];

// ---------------------------------------------------------------------------
// Domain Separation
// ---------------------------------------------------------------------------

/// Prefix prepended to an encoded transaction before hashing or signing.
pub const TRANSACTION_PREFIX: &[u8] = b"TX";

/// Prefix prepended to the encoded transaction list when hashing a group ID.
pub const TRANSACTION_GROUP_PREFIX: &[u8] = b"TG";

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum number of transactions in an atomic group.
pub const MAX_TX_GROUP_SIZE: usize = 16;

/// Largest length a MessagePack `bin`/`str`/map header can express.
pub const MAX_ENCODED_LENGTH: usize = u32::MAX as usize;

/// Bytes added to a raw encoded transaction when it is wrapped in a signed
/// envelope with a 64-byte signature:
/// map header (1) + `"sig"` (4) + bin8 header (2) + signature (64) + `"txn"` (4).
pub const SIGNATURE_ENCODING_INCREMENT: usize = 75;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Named numeric constants, for callers that cannot link against the
/// `const` items directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerConstant {
    HashLength,
    ChecksumLength,
    AddressLength,
    PublicKeyLength,
    SecretKeyLength,
    SignatureLength,
    /// Size added to a raw transaction by a signed envelope.
    SignatureEncodingIncrement,
    MaxTxGroupSize,
}

impl LedgerConstant {
    pub const ALL: [LedgerConstant; 8] = [
        LedgerConstant::HashLength,
        LedgerConstant::ChecksumLength,
        LedgerConstant::AddressLength,
        LedgerConstant::PublicKeyLength,
        LedgerConstant::SecretKeyLength,
        LedgerConstant::SignatureLength,
        LedgerConstant::SignatureEncodingIncrement,
        LedgerConstant::MaxTxGroupSize,
    ];

    /// Numeric value of the constant.
    pub fn value(self) -> u64 {
        let value = match self {
            LedgerConstant::HashLength => HASH_LENGTH,
            LedgerConstant::ChecksumLength => CHECKSUM_LENGTH,
            LedgerConstant::AddressLength => ADDRESS_LENGTH,
            LedgerConstant::PublicKeyLength => PUBLIC_KEY_LENGTH,
            LedgerConstant::SecretKeyLength => SECRET_KEY_LENGTH,
            LedgerConstant::SignatureLength => SIGNATURE_LENGTH,
            LedgerConstant::SignatureEncodingIncrement => SIGNATURE_ENCODING_INCREMENT,
            LedgerConstant::MaxTxGroupSize => MAX_TX_GROUP_SIZE,
        };
        value as u64
    }

    /// Snake-case name, as printed by the command-line tool.
    pub fn as_str(self) -> &'static str {
        match self {
            LedgerConstant::HashLength => "hash_length",
            LedgerConstant::ChecksumLength => "checksum_length",
            LedgerConstant::AddressLength => "address_length",
            LedgerConstant::PublicKeyLength => "public_key_length",
            LedgerConstant::SecretKeyLength => "secret_key_length",
            LedgerConstant::SignatureLength => "signature_length",
            LedgerConstant::SignatureEncodingIncrement => "signature_encoding_increment",
            LedgerConstant::MaxTxGroupSize => "max_tx_group_size",
        }
    }
}

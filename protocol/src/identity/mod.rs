//! # Identity Module
//!
//! Accounts on the ledger are identified by their Ed25519 public key. This
//! module turns that key into the checksummed base32 address users see,
//! share and paste into payment fields, and back again.
//!
//! ## Format
//!
//! - The checksum is the last 4 bytes of SHA-512/256 over the key.
//! - The string is RFC 4648 base32 of `key || checksum`, unpadded and
//!   uppercase. Parsing is strict: lowercase and non-zero padding bits are
//!   rejected, so each key has exactly one valid string.

pub mod address;

pub use address::Address;

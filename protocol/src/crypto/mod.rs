//! # Cryptographic Primitives
//!
//! Hashing only. The codec never signs or verifies; callers bring their own
//! signatures and this crate just places them into the envelope.

pub mod hash;

pub use hash::{checksum, prefixed_hash, sha512_256};

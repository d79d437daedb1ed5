// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Ledger Transact: Core Library
//!
//! A transaction codec for an account-based ledger: typed transactions go
//! in, canonical MessagePack comes out, and the decoder accepts exactly
//! what the encoder would produce. Nothing here talks to a network, holds
//! keys or persists anything.
//!
//! ## Architecture
//!
//! - **config**: Wire constants (lengths, domain prefixes, group limits).
//! - **crypto**: SHA-512/256 and the domain-separated hashes built on it.
//! - **identity**: Addresses, a public key plus checksum in base32.
//! - **encoding**: Minimal canonical MessagePack reader and writer.
//! - **transaction**: The model, the codec, signed envelopes, ids, groups.
//! - **api**: The external operations as plain functions.
//! - **error**: `EncodingError`, `DecodingError` and the facade error.
//!
//! ## Quick start
//!
//! ```rust
//! use ledger_transact::api;
//! use ledger_transact::transaction::{PaymentFields, TransactionBuilder};
//! use ledger_transact::Address;
//!
//! let sender = api::address_from_pub_key(&[1u8; 32]).unwrap();
//! let receiver: Address = sender.to_string().parse().unwrap();
//!
//! let tx = TransactionBuilder::new(sender)
//!     .fee(1_000)
//!     .first_valid(1)
//!     .last_valid(1_000)
//!     .payment(PaymentFields::new(receiver, 5))
//!     .build()
//!     .unwrap();
//!
//! let bytes = api::encode_transaction(&tx).unwrap();
//! assert_eq!(api::decode_transaction(&bytes).unwrap(), tx);
//!
//! let signed = api::attach_signature(&bytes, &[0u8; 64]).unwrap();
//! assert_eq!(signed.len(), tx.estimate_size().unwrap());
//! ```

pub mod api;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod identity;
pub mod transaction;

pub use error::{DecodingError, EncodingError, GroupError, TransactError};
pub use identity::Address;
pub use transaction::{SignedTransaction, Transaction, TransactionBuilder, TransactionType};

//! # Transaction Module
//!
//! The transaction model and its canonical wire form.
//!
//! ## Architecture
//!
//! ```text
//! types.rs          Transaction type tags
//! header.rs         Fields common to every transaction
//! payment.rs        `pay` payload
//! asset_transfer.rs `axfer` payload
//! builder.rs        Transaction, TransactionPayload, TransactionBuilder
//! codec.rs          Field layouts, canonical encoder and strict decoder
//! sniff.rs          Type detection without a full decode
//! signed.rs         Signed envelopes and signature attachment
//! id.rs             Transaction ids and signed-size estimates
//! group.rs          Atomic group id assignment
//! record.rs         Flat serde form used by bindings and the CLI
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** with [`TransactionBuilder`] (or convert a [`TransactionRecord`]).
//! 2. **Group** related transactions with [`group_transactions`], if needed.
//! 3. **Encode** with [`Transaction::encode`] and hand the bytes to a signer.
//! 4. **Attach** the returned signature with [`attach_signature`].
//!
//! Decoding is strict: the decoder accepts exactly the bytes the encoder
//! would produce, so `encode(decode(b)) == b` for every accepted `b`.

pub mod asset_transfer;
pub mod builder;
pub mod codec;
pub mod group;
pub mod header;
pub mod id;
pub mod payment;
pub mod record;
pub mod signed;
pub mod sniff;
pub mod types;

pub use asset_transfer::AssetTransferFields;
pub use builder::{Transaction, TransactionBuilder, TransactionPayload};
pub use codec::{layout_for, FieldLayout, ASSET_TRANSFER_LAYOUT, PAYMENT_LAYOUT};
pub use group::{compute_group_id, group_transactions};
pub use header::TransactionHeader;
pub use payment::PaymentFields;
pub use record::{AssetTransferRecord, PaymentRecord, TransactionRecord};
pub use signed::{attach_signature, SignedTransaction, SIGNED_TRANSACTION_LAYOUT};
pub use sniff::peek_transaction_type;
pub use types::TransactionType;

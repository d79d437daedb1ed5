//! Fields shared by every transaction type.

use serde::{Deserialize, Serialize};

use super::codec::{FieldReader, FieldWriter};
use crate::config::Byte32;
use crate::error::{DecodingError, EncodingError};
use crate::identity::Address;

/// The common header carried by every transaction.
///
/// Optional fields hold `None` or a non-default value. `Some` of a default
/// (an empty note, an all-zero hash) has no canonical encoding and is
/// rejected by the encoder; [`super::TransactionBuilder`] normalizes it away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// Account authorizing the transaction (`snd`).
    pub sender: Address,
    /// Fee in micro-units (`fee`).
    pub fee: u64,
    /// First round the transaction is valid in (`fv`).
    pub first_valid: u64,
    /// Last round the transaction is valid in (`lv`).
    pub last_valid: u64,
    /// Hash of the genesis block of the target network (`gh`).
    pub genesis_hash: Option<Byte32>,
    /// Human-readable network identifier (`gen`).
    pub genesis_id: Option<String>,
    /// Arbitrary user data (`note`).
    pub note: Option<Vec<u8>>,
    /// New spending key for the sender account (`rekey`).
    pub rekey_to: Option<Address>,
    /// Mutual-exclusion lease (`lx`).
    pub lease: Option<Byte32>,
    /// Atomic group id (`grp`).
    pub group: Option<Byte32>,
}

impl TransactionHeader {
    /// Creates a header with the required fields set and no optionals.
    pub fn new(sender: Address, fee: u64, first_valid: u64, last_valid: u64) -> Self {
        Self {
            sender,
            fee,
            first_valid,
            last_valid,
            ..Self::default()
        }
    }

    pub(crate) fn write_fields<'a>(&'a self, out: &mut FieldWriter<'a>) -> Result<(), EncodingError> {
        out.address("snd", &self.sender);
        out.uint("fee", self.fee);
        out.uint("fv", self.first_valid);
        out.uint("lv", self.last_valid);
        out.opt_byte32("gh", self.genesis_hash.as_ref())?;
        out.opt_str("gen", self.genesis_id.as_deref())?;
        out.opt_bytes("note", self.note.as_deref())?;
        out.opt_address("rekey", self.rekey_to.as_ref())?;
        out.opt_byte32("lx", self.lease.as_ref())?;
        out.opt_byte32("grp", self.group.as_ref())?;
        Ok(())
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self, DecodingError> {
        Ok(Self {
            sender: input.address("snd")?,
            fee: input.uint("fee")?,
            first_valid: input.uint("fv")?,
            last_valid: input.uint("lv")?,
            genesis_hash: input.opt_byte32("gh")?,
            genesis_id: input.opt_str("gen")?,
            note: input.opt_bytes("note")?,
            rekey_to: input.opt_address("rekey")?,
            lease: input.opt_byte32("lx")?,
            group: input.opt_byte32("grp")?,
        })
    }

    /// Replaces every `Some(default)` with `None`.
    pub fn normalize(&mut self) {
        if self.genesis_hash == Some([0u8; 32]) {
            self.genesis_hash = None;
        }
        if self.genesis_id.as_deref() == Some("") {
            self.genesis_id = None;
        }
        if self.note.as_ref().is_some_and(|n| n.is_empty()) {
            self.note = None;
        }
        if self.rekey_to.is_some_and(|a| a.is_zero()) {
            self.rekey_to = None;
        }
        if self.lease == Some([0u8; 32]) {
            self.lease = None;
        }
        if self.group == Some([0u8; 32]) {
            self.group = None;
        }
    }
}

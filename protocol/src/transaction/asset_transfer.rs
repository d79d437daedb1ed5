//! Asset transfer (`axfer`) payload.
//!
//! One layout covers four operations, told apart by which fields are set:
//!
//! - transfer: `receiver` and `amount`
//! - opt-in: a zero-amount transfer to yourself
//! - opt-out: `close_remainder_to` set
//! - clawback: `asset_sender` set, sent by the asset's clawback account

use serde::{Deserialize, Serialize};

use super::codec::{FieldReader, FieldWriter};
use crate::error::{DecodingError, EncodingError};
use crate::identity::Address;

/// Moves units of a ledger asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTransferFields {
    /// Asset being moved (`xaid`).
    pub asset_id: u64,
    /// Amount in the asset's base units (`aamt`).
    pub amount: u64,
    /// Recipient (`arcv`).
    pub receiver: Address,
    /// Account the units are clawed back from (`asnd`).
    pub asset_sender: Option<Address>,
    /// Where the remaining holding goes when opting out (`aclose`).
    pub close_remainder_to: Option<Address>,
}

impl AssetTransferFields {
    pub fn new(asset_id: u64, receiver: Address, amount: u64) -> Self {
        Self {
            asset_id,
            amount,
            receiver,
            asset_sender: None,
            close_remainder_to: None,
        }
    }

    pub(crate) fn write_fields<'a>(&'a self, out: &mut FieldWriter<'a>) -> Result<(), EncodingError> {
        out.uint("xaid", self.asset_id);
        out.uint("aamt", self.amount);
        out.address("arcv", &self.receiver);
        out.opt_address("asnd", self.asset_sender.as_ref())?;
        out.opt_address("aclose", self.close_remainder_to.as_ref())
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self, DecodingError> {
        Ok(Self {
            asset_id: input.uint("xaid")?,
            amount: input.uint("aamt")?,
            receiver: input.address("arcv")?,
            asset_sender: input.opt_address("asnd")?,
            close_remainder_to: input.opt_address("aclose")?,
        })
    }

    pub(crate) fn normalize(&mut self) {
        if self.asset_sender.is_some_and(|a| a.is_zero()) {
            self.asset_sender = None;
        }
        if self.close_remainder_to.is_some_and(|a| a.is_zero()) {
            self.close_remainder_to = None;
        }
    }
}

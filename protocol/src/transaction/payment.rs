//! Payment (`pay`) payload.

use serde::{Deserialize, Serialize};

use super::codec::{FieldReader, FieldWriter};
use crate::error::{DecodingError, EncodingError};
use crate::identity::Address;

/// Moves native currency from the sender to `receiver`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFields {
    /// Recipient (`rcv`).
    pub receiver: Address,
    /// Amount in micro-units (`amt`).
    pub amount: u64,
    /// If set, the sender account is closed and its remaining balance sent
    /// here (`close`).
    pub close_remainder_to: Option<Address>,
}

impl PaymentFields {
    pub fn new(receiver: Address, amount: u64) -> Self {
        Self {
            receiver,
            amount,
            close_remainder_to: None,
        }
    }

    pub(crate) fn write_fields<'a>(&'a self, out: &mut FieldWriter<'a>) -> Result<(), EncodingError> {
        out.address("rcv", &self.receiver);
        out.uint("amt", self.amount);
        out.opt_address("close", self.close_remainder_to.as_ref())
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self, DecodingError> {
        Ok(Self {
            receiver: input.address("rcv")?,
            amount: input.uint("amt")?,
            close_remainder_to: input.opt_address("close")?,
        })
    }

    pub(crate) fn normalize(&mut self) {
        if self.close_remainder_to.is_some_and(|a| a.is_zero()) {
            self.close_remainder_to = None;
        }
    }
}

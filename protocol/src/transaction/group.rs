//! Atomic transaction groups.
//!
//! Transactions in a group either all confirm or none do. Membership is
//! recorded by stamping every member with the same group id, the hash of the
//! ordered member ids.

use tracing::debug;

use super::builder::Transaction;
use crate::config::{Byte32, MAX_TX_GROUP_SIZE, TRANSACTION_GROUP_PREFIX};
use crate::crypto::prefixed_hash;
use crate::encoding::MsgpackWriter;
use crate::error::{EncodingError, GroupError};

/// Computes the group id for `transactions` in the given order.
pub fn compute_group_id(transactions: &[Transaction]) -> Result<Byte32, GroupError> {
    check_group(transactions)?;

    let ids = transactions
        .iter()
        .map(Transaction::id_raw)
        .collect::<Result<Vec<_>, EncodingError>>()?;

    let mut w = MsgpackWriter::with_capacity(16 + ids.len() * 34);
    w.write_map_len(1)?;
    w.write_str("txlist", "txlist")?;
    w.write_array_len(ids.len())?;
    for id in &ids {
        w.write_bin("txlist", id)?;
    }
    Ok(prefixed_hash(TRANSACTION_GROUP_PREFIX, &w.into_inner()))
}

/// Returns copies of `transactions` with a shared group id assigned.
///
/// The inputs are not modified. Fails on an empty slice, more than
/// [`MAX_TX_GROUP_SIZE`] members, or a member that is already grouped.
pub fn group_transactions(transactions: &[Transaction]) -> Result<Vec<Transaction>, GroupError> {
    let group = compute_group_id(transactions)?;
    debug!(size = transactions.len(), "assigned group id");
    Ok(transactions
        .iter()
        .cloned()
        .map(|mut tx| {
            tx.header.group = Some(group);
            tx
        })
        .collect())
}

fn check_group(transactions: &[Transaction]) -> Result<(), GroupError> {
    if transactions.is_empty() {
        return Err(GroupError::Empty);
    }
    if transactions.len() > MAX_TX_GROUP_SIZE {
        return Err(GroupError::TooLarge {
            max: MAX_TX_GROUP_SIZE,
            got: transactions.len(),
        });
    }
    if let Some(index) = transactions.iter().position(Transaction::is_grouped) {
        return Err(GroupError::AlreadyGrouped { index });
    }
    Ok(())
}

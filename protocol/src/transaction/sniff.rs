//! Reading the transaction type without decoding the transaction.

use super::codec::strip_prefix;
use super::types::TransactionType;
use crate::encoding::MsgpackReader;
use crate::error::DecodingError;

/// Returns the type tag of an encoded transaction.
///
/// Only the `type` entry is interpreted; every other value is skipped
/// structurally, so this works for all six tags, including those with no
/// payload layout here. Bytes after the `type` entry are not examined.
pub fn peek_transaction_type(bytes: &[u8]) -> Result<TransactionType, DecodingError> {
    if bytes.is_empty() {
        return Err(DecodingError::Empty);
    }
    let mut reader = MsgpackReader::new(strip_prefix(bytes));
    let count = reader.read_map_len()?;
    for _ in 0..count {
        let key = reader.read_str("<key>")?;
        if key == "type" {
            let tag = reader.read_str("type")?;
            return tag.parse();
        }
        reader.skip_value()?;
    }
    Err(DecodingError::MissingField { field: "type" })
}

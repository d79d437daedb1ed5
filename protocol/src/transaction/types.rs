//! Transaction type discriminants.
//!
//! The ledger identifies a transaction's kind by a short string tag in the
//! `type` field. Six tags exist; this crate knows the payload layout of two
//! of them (`pay`, `axfer`). The others are recognised so that routing code
//! can sniff them, but decoding their payload is an explicit error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DecodingError;

/// Discriminant for the operation a transaction represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Transfer of the native currency between accounts.
    #[serde(rename = "pay")]
    Payment,
    /// Transfer of a ledger-issued asset between accounts.
    #[serde(rename = "axfer")]
    AssetTransfer,
    /// Freeze or unfreeze an asset holding.
    #[serde(rename = "afrz")]
    AssetFreeze,
    /// Create, reconfigure or destroy an asset.
    #[serde(rename = "acfg")]
    AssetConfig,
    /// Participation key registration.
    #[serde(rename = "keyreg")]
    KeyRegistration,
    /// Smart contract call.
    #[serde(rename = "appl")]
    ApplicationCall,
}

impl TransactionType {
    /// All discriminants, in tag order.
    pub const ALL: [TransactionType; 6] = [
        Self::Payment,
        Self::AssetTransfer,
        Self::AssetFreeze,
        Self::AssetConfig,
        Self::KeyRegistration,
        Self::ApplicationCall,
    ];

    /// The wire tag stored in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "pay",
            Self::AssetTransfer => "axfer",
            Self::AssetFreeze => "afrz",
            Self::AssetConfig => "acfg",
            Self::KeyRegistration => "keyreg",
            Self::ApplicationCall => "appl",
        }
    }

    /// Looks up a wire tag. Unknown tags return `None`; there is no fallback.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Returns `true` if this crate can encode and decode the payload.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Payment | Self::AssetTransfer)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| DecodingError::UnknownTransactionType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip() {
        for t in TransactionType::ALL {
            assert_eq!(TransactionType::from_tag(t.as_str()), Some(t));
            assert_eq!(t.to_string().parse::<TransactionType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_tag_is_an_error_not_a_default() {
        assert_eq!(TransactionType::from_tag("payment"), None);
        assert_eq!(TransactionType::from_tag(""), None);
        assert!(matches!(
            "PAY".parse::<TransactionType>(),
            Err(DecodingError::UnknownTransactionType(tag)) if tag == "PAY"
        ));
    }

    #[test]
    fn only_pay_and_axfer_supported() {
        let supported: Vec<_> = TransactionType::ALL
            .into_iter()
            .filter(TransactionType::is_supported)
            .collect();
        assert_eq!(
            supported,
            vec![TransactionType::Payment, TransactionType::AssetTransfer]
        );
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&TransactionType::KeyRegistration).unwrap();
        assert_eq!(json, "\"keyreg\"");
        let back: TransactionType = serde_json::from_str("\"axfer\"").unwrap();
        assert_eq!(back, TransactionType::AssetTransfer);
    }
}

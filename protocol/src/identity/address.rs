//! # Account Addresses
//!
//! An address is the human-facing form of an account's Ed25519 public key:
//!
//! ```text
//! public_key (32 bytes)
//!     -> SHA-512/256(public_key)[28..32]          -> checksum (4 bytes)
//!     -> base32(public_key || checksum), no pad   -> 58 characters
//! ```
//!
//! The checksum catches transcription errors when addresses are copy-pasted
//! into wallets. Only the 32-byte key is stored; the string is recomputed on
//! demand, so the two forms can never drift apart.

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{ADDRESS_LENGTH, CHECKSUM_LENGTH, PUBLIC_KEY_LENGTH};
use crate::crypto::hash::checksum;
use crate::error::{DecodingError, EncodingError};

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A ledger account address.
///
/// # Examples
///
/// ```
/// use ledger_transact::Address;
///
/// let addr = Address::from_pubkey(&[0u8; 32]);
/// assert_eq!(
///     addr.to_string(),
///     "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ"
/// );
///
/// let parsed: Address = addr.to_string().parse().unwrap();
/// assert_eq!(addr, parsed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address {
    pub_key: [u8; PUBLIC_KEY_LENGTH],
}

impl Address {
    /// Build an address from a 32-byte public key.
    pub fn from_pubkey(pub_key: &[u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { pub_key: *pub_key }
    }

    /// Build an address from a key of unchecked length.
    ///
    /// Fails only when `pub_key` is not exactly 32 bytes.
    pub fn from_pubkey_slice(pub_key: &[u8]) -> Result<Self, EncodingError> {
        let key: [u8; PUBLIC_KEY_LENGTH] =
            pub_key
                .try_into()
                .map_err(|_| EncodingError::InvalidLength {
                    field: "public key",
                    expected: PUBLIC_KEY_LENGTH,
                    got: pub_key.len(),
                })?;
        Ok(Self::from_pubkey(&key))
    }

    /// Parse and validate the 58-character string form.
    ///
    /// Rejects the wrong length, characters outside the RFC 4648 base32
    /// alphabet, non-zero padding bits, and any checksum that does not match
    /// the embedded key.
    pub fn from_string(address: &str) -> Result<Self, DecodingError> {
        if address.len() != ADDRESS_LENGTH {
            return Err(DecodingError::InvalidAddressLength {
                expected: ADDRESS_LENGTH,
                got: address.len(),
            });
        }

        let decoded = BASE32_NOPAD
            .decode(address.as_bytes())
            .map_err(|e| DecodingError::InvalidAddressEncoding(e.to_string()))?;

        if decoded.len() != PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
            return Err(DecodingError::InvalidAddressEncoding(format!(
                "decoded to {} bytes, expected {}",
                decoded.len(),
                PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH
            )));
        }

        let (key, found) = decoded.split_at(PUBLIC_KEY_LENGTH);
        let expected = checksum(key);
        if expected != found {
            return Err(DecodingError::AddressChecksumMismatch {
                expected: hex::encode(expected),
                found: hex::encode(found),
            });
        }

        let mut pub_key = [0u8; PUBLIC_KEY_LENGTH];
        pub_key.copy_from_slice(key);
        Ok(Self { pub_key })
    }

    /// The all-zero address. Treated as "unset" by the encoder.
    pub const fn zero() -> Self {
        Self {
            pub_key: [0u8; PUBLIC_KEY_LENGTH],
        }
    }

    /// Returns `true` for the all-zero address.
    pub fn is_zero(&self) -> bool {
        self.pub_key == [0u8; PUBLIC_KEY_LENGTH]
    }

    /// The 32-byte public key; this is what goes on the wire.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.pub_key
    }

    /// The 4-byte checksum suffix of the string form.
    pub fn checksum(&self) -> [u8; CHECKSUM_LENGTH] {
        checksum(&self.pub_key)
    }

    /// Encode as the 58-character base32 string.
    pub fn encode(&self) -> String {
        let mut buf = [0u8; PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH];
        buf[..PUBLIC_KEY_LENGTH].copy_from_slice(&self.pub_key);
        buf[PUBLIC_KEY_LENGTH..].copy_from_slice(&self.checksum());
        BASE32_NOPAD.encode(&buf)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for Address {
    fn from(pub_key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { pub_key }
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.pub_key
    }
}

impl FromStr for Address {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encode())
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.encode())
        } else {
            serializer.serialize_bytes(&self.pub_key)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Address::from_string(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            Address::from_pubkey_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &str = "RIMARGKZU46OZ77OLPDHHPUJ7YBSHRTCYMQUC64KZCCMESQAFQMYU6SL2Q";
    const KNOWN_KEY: &str = "8a18089959a73cecffee5bc673be89fe0323c662c321417b8ac884c24a002c19";

    fn known_key() -> [u8; 32] {
        hex::decode(KNOWN_KEY).unwrap().try_into().unwrap()
    }

    #[test]
    fn zero_address_string() {
        let addr = Address::zero();
        assert_eq!(
            addr.to_string(),
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ"
        );
        assert!(addr.is_zero());
        assert_eq!(addr, Address::default());
    }

    #[test]
    fn known_address_from_key() {
        let addr = Address::from_pubkey(&known_key());
        assert_eq!(addr.to_string(), KNOWN);
        assert_eq!(addr.to_string().len(), ADDRESS_LENGTH);
    }

    #[test]
    fn known_address_parses_to_key() {
        let addr = Address::from_string(KNOWN).unwrap();
        assert_eq!(addr.as_bytes(), &known_key());
    }

    #[test]
    fn roundtrip_random_keys() {
        for _ in 0..64 {
            let key: [u8; 32] = rand::random();
            let addr = Address::from_pubkey(&key);
            let parsed: Address = addr.to_string().parse().unwrap();
            assert_eq!(addr, parsed);
        }
    }

    #[test]
    fn slice_of_wrong_length_rejected() {
        let err = Address::from_pubkey_slice(&[1u8; 31]).unwrap_err();
        assert_eq!(
            err,
            EncodingError::InvalidLength {
                field: "public key",
                expected: 32,
                got: 31
            }
        );
        assert!(Address::from_pubkey_slice(&[1u8; 33]).is_err());
        assert!(Address::from_pubkey_slice(&[1u8; 32]).is_ok());
    }

    #[test]
    fn wrong_length_string_rejected() {
        let err = Address::from_string(&KNOWN[..57]).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::InvalidAddressLength {
                expected: 58,
                got: 57
            }
        ));
    }

    #[test]
    fn invalid_alphabet_rejected() {
        // '1' and lowercase are outside the RFC 4648 alphabet.
        let mut bad = KNOWN.to_string();
        bad.replace_range(0..1, "1");
        assert!(matches!(
            Address::from_string(&bad),
            Err(DecodingError::InvalidAddressEncoding(_))
        ));
        assert!(Address::from_string(&KNOWN.to_lowercase()).is_err());
    }

    #[test]
    fn checksum_mismatch_rejected() {
        // Swap the last character for another valid base32 character whose
        // low bits keep the padding clean.
        let mut bad = KNOWN.to_string();
        bad.replace_range(57..58, "A");
        let err = Address::from_string(&bad).unwrap_err();
        assert!(matches!(err, DecodingError::AddressChecksumMismatch { .. }));
    }

    #[test]
    fn every_single_bit_flip_rejected() {
        let original = Address::from_pubkey(&known_key()).to_string();
        for pos in 0..original.len() {
            for bit in 0..8 {
                let mut bytes = original.clone().into_bytes();
                bytes[pos] ^= 1 << bit;
                let Ok(candidate) = String::from_utf8(bytes) else {
                    continue;
                };
                assert!(
                    Address::from_string(&candidate).is_err(),
                    "flip of bit {bit} at {pos} was accepted: {candidate}"
                );
            }
        }
    }

    #[test]
    fn key_change_changes_checksum() {
        let mut key = known_key();
        let before = Address::from_pubkey(&key).checksum();
        key[0] ^= 0x01;
        let after = Address::from_pubkey(&key).checksum();
        assert_ne!(before, after);
    }

    #[test]
    fn serde_json_uses_string_form() {
        let addr = Address::from_pubkey(&known_key());
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{KNOWN}\""));
        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, recovered);
    }

    #[test]
    fn serde_json_rejects_bad_checksum() {
        let mut bad = KNOWN.to_string();
        bad.replace_range(57..58, "A");
        let result: Result<Address, _> = serde_json::from_str(&format!("\"{bad}\""));
        assert!(result.is_err());
    }

    #[test]
    fn debug_shows_string_form() {
        let addr = Address::from_pubkey(&known_key());
        assert_eq!(format!("{addr:?}"), format!("Address({KNOWN})"));
    }
}

//! Signed transaction envelopes.
//!
//! The envelope is a two-entry map, `{"sig": <64 bytes>, "txn": <raw tx>}`,
//! written without a domain prefix. Signing itself happens elsewhere; this
//! module only assembles and parses the envelope.

use tracing::debug;

use super::builder::Transaction;
use super::codec::{strip_prefix, FieldLayout};
use crate::config::{SIGNATURE_ENCODING_INCREMENT, SIGNATURE_LENGTH};
use crate::encoding::{MsgpackReader, MsgpackWriter};
use crate::error::{DecodingError, EncodingError};

/// Key layout of the signed envelope.
pub const SIGNED_TRANSACTION_LAYOUT: FieldLayout = FieldLayout {
    name: "signed transaction",
    keys: &["sig", "txn"],
};

/// A transaction together with its Ed25519 signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub transaction: Transaction,
    pub signature: [u8; SIGNATURE_LENGTH],
}

impl SignedTransaction {
    pub fn new(transaction: Transaction, signature: [u8; SIGNATURE_LENGTH]) -> Self {
        Self {
            transaction,
            signature,
        }
    }

    /// Encodes the envelope. No prefix is added.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        let raw = self.transaction.encode_raw()?;
        write_envelope(&self.signature, &raw)
    }

    /// Strictly decodes an envelope.
    ///
    /// Requires `sig` then `txn`, a 64-byte signature and nothing after the
    /// map. The whole envelope, headers included, must be byte-for-byte the
    /// canonical encoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodingError> {
        if bytes.is_empty() {
            return Err(DecodingError::Empty);
        }
        let mut reader = MsgpackReader::new(bytes);
        let count = reader.read_map_len()?;

        let mut signature = None;
        let mut transaction = None;
        let mut previous: Option<(usize, &str)> = None;
        for _ in 0..count {
            let key = reader.read_str("<key>")?;
            let pos = SIGNED_TRANSACTION_LAYOUT.position(key).ok_or_else(|| {
                DecodingError::UnknownField {
                    field: key.to_string(),
                    context: SIGNED_TRANSACTION_LAYOUT.name.to_string(),
                }
            })?;
            match previous {
                Some((p, _)) if p == pos => {
                    return Err(DecodingError::DuplicateField {
                        field: key.to_string(),
                    })
                }
                Some((p, prev)) if p > pos => {
                    return Err(DecodingError::FieldOrder {
                        field: key.to_string(),
                        previous: prev.to_string(),
                    })
                }
                _ => {}
            }
            previous = Some((pos, key));

            if key == "sig" {
                let sig = reader.read_bin()?;
                let sig: [u8; SIGNATURE_LENGTH] =
                    sig.try_into().map_err(|_| DecodingError::InvalidLength {
                        field: "sig".to_string(),
                        expected: SIGNATURE_LENGTH,
                        got: sig.len(),
                    })?;
                signature = Some(sig);
            } else {
                transaction = Some(Transaction::read_from(&mut reader)?);
            }
        }
        reader.finish()?;

        let signature = signature.ok_or(DecodingError::MissingField { field: "sig" })?;
        let transaction = transaction.ok_or(DecodingError::MissingField { field: "txn" })?;
        let signed = Self {
            transaction,
            signature,
        };

        let canonical = signed
            .encode()
            .map_err(|e| DecodingError::NonCanonical(e.to_string()))?;
        if canonical != bytes {
            return Err(DecodingError::NonCanonical(format!(
                "{} envelope bytes re-encode to {} different bytes",
                bytes.len(),
                canonical.len()
            )));
        }
        Ok(signed)
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> Result<usize, EncodingError> {
        Ok(self.encode()?.len())
    }
}

fn write_envelope(
    signature: &[u8; SIGNATURE_LENGTH],
    raw_tx: &[u8],
) -> Result<Vec<u8>, EncodingError> {
    let mut w = MsgpackWriter::with_capacity(raw_tx.len() + SIGNATURE_ENCODING_INCREMENT);
    w.write_map_len(2)?;
    w.write_str("sig", "sig")?;
    w.write_bin("sig", signature)?;
    w.write_str("txn", "txn")?;
    w.write_raw(raw_tx);
    Ok(w.into_inner())
}

/// Wraps already-encoded transaction bytes and a signature in an envelope.
///
/// A leading `TX` prefix is stripped. The transaction bytes are embedded
/// verbatim and are not re-validated.
pub fn attach_signature(encoded_tx: &[u8], signature: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let raw = strip_prefix(encoded_tx);
    if raw.is_empty() {
        return Err(EncodingError::MissingField { field: "txn" });
    }
    let signature: &[u8; SIGNATURE_LENGTH] =
        signature
            .try_into()
            .map_err(|_| EncodingError::InvalidLength {
                field: "signature",
                expected: SIGNATURE_LENGTH,
                got: signature.len(),
            })?;

    let envelope = write_envelope(signature, raw)?;
    debug!(tx_len = raw.len(), len = envelope.len(), "attached signature");
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Address;
    use crate::transaction::{PaymentFields, TransactionBuilder};

    fn sample() -> Transaction {
        TransactionBuilder::new(Address::from([1u8; 32]))
            .fee(1000)
            .first_valid(1)
            .last_valid(2)
            .payment(PaymentFields::new(Address::from([2u8; 32]), 10))
            .build()
            .unwrap()
    }

    #[test]
    fn envelope_layout() {
        let tx = sample();
        let raw = tx.encode_raw().unwrap();
        let sig = [0xabu8; 64];
        let envelope = attach_signature(&tx.encode().unwrap(), &sig).unwrap();

        let mut expected = vec![0x82, 0xa3, b's', b'i', b'g', 0xc4, 64];
        expected.extend_from_slice(&sig);
        expected.extend_from_slice(&[0xa3, b't', b'x', b'n']);
        expected.extend_from_slice(&raw);
        assert_eq!(envelope, expected);
    }

    #[test]
    fn attach_matches_signed_encode() {
        let tx = sample();
        let sig = [7u8; 64];
        let attached = attach_signature(&tx.encode_raw().unwrap(), &sig).unwrap();
        let signed = SignedTransaction::new(tx, sig);
        assert_eq!(attached, signed.encode().unwrap());
        assert_eq!(SignedTransaction::decode(&attached).unwrap(), signed);
    }

    #[test]
    fn attach_rejects_bad_inputs() {
        assert_eq!(
            attach_signature(&[], &[0u8; 64]),
            Err(EncodingError::MissingField { field: "txn" })
        );
        let raw = sample().encode_raw().unwrap();
        assert_eq!(
            attach_signature(&raw, &[0u8; 63]),
            Err(EncodingError::InvalidLength {
                field: "signature",
                expected: 64,
                got: 63
            })
        );
    }

    #[test]
    fn decode_rejects_swapped_keys() {
        let raw = sample().encode_raw().unwrap();
        let mut bytes = vec![0x82, 0xa3, b't', b'x', b'n'];
        bytes.extend_from_slice(&raw);
        bytes.extend_from_slice(&[0xa3, b's', b'i', b'g', 0xc4, 64]);
        bytes.extend_from_slice(&[1u8; 64]);
        assert_eq!(
            SignedTransaction::decode(&bytes),
            Err(DecodingError::FieldOrder {
                field: "sig".into(),
                previous: "txn".into()
            })
        );
    }

    #[test]
    fn decode_requires_both_entries() {
        let mut bytes = vec![0x81, 0xa3, b's', b'i', b'g', 0xc4, 64];
        bytes.extend_from_slice(&[1u8; 64]);
        assert_eq!(
            SignedTransaction::decode(&bytes),
            Err(DecodingError::MissingField { field: "txn" })
        );
    }

    #[test]
    fn decode_rejects_short_signature() {
        let mut bytes = vec![0x82, 0xa3, b's', b'i', b'g', 0xc4, 3, 1, 2, 3];
        bytes.extend_from_slice(&[0xa3, b't', b'x', b'n']);
        bytes.extend_from_slice(&sample().encode_raw().unwrap());
        assert!(matches!(
            SignedTransaction::decode(&bytes),
            Err(DecodingError::InvalidLength { expected: 64, got: 3, .. })
        ));
    }

    fn envelope_with(map_header: &[u8], sig_header: &[u8]) -> Vec<u8> {
        let mut bytes = map_header.to_vec();
        bytes.extend_from_slice(&[0xa3, b's', b'i', b'g']);
        bytes.extend_from_slice(sig_header);
        bytes.extend_from_slice(&[9u8; 64]);
        bytes.extend_from_slice(&[0xa3, b't', b'x', b'n']);
        bytes.extend_from_slice(&sample().encode_raw().unwrap());
        bytes
    }

    #[test]
    fn decode_rejects_wide_map_header() {
        let canonical = envelope_with(&[0x82], &[0xc4, 64]);
        assert!(SignedTransaction::decode(&canonical).is_ok());

        let wide = envelope_with(&[0xde, 0x00, 0x02], &[0xc4, 64]);
        assert!(matches!(
            SignedTransaction::decode(&wide),
            Err(DecodingError::NonCanonical(_))
        ));
    }

    #[test]
    fn decode_rejects_wide_signature_header() {
        let wide = envelope_with(&[0x82], &[0xc5, 0x00, 64]);
        assert!(matches!(
            SignedTransaction::decode(&wide),
            Err(DecodingError::NonCanonical(_))
        ));
    }

    #[test]
    fn decode_rejects_wide_key_string() {
        let mut bytes = vec![0x82, 0xd9, 3, b's', b'i', b'g', 0xc4, 64];
        bytes.extend_from_slice(&[9u8; 64]);
        bytes.extend_from_slice(&[0xa3, b't', b'x', b'n']);
        bytes.extend_from_slice(&sample().encode_raw().unwrap());
        assert!(matches!(
            SignedTransaction::decode(&bytes),
            Err(DecodingError::NonCanonical(_))
        ));
    }

    #[test]
    fn size_is_raw_plus_overhead() {
        let tx = sample();
        let raw_len = tx.encode_raw().unwrap().len();
        let signed = SignedTransaction::new(tx, [0u8; 64]);
        assert_eq!(signed.size().unwrap(), raw_len + 75);
    }
}

//! Validator-intent memo for liquid-stake deposits.
//!
//! Each selected validator contributes a weight byte (`round(clamp(w, 0, 1) * 200)`)
//! and the raw bech32 payload of its valoper address. The bytes are base64 encoded
//! into the transaction memo and interpreted by the receiving chain.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::chain::wallet::{decode_address, encode_address};

pub const INTENT_FIELD_HEADER: u8 = 0x02;
pub const MAX_WEIGHT_BYTE: u8 = 200;
pub const DEFAULT_ADDRESS_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoLayout {
    /// `[0x02, weight] ++ address` for every validator
    #[default]
    PerValidator,
    /// `[0x02, total_len] ++ ([weight] ++ address)*`
    LengthPrefixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoIntent {
    pub valoper_address: String,
    pub weight: f64,
}

impl MemoIntent {
    pub fn new(valoper_address: &str, weight: f64) -> Self {
        Self {
            valoper_address: valoper_address.to_string(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedIntent {
    pub address_bytes: Vec<u8>,
    pub weight_byte: u8,
}

impl DecodedIntent {
    /// Weight back in `[0, 1]`
    pub fn weight(&self) -> f64 {
        f64::from(self.weight_byte) / f64::from(MAX_WEIGHT_BYTE)
    }

    pub fn valoper_address(&self, prefix: &str) -> Result<String, MemoError> {
        encode_address(prefix, &self.address_bytes)
            .map_err(|e| MemoError::InvalidAddress(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    #[error("invalid validator address: {0}")]
    InvalidAddress(String),
    #[error("memo is not valid base64: {0}")]
    Base64(String),
    #[error("expected header byte 0x02 at offset {offset}, found {found:#04x}")]
    BadHeader { offset: usize, found: u8 },
    #[error("memo truncated: {0} trailing bytes do not form a validator entry")]
    Truncated(usize),
    #[error("weight byte {0} exceeds 200")]
    WeightOutOfRange(u8),
    #[error("length prefix {declared} does not match payload of {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("intent payload of {0} bytes does not fit a one-byte length prefix")]
    TooLong(usize),
}

/// Clamp first, then scale. NaN counts as zero.
pub fn weight_to_byte(weight: f64) -> u8 {
    if weight.is_nan() {
        return 0;
    }
    (weight.clamp(0.0, 1.0) * f64::from(MAX_WEIGHT_BYTE)).round() as u8
}

/// Encode intents into the base64 memo string. No intents yields an empty memo.
pub fn encode_validator_memo(intents: &[MemoIntent], layout: MemoLayout) -> Result<String, MemoError> {
    if intents.is_empty() {
        return Ok(String::new());
    }

    let mut entries = Vec::new();
    for intent in intents {
        let (_, address) = decode_address(&intent.valoper_address)
            .map_err(|e| MemoError::InvalidAddress(e.to_string()))?;
        let weight = weight_to_byte(intent.weight);

        if layout == MemoLayout::PerValidator {
            entries.push(INTENT_FIELD_HEADER);
        }
        entries.push(weight);
        entries.extend_from_slice(&address);
    }

    let bytes = match layout {
        MemoLayout::PerValidator => entries,
        MemoLayout::LengthPrefixed => {
            let len = u8::try_from(entries.len()).map_err(|_| MemoError::TooLong(entries.len()))?;
            let mut bytes = vec![INTENT_FIELD_HEADER, len];
            bytes.extend_from_slice(&entries);
            bytes
        }
    };

    Ok(STANDARD.encode(bytes))
}

/// Decode a memo produced by [`encode_validator_memo`]; `address_len` is the
/// chain's validator address width (20 for secp256k1 chains).
pub fn decode_validator_memo(
    memo: &str,
    address_len: usize,
    layout: MemoLayout,
) -> Result<Vec<DecodedIntent>, MemoError> {
    if memo.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = STANDARD
        .decode(memo)
        .map_err(|e| MemoError::Base64(e.to_string()))?;

    let (payload, with_headers) = match layout {
        MemoLayout::PerValidator => (&bytes[..], true),
        MemoLayout::LengthPrefixed => {
            if bytes.len() < 2 {
                return Err(MemoError::Truncated(bytes.len()));
            }
            if bytes[0] != INTENT_FIELD_HEADER {
                return Err(MemoError::BadHeader { offset: 0, found: bytes[0] });
            }
            let declared = usize::from(bytes[1]);
            let payload = &bytes[2..];
            if declared != payload.len() {
                return Err(MemoError::LengthMismatch { declared, actual: payload.len() });
            }
            (payload, false)
        }
    };

    let entry_len = address_len + if with_headers { 2 } else { 1 };
    if payload.len() % entry_len != 0 {
        return Err(MemoError::Truncated(payload.len() % entry_len));
    }

    let mut intents = Vec::with_capacity(payload.len() / entry_len);
    for (index, entry) in payload.chunks_exact(entry_len).enumerate() {
        let entry = if with_headers {
            if entry[0] != INTENT_FIELD_HEADER {
                return Err(MemoError::BadHeader { offset: index * entry_len, found: entry[0] });
            }
            &entry[1..]
        } else {
            entry
        };

        let weight_byte = entry[0];
        if weight_byte > MAX_WEIGHT_BYTE {
            return Err(MemoError::WeightOutOfRange(weight_byte));
        }
        intents.push(DecodedIntent {
            address_bytes: entry[1..].to_vec(),
            weight_byte,
        });
    }

    Ok(intents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valoper(byte: u8) -> String {
        encode_address("quickvaloper", &[byte; DEFAULT_ADDRESS_LEN]).unwrap()
    }

    #[test]
    fn test_weight_clamps_before_scaling() {
        assert_eq!(weight_to_byte(1.5), 200);
        assert_eq!(weight_to_byte(-0.2), 0);
        assert_eq!(weight_to_byte(0.5), 100);
        assert_eq!(weight_to_byte(0.333), 67);
        assert_eq!(weight_to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_per_validator_byte_layout() {
        let intents = [MemoIntent::new(&valoper(0xAA), 0.25), MemoIntent::new(&valoper(0xBB), 0.75)];
        let memo = encode_validator_memo(&intents, MemoLayout::PerValidator).unwrap();
        let bytes = STANDARD.decode(&memo).unwrap();

        assert_eq!(bytes.len(), 2 * 22);
        assert_eq!(&bytes[..2], &[0x02, 50]);
        assert_eq!(&bytes[2..22], &[0xAA; 20]);
        assert_eq!(&bytes[22..24], &[0x02, 150]);
        assert_eq!(&bytes[24..], &[0xBB; 20]);
    }

    #[test]
    fn test_round_trip_with_out_of_range_weights() {
        let weights = [1.5, -0.2, 0.42, 1.0, 0.0];
        let intents: Vec<MemoIntent> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| MemoIntent::new(&valoper(i as u8 + 1), *w))
            .collect();

        for layout in [MemoLayout::PerValidator, MemoLayout::LengthPrefixed] {
            let memo = encode_validator_memo(&intents, layout).unwrap();
            let decoded = decode_validator_memo(&memo, DEFAULT_ADDRESS_LEN, layout).unwrap();

            assert_eq!(decoded.len(), intents.len());
            for (intent, out) in intents.iter().zip(&decoded) {
                assert_eq!(out.valoper_address("quickvaloper").unwrap(), intent.valoper_address);
                assert_eq!(out.weight_byte, weight_to_byte(intent.weight));
            }
            assert_eq!(decoded[0].weight_byte, 200);
            assert_eq!(decoded[1].weight_byte, 0);
            assert_eq!(decoded[2].weight_byte, 84);
        }
    }

    #[test]
    fn test_length_prefixed_header() {
        let intents = [MemoIntent::new(&valoper(1), 1.0)];
        let memo = encode_validator_memo(&intents, MemoLayout::LengthPrefixed).unwrap();
        let bytes = STANDARD.decode(&memo).unwrap();
        assert_eq!(&bytes[..3], &[0x02, 21, 200]);
    }

    #[test]
    fn test_empty_intents_encode_empty_memo() {
        assert_eq!(encode_validator_memo(&[], MemoLayout::PerValidator).unwrap(), "");
        assert!(decode_validator_memo("", 20, MemoLayout::PerValidator).unwrap().is_empty());
    }

    #[test]
    fn test_decode_errors() {
        let bad_header = STANDARD.encode([0x03u8; 22]);
        assert_eq!(
            decode_validator_memo(&bad_header, 20, MemoLayout::PerValidator),
            Err(MemoError::BadHeader { offset: 0, found: 0x03 })
        );

        let truncated = STANDARD.encode([0x02u8; 23]);
        assert_eq!(
            decode_validator_memo(&truncated, 20, MemoLayout::PerValidator),
            Err(MemoError::Truncated(1))
        );

        let mut heavy = vec![0x02u8, 201];
        heavy.extend_from_slice(&[0u8; 20]);
        assert_eq!(
            decode_validator_memo(&STANDARD.encode(&heavy), 20, MemoLayout::PerValidator),
            Err(MemoError::WeightOutOfRange(201))
        );

        assert!(matches!(
            decode_validator_memo("!!", 20, MemoLayout::PerValidator),
            Err(MemoError::Base64(_))
        ));
        assert!(matches!(
            encode_validator_memo(&[MemoIntent::new("nonsense", 1.0)], MemoLayout::PerValidator),
            Err(MemoError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_length_prefix_overflow() {
        let intents: Vec<MemoIntent> = (0..13).map(|i| MemoIntent::new(&valoper(i), 0.1)).collect();
        assert_eq!(
            encode_validator_memo(&intents, MemoLayout::LengthPrefixed),
            Err(MemoError::TooLong(13 * 21))
        );
    }
}

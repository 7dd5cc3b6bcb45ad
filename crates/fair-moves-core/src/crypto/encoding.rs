//! Lowercase hex encoding for fixed-size values.

use thiserror::Error;

/// Failure to parse a fixed-size hex value
#[derive(Debug, Error)]
pub enum HexParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Decode exactly 32 bytes from a hex string (either case accepted)
pub(crate) fn decode_32(s: &str) -> Result<[u8; 32], HexParseError> {
    let bytes = hex::decode(s.trim())?;
    if bytes.len() != 32 {
        return Err(HexParseError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

pub(crate) mod hex32_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_32(&hex_str).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_uppercase() {
        let upper = "AB".repeat(32);
        assert_eq!(decode_32(&upper).unwrap(), [0xab; 32]);
    }

    #[test]
    fn test_decode_wrong_length() {
        match decode_32("abcd") {
            Err(HexParseError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 32);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_not_hex() {
        assert!(matches!(
            decode_32(&"zz".repeat(32)),
            Err(HexParseError::InvalidHex(_))
        ));
    }
}

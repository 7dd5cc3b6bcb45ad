//! Per-session HMAC key.

use super::encoding::{decode_32, hex32_serde, HexParseError};
use crate::random::{EntropyError, RandomSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key length in bytes
pub const KEY_LEN: usize = 32;

/// Secret key for the commitment, kept hidden until reveal
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HmacKey(#[serde(with = "hex32_serde")] [u8; KEY_LEN]);

impl HmacKey {
    /// Generate a new key from a secure source
    pub fn generate<R: RandomSource + ?Sized>(source: &mut R) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; KEY_LEN];
        source.fill_secure(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for HmacKey {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({}..)", hex::encode(&self.0[..4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{MockRandomSource, OsRandomSource};

    #[test]
    fn test_hex_is_lowercase_64_chars() {
        let key = HmacKey::generate(&mut OsRandomSource).unwrap();
        let hex = key.to_hex();

        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = HmacKey::generate(&mut MockRandomSource::new()).unwrap();
        let parsed: HmacKey = key.to_hex().parse().unwrap();
        assert_eq!(parsed.as_bytes(), key.as_bytes());
    }

    #[test]
    fn test_generation_failure() {
        assert!(HmacKey::generate(&mut MockRandomSource::failing()).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let key = HmacKey::from_bytes([0x11; KEY_LEN]);
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&key.to_hex()));
    }
}

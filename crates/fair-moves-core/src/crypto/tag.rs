//! HMAC-SHA256 authentication tag.

use super::encoding::{decode_32, hex32_serde, HexParseError};
use super::key::HmacKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// Tag length in bytes
pub const TAG_LEN: usize = 32;

/// Tag = HMAC-SHA256(key, message)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(#[serde(with = "hex32_serde")] [u8; TAG_LEN]);

impl Tag {
    /// Compute the tag of `message` under `key`
    pub fn compute(key: &HmacKey, message: &[u8]) -> Self {
        let mut mac = keyed_mac(key);
        mac.update(message);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify that `key` and `message` produce this tag, in constant time
    pub fn verify(&self, key: &HmacKey, message: &[u8]) -> bool {
        let mut mac = keyed_mac(key);
        mac.update(message);
        mac.verify_slice(&self.0).is_ok()
    }
}

/// The MAC is keyed with the key's hex text, the same string players see
/// as `HMAC key:`, so any HMAC-SHA256 calculator can reproduce the tag.
fn keyed_mac(key: &HmacKey) -> HmacSha256 {
    HmacSha256::new_from_slice(key.to_hex().as_bytes()).expect("HMAC accepts keys of any length")
}

impl FromStr for Tag {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // HMAC-SHA256 keyed with the text "00" * 32
        let key = HmacKey::from_bytes([0u8; 32]);
        let tag = Tag::compute(&key, b"Rock");
        assert_eq!(
            tag.to_hex(),
            "a01c3b9fc66f73330bf0925e378080ed494c95c4a2fc596e48c9d92f9ba3789b"
        );
    }

    #[test]
    fn test_tag_verification() {
        let key = HmacKey::from_bytes([7u8; 32]);
        let tag = Tag::compute(&key, b"Paper");

        assert!(tag.verify(&key, b"Paper"));
        assert!(!tag.verify(&key, b"paper"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let tag = Tag::compute(&HmacKey::from_bytes([1u8; 32]), b"Paper");
        assert!(!tag.verify(&HmacKey::from_bytes([2u8; 32]), b"Paper"));
    }

    #[test]
    fn test_display_and_parse() {
        let tag = Tag::compute(&HmacKey::from_bytes([3u8; 32]), b"Spock");
        let shown = tag.to_string();

        assert_eq!(shown.len(), 64);
        assert_eq!(shown.parse::<Tag>().unwrap(), tag);
    }
}

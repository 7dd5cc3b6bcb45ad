//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - HmacKey, the per-session secret disclosed at reveal time
//! - Tag, the HMAC-SHA256 published before the counterparty moves
//! - Commitment and Reveal tying a key to the computer's move

mod commitment;
mod encoding;
mod key;
mod tag;

pub use commitment::{compute_tag, select_move, verify_tag, Commitment, Reveal};
pub use encoding::HexParseError;
pub use key::{HmacKey, KEY_LEN};
pub use tag::{Tag, TAG_LEN};

//! From-scratch AES-128 implementation with an ECB buffer facade.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128.
//! - Single-block encryption and decryption.
//! - An ECB facade over byte buffers with implicit zero padding.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod ecb;
mod error;
mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::Block;
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::ecb::AesEcb;
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, DEMO_KEY};

/// Renders bytes as uppercase two-digit hex pairs with no separators.
///
/// Diagnostic surface only; use the `hex` crate directly for anything else.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::to_hex;

    #[test]
    fn to_hex_is_uppercase_without_separators() {
        assert_eq!(to_hex(&[0x00, 0x0a, 0xff, 0x32]), "000AFF32");
        assert_eq!(to_hex(&[]), "");
    }
}

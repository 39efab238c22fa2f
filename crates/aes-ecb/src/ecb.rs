//! Buffer-level ECB facade.

use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeys};

/// AES block size in bytes.
const BLOCK_SIZE: usize = 16;

/// AES-128 in ECB mode over byte buffers.
///
/// Owns the round keys expanded from the construction key; the substitution
/// tables are process-wide constants. Immutable after construction, so one
/// instance may be shared across threads freely.
#[derive(Clone, Debug)]
pub struct AesEcb {
    round_keys: RoundKeys,
}

impl AesEcb {
    /// Derives the round keys for `key` and returns a ready cipher.
    pub fn new(key: Aes128Key) -> Self {
        Self {
            round_keys: expand_key(&key),
        }
    }

    /// Rounds `len` up to the next multiple of the block size.
    ///
    /// Identity when already aligned; 0 maps to 0.
    #[inline]
    pub fn encrypted_len(len: usize) -> usize {
        len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
    }

    /// Encrypts `input`, returning an owned ciphertext buffer of
    /// [`Self::encrypted_len`] bytes.
    ///
    /// A final partial block is implicitly padded with zero bytes; an
    /// already-aligned input gains no extra block. The original length is not
    /// recoverable from the ciphertext alone, so callers that need exact
    /// round-trip recovery must track it out of band.
    ///
    /// Returns [`Error::EmptyInput`] for an empty input buffer.
    pub fn encrypt_buffer(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut output = vec![0u8; Self::encrypted_len(input.len())];
        output[..input.len()].copy_from_slice(input);
        for chunk in output.chunks_exact_mut(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&encrypt_block(&block, &self.round_keys));
        }
        Ok(output)
    }

    /// Decrypts `data` in place, block by block.
    ///
    /// Zero padding added by [`Self::encrypt_buffer`] is never stripped. An
    /// empty buffer is a no-op.
    ///
    /// Returns [`Error::NotBlockAligned`] when the length is not a multiple
    /// of 16.
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(Error::NotBlockAligned(data.len()));
        }
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&decrypt_block(&block, &self.round_keys));
        }
        Ok(())
    }
}

//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sub;

/// Round constants: successive doublings of 0x01 in GF(2^8). AES-128 never
/// expands past round 10, so ten entries suffice.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// The key-schedule core: rotate the column up by one, substitute every byte,
/// XOR the round constant into byte 0.
fn schedule_core(column: &mut [u8; 4], round: usize) {
    column.rotate_left(1);
    for byte in column.iter_mut() {
        *byte = sub(*byte);
    }
    column[0] ^= RCON[round - 1];
}

/// Expands a 128-bit key into 11 round keys.
///
/// The schedule runs over 44 four-byte columns; column `j` of round `i`
/// occupies bytes `j * 4 .. j * 4 + 4` of round-key block `i`, so round key 0
/// is the input key verbatim.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; 44];
    for (column, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        column.copy_from_slice(chunk);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            schedule_core(&mut temp, i / 4);
        }
        for (byte, prev) in temp.iter_mut().zip(w[i - 4].iter()) {
            *byte ^= prev;
        }
        w[i] = temp;
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, block) in round_keys.iter_mut().enumerate() {
        for col in 0..4 {
            block[col * 4..col * 4 + 4].copy_from_slice(&w[round * 4 + col]);
        }
    }
    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
///
/// Round 10 omits MixColumns; that asymmetry is part of the cipher.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
///
/// The inverse pipeline applies InvShiftRows before InvSubBytes and defers
/// InvMixColumns until after the round-key XOR, skipping it on the final
/// (round 0) iteration.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(10));
    for round in (1..10).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const NIST_PLAIN: [u8; 16] = hex!("00112233445566778899aabbccddeeff");
    const NIST_CIPHER: [u8; 16] = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");

    #[test]
    fn round_key_zero_is_the_input_key() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        assert_eq!(round_keys.get(0), &NIST_KEY);
    }

    #[test]
    fn final_round_key_differs_for_nonzero_key() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        assert_ne!(round_keys.get(10), round_keys.get(0));
    }

    #[test]
    fn expansion_matches_fips_appendix_a1() {
        // Words w4..w7 and w40..w43 of the FIPS-197 A.1 worked expansion.
        let key = Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c"));
        let round_keys = expand_key(&key);
        assert_eq!(
            round_keys.get(1),
            &hex!("a0fafe1788542cb123a339392a6c7605")
        );
        assert_eq!(
            round_keys.get(10),
            &hex!("d014f9a8c9ee2589e13f0cc8b6630ca6")
        );
    }

    #[test]
    fn encrypt_matches_appendix_c1_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn encrypt_matches_appendix_b_vector() {
        let key = Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c"));
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&hex!("3243f6a8885a308d313198a2e0370734"), &round_keys);
        assert_eq!(ct, hex!("3925841d02dc09fbdc118597196a0b32"));
    }

    #[test]
    fn decrypt_matches_appendix_c1_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}

//! AES round transformations.
//!
//! All four primitives operate in place on the flat column-major [`Block`];
//! row `r` of the state matrix lives at flat indices `c * 4 + r`.

use crate::block::{xor_in_place, Block};
use crate::gf;
use crate::sbox::{inv_sub, sub};

/// MixColumns coefficients, row-rotated per output row.
const MIX: [u8; 4] = [0x02, 0x03, 0x01, 0x01];
const INV_MIX: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sub(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sub(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let prev = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = prev[((col + row) % 4) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let prev = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[((col + row) % 4) * 4 + row] = prev[col * 4 + row];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4], coeffs: &[u8; 4]) {
    let input = *col;
    for row in 0..4 {
        col[row] = gf::mul(coeffs[0], input[row])
            ^ gf::mul(coeffs[1], input[(row + 1) % 4])
            ^ gf::mul(coeffs[2], input[(row + 2) % 4])
            ^ gf::mul(coeffs[3], input[(row + 3) % 4]);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column, &MIX);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column, &INV_MIX);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state. Self-inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

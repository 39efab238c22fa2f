//! Block representation helpers.
//!
//! A block is the flat 16-byte form of the AES state; cell `[row][col]` of the
//! 4x4 matrix lives at flat index `col * 4 + row` (column-major).

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

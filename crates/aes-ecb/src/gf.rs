//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Doubles a field element; the 0x1b XOR reduces modulo the AES polynomial
/// whenever the shift carries out of the byte.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies two field elements (peasant multiplication).
///
/// Each bit of `a` selects one successive doubling of `b`; the selected
/// doublings are XORed together. Total over all byte pairs.
pub fn mul(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut product = 0u8;
    for _ in 0..8 {
        if a & 1 != 0 {
            product ^= b;
        }
        a >>= 1;
        b = xtime(b);
    }
    product
}

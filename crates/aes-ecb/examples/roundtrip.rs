//! Demonstrates encrypting and decrypting a two-block message.

use aes_ecb::{to_hex, AesEcb, DEMO_KEY};

fn main() {
    let cipher = AesEcb::new(DEMO_KEY);

    let message = b"first block herepartial tail";
    let mut buffer = cipher.encrypt_buffer(message).expect("non-empty input");
    println!("plaintext:  {}", to_hex(message));
    println!("ciphertext: {}", to_hex(&buffer));

    cipher.decrypt_in_place(&mut buffer).expect("aligned buffer");
    assert_eq!(&buffer[..message.len()], message);

    println!("decrypted:  {}", to_hex(&buffer));
    println!("example succeeded; round trip restored the plaintext");
}

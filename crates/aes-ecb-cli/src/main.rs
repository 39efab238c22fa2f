//! Command-line driver for `aes-ecb`.

#![forbid(unsafe_code)]

use aes_ecb::{to_hex, Aes128Key, AesEcb, DEMO_KEY};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 ECB CLI.
#[derive(Parser)]
#[command(
    name = "aes-ecb",
    version,
    author,
    about = "AES-128 ECB encryption over byte buffers (zero-padded, no padding recovery)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text or hex bytes and print the ciphertext as hex.
    Enc {
        /// Plaintext as a UTF-8 string.
        #[arg(long, value_name = "STRING", conflicts_with = "hex")]
        text: Option<String>,
        /// Plaintext as hex bytes.
        #[arg(long, value_name = "HEX")]
        hex: Option<String>,
        /// AES-128 key as 32 hex characters (defaults to the demo key).
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
    },
    /// Decrypt hex ciphertext and print the plaintext as hex (zero padding is not stripped).
    Dec {
        /// Ciphertext as hex bytes; length must be a multiple of 16 bytes.
        #[arg(long, value_name = "HEX")]
        hex: String,
        /// AES-128 key as 32 hex characters (defaults to the demo key).
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
    },
    /// Print the padded ciphertext length for an input size.
    Len {
        /// Input length in bytes.
        #[arg(long)]
        bytes: usize,
    },
    /// Generate a random AES-128 key and print it as hex.
    Keygen {
        /// Optional RNG seed for a reproducible key.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a fixed-key demo: encrypt a sample phrase, decrypt it back, verify.
    Demo,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { text, hex, key_hex } => cmd_enc(text.as_deref(), hex.as_deref(), key_hex.as_deref()),
        Commands::Dec { hex, key_hex } => cmd_dec(&hex, key_hex.as_deref()),
        Commands::Len { bytes } => cmd_len(bytes),
        Commands::Keygen { seed } => cmd_keygen(seed),
        Commands::Demo => cmd_demo(),
    }
}

fn cmd_enc(text: Option<&str>, hex_input: Option<&str>, key_hex: Option<&str>) -> Result<()> {
    let plaintext = match (text, hex_input) {
        (Some(text), None) => text.as_bytes().to_vec(),
        (None, Some(hex_input)) => hex::decode(hex_input.trim()).context("decode plaintext hex")?,
        _ => bail!("provide exactly one of --text or --hex"),
    };
    let cipher = AesEcb::new(parse_key_hex(key_hex)?);
    info!(
        "encrypting {} bytes ({} padded)",
        plaintext.len(),
        AesEcb::encrypted_len(plaintext.len())
    );
    let ciphertext = cipher.encrypt_buffer(&plaintext)?;
    println!("{}", to_hex(&ciphertext));
    Ok(())
}

fn cmd_dec(hex_input: &str, key_hex: Option<&str>) -> Result<()> {
    let mut data = hex::decode(hex_input.trim()).context("decode ciphertext hex")?;
    let cipher = AesEcb::new(parse_key_hex(key_hex)?);
    cipher.decrypt_in_place(&mut data)?;
    println!("{}", to_hex(&data));
    Ok(())
}

fn cmd_len(bytes: usize) -> Result<()> {
    println!("{}", AesEcb::encrypted_len(bytes));
    Ok(())
}

fn cmd_keygen(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    println!("{}", to_hex(&key_bytes));
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let cipher = AesEcb::new(DEMO_KEY);
    let message = b"the quick brown fox";

    let plaintext_hex = to_hex(message);
    let mut buffer = cipher.encrypt_buffer(message)?;
    let ciphertext_hex = to_hex(&buffer);
    cipher.decrypt_in_place(&mut buffer)?;
    let decrypted_hex = to_hex(&buffer);

    println!("demo key:   {}", to_hex(&DEMO_KEY.0));
    println!("plaintext:  {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted:  {}", decrypted_hex);
    if &buffer[..message.len()] != message {
        bail!("demo roundtrip failed");
    }
    println!("roundtrip ok (trailing zero padding is retained by design)");
    Ok(())
}

fn parse_key_hex(key_hex: Option<&str>) -> Result<Aes128Key> {
    let Some(key_hex) = key_hex else {
        return Ok(DEMO_KEY);
    };
    let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("AES-128 key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&bytes);
    Ok(Aes128Key::from(key))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

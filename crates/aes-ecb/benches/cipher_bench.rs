use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_ecb::{decrypt_block, encrypt_block, expand_key, Aes128Key, AesEcb};

fn bench_key_schedule(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        let key = Aes128Key::from(key_bytes);
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = expand_key(&Aes128Key::from(key_bytes));

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = encrypt_block(&block, &round_keys);

    let mut group = c.benchmark_group("block");
    group.sample_size(20);
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&ciphertext, &round_keys));
    });
    group.finish();
}

fn bench_buffer(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let cipher = AesEcb::new(Aes128Key::from(key_bytes));

    let mut buffer = vec![0u8; 1024];
    rng.fill_bytes(&mut buffer);

    let mut group = c.benchmark_group("buffer");
    group.sample_size(20);
    group.bench_function("encrypt_1kib", |b| {
        b.iter(|| cipher.encrypt_buffer(&buffer).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_buffer);
criterion_main!(benches);

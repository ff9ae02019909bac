use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use btcrypt::{BlockCipher, Crypto, SoftAes};

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.bench_function("soft_aes_encrypt_block", |b| {
        b.iter(|| SoftAes.encrypt_block(&key, &block));
    });
    group.finish();
}

fn bench_functions(c: &mut Criterion) {
    let crypto = Crypto::new().expect("software backend");
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut csrk = [0u8; 16];
    rng.fill_bytes(&mut csrk);

    let mut group = c.benchmark_group("functions");
    for len in [0usize, 16, 64, 512] {
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("sign_att", len), &message, |b, m| {
            b.iter(|| crypto.sign_att(&csrk, m, 1));
        });
    }

    let mut table = vec![0u8; 4096];
    rng.fill_bytes(&mut table);
    let records: Vec<&[u8]> = table.chunks(15).collect();
    group.throughput(Throughput::Bytes(table.len() as u64));
    group.bench_function("gatt_hash_4k", |b| {
        b.iter(|| crypto.gatt_hash(&records));
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_functions);
criterion_main!(benches);

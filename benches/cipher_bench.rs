use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use tokio::runtime::Runtime;

use cipher_core::{create_cipher, CipherKind, CipherModeKind, FileEncryptor, PaddingKind};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn bench_block_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("block primitives");

    for kind in [
        CipherKind::Des,
        CipherKind::TripleDes,
        CipherKind::Deal,
        CipherKind::Serpent,
    ] {
        let cipher = create_cipher(kind);
        let key = random_bytes(cipher.key_size());
        let block = random_bytes(cipher.block_size());

        group.throughput(Throughput::Bytes(cipher.block_size() as u64));
        group.bench_function(BenchmarkId::new("encrypt_block", kind.to_string()), |b| {
            b.iter(|| cipher.encrypt_block(&block, &key).unwrap())
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("serpent 64KiB");
    group.sample_size(20);

    let cipher = create_cipher(CipherKind::Serpent);
    let key = random_bytes(32);
    let iv = random_bytes(16);
    let data = random_bytes(64 * 1024);

    for mode in [CipherModeKind::Ecb, CipherModeKind::Cbc, CipherModeKind::Ctr] {
        let encryptor = FileEncryptor::new(cipher.clone(), mode, PaddingKind::Pkcs7);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(BenchmarkId::new("encrypt_data", mode.to_string()), |b| {
            b.iter(|| encryptor.encrypt_data(&data, &key, Some(&iv)).unwrap())
        });
    }

    group.finish();
}

fn bench_file_pipeline(c: &mut Criterion) {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut input, &random_bytes(1024 * 1024)).unwrap();
    let input_path = input.path().to_path_buf();

    let output = tempfile::NamedTempFile::new().unwrap();
    let output_path = output.path().to_path_buf();

    let cipher = create_cipher(CipherKind::Serpent);
    let key = random_bytes(32);
    let encryptor = FileEncryptor::new(cipher, CipherModeKind::Ecb, PaddingKind::Pkcs7);

    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("file pipeline 1MiB");
    group.sample_size(10);
    group.bench_function("serpent ecb encrypt_file", |b| {
        b.iter(|| {
            rt.block_on(encryptor.encrypt_file(&input_path, &output_path, &key, None))
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_block_primitives,
    bench_modes,
    bench_file_pipeline
);
criterion_main!(benches);

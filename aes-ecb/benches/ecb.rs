use aes_ecb::{decrypt, encrypt, pad, unpad, PaddingStyle, AES_BLOCK_SIZE};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [64, 4096, 65536];

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding");
    for style in PaddingStyle::ALL {
        let data = vec![0xa5u8; 4095];
        let padded = pad(&data, AES_BLOCK_SIZE, style).unwrap();

        group.bench_function(BenchmarkId::new("pad", style.tag()), |b| {
            b.iter(|| pad(black_box(&data), AES_BLOCK_SIZE, style).unwrap())
        });
        group.bench_function(BenchmarkId::new("unpad", style.tag()), |b| {
            b.iter(|| unpad(black_box(&padded), AES_BLOCK_SIZE, style).unwrap())
        });
    }
    group.finish();
}

fn bench_ecb(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecb");
    for key_len in [16usize, 32] {
        let key = vec![0x42u8; key_len];
        for size in SIZES {
            let data = vec![0u8; size];
            let id = format!("aes{}/{size}", key_len * 8);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_function(BenchmarkId::new("encrypt", &id), |b| {
                b.iter(|| encrypt(black_box(&data), &key).unwrap())
            });
            group.bench_function(BenchmarkId::new("decrypt", &id), |b| {
                b.iter(|| decrypt(black_box(&data), &key).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_padding, bench_ecb);
criterion_main!(benches);

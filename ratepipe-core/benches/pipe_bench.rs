// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::StreamExt;
use ratepipe_core::unbounded;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn bench_pipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipe");
    let sizes = [16usize, 1_024, 65_536];

    // Scenario 1: fill the whole backlog, then drain it
    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        let id = BenchmarkId::from_parameter(format!("write_then_drain_{size}"));
        group.bench_with_input(id, &size, |bencher, &size| {
            let rt = Runtime::new().unwrap();
            bencher.iter(|| {
                rt.block_on(async {
                    let (mut writer, reader) = unbounded::<i64>();
                    for reading in 0..size as i64 {
                        writer.write(reading).unwrap();
                    }
                    writer.complete().unwrap();
                    let sum: i64 = reader.read_all().fold(0, |acc, x| async move { acc + x }).await;
                    black_box(sum);
                });
            });
        });
    }

    // Scenario 2: producer and consumer racing on separate tasks
    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        let id = BenchmarkId::from_parameter(format!("concurrent_{size}"));
        group.bench_with_input(id, &size, |bencher, &size| {
            let rt = Runtime::new().unwrap();
            bencher.iter(|| {
                rt.block_on(async {
                    let (mut writer, reader) = unbounded::<i64>();
                    let producer = tokio::spawn(async move {
                        for reading in 0..size as i64 {
                            writer.write(reading).unwrap();
                        }
                        writer.complete().unwrap();
                    });
                    let count = reader.read_all().count().await;
                    producer.await.unwrap();
                    black_box(count);
                });
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipe);
criterion_main!(benches);

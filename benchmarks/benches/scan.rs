/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use splash_benches::splash_image;
use splash_format::{SplashDecoder, SplashEncoder};

fn bench_scan(c: &mut Criterion) {
    let images = vec![splash_image(720, 1280); 4];
    let blob = SplashEncoder::new(&images).encode_to_vec().unwrap();

    let mut group = c.benchmark_group("container");

    group.throughput(Throughput::Bytes(blob.len() as u64));

    group.bench_function("scan headers", |b| {
        b.iter(|| black_box(SplashDecoder::new(&blob).decode_headers()))
    });

    group.bench_function("scan and decode", |b| {
        b.iter(|| black_box(SplashDecoder::new(&blob).decode()))
    });

    group.bench_function("build", |b| {
        b.iter(|| black_box(SplashEncoder::new(&images).encode_to_vec().unwrap()))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_scan);

criterion_main!(benches);

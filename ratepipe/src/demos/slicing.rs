// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Borrowed sub-slices versus freshly allocated copies of the same bytes.

use rand::Rng;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Size of the header split off the front of the buffer.
pub const HEADER_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicingReport {
    pub borrowed: Duration,
    pub copied: Duration,
    pub borrowed_sum: u64,
    pub copied_sum: u64,
}

/// Sums a random buffer of `len` bytes `iterations` times, once through borrowed
/// header/payload slices and once through copies of them.
pub fn run(len: usize, iterations: usize) -> SlicingReport {
    let mut data = vec![0u8; len];
    rand::rng().fill(&mut data[..]);

    let stopwatch = Instant::now();
    let mut borrowed_sum = 0;
    for _ in 0..iterations {
        borrowed_sum += sum_borrowed(black_box(&data));
    }
    let borrowed = stopwatch.elapsed();
    println!("Borrowed slices: {} ms", borrowed.as_millis());

    let stopwatch = Instant::now();
    let mut copied_sum = 0;
    for _ in 0..iterations {
        copied_sum += sum_copied(black_box(&data));
    }
    let copied = stopwatch.elapsed();
    println!("Copied buffers:  {} ms", copied.as_millis());

    SlicingReport {
        borrowed,
        copied,
        borrowed_sum,
        copied_sum,
    }
}

fn split_point(data: &[u8]) -> usize {
    HEADER_LEN.min(data.len())
}

fn sum_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().map(|&b| u64::from(b)).sum()
}

fn sum_borrowed(data: &[u8]) -> u64 {
    let (header, payload) = data.split_at(split_point(data));
    sum_bytes(header) + sum_bytes(payload)
}

fn sum_copied(data: &[u8]) -> u64 {
    let at = split_point(data);
    let header = data[..at].to_vec();
    let payload = data[at..].to_vec();
    sum_bytes(&header) + sum_bytes(&payload)
}

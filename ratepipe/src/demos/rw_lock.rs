// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A writer thread filling a map behind a reader/writer lock while a reader thread
//! looks the same keys up concurrently.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RwLockReport {
    pub entries: usize,
    pub hits: usize,
    pub value_len_sum: usize,
    pub ideal_value_len_sum: usize,
    pub final_len: usize,
}

fn key(i: usize) -> String {
    format!("key{i}")
}

fn value(i: usize) -> String {
    format!("value{i}")
}

/// Total length of every value the writer inserts; what the reader would see if it
/// never overtook the writer.
#[must_use]
pub fn ideal_value_len(entries: usize) -> usize {
    (0..entries).map(|i| value(i).len()).sum()
}

/// Runs the writer and the reader on two threads, pausing `pause` between operations.
///
/// The reader only finds keys the writer has already inserted, so `hits` depends on
/// scheduling and is at most `entries`.
pub fn run(entries: usize, pause: Duration) -> RwLockReport {
    let config = RwLock::new(HashMap::with_capacity(entries));

    let (hits, value_len_sum) = thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..entries {
                config.write().insert(key(i), value(i));
                thread::sleep(pause);
            }
        });

        let reader = scope.spawn(|| {
            let mut hits = 0;
            let mut len_sum = 0;
            for i in 0..entries {
                if let Some(found) = config.read().get(&key(i)) {
                    hits += 1;
                    len_sum += found.len();
                }
                thread::sleep(pause);
            }
            (hits, len_sum)
        });

        match reader.join() {
            Ok(seen) => seen,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    });

    let report = RwLockReport {
        entries,
        hits,
        value_len_sum,
        ideal_value_len_sum: ideal_value_len(entries),
        final_len: config.read().len(),
    };
    println!(
        "Reader saw {} of {} entries, value length {} (ideal {})",
        report.hits, report.entries, report.value_len_sum, report.ideal_value_len_sum
    );
    report
}

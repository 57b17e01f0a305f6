// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Linear `Vec::contains` versus hashed lookups.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    pub list_hits: usize,
    pub list_elapsed: Duration,
    pub set_hits: usize,
    pub set_elapsed: Duration,
    pub map_build: Duration,
    pub map_lookup: Duration,
    pub found_product: Option<String>,
}

/// Looks up the upper half of `0..size` in a `Vec` and in a `HashSet`, then builds a
/// product map keyed by id and fetches the product in the middle.
pub fn run(size: usize) -> LookupReport {
    let numbers: Vec<usize> = (0..size).collect();
    let half = size / 2;
    let lookups: Vec<usize> = (half..half * 2).collect();

    let stopwatch = Instant::now();
    let list_hits = lookups.iter().filter(|n| numbers.contains(*n)).count();
    let list_elapsed = stopwatch.elapsed();
    println!(
        "Vec::contains lookups: {} ms, found {list_hits}",
        list_elapsed.as_millis()
    );

    let set: HashSet<usize> = numbers.iter().copied().collect();
    let stopwatch = Instant::now();
    let set_hits = lookups.iter().filter(|n| set.contains(*n)).count();
    let set_elapsed = stopwatch.elapsed();
    println!(
        "HashSet::contains lookups: {} ms, found {set_hits}",
        set_elapsed.as_millis()
    );

    let products: Vec<Product> = (0..size)
        .map(|id| Product {
            id,
            name: format!("Product{id}"),
        })
        .collect();

    let stopwatch = Instant::now();
    let by_id: HashMap<usize, Product> = products.into_iter().map(|p| (p.id, p)).collect();
    let map_build = stopwatch.elapsed();
    println!("HashMap build: {} ms", map_build.as_millis());

    let stopwatch = Instant::now();
    let found_product = by_id.get(&half).map(|p| p.name.clone());
    let map_lookup = stopwatch.elapsed();
    println!("HashMap lookup: {} ns", map_lookup.as_nanos());

    LookupReport {
        list_hits,
        list_elapsed,
        set_hits,
        set_elapsed,
        map_build,
        map_lookup,
        found_product,
    }
}

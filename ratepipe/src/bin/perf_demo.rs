// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runs the performance demos one after another.
//!
//! ```text
//! Producer task                 Pipe                     Consumer task
//! ┌──────────────┐   write   ┌──────────────┐  read_all  ┌──────────────┐
//! │ 1..=N every  │─────────▶ │ unbounded    │──────────▶ │ fixed cost   │
//! │ interval     │ complete  │ FIFO         │            │ per reading  │
//! └──────────────┘           └──────────────┘            └──────────────┘
//! ```
//!
//! Run with: `cargo run --bin perf-demo -- --demo all`

use clap::{Parser, ValueEnum};
use ratepipe::demos::{channel, lookup, rw_lock, slicing, task_context};
use ratepipe::prelude::*;
use ratepipe::telemetry::init_tracing;
use ratepipe_exec::config::DEFAULT_ITEMS;
use std::time::Duration;
use tokio::signal;

/// Upper bound for `--items`; every reading is kept in memory for the report.
const MAX_ITEMS: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Demo {
    All,
    Slicing,
    RwLock,
    TaskContext,
    Lookup,
    Channel,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Runtime performance demos", long_about = None)]
struct Args {
    /// Which demo to run
    #[arg(long, value_enum, default_value_t = Demo::Channel)]
    demo: Demo,

    /// Number of readings the producer writes
    #[arg(
        long,
        default_value_t = DEFAULT_ITEMS as u32,
        value_parser = clap::value_parser!(u32).range(0..=MAX_ITEMS)
    )]
    items: u32,

    /// Delay between two producer writes
    #[arg(long, default_value_t = 200)]
    produce_interval_ms: u64,

    /// Time the consumer spends on each reading
    #[arg(long, default_value_t = 500)]
    consume_cost_ms: u64,
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(
            self.items as usize,
            Duration::from_millis(self.produce_interval_ms),
            Duration::from_millis(self.consume_cost_ms),
        )
    }

    fn runs(&self, demo: Demo) -> bool {
        self.demo == Demo::All || self.demo == demo
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    println!("Runtime performance demos");
    println!("-------------------------");

    if args.runs(Demo::Slicing) {
        println!("\n1. Borrowed slices vs copied buffers");
        let report = slicing::run(1_000_000, 100);
        anyhow::ensure!(
            report.borrowed_sum == report.copied_sum,
            "slicing strategies disagree"
        );
    }

    if args.runs(Demo::RwLock) {
        println!("\n2. Reader/writer lock");
        rw_lock::run(1000, Duration::from_millis(1));
    }

    if args.runs(Demo::TaskContext) {
        println!("\n3. Task-local context across await points");
        task_context::run(&["REQUEST-1", "REQUEST-2"], Duration::from_millis(500)).await?;
    }

    if args.runs(Demo::Lookup) {
        println!("\n4. Linear vs hashed lookups");
        lookup::run(10_000);
    }

    if args.runs(Demo::Channel) {
        println!("\n5. Paced producer and consumer over a pipe");
        let cancel = CancellationToken::new();
        let on_ctrl_c = cancel.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                println!("\nStopping producer, draining what was written...");
                on_ctrl_c.cancel();
            }
        });

        channel::run(args.pipeline_config(), cancel).await?;
    }

    println!("\nDemos finished.");
    Ok(())
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor readings produced every interval and consumed by a slower service.

use ratepipe_core::CancellationToken;
use ratepipe_exec::{
    run_pipeline, PipelineConfig, PipelineEvent, PipelineObserver, PipelineReport,
};
use ratepipe_runtime::TokioTimer;

/// Prints one line per event to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn on_event(&self, event: &PipelineEvent) {
        println!("{event}");
    }
}

/// Runs the producer/consumer pipeline with a console trace.
///
/// # Errors
///
/// Propagates any [`PipelineError`](ratepipe_exec::PipelineError) from the run.
pub async fn run(
    config: PipelineConfig,
    cancel: CancellationToken,
) -> ratepipe_exec::Result<PipelineReport> {
    let report = run_pipeline(config, TokioTimer, ConsoleObserver, cancel).await?;

    println!(
        "Consumed {} of {} reading(s); producer {} ms, consumer {} ms, max backlog {}",
        report.consumed.len(),
        report.produced.len(),
        report.producer_elapsed.as_millis(),
        report.consumer_elapsed.as_millis(),
        report.max_backlog
    );
    Ok(report)
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::event::{PipelineEvent, PipelineObserver};
use crate::Reading;
use core::time::Duration;
use ratepipe_core::{CancellationToken, PipeWriter};
use ratepipe_runtime::Timer;
use std::sync::Arc;

/// What the producer did during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerSummary {
    pub produced: Vec<Reading>,
    pub elapsed: Duration,
    pub max_backlog: usize,
    pub cancelled: bool,
}

/// Writes `config.readings()` into the pipe, one every `config.produce_interval`,
/// then completes the writer.
///
/// The writer is completed exactly once on every path: after the last reading, as
/// soon as `cancel` fires, or right after a rejected write. Readings already written
/// stay in the pipe for the consumer.
///
/// # Errors
///
/// Returns [`PipelineError::Pipe`](crate::PipelineError::Pipe) if the pipe rejects a
/// write or the completion, which only happens if its contract was broken elsewhere.
pub async fn produce<Tm, O>(
    writer: &mut PipeWriter<Reading>,
    config: PipelineConfig,
    timer: Tm,
    observer: Arc<O>,
    cancel: CancellationToken,
    start: Tm::Instant,
) -> Result<ProducerSummary>
where
    Tm: Timer,
    O: PipelineObserver,
{
    crate::info!(
        "producer started: {} reading(s), one every {:?}",
        config.items,
        config.produce_interval
    );

    // Grows with the run; `items` is caller-controlled and may be huge.
    let mut produced = Vec::new();
    let mut max_backlog = 0;
    let mut cancelled = false;
    let mut rejected = None;

    for reading in config.readings() {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        let backlog = match writer.write(reading) {
            Ok(backlog) => backlog,
            Err(error) => {
                rejected = Some(error);
                break;
            }
        };
        max_backlog = max_backlog.max(backlog);
        produced.push(reading);
        observer.on_event(&PipelineEvent::Produced {
            value: reading,
            backlog,
            at: timer.since(start),
        });

        tokio::select! {
            () = timer.sleep_future(config.produce_interval) => {}
            () = cancel.cancelled() => {
                cancelled = true;
                break;
            }
        }
    }

    let completed = writer.complete();
    let elapsed = timer.since(start);

    if let Some(error) = rejected {
        crate::warn!(
            "producer stopped after {} reading(s): {}",
            produced.len(),
            error
        );
        return Err(error.into());
    }
    completed?;

    if cancelled {
        crate::warn!(
            "producer cancelled after {} of {} reading(s)",
            produced.len(),
            config.items
        );
    } else {
        crate::info!("producer completed after {:?}", elapsed);
    }

    Ok(ProducerSummary {
        produced,
        elapsed,
        max_backlog,
        cancelled,
    })
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::PipelineConfig;
use crate::consumer::{consume, ConsumerSummary};
use crate::error::{PipelineError, Result};
use crate::event::PipelineObserver;
use crate::producer::{produce, ProducerSummary};
use crate::Reading;
use core::time::Duration;
use ratepipe_core::{unbounded, CancellationToken};
use ratepipe_runtime::Timer;
use std::sync::Arc;

/// Outcome of a complete producer/consumer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub produced: Vec<Reading>,
    pub consumed: Vec<Reading>,
    pub producer_elapsed: Duration,
    pub consumer_elapsed: Duration,
    pub max_backlog: usize,
    pub cancelled: bool,
}

impl PipelineReport {
    fn from_parts(producer: ProducerSummary, consumer: ConsumerSummary) -> Self {
        Self {
            max_backlog: producer.max_backlog.max(consumer.max_backlog),
            produced: producer.produced,
            consumed: consumer.received,
            producer_elapsed: producer.elapsed,
            consumer_elapsed: consumer.elapsed,
            cancelled: producer.cancelled,
        }
    }

    /// How long the consumer kept working after the producer finished.
    #[must_use]
    pub fn consumer_lag(&self) -> Duration {
        self.consumer_elapsed.saturating_sub(self.producer_elapsed)
    }

    fn verify_drain(&self) -> Result<()> {
        if self.consumed.len() != self.produced.len() {
            return Err(PipelineError::IncompleteDrain {
                expected: self.produced.len(),
                received: self.consumed.len(),
            });
        }

        match self
            .produced
            .iter()
            .zip(&self.consumed)
            .position(|(produced, consumed)| produced != consumed)
        {
            Some(position) => Err(PipelineError::OrderViolation { position }),
            None => Ok(()),
        }
    }
}

/// Runs one producer and one consumer over a fresh pipe and waits for both.
///
/// The producer and the consumer are spawned as separate tokio tasks. This function
/// returns only after both have finished, even if one of them fails, and then checks
/// that the consumer received exactly what the producer wrote.
///
/// ```
/// use ratepipe_core::CancellationToken;
/// use ratepipe_exec::{run_pipeline, PipelineConfig, PipelineEvent};
/// use ratepipe_runtime::TokioTimer;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = PipelineConfig::default()
///     .with_items(3)
///     .with_produce_interval(Duration::from_millis(1))
///     .with_consume_cost(Duration::from_millis(2));
///
/// let report = run_pipeline(config, TokioTimer, |_: &PipelineEvent| {}, CancellationToken::new())
///     .await
///     .unwrap();
///
/// assert_eq!(report.consumed, vec![1, 2, 3]);
/// # }
/// ```
///
/// # Errors
///
/// - [`PipelineError::TaskFailed`] if either task panicked.
/// - [`PipelineError::Pipe`] if the producer hit a pipe contract violation.
/// - [`PipelineError::IncompleteDrain`] / [`PipelineError::OrderViolation`] if the
///   consumer did not receive exactly the produced readings in order.
pub async fn run_pipeline<Tm, O>(
    config: PipelineConfig,
    timer: Tm,
    observer: O,
    cancel: CancellationToken,
) -> Result<PipelineReport>
where
    Tm: Timer,
    O: PipelineObserver,
{
    let observer = Arc::new(observer);
    let (mut writer, reader) = unbounded::<Reading>();
    let start = timer.now();

    let producer = {
        let (config, timer, observer) = (config.clone(), timer.clone(), observer.clone());
        tokio::spawn(async move {
            produce(&mut writer, config, timer, observer, cancel, start).await
        })
    };
    let consumer = tokio::spawn(consume(
        reader,
        config.consume_cost,
        timer,
        observer,
        start,
    ));

    let (producer, consumer) = tokio::join!(producer, consumer);
    let producer = producer.map_err(|e| PipelineError::task_failed("producer", e))?;
    let consumer = consumer.map_err(|e| PipelineError::task_failed("consumer", e))?;

    let report = PipelineReport::from_parts(producer?, consumer);
    if let Err(error) = report.verify_drain() {
        crate::error!("pipeline finished inconsistently: {}", error);
        return Err(error);
    }

    crate::info!(
        "pipeline finished: {} reading(s), consumer lag {:?}",
        report.consumed.len(),
        report.consumer_lag()
    );
    Ok(report)
}

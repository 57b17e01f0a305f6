// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::event::{PipelineEvent, PipelineObserver};
use crate::Reading;
use async_trait::async_trait;
use core::time::Duration;
use futures::stream::{Stream, StreamExt};
use ratepipe_core::PipeReader;
use ratepipe_runtime::Timer;
use std::sync::Arc;

/// Extension trait that drains a stream at a fixed per-item cost.
#[async_trait]
pub trait ConsumePacedExt<T>: Stream<Item = T> + Sized {
    /// Drains the stream, calling `on_item` for each item and then spending `cost` on
    /// the timer before pulling the next one.
    ///
    /// `on_item` receives the item and the stream's lower size bound at that moment,
    /// which for a pipe's [`ReadAll`](ratepipe_core::ReadAll) is the remaining backlog.
    /// Returns every item in the order it was received.
    ///
    /// ```
    /// use futures::stream;
    /// use ratepipe_exec::ConsumePacedExt;
    /// use ratepipe_runtime::TokioTimer;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let received = stream::iter(vec![1, 2, 3])
    ///     .consume_paced(Duration::ZERO, TokioTimer, |_, _| {})
    ///     .await;
    ///
    /// assert_eq!(received, vec![1, 2, 3]);
    /// # }
    /// ```
    async fn consume_paced<Tm, F>(self, cost: Duration, timer: Tm, on_item: F) -> Vec<T>
    where
        Tm: Timer,
        F: FnMut(&T, usize) + Send;
}

#[async_trait]
impl<S, T> ConsumePacedExt<T> for S
where
    S: Stream<Item = T> + Send + Unpin + 'static,
    T: Send + 'static,
{
    async fn consume_paced<Tm, F>(mut self, cost: Duration, timer: Tm, mut on_item: F) -> Vec<T>
    where
        Tm: Timer,
        F: FnMut(&T, usize) + Send,
    {
        let mut received = Vec::new();

        while let Some(item) = self.next().await {
            on_item(&item, self.size_hint().0);
            received.push(item);
            timer.sleep_future(cost).await;
        }

        received
    }
}

/// What the consumer saw during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerSummary {
    pub received: Vec<Reading>,
    pub elapsed: Duration,
    pub max_backlog: usize,
}

/// Reads every reading until the pipe is completed and drained, reporting each one
/// to `observer` before paying `cost` for it.
pub async fn consume<Tm, O>(
    reader: PipeReader<Reading>,
    cost: Duration,
    timer: Tm,
    observer: Arc<O>,
    start: Tm::Instant,
) -> ConsumerSummary
where
    Tm: Timer,
    O: PipelineObserver,
{
    crate::info!("consumer started, {:?} per reading", cost);

    let mut max_backlog = 0;
    let clock = timer.clone();
    let received = reader
        .read_all()
        .consume_paced(cost, timer.clone(), |value, backlog| {
            max_backlog = max_backlog.max(backlog);
            observer.on_event(&PipelineEvent::Consumed {
                value: *value,
                backlog,
                at: clock.since(start),
            });
        })
        .await;

    let elapsed = timer.since(start);
    crate::info!(
        "consumer drained {} reading(s) in {:?}",
        received.len(),
        elapsed
    );

    ConsumerSummary {
        received,
        elapsed,
        max_backlog,
    }
}

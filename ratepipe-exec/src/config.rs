// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Reading;
use core::time::Duration;

/// Number of readings the reference run produces.
pub const DEFAULT_ITEMS: usize = 10;
/// Delay between two producer writes in the reference run.
pub const DEFAULT_PRODUCE_INTERVAL: Duration = Duration::from_millis(200);
/// Time the consumer spends on each reading in the reference run.
pub const DEFAULT_CONSUME_COST: Duration = Duration::from_millis(500);

/// Pacing parameters of a producer/consumer run.
///
/// The defaults reproduce the reference run: ten readings written every 200ms and
/// consumed at 500ms each, so the backlog keeps growing while the producer is active.
///
/// ```
/// use ratepipe_exec::PipelineConfig;
/// use std::time::Duration;
///
/// let config = PipelineConfig::default()
///     .with_items(3)
///     .with_consume_cost(Duration::ZERO);
///
/// assert_eq!(config.readings().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(config.produce_interval, Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub items: usize,
    pub produce_interval: Duration,
    pub consume_cost: Duration,
}

impl PipelineConfig {
    #[must_use]
    pub fn new(items: usize, produce_interval: Duration, consume_cost: Duration) -> Self {
        Self {
            items,
            produce_interval,
            consume_cost,
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_produce_interval(mut self, interval: Duration) -> Self {
        self.produce_interval = interval;
        self
    }

    #[must_use]
    pub fn with_consume_cost(mut self, cost: Duration) -> Self {
        self.consume_cost = cost;
        self
    }

    /// The readings the producer writes, in order: `1..=items`, capped at `Reading::MAX`.
    pub fn readings(&self) -> impl Iterator<Item = Reading> {
        let last = Reading::try_from(self.items).unwrap_or(Reading::MAX);
        1..=last
    }

    /// Time the producer needs for all of its writes, ignoring cancellation.
    #[must_use]
    pub fn expected_producer_time(&self) -> Duration {
        self.produce_interval.saturating_mul(saturate(self.items))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS, DEFAULT_PRODUCE_INTERVAL, DEFAULT_CONSUME_COST)
    }
}

fn saturate(items: usize) -> u32 {
    u32::try_from(items).unwrap_or(u32::MAX)
}

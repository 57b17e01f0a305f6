// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Reading;
use core::fmt;
use core::time::Duration;

/// Something that happened to a reading while it crossed the pipe.
///
/// `at` is measured on the pipeline's timer from the start of the run. `backlog` is the
/// number of readings waiting in the pipe right after the write (for `Produced`) or
/// right after the read (for `Consumed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    Produced {
        value: Reading,
        backlog: usize,
        at: Duration,
    },
    Consumed {
        value: Reading,
        backlog: usize,
        at: Duration,
    },
}

impl PipelineEvent {
    #[must_use]
    pub const fn value(&self) -> Reading {
        match self {
            Self::Produced { value, .. } | Self::Consumed { value, .. } => *value,
        }
    }

    #[must_use]
    pub const fn backlog(&self) -> usize {
        match self {
            Self::Produced { backlog, .. } | Self::Consumed { backlog, .. } => *backlog,
        }
    }

    #[must_use]
    pub const fn at(&self) -> Duration {
        match self {
            Self::Produced { at, .. } | Self::Consumed { at, .. } => *at,
        }
    }

    #[must_use]
    pub const fn is_produced(&self) -> bool {
        matches!(self, Self::Produced { .. })
    }

    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_produced() {
            "Produced"
        } else {
            "Consumed"
        };
        write!(
            f,
            "[{:>6} ms] {label}: {} (backlog {})",
            self.at().as_millis(),
            self.value(),
            self.backlog()
        )
    }
}

/// Receives every [`PipelineEvent`] as it happens.
///
/// Called from both the producer and the consumer task, so implementations must be
/// `Send + Sync`. Any `Fn(&PipelineEvent)` closure is an observer.
pub trait PipelineObserver: Send + Sync + 'static {
    fn on_event(&self, event: &PipelineEvent);
}

impl<F> PipelineObserver for F
where
    F: Fn(&PipelineEvent) + Send + Sync + 'static,
{
    fn on_event(&self, event: &PipelineEvent) {
        self(event);
    }
}

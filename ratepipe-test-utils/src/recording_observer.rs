// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use ratepipe_exec::{PipelineEvent, PipelineObserver, Reading};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Observer that records every event in the order it was emitted.
///
/// Clones share the same log, so one clone can be handed to the pipeline while the
/// test keeps another.
///
/// ```rust
/// use ratepipe_exec::{PipelineEvent, PipelineObserver};
/// use ratepipe_test_utils::RecordingObserver;
/// use std::time::Duration;
///
/// let recorder = RecordingObserver::new();
/// recorder.on_event(&PipelineEvent::Produced { value: 1, backlog: 1, at: Duration::ZERO });
///
/// assert_eq!(recorder.produced_values(), vec![1]);
/// assert!(recorder.consumed_values().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().clone()
    }

    #[must_use]
    pub fn produced(&self) -> Vec<PipelineEvent> {
        self.filtered(PipelineEvent::is_produced)
    }

    #[must_use]
    pub fn consumed(&self) -> Vec<PipelineEvent> {
        self.filtered(PipelineEvent::is_consumed)
    }

    #[must_use]
    pub fn produced_values(&self) -> Vec<Reading> {
        self.produced().iter().map(PipelineEvent::value).collect()
    }

    #[must_use]
    pub fn consumed_values(&self) -> Vec<Reading> {
        self.consumed().iter().map(PipelineEvent::value).collect()
    }

    fn filtered(&self, keep: impl Fn(&PipelineEvent) -> bool) -> Vec<PipelineEvent> {
        self.events.lock().iter().filter(|e| keep(e)).copied().collect()
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_event(&self, event: &PipelineEvent) {
        self.events.lock().push(*event);
    }
}

/// Creates an observer that forwards every event into an unbounded tokio channel.
pub fn event_channel() -> (
    impl PipelineObserver,
    mpsc::UnboundedReceiver<PipelineEvent>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let observer = move |event: &PipelineEvent| {
        // The receiving test may finish early; later events have nowhere to go.
        let _ = tx.send(*event);
    };
    (observer, rx)
}

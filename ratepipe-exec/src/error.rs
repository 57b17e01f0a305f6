// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ratepipe_core::PipeError;

/// Errors surfaced by a producer/consumer run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The pipe contract was violated.
    #[error(transparent)]
    Pipe(#[from] PipeError),

    /// A spawned task panicked or was aborted.
    #[error("{task} task failed: {reason}")]
    TaskFailed { task: &'static str, reason: String },

    /// The consumer stopped before receiving every produced reading.
    #[error("consumer ended after {received} of {expected} reading(s)")]
    IncompleteDrain { expected: usize, received: usize },

    /// The consumer received a reading out of order.
    #[error("reading at position {position} arrived out of order")]
    OrderViolation { position: usize },
}

impl PipelineError {
    pub(crate) fn task_failed(task: &'static str, error: tokio::task::JoinError) -> Self {
        Self::TaskFailed {
            task,
            reason: error.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, PipelineError>;

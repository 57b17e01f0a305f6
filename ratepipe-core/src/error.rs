// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for pipe operations.
//!
//! Every variant except [`PipeError::Completed`] describes a misuse of the
//! single-writer / single-completion contract. They are returned immediately to
//! the caller and never retried.
//!
//! # Examples
//!
//! ```
//! use ratepipe_core::{unbounded, PipeError};
//!
//! let (mut writer, _reader) = unbounded::<i64>();
//! writer.complete().unwrap();
//!
//! assert_eq!(writer.write(1), Err(PipeError::Closed));
//! assert!(PipeError::Closed.is_protocol_violation());
//! ```

/// Root error type for pipe operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PipeError {
    /// A write was attempted after the writer signaled completion.
    #[error("Pipe is closed: write attempted after completion")]
    Closed,

    /// `complete()` was called more than once.
    #[error("Pipe was already completed")]
    AlreadyCompleted,

    /// The read handle is gone, so written items could never be delivered.
    #[error("Pipe reader has been dropped")]
    ReaderDropped,

    /// Non-blocking read on a pipe that is both drained and completed.
    #[error("Pipe is completed and fully drained")]
    Completed,
}

impl PipeError {
    /// Check if this error indicates a programming error on the writer side
    #[must_use]
    pub const fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::Closed | Self::AlreadyCompleted)
    }

    /// Check if this error is the regular end-of-stream signal
    #[must_use]
    pub const fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Specialized Result type for pipe operations
pub type Result<T> = core::result::Result<T, PipeError>;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core channel types for ratepipe.
//!
//! The centerpiece is the [`pipe`] module: an unbounded, closeable FIFO that hands
//! items from exactly one writer to exactly one reader.

#[macro_use]
mod logging;

pub mod cancellation_token;
pub mod error;
pub mod pipe;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{PipeError, Result};
pub use self::pipe::{unbounded, PipeReader, PipeWriter, ReadAll};

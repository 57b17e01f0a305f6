// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # ratepipe
//!
//! A producer emitting readings at a fixed cadence, a slower consumer, and an unbounded,
//! closeable FIFO pipe between them.
//!
//! ## Overview
//!
//! - [`unbounded`] creates a pipe with one [`PipeWriter`] and one [`PipeReader`]. Writes
//!   never wait; the reader suspends while the pipe is empty and its stream ends once the
//!   writer has completed and every item was read.
//! - [`run_pipeline`] drives a paced producer and consumer over a fresh pipe on two tokio
//!   tasks and returns a [`PipelineReport`] once both are done.
//! - [`demos`] holds the other small performance demonstrations run by the `perf-demo`
//!   binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use futures::StreamExt;
//! use ratepipe::unbounded;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (mut writer, reader) = unbounded::<i64>();
//!
//! tokio::spawn(async move {
//!     for reading in 1..=10 {
//!         writer.write(reading).unwrap();
//!         tokio::time::sleep(std::time::Duration::from_millis(1)).await;
//!     }
//!     writer.complete().unwrap();
//! });
//!
//! let readings: Vec<i64> = reader.read_all().collect().await;
//! assert_eq!(readings, (1..=10).collect::<Vec<_>>());
//! # }
//! ```

pub mod demos;
pub mod telemetry;

pub use ratepipe_core::{unbounded, CancellationToken, PipeError, PipeReader, PipeWriter, ReadAll};
pub use ratepipe_exec::{
    run_pipeline, ConsumePacedExt, PipelineConfig, PipelineError, PipelineEvent,
    PipelineObserver, PipelineReport, Reading,
};
pub use ratepipe_runtime::{Timer, TokioTimer};

pub mod prelude {
    pub use crate::demos::channel::ConsoleObserver;
    pub use ratepipe_core::{unbounded, CancellationToken, PipeError};
    pub use ratepipe_exec::{run_pipeline, ConsumePacedExt, PipelineConfig, PipelineEvent};
    pub use ratepipe_runtime::{Timer, TokioTimer};
}

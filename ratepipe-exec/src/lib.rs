// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Paced producer/consumer tasks over a [`ratepipe_core`] pipe.
//!
//! [`run_pipeline`] spawns a producer writing one reading per interval and a consumer
//! paying a fixed cost per reading, and returns once both have finished.

pub mod config;
pub mod consumer;
pub mod error;
pub mod event;
mod logging;
pub mod pipeline;
pub mod producer;

/// A single simulated sensor reading.
pub type Reading = i64;

pub use config::PipelineConfig;
pub use consumer::{consume, ConsumePacedExt, ConsumerSummary};
pub use error::{PipelineError, Result};
pub use event::{PipelineEvent, PipelineObserver};
pub use pipeline::{run_pipeline, PipelineReport};
pub use producer::{produce, ProducerSummary};

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the ratepipe workspace.
//!
//! - [`RecordingObserver`] keeps every [`PipelineEvent`](ratepipe_exec::PipelineEvent)
//!   of a run for later assertions.
//! - [`event_channel`] forwards events to a tokio channel, for tests that need to
//!   react while the run is still in progress.
//! - [`helpers`] contains receive-with-timeout assertions.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recording_observer;

pub use helpers::{assert_no_recv, recv_timeout};
pub use recording_observer::{event_channel, RecordingObserver};

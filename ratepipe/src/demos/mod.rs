// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Small, independent performance demonstrations.
//!
//! Each demo prints its own trace to stdout and returns a report so it can be checked
//! programmatically. Nothing is shared between demos.

pub mod channel;
pub mod lookup;
pub mod rw_lock;
pub mod slicing;
pub mod task_context;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::Sub;
use core::time::Duration;

/// Source of delays and monotonic time for paced tasks.
///
/// Producers and consumers only ever sleep and read the clock through this trait,
/// so a runtime with a virtual clock makes paced runs instantaneous and deterministic.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy + Debug + Ord + Send + Sync + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// Time elapsed on this timer's clock since `earlier`.
    fn since(&self, earlier: Self::Instant) -> Duration {
        self.now() - earlier
    }
}

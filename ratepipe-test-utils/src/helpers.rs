// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

/// Receives the next item, panicking if nothing arrives within `timeout_ms`.
///
/// Returns `None` if the channel closed.
pub async fn recv_timeout<T>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    tokio::select! {
        item = rx.recv() => item,
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout: No item received within {timeout_ms} ms")
        }
    }
}

/// Asserts that nothing is received for `timeout_ms`.
pub async fn assert_no_recv<T>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) {
    tokio::select! {
        item = rx.recv() => {
            if item.is_some() {
                panic!("Unexpected item received, expected no output.");
            }
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

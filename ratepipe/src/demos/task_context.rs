// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-task context that survives await points.

use std::time::Duration;
use tokio::task::JoinError;

tokio::task_local! {
    static CORRELATION_ID: String;
}

/// The correlation id a request saw before and after its await point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextObservation {
    pub request_id: String,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl ContextObservation {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.before.as_deref() == Some(self.request_id.as_str()) && self.before == self.after
    }
}

/// Correlation id of the current task, if one is in scope.
#[must_use]
pub fn current_correlation_id() -> Option<String> {
    CORRELATION_ID.try_with(String::clone).ok()
}

/// Processes every request concurrently, each inside its own correlation id scope.
///
/// # Errors
///
/// Returns the [`JoinError`] of the first request task that panicked.
pub async fn run(
    request_ids: &[&str],
    delay: Duration,
) -> Result<Vec<ContextObservation>, JoinError> {
    let handles: Vec<_> = request_ids
        .iter()
        .map(|id| {
            let id = (*id).to_string();
            tokio::spawn(CORRELATION_ID.scope(id.clone(), process_request(id, delay)))
        })
        .collect();

    let mut observations = Vec::with_capacity(handles.len());
    for handle in handles {
        observations.push(handle.await?);
    }
    Ok(observations)
}

async fn process_request(request_id: String, delay: Duration) -> ContextObservation {
    let before = current_correlation_id();
    println!("[{request_id}] correlation id at start: {before:?}");

    tokio::time::sleep(delay).await;

    let after = current_correlation_id();
    println!("[{request_id}] correlation id after await: {after:?}");

    ContextObservation {
        request_id,
        before,
        after,
    }
}

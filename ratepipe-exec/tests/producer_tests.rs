// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ratepipe_core::{unbounded, CancellationToken, PipeError};
use ratepipe_exec::{produce, PipelineConfig, PipelineError};
use ratepipe_runtime::{Timer, TokioTimer};
use ratepipe_test_utils::RecordingObserver;
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn test_rejected_write_still_completes_writer() {
    // Arrange
    let (mut writer, reader) = unbounded::<i64>();
    drop(reader);
    let recorder = RecordingObserver::new();

    // Act
    let result = produce(
        &mut writer,
        PipelineConfig::default(),
        TokioTimer,
        Arc::new(recorder.clone()),
        CancellationToken::new(),
        TokioTimer.now(),
    )
    .await;

    // Assert
    assert!(matches!(
        result,
        Err(PipelineError::Pipe(PipeError::ReaderDropped))
    ));
    assert!(writer.is_completed());
    assert!(recorder.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_huge_item_count_allocates_nothing_up_front() -> anyhow::Result<()> {
    // Arrange
    let (mut writer, _reader) = unbounded::<i64>();
    let cancel = CancellationToken::new();
    cancel.cancel();

    // Act
    let summary = produce(
        &mut writer,
        PipelineConfig::default().with_items(usize::MAX),
        TokioTimer,
        Arc::new(RecordingObserver::new()),
        cancel,
        TokioTimer.now(),
    )
    .await?;

    // Assert
    assert!(summary.cancelled);
    assert!(summary.produced.is_empty());
    assert!(writer.is_completed());

    Ok(())
}

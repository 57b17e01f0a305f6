// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use ratepipe_core::unbounded;
use ratepipe_exec::ConsumePacedExt;
use ratepipe_runtime::{Timer, TokioTimer};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_consume_paced_spends_cost_per_item() {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    let received = stream::iter(vec![10, 20, 30])
        .consume_paced(Duration::from_millis(100), timer, |_, _| {})
        .await;

    // Assert
    assert_eq!(received, vec![10, 20, 30]);
    assert_eq!(timer.since(start), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_consume_paced_reports_pipe_backlog() -> anyhow::Result<()> {
    // Arrange
    let (mut writer, reader) = unbounded::<i64>();
    for reading in 1..=4 {
        writer.write(reading)?;
    }
    writer.complete()?;
    let mut backlogs = Vec::new();

    // Act
    let received = reader
        .read_all()
        .consume_paced(Duration::ZERO, TokioTimer, |_, backlog| backlogs.push(backlog))
        .await;

    // Assert
    assert_eq!(received, vec![1, 2, 3, 4]);
    assert_eq!(backlogs, vec![3, 2, 1, 0]);

    Ok(())
}

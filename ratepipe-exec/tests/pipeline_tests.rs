// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ratepipe_core::CancellationToken;
use ratepipe_exec::{run_pipeline, PipelineConfig, PipelineError, PipelineEvent};
use ratepipe_runtime::TokioTimer;
use ratepipe_test_utils::{assert_no_recv, event_channel, recv_timeout, RecordingObserver};
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn test_reference_run_consumes_every_reading_in_order() -> anyhow::Result<()> {
    // Arrange
    let recorder = RecordingObserver::new();
    let expected: Vec<i64> = (1..=10).collect();

    // Act
    let report = run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        recorder.clone(),
        CancellationToken::new(),
    )
    .await?;

    // Assert
    assert_eq!(report.produced, expected);
    assert_eq!(report.consumed, expected);
    assert!(!report.cancelled);
    assert_eq!(recorder.produced_values(), expected);
    assert_eq!(recorder.consumed_values(), expected);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_reference_run_timing() -> anyhow::Result<()> {
    // Arrange
    let recorder = RecordingObserver::new();

    // Act
    let report = run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        recorder.clone(),
        CancellationToken::new(),
    )
    .await?;

    // Assert
    let produced = recorder.produced();
    let consumed = recorder.consumed();
    assert_eq!(produced.last().map(PipelineEvent::at), Some(ms(1800)));
    assert_eq!(consumed.last().map(PipelineEvent::at), Some(ms(4500)));
    assert!(consumed.last().unwrap().at() > produced.last().unwrap().at());

    assert_eq!(report.producer_elapsed, ms(2000));
    assert_eq!(report.consumer_elapsed, ms(5000));
    assert_eq!(report.consumer_lag(), ms(3000));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_backlog_grows_while_consumer_is_slower() -> anyhow::Result<()> {
    // Arrange
    let recorder = RecordingObserver::new();

    // Act
    let report = run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        recorder.clone(),
        CancellationToken::new(),
    )
    .await?;

    // Assert
    // At 1800ms the tenth reading lands while the consumer is still on the fourth.
    assert_eq!(report.max_backlog, 6);
    assert_eq!(recorder.produced().last().map(PipelineEvent::backlog), Some(6));
    assert_eq!(recorder.consumed().last().map(PipelineEvent::backlog), Some(0));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_each_reading_is_produced_before_it_is_consumed() -> anyhow::Result<()> {
    // Arrange
    let recorder = RecordingObserver::new();

    // Act
    run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        recorder.clone(),
        CancellationToken::new(),
    )
    .await?;

    // Assert
    let events = recorder.events();
    assert_eq!(events.len(), 20);
    for value in 1..=10 {
        let produced_at = events
            .iter()
            .position(|e| e.is_produced() && e.value() == value)
            .unwrap();
        let consumed_at = events
            .iter()
            .position(|e| e.is_consumed() && e.value() == value)
            .unwrap();
        assert!(produced_at < consumed_at, "reading {value} consumed before produced");
    }

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_producer_time_is_independent_of_consumer_cost() -> anyhow::Result<()> {
    for cost in [Duration::ZERO, ms(50), ms(500), ms(2000)] {
        // Arrange
        let config = PipelineConfig::default().with_consume_cost(cost);

        // Act
        let report = run_pipeline(
            config.clone(),
            TokioTimer,
            RecordingObserver::new(),
            CancellationToken::new(),
        )
        .await?;

        // Assert
        assert_eq!(report.producer_elapsed, config.expected_producer_time());
        assert_eq!(report.consumed.len(), 10);
    }

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zero_items_completes_immediately() -> anyhow::Result<()> {
    // Arrange
    let recorder = RecordingObserver::new();

    // Act
    let report = run_pipeline(
        PipelineConfig::default().with_items(0),
        TokioTimer,
        recorder.clone(),
        CancellationToken::new(),
    )
    .await?;

    // Assert
    assert!(report.produced.is_empty());
    assert!(report.consumed.is_empty());
    assert!(recorder.events().is_empty());
    assert_eq!(report.producer_elapsed, Duration::ZERO);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_completes_once_and_drains_written_readings() -> anyhow::Result<()> {
    // Arrange
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(ms(650)).await;
        trigger.cancel();
    });

    // Act
    let report = run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        RecordingObserver::new(),
        cancel,
    )
    .await?;

    // Assert
    assert!(report.cancelled);
    assert_eq!(report.produced, vec![1, 2, 3, 4]);
    assert_eq!(report.consumed, vec![1, 2, 3, 4]);
    assert_eq!(report.producer_elapsed, ms(650));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_before_start_writes_nothing() -> anyhow::Result<()> {
    // Arrange
    let cancel = CancellationToken::new();
    cancel.cancel();

    // Act
    let report = run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        RecordingObserver::new(),
        cancel,
    )
    .await?;

    // Assert
    assert!(report.cancelled);
    assert!(report.produced.is_empty());
    assert!(report.consumed.is_empty());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_pre_cancelled_run_with_huge_item_count() -> anyhow::Result<()> {
    // Arrange
    let cancel = CancellationToken::new();
    cancel.cancel();

    // Act
    let report = run_pipeline(
        PipelineConfig::default().with_items(usize::MAX),
        TokioTimer,
        RecordingObserver::new(),
        cancel,
    )
    .await?;

    // Assert
    assert!(report.cancelled);
    assert!(report.produced.is_empty());
    assert!(report.consumed.is_empty());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_consumer_panic_is_reported_after_both_tasks_end() {
    // Arrange
    let observer = |event: &PipelineEvent| {
        if event.is_consumed() && event.value() == 3 {
            panic!("observer failure");
        }
    };

    // Act
    let result = run_pipeline(
        PipelineConfig::default(),
        TokioTimer,
        observer,
        CancellationToken::new(),
    )
    .await;

    // Assert
    assert!(matches!(
        result,
        Err(PipelineError::TaskFailed {
            task: "consumer",
            ..
        })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_events_stream_in_real_time() -> anyhow::Result<()> {
    // Arrange
    let (observer, mut events) = event_channel();

    // Act
    let run = tokio::spawn(run_pipeline(
        PipelineConfig::default().with_items(2),
        TokioTimer,
        observer,
        CancellationToken::new(),
    ));

    // Assert
    let first = recv_timeout(&mut events, 100).await;
    assert!(matches!(
        first,
        Some(PipelineEvent::Produced { value: 1, .. })
    ));

    let report = run.await??;
    assert_eq!(report.consumed, vec![1, 2]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unpaced_run_on_worker_threads_drains_everything() -> anyhow::Result<()> {
    // Arrange
    let config = PipelineConfig::default()
        .with_items(500)
        .with_produce_interval(Duration::ZERO)
        .with_consume_cost(Duration::ZERO);

    // Act
    let report = run_pipeline(
        config,
        TokioTimer,
        RecordingObserver::new(),
        CancellationToken::new(),
    )
    .await?;

    // Assert
    assert_eq!(report.consumed, (1..=500).collect::<Vec<i64>>());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_nothing_arrives_between_paced_writes() -> anyhow::Result<()> {
    // Arrange
    let (observer, mut events) = event_channel();
    let run = tokio::spawn(run_pipeline(
        PipelineConfig::default().with_items(2),
        TokioTimer,
        observer,
        CancellationToken::new(),
    ));

    // Act & Assert
    assert!(matches!(
        recv_timeout(&mut events, 10).await,
        Some(PipelineEvent::Produced { value: 1, .. })
    ));
    assert!(matches!(
        recv_timeout(&mut events, 10).await,
        Some(PipelineEvent::Consumed { value: 1, .. })
    ));

    // The next write is due at 200ms.
    assert_no_recv(&mut events, 150).await;
    assert!(matches!(
        recv_timeout(&mut events, 100).await,
        Some(PipelineEvent::Produced { value: 2, .. })
    ));

    run.await??;

    Ok(())
}

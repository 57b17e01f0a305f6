// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unbounded single-producer / single-consumer pipe with explicit completion.
//!
//! [`unbounded`] returns two capability-restricted handles:
//!
//! - [`PipeWriter`]: the only way to push items and the only way to complete the pipe.
//! - [`PipeReader`]: the only way to take items out, either one at a time or as a
//!   lazy [`ReadAll`] stream.
//!
//! Neither handle is `Clone`, so a pipe always has exactly one writer and one reader.
//! Writing and completing take `&mut self`: sharing a `&PipeWriter` between tasks gives
//! no way to write, so concurrent writers or completers do not type-check.
//! Writes never wait for the reader: the queue grows as needed. The reader suspends
//! while the queue is empty and resumes as soon as an item arrives or the writer
//! completes. Once the pipe is completed and drained, the stream ends.
//!
//! # Example
//!
//! ```
//! use futures::StreamExt;
//! use ratepipe_core::unbounded;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (mut writer, reader) = unbounded::<i64>();
//!
//! let producer = tokio::spawn(async move {
//!     for reading in 1..=3 {
//!         writer.write(reading).unwrap();
//!     }
//!     writer.complete().unwrap();
//! });
//!
//! let received: Vec<i64> = reader.read_all().collect().await;
//! producer.await.unwrap();
//!
//! assert_eq!(received, vec![1, 2, 3]);
//! # }
//! ```

use crate::error::{PipeError, Result};
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use futures::future::poll_fn;
use futures::ready;
use futures::stream::{FusedStream, Stream};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

struct PipeState<T> {
    queue: VecDeque<T>,
    completed: bool,
    reader_alive: bool,
}

struct Shared<T> {
    state: Mutex<PipeState<T>>,
    // Fired on every write and on completion.
    event: Event,
}

impl<T> Shared<T> {
    fn len(&self) -> usize {
        self.state.lock().queue.len()
    }

    fn is_completed(&self) -> bool {
        self.state.lock().completed
    }

    /// Marks the pipe completed. Returns `false` if it already was.
    fn close(&self) -> bool {
        {
            let mut state = self.state.lock();
            if state.completed {
                return false;
            }
            state.completed = true;
        }
        self.event.notify(usize::MAX);
        true
    }
}

/// Creates a new unbounded pipe and returns its write and read handles.
#[must_use]
pub fn unbounded<T>() -> (PipeWriter<T>, PipeReader<T>) {
    let shared = Arc::new(Shared {
        state: Mutex::new(PipeState {
            queue: VecDeque::new(),
            completed: false,
            reader_alive: true,
        }),
        event: Event::new(),
    });

    (
        PipeWriter {
            shared: shared.clone(),
        },
        PipeReader {
            shared,
            listener: None,
        },
    )
}

/// Write end of a pipe.
///
/// Dropping the writer without calling [`complete`](Self::complete) completes the
/// pipe implicitly, so the reader never waits on an abandoned writer.
///
/// A shared writer cannot write:
///
/// ```compile_fail
/// use ratepipe_core::unbounded;
/// use std::sync::Arc;
///
/// let (writer, _reader) = unbounded::<i64>();
/// let shared = Arc::new(writer);
/// shared.write(1).unwrap();
/// ```
pub struct PipeWriter<T> {
    shared: Arc<Shared<T>>,
}

impl<T> PipeWriter<T> {
    /// Appends `item` to the tail of the queue and wakes the reader.
    ///
    /// Returns the number of items queued right after this write, i.e. the backlog
    /// the reader still has to work through.
    ///
    /// # Errors
    ///
    /// - [`PipeError::Closed`] if the pipe has already been completed.
    /// - [`PipeError::ReaderDropped`] if the read handle no longer exists.
    pub fn write(&mut self, item: T) -> Result<usize> {
        let backlog = {
            let mut state = self.shared.state.lock();
            if state.completed {
                return Err(PipeError::Closed);
            }
            if !state.reader_alive {
                return Err(PipeError::ReaderDropped);
            }
            state.queue.push_back(item);
            state.queue.len()
        };
        self.shared.event.notify(1);
        Ok(backlog)
    }

    /// Signals that no more items will be written.
    ///
    /// Items already queued stay readable; the reader's stream ends after them.
    /// The writer stays usable afterwards so that misuse surfaces as an error
    /// rather than a moved-value compile error at a distant call site.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::AlreadyCompleted`] on every call after the first.
    pub fn complete(&mut self) -> Result<()> {
        if self.shared.close() {
            debug!("pipe completed with {} item(s) still queued", self.shared.len());
            Ok(())
        } else {
            Err(PipeError::AlreadyCompleted)
        }
    }

    /// Number of items written but not yet read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.shared.is_completed()
    }
}

impl<T> Drop for PipeWriter<T> {
    fn drop(&mut self) {
        if self.shared.close() {
            warn!("pipe writer dropped without complete(), completing implicitly");
        }
    }
}

impl<T> fmt::Debug for PipeWriter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeWriter")
            .field("len", &self.len())
            .field("completed", &self.is_completed())
            .finish()
    }
}

/// Read end of a pipe.
pub struct PipeReader<T> {
    shared: Arc<Shared<T>>,
    listener: Option<EventListener>,
}

impl<T> PipeReader<T> {
    /// Takes the head of the queue without waiting.
    ///
    /// Returns `Ok(None)` when the queue is empty but the writer may still write.
    ///
    /// # Errors
    ///
    /// Returns [`PipeError::Completed`] once the pipe is completed and drained.
    pub fn try_read(&mut self) -> Result<Option<T>> {
        let mut state = self.shared.state.lock();
        match state.queue.pop_front() {
            Some(item) => Ok(Some(item)),
            None if state.completed => Err(PipeError::Completed),
            None => Ok(None),
        }
    }

    /// Waits for the next item. Resolves to `None` once the pipe is completed and drained.
    pub async fn recv(&mut self) -> Option<T> {
        poll_fn(|cx| self.poll_read(cx)).await
    }

    /// Polls for the next item, registering the task for wakeup while the queue is empty.
    pub fn poll_read(&mut self, cx: &mut Context<'_>) -> Poll<Option<T>> {
        loop {
            {
                let mut state = self.shared.state.lock();
                if let Some(item) = state.queue.pop_front() {
                    self.listener = None;
                    return Poll::Ready(Some(item));
                }
                if state.completed {
                    self.listener = None;
                    return Poll::Ready(None);
                }
            }

            match self.listener.as_mut() {
                // Register first, then loop to re-check: a write landing between the
                // check above and `listen()` must not be missed.
                None => self.listener = Some(self.shared.event.listen()),
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => self.listener = None,
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }

    /// Turns the reader into a lazy stream of every remaining item.
    ///
    /// The stream is finite and cannot be restarted.
    #[must_use]
    pub fn read_all(self) -> ReadAll<T> {
        ReadAll {
            reader: self,
            finished: false,
        }
    }

    /// Number of items written but not yet read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once the writer has completed, even if items are still queued.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.shared.is_completed()
    }
}

impl<T> Drop for PipeReader<T> {
    fn drop(&mut self) {
        let mut state = self.shared.state.lock();
        state.reader_alive = false;
        state.queue.clear();
    }
}

impl<T> fmt::Debug for PipeReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeReader")
            .field("len", &self.len())
            .field("completed", &self.is_completed())
            .finish()
    }
}

/// Stream returned by [`PipeReader::read_all`].
#[derive(Debug)]
pub struct ReadAll<T> {
    reader: PipeReader<T>,
    finished: bool,
}

impl<T> ReadAll<T> {
    /// Number of items still waiting in the pipe.
    #[must_use]
    pub fn backlog(&self) -> usize {
        self.reader.len()
    }
}

impl<T> Stream for ReadAll<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }

        let next = ready!(this.reader.poll_read(cx));
        if next.is_none() {
            this.finished = true;
        }
        Poll::Ready(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (self.reader.len(), None)
        }
    }
}

impl<T> FusedStream for ReadAll<T> {
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

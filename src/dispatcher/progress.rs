//! Progress observation for requests that report incremental progress.
//!
//! The observer side is handed to the dispatcher and may be cloned and
//! called from any thread. The buffer side stays with the awaiting task and
//! is drained once the terminal result has arrived.

use std::fmt;

use tokio::sync::mpsc;

/// Progress callback handed to a [`Dispatcher`](super::Dispatcher).
pub struct ProgressObserver<P> {
    sender: mpsc::UnboundedSender<P>,
}

impl<P> ProgressObserver<P> {
    /// Create an observer and the buffer that collects its events.
    pub(crate) fn channel() -> (Self, ProgressBuffer<P>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, ProgressBuffer { receiver })
    }

    /// Report one progress event.
    ///
    /// Events are kept in the order they arrive. Events reported after the
    /// request has completed, or after the caller stopped waiting, are
    /// dropped.
    pub fn notify(&self, event: P) {
        let _ = self.sender.send(event);
    }
}

impl<P> Clone for ProgressObserver<P> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<P> fmt::Debug for ProgressObserver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressObserver")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

/// Receiving side of a [`ProgressObserver`], owned by the awaiting task.
pub(crate) struct ProgressBuffer<P> {
    receiver: mpsc::UnboundedReceiver<P>,
}

impl<P> ProgressBuffer<P> {
    /// Take every event reported so far, in arrival order.
    ///
    /// Called after the completion has been received; since progress
    /// precedes completion, everything the dispatcher reported is already
    /// queued.
    pub(crate) fn drain(mut self) -> Vec<P> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

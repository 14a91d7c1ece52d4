//! Async request bridge over a callback-based [`Dispatcher`].
//!
//! Each call registers a oneshot receiver, hands the matching
//! [`Completion`] to the dispatcher, and awaits the receiver. Nothing is
//! locked while waiting, and the dispatcher is free to complete from any
//! thread or executor.
//!
//! # Operations
//!
//! - [`RequestBridge::request`]: await the response
//! - [`RequestBridge::request_with_progress`]: await the ordered progress events
//!
//! Both are pure pass-through: the dispatcher's error is returned as is, with
//! no retry and no deadline. A dispatcher that never completes leaves the
//! caller waiting forever.
//!
//! The `_bounded` variants add the configured [`RequestTimeout`] and report a
//! dropped completion handle as [`BridgeError::Abandoned`] instead of hanging.

mod error_types;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use error_types::BridgeError;

use tokio::sync::oneshot;

use crate::config::{BridgeSettings, RequestTimeout};
use crate::dispatcher::{Completion, Dispatcher, ProgressObserver};

type DispatchOutcome<D> = Result<<D as Dispatcher>::Response, <D as Dispatcher>::Error>;

/// Converts one dispatcher invocation into one awaitable result.
#[derive(Debug)]
pub struct RequestBridge<D> {
    dispatcher: D,
    timeout: Option<RequestTimeout>,
}

impl<D: Dispatcher> RequestBridge<D> {
    /// Create a bridge with no deadline for bounded requests.
    pub fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            timeout: None,
        }
    }

    /// Create a bridge configured from `settings`.
    pub fn with_settings(dispatcher: D, settings: &BridgeSettings) -> crate::Result<Self> {
        Ok(Self::new(dispatcher).with_timeout(settings.request_timeout()?))
    }

    /// Replace the deadline used by the bounded operations.
    pub fn with_timeout(mut self, timeout: Option<RequestTimeout>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline used by the bounded operations.
    pub fn timeout(&self) -> Option<RequestTimeout> {
        self.timeout
    }

    /// The wrapped dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Unwrap the bridge, returning the dispatcher.
    pub fn into_inner(self) -> D {
        self.dispatcher
    }

    /// Send `target` and wait for its response.
    ///
    /// The dispatcher is invoked exactly once, without a progress observer.
    /// Its failure is returned unchanged.
    pub async fn request(
        &self,
        target: D::Target,
        queue: Option<D::Queue>,
    ) -> Result<D::Response, D::Error> {
        let receiver = self.dispatch(target, queue, None);
        match receiver.await {
            Ok(outcome) => outcome,
            Err(_) => hang_after_abandonment().await,
        }
    }

    /// Send `target` and wait for completion, collecting progress events.
    ///
    /// Resolves to every event the dispatcher reported before completing,
    /// in arrival order (empty if there were none). On failure the error is
    /// returned unchanged and the partial progress is discarded.
    pub async fn request_with_progress(
        &self,
        target: D::Target,
        queue: Option<D::Queue>,
    ) -> Result<Vec<D::Progress>, D::Error> {
        let (observer, buffer) = ProgressObserver::channel();
        let receiver = self.dispatch(target, queue, Some(observer));
        match receiver.await {
            Ok(Ok(_response)) => Ok(buffer.drain()),
            Ok(Err(error)) => Err(error),
            Err(_) => hang_after_abandonment().await,
        }
    }

    /// Like [`request`](Self::request), but gives up after the configured
    /// deadline and reports a dropped completion handle.
    ///
    /// Timing out does not cancel the underlying dispatch.
    pub async fn request_bounded(
        &self,
        target: D::Target,
        queue: Option<D::Queue>,
    ) -> Result<D::Response, BridgeError<D::Error>> {
        let receiver = self.dispatch(target, queue, None);
        self.await_bounded(receiver)
            .await?
            .map_err(BridgeError::Dispatcher)
    }

    /// Like [`request_with_progress`](Self::request_with_progress), but gives
    /// up after the configured deadline and reports a dropped completion
    /// handle.
    pub async fn request_with_progress_bounded(
        &self,
        target: D::Target,
        queue: Option<D::Queue>,
    ) -> Result<Vec<D::Progress>, BridgeError<D::Error>> {
        let (observer, buffer) = ProgressObserver::channel();
        let receiver = self.dispatch(target, queue, Some(observer));
        match self.await_bounded(receiver).await? {
            Ok(_response) => Ok(buffer.drain()),
            Err(error) => Err(BridgeError::Dispatcher(error)),
        }
    }

    /// Hand a fresh completion handle to the dispatcher.
    ///
    /// The receiver exists before `send` runs, so a dispatcher that completes
    /// synchronously is observed on the first poll.
    fn dispatch(
        &self,
        target: D::Target,
        queue: Option<D::Queue>,
        progress: Option<ProgressObserver<D::Progress>>,
    ) -> oneshot::Receiver<DispatchOutcome<D>> {
        let (completion, receiver) = Completion::channel();
        log::debug!(
            target: "callback_bridge::bridge",
            "Dispatching request (queue: {}, progress: {})",
            if queue.is_some() { "caller" } else { "default" },
            progress.is_some()
        );
        self.dispatcher.send(target, queue, progress, completion);
        receiver
    }

    async fn await_bounded(
        &self,
        receiver: oneshot::Receiver<DispatchOutcome<D>>,
    ) -> Result<DispatchOutcome<D>, BridgeError<D::Error>> {
        let received = match self.timeout {
            Some(timeout) => {
                let deadline = timeout.as_duration();
                match tokio::time::timeout(deadline, receiver).await {
                    Ok(received) => received,
                    Err(_) => {
                        log::debug!(
                            target: "callback_bridge::bridge",
                            "Request timed out after {:?}; dispatch keeps running",
                            deadline
                        );
                        return Err(BridgeError::Timeout { timeout: deadline });
                    }
                }
            }
            None => receiver.await,
        };

        received.map_err(|_| {
            log::warn!(
                target: "callback_bridge::bridge",
                "Dispatcher dropped a completion handle without completing"
            );
            BridgeError::Abandoned
        })
    }
}

/// Park the caller forever once the completion handle is gone.
///
/// The unbounded operations have no way to report this, so they behave as if
/// the completion never arrives.
async fn hang_after_abandonment<T>() -> T {
    log::warn!(
        target: "callback_bridge::bridge",
        "Dispatcher dropped a completion handle without completing; caller will wait forever"
    );
    std::future::pending().await
}

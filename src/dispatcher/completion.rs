//! One-shot resumption handle for a suspended request.

use std::fmt;

use tokio::sync::oneshot;

/// Completion callback handed to a [`Dispatcher`](super::Dispatcher).
///
/// Wraps the sending half of a oneshot channel whose receiver is awaited by
/// the bridge. All completing methods take `self`, so the terminal result
/// is delivered at most once.
pub struct Completion<R, E> {
    sender: oneshot::Sender<Result<R, E>>,
}

impl<R, E> Completion<R, E> {
    /// Create a completion handle and the receiver the bridge awaits on.
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Result<R, E>>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Deliver the terminal result.
    ///
    /// If the awaiting caller has already gone away (its future was dropped
    /// or a bounded request timed out) the result is discarded.
    pub fn complete(self, result: Result<R, E>) {
        if self.sender.send(result).is_err() {
            log::debug!(
                target: "callback_bridge::dispatcher",
                "Completion delivered after the caller stopped waiting; result discarded"
            );
        }
    }

    /// Deliver a successful response.
    pub fn succeed(self, response: R) {
        self.complete(Ok(response));
    }

    /// Deliver a failure.
    pub fn fail(self, error: E) {
        self.complete(Err(error));
    }

    /// Whether the awaiting caller has stopped waiting.
    ///
    /// Dispatchers may use this to skip work nobody will observe. The
    /// bridge never cancels a dispatch on its own.
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<R, E> fmt::Debug for Completion<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}

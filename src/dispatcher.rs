//! The callback-based request dispatcher the bridge wraps.
//!
//! A dispatcher performs the actual request work on whatever executor it
//! chooses and reports back through two callbacks:
//!
//! - [`ProgressObserver`]: zero or more progress events, strictly before completion
//! - [`Completion`]: exactly one terminal `Result`
//!
//! `Completion` is consumed when invoked, so a dispatcher cannot resume a
//! caller twice. Dropping it without invoking it is possible and is how an
//! abandoned request shows up on the awaiting side.

mod completion;
mod progress;

pub use completion::Completion;
pub use progress::ProgressObserver;

use std::sync::Arc;

/// A fire-and-forget request sender with callback-style completion.
///
/// Every associated type is opaque to the bridge: targets and queues are
/// moved into [`send`](Dispatcher::send) untouched, and responses, progress
/// events and errors are handed back to the caller untouched.
pub trait Dispatcher {
    /// Description of what to request.
    type Target;
    /// Where callbacks are delivered. `None` lets the dispatcher choose.
    type Queue;
    /// Success payload.
    type Response;
    /// Incremental progress unit.
    type Progress;
    /// Failure payload.
    type Error;

    /// Start a request.
    ///
    /// Must eventually consume `completion` exactly once. May call
    /// `progress.notify` any number of times before that; events delivered
    /// after completion are not observed by the bridge.
    fn send(
        &self,
        target: Self::Target,
        queue: Option<Self::Queue>,
        progress: Option<ProgressObserver<Self::Progress>>,
        completion: Completion<Self::Response, Self::Error>,
    );
}

impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    type Target = D::Target;
    type Queue = D::Queue;
    type Response = D::Response;
    type Progress = D::Progress;
    type Error = D::Error;

    fn send(
        &self,
        target: Self::Target,
        queue: Option<Self::Queue>,
        progress: Option<ProgressObserver<Self::Progress>>,
        completion: Completion<Self::Response, Self::Error>,
    ) {
        (**self).send(target, queue, progress, completion)
    }
}

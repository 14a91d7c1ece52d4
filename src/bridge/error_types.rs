//! Errors returned by the bounded request operations.

use std::time::Duration;

use thiserror::Error;

/// Failure of a bounded bridge request.
///
/// Dispatcher errors pass through unchanged inside [`BridgeError::Dispatcher`];
/// the other variants cover outcomes only the bounded path can observe.
#[derive(Debug, Error)]
pub enum BridgeError<E> {
    /// The dispatcher completed with a failure.
    #[error(transparent)]
    Dispatcher(E),

    /// No completion arrived before the configured deadline.
    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The dispatcher dropped its completion handle without completing.
    #[error("dispatcher dropped the request without completing it")]
    Abandoned,
}

impl<E> BridgeError<E> {
    /// True for [`BridgeError::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, BridgeError::Timeout { .. })
    }

    /// The dispatcher's own error, if that is what this is.
    pub fn into_dispatcher_error(self) -> Option<E> {
        match self {
            BridgeError::Dispatcher(error) => Some(error),
            _ => None,
        }
    }
}
